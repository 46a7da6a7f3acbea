// Example usage of the EA3 reader

use anyhow::Context;
use ea3_reader::{to_csv, Ea3Reader, SIGNAL_X, SIGNAL_Y};
use tracing::{debug, info, Level};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "data/sample.ea3".to_string());
    let csv_out = args.next();

    let reader = Ea3Reader::open(&path).with_context(|| format!("decoding {}", path))?;
    let meta = reader.metadata();

    info!("File: {}", path);
    info!("  Points: {} (raw {})", meta.valid_point_count, meta.raw_point_count);
    info!("  Sampling rate: {} Hz", meta.sampling_rate);
    info!("  Scaling: 1/{}", meta.scale_factor);
    if !meta.title.is_empty() {
        info!("  Title: {}", meta.title);
    }
    if !meta.comment.is_empty() {
        info!("  Comment: {}", meta.comment);
    }

    for name in [SIGNAL_X, SIGNAL_Y] {
        let data = reader.read_signal_by_name(name)?;
        info!("Signal '{}': {} records", name, data.len());

        if !data.is_empty() {
            let last = data.len() - 1;
            debug!("  First: ts={}, value={}", data.timestamps[0], data.values[0]);
            debug!("  Last: ts={}, value={}", data.timestamps[last], data.values[last]);
        }
    }

    if let Some(out) = csv_out {
        let text = to_csv(reader.series(), meta.valid_point_count);
        std::fs::write(&out, text).with_context(|| format!("writing {}", out))?;
        info!("CSV written to {}", out);
    }

    Ok(())
}
