// Header -> sample block -> trailer

use crate::core::constants::DATA_START_OFFSET;
use crate::core::cursor::ByteCursor;
use crate::core::error::Result;
use crate::core::format::{DecodeConfig, Ea3File, Metadata};
use crate::core::header::read_header;
use crate::core::samples::read_samples;
use crate::core::trailer::read_trailer;
use tracing::debug;

/// Decode a whole EA3 file held in memory, using the default scaling.
pub fn decode(data: &[u8]) -> Result<Ea3File> {
    decode_with_config(data, &DecodeConfig::default())
}

/// Decode a whole EA3 file held in memory.
///
/// Header and sample block problems are errors. The trailer is best-effort
/// and only ever degrades `title`/`comment`.
pub fn decode_with_config(data: &[u8], config: &DecodeConfig) -> Result<Ea3File> {
    let header = read_header(data)?;
    debug!(
        "EA3 header: raw_points={}, rate={}, channels={}",
        header.raw_point_count, header.sampling_rate, header.channel_count
    );

    let mut cursor = ByteCursor::at(data, DATA_START_OFFSET);
    let series = read_samples(&mut cursor, &header, config.scale_factor)?;
    let trailer = read_trailer(&mut cursor, config.text_encoding);
    debug!("EA3 trailer stop: {:?}", trailer.stop);

    let metadata = Metadata::new(&header, series.len(), trailer, config.scale_factor);

    Ok(Ea3File { series, metadata })
}
