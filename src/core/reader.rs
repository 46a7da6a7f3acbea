// EA3 file reader: loads the whole file, decodes it once, serves signals

use crate::core::decoder::decode_with_config;
use crate::core::error::{Ea3Error, Result};
use crate::core::format::*;
use std::path::{Path, PathBuf};
use tracing::info;

pub const SIGNAL_X: &str = "data_x";
pub const SIGNAL_Y: &str = "data_y";

const SIGNALS: [(u32, &str); 2] = [(0, SIGNAL_X), (1, SIGNAL_Y)];

pub struct Ea3Reader {
    path: Option<PathBuf>,
    file: Ea3File,
}

impl Ea3Reader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, &DecodeConfig::default())
    }

    pub fn open_with_config<P: AsRef<Path>>(path: P, config: &DecodeConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = std::fs::read(&path)?;

        let file = decode_with_config(&data, config)?;
        info!(
            "Decoded {}: {} points",
            path.display(),
            file.metadata.valid_point_count
        );

        Ok(Self {
            path: Some(path),
            file,
        })
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let file = decode_with_config(data, &DecodeConfig::default())?;
        Ok(Self { path: None, file })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.file.metadata
    }

    pub fn series(&self) -> &SampleSeries {
        &self.file.series
    }

    pub fn list_signals(&self) -> Vec<(u32, &str)> {
        SIGNALS.to_vec()
    }

    pub fn get_signal_id_by_name(&self, name: &str) -> Option<u32> {
        SIGNALS
            .iter()
            .find(|(_, signal)| *signal == name)
            .map(|(id, _)| *id)
    }

    /// Seconds per sample, or 1.0 (index axis) when the header has no rate.
    fn sample_period(&self) -> f64 {
        match self.file.metadata.sampling_rate {
            0 => 1.0,
            rate => 1.0 / f64::from(rate),
        }
    }

    pub fn read_signal(&self, signal_id: u32) -> Result<TimeseriesChunk> {
        let values = match signal_id {
            0 => &self.file.series.x_values,
            1 => &self.file.series.y_values,
            other => return Err(Ea3Error::SignalNotFound(other.to_string())),
        };

        let period = self.sample_period();
        let mut chunk = TimeseriesChunk::with_capacity(values.len());
        for (i, value) in values.iter().enumerate() {
            chunk.timestamps.push(i as f64 * period);
            chunk.values.push(*value);
        }

        Ok(chunk)
    }

    pub fn read_signal_by_name(&self, name: &str) -> Result<TimeseriesChunk> {
        let id = self
            .get_signal_id_by_name(name)
            .ok_or_else(|| Ea3Error::SignalNotFound(name.to_string()))?;
        self.read_signal(id)
    }
}
