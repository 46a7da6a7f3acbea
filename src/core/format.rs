// Data structures for EA3 format

use crate::core::constants::SCALE_FACTOR;
use encoding_rs::{Encoding, SHIFT_JIS};
use serde::{Deserialize, Serialize};

/// Fixed fields pulled from the 256-byte header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHeader {
    pub raw_point_count: u32,
    pub sampling_rate: u16,
    pub channel_count: u8,
}

/// Decoder settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeConfig {
    /// Raw samples are divided by this to get physical units.
    pub scale_factor: f64,
    /// Encoding of the trailer strings (instrument firmware writes Shift_JIS).
    pub text_encoding: &'static Encoding,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            scale_factor: SCALE_FACTOR,
            text_encoding: SHIFT_JIS,
        }
    }
}

/// Decoded waveform. `x_values[i]` pairs with `y_values[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSeries {
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
}

impl SampleSeries {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            x_values: Vec::with_capacity(cap),
            y_values: Vec::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// `(x, y)` pairs in stream order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_values
            .iter()
            .copied()
            .zip(self.y_values.iter().copied())
    }
}

/// Where trailer parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailerStop {
    /// No title length prefix after the samples (and separator, if any).
    MissingTitleLength,
    /// Title handled; no comment length prefix follows.
    MissingCommentLength,
    /// Both strings were handled.
    Complete,
    /// Declared text bytes ran past the end of the buffer.
    Fault(String),
}

/// Optional metadata following the sample block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trailer {
    pub title: String,
    pub comment: String,
    pub separator_found: bool,
    pub stop: TrailerStop,
}

impl Default for Trailer {
    fn default() -> Self {
        Self {
            title: String::new(),
            comment: String::new(),
            separator_found: false,
            stop: TrailerStop::MissingTitleLength,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub raw_point_count: u32,
    pub valid_point_count: usize,
    pub sampling_rate: u16,
    pub channel_count: u8,
    pub title: String,
    pub comment: String,
    pub scale_factor: f64,
    pub separator_found: bool,
    /// Tells a decoded title apart from a diagnostic placeholder.
    pub trailer_stop: TrailerStop,
}

impl Metadata {
    pub fn new(header: &RawHeader, valid_point_count: usize, trailer: Trailer, scale_factor: f64) -> Self {
        Self {
            raw_point_count: header.raw_point_count,
            valid_point_count,
            sampling_rate: header.sampling_rate,
            channel_count: header.channel_count,
            title: trailer.title,
            comment: trailer.comment,
            scale_factor,
            separator_found: trailer.separator_found,
            trailer_stop: trailer.stop,
        }
    }
}

/// Successful decode output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ea3File {
    pub series: SampleSeries,
    pub metadata: Metadata,
}

/// One signal's samples laid out on a time axis.
#[derive(Debug, Clone)]
pub struct TimeseriesChunk {
    pub timestamps: Vec<f64>,
    pub values: Vec<f64>,
}

impl TimeseriesChunk {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(cap),
            values: Vec::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
