// Error handling for EA3 reader

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Ea3Error>;

#[derive(Error, Debug)]
pub enum Ea3Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Truncated header: expected 256 bytes, got {0}")]
    TruncatedHeader(usize),

    #[error("Unsupported channel count: {0} (only single-channel files are supported)")]
    UnsupportedChannelCount(u8),

    #[error("Empty or invalid point count: {0}")]
    EmptyOrInvalidPointCount(u32),

    #[error("Truncated sample block: expected {expected} bytes, got {available}")]
    TruncatedSampleBlock { expected: usize, available: usize },

    #[error("Malformed sample block: {0} bytes is not a whole number of samples")]
    MalformedSampleBlock(usize),

    #[error("Signal not found: {0}")]
    SignalNotFound(String),
}
