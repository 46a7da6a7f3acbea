// EA3 Rust Reader
// Main library entry point

pub mod core;

// Re-export main types
pub use crate::core::error::{Ea3Error, Result};
pub use crate::core::reader::{Ea3Reader, SIGNAL_X, SIGNAL_Y};
pub use crate::core::decoder::{decode, decode_with_config};
pub use crate::core::format::{DecodeConfig, Ea3File, Metadata, SampleSeries, Trailer, TrailerStop};
pub use crate::core::serializer::to_csv;
pub use crate::core::data_handle::handle_ws_fetch;

#[cfg(test)]
mod tests {
    #[test]
    fn test_constants() {
        use crate::core::constants::*;
        assert_eq!(SEPARATOR_MARKER.to_le_bytes(), [0x78, 0x56, 0x34, 0x12]);
        assert_eq!(DATA_START_OFFSET, 256);
        assert_eq!(SCALE_FACTOR, 3276.8);
    }
}
