// Format constants for EA3

// Header block: fixed 256 bytes, samples start right after it
pub const HEADER_SIZE: usize = 256;
pub const DATA_START_OFFSET: usize = HEADER_SIZE;

// Header field offsets
pub const RAW_POINT_COUNT_OFFSET: usize = 8; // u32 LE
pub const SAMPLING_RATE_OFFSET: usize = 16; // u16 LE
pub const CHANNEL_COUNT_OFFSET: usize = 18; // u8

pub const SUPPORTED_CHANNEL_COUNT: u8 = 1;

// Sample pair: x(i16) y(i16)
pub const SAMPLE_WIDTH: usize = 2;
pub const POINT_SIZE: usize = 2 * SAMPLE_WIDTH; // 4 bytes

/// Raw i16 counts per physical unit.
pub const SCALE_FACTOR: f64 = 3276.8;

// Trailer: [SEPARATOR_MARKER] title_len(u32) title comment_len(u32) comment
pub const SEPARATOR_MARKER: u32 = 0x1234_5678;
pub const LENGTH_PREFIX_SIZE: usize = 4;
pub const TITLE_MAX_LEN: u32 = 1000; // exclusive
pub const COMMENT_MAX_LEN: u32 = 5000; // exclusive

pub const CORRUPT_TITLE_PLACEHOLDER: &str = "<title unreadable: invalid length>";
pub const TRAILER_ERROR_PREFIX: &str = "<title unreadable";

// Text output
pub const CSV_PREAMBLE: &str = "DV,";
pub const POINT_COUNT_LABEL: &str = "データ点数";
pub const COLUMN_Y: &str = "データＹ";
pub const COLUMN_X: &str = "データＸ";
