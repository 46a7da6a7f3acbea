pub mod constants;
pub mod cursor;
pub mod data_handle;
pub mod decoder;
pub mod error;
pub mod format;
pub mod header;
pub mod reader;
pub mod samples;
pub mod serializer;
pub mod trailer;

#[cfg(test)]
pub(crate) mod testutil;
