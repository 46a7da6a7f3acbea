// Fixed 256-byte header

use crate::core::constants::*;
use crate::core::error::{Ea3Error, Result};
use crate::core::format::RawHeader;

pub fn read_header(data: &[u8]) -> Result<RawHeader> {
    if data.len() < HEADER_SIZE {
        return Err(Ea3Error::TruncatedHeader(data.len()));
    }

    let raw_point_count = u32::from_le_bytes([
        data[RAW_POINT_COUNT_OFFSET],
        data[RAW_POINT_COUNT_OFFSET + 1],
        data[RAW_POINT_COUNT_OFFSET + 2],
        data[RAW_POINT_COUNT_OFFSET + 3],
    ]);
    let sampling_rate =
        u16::from_le_bytes([data[SAMPLING_RATE_OFFSET], data[SAMPLING_RATE_OFFSET + 1]]);
    let channel_count = data[CHANNEL_COUNT_OFFSET];

    Ok(RawHeader {
        raw_point_count,
        sampling_rate,
        channel_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testutil::Ea3Builder;

    #[test]
    fn test_short_buffer() {
        for len in [0, 1, 19, 255] {
            let data = vec![0u8; len];
            assert!(matches!(
                read_header(&data),
                Err(Ea3Error::TruncatedHeader(n)) if n == len
            ));
        }
    }

    #[test]
    fn test_fields() {
        let data = Ea3Builder::new(0x0102_0304)
            .sampling_rate(48_000)
            .channels(2)
            .header_only();
        let header = read_header(&data).unwrap();
        assert_eq!(header.raw_point_count, 0x0102_0304);
        assert_eq!(header.sampling_rate, 48_000);
        assert_eq!(header.channel_count, 2);
    }

    #[test]
    fn test_exactly_header_size() {
        let data = vec![0u8; HEADER_SIZE];
        let header = read_header(&data).unwrap();
        assert_eq!(header.raw_point_count, 0);
        assert_eq!(header.channel_count, 0);
    }
}
