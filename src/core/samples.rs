// Interleaved i16 sample block

use crate::core::constants::*;
use crate::core::cursor::ByteCursor;
use crate::core::error::{Ea3Error, Result};
use crate::core::format::{RawHeader, SampleSeries};
use tracing::debug;

/// Number of usable points; the last raw point is a marker, not data.
pub fn valid_point_count(header: &RawHeader) -> Result<usize> {
    match header.raw_point_count {
        0 | 1 => Err(Ea3Error::EmptyOrInvalidPointCount(header.raw_point_count)),
        n => Ok((n - 1) as usize),
    }
}

/// Read the sample block at the cursor and advance past it.
pub fn read_samples(
    cursor: &mut ByteCursor<'_>,
    header: &RawHeader,
    scale_factor: f64,
) -> Result<SampleSeries> {
    if header.channel_count != SUPPORTED_CHANNEL_COUNT {
        return Err(Ea3Error::UnsupportedChannelCount(header.channel_count));
    }

    let points = valid_point_count(header)?;
    let read_size = points
        .checked_mul(POINT_SIZE)
        .ok_or(Ea3Error::EmptyOrInvalidPointCount(header.raw_point_count))?;

    let available = cursor.remaining();
    let block = cursor.take(read_size).ok_or(Ea3Error::TruncatedSampleBlock {
        expected: read_size,
        available,
    })?;

    debug!("Sample block: {} points, {} bytes", points, read_size);
    decode_samples(block, scale_factor)
}

/// De-interleave `x0 y0 x1 y1 ...` and scale every value.
pub fn decode_samples(block: &[u8], scale_factor: f64) -> Result<SampleSeries> {
    if block.len() % POINT_SIZE != 0 {
        return Err(Ea3Error::MalformedSampleBlock(block.len()));
    }

    let mut series = SampleSeries::with_capacity(block.len() / POINT_SIZE);
    for pair in block.chunks_exact(POINT_SIZE) {
        let x = i16::from_le_bytes([pair[0], pair[1]]);
        let y = i16::from_le_bytes([pair[2], pair[3]]);
        series.x_values.push(f64::from(x) / scale_factor);
        series.y_values.push(f64::from(y) / scale_factor);
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(raw: &[i16]) -> Vec<u8> {
        raw.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    fn header(raw_point_count: u32, channel_count: u8) -> RawHeader {
        RawHeader {
            raw_point_count,
            sampling_rate: 1000,
            channel_count,
        }
    }

    #[test]
    fn test_deinterleave() {
        let series = decode_samples(&block(&[10, 20, 30, 40]), 1.0).unwrap();
        assert_eq!(series.x_values, vec![10.0, 30.0]);
        assert_eq!(series.y_values, vec![20.0, 40.0]);
    }

    #[test]
    fn test_scaling_extremes() {
        let series = decode_samples(&block(&[i16::MIN, i16::MAX]), SCALE_FACTOR).unwrap();
        assert!((series.x_values[0] - (-32768.0 / 3276.8)).abs() < f64::EPSILON);
        assert!((series.x_values[0] + 10.0).abs() < 1e-12);
        assert!((series.y_values[0] - (32767.0 / 3276.8)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_alternate_scale() {
        let series = decode_samples(&block(&[100, -50]), 10.0).unwrap();
        assert_eq!(series.x_values, vec![10.0]);
        assert_eq!(series.y_values, vec![-5.0]);
    }

    #[test]
    fn test_partial_pair_is_malformed() {
        let mut data = block(&[1, 2]);
        data.push(0);
        assert!(matches!(
            decode_samples(&data, SCALE_FACTOR),
            Err(Ea3Error::MalformedSampleBlock(5))
        ));
    }

    #[test]
    fn test_point_count_correction() {
        assert_eq!(valid_point_count(&header(3, 1)).unwrap(), 2);
        assert!(matches!(
            valid_point_count(&header(0, 1)),
            Err(Ea3Error::EmptyOrInvalidPointCount(0))
        ));
        assert!(matches!(
            valid_point_count(&header(1, 1)),
            Err(Ea3Error::EmptyOrInvalidPointCount(1))
        ));
    }

    #[test]
    fn test_channel_check_precedes_read() {
        // Empty buffer: would be truncated, but the channel check comes first.
        let mut cursor = ByteCursor::new(&[]);
        assert!(matches!(
            read_samples(&mut cursor, &header(3, 2), SCALE_FACTOR),
            Err(Ea3Error::UnsupportedChannelCount(2))
        ));
    }

    #[test]
    fn test_truncated_block() {
        let data = block(&[1, 2, 3]);
        let mut cursor = ByteCursor::new(&data);
        assert!(matches!(
            read_samples(&mut cursor, &header(3, 1), SCALE_FACTOR),
            Err(Ea3Error::TruncatedSampleBlock {
                expected: 8,
                available: 6
            })
        ));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_cursor_advances_past_block() {
        let mut data = block(&[1, 2, 3, 4]);
        data.extend_from_slice(&[0xAA; 3]);
        let mut cursor = ByteCursor::new(&data);
        let series = read_samples(&mut cursor, &header(3, 1), 1.0).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(cursor.position(), 8);
        assert_eq!(cursor.remaining(), 3);
    }
}
