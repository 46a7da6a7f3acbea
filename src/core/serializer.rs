// Delimited text output: DV preamble, point count, then Y,X rows

use crate::core::constants::*;
use crate::core::format::SampleSeries;
use std::fmt::Write;

/// Render the series as text. Byte encoding of the result is up to the caller.
pub fn to_csv(series: &SampleSeries, valid_point_count: usize) -> String {
    // ~16 bytes per row for typical magnitudes
    let mut out = String::with_capacity(64 + series.len() * 16);

    out.push_str(CSV_PREAMBLE);
    out.push('\n');
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{},{}", POINT_COUNT_LABEL, valid_point_count);
    let _ = writeln!(out, "{},{}", COLUMN_Y, COLUMN_X);

    for (x, y) in series.pairs() {
        let _ = writeln!(out, "{:.3},{:.3}", y, x);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decoder::decode;
    use crate::core::testutil::Ea3Builder;

    #[test]
    fn test_layout() {
        let data = Ea3Builder::with_samples(&[(3277, -3277), (0, 6554)]).build();
        let file = decode(&data).unwrap();
        let text = to_csv(&file.series, file.metadata.valid_point_count);

        assert!(text.starts_with("DV,\nデータ点数,2\n"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "DV,",
                "データ点数,2",
                "データＹ,データＸ",
                "-1.000,1.000",
                "2.000,0.000",
            ]
        );
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_rounding() {
        let series = SampleSeries {
            x_values: vec![0.12345, -2.0004],
            y_values: vec![9.9996, 1.5],
        };
        let text = to_csv(&series, 2);
        let rows: Vec<&str> = text.lines().skip(3).collect();
        assert_eq!(rows, vec!["10.000,0.123", "1.500,-2.000"]);
    }

    #[test]
    fn test_empty_series() {
        let text = to_csv(&SampleSeries::default(), 0);
        assert_eq!(text, "DV,\nデータ点数,0\nデータＹ,データＸ\n");
    }
}
