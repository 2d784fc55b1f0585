const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Renders a byte count as a human-readable size, e.g. `1.5 MB`.
/// Negative inputs clamp to zero; anything past the unit table stays in TB.
pub fn format_bytes(bytes: i64, precision: u32) -> String {
    let bytes = bytes.max(0) as f64;
    let pow = if bytes < 1.0 {
        0
    } else {
        ((bytes.ln() / 1024f64.ln()).floor() as usize).min(UNITS.len() - 1)
    };

    let scale = 1024f64.powi(pow as i32);
    let factor = 10f64.powi(precision as i32);
    let value = (bytes / scale * factor).round() / factor;

    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    format!("{} {}", trimmed, UNITS[pow])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, "0 B")]
    #[case::negative_clamps(-42, "0 B")]
    #[case::bytes(1023, "1023 B")]
    #[case::kilobytes(1536, "1.5 KB")]
    #[case::megabytes(1_500_000, "1.43 MB")]
    #[case::gigabytes(1_073_741_824, "1 GB")]
    #[case::terabytes(2 * 1_099_511_627_776, "2 TB")]
    #[case::beyond_table_stays_in_tb(3 * 1_125_899_906_842_624, "3072 TB")]
    fn formats_with_unit_selection(#[case] bytes: i64, #[case] expected: &str) {
        assert_eq!(format_bytes(bytes, 3), expected);
    }
}
