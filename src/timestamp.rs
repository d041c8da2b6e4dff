//! Audio timestamp formatting.

/// Format a seconds offset as zero-padded `HH:MM:SS`.
///
/// `None` (an unresolved bound) formats as `00:00:00`. Fractional seconds
/// are dropped; the hour field widens past two digits once the offset
/// exceeds 99:59:59.
pub fn format_timestamp(seconds: Option<f64>) -> String {
    let total = match seconds {
        Some(s) if s.is_finite() && s > 0.0 => s as u64,
        _ => 0,
    };
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_bound_formats_as_zero() {
        assert_eq!(format_timestamp(None), "00:00:00");
    }

    #[test]
    fn whole_seconds() {
        assert_eq!(format_timestamp(Some(0.0)), "00:00:00");
        assert_eq!(format_timestamp(Some(65.0)), "00:01:05");
        assert_eq!(format_timestamp(Some(3661.0)), "01:01:01");
    }

    #[test]
    fn fractional_seconds_truncate() {
        assert_eq!(format_timestamp(Some(1.98)), "00:00:01");
        assert_eq!(format_timestamp(Some(59.999)), "00:00:59");
    }

    #[test]
    fn hour_field_widens_past_two_digits() {
        assert_eq!(format_timestamp(Some(100.0 * 3600.0)), "100:00:00");
    }

    #[test]
    fn out_of_domain_input_clamps_to_zero() {
        assert_eq!(format_timestamp(Some(-1.0)), "00:00:00");
        assert_eq!(format_timestamp(Some(f64::NAN)), "00:00:00");
    }
}
