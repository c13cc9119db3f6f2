//! Canonical text form of Egg numbers.

/// Format a number the way Egg shows it.
///
/// Integral values print without a fraction (`55`, not `55.0`), negative
/// zero prints as `0`, and non-finite values use the names `Infinity`,
/// `-Infinity` and `NaN`. Everything else uses the shortest decimal that
/// round-trips.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_number;
    use pretty_assertions::assert_eq;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(55.0), "55");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractional_values_round_trip() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn non_finite_values_are_named() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
