/// Significant digits shown by the calculator display
pub const DEFAULT_PRECISION: usize = 10;

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Formats `value` with `precision` significant digits, as printf's `%g` does
///
/// Exponent notation is used when the exponent is below -4 or not below `precision`
pub fn format_significant(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.max(1);

    // Rounding to `precision` digits may carry into the exponent, so take it from the rounded form
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.find('e') {
        Some(idx) => (&scientific[..idx], &scientific[idx + 1..]),
        None => return scientific,
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return scientific,
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(value: f64) -> String {
        format_significant(value, DEFAULT_PRECISION)
    }

    #[test]
    fn test_integers() {
        assert_eq!(display(7.0), "7");
        assert_eq!(display(-42.0), "-42");
        assert_eq!(display(1234567890.0), "1234567890");
        assert_eq!(display(0.0), "0");
        assert_eq!(display(-0.0), "0");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(display(2.5), "2.5");
        assert_eq!(display(1.0 / 3.0), "0.3333333333");
        assert_eq!(display(2.0 / 3.0), "0.6666666667");
        assert_eq!(display(0.1 + 0.2), "0.3");
        assert_eq!(display(0.0001), "0.0001");
    }

    #[test]
    fn test_exponent() {
        assert_eq!(display(0.00001), "1e-05");
        assert_eq!(display(1e20), "1e+20");
        assert_eq!(display(12345678901.0), "1.23456789e+10");
        assert_eq!(display(-1.5e-7), "-1.5e-07");
        assert_eq!(display(1e100), "1e+100");
    }

    #[test]
    fn test_rounding_carries() {
        assert_eq!(display(9999999999.6), "1e+10");
        assert_eq!(format_significant(9.96, 2), "10");
        assert_eq!(format_significant(99.6, 2), "1e+02");
    }

    #[test]
    fn test_precision() {
        assert_eq!(format_significant(1.23456, 3), "1.23");
        assert_eq!(format_significant(1.23456, 1), "1");
        assert_eq!(format_significant(1.23456, 0), "1");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(display(f64::INFINITY), "inf");
        assert_eq!(display(f64::NEG_INFINITY), "-inf");
        assert_eq!(display(f64::NAN), "NaN");
    }
}
