//! Number and currency display (en-US grouping).

/// Maximum fraction digits shown for plain numbers.
const NUMBER_MAX_FRACTION_DIGITS: usize = 3;

/// Render an amount in minor units (cents) as major units with two decimals.
///
/// `123456` becomes `1,234.56`. No currency symbol is added.
pub fn format_currency(minor_units: f64) -> String {
    if !minor_units.is_finite() {
        return minor_units.to_string();
    }
    let fixed = format!("{:.2}", minor_units / 100.0);
    group_fixed(&fixed)
}

/// Render a number with thousands separators and up to three decimals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", NUMBER_MAX_FRACTION_DIGITS, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    group_fixed(trimmed)
}

/// Insert thousands separators into an already rounded decimal string.
fn group_fixed(fixed: &str) -> String {
    let (negative, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, fixed),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    // rounding can leave "-0.00"; drop the sign when every digit is zero
    if negative && unsigned.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Group a string of integer digits in threes: `1234567` -> `1,234,567`.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(123456.0), "1,234.56");
        assert_eq!(format_currency(5.0), "0.05");
        assert_eq!(format_currency(0.0), "0.00");
        assert_eq!(format_currency(-250075.0), "-2,500.75");
        assert_eq!(format_currency(100000000.0), "1,000,000.00");
    }

    #[test]
    fn test_format_currency_negative_rounding_to_zero() {
        assert_eq!(format_currency(-0.1), "0.00");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234.0), "1,234");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(0.12345), "0.123");
        assert_eq!(format_number(-9876543.21), "-9,876,543.21");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_currency(f64::INFINITY), "inf");
    }
}
