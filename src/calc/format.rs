//! Display formatting for operands (en-US grouping)

/// Thousands separator
const GROUP_SEPARATOR: char = ',';

/// Format an operand for display
///
/// The integer part is grouped; the decimal part is appended verbatim so a
/// trailing `.` or trailing zeros typed by the user stay visible.
pub fn format_operand(operand: Option<&str>) -> String {
    let Some(operand) = operand else {
        return String::new();
    };
    match operand.split_once('.') {
        None => format_integer(operand),
        Some((integer, decimal)) => format!("{}.{}", format_integer(integer), decimal),
    }
}

/// Render the integer part the way a number formatter with zero fraction
/// digits would: sign kept, leading zeros dropped, empty as `0`.
fn format_integer(integer: &str) -> String {
    let integer = integer.trim();
    let (sign, magnitude) = match integer.as_bytes().first() {
        Some(b'-') => ("-", &integer[1..]),
        Some(b'+') => ("", &integer[1..]),
        _ => ("", integer),
    };

    if magnitude == "Infinity" {
        return format!("{sign}∞");
    }
    if magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return format!("{sign}{}", group_digits(magnitude));
    }
    match expand_exponent(magnitude) {
        Some(digits) => format!("{sign}{}", group_digits(&digits)),
        None => "NaN".to_string(),
    }
}

/// Expand `De±X` into plain integer digits
fn expand_exponent(s: &str) -> Option<String> {
    let (mantissa, exponent) = s.split_once(['e', 'E'])?;
    if mantissa.is_empty() || !mantissa.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let exponent: i32 = exponent.parse().ok()?;
    if exponent >= 0 {
        return Some(format!("{}{}", mantissa, "0".repeat(exponent as usize)));
    }
    let value: f64 = s.parse().ok()?;
    Some(format!("{:.0}", value.round()))
}

/// Insert separators every three digits from the right
fn group_digits(digits: &str) -> String {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return "0".to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_empty() {
        assert_eq!(format_operand(None), "");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_operand(Some("1234")), "1,234");
        assert_eq!(format_operand(Some("123")), "123");
        assert_eq!(format_operand(Some("1234567")), "1,234,567");
        assert_eq!(format_operand(Some("123456")), "123,456");
    }

    #[test]
    fn test_decimal_part_verbatim() {
        assert_eq!(format_operand(Some("1234.5")), "1,234.5");
        assert_eq!(format_operand(Some("1234.")), "1,234.");
        assert_eq!(format_operand(Some("0.500")), "0.500");
        assert_eq!(format_operand(Some("1234.56789")), "1,234.56789");
    }

    #[test]
    fn test_integer_normalization() {
        assert_eq!(format_operand(Some("05")), "5");
        assert_eq!(format_operand(Some("0")), "0");
        assert_eq!(format_operand(Some(".5")), "0.5");
        assert_eq!(format_operand(Some("")), "0");
        assert_eq!(format_operand(Some("-1234")), "-1,234");
    }

    #[test]
    fn test_special_results() {
        assert_eq!(format_operand(Some("Infinity")), "∞");
        assert_eq!(format_operand(Some("-Infinity")), "-∞");
        assert_eq!(format_operand(Some("NaN")), "NaN");
        assert_eq!(format_operand(Some("1e+21")), "1,000,000,000,000,000,000,000");
        assert_eq!(format_operand(Some("1.5e+25")), "1.5e+25");
        assert_eq!(format_operand(Some("1e-7")), "0");
    }
}
