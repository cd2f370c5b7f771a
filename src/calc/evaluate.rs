//! Binary evaluation of two operand strings
//!
//! Operands are parsed leniently (longest numeric prefix) and the result is
//! rendered in the shortest round-trip decimal form, switching to exponent
//! notation outside `1e-7..1e21`.

use super::state::Operation;

/// Largest decimal exponent rendered without `e` notation
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Smallest decimal exponent rendered without `e` notation
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Combine two operands. Returns an empty string if either fails to parse.
pub fn evaluate(previous: &str, current: &str, operation: Operation) -> String {
    let (Some(lhs), Some(rhs)) = (parse_operand(previous), parse_operand(current)) else {
        log::debug!("Unparseable operands {:?} {} {:?}", previous, operation.symbol(), current);
        return String::new();
    };
    number_to_string(operation.apply(lhs, rhs))
}

/// Parse the longest numeric prefix of `s`
///
/// Accepts `[ws][sign](Infinity | digits[.digits][e[sign]digits])`. At least one
/// mantissa digit is required, so `"."` and `""` fail while `"12."` is 12.
pub fn parse_operand(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // Exponent only counts if it carries at least one digit
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Canonical decimal string for a result
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3"
    let sci = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return format!("{sign}{sci}");
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // value = 0.d1d2..dk * 10^n
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= MAX_PLAIN_EXPONENT {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let e_sign = if e >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{e_sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{e_sign}{}", e.abs())
        }
    };

    format!("{sign}{body}")
}
