//! Presentation formatting of stored numeric strings.

/// Insert thousands separators into the integer part of `value`.
///
/// The stored string is never re-parsed: the fractional part is kept exactly as
/// typed, exponent forms (`1e+21`) pass through untouched, and non-numeric
/// values such as `Infinity` are returned as they are. An empty value shows
/// as `0`.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::format_for_display;
///
/// assert_eq!(format_for_display("5000"), "5,000");
/// assert_eq!(format_for_display("-1234567.125"), "-1,234,567.125");
/// assert_eq!(format_for_display("12."), "12.");
/// assert_eq!(format_for_display("1e+21"), "1e+21");
/// ```
pub fn format_for_display(value: &str) -> String {
    if value.is_empty() {
        return "0".to_string();
    }
    if value.contains('e') {
        return value.to_string();
    }

    let (integer, fraction) = match value.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (value, None),
    };

    let mut formatted = group_thousands(integer);
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

fn group_thousands(integer: &str) -> String {
    let digits_start = integer
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(integer.len());
    let (sign, digits) = integer.split_at(digits_start);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return integer.to_string();
    }

    let mut grouped = String::with_capacity(integer.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_integers_are_unchanged() {
        assert_eq!(format_for_display("0"), "0");
        assert_eq!(format_for_display("12"), "12");
        assert_eq!(format_for_display("999"), "999");
    }

    #[test]
    fn groups_in_threes_from_the_right() {
        assert_eq!(format_for_display("1000"), "1,000");
        assert_eq!(format_for_display("123456"), "123,456");
        assert_eq!(format_for_display("1234567"), "1,234,567");
        assert_eq!(format_for_display("999999999999"), "999,999,999,999");
    }

    #[test]
    fn fraction_is_left_alone() {
        assert_eq!(format_for_display("1234.56789"), "1,234.56789");
        assert_eq!(format_for_display("0.0001234"), "0.0001234");
        assert_eq!(format_for_display("1000."), "1,000.");
    }

    #[test]
    fn sign_stays_in_front() {
        assert_eq!(format_for_display("-5000"), "-5,000");
        assert_eq!(format_for_display("-123"), "-123");
    }

    #[test]
    fn special_values_pass_through() {
        assert_eq!(format_for_display(""), "0");
        assert_eq!(format_for_display("Infinity"), "Infinity");
        assert_eq!(format_for_display("-Infinity"), "-Infinity");
        assert_eq!(format_for_display("NaN"), "NaN");
        assert_eq!(format_for_display("1.5e-7"), "1.5e-7");
    }
}
