//! Number formatting for the table and chart axes (en-US grouping).

/// Currency prefix used for sales values.
pub const CURRENCY_SYMBOL: &str = "$";

/// Formats `value` with comma-grouped thousands, keeping between
/// `min_fraction` and `max_fraction` decimals (trailing zeros trimmed down to
/// `min_fraction`).
pub fn format_grouped(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (integer_part, fraction_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut fraction = fraction_part.to_string();
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }

    let grouped = group_thousands(integer_part);
    let is_zero = grouped == "0" && fraction.chars().all(|c| c == '0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Item counts: grouped, up to three decimals (`1234.5` -> `1,234.5`).
pub fn format_items(value: f64) -> String {
    format_grouped(value, 0, 3)
}

/// Sales values: currency prefix and exactly two decimals (`$1,234.50`).
pub fn format_currency(value: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_grouped(value, 2, 2))
}

/// Chart axis ticks: currency prefix, no forced decimals (`$12,000`).
pub fn format_axis_currency(value: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_grouped(value, 0, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_items() {
        assert_eq!(format_items(0.0), "0");
        assert_eq!(format_items(999.0), "999");
        assert_eq!(format_items(1234.0), "1,234");
        assert_eq!(format_items(1234567.0), "1,234,567");
        assert_eq!(format_items(1234.5), "1,234.5");
        assert_eq!(format_items(2.12345), "2.123");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1500.5), "$1,500.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-1234.5), "$-1,234.50");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_axis_currency() {
        assert_eq!(format_axis_currency(12000.0), "$12,000");
        assert_eq!(format_axis_currency(2500.5), "$2,500.5");
    }
}
