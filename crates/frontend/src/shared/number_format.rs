/// Number formatting for report tables and cards
///
/// Display figures are baht amounts rounded to whole numbers with comma
/// thousands separators, matching what staff expect from the rest of the
/// in-house tooling.

/// Round to the nearest integer and group thousands with commas.
/// Example: 1234567.89 -> "1,234,568".
pub fn format_currency(value: f64) -> String {
    group_thousands(round_amount(value))
}

/// Percentage with one decimal, e.g. "12.5%".
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Rounding used for export cells: nearest integer, ties away from zero.
pub fn round_amount(value: f64) -> i64 {
    value.round() as i64
}

/// Baht amount keeping satang, e.g. "1,234.50". For user-entered prices
/// where the decimals matter.
pub fn format_baht(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}.{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        grouped.push('-');
    }
    grouped.chars().rev().collect()
}
