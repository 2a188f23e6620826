/// Format a count for a KPI card: `1.2M`, `13.0K`, or the plain number
pub fn format_compact(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Signed percentage change with one decimal, e.g. `+8.2%`
pub fn format_change(percentage: f64) -> String {
    if percentage > 0.0 {
        format!("+{:.1}%", percentage)
    } else {
        format!("{:.1}%", percentage)
    }
}

/// Group digits in thousands: `156780` -> `156,780`
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
