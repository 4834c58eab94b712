use chrono::{DateTime, NaiveDate};

/// Groups the integer part with pt-BR thousands separators: `5000.0` becomes
/// `"5.000"`. The "R$" prefix and ",00" suffix belong to the markup, not here.
pub fn format_value(value: f64) -> String {
    let whole = value.trunc() as i64;
    let digits = whole.abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }
    let grouped: String = out.into_iter().rev().collect();
    if whole < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

// An unparseable timestamp is passed through unchanged so the table still
// shows the raw value instead of nothing.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}
