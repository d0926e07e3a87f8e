/// Format a euro amount without cents, with thousands separators
pub fn format_eur(value: f64) -> String {
    let rounded = value.round();
    let abs = rounded.abs() as i64;

    let digits = abs.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if rounded < 0.0 {
        format!("-{grouped} €")
    } else {
        format!("{grouped} €")
    }
}

/// Format a euro amount with an explicit sign, for deltas
pub fn format_eur_signed(value: f64) -> String {
    if value.round() >= 0.0 {
        format!("+{}", format_eur(value))
    } else {
        format_eur(value)
    }
}

/// Format a percentage with one decimal place (input already in percent)
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
