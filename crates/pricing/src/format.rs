//! Presentation helpers: currency strings for display.
//!
//! Rounding to cents happens here and nowhere else.

/// Round to 2 decimal places, halves away from zero.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format an amount as euros the way German invoices show it: `€ 1.706,46`.
///
/// Negative amounts render as `-€ 500,00`. Non-finite input renders as `€ –`.
pub fn format_eur(amount: f64) -> String {
    if !amount.is_finite() {
        return "€ –".to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u128;
    let negative = amount < 0.0 && cents > 0;
    let euros = cents / 100;
    let rest = cents % 100;

    let digits = euros.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}€ {grouped},{rest:02}")
}
