use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// Abbreviated pt-BR month names, indexed by month number - 1.
pub const MONTHS_ABBR: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Full pt-BR month names for report labels.
pub const MONTHS_FULL: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

/// Formats a monetary amount in pt-BR currency style: thousands separated by
/// dots, decimals by a comma, e.g. `R$ 1.234,56`.
pub fn format_brl(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2));
    let (negative, fixed) = match fixed.strip_prefix('-') {
        Some(rest) => (true, rest.to_string()),
        None => (false, fixed),
    };
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    if negative {
        format!("-R$ {},{}", grouped, frac_part)
    } else {
        format!("R$ {},{}", grouped, frac_part)
    }
}

/// `dd/MM/yyyy`
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `dd/MM/yyyy HH:mm`
pub fn format_datetime_br(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_brl(Decimal::new(123456, 2)), "R$ 1.234,56");
        assert_eq!(format_brl(Decimal::new(12345678, 1)), "R$ 1.234.567,80");
    }

    #[test]
    fn small_amounts_have_no_grouping() {
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
        assert_eq!(format_brl(Decimal::new(99999, 2)), "R$ 999,99");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_brl(Decimal::new(-299, 1)), "-R$ 29,90");
    }

    #[test]
    fn dates_render_in_br_order() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date_br(date), "07/03/2026");
    }
}
