use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use common::fmt::MONTHS_ABBR;
use common::misc::{MovementKind, MovementStatus};
use db::models::movement::Movement;
use rust_decimal::Decimal;

use crate::dtos::dashboard::{CategorySlice, DashboardSummary, MonthlyPoint, RecentEntry};

const MONTHLY_WINDOW: u32 = 6;
const TOP_CATEGORIES: usize = 4;
const RECENT_ENTRIES: usize = 5;

/// Builds the dashboard payload from the caller's entries. All of it is
/// computed on read; nothing here is persisted.
pub fn summarize(movements: &[Movement], today: NaiveDate) -> DashboardSummary {
    let total_entradas = sum_kind(movements, MovementKind::Entrada);
    let total_saidas = sum_kind(movements, MovementKind::Saida);

    DashboardSummary {
        total_entradas,
        total_saidas,
        saldo: total_entradas - total_saidas,
        monthly: monthly_series(movements, today),
        categories: top_entrada_categories(movements),
        recent: recent_entries(movements),
    }
}

fn sum_kind(movements: &[Movement], kind: MovementKind) -> Decimal {
    movements
        .iter()
        .filter(|m| m.tipo == kind.as_str())
        .map(|m| m.valor)
        .sum()
}

/// Entrada/saida totals for the last six calendar months, oldest first.
fn monthly_series(movements: &[Movement], today: NaiveDate) -> Vec<MonthlyPoint> {
    (0..MONTHLY_WINDOW)
        .rev()
        .map(|back| {
            let (year, month) = months_back(today.year(), today.month(), back);
            let in_month = |m: &&Movement| m.data.year() == year && m.data.month() == month;

            MonthlyPoint {
                month: MONTHS_ABBR[(month - 1) as usize],
                entradas: movements
                    .iter()
                    .filter(in_month)
                    .filter(|m| m.tipo == MovementKind::Entrada.as_str())
                    .map(|m| m.valor)
                    .sum(),
                saidas: movements
                    .iter()
                    .filter(in_month)
                    .filter(|m| m.tipo == MovementKind::Saida.as_str())
                    .map(|m| m.valor)
                    .sum(),
            }
        })
        .collect()
}

fn months_back(year: i32, month: u32, back: u32) -> (i32, u32) {
    let zero_based = year * 12 + (month as i32 - 1) - back as i32;
    (zero_based.div_euclid(12), (zero_based.rem_euclid(12) + 1) as u32)
}

/// Income grouped by category, largest first, capped at four slices.
fn top_entrada_categories(movements: &[Movement]) -> Vec<CategorySlice> {
    let mut by_category: HashMap<&str, Decimal> = HashMap::new();
    for m in movements
        .iter()
        .filter(|m| m.tipo == MovementKind::Entrada.as_str())
    {
        *by_category.entry(m.categoria.as_str()).or_default() += m.valor;
    }

    let mut slices: Vec<CategorySlice> = by_category
        .into_iter()
        .map(|(name, value)| CategorySlice {
            name: name.to_string(),
            value,
        })
        .collect();
    slices.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    slices.truncate(TOP_CATEGORIES);
    slices
}

/// The five newest entries; the input is already sorted newest first.
fn recent_entries(movements: &[Movement]) -> Vec<RecentEntry> {
    movements
        .iter()
        .take(RECENT_ENTRIES)
        .map(|m| RecentEntry {
            id: m.id,
            description: m
                .descricao
                .clone()
                .unwrap_or_else(|| format!("{} - {}", m.categoria, m.tipo)),
            tipo: m.tipo.clone(),
            valor: m.valor,
            data: m.data,
            status: status_label(&m.status).to_string(),
        })
        .collect()
}

fn status_label(status: &str) -> &'static str {
    match MovementStatus::from_str(status) {
        Some(MovementStatus::Pago) => "Pago",
        Some(MovementStatus::Recebido) => "Recebido",
        _ => "Pendente",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use uuid::Uuid;

    fn entry(tipo: &str, valor: i64, categoria: &str, data: NaiveDate) -> Movement {
        Movement {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            tipo: tipo.to_string(),
            valor: Decimal::new(valor, 2),
            categoria: categoria.to_string(),
            descricao: None,
            status: "pago".to_string(),
            data,
            created_at: NaiveDateTime::default(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn saldo_is_entradas_minus_saidas() {
        let movements = vec![
            entry("entrada", 10_000, "Vendas", day(2026, 3, 1)),
            entry("entrada", 2_500, "Serviços", day(2026, 3, 2)),
            entry("saida", 4_000, "Impostos", day(2026, 3, 3)),
        ];
        let summary = summarize(&movements, day(2026, 3, 15));

        assert_eq!(summary.total_entradas, Decimal::new(12_500, 2));
        assert_eq!(summary.total_saidas, Decimal::new(4_000, 2));
        assert_eq!(summary.saldo, Decimal::new(8_500, 2));
    }

    #[test]
    fn monthly_series_spans_six_months_oldest_first() {
        let movements = vec![
            entry("entrada", 5_000, "Vendas", day(2026, 1, 10)),
            entry("saida", 1_000, "Marketing", day(2026, 3, 5)),
        ];
        let summary = summarize(&movements, day(2026, 3, 15));

        assert_eq!(summary.monthly.len(), 6);
        assert_eq!(summary.monthly[0].month, "Out");
        assert_eq!(summary.monthly[5].month, "Mar");
        assert_eq!(summary.monthly[3].entradas, Decimal::new(5_000, 2));
        assert_eq!(summary.monthly[5].saidas, Decimal::new(1_000, 2));
    }

    #[test]
    fn monthly_window_crosses_year_boundaries() {
        let movements = vec![entry("entrada", 7_700, "Vendas", day(2025, 12, 31))];
        let summary = summarize(&movements, day(2026, 2, 1));

        let dez = summary
            .monthly
            .iter()
            .find(|p| p.month == "Dez")
            .expect("December bucket present");
        assert_eq!(dez.entradas, Decimal::new(7_700, 2));
    }

    #[test]
    fn categories_are_entradas_only_top_four() {
        let movements = vec![
            entry("entrada", 9_000, "Vendas", day(2026, 3, 1)),
            entry("entrada", 8_000, "Serviços", day(2026, 3, 1)),
            entry("entrada", 7_000, "Produtos", day(2026, 3, 1)),
            entry("entrada", 6_000, "Outros", day(2026, 3, 1)),
            entry("entrada", 100, "Vendas", day(2026, 3, 2)),
            entry("saida", 50_000, "Impostos", day(2026, 3, 1)),
        ];
        let summary = summarize(&movements, day(2026, 3, 15));

        assert_eq!(summary.categories.len(), 4);
        assert_eq!(summary.categories[0].name, "Vendas");
        assert_eq!(summary.categories[0].value, Decimal::new(9_100, 2));
        assert!(summary.categories.iter().all(|c| c.name != "Impostos"));
    }

    #[test]
    fn recent_list_is_capped_at_five() {
        let movements: Vec<Movement> = (1..=7)
            .map(|d| entry("entrada", 1_000, "Vendas", day(2026, 3, d)))
            .collect();
        let summary = summarize(&movements, day(2026, 3, 15));

        assert_eq!(summary.recent.len(), 5);
    }

    #[test]
    fn recent_description_falls_back_to_category_and_type() {
        let movements = vec![entry("saida", 1_000, "Operacional", day(2026, 3, 1))];
        let summary = summarize(&movements, day(2026, 3, 15));

        assert_eq!(summary.recent[0].description, "Operacional - saida");
        assert_eq!(summary.recent[0].status, "Pago");
    }
}
