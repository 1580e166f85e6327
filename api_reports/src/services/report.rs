use chrono::NaiveDate;
use common::error::Res;
use common::misc::MovementKind;
use db::models::movement::Movement;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::report::ReportSummary;
use crate::services::period::Period;

pub fn totals(movements: &[Movement]) -> (Decimal, Decimal, Decimal) {
    let entradas: Decimal = movements
        .iter()
        .filter(|m| m.tipo == MovementKind::Entrada.as_str())
        .map(|m| m.valor)
        .sum();
    let saidas: Decimal = movements
        .iter()
        .filter(|m| m.tipo == MovementKind::Saida.as_str())
        .map(|m| m.valor)
        .sum();
    (entradas, saidas, entradas - saidas)
}

/// Entries of the selected window plus their totals, the payload both the
/// report screen and the PDF exporter start from.
pub async fn build_summary(
    pool: &PgPool,
    user_id: Uuid,
    period: Period,
    today: NaiveDate,
) -> Res<ReportSummary> {
    let (start, end) = period.range(today);
    let movements = db::movement::list_by_user_in_range(pool, user_id, start, end).await?;
    let (total_entradas, total_saidas, saldo) = totals(&movements);

    Ok(ReportSummary {
        period: period.as_str().to_string(),
        label: period.label(today),
        total_entradas,
        total_saidas,
        saldo,
        movements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn entry(tipo: &str, cents: i64) -> Movement {
        Movement {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            tipo: tipo.to_string(),
            valor: Decimal::new(cents, 2),
            categoria: "Vendas".to_string(),
            descricao: None,
            status: "pago".to_string(),
            data: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn totals_split_by_direction() {
        let movements = vec![
            entry("entrada", 30_000),
            entry("saida", 12_550),
            entry("entrada", 500),
        ];
        let (entradas, saidas, saldo) = totals(&movements);

        assert_eq!(entradas, Decimal::new(30_500, 2));
        assert_eq!(saidas, Decimal::new(12_550, 2));
        assert_eq!(saldo, Decimal::new(17_950, 2));
    }

    #[test]
    fn totals_of_nothing_are_zero() {
        let (entradas, saidas, saldo) = totals(&[]);
        assert_eq!(entradas, Decimal::ZERO);
        assert_eq!(saidas, Decimal::ZERO);
        assert_eq!(saldo, Decimal::ZERO);
    }
}
