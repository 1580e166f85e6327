use chrono::NaiveDate;
use common::error::{AppError, Res};
use common::misc::{MovementKind, MovementStatus};
use db::dtos::movement::{MovementCreateRequest, MovementUpdateRequest};
use db::models::movement::Movement;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::movement::{MovementCreate, MovementUpdate};

/// Category catalog, one list per movement direction.
pub const ENTRADA_CATEGORIES: [&str; 4] = ["Vendas", "Serviços", "Produtos", "Outros"];
pub const SAIDA_CATEGORIES: [&str; 5] =
    ["Fornecedores", "Operacional", "Marketing", "Impostos", "Outros"];

pub fn categories_for(kind: MovementKind) -> &'static [&'static str] {
    match kind {
        MovementKind::Entrada => &ENTRADA_CATEGORIES,
        MovementKind::Saida => &SAIDA_CATEGORIES,
    }
}

fn parse_kind(tipo: &str) -> Res<MovementKind> {
    MovementKind::from_str(tipo)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid movement type: {}", tipo)))
}

fn parse_status(status: &str) -> Res<MovementStatus> {
    MovementStatus::from_str(status)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid movement status: {}", status)))
}

fn validate_amount(valor: Decimal) -> Res<()> {
    if valor <= Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Amount must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn validate_category(kind: MovementKind, categoria: &str) -> Res<()> {
    if !categories_for(kind).contains(&categoria) {
        return Err(AppError::BadRequest(format!(
            "Unknown category '{}' for type '{}'",
            categoria,
            kind.as_str()
        )));
    }
    Ok(())
}

pub async fn list(
    pool: &PgPool,
    user_id: Uuid,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Res<Vec<Movement>> {
    match (start, end) {
        (Some(start), Some(end)) => {
            db::movement::list_by_user_in_range(pool, user_id, start, end).await
        }
        _ => db::movement::list_by_user(pool, user_id).await,
    }
}

pub async fn create(pool: &PgPool, user_id: Uuid, req: MovementCreate) -> Res<Movement> {
    let kind = parse_kind(&req.tipo)?;
    parse_status(&req.status)?;
    validate_amount(req.valor)?;
    validate_category(kind, &req.categoria)?;

    db::movement::insert(
        pool,
        MovementCreateRequest {
            user_id,
            tipo: req.tipo,
            valor: req.valor,
            categoria: req.categoria,
            descricao: req.descricao,
            status: req.status,
            data: req.data,
        },
    )
    .await
}

/// Validates the changed fields against the entry as it will be after the
/// update (a new categoria is checked against the new tipo when both change).
pub async fn update(pool: &PgPool, user_id: Uuid, id: Uuid, req: MovementUpdate) -> Res<Movement> {
    let existing = db::movement::get_by_id(pool, id)
        .await?
        .filter(|m| m.user_id == user_id)
        .ok_or_else(|| AppError::NotFound("Movement not found".to_string()))?;

    let effective_tipo = req.tipo.as_deref().unwrap_or(&existing.tipo);
    let kind = parse_kind(effective_tipo)?;
    if let Some(status) = req.status.as_deref() {
        parse_status(status)?;
    }
    if let Some(valor) = req.valor {
        validate_amount(valor)?;
    }
    let effective_categoria = req.categoria.as_deref().unwrap_or(&existing.categoria);
    validate_category(kind, effective_categoria)?;

    db::movement::update(
        pool,
        id,
        user_id,
        MovementUpdateRequest {
            tipo: req.tipo,
            valor: req.valor,
            categoria: req.categoria,
            descricao: req.descricao,
            status: req.status,
            data: req.data,
        },
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Movement not found".to_string()))
}

pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Res<()> {
    let deleted = db::movement::delete(pool, id, user_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Movement not found".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrada_categories_are_accepted() {
        assert!(validate_category(MovementKind::Entrada, "Vendas").is_ok());
        assert!(validate_category(MovementKind::Entrada, "Outros").is_ok());
    }

    #[test]
    fn categories_do_not_cross_directions() {
        assert!(validate_category(MovementKind::Entrada, "Impostos").is_err());
        assert!(validate_category(MovementKind::Saida, "Vendas").is_err());
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        assert!(validate_amount(Decimal::ZERO).is_err());
        assert!(validate_amount(Decimal::new(-100, 2)).is_err());
        assert!(validate_amount(Decimal::new(1, 2)).is_ok());
    }

    #[test]
    fn unknown_kind_and_status_are_rejected() {
        assert!(parse_kind("transferencia").is_err());
        assert!(parse_status("cancelado").is_err());
        assert!(parse_kind("entrada").is_ok());
        assert!(parse_status("recebido").is_ok());
    }
}
