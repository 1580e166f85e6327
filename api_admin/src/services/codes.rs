use common::error::{AppError, Res};
use db::dtos::partnership::CodeCreateRequest;
use db::models::partnership::PartnerCode;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::admin::CodeCreate;

pub async fn list_codes(pool: &PgPool) -> Res<Vec<PartnerCode>> {
    db::partnership::list_codes(pool).await
}

/// Creates a partnership code. Codes are stored uppercase so activation is
/// case-insensitive.
pub async fn create_code(pool: &PgPool, req: CodeCreate) -> Res<PartnerCode> {
    let codigo = req.codigo.trim().to_uppercase();
    if codigo.is_empty() {
        return Err(AppError::BadRequest("Code is required".to_string()));
    }
    if let Some(max) = req.uso_maximo {
        if max <= 0 {
            return Err(AppError::BadRequest(
                "Maximum uses must be positive".to_string(),
            ));
        }
    }
    if db::partnership::get_code(pool, &codigo).await?.is_some() {
        return Err(AppError::BadRequest("Code already exists".to_string()));
    }

    db::partnership::insert_code(
        pool,
        CodeCreateRequest {
            codigo,
            descricao: req.descricao,
            uso_maximo: req.uso_maximo,
        },
    )
    .await
}

pub async fn set_code_active(pool: &PgPool, code_id: Uuid, ativo: bool) -> Res<PartnerCode> {
    db::partnership::set_code_active(pool, code_id, ativo)
        .await?
        .ok_or_else(|| AppError::NotFound("Code not found".to_string()))
}
