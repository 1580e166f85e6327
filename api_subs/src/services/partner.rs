use common::error::{AppError, Res};
use common::misc::SubscriptionStatus;
use db::dtos::partnership::ActivationCreateRequest;
use db::models::partnership::PartnerCode;
use sqlx::PgPool;
use uuid::Uuid;

/// Activates a partnership code for a user.
///
/// The use counter is claimed with a single conditional UPDATE, so the
/// capacity check and the increment cannot race; two users cannot both take
/// the last slot of a capped code. The activation record and the
/// subscription upsert to `parceiro` ride the same transaction — if any step
/// fails, the claimed use rolls back with it.
pub async fn activate_code(pool: &PgPool, user_id: Uuid, raw_code: &str) -> Res<PartnerCode> {
    let codigo = raw_code.trim().to_uppercase();
    if codigo.is_empty() {
        return Err(AppError::BadRequest("Partnership code is required".to_string()));
    }

    let mut tx = pool.begin().await?;

    let code = match db::partnership::claim_code_use(&mut *tx, &codigo).await? {
        Some(code) => code,
        None => {
            // No row claimed: look the code up once more to say why.
            let existing = db::partnership::get_code(&mut *tx, &codigo).await?;
            return Err(match existing {
                Some(c) if c.ativo => {
                    AppError::BadRequest("Partnership code has no uses left".to_string())
                }
                _ => AppError::BadRequest("Invalid or inactive partnership code".to_string()),
            });
        }
    };

    db::partnership::insert_activation(
        &mut *tx,
        ActivationCreateRequest {
            user_id,
            codigo_id: code.id,
            codigo_usado: codigo,
        },
    )
    .await?;

    db::subscription::upsert_status(
        &mut *tx,
        user_id,
        SubscriptionStatus::Parceiro.as_str(),
    )
    .await?;

    tx.commit().await?;
    Ok(code)
}
