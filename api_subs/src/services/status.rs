use chrono::NaiveDateTime;
use common::error::Res;
use common::misc::SubscriptionStatus;
use db::models::subscription::Subscription;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::status::AccessStatus;

const SECS_PER_DAY: i64 = 86_400;

/// Derives the access picture from the persisted state. Pure function; the
/// route and the guard middleware both go through here.
///
/// Rules:
/// - a paid-like status (`premium`, `parceiro`, `liberado`), an active
///   subscription flag, a manual release, or an activated partnership each
///   count as an active subscription;
/// - a `teste_gratuito` row is an active trial while `now` is before
///   `trial_end`; days remaining are counted with a ceiling so the last
///   partial day still reads as 1;
/// - access is blocked only when the trial window has closed and nothing
///   else grants access. A user with no subscription row is not blocked.
pub fn evaluate(
    sub: Option<&Subscription>,
    released: bool,
    has_partnership: bool,
    now: NaiveDateTime,
) -> AccessStatus {
    let mut status = AccessStatus::unrestricted();
    status.has_active_subscription = released || has_partnership;

    let Some(sub) = sub else {
        return status;
    };

    if sub.subscription_active {
        status.has_active_subscription = true;
    }
    match SubscriptionStatus::from_str(&sub.status) {
        Some(s) if s.is_paid_like() => status.has_active_subscription = true,
        Some(SubscriptionStatus::TesteGratuito) => match sub.trial_end {
            Some(end) if now < end => {
                status.has_active_trial = true;
                let secs_left = (end - now).num_seconds();
                status.trial_days_remaining = (secs_left + SECS_PER_DAY - 1) / SECS_PER_DAY;
            }
            Some(_) => status.trial_expired = true,
            // no end date recorded: treat the trial as still open
            None => status.has_active_trial = true,
        },
        _ => {}
    }

    status.should_block_access = status.trial_expired && !status.has_active_subscription;
    status
}

/// Loads the three inputs and evaluates. One subscription row, one
/// allow-list lookup, one partnership existence check.
pub async fn check_access(pool: &PgPool, user_id: Uuid, now: NaiveDateTime) -> Res<AccessStatus> {
    let sub = db::subscription::get_by_user_id(pool, user_id).await?;
    let released = db::access::get_release_for_user(pool, user_id)
        .await?
        .map(|r| r.liberado)
        .unwrap_or(false);
    let has_partnership = db::partnership::exists_activation_for_user(pool, user_id).await?;

    Ok(evaluate(sub.as_ref(), released, has_partnership, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn base_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn trial_sub(trial_end: Option<NaiveDateTime>) -> Subscription {
        Subscription {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            status: "teste_gratuito".to_string(),
            plano: Some("teste_gratuito".to_string()),
            trial_start: trial_end.map(|e| e - Duration::days(3)),
            trial_end,
            is_trial_active: true,
            subscription_active: false,
            created_at: base_now(),
        }
    }

    #[test]
    fn fresh_trial_has_days_remaining() {
        let now = base_now();
        let sub = trial_sub(Some(now + Duration::days(3)));
        let status = evaluate(Some(&sub), false, false, now);

        assert!(status.has_active_trial);
        assert_eq!(status.trial_days_remaining, 3);
        assert!(!status.trial_expired);
        assert!(!status.should_block_access);
    }

    #[test]
    fn last_partial_day_counts_as_one() {
        let now = base_now();
        let sub = trial_sub(Some(now + Duration::hours(5)));
        let status = evaluate(Some(&sub), false, false, now);

        assert!(status.has_active_trial);
        assert_eq!(status.trial_days_remaining, 1);
    }

    #[test]
    fn expired_trial_blocks_access() {
        let now = base_now();
        let sub = trial_sub(Some(now - Duration::hours(1)));
        let status = evaluate(Some(&sub), false, false, now);

        assert!(!status.has_active_trial);
        assert_eq!(status.trial_days_remaining, 0);
        assert!(status.trial_expired);
        assert!(status.should_block_access);
    }

    #[test]
    fn premium_status_grants_access() {
        let now = base_now();
        let mut sub = trial_sub(Some(now - Duration::days(10)));
        sub.status = "premium".to_string();
        let status = evaluate(Some(&sub), false, false, now);

        assert!(status.has_active_subscription);
        assert!(!status.should_block_access);
    }

    #[test]
    fn manual_release_overrides_expired_trial() {
        let now = base_now();
        let sub = trial_sub(Some(now - Duration::days(2)));
        let status = evaluate(Some(&sub), true, false, now);

        assert!(status.has_active_subscription);
        assert!(status.trial_expired);
        assert!(!status.should_block_access);
    }

    #[test]
    fn partnership_overrides_expired_trial() {
        let now = base_now();
        let sub = trial_sub(Some(now - Duration::days(2)));
        let status = evaluate(Some(&sub), false, true, now);

        assert!(status.has_active_subscription);
        assert!(!status.should_block_access);
    }

    #[test]
    fn missing_subscription_row_does_not_block() {
        let status = evaluate(None, false, false, base_now());

        assert!(!status.should_block_access);
        assert!(!status.has_active_trial);
        assert!(!status.has_active_subscription);
    }

    #[test]
    fn trial_without_end_date_stays_open() {
        let status = evaluate(Some(&trial_sub(None)), false, false, base_now());

        assert!(status.has_active_trial);
        assert!(!status.should_block_access);
    }
}
