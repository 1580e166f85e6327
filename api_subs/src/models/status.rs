use serde::Serialize;

/// The derived access picture the web app renders banners and locks from.
#[derive(Debug, Clone, Serialize)]
pub struct AccessStatus {
    pub has_active_trial: bool,
    pub has_active_subscription: bool,
    pub trial_days_remaining: i64,
    pub trial_expired: bool,
    pub should_block_access: bool,
}

impl AccessStatus {
    /// Everything off: the state assumed for a user with no subscription
    /// row, which deliberately does not block.
    pub fn unrestricted() -> Self {
        AccessStatus {
            has_active_trial: false,
            has_active_subscription: false,
            trial_days_remaining: 0,
            trial_expired: false,
            should_block_access: false,
        }
    }
}
