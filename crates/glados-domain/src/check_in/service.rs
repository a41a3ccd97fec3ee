use async_trait::async_trait;

use super::value_objects::{CheckInOutcome, StatusOutcome};

/// Remote check-in service
///
/// Both calls are infallible at this boundary: every transport, HTTP or
/// decoding problem is folded into a failed outcome carrying the error text.
#[async_trait]
pub trait CheckInService: Send + Sync {
    /// Claim today's check-in reward
    async fn perform_check_in(&self) -> CheckInOutcome;

    /// Query remaining membership days
    async fn check_status(&self) -> StatusOutcome;
}
