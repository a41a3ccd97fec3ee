use std::time::Duration;

/// Timeouts and delays used by a single check-in run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// POST /api/user/checkin
    pub check_in_request: Duration,

    /// GET /api/user/status
    pub status_request: Duration,

    /// Telegram sendMessage
    pub notification_request: Duration,

    /// Lower bound of the random start-up delay
    pub jitter_min: Duration,

    /// Upper bound of the random start-up delay
    pub jitter_max: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            check_in_request: Duration::from_secs(15),
            status_request: Duration::from_secs(15),
            notification_request: Duration::from_secs(10),
            jitter_min: Duration::from_secs(1),
            jitter_max: Duration::from_secs(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let timeouts = TimeoutConfig::default();
        assert_eq!(timeouts.check_in_request, Duration::from_secs(15));
        assert_eq!(timeouts.status_request, Duration::from_secs(15));
        assert_eq!(timeouts.notification_request, Duration::from_secs(10));
        assert!(timeouts.jitter_min < timeouts.jitter_max);
    }
}
