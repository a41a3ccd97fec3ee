use chrono::{DateTime, Utc};

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Notification failed: {0}")]
    Notification(String),
}

/// Source of the current instant
///
/// Injected wherever a timestamp ends up in user-visible output so that
/// the output can be pinned in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        let err = DomainError::Notification("boom".to_string());
        assert_eq!(err.to_string(), "Notification failed: boom");
    }

    #[test]
    fn test_system_clock_is_close_to_now() {
        let before = Utc::now();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
