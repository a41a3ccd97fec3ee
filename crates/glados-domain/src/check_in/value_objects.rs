use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of the daily check-in call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInOutcome {
    pub success: bool,
    pub message: String,
}

impl CheckInOutcome {
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Transport, HTTP status or decoding error on the check-in request
    pub fn request_failed(error: impl fmt::Display) -> Self {
        Self::failed(format!("签到失败: {} ❌", error))
    }
}

/// Result of the account status query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOutcome {
    pub success: bool,
    pub message: String,
}

impl StatusOutcome {
    /// Remaining membership days, rendered with one decimal
    pub fn left_days(days: f64) -> Self {
        Self {
            success: true,
            message: format!("剩余天数: {:.1} 🗓️", days),
        }
    }

    pub fn request_failed(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            message: format!("状态查询失败: {} ❌", error),
        }
    }
}
