use chrono::{DateTime, FixedOffset, Utc};

use super::sender::NotificationMessage;

const BEIJING_OFFSET_SECS: i32 = 8 * 3600;
const REPORT_TAG: &str = "#签到";

/// Format `now` as `YYYY-MM-DD HH:MM` at UTC+8, independent of the host zone
pub fn beijing_time(now: DateTime<Utc>) -> String {
    let local = FixedOffset::east_opt(BEIJING_OFFSET_SECS)
        .map(|tz| now.with_timezone(&tz))
        .unwrap_or_else(|| now.fixed_offset());
    local.format("%Y-%m-%d %H:%M").to_string()
}

/// Summary of one run, sent once through the notifier
#[derive(Debug, Clone)]
pub struct CheckInReport<'a> {
    pub account: &'a str,
    pub check_in_message: &'a str,
    pub status_message: &'a str,
}

impl<'a> CheckInReport<'a> {
    pub fn new(account: &'a str, check_in_message: &'a str, status_message: &'a str) -> Self {
        Self {
            account,
            check_in_message,
            status_message,
        }
    }

    pub fn to_message(&self, now: DateTime<Utc>) -> NotificationMessage {
        let content = format!(
            "🕒 北京时间: {}\n📧 账户: {}\n\n🔔 签到结果: {}\n📊 账户状态: {}\n\n✅ 任务执行完成",
            beijing_time(now),
            self.account,
            self.check_in_message,
            self.status_message
        );

        NotificationMessage::new(REPORT_TAG, content)
    }
}
