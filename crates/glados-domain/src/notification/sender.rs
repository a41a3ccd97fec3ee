use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// Notification message to be sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// First line of the rendered text (e.g. a hashtag)
    pub title: String,
    /// Message content/body
    pub content: String,
}

impl NotificationMessage {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Plain text body: title line followed by the content
    pub fn text(&self) -> String {
        if self.title.is_empty() {
            return self.content.clone();
        }
        format!("{}\n{}", self.title, self.content)
    }
}

/// Notification sender trait (Strategy pattern)
/// Each notification channel type implements this trait
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Send a notification message
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError>;

    /// Test the notification channel connectivity
    async fn test(&self) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_joins_title_and_content() {
        let message = NotificationMessage::new("#签到", "body");
        assert_eq!(message.text(), "#签到\nbody");
    }

    #[test]
    fn test_text_without_title() {
        let message = NotificationMessage::new("", "body");
        assert_eq!(message.text(), "body");
    }
}
