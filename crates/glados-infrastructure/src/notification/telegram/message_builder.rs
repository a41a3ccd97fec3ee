use glados_domain::notification::NotificationMessage;
use serde_json::json;

impl super::TelegramBotSender {
    /// Build a sendMessage payload rendered with Telegram's legacy Markdown
    pub(super) fn build_markdown_message(&self, message: &NotificationMessage) -> serde_json::Value {
        json!({
            "chat_id": self.chat_id,
            "text": message.text(),
            "parse_mode": "Markdown"
        })
    }
}
