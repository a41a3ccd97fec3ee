use async_trait::async_trait;

use glados_domain::notification::{NotificationMessage, NotificationSender};
use glados_domain::DomainError;

#[async_trait]
impl NotificationSender for super::TelegramBotSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        let url = self.build_send_message_url();
        let payload = self.build_markdown_message(message);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                DomainError::Notification(format!(
                    "Failed to send Telegram message: {}",
                    e.without_url()
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Notification(format!(
                "Telegram API failed with status {}: {}",
                status, body
            )));
        }

        let resp_body: serde_json::Value = response.json().await.map_err(|e| {
            DomainError::Notification(format!("Failed to parse Telegram response: {}", e))
        })?;

        // Telegram returns {"ok": true, ...} on success
        if resp_body.get("ok").and_then(|ok| ok.as_bool()) == Some(false) {
            let description = resp_body
                .get("description")
                .and_then(|d| d.as_str())
                .unwrap_or("Unknown error");
            return Err(DomainError::Notification(format!(
                "Telegram API error: {}",
                description
            )));
        }

        log::debug!("Telegram notification delivered to chat {}", self.chat_id);
        Ok(())
    }

    async fn test(&self) -> Result<(), DomainError> {
        let test_message = NotificationMessage::new(
            "#测试",
            "这是一条来自 GLaDOS 签到助手的测试通知，如果您收到此消息，说明通知渠道配置成功！",
        );

        self.send(&test_message).await
    }
}
