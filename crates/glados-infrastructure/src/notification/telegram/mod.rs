mod message_builder;
mod sender;

use reqwest::Client;
use std::time::Duration;

/// Telegram Bot API notification sender
pub struct TelegramBotSender {
    bot_token: String,
    chat_id: String,
    api_base_url: String,
    timeout: Duration,
    client: Client,
}

impl TelegramBotSender {
    pub fn new(
        api_base_url: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let api_base_url: String = api_base_url.into();
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            timeout,
            client: Client::new(),
        }
    }

    fn build_send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base_url, self.bot_token)
    }
}
