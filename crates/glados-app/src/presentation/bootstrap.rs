use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

use super::cli::Cli;
use crate::application::services::CheckInAgent;
use glados_domain::notification::NotificationSender;
use glados_domain::SystemClock;
use glados_infrastructure::config::AppConfig;
use glados_infrastructure::http::GladosClient;
use glados_infrastructure::notification::TelegramBotSender;
use glados_infrastructure::random::{RandomSource, ThreadRandom};

/// Telegram sender for the configured bot and chat
pub fn build_notifier(config: &AppConfig) -> Arc<dyn NotificationSender> {
    Arc::new(TelegramBotSender::new(
        config.telegram_api_base_url.as_str(),
        config.credentials.bot_token(),
        config.credentials.chat_id(),
        config.timeouts.notification_request,
    ))
}

/// Wire the production agent from configuration
pub fn build_agent(config: &AppConfig) -> Result<CheckInAgent> {
    let random: Arc<dyn RandomSource> = Arc::new(ThreadRandom);

    let glados = GladosClient::new(
        &config.glados_base_url,
        config.credentials.cookie(),
        config.timeouts.clone(),
        random.clone(),
    )?;

    debug!(
        "✓ Agent ready for {} (GLaDOS at {})",
        config.credentials.email(),
        config.glados_base_url
    );

    Ok(CheckInAgent::new(
        config.credentials.email(),
        Arc::new(glados),
        build_notifier(config),
        Arc::new(SystemClock),
        random,
        config.timeouts.clone(),
    ))
}

/// Load configuration through `lookup` and perform one invocation
///
/// A configuration error is returned untouched; the caller reports it.
pub async fn run<F>(cli: &Cli, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let config = AppConfig::from_lookup(lookup)?;

    if cli.test_notification {
        build_notifier(&config).test().await?;
        info!("✅ Test notification sent");
        return Ok(());
    }

    let mut agent = build_agent(&config)?;
    if cli.no_jitter {
        agent = agent.without_jitter();
    }

    agent.execute().await;

    Ok(())
}
