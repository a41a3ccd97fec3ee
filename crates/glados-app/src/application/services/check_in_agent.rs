use std::sync::Arc;
use tracing::{info, instrument, warn};

use glados_domain::check_in::{CheckInOutcome, CheckInService, StatusOutcome};
use glados_domain::notification::{CheckInReport, NotificationSender};
use glados_domain::Clock;
use glados_infrastructure::config::TimeoutConfig;
use glados_infrastructure::random::RandomSource;

/// Runs one daily check-in for one account and reports it
///
/// Every step is attempted regardless of how the previous one went; failures
/// end up in the notification text instead of propagating.
pub struct CheckInAgent {
    account: String,
    check_in_service: Arc<dyn CheckInService>,
    notifier: Arc<dyn NotificationSender>,
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
    timeouts: TimeoutConfig,
    jitter: bool,
}

impl CheckInAgent {
    pub fn new(
        account: impl Into<String>,
        check_in_service: Arc<dyn CheckInService>,
        notifier: Arc<dyn NotificationSender>,
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
        timeouts: TimeoutConfig,
    ) -> Self {
        Self {
            account: account.into(),
            check_in_service,
            notifier,
            clock,
            random,
            timeouts,
            jitter: true,
        }
    }

    /// Skip the random start-up delay
    pub fn without_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }

    pub async fn perform_check_in(&self) -> CheckInOutcome {
        self.check_in_service.perform_check_in().await
    }

    pub async fn check_status(&self) -> StatusOutcome {
        self.check_in_service.check_status().await
    }

    /// Send the run summary; delivery problems are logged and dropped
    pub async fn send_notification(&self, status_message: &str, check_in_message: &str) {
        let message = CheckInReport::new(&self.account, check_in_message, status_message)
            .to_message(self.clock.now());

        if let Err(e) = self.notifier.send(&message).await {
            warn!("⚠️ 通知发送失败: {}", e);
        }
    }

    #[instrument(skip(self), fields(account = %self.account))]
    pub async fn execute(&self) {
        info!("🔍 开始处理账户: {}", self.account);

        if self.jitter {
            let delay = self
                .random
                .duration_between(self.timeouts.jitter_min, self.timeouts.jitter_max);
            tracing::debug!("Sleeping {}ms before check-in", delay.as_millis());
            tokio::time::sleep(delay).await;
        }

        let check_in = self.perform_check_in().await;
        let status = self.check_status().await;

        self.send_notification(&status.message, &check_in.message)
            .await;

        info!("🏁 流程执行完毕");
    }
}
