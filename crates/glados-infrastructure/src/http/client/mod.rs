mod check_in;
mod status;
mod types;

pub use types::{CHECK_IN_PATH, STATUS_PATH, USER_AGENTS};

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client};
use std::sync::Arc;

use glados_domain::check_in::{
    CheckInDomainService, CheckInOutcome, CheckInService, StatusOutcome,
};

use crate::config::TimeoutConfig;
use crate::random::RandomSource;
use types::extract_origin;

/// HTTP client for the GLaDOS user API
///
/// Authenticates with the raw session cookie string. Timeouts are applied per
/// request; nothing is retried.
pub struct GladosClient {
    pub(super) client: Client,
    pub(super) base_url: String,
    origin: String,
    cookie: String,
    pub(super) timeouts: TimeoutConfig,
    random: Arc<dyn RandomSource>,
}

impl GladosClient {
    pub fn new(
        base_url: &str,
        cookie: &str,
        timeouts: TimeoutConfig,
        random: Arc<dyn RandomSource>,
    ) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.trim_end_matches('/').to_string();
        let origin = extract_origin(&base_url)?;

        Ok(Self {
            client,
            base_url,
            origin,
            cookie: cookie.to_string(),
            timeouts,
            random,
        })
    }

    pub(super) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn user_agent(&self) -> &'static str {
        USER_AGENTS[self.random.index(USER_AGENTS.len())]
    }

    /// Headers shared by both GLaDOS calls
    pub(super) fn build_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::COOKIE,
            header::HeaderValue::from_str(&self.cookie)
                .context("Session cookie is not a valid header value")?,
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(self.user_agent()),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json;charset=UTF-8"),
        );
        headers.insert(header::ORIGIN, header::HeaderValue::from_str(&self.origin)?);
        Ok(headers)
    }
}

#[async_trait]
impl CheckInService for GladosClient {
    async fn perform_check_in(&self) -> CheckInOutcome {
        match self.check_in().await {
            Ok(message) => CheckInDomainService::classify_message(&message),
            Err(e) => {
                debug!("Check-in request failed: {:#}", e);
                CheckInOutcome::request_failed(format!("{:#}", e))
            }
        }
    }

    async fn check_status(&self) -> StatusOutcome {
        match self.fetch_left_days().await {
            Ok(days) => StatusOutcome::left_days(days),
            Err(e) => {
                debug!("Status request failed: {:#}", e);
                StatusOutcome::request_failed(format!("{:#}", e))
            }
        }
    }
}
