use anyhow::{Context, Result};
use serde_json::json;

use super::types::{check_in_message, CHECK_IN_PATH, CHECK_IN_TOKEN};

impl super::GladosClient {
    /// POST the check-in and return the reply's raw `message` text
    pub async fn check_in(&self) -> Result<String> {
        let url = self.endpoint(CHECK_IN_PATH);
        log::debug!("Posting check-in to {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.build_headers()?)
            .json(&json!({ "token": CHECK_IN_TOKEN }))
            .timeout(self.timeouts.check_in_request)
            .send()
            .await
            .context("Failed to send check-in request")?;

        log::debug!("Check-in response status: {}", response.status());

        let response = response.error_for_status()?;
        let body = response
            .text()
            .await
            .context("Failed to read check-in response")?;

        log::debug!("Check-in response body: {}", body);

        Ok(check_in_message(&body))
    }
}
