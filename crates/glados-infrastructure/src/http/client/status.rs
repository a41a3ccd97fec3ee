use anyhow::{Context, Result};
use serde_json::Value;

use super::types::{left_days, STATUS_PATH};

impl super::GladosClient {
    /// GET the account status and return remaining membership days
    pub async fn fetch_left_days(&self) -> Result<f64> {
        let url = self.endpoint(STATUS_PATH);
        log::debug!("Querying status at {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.build_headers()?)
            .timeout(self.timeouts.status_request)
            .send()
            .await
            .context("Failed to send status request")?;

        log::debug!("Status response status: {}", response.status());

        let data: Value = response
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse status response")?;

        left_days(&data)
    }
}
