use anyhow::{bail, Result};
use serde_json::Value;

/// Browser user agents, one picked per request
pub const USER_AGENTS: [&str; 2] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
];

pub const CHECK_IN_PATH: &str = "/api/user/checkin";
pub const STATUS_PATH: &str = "/api/user/status";

/// Body marker the check-in endpoint expects
pub(super) const CHECK_IN_TOKEN: &str = "glados.one";

const INVALID_JSON_PREVIEW_CHARS: usize = 50;

/// Extract origin (scheme, host, port) from URL
pub(super) fn extract_origin(url: &str) -> Result<String> {
    let parsed = url::Url::parse(url)?;
    let host = parsed.host_str().unwrap_or("");

    if let Some(port) = parsed.port() {
        Ok(format!("{}://{}:{}", parsed.scheme(), host, port))
    } else {
        Ok(format!("{}://{}", parsed.scheme(), host))
    }
}

/// Pull the free-text `message` out of a check-in reply body
///
/// A body that is not JSON becomes an `Invalid JSON: ...` message so it still
/// goes through classification.
pub(super) fn check_in_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(data) => data
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        Err(_) => {
            let preview: String = body.chars().take(INVALID_JSON_PREVIEW_CHARS).collect();
            format!("Invalid JSON: {}", preview)
        }
    }
}

/// Read `data.leftDays` from a status reply
///
/// The service sends either a number or a numeric string. Absent values
/// count as zero days.
pub(super) fn left_days(data: &Value) -> Result<f64> {
    let value = data.get("data").and_then(|d| d.get("leftDays"));

    match value {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => Ok(n.as_f64().unwrap_or(0.0)),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(days) => Ok(days),
            Err(_) => bail!("could not convert leftDays to float: {:?}", s),
        },
        Some(other) => bail!("unexpected leftDays value: {}", other),
    }
}
