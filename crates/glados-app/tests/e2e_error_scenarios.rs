/// E2E Test: Error Scenarios
///
/// Each failure domain stays isolated:
/// 1. GLaDOS errors become failure outcomes and still reach Telegram
/// 2. Telegram errors are logged and swallowed
/// 3. Missing configuration is reported in one error
mod common;

use httpmock::prelude::*;
use serde_json::json;
use tracing::Level;

use common::CapturedEvents;

use glados_app::presentation::bootstrap::build_agent;
use glados_infrastructure::config::{AppConfig, ConfigError};

fn config_for(glados_url: String, telegram_url: String) -> AppConfig {
    AppConfig::from_lookup(move |name| match name {
        "GLADOS_EMAIL" => Some("e2e@example.com".to_string()),
        "GLADOS_COOKIE" => Some("koa:sess=e2e".to_string()),
        "TG_BOT_TOKEN" => Some("999:E2E".to_string()),
        "TG_CHAT_ID" => Some("4242".to_string()),
        "GLADOS_BASE_URL" => Some(glados_url.clone()),
        "TG_API_BASE_URL" => Some(telegram_url.clone()),
        _ => None,
    })
    .expect("Configuration should load")
}

#[tokio::test]
async fn e2e_error_glados_down_still_notifies() {
    // ============================================================
    // Setup: GLaDOS answers 500 on both endpoints
    // ============================================================
    let glados = MockServer::start_async().await;
    let telegram = MockServer::start_async().await;

    let check_in_mock = glados.mock(|when, then| {
        when.method(POST).path("/api/user/checkin");
        then.status(500).body("Internal Server Error");
    });
    let status_mock = glados.mock(|when, then| {
        when.method(GET).path("/api/user/status");
        then.status(500).body("Internal Server Error");
    });

    let notify_mock = telegram.mock(|when, then| {
        when.method(POST)
            .path("/bot999:E2E/sendMessage")
            .body_includes("签到失败")
            .body_includes("状态查询失败");
        then.status(200).json_body(json!({"ok": true}));
    });

    let events = CapturedEvents::default();
    let _guard = events.set_default();

    build_agent(&config_for(glados.base_url(), telegram.base_url()))
        .expect("Agent should build")
        .without_jitter()
        .execute()
        .await;

    // Upstream failures go into the summary, not onto the console
    assert_eq!(events.console_lines().len(), 2);

    check_in_mock.assert_calls(1);
    status_mock.assert_calls(1);
    notify_mock.assert_calls(1);

    println!("✓ Upstream failures reported through the notifier");
}

#[tokio::test]
async fn e2e_error_telegram_rejects_message() {
    let glados = MockServer::start_async().await;
    let telegram = MockServer::start_async().await;

    glados.mock(|when, then| {
        when.method(POST).path("/api/user/checkin");
        then.status(200).json_body(json!({"message": "Got 1 Points"}));
    });
    glados.mock(|when, then| {
        when.method(GET).path("/api/user/status");
        then.status(200).json_body(json!({"data": {"leftDays": 1}}));
    });

    let notify_mock = telegram.mock(|when, then| {
        when.method(POST).path("/bot999:E2E/sendMessage");
        then.status(400).json_body(json!({
            "ok": false,
            "description": "Bad Request: can't parse entities"
        }));
    });

    let events = CapturedEvents::default();
    let _guard = events.set_default();

    // Must return normally; no retry
    build_agent(&config_for(glados.base_url(), telegram.base_url()))
        .expect("Agent should build")
        .without_jitter()
        .execute()
        .await;

    notify_mock.assert_calls(1);
    println!("✓ Notification failure swallowed");

    let warnings: Vec<String> = events
        .console_lines()
        .into_iter()
        .filter(|(level, _)| *level == Level::WARN)
        .map(|(_, message)| message)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("⚠️ 通知发送失败: "));
    assert!(warnings[0].contains("400"));
    assert_eq!(events.console_lines().len(), 3);
    println!("✓ One warning on the console");
}

#[tokio::test]
async fn e2e_error_unreachable_hosts() {
    // Nothing listens on port 9 of localhost
    let agent = build_agent(&config_for(
        "http://127.0.0.1:9".to_string(),
        "http://127.0.0.1:9".to_string(),
    ))
    .expect("Agent should build")
    .without_jitter();

    agent.execute().await;

    println!("✓ Connection errors never escape execute()");
}

#[test]
fn e2e_error_missing_configuration() {
    let err = AppConfig::from_lookup(|name| match name {
        "GLADOS_EMAIL" => Some("e2e@example.com".to_string()),
        "TG_CHAT_ID" => Some("4242".to_string()),
        _ => None,
    })
    .unwrap_err();

    match err {
        ConfigError::MissingVariables(names) => {
            assert_eq!(names, vec!["GLADOS_COOKIE", "TG_BOT_TOKEN"]);
        }
        other => panic!("Unexpected error: {}", other),
    }

    println!("✓ Missing configuration listed in one error");
}
