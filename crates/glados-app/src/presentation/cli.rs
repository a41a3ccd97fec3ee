use clap::Parser;
use std::path::PathBuf;

/// Daily GLaDOS check-in with a Telegram summary
///
/// Credentials come from GLADOS_EMAIL, GLADOS_COOKIE, TG_BOT_TOKEN and
/// TG_CHAT_ID (a `.env` file in the working directory is honored).
#[derive(Debug, Parser)]
#[command(name = "glados-checkin", version, about)]
pub struct Cli {
    /// Start immediately instead of waiting a random 1-3 seconds
    #[arg(long)]
    pub no_jitter: bool,

    /// Only send a test message through the Telegram bot, then exit
    #[arg(long)]
    pub test_notification: bool,

    /// Also write JSON logs, rotated daily, into this directory
    #[arg(long, env = "GLADOS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}
