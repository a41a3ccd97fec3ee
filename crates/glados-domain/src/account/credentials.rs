use std::fmt;

/// Everything a run needs to talk to GLaDOS and the notifier
///
/// Built once at startup and never mutated afterwards. Values are trimmed;
/// presence is checked by whoever reads them from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    cookie: String,
    bot_token: String,
    chat_id: String,
}

impl Credentials {
    pub fn new(
        email: impl Into<String>,
        cookie: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into().trim().to_string(),
            cookie: cookie.into().trim().to_string(),
            bot_token: bot_token.into().trim().to_string(),
            chat_id: chat_id.into().trim().to_string(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn cookie(&self) -> &str {
        &self.cookie
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("cookie", &"<redacted>")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
