//! Session cookie configuration.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngExt;
use serde::{Deserialize, Serialize};

/// Session cookie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Secret key for signing the session cookie (HMAC-SHA256).
    ///
    /// When unset, a random secret is generated at startup; sessions then
    /// do not survive a restart.
    #[serde(default)]
    pub secret: Option<String>,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Absolute session lifetime in seconds, counted from issuance.
    #[serde(default = "default_max_age")]
    pub max_age_seconds: u64,
    /// Lifetime of the OAuth state cookie in seconds.
    #[serde(default = "default_state_max_age")]
    pub state_max_age_seconds: u64,
}

impl SessionConfig {
    /// Fill in a random secret when none is configured.
    pub fn ensure_secret(&mut self) {
        if self.secret.is_none() {
            let mut bytes = [0u8; 32];
            rand::rng().fill(&mut bytes);
            self.secret = Some(URL_SAFE_NO_PAD.encode(bytes));
            tracing::warn!("No session secret configured; generated a random one");
        }
    }

    /// The signing secret. Call [`SessionConfig::ensure_secret`] first.
    pub fn secret(&self) -> &str {
        self.secret.as_deref().unwrap_or_default()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            cookie_name: default_cookie_name(),
            max_age_seconds: default_max_age(),
            state_max_age_seconds: default_state_max_age(),
        }
    }
}

fn default_cookie_name() -> String {
    "stamboek_session".to_string()
}

fn default_max_age() -> u64 {
    3600
}

fn default_state_max_age() -> u64 {
    600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_secret_generates_once() {
        let mut config = SessionConfig::default();
        assert!(config.secret.is_none());

        config.ensure_secret();
        let generated = config.secret().to_string();
        assert!(!generated.is_empty());

        config.ensure_secret();
        assert_eq!(config.secret(), generated);
    }

    #[test]
    fn test_configured_secret_is_kept() {
        let mut config = SessionConfig {
            secret: Some("fixed".to_string()),
            ..SessionConfig::default()
        };
        config.ensure_secret();
        assert_eq!(config.secret(), "fixed");
    }
}
