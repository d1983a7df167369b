//! Google OAuth authorization-code flow.
//!
//! The exchange yields a verified `(email, subject)` pair. Claims are read
//! from the OpenID userinfo endpoint over TLS rather than by validating the
//! id_token locally, so no JWKS handling is needed.

use async_trait::async_trait;
use serde::Deserialize;

use stamboek_core::config::oauth::OAuthConfig;
use stamboek_core::error::{AppError, ErrorKind};
use stamboek_core::result::AppResult;

/// The verified claims returned by a successful provider exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Verified email address.
    pub email: String,
    /// The provider's stable subject identifier.
    pub subject: String,
    /// Display name, when the profile scope provides one.
    pub name: Option<String>,
}

/// The seam between the login flow and the external identity provider.
///
/// Object-safe so tests can substitute a stub for the real Google client.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Build the provider authorization URL for the given state nonce.
    /// No side effects beyond URL construction.
    fn authorize_url(&self, state: &str) -> AppResult<String>;

    /// Exchange an authorization code for verified identity claims.
    async fn exchange_code(&self, code: &str) -> AppResult<VerifiedIdentity>;
}

/// Google implementation of the authorization-code flow.
#[derive(Debug, Clone)]
pub struct GoogleOAuthClient {
    http: reqwest::Client,
    config: OAuthConfig,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    sub: Option<String>,
    email: Option<String>,
    name: Option<String>,
}

impl GoogleOAuthClient {
    /// Create a new client from OAuth configuration.
    pub fn new(config: OAuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl IdentityProvider for GoogleOAuthClient {
    fn authorize_url(&self, state: &str) -> AppResult<String> {
        let url = reqwest::Url::parse_with_params(
            &self.config.auth_url,
            &[
                ("client_id", self.config.client_id.as_str()),
                ("redirect_uri", self.config.redirect_url.as_str()),
                ("response_type", "code"),
                ("scope", self.config.scopes.as_str()),
                ("prompt", "select_account"),
                ("state", state),
            ],
        )
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid authorization endpoint: {e}"),
                e,
            )
        })?;

        Ok(url.to_string())
    }

    async fn exchange_code(&self, code: &str) -> AppResult<VerifiedIdentity> {
        let params = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_url.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::OAuthExchange, "Token exchange request failed", e)
            })?;

        if !response.status().is_success() {
            return Err(AppError::oauth_exchange(format!(
                "Provider rejected the code exchange: {}",
                response.status()
            )));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::OAuthExchange, "Malformed token response", e)
        })?;

        let info: UserInfo = self
            .http
            .get(&self.config.userinfo_url)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::OAuthExchange, "Userinfo request failed", e)
            })?
            .error_for_status()
            .map_err(|e| {
                AppError::with_source(ErrorKind::OAuthExchange, "Userinfo request rejected", e)
            })?
            .json()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::OAuthExchange, "Malformed userinfo response", e)
            })?;

        tracing::debug!(email = ?info.email, "Received userinfo claims from provider");

        let email = info
            .email
            .ok_or_else(|| AppError::oauth_exchange("Provider response is missing the email claim"))?;
        let subject = info
            .sub
            .ok_or_else(|| AppError::oauth_exchange("Provider response is missing the subject claim"))?;

        Ok(VerifiedIdentity {
            email,
            subject,
            name: info.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> OAuthConfig {
        OAuthConfig {
            client_id: "client-123".to_string(),
            client_secret: "geheim".to_string(),
            redirect_url: "http://localhost:8000/auth".to_string(),
            auth_url: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_url: "https://oauth2.googleapis.com/token".to_string(),
            userinfo_url: "https://openidconnect.googleapis.com/v1/userinfo".to_string(),
            scopes: "openid email profile".to_string(),
        }
    }

    #[test]
    fn test_authorize_url_carries_required_params() {
        let client = GoogleOAuthClient::new(test_config());
        let url = client.authorize_url("state-abc").unwrap();

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("client_id=client-123"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=openid+email+profile"));
        assert!(url.contains("prompt=select_account"));
        assert!(url.contains("state=state-abc"));
        assert!(!url.contains("geheim"));
    }
}
