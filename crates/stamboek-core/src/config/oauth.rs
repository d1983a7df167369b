//! Identity provider (Google OAuth) configuration.

use serde::{Deserialize, Serialize};

/// Google OAuth authorization-code flow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthConfig {
    /// OAuth client id issued by the provider.
    pub client_id: String,
    /// OAuth client secret issued by the provider.
    pub client_secret: String,
    /// Callback URL registered with the provider.
    #[serde(default = "default_redirect_url")]
    pub redirect_url: String,
    /// Authorization endpoint.
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    /// Token exchange endpoint.
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// OpenID userinfo endpoint.
    #[serde(default = "default_userinfo_url")]
    pub userinfo_url: String,
    /// Requested scopes.
    #[serde(default = "default_scopes")]
    pub scopes: String,
}

fn default_redirect_url() -> String {
    "http://localhost:8000/auth".to_string()
}

fn default_auth_url() -> String {
    "https://accounts.google.com/o/oauth2/v2/auth".to_string()
}

fn default_token_url() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

fn default_userinfo_url() -> String {
    "https://openidconnect.googleapis.com/v1/userinfo".to_string()
}

fn default_scopes() -> String {
    "openid email profile".to_string()
}
