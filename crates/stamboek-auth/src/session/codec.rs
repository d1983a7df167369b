//! Session cookie signing and verification.
//!
//! The cookie value is an HMAC-SHA256-signed token carrying the session
//! tuple plus issuance and absolute expiry timestamps. The cookie itself is
//! the source of truth; nothing is stored server-side.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use stamboek_core::config::session::SessionConfig;
use stamboek_core::error::AppError;
use stamboek_core::result::AppResult;
use stamboek_entity::session::Session;
use stamboek_entity::user::RoleName;

/// The signed payload carried in the session cookie.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    /// Subject — the user id.
    sub: i64,
    /// Email at login time.
    email: String,
    /// Display name at login time.
    name: String,
    /// Role at login time.
    role: RoleName,
    /// External subject identifier verified at login.
    google_id: String,
    /// Issued-at timestamp (seconds since epoch).
    iat: i64,
    /// Expiration timestamp (seconds since epoch), absolute from issuance.
    exp: i64,
}

/// Signs and verifies session cookie values.
#[derive(Clone)]
pub struct SessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    max_age_seconds: i64,
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCodec")
            .field("max_age_seconds", &self.max_age_seconds)
            .finish()
    }
}

impl SessionCodec {
    /// Create a new codec from session configuration.
    pub fn new(config: &SessionConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            encoding_key: EncodingKey::from_secret(config.secret().as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret().as_bytes()),
            validation,
            max_age_seconds: config.max_age_seconds as i64,
        }
    }

    /// Sign a session into a cookie value with the configured absolute TTL.
    pub fn sign(&self, session: &Session) -> AppResult<String> {
        let now = Utc::now().timestamp();
        self.sign_with_expiry(session, now, now + self.max_age_seconds)
    }

    fn sign_with_expiry(&self, session: &Session, iat: i64, exp: i64) -> AppResult<String> {
        let claims = SessionClaims {
            sub: session.user_id,
            email: session.email.clone(),
            name: session.name.clone(),
            role: session.role,
            google_id: session.google_id.clone(),
            iat,
            exp,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign session: {e}")))
    }

    /// Verify a cookie value and return the session it asserts.
    ///
    /// Any failure (bad signature, malformed token, past expiry) is an
    /// authentication failure; callers surface it as a redirect to login.
    pub fn verify(&self, token: &str) -> AppResult<Session> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::authentication("Session has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::authentication("Invalid session signature")
                }
                _ => AppError::authentication(format!("Invalid session: {e}")),
            },
        )?;

        let claims = data.claims;
        Ok(Session {
            user_id: claims.sub,
            email: claims.email,
            name: claims.name,
            role: claims.role,
            google_id: claims.google_id,
        })
    }

    /// The configured cookie lifetime in seconds.
    pub fn max_age_seconds(&self) -> i64 {
        self.max_age_seconds
    }
}
