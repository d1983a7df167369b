//! Login flow orchestration.
//!
//! Ties the provider exchange, the user directory, and the session codec
//! together: a verified external identity either maps onto an active
//! internal user (login recorded, session minted) or takes the designed
//! unknown-identity branch.

use std::sync::Arc;

use async_trait::async_trait;

use stamboek_core::result::AppResult;
use stamboek_database::repositories::UserRepository;
use stamboek_entity::session::Session;
use stamboek_entity::user::User;

use crate::oauth::IdentityProvider;
use crate::session::SessionCodec;

/// The seam between the login flow and user persistence.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve a verified email to an internal user.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Record a successful login: last_login and google_id refresh.
    async fn record_login(&self, user_id: i64, google_id: &str) -> AppResult<User>;
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        UserRepository::find_by_email(self, email).await
    }

    async fn record_login(&self, user_id: i64, google_id: &str) -> AppResult<User> {
        UserRepository::record_login(self, user_id, google_id).await
    }
}

/// The result of completing a login callback.
#[derive(Debug)]
pub enum LoginOutcome {
    /// A known, active user: the signed cookie value is ready to set.
    Authorized {
        /// The session written into the cookie.
        session: Session,
        /// The signed cookie value.
        token: String,
    },
    /// The identity was verified by the provider but is not an authorized
    /// user. This is a designed branch, not an error: the caller redirects
    /// to a not-authorized view carrying the attempted email.
    UnknownIdentity {
        /// The attempted email, for operator visibility.
        email: String,
    },
}

/// Orchestrates the redirect-based login flow.
pub struct LoginFlow {
    provider: Arc<dyn IdentityProvider>,
    directory: Arc<dyn UserDirectory>,
    codec: Arc<SessionCodec>,
}

impl LoginFlow {
    /// Create a new login flow.
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        directory: Arc<dyn UserDirectory>,
        codec: Arc<SessionCodec>,
    ) -> Self {
        Self {
            provider,
            directory,
            codec,
        }
    }

    /// Build the provider authorization URL for a state nonce.
    pub fn authorize_url(&self, state: &str) -> AppResult<String> {
        self.provider.authorize_url(state)
    }

    /// Complete the callback: exchange the code and resolve the identity.
    pub async fn complete(&self, code: &str) -> AppResult<LoginOutcome> {
        let identity = self.provider.exchange_code(code).await?;

        let Some(user) = self.directory.find_by_email(&identity.email).await? else {
            tracing::info!(email = %identity.email, "Login attempt by unknown identity");
            return Ok(LoginOutcome::UnknownIdentity {
                email: identity.email,
            });
        };

        if !user.active {
            tracing::info!(email = %user.email, "Login attempt by deactivated user");
            return Ok(LoginOutcome::UnknownIdentity { email: user.email });
        }

        let Some(role) = user.role else {
            tracing::info!(email = %user.email, "Login attempt by user without a role");
            return Ok(LoginOutcome::UnknownIdentity { email: user.email });
        };

        let user = self.directory.record_login(user.id, &identity.subject).await?;

        let session = Session {
            user_id: user.id,
            email: user.email,
            name: user.name,
            role,
            google_id: identity.subject,
        };
        let token = self.codec.sign(&session)?;

        tracing::info!(user_id = session.user_id, email = %session.email, "User logged in");
        Ok(LoginOutcome::Authorized { session, token })
    }
}
