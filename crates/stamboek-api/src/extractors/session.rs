//! `SessionUser` extractor — the authentication gate.
//!
//! Reads the session cookie, verifies its signature and expiry, and injects
//! the asserted session into the handler. Rejection surfaces as a redirect
//! to the login route, so no protected handler body ever runs without a
//! valid session.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use stamboek_core::error::AppError;
use stamboek_entity::session::Session;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated session available in handlers.
#[derive(Debug, Clone)]
pub struct SessionUser(pub Session);

impl SessionUser {
    /// Returns the inner [`Session`].
    pub fn session(&self) -> &Session {
        &self.0
    }
}

impl std::ops::Deref for SessionUser {
    type Target = Session;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let cookie = jar
            .get(&state.config.session.cookie_name)
            .ok_or_else(|| AppError::authentication("No session cookie"))?;

        let session = state.codec.verify(cookie.value())?;

        Ok(SessionUser(session))
    }
}
