//! Auth handlers — login redirect, provider callback, logout.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use stamboek_auth::login::LoginOutcome;
use stamboek_auth::oauth;
use stamboek_core::error::AppError;

use crate::dto::request::CallbackQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// Name of the short-lived OAuth state cookie.
const OAUTH_STATE_COOKIE: &str = "oauth_state";

/// Build the session cookie from a signed token.
fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::build((state.config.session.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(state.codec.max_age_seconds()))
        .build();

    if state.config.server.is_production() {
        cookie.set_secure(true);
    }
    cookie
}

/// Build the short-lived state cookie for the authorization round trip.
fn state_cookie(state: &AppState, nonce: String) -> Cookie<'static> {
    let mut cookie = Cookie::build((OAUTH_STATE_COOKIE, nonce))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(
            state.config.session.state_max_age_seconds as i64,
        ))
        .build();

    if state.config.server.is_production() {
        cookie.set_secure(true);
    }
    cookie
}

/// A removal cookie for the given name, matching the issued path.
fn removal_cookie(name: String) -> Cookie<'static> {
    Cookie::build((name, "")).path("/").build()
}

/// GET /login — redirect to the provider authorization endpoint.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), ApiError> {
    let nonce = oauth::new_state();
    let url = state.login_flow.authorize_url(&nonce)?;

    let jar = jar.add(state_cookie(&state, nonce));
    Ok((jar, Redirect::to(&url)))
}

/// GET /auth — the provider callback.
///
/// A verified identity with a matching active user gets a session cookie
/// and lands on `/`; an unknown identity takes the designed not-authorized
/// redirect carrying the attempted email. Provider failures surface as 400.
pub async fn callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<CallbackQuery>,
) -> Result<Response, ApiError> {
    let expected_state = jar.get(OAUTH_STATE_COOKIE).map(|c| c.value().to_string());
    let jar = jar.remove(removal_cookie(OAUTH_STATE_COOKIE.to_string()));

    let code = query
        .code
        .ok_or_else(|| AppError::oauth_exchange("Missing authorization code"))?;

    match (query.state.as_deref(), expected_state.as_deref()) {
        (Some(received), Some(expected)) if received == expected => {}
        _ => {
            return Err(AppError::oauth_exchange("State mismatch in OAuth callback").into());
        }
    }

    match state.login_flow.complete(&code).await? {
        LoginOutcome::Authorized { token, .. } => {
            let jar = jar.add(session_cookie(&state, token));
            Ok((jar, Redirect::to("/")).into_response())
        }
        LoginOutcome::UnknownIdentity { email } => {
            let target = format!("/?error=not_authorized&email={email}");
            Ok((jar, Redirect::to(&target)).into_response())
        }
    }
}

/// GET /logout — clear the session cookie.
///
/// Idempotent: logging out while anonymous produces the same redirect.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if jar.get(&state.config.session.cookie_name).is_some() {
        tracing::info!("User logged out");
    }

    let jar = jar.remove(removal_cookie(state.config.session.cookie_name.clone()));
    (jar, Redirect::to("/"))
}
