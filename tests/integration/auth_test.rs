//! Integration tests for the login flow and session lifecycle.

mod helpers;

use http::StatusCode;

use stamboek_auth::oauth::VerifiedIdentity;
use stamboek_entity::user::RoleName;

/// Walk the /login redirect and return (state nonce, state cookie header).
async fn begin_login(app: &helpers::TestApp) -> (String, String) {
    let response = app.request("GET", "/login", None, None).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let location = response.location().expect("no Location header").to_string();
    let state = location
        .split("state=")
        .nth(1)
        .map(|s| s.split('&').next().unwrap_or(s).to_string())
        .expect("no state in authorization URL");

    let state_cookie = format!(
        "oauth_state={}",
        response
            .cookie_value("oauth_state")
            .expect("no oauth_state cookie")
    );
    (state, state_cookie)
}

#[tokio::test]
async fn test_home_is_public() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["upcoming_events"].is_array());
}

#[tokio::test]
async fn test_protected_route_redirects_to_login() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/anniversaries", None, None).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login"));
}

#[tokio::test]
async fn test_valid_session_allows_access() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_user("jan@example.com", "Jan", "Gebruiker").await;
    let cookie = app.session_cookie(user_id, "jan@example.com", RoleName::Gebruiker);

    let response = app.request("GET", "/anniversaries", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_tampered_cookie_redirects_to_login() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_user("jan2@example.com", "Jan", "Gebruiker").await;
    let cookie = app.session_cookie(user_id, "jan2@example.com", RoleName::Gebruiker);
    let tampered = format!("{}x", cookie);

    let response = app
        .request("GET", "/anniversaries", None, Some(&tampered))
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login"));
}

#[tokio::test]
async fn test_unknown_identity_redirects_not_authorized() {
    // The stubbed provider verifies ghost@example.com, who has no user row.
    let app = helpers::TestApp::new().await;
    let (state, state_cookie) = begin_login(&app).await;

    let response = app
        .request(
            "GET",
            &format!("/auth?code=test-code&state={state}"),
            None,
            Some(&state_cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        response.location(),
        Some("/?error=not_authorized&email=ghost@example.com")
    );
    assert!(response.cookie_value("stamboek_session").is_none());
}

#[tokio::test]
async fn test_known_user_login_sets_session_cookie() {
    let app = helpers::TestApp::with_identity(VerifiedIdentity {
        email: "bekend@example.com".to_string(),
        subject: "sub-nieuw".to_string(),
        name: Some("Bekend".to_string()),
    })
    .await;
    app.create_user("bekend@example.com", "Bekend", "Beheerder")
        .await;

    let (state, state_cookie) = begin_login(&app).await;
    let response = app
        .request(
            "GET",
            &format!("/auth?code=test-code&state={state}"),
            None,
            Some(&state_cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));

    let token = response
        .cookie_value("stamboek_session")
        .expect("no session cookie set");
    let session = app.codec.verify(&token).expect("session cookie invalid");
    assert_eq!(session.email, "bekend@example.com");
    assert_eq!(session.role, RoleName::Beheerder);
    assert_eq!(session.google_id, "sub-nieuw");

    // The login was recorded: google_id refreshed, last_login set.
    let (google_id, has_login): (String, bool) = sqlx::query_as(
        "SELECT google_id, last_login IS NOT NULL FROM users WHERE email = 'bekend@example.com'",
    )
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(google_id, "sub-nieuw");
    assert!(has_login);
}

#[tokio::test]
async fn test_callback_with_mismatched_state_is_rejected() {
    let app = helpers::TestApp::new().await;
    let (_, state_cookie) = begin_login(&app).await;

    let response = app
        .request(
            "GET",
            "/auth?code=test-code&state=wrong",
            None,
            Some(&state_cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_user("weg@example.com", "Weg", "Gebruiker").await;
    let cookie = app.session_cookie(user_id, "weg@example.com", RoleName::Gebruiker);

    // Authenticated logout clears the cookie and lands on /.
    let response = app.request("GET", "/logout", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));
    assert_eq!(response.cookie_value("stamboek_session").as_deref(), Some(""));

    // Anonymous logout is the same observable redirect, no error.
    let response = app.request("GET", "/logout", None, None).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));
}
