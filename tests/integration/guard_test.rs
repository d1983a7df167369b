//! Integration tests for the role and ownership gates.

mod helpers;

use http::StatusCode;

use stamboek_entity::user::RoleName;

#[tokio::test]
async fn test_role_denial_redirects_home_with_flash() {
    let app = helpers::TestApp::new().await;
    let user_id = app
        .create_user("lid@example.com", "Lid", "Gebruiker")
        .await;
    let cookie = app.session_cookie(user_id, "lid@example.com", RoleName::Gebruiker);

    // /users is Administrator-only.
    let response = app.request("GET", "/users", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));

    let flash = response.cookie_value("auth_error").expect("no flash cookie");
    assert!(!flash.is_empty());

    let flash_header = response
        .set_cookies()
        .into_iter()
        .find(|c| c.starts_with("auth_error="))
        .unwrap();
    assert!(flash_header.contains("Max-Age=30"));
}

#[tokio::test]
async fn test_flash_is_consumed_on_next_render() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/", None, Some("auth_error=geweigerd"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["auth_error"], "geweigerd");

    // The render clears the cookie.
    let clearing = response
        .set_cookies()
        .into_iter()
        .find(|c| c.starts_with("auth_error="))
        .expect("no clearing cookie");
    assert!(clearing.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_role_denial_does_not_mutate() {
    let app = helpers::TestApp::new().await;
    let user_id = app
        .create_user("lid2@example.com", "Lid", "Gebruiker")
        .await;
    let cookie = app.session_cookie(user_id, "lid2@example.com", RoleName::Gebruiker);

    let (before,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM anniversary_types")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();

    // Vocabulary mutations are Administrator/Beheerder-only.
    let response = app
        .request(
            "POST",
            "/anniversary-types",
            Some("name=Pensioen"),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));

    let (after,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM anniversary_types")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_non_owner_edit_is_forbidden_naming_the_record_kind() {
    let app = helpers::TestApp::new().await;
    let owner_id = app.create_user("b@example.com", "B", "Gebruiker").await;
    let editor_id = app.create_user("a@example.com", "A", "Beheerder").await;
    let family_id = app.create_family_owned_by("Jansen", owner_id).await;

    let cookie = app.session_cookie(editor_id, "a@example.com", RoleName::Beheerder);
    let response = app
        .request(
            "PUT",
            &format!("/families/{family_id}"),
            Some("family_name=Hacked&street=S&house_number=1&postal_code=P&city=C"),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let message = response.body["message"].as_str().unwrap();
    assert!(message.contains("familie"), "message was: {message}");

    // The mutation did not occur.
    let (name,): (String,) = sqlx::query_as("SELECT family_name FROM families WHERE id = $1")
        .bind(family_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(name, "Jansen");
}

#[tokio::test]
async fn test_administrator_edits_regardless_of_creator() {
    let app = helpers::TestApp::new().await;
    let owner_id = app.create_user("b2@example.com", "B", "Gebruiker").await;
    let admin_id = app
        .create_user("admin@example.com", "Admin", "Administrator")
        .await;
    let family_id = app.create_family_owned_by("Jansen", owner_id).await;

    let cookie = app.session_cookie(admin_id, "admin@example.com", RoleName::Administrator);
    let response = app
        .request(
            "PUT",
            &format!("/families/{family_id}"),
            Some("family_name=Janssen&street=S&house_number=1&postal_code=P&city=C"),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let (name,): (String,) = sqlx::query_as("SELECT family_name FROM families WHERE id = $1")
        .bind(family_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(name, "Janssen");
}

#[tokio::test]
async fn test_owner_edits_own_record() {
    let app = helpers::TestApp::new().await;
    let owner_id = app.create_user("c@example.com", "C", "Gebruiker").await;
    let family_id = app.create_family_owned_by("Pietersen", owner_id).await;

    let cookie = app.session_cookie(owner_id, "c@example.com", RoleName::Gebruiker);
    let response = app
        .request(
            "PUT",
            &format!("/families/{family_id}"),
            Some("family_name=Pieterse&street=S&house_number=1&postal_code=P&city=C"),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_change_owner_is_administrator_only() {
    let app = helpers::TestApp::new().await;
    let owner_id = app.create_user("d@example.com", "D", "Gebruiker").await;
    let other_id = app.create_user("e@example.com", "E", "Gebruiker").await;
    let admin_id = app
        .create_user("admin2@example.com", "Admin", "Administrator")
        .await;
    let family_id = app.create_family_owned_by("Visser", owner_id).await;

    // A non-administrative caller is denied.
    let cookie = app.session_cookie(owner_id, "d@example.com", RoleName::Gebruiker);
    let body = format!("kind=families&record_id={family_id}&new_owner_id={other_id}");
    let response = app
        .request("POST", "/admin/change-owner", Some(&body), Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));

    // The Administrator reassigns ownership.
    let cookie = app.session_cookie(admin_id, "admin2@example.com", RoleName::Administrator);
    let response = app
        .request("POST", "/admin/change-owner", Some(&body), Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let (created_by,): (i64,) = sqlx::query_as("SELECT created_by FROM families WHERE id = $1")
        .bind(family_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(created_by, other_id);
}
