//! Integration tests for family CRUD.

mod helpers;

use http::StatusCode;

use stamboek_entity::user::RoleName;

#[tokio::test]
async fn test_family_listing_is_public() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/families", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"].is_array());
}

#[tokio::test]
async fn test_create_family_stamps_creator() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_user("f@example.com", "F", "Gebruiker").await;
    let cookie = app.session_cookie(user_id, "f@example.com", RoleName::Gebruiker);

    let response = app
        .request(
            "POST",
            "/families",
            Some("family_name=Bakker&street=Kerkstraat&house_number=12&postal_code=1234%20AB&city=Dorp"),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/families"));

    let (created_by,): (Option<i64>,) =
        sqlx::query_as("SELECT created_by FROM families WHERE family_name = 'Bakker'")
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(created_by, Some(user_id));
}

#[tokio::test]
async fn test_create_family_requires_session() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/families",
            Some("family_name=Bakker&street=K&house_number=1&postal_code=P&city=C"),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login"));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM families")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_family_detail_includes_members() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_user("g@example.com", "G", "Gebruiker").await;
    let family_id = app.create_family_owned_by("Smit", user_id).await;

    sqlx::query(
        "INSERT INTO persons (first_name, last_name, family_id, created_by) \
         VALUES ('Piet', 'Smit', $1, $2)",
    )
    .bind(family_id)
    .bind(user_id)
    .execute(&app.db_pool)
    .await
    .unwrap();

    let cookie = app.session_cookie(user_id, "g@example.com", RoleName::Gebruiker);
    let response = app
        .request("GET", &format!("/families/{family_id}"), None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["family"]["family_name"], "Smit");
    assert_eq!(response.body["data"]["members"][0]["first_name"], "Piet");
}

#[tokio::test]
async fn test_missing_family_is_not_found() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_user("h@example.com", "H", "Gebruiker").await;
    let cookie = app.session_cookie(user_id, "h@example.com", RoleName::Gebruiker);

    let response = app
        .request("GET", "/families/999999", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Familie niet gevonden");
}

#[tokio::test]
async fn test_blank_family_name_is_rejected() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_user("i@example.com", "I", "Gebruiker").await;
    let cookie = app.session_cookie(user_id, "i@example.com", RoleName::Gebruiker);

    let response = app
        .request(
            "POST",
            "/families",
            Some("family_name=&street=K&house_number=1&postal_code=P&city=C"),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_family() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_user("j@example.com", "J", "Gebruiker").await;
    let family_id = app.create_family_owned_by("Weg", user_id).await;

    let cookie = app.session_cookie(user_id, "j@example.com", RoleName::Gebruiker);
    let response = app
        .request("DELETE", &format!("/families/{family_id}"), None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM families WHERE id = $1")
        .bind(family_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
