//! Administrative user management handlers. All Administrator-only.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::response::Redirect;

use stamboek_auth::guards::{ADMIN_ONLY, require_role};
use stamboek_core::error::AppError;
use stamboek_entity::user::Role;

use crate::dto::request::UserForm;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::dto::validated;
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// GET /users — list all users.
pub async fn list_users(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    require_role(&session, ADMIN_ONLY)?;

    let users = state.user_repo.find_all().await?;
    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// GET /roles — the role vocabulary, for the user form.
pub async fn list_roles(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
) -> Result<Json<ApiResponse<Vec<Role>>>, ApiError> {
    require_role(&session, ADMIN_ONLY)?;

    let roles = state.role_repo.find_all().await?;
    Ok(Json(ApiResponse::ok(roles)))
}

/// POST /users — create a user.
pub async fn create_user(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Form(form): Form<UserForm>,
) -> Result<Redirect, ApiError> {
    require_role(&session, ADMIN_ONLY)?;
    validated(&form)?;

    state.user_repo.create(&form.into_create()).await?;
    Ok(Redirect::to("/users"))
}

/// GET /users/{id} — fetch one user.
pub async fn get_user(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    require_role(&session, ADMIN_ONLY)?;

    let user = state
        .user_repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Gebruiker niet gevonden"))?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /users/{id} — update a user.
pub async fn update_user(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(user_id): Path<i64>,
    Form(form): Form<UserForm>,
) -> Result<Redirect, ApiError> {
    require_role(&session, ADMIN_ONLY)?;
    validated(&form)?;

    state.user_repo.update(user_id, &form.into_update()).await?;
    Ok(Redirect::to("/users"))
}

/// DELETE /users/{id} — delete a user.
pub async fn delete_user(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(user_id): Path<i64>,
) -> Result<Redirect, ApiError> {
    require_role(&session, ADMIN_ONLY)?;

    state.user_repo.delete(user_id).await?;
    Ok(Redirect::to("/users"))
}
