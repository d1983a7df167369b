//! Anniversary type handlers.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::response::Redirect;

use stamboek_auth::guards::{MANAGER_ROLES, require_role};
use stamboek_entity::anniversary::AnniversaryType;

use crate::dto::request::AnniversaryTypeForm;
use crate::dto::response::ApiResponse;
use crate::dto::validated;
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// GET /anniversary-types — public listing.
pub async fn list_anniversary_types(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AnniversaryType>>>, ApiError> {
    let types = state.anniversary_type_repo.find_all().await?;
    Ok(Json(ApiResponse::ok(types)))
}

/// POST /anniversary-types — create, vocabulary managers only.
pub async fn create_anniversary_type(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Form(form): Form<AnniversaryTypeForm>,
) -> Result<Redirect, ApiError> {
    require_role(&session, MANAGER_ROLES)?;
    validated(&form)?;

    state.anniversary_type_repo.create(&form.name).await?;
    Ok(Redirect::to("/anniversary-types"))
}

/// PUT /anniversary-types/{id} — rename, vocabulary managers only.
pub async fn update_anniversary_type(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(type_id): Path<i64>,
    Form(form): Form<AnniversaryTypeForm>,
) -> Result<Redirect, ApiError> {
    require_role(&session, MANAGER_ROLES)?;
    validated(&form)?;

    state.anniversary_type_repo.update(type_id, &form.name).await?;
    Ok(Redirect::to("/anniversary-types"))
}

/// DELETE /anniversary-types/{id} — delete, vocabulary managers only.
pub async fn delete_anniversary_type(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(type_id): Path<i64>,
) -> Result<Redirect, ApiError> {
    require_role(&session, MANAGER_ROLES)?;

    state.anniversary_type_repo.delete(type_id).await?;
    Ok(Redirect::to("/anniversary-types"))
}
