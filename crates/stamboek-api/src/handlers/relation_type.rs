//! Relation type handlers.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::response::Redirect;

use stamboek_auth::guards::{MANAGER_ROLES, require_role};
use stamboek_entity::relation::RelationType;

use crate::dto::request::RelationTypeForm;
use crate::dto::response::ApiResponse;
use crate::dto::validated;
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// GET /relation-types — public listing.
pub async fn list_relation_types(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<RelationType>>>, ApiError> {
    let types = state.relation_type_repo.find_all().await?;
    Ok(Json(ApiResponse::ok(types)))
}

/// POST /relation-types — create, vocabulary managers only.
pub async fn create_relation_type(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Form(form): Form<RelationTypeForm>,
) -> Result<Redirect, ApiError> {
    require_role(&session, MANAGER_ROLES)?;
    validated(&form)?;

    state
        .relation_type_repo
        .create(&form.name, form.symmetric)
        .await?;
    Ok(Redirect::to("/relation-types"))
}

/// PUT /relation-types/{id} — update, vocabulary managers only.
pub async fn update_relation_type(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(type_id): Path<i64>,
    Form(form): Form<RelationTypeForm>,
) -> Result<Redirect, ApiError> {
    require_role(&session, MANAGER_ROLES)?;
    validated(&form)?;

    state
        .relation_type_repo
        .update(type_id, &form.name, form.symmetric)
        .await?;
    Ok(Redirect::to("/relation-types"))
}

/// DELETE /relation-types/{id} — delete, vocabulary managers only.
pub async fn delete_relation_type(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(type_id): Path<i64>,
) -> Result<Redirect, ApiError> {
    require_role(&session, MANAGER_ROLES)?;

    state.relation_type_repo.delete(type_id).await?;
    Ok(Redirect::to("/relation-types"))
}
