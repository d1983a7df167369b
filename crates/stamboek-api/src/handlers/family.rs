//! Family handlers.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::response::Redirect;

use stamboek_auth::guards::{EDITOR_ROLES, require_owner_or_admin, require_role};
use stamboek_core::error::AppError;
use stamboek_entity::family::Family;
use stamboek_entity::record::RecordKind;

use crate::dto::request::FamilyForm;
use crate::dto::response::{ApiResponse, FamilyDetailResponse};
use crate::dto::validated;
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// GET /families — public listing.
pub async fn list_families(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Family>>>, ApiError> {
    let families = state.family_repo.find_all().await?;
    Ok(Json(ApiResponse::ok(families)))
}

/// POST /families — create, stamping the session user as creator.
pub async fn create_family(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Form(form): Form<FamilyForm>,
) -> Result<Redirect, ApiError> {
    require_role(&session, EDITOR_ROLES)?;
    validated(&form)?;

    state
        .family_repo
        .create(&form.into_create(session.user_id))
        .await?;
    Ok(Redirect::to("/families"))
}

/// GET /families/{id} — detail with members.
pub async fn get_family(
    State(state): State<AppState>,
    SessionUser(_session): SessionUser,
    Path(family_id): Path<i64>,
) -> Result<Json<ApiResponse<FamilyDetailResponse>>, ApiError> {
    let family = state
        .family_repo
        .find_by_id(family_id)
        .await?
        .ok_or_else(|| AppError::not_found("Familie niet gevonden"))?;
    let members = state.family_repo.members(family_id).await?;

    Ok(Json(ApiResponse::ok(FamilyDetailResponse { family, members })))
}

/// PUT /families/{id} — update, creator or Administrator only.
pub async fn update_family(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(family_id): Path<i64>,
    Form(form): Form<FamilyForm>,
) -> Result<Redirect, ApiError> {
    require_role(&session, EDITOR_ROLES)?;

    let family = state
        .family_repo
        .find_by_id(family_id)
        .await?
        .ok_or_else(|| AppError::not_found("Familie niet gevonden"))?;
    require_owner_or_admin(&session, RecordKind::Family, family.created_by)?;

    validated(&form)?;
    state.family_repo.update(family_id, &form.into_update()).await?;
    Ok(Redirect::to("/families"))
}

/// DELETE /families/{id} — delete, creator or Administrator only.
pub async fn delete_family(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(family_id): Path<i64>,
) -> Result<Redirect, ApiError> {
    require_role(&session, EDITOR_ROLES)?;

    let family = state
        .family_repo
        .find_by_id(family_id)
        .await?
        .ok_or_else(|| AppError::not_found("Familie niet gevonden"))?;
    require_owner_or_admin(&session, RecordKind::Family, family.created_by)?;

    state.family_repo.delete(family_id).await?;
    Ok(Redirect::to("/families"))
}
