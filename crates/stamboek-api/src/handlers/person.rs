//! Person handlers.

use axum::Json;
use axum::extract::{Form, Path, Query, State};
use axum::response::Redirect;

use stamboek_auth::guards::{EDITOR_ROLES, require_owner_or_admin, require_role};
use stamboek_core::error::AppError;
use stamboek_database::repositories::person::PersonSort;
use stamboek_entity::person::PersonSummary;
use stamboek_entity::record::RecordKind;

use crate::dto::request::{PersonForm, SortQuery};
use crate::dto::response::{ApiResponse, PersonDetailResponse};
use crate::dto::validated;
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// GET /persons — public listing with optional sort.
pub async fn list_persons(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<Json<ApiResponse<Vec<PersonSummary>>>, ApiError> {
    let sort = query.sort.as_deref().and_then(PersonSort::from_param);
    let persons = state.person_repo.find_all(sort).await?;
    Ok(Json(ApiResponse::ok(persons)))
}

/// POST /persons — create, stamping the session user as creator.
pub async fn create_person(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Form(form): Form<PersonForm>,
) -> Result<Redirect, ApiError> {
    require_role(&session, EDITOR_ROLES)?;
    validated(&form)?;

    state
        .person_repo
        .create(&form.into_create(session.user_id))
        .await?;
    Ok(Redirect::to("/persons"))
}

/// GET /persons/{id} — detail with date-sorted anniversaries.
pub async fn get_person(
    State(state): State<AppState>,
    SessionUser(_session): SessionUser,
    Path(person_id): Path<i64>,
) -> Result<Json<ApiResponse<PersonDetailResponse>>, ApiError> {
    let person = state
        .person_repo
        .find_by_id(person_id)
        .await?
        .ok_or_else(|| AppError::not_found("Persoon niet gevonden"))?;
    let anniversaries = state.person_repo.anniversaries(person_id).await?;

    Ok(Json(ApiResponse::ok(PersonDetailResponse {
        person,
        anniversaries,
    })))
}

/// PUT /persons/{id} — update, creator or Administrator only.
pub async fn update_person(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(person_id): Path<i64>,
    Form(form): Form<PersonForm>,
) -> Result<Redirect, ApiError> {
    require_role(&session, EDITOR_ROLES)?;

    let person = state
        .person_repo
        .find_by_id(person_id)
        .await?
        .ok_or_else(|| AppError::not_found("Persoon niet gevonden"))?;
    require_owner_or_admin(&session, RecordKind::Person, person.created_by)?;

    validated(&form)?;
    state.person_repo.update(person_id, &form.into_update()).await?;
    Ok(Redirect::to("/persons"))
}

/// DELETE /persons/{id} — delete, creator or Administrator only.
pub async fn delete_person(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(person_id): Path<i64>,
) -> Result<Redirect, ApiError> {
    require_role(&session, EDITOR_ROLES)?;

    let person = state
        .person_repo
        .find_by_id(person_id)
        .await?
        .ok_or_else(|| AppError::not_found("Persoon niet gevonden"))?;
    require_owner_or_admin(&session, RecordKind::Person, person.created_by)?;

    state.person_repo.delete(person_id).await?;
    Ok(Redirect::to("/persons"))
}
