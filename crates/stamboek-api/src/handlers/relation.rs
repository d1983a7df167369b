//! Relation handlers.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::response::Redirect;

use stamboek_auth::guards::{EDITOR_ROLES, require_role};
use stamboek_core::error::AppError;
use stamboek_entity::relation::RelationDetail;

use crate::dto::request::{RelationForm, RelationSearchForm};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// A person cannot relate to themself.
fn check_self_relation(form: &RelationForm) -> Result<(), AppError> {
    if form.person1_id == form.person2_id {
        return Err(AppError::validation(
            "Een persoon kan geen relatie met zichzelf hebben",
        ));
    }
    Ok(())
}

/// GET /relations — listing joined with persons and type, session required.
pub async fn list_relations(
    State(state): State<AppState>,
    SessionUser(_session): SessionUser,
) -> Result<Json<ApiResponse<Vec<RelationDetail>>>, ApiError> {
    let relations = state.relation_repo.find_all().await?;
    Ok(Json(ApiResponse::ok(relations)))
}

/// POST /relations/search — search on person names and type name.
pub async fn search_relations(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Form(form): Form<RelationSearchForm>,
) -> Result<Json<ApiResponse<Vec<RelationDetail>>>, ApiError> {
    require_role(&session, EDITOR_ROLES)?;

    let relations = match form.search_term.as_deref().filter(|t| !t.is_empty()) {
        Some(term) => {
            tracing::debug!(term, "Searching relations");
            state.relation_repo.search(term).await?
        }
        None => state.relation_repo.find_all().await?,
    };
    Ok(Json(ApiResponse::ok(relations)))
}

/// POST /relations — create, session required.
pub async fn create_relation(
    State(state): State<AppState>,
    SessionUser(_session): SessionUser,
    Form(form): Form<RelationForm>,
) -> Result<Redirect, ApiError> {
    check_self_relation(&form)?;

    state.relation_repo.create(&form.into()).await?;
    Ok(Redirect::to("/relations"))
}

/// PUT /relations/{id} — update, session required.
pub async fn update_relation(
    State(state): State<AppState>,
    SessionUser(_session): SessionUser,
    Path(relation_id): Path<i64>,
    Form(form): Form<RelationForm>,
) -> Result<Redirect, ApiError> {
    check_self_relation(&form)?;

    state
        .relation_repo
        .find_by_id(relation_id)
        .await?
        .ok_or_else(|| AppError::not_found("Relatie niet gevonden"))?;

    state.relation_repo.update(relation_id, &form.into()).await?;
    Ok(Redirect::to("/relations"))
}

/// DELETE /relations/{id} — delete, session required.
pub async fn delete_relation(
    State(state): State<AppState>,
    SessionUser(_session): SessionUser,
    Path(relation_id): Path<i64>,
) -> Result<Redirect, ApiError> {
    state.relation_repo.delete(relation_id).await?;
    Ok(Redirect::to("/relations"))
}
