//! Anniversary handlers.

use axum::Json;
use axum::extract::{Form, Path, Query, State};
use axum::response::Redirect;

use stamboek_auth::guards::{EDITOR_ROLES, MANAGER_ROLES, require_owner_or_admin, require_role};
use stamboek_core::error::AppError;
use stamboek_database::repositories::anniversary::AnniversarySort;
use stamboek_entity::anniversary::AnniversaryDetail;
use stamboek_entity::record::RecordKind;

use crate::dto::request::{AnniversaryForm, SortQuery};
use crate::dto::response::ApiResponse;
use crate::dto::validated;
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// GET /anniversaries — listing with optional sort, session required.
pub async fn list_anniversaries(
    State(state): State<AppState>,
    SessionUser(_session): SessionUser,
    Query(query): Query<SortQuery>,
) -> Result<Json<ApiResponse<Vec<AnniversaryDetail>>>, ApiError> {
    let sort = query.sort.as_deref().and_then(AnniversarySort::from_param);
    let anniversaries = state.anniversary_repo.find_all(sort).await?;
    Ok(Json(ApiResponse::ok(anniversaries)))
}

/// POST /anniversaries — create, stamping the session user as creator.
pub async fn create_anniversary(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Form(form): Form<AnniversaryForm>,
) -> Result<Redirect, ApiError> {
    require_role(&session, EDITOR_ROLES)?;
    validated(&form)?;

    state
        .anniversary_repo
        .create(&form.into_create(session.user_id))
        .await?;
    Ok(Redirect::to("/anniversaries"))
}

/// PUT /anniversaries/{id} — update, creator or Administrator only.
pub async fn update_anniversary(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(anniversary_id): Path<i64>,
    Form(form): Form<AnniversaryForm>,
) -> Result<Redirect, ApiError> {
    require_role(&session, EDITOR_ROLES)?;

    let anniversary = state
        .anniversary_repo
        .find_by_id(anniversary_id)
        .await?
        .ok_or_else(|| AppError::not_found("Jubileum niet gevonden"))?;
    require_owner_or_admin(&session, RecordKind::Anniversary, anniversary.created_by)?;

    validated(&form)?;
    state
        .anniversary_repo
        .update(anniversary_id, &form.into_update())
        .await?;
    Ok(Redirect::to("/anniversaries"))
}

/// DELETE /anniversaries/{id} — Administrator/Beheerder, creator or
/// Administrator for the specific record.
pub async fn delete_anniversary(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(anniversary_id): Path<i64>,
) -> Result<Redirect, ApiError> {
    require_role(&session, MANAGER_ROLES)?;

    let anniversary = state
        .anniversary_repo
        .find_by_id(anniversary_id)
        .await?
        .ok_or_else(|| AppError::not_found("Jubileum niet gevonden"))?;
    require_owner_or_admin(&session, RecordKind::Anniversary, anniversary.created_by)?;

    state.anniversary_repo.delete(anniversary_id).await?;
    Ok(Redirect::to("/anniversaries"))
}
