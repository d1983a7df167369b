//! Administrative change-owner handlers.
//!
//! Ownership transfer deliberately lives outside the ownership gate: only
//! an Administrator may reassign a record's creator.

use axum::Json;
use axum::extract::{Form, Query, State};
use axum::response::Redirect;

use stamboek_auth::guards::{ADMIN_ONLY, require_role};
use stamboek_core::error::AppError;
use stamboek_entity::record::{OwnedRecordSummary, RecordKind};

use crate::dto::request::{ChangeOwnerForm, ChangeOwnerQuery};
use crate::dto::response::{ApiResponse, ChangeOwnerResponse};
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// Records per change-owner page.
const PAGE_SIZE: i64 = 10;

/// GET /admin/change-owner — page through owned records with their owners.
pub async fn change_owner_list(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Query(query): Query<ChangeOwnerQuery>,
) -> Result<Json<ApiResponse<ChangeOwnerResponse>>, ApiError> {
    require_role(&session, ADMIN_ONLY)?;

    let page = query.page.unwrap_or(1).max(1);
    let offset = (page - 1) * PAGE_SIZE;

    let items: Vec<OwnedRecordSummary> = match query.kind.as_deref() {
        Some(slug) => match slug.parse::<RecordKind>()? {
            RecordKind::Family => state.family_repo.list_with_owner(PAGE_SIZE, offset).await?,
            RecordKind::Person => state.person_repo.list_with_owner(PAGE_SIZE, offset).await?,
            RecordKind::Anniversary => {
                state
                    .anniversary_repo
                    .list_with_owner(PAGE_SIZE, offset)
                    .await?
            }
        },
        None => Vec::new(),
    };

    Ok(Json(ApiResponse::ok(ChangeOwnerResponse {
        kinds: [
            RecordKind::Family,
            RecordKind::Person,
            RecordKind::Anniversary,
        ]
        .iter()
        .map(|k| k.slug().to_string())
        .collect(),
        kind: query.kind,
        page,
        items,
    })))
}

/// POST /admin/change-owner — reassign a record's creator.
pub async fn change_owner(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Form(form): Form<ChangeOwnerForm>,
) -> Result<Redirect, ApiError> {
    require_role(&session, ADMIN_ONLY)?;

    let kind: RecordKind = form.kind.parse()?;

    state
        .user_repo
        .find_by_id(form.new_owner_id)
        .await?
        .ok_or_else(|| AppError::not_found("Gebruiker niet gevonden"))?;

    match kind {
        RecordKind::Family => {
            state
                .family_repo
                .update_owner(form.record_id, form.new_owner_id)
                .await?
        }
        RecordKind::Person => {
            state
                .person_repo
                .update_owner(form.record_id, form.new_owner_id)
                .await?
        }
        RecordKind::Anniversary => {
            state
                .anniversary_repo
                .update_owner(form.record_id, form.new_owner_id)
                .await?
        }
    }

    tracing::info!(
        record_kind = %kind,
        record_id = form.record_id,
        new_owner = form.new_owner_id,
        "Record owner reassigned"
    );
    Ok(Redirect::to("/admin/change-owner"))
}
