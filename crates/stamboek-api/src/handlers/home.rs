//! Landing view handler.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;

use crate::dto::response::{ApiResponse, HomeResponse};
use crate::error::ApiError;
use crate::flash;
use crate::state::AppState;

/// GET / — upcoming events plus the consumed denial flash.
///
/// Public: anonymous visitors see the agenda too. The `auth_error` flash is
/// read and cleared here, so a denial message is shown exactly once.
pub async fn home(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<HomeResponse>>), ApiError> {
    let upcoming_events = state.agenda.upcoming().await?;
    let (jar, auth_error) = flash::take(jar);

    Ok((
        jar,
        Json(ApiResponse::ok(HomeResponse {
            upcoming_events,
            auth_error,
        })),
    ))
}
