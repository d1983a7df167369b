//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stamboek_entity::anniversary::AnniversaryDetail;
use stamboek_entity::family::Family;
use stamboek_entity::person::Person;
use stamboek_entity::record::OwnedRecordSummary;
use stamboek_entity::user::User;
use stamboek_service::agenda::UpcomingEvent;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Landing view payload: the agenda plus the consumed denial flash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    /// Events occurring within the next month.
    pub upcoming_events: Vec<UpcomingEvent>,
    /// The one-shot denial message, if a redirect just set one.
    pub auth_error: Option<String>,
}

/// Family detail: the family plus its members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyDetailResponse {
    /// The family record.
    pub family: Family,
    /// The persons belonging to the family.
    pub members: Vec<Person>,
}

/// Person detail: the person plus their anniversaries, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDetailResponse {
    /// The person record.
    pub person: Person,
    /// The person's anniversaries.
    pub anniversaries: Vec<AnniversaryDetail>,
}

/// User summary for administrative responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// External subject identifier.
    pub google_id: String,
    /// Role name, if assigned.
    pub role: Option<String>,
    /// Whether the account may log in.
    pub active: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last login.
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            google_id: user.google_id,
            role: user.role.map(|r| r.to_string()),
            active: user.active,
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

/// Change-owner listing payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeOwnerResponse {
    /// The selectable record kind slugs.
    pub kinds: Vec<String>,
    /// The currently selected kind slug.
    pub kind: Option<String>,
    /// 1-based page number.
    pub page: i64,
    /// The records on this page with their owners.
    pub items: Vec<OwnedRecordSummary>,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Whether the database round-trip succeeded.
    pub database: bool,
}
