//! Request DTOs: form payloads and query parameters.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use stamboek_entity::anniversary::{CreateAnniversary, UpdateAnniversary};
use stamboek_entity::family::{CreateFamily, UpdateFamily};
use stamboek_entity::person::{CreatePerson, UpdatePerson};
use stamboek_entity::relation::CreateRelation;
use stamboek_entity::user::model::{CreateUser, UpdateUser};

fn default_true() -> bool {
    true
}

/// OAuth callback query parameters.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    /// The authorization code issued by the provider.
    pub code: Option<String>,
    /// The state nonce echoed back by the provider.
    pub state: Option<String>,
}

/// Optional `sort` query parameter for listings.
#[derive(Debug, Deserialize)]
pub struct SortQuery {
    /// The requested sort order.
    pub sort: Option<String>,
}

/// Family create/update form.
#[derive(Debug, Deserialize, Validate)]
pub struct FamilyForm {
    /// Family name.
    #[validate(length(min = 1))]
    pub family_name: String,
    /// Street name.
    #[validate(length(min = 1))]
    pub street: String,
    /// House number.
    #[validate(length(min = 1))]
    pub house_number: String,
    /// House number suffix.
    pub house_number_suffix: Option<String>,
    /// Postal code.
    #[validate(length(min = 1))]
    pub postal_code: String,
    /// City.
    #[validate(length(min = 1))]
    pub city: String,
}

impl FamilyForm {
    /// Into a create payload stamped with the session user.
    pub fn into_create(self, created_by: i64) -> CreateFamily {
        CreateFamily {
            family_name: self.family_name,
            street: self.street,
            house_number: self.house_number,
            house_number_suffix: self.house_number_suffix,
            postal_code: self.postal_code,
            city: self.city,
            created_by,
        }
    }

    /// Into an update payload.
    pub fn into_update(self) -> UpdateFamily {
        UpdateFamily {
            family_name: self.family_name,
            street: self.street,
            house_number: self.house_number,
            house_number_suffix: self.house_number_suffix,
            postal_code: self.postal_code,
            city: self.city,
        }
    }
}

/// Person create/update form.
#[derive(Debug, Deserialize, Validate)]
pub struct PersonForm {
    /// First name.
    #[validate(length(min = 1))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1))]
    pub last_name: String,
    /// The family this person belongs to.
    pub family_id: Option<i64>,
    /// Whether the person is alive; checkbox semantics, absent means false.
    #[serde(default)]
    pub alive: bool,
}

impl PersonForm {
    /// Into a create payload stamped with the session user.
    pub fn into_create(self, created_by: i64) -> CreatePerson {
        CreatePerson {
            first_name: self.first_name,
            last_name: self.last_name,
            family_id: self.family_id,
            alive: self.alive,
            created_by,
        }
    }

    /// Into an update payload.
    pub fn into_update(self) -> UpdatePerson {
        UpdatePerson {
            first_name: self.first_name,
            last_name: self.last_name,
            family_id: self.family_id,
            alive: self.alive,
        }
    }
}

/// Anniversary create/update form.
#[derive(Debug, Deserialize, Validate)]
pub struct AnniversaryForm {
    /// The (original) event date, ISO formatted.
    pub event_date: NaiveDate,
    /// Free-form description.
    pub description: Option<String>,
    /// The person this event belongs to.
    pub person_id: Option<i64>,
    /// The anniversary type.
    pub anniversary_type_id: Option<i64>,
}

impl AnniversaryForm {
    /// Into a create payload stamped with the session user.
    pub fn into_create(self, created_by: i64) -> CreateAnniversary {
        CreateAnniversary {
            event_date: self.event_date,
            description: self.description,
            person_id: self.person_id,
            anniversary_type_id: self.anniversary_type_id,
            created_by,
        }
    }

    /// Into an update payload.
    pub fn into_update(self) -> UpdateAnniversary {
        UpdateAnniversary {
            event_date: self.event_date,
            description: self.description,
            person_id: self.person_id,
            anniversary_type_id: self.anniversary_type_id,
        }
    }
}

/// Anniversary type form.
#[derive(Debug, Deserialize, Validate)]
pub struct AnniversaryTypeForm {
    /// Type name.
    #[validate(length(min = 1))]
    pub name: String,
}

/// Relation type form.
#[derive(Debug, Deserialize, Validate)]
pub struct RelationTypeForm {
    /// Relation name.
    #[validate(length(min = 1))]
    pub name: String,
    /// Whether the relation reads the same in both directions.
    #[serde(default)]
    pub symmetric: bool,
}

/// Relation create/update form.
#[derive(Debug, Deserialize)]
pub struct RelationForm {
    /// The first person.
    pub person1_id: i64,
    /// The second person.
    pub person2_id: i64,
    /// The relation type.
    pub relation_type_id: i64,
}

impl From<RelationForm> for CreateRelation {
    fn from(form: RelationForm) -> Self {
        CreateRelation {
            person1_id: form.person1_id,
            person2_id: form.person2_id,
            relation_type_id: form.relation_type_id,
        }
    }
}

/// Relation search form.
#[derive(Debug, Deserialize)]
pub struct RelationSearchForm {
    /// Term matched against person names and the type name.
    pub search_term: Option<String>,
}

/// User create/update form (administrative).
#[derive(Debug, Deserialize, Validate)]
pub struct UserForm {
    /// Email address.
    #[validate(email)]
    pub email: String,
    /// Display name.
    #[validate(length(min = 1))]
    pub name: String,
    /// External subject identifier.
    #[validate(length(min = 1))]
    pub google_id: String,
    /// Assigned role id.
    pub role_id: i64,
    /// Whether the account may log in.
    #[serde(default = "default_true")]
    pub active: bool,
}

impl UserForm {
    /// Into a create payload.
    pub fn into_create(self) -> CreateUser {
        CreateUser {
            email: self.email,
            name: self.name,
            google_id: self.google_id,
            role_id: self.role_id,
        }
    }

    /// Into an update payload.
    pub fn into_update(self) -> UpdateUser {
        UpdateUser {
            email: self.email,
            name: self.name,
            google_id: self.google_id,
            role_id: self.role_id,
            active: self.active,
        }
    }
}

/// Change-owner listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ChangeOwnerQuery {
    /// The record kind slug to list.
    pub kind: Option<String>,
    /// 1-based page number.
    pub page: Option<i64>,
}

/// Change-owner form (administrative).
#[derive(Debug, Deserialize)]
pub struct ChangeOwnerForm {
    /// The record kind slug.
    pub kind: String,
    /// The record to reassign.
    pub record_id: i64,
    /// The new owner's user id.
    pub new_owner_id: i64,
}
