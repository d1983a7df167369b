//! Owned-record metadata shared by the ownership gate and the admin
//! change-owner screens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// The kinds of records that carry a `created_by` owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// A family record.
    Family,
    /// A person record.
    Person,
    /// An anniversary record.
    Anniversary,
}

impl RecordKind {
    /// The user-facing (Dutch) noun used in denial and not-found messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Family => "familie",
            Self::Person => "persoon",
            Self::Anniversary => "jubileum",
        }
    }

    /// The URL slug used by the admin change-owner endpoint.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Family => "families",
            Self::Person => "persons",
            Self::Anniversary => "anniversaries",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RecordKind {
    type Err = stamboek_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "families" => Ok(Self::Family),
            "persons" => Ok(Self::Person),
            "anniversaries" => Ok(Self::Anniversary),
            _ => Err(stamboek_core::AppError::validation(format!(
                "Unknown record kind: '{s}'"
            ))),
        }
    }
}

/// One owned record joined with its owner, for the change-owner listing.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct OwnedRecordSummary {
    /// The record's id.
    pub id: i64,
    /// A short human-readable label for the record.
    pub label: String,
    /// The owning user's id.
    pub owner_id: i64,
    /// The owning user's display name.
    pub owner_name: String,
}

/// Joined anniversary data consumed by the agenda computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaItem {
    /// The anniversary's original date.
    pub event_date: NaiveDate,
    /// Free-form description, shown when no person is linked.
    pub description: Option<String>,
    /// The anniversary type name.
    pub type_name: String,
    /// The linked person, if any.
    pub person: Option<AgendaPerson>,
}

/// The person fields the agenda needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaPerson {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Whether the person is alive.
    pub alive: bool,
}

impl AgendaPerson {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(RecordKind::Family.label(), "familie");
        assert_eq!(RecordKind::Person.label(), "persoon");
        assert_eq!(RecordKind::Anniversary.label(), "jubileum");
    }

    #[test]
    fn test_kind_slug_round_trip() {
        for kind in [
            RecordKind::Family,
            RecordKind::Person,
            RecordKind::Anniversary,
        ] {
            assert_eq!(kind.slug().parse::<RecordKind>().unwrap(), kind);
        }
        assert!("bestanden".parse::<RecordKind>().is_err());
    }
}
