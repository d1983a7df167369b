//! Role entity and the fixed role vocabulary.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// A row in the `roles` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: i64,
    /// Unique role name; one of the fixed vocabulary.
    pub name: String,
}

/// The fixed role vocabulary.
///
/// Matching is exact-string and case-sensitive everywhere; there is no
/// privilege hierarchy. Operations list their permitted roles explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleName {
    /// Full access, including user management and ownership overrides.
    Administrator,
    /// Manages reference data alongside regular record keeping.
    Beheerder,
    /// Regular record keeping.
    Gebruiker,
}

impl RoleName {
    /// All roles, in vocabulary order.
    pub const ALL: [RoleName; 3] = [Self::Administrator, Self::Beheerder, Self::Gebruiker];

    /// Return the role name exactly as stored in the `roles` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Beheerder => "Beheerder",
            Self::Gebruiker => "Gebruiker",
        }
    }

    /// Whether this role is the Administrator role.
    pub fn is_administrator(&self) -> bool {
        matches!(self, Self::Administrator)
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = stamboek_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Administrator" => Ok(Self::Administrator),
            "Beheerder" => Ok(Self::Beheerder),
            "Gebruiker" => Ok(Self::Gebruiker),
            _ => Err(stamboek_core::AppError::validation(format!(
                "Invalid role name: '{s}'. Expected one of: Administrator, Beheerder, Gebruiker"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_exact() {
        assert_eq!(
            "Administrator".parse::<RoleName>().unwrap(),
            RoleName::Administrator
        );
        assert_eq!("Beheerder".parse::<RoleName>().unwrap(), RoleName::Beheerder);
        assert_eq!("Gebruiker".parse::<RoleName>().unwrap(), RoleName::Gebruiker);
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("administrator".parse::<RoleName>().is_err());
        assert!("BEHEERDER".parse::<RoleName>().is_err());
        assert!("gebruiker ".parse::<RoleName>().is_err());
    }

    #[test]
    fn test_round_trip() {
        for role in RoleName::ALL {
            assert_eq!(role.as_str().parse::<RoleName>().unwrap(), role);
        }
    }
}
