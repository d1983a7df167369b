//! Session model.

use serde::{Deserialize, Serialize};

use crate::user::RoleName;

/// The authenticated identity asserted by the signed session cookie.
///
/// Written at login and trusted until expiry: the role captured here is
/// *not* re-read from the user directory on every request, so role changes
/// take effect at the next login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated user's id.
    pub user_id: i64,
    /// The user's email at login time.
    pub email: String,
    /// The user's display name at login time.
    pub name: String,
    /// The user's role at login time.
    pub role: RoleName,
    /// The external subject identifier verified at login.
    pub google_id: String,
}

impl Session {
    /// Whether the session holds the Administrator role.
    pub fn is_administrator(&self) -> bool {
        self.role.is_administrator()
    }
}
