//! Role and ownership guards.
//!
//! Guards take the already-verified session value and return either `Ok(())`
//! or a typed denial; the HTTP layer maps each denial kind to its surface
//! (redirect + flash for role denials, 403 for ownership denials). Handlers
//! call guards before any side effect and never re-check once a guard has
//! passed.

use stamboek_core::error::AppError;
use stamboek_core::result::AppResult;
use stamboek_entity::record::RecordKind;
use stamboek_entity::session::Session;
use stamboek_entity::user::RoleName;

/// Roles allowed to create and edit records.
pub const EDITOR_ROLES: &[RoleName] = &[
    RoleName::Administrator,
    RoleName::Beheerder,
    RoleName::Gebruiker,
];

/// Roles allowed to manage reference vocabularies and delete anniversaries.
pub const MANAGER_ROLES: &[RoleName] = &[RoleName::Administrator, RoleName::Beheerder];

/// Roles allowed to manage users and reassign record owners.
pub const ADMIN_ONLY: &[RoleName] = &[RoleName::Administrator];

/// Require the session's role to be in the allowed set.
///
/// Matching is exact; no hierarchy is assumed. An operation that should
/// admit administrators must list `Administrator` explicitly.
pub fn require_role(session: &Session, allowed: &[RoleName]) -> AppResult<()> {
    if allowed.contains(&session.role) {
        return Ok(());
    }

    tracing::debug!(
        user_id = session.user_id,
        role = %session.role,
        "Role denied for protected operation"
    );
    Err(AppError::role_denied(
        "Je bent niet geautoriseerd voor deze actie",
    ))
}

/// Require the session's user to be the record's creator, or an
/// Administrator.
///
/// The caller resolves the record first (404 when absent) and passes its
/// `created_by` explicitly. A record without a creator is treated as not
/// owned by the caller, so only an Administrator may mutate it.
pub fn require_owner_or_admin(
    session: &Session,
    kind: RecordKind,
    created_by: Option<i64>,
) -> AppResult<()> {
    if created_by == Some(session.user_id) {
        return Ok(());
    }
    if session.is_administrator() {
        return Ok(());
    }

    tracing::debug!(
        user_id = session.user_id,
        record_kind = %kind,
        ?created_by,
        "Ownership denied for protected record"
    );
    Err(AppError::forbidden(format!(
        "Geen toestemming om deze {} te bewerken",
        kind.label()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stamboek_core::error::ErrorKind;

    fn session_with(role: RoleName) -> Session {
        Session {
            user_id: 1,
            email: "a@example.com".to_string(),
            name: "A".to_string(),
            role,
            google_id: "sub-a".to_string(),
        }
    }

    #[test]
    fn test_role_in_allowed_set_passes() {
        let session = session_with(RoleName::Gebruiker);
        assert!(require_role(&session, EDITOR_ROLES).is_ok());
    }

    #[test]
    fn test_role_outside_allowed_set_is_denied() {
        let session = session_with(RoleName::Gebruiker);
        let err = require_role(&session, ADMIN_ONLY).unwrap_err();
        assert_eq!(err.kind, ErrorKind::RoleDenied);
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_no_role_hierarchy() {
        // Administrator is not implicitly a member of a set that omits it.
        let session = session_with(RoleName::Administrator);
        assert!(require_role(&session, &[RoleName::Beheerder]).is_err());
    }

    #[test]
    fn test_owner_passes() {
        let session = session_with(RoleName::Gebruiker);
        assert!(require_owner_or_admin(&session, RecordKind::Person, Some(1)).is_ok());
    }

    #[test]
    fn test_non_owner_is_denied_with_record_kind() {
        let session = session_with(RoleName::Beheerder);
        let err = require_owner_or_admin(&session, RecordKind::Family, Some(2)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert!(err.message.contains("familie"));
    }

    #[test]
    fn test_administrator_bypasses_ownership() {
        let session = session_with(RoleName::Administrator);
        assert!(require_owner_or_admin(&session, RecordKind::Family, Some(2)).is_ok());
    }

    #[test]
    fn test_unowned_record_requires_administrator() {
        let session = session_with(RoleName::Gebruiker);
        assert!(require_owner_or_admin(&session, RecordKind::Anniversary, None).is_err());

        let admin = session_with(RoleName::Administrator);
        assert!(require_owner_or_admin(&admin, RecordKind::Anniversary, None).is_ok());
    }
}
