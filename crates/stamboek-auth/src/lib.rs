//! # stamboek-auth
//!
//! The authorization and session-identity core: the Google OAuth
//! authorization-code bridge, the signed session cookie codec, the login
//! flow that maps a verified external identity onto an internal user, and
//! the role/ownership guards protected handlers call before doing work.

pub mod guards;
pub mod login;
pub mod oauth;
pub mod session;

pub use guards::{require_owner_or_admin, require_role};
pub use login::{LoginFlow, LoginOutcome, UserDirectory};
pub use oauth::{GoogleOAuthClient, IdentityProvider, VerifiedIdentity};
pub use session::SessionCodec;
