//! Identity provider bridge.

pub mod google;

pub use google::{GoogleOAuthClient, IdentityProvider, VerifiedIdentity};

/// Generate a fresh opaque state nonce for the authorization redirect.
pub fn new_state() -> String {
    uuid::Uuid::new_v4().to_string()
}
