//! One-shot flash cookie for authorization denials.
//!
//! Set on a role denial, read and cleared by the next landing render: the
//! message survives exactly one redirect.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Name of the flash cookie.
pub const FLASH_COOKIE: &str = "auth_error";

/// Flash cookie lifetime in seconds.
pub const FLASH_MAX_AGE_SECONDS: i64 = 30;

/// Build the denial flash cookie.
pub fn denial_cookie(message: &str) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, message.to_string()))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(FLASH_MAX_AGE_SECONDS))
        .build()
}

/// Read and clear the flash cookie in one step.
pub fn take(jar: CookieJar) -> (CookieJar, Option<String>) {
    let message = jar.get(FLASH_COOKIE).map(|c| c.value().to_string());
    let jar = if message.is_some() {
        jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/").build())
    } else {
        jar
    };
    (jar, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denial_cookie_attributes() {
        let cookie = denial_cookie("Je bent niet geautoriseerd voor deze actie");
        assert_eq!(cookie.name(), FLASH_COOKIE);
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(30)));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_take_reads_and_clears_once() {
        let jar = CookieJar::new().add(denial_cookie("geweigerd"));

        let (jar, message) = take(jar);
        assert_eq!(message.as_deref(), Some("geweigerd"));
        assert!(jar.get(FLASH_COOKIE).is_none());

        let (_, second) = take(jar);
        assert_eq!(second, None);
    }
}
