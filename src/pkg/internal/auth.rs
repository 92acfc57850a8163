use axum_extra::extract::CookieJar;

use crate::{conf::settings, prelude::{AppError, Result}};

pub const ADMIN_COOKIE_NAME: &str = "hr_admin_session";
const ADMIN_COOKIE_VALUE: &str = "authenticated";

/// Checks the shared admin password at login.
pub fn check_password(password: &str) -> Result<()> {
    if password == settings.admin_password {
        Ok(())
    } else {
        tracing::warn!("admin login rejected, wrong password");
        Err(AppError::Unauthorized)
    }
}

/// Whether the request carries a valid admin session cookie.
pub fn is_admin(jar: &CookieJar) -> bool {
    jar.get(ADMIN_COOKIE_NAME)
        .map(|c| c.value() == ADMIN_COOKIE_VALUE)
        .unwrap_or(false)
}

/// Set-Cookie value establishing the admin session, valid for 24 hours.
pub fn session_cookie() -> String {
    format!("{ADMIN_COOKIE_NAME}={ADMIN_COOKIE_VALUE}; Path=/; HttpOnly; SameSite=Strict; Max-Age=86400")
}

/// Set-Cookie value clearing the admin session.
pub fn logout_cookie() -> String {
    format!("{ADMIN_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header::COOKIE};
    use tracing_test::traced_test;

    use super::*;

    fn jar(cookie_header: &str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie_header).unwrap());
        CookieJar::from_headers(&headers)
    }

    #[test]
    #[traced_test]
    fn accepts_the_session_cookie() {
        assert!(is_admin(&jar("hr_admin_session=authenticated")));
        assert!(is_admin(&jar("other=1; hr_admin_session=authenticated")));
    }

    #[test]
    fn rejects_missing_or_forged_cookies() {
        assert!(!is_admin(&jar("hr_admin_session=guessing")));
        assert!(!is_admin(&jar("hr_admin_session=")));
        assert!(!is_admin(&jar("other=authenticated")));
        assert!(!is_admin(&CookieJar::new()));
    }

    #[test]
    fn cookie_strings_scope_the_session() {
        let set = session_cookie();
        assert!(set.contains("HttpOnly"));
        assert!(set.contains("SameSite=Strict"));
        assert!(set.contains("Max-Age=86400"));
        assert!(logout_cookie().contains("Max-Age=0"));
    }
}
