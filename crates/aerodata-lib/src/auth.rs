//! Basic-auth header construction for outbound Data API calls.

use base64::Engine;

use crate::error::{Error, Result};

/// Encode credentials into an `Authorization: Basic` header value.
///
/// Checked once per request path; both outbound calls of the hotel search
/// reuse the same header. Empty credentials are a configuration fault,
/// not a validation one.
pub fn basic_auth_header(username: &str, password: &str) -> Result<String> {
    if username.is_empty() || password.is_empty() {
        return Err(Error::Configuration {
            message: "username and password must be non-empty".to_string(),
        });
    }

    let engine = base64::engine::general_purpose::STANDARD;
    let token = engine.encode(format!("{username}:{password}"));
    Ok(format!("Basic {token}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_credentials_as_basic_token() {
        let header = basic_auth_header("admin", "password").unwrap();
        // base64("admin:password")
        assert_eq!(header, "Basic YWRtaW46cGFzc3dvcmQ=");
    }

    #[test]
    fn rejects_empty_username_or_password() {
        assert!(matches!(
            basic_auth_header("", "password"),
            Err(Error::Configuration { .. })
        ));
        assert!(matches!(
            basic_auth_header("admin", ""),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn preserves_special_characters_in_credentials() {
        let header = basic_auth_header("user@example.com", "p:ss//word").unwrap();
        assert!(header.starts_with("Basic "));

        let engine = base64::engine::general_purpose::STANDARD;
        let decoded = engine.decode(header.trim_start_matches("Basic ")).unwrap();
        assert_eq!(decoded, b"user@example.com:p:ss//word");
    }
}
