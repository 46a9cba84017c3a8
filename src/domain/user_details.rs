//! Login account as seen by the authentication layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::{AUTHORITY_SEPARATOR, DEFAULT_AUTHORITY};

/// Principal loaded for authentication: username, stored password hash
/// and granted authorities.
#[derive(Clone, Serialize)]
pub struct UserDetails {
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub authorities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for UserDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDetails")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .field("authorities", &self.authorities)
            .finish()
    }
}

impl UserDetails {
    /// Create account details; an empty authority list gets the default one.
    pub fn new(username: String, password_hash: String, authorities: Vec<String>) -> Self {
        let authorities = if authorities.is_empty() {
            vec![DEFAULT_AUTHORITY.to_string()]
        } else {
            authorities
        };

        Self {
            username,
            password_hash,
            authorities,
            created_at: Utc::now(),
        }
    }

    /// Authorities joined for single-column storage
    pub fn joined_authorities(&self) -> String {
        self.authorities.join(&AUTHORITY_SEPARATOR.to_string())
    }

    /// Parse authorities from their stored form, skipping blanks
    pub fn split_authorities(stored: &str) -> Vec<String> {
        stored
            .split(AUTHORITY_SEPARATOR)
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_authority_when_none_given() {
        let user = UserDetails::new("alice".to_string(), "hash".to_string(), vec![]);
        assert_eq!(user.authorities, vec!["ROLE_USER".to_string()]);
    }

    #[test]
    fn test_authorities_storage_form() {
        let user = UserDetails::new(
            "bob".to_string(),
            "hash".to_string(),
            vec!["ROLE_USER".to_string(), "ROLE_ADMIN".to_string()],
        );
        let stored = user.joined_authorities();
        assert_eq!(stored, "ROLE_USER,ROLE_ADMIN");
        assert_eq!(UserDetails::split_authorities(&stored), user.authorities);
        assert_eq!(
            UserDetails::split_authorities(" ROLE_USER, ,"),
            vec!["ROLE_USER".to_string()]
        );
    }

    #[test]
    fn test_debug_hides_password_hash() {
        let user = UserDetails::new("carol".to_string(), "$argon2id$secret".to_string(), vec![]);
        let debug = format!("{:?}", user);
        assert!(debug.contains("carol"));
        assert!(!debug.contains("$argon2id$secret"));
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = UserDetails::new("dave".to_string(), "hash-value".to_string(), vec![]);
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("hash-value"));
        assert!(json.contains("dave"));
    }
}
