//! Token service - Mints, parses and validates signed identity tokens.
//!
//! Tokens are HS256 JWTs carrying the username as subject, issued-at and
//! expiration timestamps. Parsing verifies the signature and rejects expired
//! tokens, so every `extract_*` call doubles as a validity check.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::Config;
use crate::domain::UserDetails;

/// Registered claim names the service always sets itself.
const RESERVED_CLAIMS: [&str; 3] = ["sub", "iat", "exp"];

/// Claim set embedded in every token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Username of the authenticated principal
    pub sub: String,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiration, seconds since epoch
    pub exp: i64,
    /// Additional claims; empty for tokens minted by `generate_token`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reasons a token can be rejected or fail to mint
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token signature does not verify")]
    InvalidSignature,

    #[error("malformed token: {0}")]
    Malformed(jsonwebtoken::errors::Error),

    #[error("token claim `{0}` is out of range")]
    InvalidClaim(&'static str),

    #[error("failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),

    #[error("validity window reaches past the representable date range")]
    WindowOutOfRange,
}

impl TokenError {
    fn from_decode(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed(err),
        }
    }
}

/// Stateless token minting and validation over a shared signing secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    validity: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"[REDACTED]")
            .field("validity", &self.validity)
            .finish()
    }
}

impl TokenService {
    /// Create a token service signing with `secret`; tokens expire `validity`
    /// after issuance.
    pub fn new(secret: &[u8], validity: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller's clock in `claims_at`.
        validation.validate_exp = false;
        // Audience is an ordinary extra claim here, not a verification rule.
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            validity,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.jwt_secret_bytes(), config.token_validity())
    }

    /// Mint a token for a verified identity with no extra claims.
    pub fn generate_token(&self, identity: &UserDetails) -> Result<String, TokenError> {
        self.generate_token_at(identity, Utc::now())
    }

    /// Mint a token as if the current time were `now`.
    pub fn generate_token_at(
        &self,
        identity: &UserDetails,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        self.create_token(Map::new(), &identity.username, now)
    }

    /// Mint a token carrying additional claims. Reserved claim names in
    /// `extra` are ignored.
    pub fn generate_token_with_claims(
        &self,
        extra: Map<String, Value>,
        identity: &UserDetails,
    ) -> Result<String, TokenError> {
        self.create_token(extra, &identity.username, Utc::now())
    }

    fn create_token(
        &self,
        mut extra: Map<String, Value>,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        for reserved in RESERVED_CLAIMS {
            extra.remove(reserved);
        }

        let expires = now
            .checked_add_signed(self.validity)
            .ok_or(TokenError::WindowOutOfRange)?;

        let claims = IdentityClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
            extra,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)?;

        tracing::debug!(subject, exp = claims.exp, "Token minted");
        Ok(token)
    }

    /// Username (subject) embedded in the token.
    pub fn extract_username(&self, token: &str) -> Result<String, TokenError> {
        self.extract_claim(token, |claims| claims.sub.clone())
    }

    /// Expiration timestamp embedded in the token.
    pub fn extract_expiration(&self, token: &str) -> Result<DateTime<Utc>, TokenError> {
        let exp = self.extract_claim(token, |claims| claims.exp)?;
        DateTime::from_timestamp(exp, 0).ok_or(TokenError::InvalidClaim("exp"))
    }

    /// Apply `resolver` to the verified, unexpired claim set.
    pub fn extract_claim<T>(
        &self,
        token: &str,
        resolver: impl FnOnce(&IdentityClaims) -> T,
    ) -> Result<T, TokenError> {
        self.claims_at(token, Utc::now())
            .map(|claims| resolver(&claims))
    }

    /// True iff the token names `identity` and has not expired.
    ///
    /// # Errors
    /// Unparseable, badly signed and expired tokens are errors, not `false`.
    pub fn validate_token(&self, token: &str, identity: &UserDetails) -> Result<bool, TokenError> {
        self.validate_token_at(token, identity, Utc::now())
    }

    /// [`validate_token`](Self::validate_token) evaluated at `now`.
    pub fn validate_token_at(
        &self,
        token: &str,
        identity: &UserDetails,
        now: DateTime<Utc>,
    ) -> Result<bool, TokenError> {
        let claims = self.claims_at(token, now)?;
        Ok(claims.sub == identity.username && claims.exp > now.timestamp())
    }

    fn claims_at(&self, token: &str, now: DateTime<Utc>) -> Result<IdentityClaims, TokenError> {
        let claims = decode::<IdentityClaims>(token, &self.decoding_key, &self.validation)
            .map_err(TokenError::from_decode)?
            .claims;

        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

    fn service() -> TokenService {
        TokenService::new(SECRET, Duration::hours(10))
    }

    fn identity(username: &str) -> UserDetails {
        UserDetails::new(username.to_string(), "hash".to_string(), vec![])
    }

    fn minted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn test_generate_then_extract_username() {
        let tokens = service();
        let token = tokens.generate_token(&identity("alice")).unwrap();

        assert_eq!(tokens.extract_username(&token).unwrap(), "alice");
    }

    #[test]
    fn test_expiration_is_issue_time_plus_window() {
        let tokens = service();
        let before = Utc::now().timestamp();
        let token = tokens.generate_token(&identity("alice")).unwrap();
        let after = Utc::now().timestamp();

        let exp = tokens.extract_expiration(&token).unwrap().timestamp();
        let window = Duration::hours(10).num_seconds();
        assert!(exp >= before + window && exp <= after + window);
    }

    #[test]
    fn test_minted_token_has_no_extra_claims() {
        let tokens = service();
        let token = tokens.generate_token(&identity("alice")).unwrap();

        let extra = tokens.extract_claim(&token, |c| c.extra.clone()).unwrap();
        assert!(extra.is_empty());
        let (iat, exp) = tokens.extract_claim(&token, |c| (c.iat, c.exp)).unwrap();
        assert_eq!(exp - iat, 36_000);
    }

    #[test]
    fn test_validity_window_boundaries() {
        let tokens = service();
        let alice = identity("alice");
        let t = minted_at();
        let token = tokens.generate_token_at(&alice, t).unwrap();

        let just_before = t + Duration::hours(10) - Duration::seconds(1);
        assert!(tokens.validate_token_at(&token, &alice, just_before).unwrap());

        let just_after = t + Duration::hours(10) + Duration::seconds(1);
        assert!(matches!(
            tokens.validate_token_at(&token, &alice, just_after),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_validate_rejects_other_identity() {
        let tokens = service();
        let t = minted_at();
        let token = tokens.generate_token_at(&identity("alice"), t).unwrap();

        let result = tokens.validate_token_at(&token, &identity("mallory"), t + Duration::minutes(5));
        assert!(!result.unwrap());
    }

    #[test]
    fn test_validate_true_for_fresh_token() {
        let tokens = service();
        let bob = identity("bob");
        let token = tokens.generate_token(&bob).unwrap();

        assert!(tokens.validate_token(&token, &bob).unwrap());
    }

    #[test]
    fn test_expired_token_fails_extraction() {
        let tokens = service();
        let issued = Utc::now() - Duration::hours(11);
        let token = tokens.generate_token_at(&identity("alice"), issued).unwrap();

        assert!(matches!(tokens.extract_username(&token), Err(TokenError::Expired)));
        assert!(matches!(tokens.extract_expiration(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let minting = TokenService::new(b"another-secret-key-that-is-32-chars!", Duration::hours(10));
        let token = minting.generate_token(&identity("alice")).unwrap();

        assert!(matches!(
            service().extract_username(&token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_malformed_token_is_an_error_not_false() {
        let tokens = service();

        assert!(matches!(
            tokens.validate_token("not.a.jwt", &identity("alice")),
            Err(TokenError::Malformed(_))
        ));
        assert!(tokens.extract_username("").is_err());
    }

    #[test]
    fn test_extra_claims_cannot_override_subject() {
        let tokens = service();
        let mut extra = Map::new();
        extra.insert("sub".to_string(), Value::from("mallory"));
        extra.insert("tenant".to_string(), Value::from("north"));

        let token = tokens
            .generate_token_with_claims(extra, &identity("alice"))
            .unwrap();

        assert_eq!(tokens.extract_username(&token).unwrap(), "alice");
        let tenant = tokens
            .extract_claim(&token, |c| c.extra.get("tenant").cloned())
            .unwrap();
        assert_eq!(tenant, Some(Value::from("north")));
    }

    #[test]
    fn test_audience_claim_round_trips() {
        let tokens = service();
        let mut extra = Map::new();
        extra.insert("aud".to_string(), Value::from("customers"));

        let token = tokens
            .generate_token_with_claims(extra, &identity("alice"))
            .unwrap();

        assert_eq!(tokens.extract_username(&token).unwrap(), "alice");
        let aud = tokens
            .extract_claim(&token, |c| c.extra.get("aud").cloned())
            .unwrap();
        assert_eq!(aud, Some(Value::from("customers")));
        assert!(tokens.validate_token(&token, &identity("alice")).unwrap());
    }

    #[test]
    fn test_oversized_window_fails_instead_of_panicking() {
        let tokens = TokenService::new(SECRET, Duration::hours(3_000_000_000));

        assert!(matches!(
            tokens.generate_token(&identity("alice")),
            Err(TokenError::WindowOutOfRange)
        ));
    }

    #[test]
    fn test_debug_hides_secret() {
        let debug = format!("{:?}", service());
        assert!(!debug.contains("test-secret-key"));
    }
}
