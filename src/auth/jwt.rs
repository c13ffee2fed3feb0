use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};

use crate::config::JwtConfig;
use crate::error::ApiError;
use crate::state::AppState;

/// JWT payload: the identity claims issued at login/signup. Stateless by
/// design; verification trusts prior issuance and does not re-check that the
/// user still exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,      // user ID
    pub email: String, // subject email
    pub iat: usize,    // issued at (unix timestamp)
    pub exp: usize,    // expires at (unix timestamp)
}

/// Signing and verification keys derived once from config.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig { secret, ttl_minutes } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::minutes(ttl_minutes),
        }
    }
}

impl JwtKeys {
    pub fn sign(&self, user_id: i64, email: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + self.ttl;
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user_id, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        validation.validate_aud = false;
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }

    #[cfg(test)]
    pub fn sign_with_exp(&self, user_id: i64, email: &str, exp: OffsetDateTime) -> String {
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: (exp - self.ttl).unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding).expect("sign test token")
    }
}

/// Extracts the bearer token, verifies it, and exposes the identity claims
/// to handlers. Missing header is 401; a token that fails verification is 403.
pub struct AuthUser(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::AuthenticationRequired)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::AuthenticationRequired)?;

        match keys.verify(token) {
            Ok(claims) => Ok(AuthUser(claims)),
            Err(_) => {
                warn!("invalid or expired token");
                Err(ApiError::InvalidToken)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    fn make_keys() -> JwtKeys {
        JwtKeys::from_ref(&AppState::fake())
    }

    #[tokio::test]
    async fn sign_and_verify_roundtrip() {
        let keys = make_keys();
        let token = keys.sign(42, "a@x.com").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "a@x.com");
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn verify_rejects_wrong_secret() {
        let keys = make_keys();
        let other = JwtKeys {
            encoding: EncodingKey::from_secret(b"different-secret"),
            decoding: DecodingKey::from_secret(b"different-secret"),
            ttl: Duration::minutes(5),
        };
        let token = other.sign(1, "a@x.com").expect("sign");
        assert!(keys.verify(&token).is_err());
    }

    #[tokio::test]
    async fn verify_rejects_tampered_token() {
        let keys = make_keys();
        let mut token = keys.sign(1, "a@x.com").expect("sign");
        token.push('x');
        assert!(keys.verify(&token).is_err());
    }

    #[tokio::test]
    async fn verify_rejects_expired_token() {
        let keys = make_keys();
        // Past the default validation leeway.
        let exp = OffsetDateTime::now_utc() - Duration::minutes(5);
        let token = keys.sign_with_exp(7, "a@x.com", exp);
        assert!(keys.verify(&token).is_err());
    }

    async fn extract(state: &AppState, header: Option<&str>) -> Result<AuthUser, ApiError> {
        let mut builder = Request::builder().uri("/api/user-blogs");
        if let Some(h) = header {
            builder = builder.header(axum::http::header::AUTHORIZATION, h);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        AuthUser::from_request_parts(&mut parts, state).await
    }

    #[tokio::test]
    async fn extractor_rejects_missing_header_with_401() {
        let state = AppState::fake();
        let err = extract(&state, None).await.err().expect("should reject");
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn extractor_rejects_garbage_token_with_403() {
        let state = AppState::fake();
        let err = extract(&state, Some("Bearer not-a-jwt"))
            .await
            .err()
            .expect("should reject");
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn extractor_accepts_valid_token() {
        let state = AppState::fake();
        let token = JwtKeys::from_ref(&state).sign(9, "b@x.com").expect("sign");
        let AuthUser(claims) = extract(&state, Some(&format!("Bearer {token}")))
            .await
            .expect("should accept");
        assert_eq!(claims.sub, 9);
        assert_eq!(claims.email, "b@x.com");
    }
}
