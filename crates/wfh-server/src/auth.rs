//! Cookie-token authentication: bcrypt password hashing and JWT
//! signing/verification.
//!
//! The token is an opaque signed JWT carrying `{id, email, exp}`,
//! delivered via an http-only cookie. An absent cookie means anonymous;
//! an invalid or expired signature on a protected route is a 403.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use wfh_core::User;

use crate::error::ApiError;

/// Name of the auth cookie.
pub const TOKEN_COOKIE: &str = "token";

const BCRYPT_COST: u32 = 10;

/// Claims carried by the signed token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub email: String,
    pub exp: i64,
}

/// JWT signing/verification keys plus the expiry policy.
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_hours: i64,
}

impl AuthKeys {
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        }
    }

    /// Sign a token for `user`.
    pub fn sign(&self, user: &User) -> Result<String, ApiError> {
        let claims = Claims {
            id: user.id.clone(),
            email: user.email.clone(),
            exp: (Utc::now() + Duration::hours(self.expiry_hours)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(ApiError::internal)
    }

    /// Verify a token and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &Validation::default()).map(|data| data.claims)
    }
}

/// Hash a password for storage.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, BCRYPT_COST)
}

/// Constant-time password check; a malformed stored hash counts as a
/// mismatch rather than an error.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// Extract and verify the token cookie for a protected route.
/// Missing cookie is 401; present but invalid is 403.
pub fn authenticate(jar: &CookieJar, keys: &AuthKeys) -> Result<Claims, ApiError> {
    let cookie = jar.get(TOKEN_COOKIE).ok_or(ApiError::Unauthorized)?;
    keys.verify(cookie.value()).map_err(|_| ApiError::Forbidden)
}

/// Build the http-only auth cookie (Secure, SameSite=None, path `/`).
pub fn auth_cookie(token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(TOKEN_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_secure(true);
    cookie.set_same_site(SameSite::None);
    cookie.set_path("/");
    cookie
}

/// A removal cookie matching [`auth_cookie`]'s path.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::from(TOKEN_COOKIE);
    cookie.set_path("/");
    cookie
}
