use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime. Tokens expire one hour after issue.
const TOKEN_TTL_SECONDS: i64 = 3600;

/// Claims carried by a bearer token.
///
/// The token is self-contained: validity is determined purely by signature and
/// expiry, with no server-side session state.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's unique identifier.
    pub sub: i32,
    /// Display name of the user.
    pub name: String,
    /// Email address of the user.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: usize,
    /// Expiration timestamp (seconds since epoch), one hour after `iat`.
    pub exp: usize,
}

/// Generates a signed bearer token for the given identity.
///
/// The signing secret comes from process configuration, loaded once at
/// startup; there is no rotation support.
pub fn generate_token(
    user_id: i32,
    name: &str,
    email: &str,
    secret: &str,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expiration = now
        .checked_add_signed(chrono::Duration::seconds(TOKEN_TTL_SECONDS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        name: name.to_string(),
        email: email.to_string(),
        iat: now.timestamp() as usize,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
}

/// Verifies a bearer token and decodes its claims.
///
/// A malformed token, an invalid signature, and an expired token all surface
/// as the same generic invalid-token error.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    // No clock tolerance: a token is rejected at or after its expiry.
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::InvalidToken("Invalid token.".into()))
}
