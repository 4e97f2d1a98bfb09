pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::PublicUser;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

/// Payload for a new account registration.
///
/// Only presence is validated; the upstream product imposes no format rules on
/// name, email, or password beyond non-emptiness.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Please provide name, email, and password."))]
    pub name: String,
    #[validate(length(min = 1, message = "Please provide name, email, and password."))]
    pub email: String,
    #[validate(length(min = 1, message = "Please provide name, email, and password."))]
    pub password: String,
}

/// Payload for a user login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Please provide email and password."))]
    pub email: String,
    #[validate(length(min = 1, message = "Please provide email and password."))]
    pub password: String,
}

/// Payload for a profile update. Both fields optional; at least one non-empty
/// value must be supplied.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Response after successful authentication (login or signup): the public view
/// of the user plus a bearer token. The password hash is never included.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: PublicUser,
    pub token: String,
}
