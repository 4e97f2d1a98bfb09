use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row as stored. Carries the password hash, so it is deliberately
/// not `Serialize` — client-facing responses go through `PublicUser` or
/// `UserProfile` instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The view of a user returned from signup and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// The view of a user returned from the profile endpoints: everything except
/// the password hash, which is excluded at query projection time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_user_excludes_password_hash() {
        let user = User {
            id: 1,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            created_at: Utc::now(),
        };

        let public = PublicUser::from(&user);
        let json = serde_json::to_value(&public).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "test@example.com");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn test_user_profile_serializes_camel_case() {
        let profile = UserProfile {
            id: 2,
            name: "Another User".to_string(),
            email: "another@example.com".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&profile).unwrap();

        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
        assert!(json.get("password").is_none());
    }
}
