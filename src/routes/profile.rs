use crate::{
    auth::{hash_password, AuthenticatedUser, UpdateProfileRequest},
    error::AppError,
    models::{User, UserProfile},
};
use actix_web::{get, patch, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

/// Retrieves the authenticated user's profile.
///
/// The lookup uses the subject id carried in the verified token claims. The
/// password hash is excluded at query projection time and never serialized.
#[get("")]
pub async fn get_profile(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let profile: Option<UserProfile> =
        sqlx::query_as("SELECT id, name, email, created_at FROM users WHERE id = $1")
            .bind(user.0.sub)
            .fetch_optional(&**pool)
            .await?;

    match profile {
        Some(profile) => Ok(HttpResponse::Ok().json(json!({ "user": profile }))),
        None => Err(AppError::NotFound("User not found.".into())),
    }
}

/// Updates the authenticated user's name and/or password.
///
/// Empty strings count as absent. Supplying neither field is a validation
/// error; an update that would modify nothing (same name, no new password) is
/// rejected as a no-change error. A supplied password is re-hashed before
/// storage.
#[patch("")]
pub async fn update_profile(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    update: web::Json<UpdateProfileRequest>,
) -> Result<impl Responder, AppError> {
    let update = update.into_inner();
    let name = update.name.filter(|n| !n.is_empty());
    let password = update.password.filter(|p| !p.is_empty());

    if name.is_none() && password.is_none() {
        return Err(AppError::BadRequest(
            "Please provide name or password to update.".into(),
        ));
    }

    let current: Option<User> = sqlx::query_as(
        "SELECT id, name, email, password_hash, created_at FROM users WHERE id = $1",
    )
    .bind(user.0.sub)
    .fetch_optional(&**pool)
    .await?;

    let current = match current {
        Some(current) => current,
        None => return Err(AppError::NotFound("User not found.".into())),
    };

    // A new password always counts as a change (fresh salt); a name only
    // counts when it differs from the stored one.
    let name_changed = name.as_deref().map_or(false, |n| n != current.name);
    if !name_changed && password.is_none() {
        return Err(AppError::BadRequest("No changes were made.".into()));
    }

    let new_name = name.unwrap_or_else(|| current.name.clone());
    let new_hash = match password {
        Some(password) => hash_password(&password)?,
        None => current.password_hash.clone(),
    };

    sqlx::query("UPDATE users SET name = $1, password_hash = $2 WHERE id = $3")
        .bind(&new_name)
        .bind(&new_hash)
        .bind(current.id)
        .execute(&**pool)
        .await?;

    let updated: UserProfile =
        sqlx::query_as("SELECT id, name, email, created_at FROM users WHERE id = $1")
            .bind(current.id)
            .fetch_one(&**pool)
            .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Profile updated successfully.",
        "user": updated
    })))
}
