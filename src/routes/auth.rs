use crate::{
    auth::{
        generate_token, hash_password, verify_password, AuthResponse, LoginRequest, SignupRequest,
    },
    config::Config,
    error::AppError,
    models::{PublicUser, User},
};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns the public user view plus a bearer
/// token. The duplicate-email check is a pre-insert lookup; two concurrent
/// signups with the same email may race.
#[post("/signup")]
pub async fn signup(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    signup_data: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    let signup_data = signup_data.into_inner();
    signup_data.validate()?;

    // Check if email already exists
    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(&signup_data.email)
        .fetch_optional(&**pool)
        .await?;

    if existing.is_some() {
        return Err(AppError::BadRequest("Email is already taken.".into()));
    }

    // Hash password and insert the new user; the creation timestamp is
    // assigned by the store.
    let password_hash = hash_password(&signup_data.password)?;

    let (user_id,): (i32,) = sqlx::query_as(
        "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&signup_data.name)
    .bind(&signup_data.email)
    .bind(&password_hash)
    .fetch_one(&**pool)
    .await?;

    let token = generate_token(
        user_id,
        &signup_data.name,
        &signup_data.email,
        &config.jwt_secret,
    )?;

    Ok(HttpResponse::Created().json(AuthResponse {
        user: PublicUser {
            id: user_id,
            name: signup_data.name,
            email: signup_data.email,
        },
        token,
    }))
}

/// Login user
///
/// Authenticates a user and returns the public user view plus a bearer token.
/// An unknown email and a wrong password produce the identical error, so the
/// response never reveals which part was wrong.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let user: Option<User> = sqlx::query_as(
        "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
    )
    .bind(&login_data.email)
    .fetch_optional(&**pool)
    .await?;

    let user = match user {
        Some(user) => user,
        None => return Err(AppError::BadRequest("Invalid credentials.".into())),
    };

    if !verify_password(&login_data.password, &user.password_hash)? {
        return Err(AppError::BadRequest("Invalid credentials.".into()));
    }

    let token = generate_token(user.id, &user.name, &user.email, &config.jwt_secret)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        user: PublicUser::from(&user),
        token,
    }))
}

/// Logout
///
/// Tokens are stateless, so logout is a no-op on the server; the client is
/// responsible for discarding its token.
#[post("/logout")]
pub async fn logout() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Logout successful." }))
}
