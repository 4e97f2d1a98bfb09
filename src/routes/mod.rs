pub mod auth;
pub mod health;
pub mod profile;
pub mod tasks;

use actix_web::web;

use crate::auth::AuthMiddleware;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health::index)
        .service(health::health)
        .service(auth::signup)
        .service(auth::login)
        .service(auth::logout)
        .service(
            web::scope("/profile")
                .wrap(AuthMiddleware)
                .service(profile::get_profile)
                .service(profile::update_profile),
        )
        .service(
            web::scope("/tasks")
                .service(tasks::list_tasks)
                .service(tasks::create_task)
                .service(tasks::get_task)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        );
}
