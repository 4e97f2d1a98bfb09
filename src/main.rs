use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;

use taskdeck::config::Config;
use taskdeck::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    log::info!("Starting task server at {}", config.server_url());

    let bind_addr = (config.server_host.clone(), config.server_port);
    let app_config = config.clone();
    let server_pool = pool.clone();

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&app_config.allowed_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(server_pool.clone()))
            .app_data(web::Data::new(app_config.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    // Graceful shutdown: the pool is process-owned and closed once the server
    // has drained its workers.
    pool.close().await;

    Ok(())
}
