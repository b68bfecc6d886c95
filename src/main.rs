use actix_files::Files;
use actix_web::{App, HttpServer, web};
use diesel::prelude::*;

use wardrobe_api::db::{DbPool, establish_connection_pool};
use wardrobe_api::models::config::ServerConfig;
use wardrobe_api::repository::DieselRepository;
use wardrobe_api::routes;

/// Startup health check: acquire a connection and run a trivial query.
fn check_store(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = pool.get()?;
    diesel::sql_query("SELECT 1").execute(&mut conn)?;
    Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    std::fs::create_dir_all(&config.uploads_dir)?;

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database pool: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = check_store(&pool) {
        log::error!("Store health check failed: {e}");
        std::process::exit(1);
    }

    log::info!("Listening on {}:{}", config.host, config.port);

    let bind_addr = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(DieselRepository::new(pool.clone())))
            .app_data(web::Data::new(config.clone()))
            .configure(routes::configure)
            .service(Files::new("/uploads", &config.uploads_dir))
    })
    .bind(bind_addr)?
    .run()
    .await
}
