use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use apkmods_index::{config, endpoints};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let app_data = config::build_config().await?;

    info!("Running migrations");
    if let Err(e) = sqlx::migrate!("./migrations").run(app_data.db()).await {
        log::error!("Error encountered while running migrations: {}", e);
    }

    let addr = "0.0.0.0";
    let port = app_data.port();
    let debug = app_data.debug();

    info!("Starting server on {}:{}", addr, port);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_data.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "HEAD"])
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(endpoints::mods::index)
            .service(endpoints::mods::get)
            .service(endpoints::health::health)
    })
    .bind((addr, port))?;

    if debug {
        info!("Running in debug mode, using 1 thread.");
        server.workers(1).run().await?;
    } else {
        server.run().await?;
    }

    anyhow::Ok(())
}
