use std::sync::Arc;
use std::time::Duration;

use actix_web::HttpServer;

use show_review_api::store_client::{ReviewStore, ReviewStoreClient};
use show_review_api::{app, config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing show review service...");

    let config = config::load_config().map_err(|e| {
        log::error!("failed to load config: {}", e);
        std::io::Error::other(e)
    })?;

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.store.connect_timeout_secs))
        .read_timeout(Duration::from_secs(config.store.read_timeout_secs))
        .build()
        .map_err(std::io::Error::other)?;

    let store: Arc<dyn ReviewStore> = Arc::new(ReviewStoreClient::new(http_client, &config.store));

    log::info!(
        "listening on {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || app::create_app(store.clone()))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await
}
