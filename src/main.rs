use std::error::Error;

use actix_web::{middleware, web, App, HttpServer};

use aceai::session::SessionRegistry;
use aceai::textgen::TextGeneration;
use aceai::video::FaceDetection;
use aceai::{configure, AppState, Config};

async fn start_api(config: Config) -> std::io::Result<()> {
    let text_gen = TextGeneration::from_config(config.text_gen.clone());
    if !text_gen.is_available() {
        log::warn!("AI models loading: using simplified mode (ACEAI_TEXTGEN_URL not set)");
    }

    // Frames arrive with boxes from the browser's detector; no server-side detector is bundled
    let state = web::Data::new(
        AppState::new(text_gen, FaceDetection::Unavailable, config.camera_enabled)
            .with_sessions(SessionRegistry::with_limits(config.session_ttl, config.max_sessions)),
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    log::info!("🧠 Starting AceAi study buddy on http://{}:{}", config.host, config.port);
    log::info!(
        "   camera: {}, text generation: {}",
        if config.camera_enabled { "enabled" } else { "manual fallback" },
        if config.text_gen.is_some() { "configured" } else { "off" }
    );

    start_api(config).await?;

    Ok(())
}
