use sinhala_tts_backend::controllers::synthesis::SynthesisController;
use sinhala_tts_backend::domain::synthesis::SynthesisService;
use sinhala_tts_backend::domain::transliteration::Transliterator;
use sinhala_tts_backend::infrastructure::config::{Config, LogFormat};
use sinhala_tts_backend::infrastructure::http::start_http_server;
use sinhala_tts_backend::infrastructure::repositories::GoogleTtsRepository;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Sinhala TTS Backend on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        endpoint = %config.google_tts_endpoint,
        match_mode = ?config.translit_match_mode,
        artifact_dir = ?config.audio_output_dir,
        environment = ?config.environment,
        "Synthesis configuration loaded"
    );

    if let Some(dir) = &config.audio_output_dir {
        tokio::fs::create_dir_all(dir).await?;
        tracing::info!(path = %dir.display(), "Audio artifact directory ready");
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the provider repository (inject HTTP client)
    tracing::info!("Instantiating Google TTS repository...");
    let http_client = reqwest::Client::new();
    let tts_repo = Arc::new(GoogleTtsRepository::new(
        http_client,
        config.google_tts_endpoint.clone(),
        config.google_tts_api_key.clone(),
    ));

    // 2. Instantiate services (inject repository)
    tracing::info!("Instantiating services...");
    let synthesis_service = Arc::new(SynthesisService::new(
        tts_repo,
        Transliterator::new(config.translit_match_mode),
        config.audio_output_dir.clone(),
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let synthesis_controller = Arc::new(SynthesisController::new(synthesis_service));

    // Start HTTP server with all routes
    start_http_server(config, synthesis_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "sinhala_tts_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "sinhala_tts_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
