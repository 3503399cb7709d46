use sinhala_tts_backend::controllers::synthesis::SynthesisController;
use sinhala_tts_backend::domain::synthesis::SynthesisService;
use sinhala_tts_backend::domain::transliteration::{MatchMode, Transliterator};
use sinhala_tts_backend::infrastructure::http::build_router;
use sinhala_tts_backend::infrastructure::repositories::TtsRepository;
use std::sync::Arc;
use tokio::net::TcpListener;

pub mod stubs;

use api_client::TestClient;

pub struct TestContext {
    pub client: TestClient,
}

impl TestContext {
    /// Spawn the app on an ephemeral port with the given provider stub.
    pub async fn new(tts_repo: Arc<dyn TtsRepository>) -> Self {
        let synthesis_service = Arc::new(SynthesisService::new(
            tts_repo,
            Transliterator::new(MatchMode::LongestMatch),
            None,
        ));
        let controller = Arc::new(SynthesisController::new(synthesis_service));
        let app = build_router(controller);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local addr");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            client: TestClient::new(&base_url),
        }
    }
}
