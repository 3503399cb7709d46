use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::synthesis::{SynthesisService, SynthesisServiceApi},
    error::{AppError, AppResult},
    infrastructure::middleware::RequestId,
};

/// Request for POST /synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
}

pub struct SynthesisController {
    synthesis_service: Arc<SynthesisService>,
}

impl SynthesisController {
    pub fn new(synthesis_service: Arc<SynthesisService>) -> Self {
        Self { synthesis_service }
    }

    /// POST /synthesize - Convert Sinhala text to speech
    pub async fn synthesize(
        State(controller): State<Arc<SynthesisController>>,
        Extension(RequestId(request_id)): Extension<RequestId>,
        Json(request): Json<SynthesizeRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        tracing::info!(
            request_id = %request_id,
            text_length = request.text.chars().count(),
            "Synthesis request received"
        );

        let result = controller
            .synthesis_service
            .synthesize(request.text)
            .await
            .map_err(AppError::from)?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
        headers.insert(
            "X-Character-Count",
            result.char_count.to_string().parse().unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from(result.audio_data)))
    }
}
