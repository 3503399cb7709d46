use super::tts_repository::TtsRepository;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Fixed voice and audio configuration for every request.
const LANGUAGE_CODE: &str = "en-US";
const VOICE_NAME: &str = "en-IN-Wavenet-B";
const AUDIO_ENCODING: &str = "MP3";
const PITCH: f64 = 4.0;
const SPEAKING_RATE: f64 = 0.8;
const VOLUME_GAIN_DB: f64 = 2.0;

/// Google Cloud Text-to-Speech implementation of the TTS repository.
///
/// Talks to the REST API (`v1/text:synthesize`) with an API key; the
/// response carries the audio as base64 in `audioContent`.
pub struct GoogleTtsRepository {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest {
    input: SynthesisInput,
    voice: VoiceSelection,
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput {
    ssml: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection {
    language_code: &'static str,
    name: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
    pitch: f64,
    speaking_rate: f64,
    volume_gain_db: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: Option<String>,
}

impl GoogleTtsRepository {
    pub fn new(client: reqwest::Client, endpoint: String, api_key: String) -> Self {
        Self {
            client,
            endpoint,
            api_key,
        }
    }

    fn build_request(ssml: &str) -> SynthesizeRequest {
        SynthesizeRequest {
            input: SynthesisInput {
                ssml: ssml.to_string(),
            },
            voice: VoiceSelection {
                language_code: LANGUAGE_CODE,
                name: VOICE_NAME,
            },
            audio_config: AudioConfig {
                audio_encoding: AUDIO_ENCODING,
                pitch: PITCH,
                speaking_rate: SPEAKING_RATE,
                volume_gain_db: VOLUME_GAIN_DB,
            },
        }
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, ssml: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();
        let body = Self::build_request(ssml);

        // Slice on a char boundary; the document is not pure ASCII (æ).
        let preview_end = ssml
            .char_indices()
            .nth(200)
            .map(|(i, _)| i)
            .unwrap_or(ssml.len());

        tracing::info!(
            voice = VOICE_NAME,
            language = LANGUAGE_CODE,
            output_format = AUDIO_ENCODING,
            ssml_length = ssml.len(),
            ssml_preview = &ssml[..preview_end],
            "Calling Google TTS text:synthesize"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Google TTS request failed");
                format!("Google TTS request failed: {e}")
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                error_body = %error_body,
                ssml_length = ssml.len(),
                "Google TTS returned an error status"
            );
            return Err(format!("Google TTS returned status {status}"));
        }

        let parsed: SynthesizeResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse Google TTS response");
            format!("Failed to parse Google TTS response: {e}")
        })?;

        let audio_content = parsed
            .audio_content
            .ok_or_else(|| "Google TTS response missing audioContent".to_string())?;

        let audio_bytes = BASE64.decode(audio_content.as_bytes()).map_err(|e| {
            tracing::error!(error = %e, "Failed to decode audioContent");
            format!("Failed to decode audioContent: {e}")
        })?;

        tracing::info!(
            provider = "google",
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio_bytes.len(),
            "TTS synthesis completed"
        );

        Ok(audio_bytes)
    }
}
