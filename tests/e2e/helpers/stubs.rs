use async_trait::async_trait;
use sinhala_tts_backend::domain::prosody;
use sinhala_tts_backend::domain::transliteration::{MatchMode, Transliterator};
use sinhala_tts_backend::infrastructure::repositories::TtsRepository;

/// Stub provider that returns the SSML document it was asked to speak,
/// so tests can check exactly what reached the provider boundary.
pub struct EchoTtsRepository;

#[async_trait]
impl TtsRepository for EchoTtsRepository {
    async fn synthesize(&self, ssml: &str) -> Result<Vec<u8>, String> {
        Ok(ssml.as_bytes().to_vec())
    }
}

/// Stub provider that always fails, for exercising the error path.
pub struct FailingTtsRepository;

#[async_trait]
impl TtsRepository for FailingTtsRepository {
    async fn synthesize(&self, _ssml: &str) -> Result<Vec<u8>, String> {
        Err("quota exceeded for project".to_string())
    }
}

/// The bytes the echo stub will produce for a given Sinhala input,
/// computed through the same pipeline the server runs.
pub fn expected_audio_for(text: &str) -> Vec<u8> {
    let phonetic = Transliterator::new(MatchMode::LongestMatch).transliterate(text);
    prosody::wrap_ssml(&phonetic).into_bytes()
}
