use super::error::SynthesisServiceError;
use crate::domain::prosody;
use crate::domain::transliteration::Transliterator;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub audio_data: Vec<u8>,
    pub phonetic_text: String,
    pub char_count: i32,
}

pub struct SynthesisService {
    tts_repo: Arc<dyn TtsRepository>,
    transliterator: Transliterator,
    audio_output_dir: Option<PathBuf>,
}

impl SynthesisService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        transliterator: Transliterator,
        audio_output_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            tts_repo,
            transliterator,
            audio_output_dir,
        }
    }
}

#[async_trait]
pub trait SynthesisServiceApi: Send + Sync {
    /// Synthesize Sinhala text to speech.
    ///
    /// This operation:
    /// - Transliterates the text to a Latin phonetic approximation
    /// - Wraps the phonetic text in an SSML document
    /// - Calls the synthesis provider with the fixed voice configuration
    /// - Optionally writes a per-request audio artifact
    ///
    /// Returns the audio bytes along with the phonetic text and its length.
    async fn synthesize(&self, text: String) -> Result<SynthesisResult, SynthesisServiceError>;
}

#[async_trait]
impl SynthesisServiceApi for SynthesisService {
    async fn synthesize(&self, text: String) -> Result<SynthesisResult, SynthesisServiceError> {
        if text.trim().is_empty() {
            return Err(SynthesisServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }

        let start_time = std::time::Instant::now();

        let phonetic_text = self.transliterator.transliterate(&text);

        // Slice on a char boundary; phonetic output is not pure ASCII (æ).
        let preview_end = phonetic_text
            .char_indices()
            .nth(200)
            .map(|(i, _)| i)
            .unwrap_or(phonetic_text.len());

        tracing::info!(
            input_length = text.chars().count(),
            phonetic_length = phonetic_text.chars().count(),
            match_mode = ?self.transliterator.mode(),
            phonetic_preview = &phonetic_text[..preview_end],
            "Text transliterated"
        );

        let ssml = prosody::wrap_ssml(&phonetic_text);

        let audio_data = self
            .tts_repo
            .synthesize(&ssml)
            .await
            .map_err(SynthesisServiceError::Dependency)?;

        if let Some(dir) = &self.audio_output_dir {
            self.write_artifact(dir, &audio_data).await?;
        }

        tracing::info!(
            latency_ms = start_time.elapsed().as_millis(),
            ssml_length = ssml.len(),
            audio_size_bytes = audio_data.len(),
            "Synthesis completed"
        );

        let char_count = phonetic_text.chars().count() as i32;

        Ok(SynthesisResult {
            audio_data,
            phonetic_text,
            char_count,
        })
    }
}

impl SynthesisService {
    /// Writes the audio to a uniquely named file so concurrent requests
    /// never share an artifact path.
    async fn write_artifact(
        &self,
        dir: &Path,
        audio_data: &[u8],
    ) -> Result<(), SynthesisServiceError> {
        let path = dir.join(format!("{}.mp3", Uuid::new_v4()));

        // A failed artifact write is local I/O, not a provider fault.
        tokio::fs::write(&path, audio_data).await.map_err(|e| {
            tracing::error!(error = %e, path = %path.display(), "Failed to write audio artifact");
            SynthesisServiceError::Other(
                anyhow::Error::new(e).context("failed to write audio artifact"),
            )
        })?;

        tracing::debug!(path = %path.display(), size = audio_data.len(), "Audio artifact written");
        Ok(())
    }
}
