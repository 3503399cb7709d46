use async_trait::async_trait;

/// Repository for speech synthesis operations.
/// Abstracts the underlying synthesis provider.
///
/// Implementations are responsible for:
/// - Carrying the provider's voice and audio configuration
/// - Authenticating against the provider
/// - Decoding the provider's transport format into raw audio bytes
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize an SSML document to speech.
    ///
    /// Returns audio data ready for playback (MP3 format).
    ///
    /// # Errors
    /// Returns error if synthesis fails or the provider is unavailable.
    async fn synthesize(&self, ssml: &str) -> Result<Vec<u8>, String>;
}
