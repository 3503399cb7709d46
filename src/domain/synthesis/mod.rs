pub mod error;
pub mod service;

pub use error::SynthesisServiceError;
pub use service::{SynthesisResult, SynthesisService, SynthesisServiceApi};
