use crate::domain::transliteration::MatchMode;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_TTS_ENDPOINT: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub google_tts_api_key: String,
    pub google_tts_endpoint: String,
    pub translit_match_mode: MatchMode,
    pub audio_output_dir: Option<PathBuf>,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            google_tts_api_key: env::var("GOOGLE_TTS_API_KEY")?,
            google_tts_endpoint: env::var("GOOGLE_TTS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_TTS_ENDPOINT.to_string()),
            translit_match_mode: parse_match_mode(env::var("TRANSLIT_MATCH_MODE").ok())?,
            audio_output_dir: env::var("AUDIO_OUTPUT_DIR").ok().map(PathBuf::from),
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

/// Unset means the default; a set but unrecognized value is a hard error so
/// a typo cannot silently flip a deployment between match modes.
fn parse_match_mode(value: Option<String>) -> Result<MatchMode, String> {
    match value {
        Some(s) => MatchMode::parse(&s).ok_or_else(|| {
            format!("invalid TRANSLIT_MATCH_MODE {s:?}, expected \"literal\" or \"longest\"")
        }),
        None => Ok(MatchMode::default()),
    }
}
