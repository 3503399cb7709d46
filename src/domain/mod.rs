pub mod prosody;
pub mod synthesis;
pub mod transliteration;
