mod client;
mod fallback;

pub use client::{DeepLClient, SERVER_URL_VAR, TextResult, TranslationRequest, Translator};
pub use fallback::translate_with_fallback;
