use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Overrides the DeepL server, e.g. for a proxy or a local mock.
pub const SERVER_URL_VAR: &str = "SAGMAL_DEEPL_SERVER_URL";

const FREE_SERVER_URL: &str = "https://api-free.deepl.com";
const PRO_SERVER_URL: &str = "https://api.deepl.com";

/// One call to the translation service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslationRequest<'a> {
    pub text: &'a str,
    /// `None` lets the service detect the source language.
    pub source_language: Option<&'a str>,
    pub target_language: &'a str,
    /// Service options, keyed the way they are written in config files.
    pub options: &'a Map<String, Value>,
}

/// What the translation service returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResult {
    pub text: String,
    pub detected_source_lang: String,
}

/// A remote translation service.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate_text(&self, request: &TranslationRequest<'_>)
    -> Result<TextResult, ApiError>;
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    detected_source_language: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// Client for the DeepL `/v2/translate` endpoint.
pub struct DeepLClient {
    client: Client,
    server_url: String,
    api_key: String,
}

impl DeepLClient {
    /// Creates a client for `api_key`.
    ///
    /// Free-plan keys (ending in `:fx`) use the free API host. The
    /// `SAGMAL_DEEPL_SERVER_URL` variable overrides the host for any key.
    pub fn new(api_key: String) -> Self {
        let server_url = std::env::var(SERVER_URL_VAR)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| default_server_url(&api_key).to_string());

        Self::with_server_url(api_key, server_url)
    }

    pub fn with_server_url(api_key: String, server_url: String) -> Self {
        Self {
            client: Client::new(),
            server_url,
            api_key,
        }
    }
}

#[async_trait]
impl Translator for DeepLClient {
    async fn translate_text(
        &self,
        request: &TranslationRequest<'_>,
    ) -> Result<TextResult, ApiError> {
        let url = format!("{}/v2/translate", self.server_url.trim_end_matches('/'));
        let body = build_request_body(request);

        log::debug!("POST {url} (target: {})", request.target_language);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("DeepL-Auth-Key {}", self.api_key))
            .header(
                USER_AGENT,
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )
            .json(&body)
            .send()
            .await
            .map_err(|source| ApiError::Connection {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                message: status_message(body),
            });
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        first_translation(parsed)
    }
}

/// Picks the `message` field of an error body, falling back to the raw body.
fn status_message(body: String) -> String {
    serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or(body)
}

fn first_translation(response: TranslateResponse) -> Result<TextResult, ApiError> {
    response
        .translations
        .into_iter()
        .next()
        .map(|t| TextResult {
            text: t.text,
            detected_source_lang: t.detected_source_language,
        })
        .ok_or_else(|| ApiError::InvalidResponse("no translations returned".to_string()))
}

fn default_server_url(api_key: &str) -> &'static str {
    if api_key.ends_with(":fx") {
        FREE_SERVER_URL
    } else {
        PRO_SERVER_URL
    }
}

fn build_request_body(request: &TranslationRequest<'_>) -> Map<String, Value> {
    let mut body = Map::new();

    for (key, value) in request.options {
        let value = if key == "splitSentences" {
            split_sentences_value(value)
        } else {
            value.clone()
        };
        body.insert(api_option_name(key), value);
    }

    body.insert("text".to_string(), Value::from(vec![request.text]));
    body.insert(
        "target_lang".to_string(),
        Value::from(request.target_language.to_uppercase()),
    );
    if let Some(source) = request.source_language {
        body.insert("source_lang".to_string(), Value::from(source.to_uppercase()));
    }

    body
}

/// Option names whose HTTP API field is not the snake_case of the name.
const RENAMED_OPTIONS: &[(&str, &str)] = &[("glossary", "glossary_id"), ("styleRule", "style_id")];

fn api_option_name(key: &str) -> String {
    RENAMED_OPTIONS
        .iter()
        .find(|(name, _)| *name == key)
        .map_or_else(|| to_snake_case(key), |(_, field)| (*field).to_string())
}

/// `splitSentences` takes `on`/`off`/`default` where the API wants `1`/`0`.
fn split_sentences_value(value: &Value) -> Value {
    match value.as_str() {
        Some("on" | "default") => Value::from("1"),
        Some("off") => Value::from("0"),
        _ => value.clone(),
    }
}

/// Converts `modelType` style option names to the API's `model_type`.
fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
