use anyhow::Result;

use crate::cli::PositionalArgs;
use crate::clipboard::copy_to_clipboard;
use crate::config::{ConfigInputs, resolve_parameters};
use crate::credentials;
use crate::translation::{DeepLClient, translate_with_fallback};
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub positionals: PositionalArgs,
    pub copy: bool,
}

/// How a translate invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateOutcome {
    /// Only language options were given; the caller shows usage instead.
    NothingToTranslate,
    Translated,
}

pub async fn run_translate(options: TranslateOptions) -> Result<TranslateOutcome> {
    credentials::load_environment();
    let api_key = credentials::api_key()?;
    let configs = ConfigInputs::load()?;

    let PositionalArgs {
        language_options,
        text,
    } = options.positionals;

    if text.is_empty() {
        return Ok(TranslateOutcome::NothingToTranslate);
    }

    let params = resolve_parameters(&language_options, &configs, options.copy)?;
    let client = DeepLClient::new(api_key);

    let translated = {
        let spinner = Spinner::new("Translating...");
        let result = translate_with_fallback(&client, &text, &params).await;
        spinner.stop();
        result?
    };

    println!("{translated}");

    if params.should_copy_to_clipboard {
        copy_to_clipboard(&translated);
    }

    Ok(TranslateOutcome::Translated)
}
