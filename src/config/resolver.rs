//! Cascading resolution of translation parameters.
//!
//! Every source of settings is turned into a [`ParameterLayer`]. Layers are
//! folded in ascending priority (defaults, home config, local config, CLI) and
//! a field a layer leaves unset never overrides the layers below it.

use serde_json::{Map, Value};

use super::loader::{ConfigInputs, ConfigScope, RawConfig};
use crate::error::{LanguageAxis, Result, SagmalError};
use crate::language::{
    DEFAULT_TARGET_LANGUAGE, LanguageOptionPair, PositionalLanguageOptions,
    normalize_target_language,
};

/// Option key reserved for internal use by the DeepL client library.
const RESERVED_OPTION_KEY: &str = "__path";

/// Parameters contributed by one settings source.
///
/// `None` means the source does not mention the field. For the source
/// language, `Some(None)` is an explicit request for auto-detection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterLayer {
    pub source_language: Option<Option<String>>,
    pub target_language: Option<String>,
    pub secondary_target_language: Option<String>,
    pub translation_options: Map<String, Value>,
    pub copy_to_clipboard: Option<bool>,
}

impl ParameterLayer {
    /// Built-in defaults: auto-detect into `en-US`, no options, no clipboard.
    pub fn defaults() -> Self {
        Self {
            source_language: Some(None),
            target_language: Some(DEFAULT_TARGET_LANGUAGE.to_string()),
            secondary_target_language: None,
            translation_options: Map::new(),
            copy_to_clipboard: Some(false),
        }
    }

    /// Builds the layer for one config file.
    ///
    /// # Errors
    ///
    /// Returns [`SagmalError::ReservedConfigField`] if the config's options
    /// contain `__path`.
    pub fn from_config(config: &RawConfig, scope: ConfigScope) -> Result<Self> {
        let translation_options = config.options().cloned().unwrap_or_default();
        if translation_options.contains_key(RESERVED_OPTION_KEY) {
            return Err(SagmalError::ReservedConfigField { scope });
        }

        Ok(Self {
            source_language: config
                .source_lang()
                .map(|lang| lang.map(str::to_string)),
            target_language: config.target_lang().map(normalize_target_language),
            secondary_target_language: config.target_lang2().map(normalize_target_language),
            translation_options,
            copy_to_clipboard: config.copy_to_clipboard(),
        })
    }

    /// Builds the layer for the command line.
    ///
    /// The copy flag only counts when it was given; leaving it off does not
    /// turn off clipboard copying enabled in a config file.
    pub fn from_cli(languages: &LanguageOptionPair, copy_requested: bool) -> Self {
        Self {
            source_language: languages.source_lang.clone().map(Some),
            target_language: languages
                .target_lang
                .as_deref()
                .map(normalize_target_language),
            secondary_target_language: None,
            translation_options: Map::new(),
            copy_to_clipboard: copy_requested.then_some(true),
        }
    }

    /// Applies `higher` on top of `self`.
    ///
    /// Options are merged key by key, so a lower layer's option survives
    /// unless `higher` sets the same key.
    #[must_use]
    pub fn overlay(mut self, higher: Self) -> Self {
        if higher.source_language.is_some() {
            self.source_language = higher.source_language;
        }
        if higher.target_language.is_some() {
            self.target_language = higher.target_language;
        }
        if higher.secondary_target_language.is_some() {
            self.secondary_target_language = higher.secondary_target_language;
        }
        self.translation_options.extend(higher.translation_options);
        if higher.copy_to_clipboard.is_some() {
            self.copy_to_clipboard = higher.copy_to_clipboard;
        }
        self
    }
}

/// Fully resolved parameters for one translation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTranslationParameters {
    /// `None` lets the translation service detect the language.
    pub source_language: Option<String>,
    pub target_language: String,
    /// Retry target for text that came back untranslated. Only set when the
    /// target language did not come from the command line.
    pub secondary_target_language: Option<String>,
    pub translation_options: Map<String, Value>,
    pub should_copy_to_clipboard: bool,
}

impl From<ParameterLayer> for ResolvedTranslationParameters {
    fn from(layer: ParameterLayer) -> Self {
        Self {
            source_language: layer.source_language.flatten(),
            target_language: layer
                .target_language
                .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string()),
            secondary_target_language: layer.secondary_target_language,
            translation_options: layer.translation_options,
            should_copy_to_clipboard: layer.copy_to_clipboard.unwrap_or(false),
        }
    }
}

/// Folds layers given in ascending priority into resolved parameters.
pub fn merge_layers<I>(layers: I) -> ResolvedTranslationParameters
where
    I: IntoIterator<Item = ParameterLayer>,
{
    layers
        .into_iter()
        .fold(ParameterLayer::default(), ParameterLayer::overlay)
        .into()
}

/// Combines the leading and trailing language options into one.
///
/// The trailing option wins where only one side is set. Both sides setting
/// the same axis to different values is an error; equal values are fine.
///
/// # Errors
///
/// Returns [`SagmalError::ConflictingLanguage`] naming the axis and both
/// values.
pub fn merge_cli_language_options(
    options: &PositionalLanguageOptions,
) -> Result<LanguageOptionPair> {
    let first = options.first.clone().unwrap_or_default();
    let last = options.last.clone().unwrap_or_default();

    Ok(LanguageOptionPair {
        source_lang: merge_axis(LanguageAxis::Source, first.source_lang, last.source_lang)?,
        target_lang: merge_axis(LanguageAxis::Target, first.target_lang, last.target_lang)?,
    })
}

fn merge_axis(
    axis: LanguageAxis,
    first: Option<String>,
    last: Option<String>,
) -> Result<Option<String>> {
    match (first, last) {
        (Some(first), Some(last)) if first != last => {
            Err(SagmalError::ConflictingLanguage { axis, first, last })
        }
        (first, last) => Ok(last.or(first)),
    }
}

/// Resolves the parameters for one invocation.
///
/// Priority, lowest first: built-in defaults, home config, local config,
/// command line. Target languages equal to `en` (any case) become `en-US`.
///
/// # Errors
///
/// Fails with [`SagmalError::ConflictingLanguage`] if the command line
/// language options disagree, or [`SagmalError::ReservedConfigField`] if a
/// config file uses a reserved option key.
pub fn resolve_parameters(
    cli_languages: &PositionalLanguageOptions,
    configs: &ConfigInputs,
    copy_requested: bool,
) -> Result<ResolvedTranslationParameters> {
    let cli = merge_cli_language_options(cli_languages)?;

    let layers = [
        ParameterLayer::defaults(),
        ParameterLayer::from_config(&configs.home, ConfigScope::Home)?,
        ParameterLayer::from_config(&configs.local, ConfigScope::Local)?,
        ParameterLayer::from_cli(&cli, copy_requested),
    ];

    let mut resolved = merge_layers(layers);
    if cli.target_lang.is_some() {
        resolved.secondary_target_language = None;
    }

    log::debug!("Resolved parameters: {resolved:?}");
    Ok(resolved)
}
