use crate::config::ResolvedTranslationParameters;
use crate::error::ApiError;
use crate::language::likely_same_language;

use super::client::{TranslationRequest, Translator};

/// Translates `text`, retrying once with the secondary target language when
/// the first attempt was a no-op.
///
/// The retry happens only if a secondary target is set, the detected source
/// language likely matches the target, and the text came back unchanged
/// (ignoring surrounding whitespace). An error from either call is returned
/// as is.
pub async fn translate_with_fallback<T>(
    translator: &T,
    text: &str,
    params: &ResolvedTranslationParameters,
) -> Result<String, ApiError>
where
    T: Translator + ?Sized,
{
    let mut request = TranslationRequest {
        text,
        source_language: params.source_language.as_deref(),
        target_language: &params.target_language,
        options: &params.translation_options,
    };

    let result = translator.translate_text(&request).await?;

    let Some(secondary) = params.secondary_target_language.as_deref() else {
        return Ok(result.text);
    };

    let unchanged = result.text.trim() == text.trim();
    if !unchanged || !likely_same_language(&result.detected_source_lang, &params.target_language)
    {
        return Ok(result.text);
    }

    log::debug!(
        "Source detected as '{}', retrying with secondary target '{secondary}'",
        result.detected_source_lang
    );
    request.target_language = secondary;
    let retried = translator.translate_text(&request).await?;
    Ok(retried.text)
}
