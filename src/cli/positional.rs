//! Splits positional arguments into language options and the text to translate.

use crate::error::{MAX_TEXT_LENGTH, Result, SagmalError};
use crate::language::{LanguageOptionPair, PositionalLanguageOptions};

/// Text and language options extracted from the positional arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionalArgs {
    pub language_options: PositionalLanguageOptions,
    pub text: String,
}

/// Extracts language options from the first and last positional argument and
/// joins the rest with single spaces.
///
/// A single argument is only checked as a leading option. The last argument is
/// only consumed if something is left after removing the leading option, so
/// `["ja:", "fr:"]` yields an empty text rather than dropping a token twice.
///
/// # Errors
///
/// Returns [`SagmalError::TextTooLong`] if the joined text is longer than
/// [`MAX_TEXT_LENGTH`] UTF-16 code units.
pub fn split_positionals<S: AsRef<str>>(args: &[S]) -> Result<PositionalArgs> {
    let Some((first_token, rest)) = args.split_first() else {
        return Ok(PositionalArgs::default());
    };

    let first = LanguageOptionPair::parse(first_token.as_ref());
    let last = rest
        .last()
        .and_then(|token| LanguageOptionPair::parse(token.as_ref()));

    let mut parts = args;
    if first.is_some() {
        parts = rest;
    }
    if last.is_some()
        && let Some((_, init)) = parts.split_last()
    {
        parts = init;
    }

    let text = parts
        .iter()
        .map(|part| part.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");

    let length = text.encode_utf16().count();
    if length > MAX_TEXT_LENGTH {
        return Err(SagmalError::TextTooLong {
            length,
            max: MAX_TEXT_LENGTH,
        });
    }

    Ok(PositionalArgs {
        language_options: PositionalLanguageOptions { first, last },
        text,
    })
}
