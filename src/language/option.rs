//! Inline language options such as `ja:en`, `de:` or `:fr`.

/// Source and target language parsed from a single `src:tgt` token.
///
/// Either side may be `None` when the token leaves it empty, so `:` alone is
/// a valid option that specifies nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageOptionPair {
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
}

impl LanguageOptionPair {
    pub fn new(source_lang: Option<&str>, target_lang: Option<&str>) -> Self {
        Self {
            source_lang: source_lang.map(str::to_string),
            target_lang: target_lang.map(str::to_string),
        }
    }

    /// Parses a positional token as a language option.
    ///
    /// Returns `None` when the token is not a language option and should be
    /// treated as ordinary text: no colon at all, or more than one colon.
    /// Case is preserved.
    ///
    /// ```
    /// use sagmal::language::LanguageOptionPair;
    ///
    /// let pair = LanguageOptionPair::parse("ja:").unwrap();
    /// assert_eq!(pair.source_lang.as_deref(), Some("ja"));
    /// assert_eq!(pair.target_lang, None);
    ///
    /// assert!(LanguageOptionPair::parse("hello").is_none());
    /// assert!(LanguageOptionPair::parse("ja:en:fr").is_none());
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        let (source, target) = token.split_once(':')?;
        if target.contains(':') {
            return None;
        }

        Some(Self::new(non_empty(source), non_empty(target)))
    }
}

fn non_empty(part: &str) -> Option<&str> {
    (!part.is_empty()).then_some(part)
}

/// Language options found at the first and last positional argument.
///
/// `None` at a position means no language token was there, which differs from
/// a token like `:` that parsed to an empty pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionalLanguageOptions {
    pub first: Option<LanguageOptionPair>,
    pub last: Option<LanguageOptionPair>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_and_target() {
        assert_eq!(
            LanguageOptionPair::parse("ja:vi"),
            Some(LanguageOptionPair::new(Some("ja"), Some("vi")))
        );
    }

    #[test]
    fn test_parse_target_only() {
        assert_eq!(
            LanguageOptionPair::parse(":en"),
            Some(LanguageOptionPair::new(None, Some("en")))
        );
    }

    #[test]
    fn test_parse_source_only() {
        assert_eq!(
            LanguageOptionPair::parse("de:"),
            Some(LanguageOptionPair::new(Some("de"), None))
        );
    }

    #[test]
    fn test_parse_bare_colon_is_empty_option() {
        let pair = LanguageOptionPair::parse(":");
        assert_eq!(pair, Some(LanguageOptionPair::default()));
    }

    #[test]
    fn test_parse_plain_word_is_not_an_option() {
        assert_eq!(LanguageOptionPair::parse("hello"), None);
        assert_eq!(LanguageOptionPair::parse(""), None);
    }

    #[test]
    fn test_parse_multiple_colons_is_not_an_option() {
        assert_eq!(LanguageOptionPair::parse("ja:en:fr"), None);
        assert_eq!(LanguageOptionPair::parse("::"), None);
        assert_eq!(LanguageOptionPair::parse("12:30:00"), None);
    }

    #[test]
    fn test_parse_preserves_case() {
        assert_eq!(
            LanguageOptionPair::parse("JA:zh-HANT"),
            Some(LanguageOptionPair::new(Some("JA"), Some("zh-HANT")))
        );
    }
}
