//! Language tag helpers.

/// Target language used when nothing else is configured.
pub const DEFAULT_TARGET_LANGUAGE: &str = "en-US";

/// Returns `true` if two language tags likely name the same language.
///
/// Subtags are compared case-insensitively in order. A tag that runs out of
/// subtags is treated as the generic form of the other, so `pt` matches
/// `pt-BR`, while `en-US` and `en-GB` differ. An empty subtag counts as
/// missing. This is a heuristic, not BCP 47 matching.
pub fn likely_same_language(a: &str, b: &str) -> bool {
    let mut left = a.split('-');
    let mut right = b.split('-');

    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) if !l.is_empty() && !r.is_empty() => {
                if !l.eq_ignore_ascii_case(r) {
                    return false;
                }
            }
            _ => return true,
        }
    }
}

/// Rewrites the bare `en` target (any case) to `en-US`.
///
/// The translation service rejects `en` as a target, it needs a regional
/// variant. Every other value is returned unchanged.
pub fn normalize_target_language(lang: &str) -> String {
    if lang.eq_ignore_ascii_case("en") {
        DEFAULT_TARGET_LANGUAGE.to_string()
    } else {
        lang.to_string()
    }
}
