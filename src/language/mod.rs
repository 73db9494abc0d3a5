mod code;
mod option;

pub use code::{DEFAULT_TARGET_LANGUAGE, likely_same_language, normalize_target_language};
pub use option::{LanguageOptionPair, PositionalLanguageOptions};
