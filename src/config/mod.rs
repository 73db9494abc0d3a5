//! `.sagmalrc.json` loading and parameter resolution.

mod loader;
mod resolver;

pub use loader::{ConfigInputs, ConfigScope, RawConfig};
pub use resolver::{
    ParameterLayer, ResolvedTranslationParameters, merge_cli_language_options, merge_layers,
    resolve_parameters,
};
