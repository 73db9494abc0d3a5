//! # sagmal - Say it in another language
//!
//! `sagmal` translates short text from the command line with DeepL. Language
//! hints are written inline as `source:target` tokens at the start and/or the
//! end of the text.
//!
//! ## Quick Start
//!
//! ```bash
//! # Auto-detect the source, translate to the default target (en-US)
//! sagmal Bonjour tout le monde
//!
//! # German source, default target
//! sagmal de: Hallo Welt!
//!
//! # Japanese source, Traditional Chinese target
//! sagmal ja: 私は大丈夫です :zh-HANT
//!
//! # Copy the result to the clipboard
//! sagmal -c Je pense, donc je suis :ja
//! ```
//!
//! ## Configuration
//!
//! The API key is read from `SAGMAL_DEEPL_API_KEY`, which may also be set in
//! `./.env` or `~/.env`.
//!
//! Defaults live in `~/.sagmalrc.json`, and `./.sagmalrc.json` overrides them
//! per directory:
//!
//! ```json
//! {
//!   "deepL": {
//!     "sourceLang": null,
//!     "targetLang": "ja",
//!     "targetLang2": "en",
//!     "options": { "formality": "prefer_less" }
//!   },
//!   "copyToClipboard": true
//! }
//! ```
//!
//! Language options on the command line override both files.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Best-effort clipboard copy.
pub mod clipboard;

/// Config file loading and parameter resolution.
pub mod config;

/// API key lookup.
pub mod credentials;

/// Error types.
pub mod error;

/// Language options and language tag helpers.
pub mod language;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// Config and `.env` file locations.
pub mod paths;

/// Translation service client and fallback logic.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
