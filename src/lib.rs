//! # deeplx-cli - DeepLX Translation CLI
//!
//! `deeplx-cli` sends text to a [DeepLX](https://github.com/OwO-Network/DeepLX)
//! endpoint, prints the translation and copies it to the clipboard.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a flag value
//! deeplx-cli -text "Hello, world" -t ZH
//!
//! # Translate the remaining arguments
//! deeplx-cli -s EN -t JA good morning
//!
//! # Translate from stdin
//! cat notes.txt | deeplx-cli -t DE
//! ```
//!
//! ## Configuration
//!
//! Defaults live in `~/.deeplx-cli.yml`, generated on first run:
//!
//! ```yaml
//! url: https://deeplx.vercel.app/translate
//! source_lang: auto
//! target_lang: EN
//! ```
//!
//! Command-line flags override the file; `-source_lang` / `-target_lang`
//! override their `-s` / `-t` shorthands.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Best-effort clipboard output.
pub mod clipboard;

/// Configuration file management and settings resolution.
pub mod config;

/// Input text resolution from flags, arguments and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr routing).
pub mod output;

/// Home directory and config file paths.
pub mod paths;

/// Client for the DeepLX translation endpoint.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
