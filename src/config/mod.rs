//! Configuration file management and settings resolution.

mod manager;
mod resolve;

pub use manager::{
    Config, ConfigManager, DEFAULT_API_URL, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG,
};
pub use resolve::{ResolveOptions, ResolvedSettings, resolve_settings};
