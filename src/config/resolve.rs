use super::manager::{Config, DEFAULT_API_URL, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG};

/// Settings after merging CLI arguments, the config file and built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    /// The DeepLX endpoint URL.
    pub url: String,
    /// The source language code.
    pub source_lang: String,
    /// The target language code.
    pub target_lang: String,
}

/// CLI overrides that take precedence over config file values.
///
/// Long-form flags and their single-letter shorthands are kept apart so the
/// long form can win when both are given.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// `--url`
    pub url: Option<String>,
    /// `--source_lang`
    pub source_lang: Option<String>,
    /// `-s`
    pub source_lang_short: Option<String>,
    /// `--target_lang`
    pub target_lang: Option<String>,
    /// `-t`
    pub target_lang_short: Option<String>,
}

/// Resolves the effective settings.
///
/// Priority, highest first: long flag, shorthand flag, config file, built-in
/// default. Empty strings are treated as unset at every level.
pub fn resolve_settings(options: &ResolveOptions, config: &Config) -> ResolvedSettings {
    let url = first_set(&[options.url.as_deref(), config.url.as_deref()])
        .unwrap_or(DEFAULT_API_URL);

    let source_lang = first_set(&[
        options.source_lang.as_deref(),
        options.source_lang_short.as_deref(),
        config.source_lang.as_deref(),
    ])
    .unwrap_or(DEFAULT_SOURCE_LANG);

    let target_lang = first_set(&[
        options.target_lang.as_deref(),
        options.target_lang_short.as_deref(),
        config.target_lang.as_deref(),
    ])
    .unwrap_or(DEFAULT_TARGET_LANG);

    ResolvedSettings {
        url: url.to_string(),
        source_lang: source_lang.to_string(),
        target_lang: target_lang.to_string(),
    }
}

fn first_set<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.is_empty())
}
