use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::clipboard;
use crate::config::{ConfigManager, ResolveOptions, ResolvedSettings, resolve_settings};
use crate::input::InputReader;
use crate::translation::TranslationClient;
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub text: Option<String>,
    pub words: Vec<String>,
    pub overrides: ResolveOptions,
    pub config_path: Option<PathBuf>,
    pub no_clipboard: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let settings = load_settings(&options)?;

    let source_text = InputReader::read(options.text.as_deref(), &options.words)?;

    let client = TranslationClient::new(settings.url);

    let spinner = Spinner::new("Translating...");
    let result = client
        .translate(&source_text, &settings.source_lang, &settings.target_lang)
        .await;
    spinner.stop();
    let translated = result?;

    if !options.no_clipboard {
        clipboard::write_silently(&translated);
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{translated}")?;
    stdout.flush()?;

    Ok(())
}

fn load_settings(options: &TranslateOptions) -> Result<ResolvedSettings> {
    let manager = match &options.config_path {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };
    let file_config = manager.load_or_init();

    Ok(resolve_settings(&options.overrides, &file_config))
}
