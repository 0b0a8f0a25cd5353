//! Best-effort copy of the translation to the system clipboard.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copies `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error if no clipboard is available (e.g. a headless session) or
/// the write is rejected.
pub fn write(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access the clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to write to the clipboard")?;
    Ok(())
}

/// Copies `text` to the system clipboard, ignoring any failure.
pub fn write_silently(text: &str) {
    let _ = write(text);
}
