use anyhow::{Context, Result, bail};
use std::io::{self, IsTerminal, Read};

use crate::ui::Style;

/// Error returned when every input source resolves to empty text.
#[derive(Debug, thiserror::Error)]
#[error(
    "No text provided for translation. \
     Please use the -text flag, pass the text as arguments or pipe it via standard input."
)]
pub struct EmptyInput;

pub struct InputReader;

impl InputReader {
    /// Resolves the text to translate from the process's standard input.
    ///
    /// Prints a prompt to stderr first when stdin is an interactive terminal.
    pub fn read(text: Option<&str>, words: &[String]) -> Result<String> {
        let stdin = io::stdin();
        if Self::pick(text, words).is_none() && stdin.is_terminal() {
            crate::status!(
                "{}",
                Style::hint("Enter text to translate (press Ctrl+D to finish input):")
            );
        }
        Self::resolve(text, words, stdin.lock())
    }

    /// Resolves the text to translate.
    ///
    /// Priority: `text` flag, then `words` joined by single spaces, then
    /// everything readable from `stdin` with one trailing newline removed.
    /// Invalid UTF-8 on stdin is replaced rather than rejected.
    /// `stdin` is only read when neither of the first two is set.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInput`] if the resolved text is empty, or an I/O error if
    /// stdin cannot be read.
    pub fn resolve<R: Read>(
        text: Option<&str>,
        words: &[String],
        stdin: R,
    ) -> Result<String> {
        let resolved = match Self::pick(text, words) {
            Some(picked) => picked,
            None => Self::read_stdin(stdin)?,
        };

        if resolved.is_empty() {
            bail!(EmptyInput);
        }

        Ok(resolved)
    }

    fn pick(text: Option<&str>, words: &[String]) -> Option<String> {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            return Some(text.to_string());
        }
        if !words.is_empty() {
            return Some(words.join(" "));
        }
        None
    }

    fn read_stdin<R: Read>(mut stdin: R) -> Result<String> {
        let mut buffer = Vec::new();
        stdin
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;

        let mut text = String::from_utf8_lossy(&buffer).into_owned();
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Ok(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_text_flag_wins() {
        let text = InputReader::resolve(
            Some("from flag"),
            &words(&["from", "args"]),
            Cursor::new("from stdin"),
        )
        .unwrap();

        assert_eq!(text, "from flag");
    }

    #[test]
    fn test_positional_words_joined_in_order() {
        let text = InputReader::resolve(
            None,
            &words(&["hello", "big", "world"]),
            Cursor::new("ignored"),
        )
        .unwrap();

        assert_eq!(text, "hello big world");
    }

    #[test]
    fn test_empty_text_flag_falls_through_to_words() {
        let text = InputReader::resolve(Some(""), &words(&["fallback"]), Cursor::new("")).unwrap();
        assert_eq!(text, "fallback");
    }

    #[test]
    fn test_stdin_trailing_newline_stripped() {
        let text = InputReader::resolve(None, &[], Cursor::new("Hi\n")).unwrap();
        assert_eq!(text, "Hi");
    }

    #[test]
    fn test_stdin_only_one_newline_stripped() {
        let text = InputReader::resolve(None, &[], Cursor::new("Line 1\nLine 2\n\n")).unwrap();
        assert_eq!(text, "Line 1\nLine 2\n");
    }

    #[test]
    fn test_stdin_crlf_stripped() {
        let text = InputReader::resolve(None, &[], Cursor::new("Hi\r\n")).unwrap();
        assert_eq!(text, "Hi");
    }

    #[test]
    fn test_stdin_unicode() {
        let text = InputReader::resolve(None, &[], Cursor::new("こんにちは世界！🌍\n")).unwrap();
        assert_eq!(text, "こんにちは世界！🌍");
    }

    #[test]
    fn test_empty_stdin_is_error() {
        let err = InputReader::resolve(None, &[], Cursor::new("\n")).unwrap_err();
        assert!(err.downcast_ref::<EmptyInput>().is_some());
        assert!(err.to_string().contains("No text provided"));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let text =
            InputReader::resolve(None, &[], Cursor::new(b"caf\xe9 ok\n".to_vec())).unwrap();
        assert_eq!(text, "caf\u{FFFD} ok");
    }
}
