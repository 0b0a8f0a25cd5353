use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deeplx-cli")]
#[command(about = "Translate text with a DeepLX endpoint and copy the result to the clipboard")]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Text to translate (reads from arguments or stdin if not provided)
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Source language (e.g. auto, EN, JA)
    #[arg(long = "source_lang", value_name = "LANG")]
    pub source_lang: Option<String>,

    /// Source language (shorthand for --source_lang)
    #[arg(short = 's', value_name = "LANG")]
    pub source_lang_short: Option<String>,

    /// Target language (e.g. EN, ZH, DE)
    #[arg(long = "target_lang", value_name = "LANG")]
    pub target_lang: Option<String>,

    /// Target language (shorthand for --target_lang)
    #[arg(short = 't', value_name = "LANG")]
    pub target_lang_short: Option<String>,

    /// URL of the DeepLX API
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Config file to use instead of ~/.deeplx-cli.yml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress status messages on stderr
    #[arg(
        short = 'q',
        long,
        num_args = 0..=1,
        require_equals = true,
        action = ArgAction::Set,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub quiet: bool,

    /// Do not copy the translation to the clipboard
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        action = ArgAction::Set,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub no_clipboard: bool,

    /// Show version information
    #[arg(
        short = 'v',
        long,
        num_args = 0..=1,
        require_equals = true,
        action = ArgAction::Set,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub version: bool,

    /// Text to translate, when --text is not given
    #[arg(trailing_var_arg = true, value_name = "WORDS")]
    pub words: Vec<String>,
}

/// Long options that take a value.
const VALUE_LONGS: &[&str] = &["text", "source_lang", "target_lang", "url", "config"];

/// Long options that are switches; they accept an optional `=true`/`=false`.
const SWITCH_LONGS: &[&str] = &["version", "quiet", "no-clipboard", "help"];

/// Short options that take a value.
const VALUE_SHORTS: &[&str] = &["s", "t"];

/// Rewrites single-dash long options (`-text foo`, `-url=...`) to the
/// double-dash form clap expects.
///
/// The first element is the program name and is kept as is. Rewriting stops at
/// `--` or at the first positional word, so words that merely look like flags
/// stay part of the text.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = iter.next().into_iter().collect();
    let mut expects_value = false;

    while let Some(arg) = iter.next() {
        if expects_value {
            normalized.push(arg);
            expects_value = false;
            continue;
        }

        let Some(raw) = arg.to_str() else {
            normalized.push(arg);
            normalized.extend(iter.by_ref());
            break;
        };

        if raw == "--" || raw == "-" || !raw.starts_with('-') {
            normalized.push(arg);
            normalized.extend(iter.by_ref());
            break;
        }

        if let Some(long) = raw.strip_prefix("--") {
            let (name, inline_value) = split_inline_value(long);
            expects_value = VALUE_LONGS.contains(&name) && !inline_value;
            normalized.push(arg);
            continue;
        }

        let body = &raw[1..];
        let (name, inline_value) = split_inline_value(body);
        if VALUE_LONGS.contains(&name) || SWITCH_LONGS.contains(&name) {
            expects_value = VALUE_LONGS.contains(&name) && !inline_value;
            normalized.push(format!("-{raw}").into());
        } else {
            expects_value = VALUE_SHORTS.contains(&body);
            normalized.push(arg);
        }
    }

    normalized
}

fn split_inline_value(flag: &str) -> (&str, bool) {
    flag.split_once('=')
        .map_or((flag, false), |(name, _)| (name, true))
}
