use clap::Parser;

use deeplx_cli::cli::commands::translate;
use deeplx_cli::cli::{Args, exit_code_for, normalize_args};
use deeplx_cli::config::ResolveOptions;
use deeplx_cli::output::{self, OutputConfig};
use deeplx_cli::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    let args = match Args::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            let code = if err.use_stderr() {
                exitcode::USAGE
            } else {
                exitcode::OK
            };
            std::process::exit(code);
        }
    };

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    if args.version {
        println!("deeplx-cli version {VERSION}");
        return;
    }

    let options = translate::TranslateOptions {
        text: args.text,
        words: args.words,
        overrides: ResolveOptions {
            url: args.url,
            source_lang: args.source_lang,
            source_lang_short: args.source_lang_short,
            target_lang: args.target_lang,
            target_lang_short: args.target_lang_short,
        },
        config_path: args.config,
        no_clipboard: args.no_clipboard,
    };

    if let Err(err) = translate::run_translate(options).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code_for(&err));
    }
}
