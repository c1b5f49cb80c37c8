// SPDX-License-Identifier: MPL-2.0
use iced_enhancer::app::{self, config, paths, Flags};
use iced_enhancer::infrastructure::{GeminiClient, GeminiConfig};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
IcedEnhancer - AI photo enhancer with before/after comparison

USAGE:
  iced_enhancer [OPTIONS] [IMAGE]

ARGS:
  <IMAGE>              Image file or data: URL to open at startup

OPTIONS:
  --lang <LOCALE>      Interface language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  GEMINI_API_KEY       API key for the enhancement service (required)
  ICED_ENHANCER_CONFIG_DIR  Same as --config-dir
  RUST_LOG             Log filter (default: iced_enhancer=info)
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("iced_enhancer=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let lang: Option<String> = match args.opt_value_from_str("--lang") {
        Ok(lang) => lang,
        Err(err) => return usage_error(&err),
    };
    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => return usage_error(&err),
    };
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_override(config_dir);
    let (config, config_warning) = config::load();

    let gemini = match GeminiConfig::from_env(&config.enhancement) {
        Ok(gemini) => gemini,
        Err(err) => {
            tracing::error!(%err, "cannot start without an API key");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let client = match GeminiClient::new(gemini) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(%err, "failed to build HTTP client");
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags {
        lang,
        file_path,
        config,
        config_warning,
    };

    match app::run(flags, Arc::new(client)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn usage_error(err: &pico_args::Error) -> ExitCode {
    eprintln!("{err}\n\n{HELP}");
    ExitCode::FAILURE
}
