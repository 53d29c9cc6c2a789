//! Translates stdin line by line and writes fuzzy files on exit.
//!
//! Settings are read from `.fuzzy-translator.json` in the working directory.

use std::io::{
    BufRead,
    Write,
};
use std::process::ExitCode;

use fuzzy_translator::Translator;
use fuzzy_translator::config::load_settings;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = match load_settings(std::path::Path::new(".")) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut translator = match Translator::from_settings(&settings) {
        Ok(translator) => translator,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    for line in stdin.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::error!("Failed to read stdin: {err}");
                break;
            }
        };
        if let Err(err) = writeln!(stdout, "{}", translator.translate_default(&line)) {
            tracing::error!("Failed to write stdout: {err}");
            break;
        }
    }

    let report = translator.flush_misses();
    if report.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
