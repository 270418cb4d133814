//! Prefix tree lookup tool - Main entrypoint.
//!
//! Loads a word list into a prefix tree and answers completion and membership
//! queries against it.

use std::process;
use std::sync::Arc;

use clap::Parser;
use prefix_tree::app::{self, Args};
use prefix_tree::config::{self, ConfigLoader, LogConfig};
use prefix_tree::error::{
    report_error, set_error_reporter, AppError, AppResult, ErrorContext, TracingErrorReporter,
};
use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// that query results on stdout stay machine readable.
fn init_logging(log: &LogConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_file(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| AppError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> AppResult<()> {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX).load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;

    set_error_reporter(Arc::new(TracingErrorReporter));

    let app_config = match loaded {
        Ok(app_config) => app_config,
        Err(e) => {
            let mut context = ErrorContext::new(e.into(), "config");
            if let Some(path) = &args.config {
                context = context.with_details(format!("config file: {}", path.display()));
            }
            report_error(context);
            process::exit(1);
        }
    };

    let words = args
        .words
        .clone()
        .or_else(|| app_config.lookup.words_file.clone());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Err(e) = app::run(args, &app_config, stdin.lock(), &mut stdout.lock()) {
        let mut context = ErrorContext::new(e, "main");
        if let Some(path) = words {
            context = context.with_details(format!("word list: {}", path.display()));
        }
        report_error(context);
        process::exit(1);
    }

    Ok(())
}
