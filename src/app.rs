//! Command line surface of the `prefix_tree` binary.
//!
//! Argument parsing and command dispatch live here so they can be driven with
//! in-memory input and output; `main` only wires them to the process.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::AppConfig;
use crate::data_structures::PrefixTree;
use crate::error::{AppError, AppResult};
use crate::loader;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "prefix_tree", version, author, about)]
pub struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser, global = true)]
    pub config: Option<PathBuf>,

    /// Word list to load, one word per line (overrides `lookup.words_file`,
    /// standard input is read when neither is set)
    #[clap(short, long, value_parser, global = true)]
    pub words: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long, global = true)]
    pub json: bool,

    /// Command to execute
    #[clap(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List every word starting with a prefix
    Complete {
        /// Prefix to complete
        prefix: String,
    },

    /// Check whether a word is in the list
    Contains {
        /// Word to look up
        word: String,
    },

    /// List every word in the tree
    Strings,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Builds the tree from `words`, the configured word list, or `stdin`, in
/// that order.
pub fn load_tree<R: BufRead>(
    words: Option<&Path>,
    config: &AppConfig,
    stdin: R,
) -> AppResult<PrefixTree> {
    match words.or(config.lookup.words_file.as_deref()) {
        Some(path) => loader::load_words_file(path),
        None => {
            info!("No word list configured, reading words from standard input");
            loader::read_words(stdin)
        }
    }
}

fn write_strings<W: Write>(out: &mut W, strings: &[String], json: bool) -> AppResult<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(strings)?)?;
    } else {
        for string in strings {
            writeln!(out, "{string}")?;
        }
    }
    Ok(())
}

/// Runs the parsed command, reading the word list from `stdin` when no file
/// is given and writing results to `out`.
pub fn run<R: BufRead, W: Write>(
    args: Args,
    config: &AppConfig,
    stdin: R,
    out: &mut W,
) -> AppResult<()> {
    let words = args.words.as_deref();

    match args.command {
        Command::Complete { prefix } => {
            let tree = load_tree(words, config, stdin)?;
            let (completions, stats) = tree.complete_with_stats(&prefix);
            info!(
                prefix = %prefix,
                matches = completions.len(),
                lookups = stats.lookups,
                nodes_visited = stats.nodes_visited,
                "Completed prefix"
            );
            write_strings(out, &config.lookup.limit(completions), args.json)
        }
        Command::Contains { word } => {
            let found = load_tree(words, config, stdin)?.contains(&word);
            if args.json {
                writeln!(out, "{}", serde_json::to_string(&found)?)?;
            } else {
                writeln!(out, "{found}")?;
            }
            Ok(())
        }
        Command::Strings => {
            let tree = load_tree(words, config, stdin)?;
            write_strings(out, &config.lookup.limit(tree.strings()), args.json)
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&AppConfig::default())
                .map_err(|e| AppError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
