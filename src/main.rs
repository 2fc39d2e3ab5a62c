// Chunk: docs/chunks/cli - Command line front end
//!
//! lite-highlight: inspect the highlight cache and settings from the shell.
//!
//! - `lite-highlight replay <LOG> --query 1:20` replays a recorded event log
//!   and prints what the renderer would see for buffer 1, line 20.
//! - `lite-highlight settings --filetype rust` prints resolved settings.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lite_highlight::settings::{self, FiletypeRegistry};
use lite_highlight::store::HighlightStore;
use lite_highlight::tokens::BufferId;
use serde_json::json;
use tracing::info;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "lite-highlight")]
#[command(about = "Inspect the lite-highlight token cache and settings")]
struct Args {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON-lines event log and report the cache contents
    Replay {
        /// Event log to replay
        #[arg(value_name = "LOG")]
        log: PathBuf,

        /// Print the tokens stored for a line
        #[arg(short, long = "query", value_name = "BUFFER:LINE")]
        queries: Vec<LineQuery>,
    },

    /// Resolve a settings file and print the result
    Settings {
        /// Settings file (defaults to the user settings file)
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Print the settings for this filetype
        #[arg(long, conflicts_with = "path")]
        filetype: Option<String>,

        /// Print the settings that apply to this file
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,
    },
}

/// A `BUFFER:LINE` pair.
#[derive(Debug, Clone, Copy)]
struct LineQuery {
    buffer: BufferId,
    line: usize,
}

impl FromStr for LineQuery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (buffer, line) = s
            .split_once(':')
            .ok_or_else(|| format!("expected BUFFER:LINE, got '{s}'"))?;
        let buffer = buffer
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("invalid buffer id '{buffer}': {e}"))?;
        let line = line
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid line '{line}': {e}"))?;
        Ok(LineQuery {
            buffer: BufferId(buffer),
            line,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_tracing(args.verbose);

    match args.command {
        Command::Replay { log, queries } => run_replay(log, &queries),
        Command::Settings {
            file,
            filetype,
            path,
        } => run_settings(file, filetype, path),
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("LITE_HIGHLIGHT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            if verbose {
                EnvFilter::new("debug")
            } else {
                EnvFilter::new("warn")
            }
        });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_replay(log: PathBuf, queries: &[LineQuery]) -> Result<()> {
    let file = File::open(&log).with_context(|| format!("opening {}", log.display()))?;

    let mut store = HighlightStore::new();
    let summary = lite_highlight::replay(BufReader::new(file), &mut store)
        .with_context(|| format!("replaying {}", log.display()))?;
    info!(events = summary.events(), "replay finished");

    let stats = store.stats();
    println!(
        "{}",
        json!({
            "events": {
                "batches": summary.batches,
                "edits": summary.edits,
                "closes": summary.closes,
            },
            "buffers": stats.buffers,
            "lines": stats.lines,
            "tokens": stats.tokens,
        })
    );

    for query in queries {
        println!(
            "{}",
            json!({
                "buffer": query.buffer,
                "line": query.line,
                "tokens": store.lookup(query.buffer, query.line),
            })
        );
    }

    Ok(())
}

fn run_settings(
    file: Option<PathBuf>,
    filetype: Option<String>,
    path: Option<PathBuf>,
) -> Result<()> {
    let resolved = match file {
        Some(file) => settings::load(&file)
            .with_context(|| format!("loading settings from {}", file.display()))?,
        None => match settings::default_settings_path() {
            Some(default_path) => {
                info!(path = %default_path.display(), "using user settings file");
                settings::load_or_default(&default_path).with_context(|| {
                    format!("loading settings from {}", default_path.display())
                })?
            }
            None => {
                info!("no config directory, using built-in settings");
                settings::ResolvedSettings::default()
            }
        },
    };

    let selected = match (filetype, path) {
        (Some(filetype), _) => resolved.for_filetype(&filetype),
        (None, Some(path)) => resolved.for_path(&FiletypeRegistry::new(), &path),
        (None, None) => &resolved.default,
    };

    println!("{}", serde_json::to_string_pretty(selected)?);
    Ok(())
}
