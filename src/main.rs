//! CLI entry point for lstree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use lstree::{
    ConsoleFormatter, OutputConfig, RecursionLimit, TreeError, TreeWalker, WalkSummary,
    WalkerConfig, logger,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Color only when stdout is a terminal
    Auto,
    /// Always use colors
    #[default]
    Always,
    /// Never use colors
    Never,
}

fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

#[derive(Parser, Debug)]
#[command(name = "lstree")]
#[command(about = "List a directory tree, sorted by name and colored by entry type")]
#[command(version)]
struct Args {
    /// Directory to inspect (defaults to the current directory)
    #[arg(short = 'p', long = "path")]
    path: Option<PathBuf>,

    /// Maximum number of directory descents (negative = unlimited)
    #[arg(
        short = 'm',
        long = "max-recursion",
        value_name = "N",
        allow_negative_numbers = true
    )]
    max_recursion: Option<i64>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "always")]
    color: ColorMode,

    /// Log traversal details to stderr (repeat for more)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    if logger::init(args.verbose).is_err() {
        eprintln!("lstree: warning: logger already initialized");
    }

    match run(&args) {
        Ok(summary) => log::info!(
            "{} directories, {} files, {} unreadable",
            summary.directories,
            summary.files,
            summary.errors
        ),
        Err(e) => {
            eprintln!("lstree: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> lstree::Result<WalkSummary> {
    let root = match &args.path {
        Some(path) => path.clone(),
        None => std::env::current_dir().map_err(TreeError::CurrentDir)?,
    };

    let walker_config = WalkerConfig {
        max_recursion: args
            .max_recursion
            .map(RecursionLimit::from_cli)
            .unwrap_or_default(),
    };
    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
    };

    let walker = TreeWalker::new(walker_config);
    let mut formatter = ConsoleFormatter::stdio(output_config);

    formatter.write_banner(&root)?;
    let summary = walker.walk(&root, &mut formatter)?;
    formatter.flush()?;
    Ok(summary)
}
