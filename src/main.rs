//! CLI entry point for treesum

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use treesum::config::{DEFAULT_CAPACITY, DEFAULT_REQUIRED, DEFAULT_THRESHOLD};
use treesum::{
    OutputConfig, QueryConfig, Report, TranscriptError, TreeFormatter, TreeNode, build_tree,
    print_report, print_report_json, read_transcript,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treesum")]
#[command(about = "Rebuild a directory tree from a shell transcript and find what to delete")]
#[command(version)]
struct Args {
    /// Transcript file to read ("-" or omitted for stdin)
    transcript: Option<PathBuf>,

    /// Directories at or below this size are summed
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_THRESHOLD)]
    threshold: u64,

    /// Total capacity of the device
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_CAPACITY)]
    capacity: u64,

    /// Free space required after deletion
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_REQUIRED)]
    required: u64,

    /// Print the reconstructed tree (embedded in the output with --json)
    #[arg(long = "tree")]
    tree: bool,

    /// Show human-readable sizes (46.1M instead of 48381165)
    #[arg(short = 's', long = "size")]
    human: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log tree construction to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let default = if verbose {
        "treesum=debug"
    } else {
        "treesum=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("treesum: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), TranscriptError> {
    let text = read_transcript(args.transcript.as_deref())?;
    let root = build_tree(&text)?;

    let config = QueryConfig {
        threshold: args.threshold,
        capacity: args.capacity,
        required: args.required,
    };
    let report = Report::new(&root, &config);
    info!(
        root_size = report.root_size,
        small_total = report.small_directories_total,
        space_to_free = report.space_to_free,
        "queries complete"
    );

    if args.json {
        let report = if args.tree {
            report.with_tree(&root)
        } else {
            report
        };
        return print_report_json(&report);
    }

    let use_color = should_use_color(args.color);
    if args.tree {
        let formatter = TreeFormatter::new(OutputConfig {
            use_color,
            human_sizes: args.human,
        });
        formatter.print(&TreeNode::from(&root))?;
        println!();
    }
    print_report(&report, use_color, args.human)?;
    Ok(())
}
