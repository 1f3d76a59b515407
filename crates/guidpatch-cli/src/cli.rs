//! CLI argument definitions for the guid patcher.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "guidpatch",
    version,
    about = "Repair identifier references in an exported project tree",
    long_about = "Repair cross-references after a binary asset pipeline export.\n\n\
                  Exported scenes, prefabs and materials still embed the original\n\
                  identifiers from the binary source; this tool rebuilds the\n\
                  old-to-new identifier tables against the project catalog and\n\
                  rewrites every stale reference in place."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rebuild the remap tables and rewrite references under an export root.
    Patch(PatchArgs),

    /// List the file extensions and reference patterns the patcher handles.
    Patterns,
}

#[derive(Parser)]
pub struct PatchArgs {
    /// Exported project root (falls back to the remembered last root).
    #[arg(value_name = "EXPORT_ROOT")]
    pub export_root: Option<PathBuf>,

    /// Project manifest describing the host catalog (scripts and shaders).
    #[arg(long = "manifest", value_name = "FILE")]
    pub manifest: PathBuf,

    /// Do not remember this export root for later runs.
    #[arg(long = "no-remember")]
    pub no_remember: bool,

    /// Write the remap tables and counters as a JSON run report.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Preference file override (default: ~/.config/guidpatch/prefs.json).
    #[arg(long = "prefs-file", value_name = "PATH")]
    pub prefs_file: Option<PathBuf>,

    /// Hide the progress spinner.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
