//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `crudgen -v generate`
//! and `crudgen generate -v` mean the same thing.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v, -vv, -vvv)",
        long_help = "Increase log verbosity. Logs go to stderr.
    (none)  warnings and errors
    -v      each generated file
    -vv     resolution and template diagnostics
    -vvv    everything"
    )]
    pub verbose: u8,

    /// Only errors are printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Plain output without ANSI colours; also set by `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read configuration from FILE instead of the default locations.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        env = "CRUDGEN_CONFIG",
        help = "Use this configuration file"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `output.format` from the config, else human on a terminal and plain otherwise.
    #[default]
    Auto,
    /// Colours, symbols and progress bars.
    Human,
    /// Same lines as human, no colours or progress.
    Plain,
    /// Machine-readable reports on stdout; logs as JSON lines on stderr.
    Json,
}
