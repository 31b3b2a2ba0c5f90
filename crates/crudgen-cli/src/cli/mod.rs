//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use crudgen_core::domain::ViewMode;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudgen",
    bin_name = "crudgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "CRUD panel scaffolding for Wicket domain models",
    long_about = "crudgen reads a model file describing your domain types and \
                  generates edit, list, view, model and factory sources plus \
                  localization properties for each of them.",
    after_help = "EXAMPLES:\n\
        \x20 crudgen init --local\n\
        \x20 crudgen generate --models model.toml --output src/main/java --package com.example.web\n\
        \x20 crudgen inspect Person --mode view\n\
        \x20 crudgen completions bash > /usr/share/bash-completion/completions/crudgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate panels for the domain types in a model file.
    #[command(
        visible_alias = "gen",
        about = "Generate CRUD panels",
        after_help = "EXAMPLES:\n\
            \x20 crudgen generate\n\
            \x20 crudgen generate --type Person --type Company\n\
            \x20 crudgen generate --factory com.example.web.Factories --dry-run"
    )]
    Generate(GenerateArgs),

    /// Show how the fields of one domain type resolve.
    #[command(
        about = "Show resolved fields of a domain type",
        after_help = "EXAMPLES:\n\
            \x20 crudgen inspect Person\n\
            \x20 crudgen inspect Person --mode view --all\n\
            \x20 crudgen inspect Person --format json"
    )]
    Inspect(InspectArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 crudgen list\n\
            \x20 crudgen list --templates-dir ./templates --format csv"
    )]
    List(ListArgs),

    /// Write a configuration file and an example model.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 crudgen init           # global config\n\
            \x20 crudgen init --local   # .crudgen.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudgen completions bash > ~/.local/share/bash-completion/completions/crudgen\n\
            \x20 crudgen completions zsh  > ~/.zfunc/_crudgen\n\
            \x20 crudgen completions fish > ~/.config/fish/completions/crudgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crudgen config get generator.base_package\n\
            \x20 crudgen config list\n\
            \x20 crudgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Model file describing the domain types.
    #[arg(short = 'm', long = "models", value_name = "FILE")]
    pub models: Option<PathBuf>,

    /// Root directory for generated files.
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Base package; each type's files go to `<package>.<type>`.
    #[arg(short = 'p', long = "package", value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Name of the merged properties file (without extension).
    #[arg(long = "app-name", value_name = "NAME")]
    pub application_name: Option<String>,

    /// Template set to render with.
    #[arg(long = "template-set", value_name = "SET")]
    pub template_set: Option<String>,

    /// Directory of `<set>/<Artifact>.tmpl` files overriding the built-ins.
    #[arg(long = "templates-dir", value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Fully qualified factory class used instead of the generated ones.
    #[arg(long = "factory", value_name = "CLASS")]
    pub factory: Option<String>,

    /// Only generate these types (repeatable).
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Render everything in memory and list the files that would be written.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── inspect ───────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Simple name of the domain type.
    #[arg(value_name = "TYPE")]
    pub type_name: String,

    /// Model file describing the domain types.
    #[arg(short = 'm', long = "models", value_name = "FILE")]
    pub models: Option<PathBuf>,

    /// Which field list to show.
    #[arg(long = "mode", value_enum, default_value = "edit")]
    pub mode: ModeArg,

    /// Ignore skip directives.
    #[arg(long = "all")]
    pub all: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Edit,
    View,
}

impl From<ModeArg> for ViewMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Edit => ViewMode::Edit,
            ModeArg::View => ViewMode::View,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Directory of templates to include alongside the built-ins.
    #[arg(long = "templates-dir", value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ListFormat,
}

/// Output format for tabular commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(long = "global", conflicts_with = "local", help = "Create global configuration")]
    pub global: bool,

    /// Write to `.crudgen.toml` in the current directory.
    #[arg(long = "local", help = "Create local configuration in current directory")]
    pub local: bool,

    /// Do not write the example model file.
    #[arg(long = "no-model")]
    pub no_model: bool,

    /// Overwrite existing files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.base_package`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the global configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
