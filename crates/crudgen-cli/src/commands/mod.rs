//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments plus [`AppConfig`](crate::config::AppConfig)
//! into calls on the core services and report results through the
//! [`OutputManager`](crate::output::OutputManager). No business logic lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod inspect;
pub mod list;

use std::path::{Path, PathBuf};

use crudgen_adapters::TomlModelIntrospector;

use crate::error::{CliError, CliResult};

/// Introspector for `path`, failing early when the file is absent.
pub(crate) fn model_introspector(path: &Path) -> CliResult<TomlModelIntrospector> {
    if !path.is_file() {
        return Err(CliError::ModelFileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(TomlModelIntrospector::from_path(path))
}

/// CLI value if given, else the configured one.
pub(crate) fn models_path(arg: Option<PathBuf>, configured: &Path) -> PathBuf {
    arg.unwrap_or_else(|| configured.to_path_buf())
}

/// Quote a CSV cell when it contains a separator, quote or newline.
pub(crate) fn csv_cell(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
