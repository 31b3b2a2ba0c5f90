//! `crudgen init`: write a default configuration file and an example model.

use std::path::{Path, PathBuf};

use tracing::info;

use crudgen_adapters::EXAMPLE_MODEL;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Outcome of writing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Written {
    Created,
    Replaced,
    Kept,
}

pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = if args.local && !args.global {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    };

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    match write_file(&config_path, &toml, args.force)? {
        Written::Kept => output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?,
        Written::Created | Written::Replaced => output.success(&format!(
            "Configuration created at {}",
            config_path.display(),
        ))?,
    }

    if args.no_model {
        return Ok(());
    }

    let model_path = &config.generator.models;
    match write_file(model_path, EXAMPLE_MODEL, false)? {
        Written::Kept => output.info(&format!(
            "Model file {} already exists; left unchanged",
            model_path.display()
        ))?,
        _ => {
            output.success(&format!("Example model written to {}", model_path.display()))?;
            output.print("")?;
            output.print("Next steps:")?;
            output.print(&format!("  crudgen inspect Person --models {}", model_path.display()))?;
            output.print("  crudgen generate --package com.example.web")?;
        }
    }

    Ok(())
}

/// Write `content` to `path`, creating parents. Existing files are kept
/// unless `force` is set.
fn write_file(path: &Path, content: &str, force: bool) -> CliResult<Written> {
    let existed = path.exists();
    if existed && !force {
        return Ok(Written::Kept);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(path, content).map_err(|e| CliError::IoError {
        message: format!("Failed to write '{}'", path.display()),
        source: e,
    })?;
    info!(path = %path.display(), replaced = existed, "File written");

    Ok(if existed {
        Written::Replaced
    } else {
        Written::Created
    })
}
