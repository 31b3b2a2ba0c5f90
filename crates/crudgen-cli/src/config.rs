//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CRUDGEN__<SECTION>__<KEY>`,
//!    e.g. `CRUDGEN__GENERATOR__BASE_PACKAGE`
//! 3. `--config FILE`, or else `./.crudgen.toml` over the global config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crudgen_core::application::{DEFAULT_APPLICATION_NAME, DEFAULT_TEMPLATE_SET};

/// File name of the per-project configuration.
pub const LOCAL_CONFIG_FILE: &str = ".crudgen.toml";

const ENV_PREFIX: &str = "CRUDGEN";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub templates: TemplateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Root directory for generated files.
    pub output_root: PathBuf,
    /// Base package; may be empty.
    pub base_package: String,
    /// Name of the merged properties file.
    pub application_name: String,
    /// Model file read by `generate` and `inspect`.
    pub models: PathBuf,
    /// Fully qualified factory class, if one is shared by all types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Template set name.
    pub set: String,
    /// Directory of templates overriding the built-ins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig {
                output_root: PathBuf::from("generated"),
                base_package: String::new(),
                application_name: DEFAULT_APPLICATION_NAME.into(),
                models: PathBuf::from("crudgen-model.toml"),
                factory: None,
            },
            templates: TemplateConfig {
                set: DEFAULT_TEMPLATE_SET.into(),
                directory: None,
            },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then files, then the environment.
    ///
    /// An explicit `config_file` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let files = match config_file {
            Some(path) => vec![(path.clone(), true)],
            None => vec![
                (Self::config_path(), false),
                (PathBuf::from(LOCAL_CONFIG_FILE), false),
            ],
        };
        Self::load_from(&files)
    }

    fn load_from(files: &[(PathBuf, bool)]) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let mut builder = config::Config::builder().add_source(defaults);
        for (path, required) in files {
            builder = builder.add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(*required),
            );
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.crudgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "crudgen", "crudgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Value of a dotted key, as printed by `crudgen config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let path = |p: &Path| p.display().to_string();
        let value = match key {
            "generator.output_root" => path(&self.generator.output_root),
            "generator.base_package" => self.generator.base_package.clone(),
            "generator.application_name" => self.generator.application_name.clone(),
            "generator.models" => path(&self.generator.models),
            "generator.factory" => self.generator.factory.clone().unwrap_or_default(),
            "templates.set" => self.templates.set.clone(),
            "templates.directory" => self
                .templates
                .directory
                .as_deref()
                .map(path)
                .unwrap_or_default(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }
}
