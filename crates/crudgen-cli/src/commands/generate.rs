//! Implementation of the `crudgen generate` command.
//!
//! Responsibility: merge CLI arguments over the configuration, load the
//! model and templates, drive [`GeneratorService`] once per domain type and
//! display the result. No business logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crudgen_adapters::{LiquidRenderer, LocalFilesystem, MemoryFilesystem, TemplateLibrary};
use crudgen_core::{
    application::{
        FactoryRef, GenerationReport, GeneratorService, GeneratorSettings, ports::Filesystem,
        ports::TypeIntrospector, services::generator_service::relative_to,
    },
    domain::{DomainType, MergedProperties},
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    commands::{model_introspector, models_path},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Machine-readable summary printed with `--output-format json`.
#[derive(Debug, Serialize)]
struct GenerateSummary<'a> {
    output_root: &'a Path,
    dry_run: bool,
    merged_properties: &'a Path,
    reports: &'a [GenerationReport],
}

/// Execute the `crudgen generate` command.
///
/// Dispatch sequence:
/// 1. Resolve settings (flags over config)
/// 2. Load and filter the domain types
/// 3. Assemble the template library and check the chosen set is complete
/// 4. Render into memory (`--dry-run`) or onto disk
/// 5. Report what was written
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let settings = resolve_settings(&args, &config);
    debug!(
        output_root = %settings.output_root.display(),
        base_package = %settings.base_package,
        template_set = %settings.template_set,
        "Settings resolved"
    );

    let models = models_path(args.models.clone(), &config.generator.models);
    let types = model_introspector(&models)?.domain_types()?;
    let types = select_types(types, &args.types, &models)?;

    let templates_dir = args
        .templates_dir
        .as_deref()
        .or(config.templates.directory.as_deref());
    let library = load_library(templates_dir, &settings.template_set)?;

    let factory = args
        .factory
        .as_deref()
        .or(config.generator.factory.as_deref())
        .map(factory_ref)
        .transpose()?;

    let renderer = Box::new(LiquidRenderer::new(library)?);
    let filesystem: Box<dyn Filesystem> = if args.dry_run {
        Box::new(MemoryFilesystem::new())
    } else {
        Box::new(LocalFilesystem::new())
    };
    let service = GeneratorService::new(renderer, filesystem, settings)?;

    let json = output.format() == OutputFormat::Json;
    if !args.dry_run && !json {
        output.header(&format!(
            "Generating {} type(s) into {}...",
            types.len(),
            service.settings().output_root.display()
        ))?;
    }
    info!(types = types.len(), "Generation started");

    let (reports, merged_path) = generate(&service, &types, factory.as_ref(), &output)?;

    info!(types = reports.len(), "Generation completed");

    if json {
        output.json(&GenerateSummary {
            output_root: &service.settings().output_root,
            dry_run: args.dry_run,
            merged_properties: &merged_path,
            reports: &reports,
        })?;
        return Ok(());
    }

    let root = &service.settings().output_root;
    if args.dry_run {
        show_dry_run(&reports, &merged_path, root, &output)?;
    } else {
        show_reports(&reports, &merged_path, root, &output)?;
    }
    Ok(())
}

// ── Settings ──────────────────────────────────────────────────────────────────

fn resolve_settings(args: &GenerateArgs, config: &AppConfig) -> GeneratorSettings {
    let generator = &config.generator;
    GeneratorSettings::new(
        args.output
            .clone()
            .unwrap_or_else(|| generator.output_root.clone()),
        args.package
            .clone()
            .unwrap_or_else(|| generator.base_package.clone()),
    )
    .with_application_name(
        args.application_name
            .clone()
            .unwrap_or_else(|| generator.application_name.clone()),
    )
    .with_template_set(
        args.template_set
            .clone()
            .unwrap_or_else(|| config.templates.set.clone()),
    )
}

/// Keep the types named in `wanted`, in model order. An empty filter keeps all.
fn select_types(
    types: Vec<DomainType>,
    wanted: &[String],
    models: &Path,
) -> CliResult<Vec<DomainType>> {
    let unknown: Vec<String> = wanted
        .iter()
        .filter(|name| !types.iter().any(|t| t.name() == name.as_str()))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(CliError::UnknownTypes {
            names: unknown,
            available: types.iter().map(|t| t.name().to_string()).collect(),
        });
    }

    let selected: Vec<DomainType> = types
        .into_iter()
        .filter(|t| wanted.is_empty() || wanted.iter().any(|w| w == t.name()))
        .collect();
    if selected.is_empty() {
        return Err(CliError::NoDomainTypes {
            path: models.to_path_buf(),
        });
    }
    Ok(selected)
}

/// The factory ends up in generated `import` lines, so it must be a dotted
/// Java class name.
fn factory_ref(name: &str) -> CliResult<FactoryRef> {
    if !name.split('.').all(is_java_identifier) {
        return Err(CliError::InvalidInput {
            message: format!("factory '{name}' is not a fully qualified class name"),
            source: None,
        });
    }
    Ok(FactoryRef::parse(name))
}

fn is_java_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn load_library(dir: Option<&Path>, set: &str) -> CliResult<TemplateLibrary> {
    let library = match dir {
        Some(dir) => TemplateLibrary::builtin_with_overrides(dir)?,
        None => TemplateLibrary::builtin(),
    };

    let missing = library.missing(set);
    if !missing.is_empty() {
        return Err(CliError::IncompleteTemplateSet {
            set: set.to_string(),
            missing,
        });
    }
    debug!(templates = library.len(), set, "Template library ready");
    Ok(library)
}

// ── Generation ────────────────────────────────────────────────────────────────

fn generate(
    service: &GeneratorService,
    types: &[DomainType],
    factory: Option<&FactoryRef>,
    output: &OutputManager,
) -> CliResult<(Vec<GenerationReport>, PathBuf)> {
    let bar = output.progress(types.len() as u64);
    let mut merged = MergedProperties::new();
    let mut reports = Vec::with_capacity(types.len());

    for domain in types {
        bar.set_message(domain.name().to_string());
        let report = service.create_components(domain, factory, &mut merged);
        bar.inc(1);
        match report {
            Ok(report) => reports.push(report),
            Err(e) => {
                bar.abandon();
                return Err(e.into());
            }
        }
    }
    bar.finish_and_clear();

    let merged_path = service.write_merged_properties(&merged)?;
    Ok((reports, merged_path))
}

// ── Display ───────────────────────────────────────────────────────────────────

fn show_reports(
    reports: &[GenerationReport],
    merged_path: &Path,
    root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    for report in reports {
        let existing = report.artifacts.len() - report.created_count();
        output.success(&format!(
            "{}: {} file(s) created, {} overwritten",
            report.domain_type,
            report.created_count(),
            existing
        ))?;
        for artifact in &report.artifacts {
            output.detail(&relative_to(&artifact.path, root).display().to_string())?;
        }
    }
    output.success(&format!(
        "Merged properties written to {}",
        merged_path.display()
    ))?;
    Ok(())
}

fn show_dry_run(
    reports: &[GenerationReport],
    merged_path: &Path,
    root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let disk = LocalFilesystem::new();
    let marker = |path: &Path| if disk.exists(path) { "exists" } else { "new" };

    output.info(&format!("Dry run: nothing written under {}", root.display()))?;
    for report in reports {
        output.header(&report.domain_type)?;
        for artifact in &report.artifacts {
            output.detail(&format!(
                "{} ({}, {} bytes)",
                relative_to(&artifact.path, root).display(),
                marker(&artifact.path),
                artifact.bytes
            ))?;
        }
    }
    output.detail(&format!(
        "{} ({})",
        relative_to(merged_path, root).display(),
        marker(merged_path)
    ))?;
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
