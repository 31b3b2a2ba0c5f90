//! Generator Service - main application orchestrator.
//!
//! For one domain type this service writes, in order:
//! 1. `common.properties`
//! 2. the edit panel (source, markup, per-type properties)
//! 3. the list panel and its actions panel (source, markup)
//! 4. the view panel (source, markup)
//! 5. model and factory sources
//!
//! Each artifact first gets an empty placeholder (parents created, existing
//! files left alone), then its context is built, its template evaluated and
//! the placeholder overwritten with the result. The per-type properties are
//! also appended to a caller-owned [`MergedProperties`] accumulator, flushed
//! by [`GeneratorService::write_merged_properties`].

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
        services::contexts::ContextBuilder,
    },
    domain::{
        ArtifactKind, DomainType, GENERATION_ORDER, MergedProperties, TemplateId, ViewMode,
        artifact_path, common_properties, select_fields, type_properties,
    },
    error::{CrudgenError, CrudgenResult},
};

/// Template set used when none is configured.
pub const DEFAULT_TEMPLATE_SET: &str = "bootstrap-horizontal";

/// Application name used for the merged properties file when none is configured.
pub const DEFAULT_APPLICATION_NAME: &str = "Application";

/// Where and how artifacts are generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub output_root: PathBuf,
    /// Package generated classes live under; each type gets `base.typename`.
    pub base_package: String,
    /// Simple name of the web application; names the merged properties file.
    pub application_name: String,
    pub template_set: String,
}

impl GeneratorSettings {
    pub fn new(output_root: impl Into<PathBuf>, base_package: impl Into<String>) -> Self {
        Self {
            output_root: output_root.into(),
            base_package: base_package.into(),
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
            template_set: DEFAULT_TEMPLATE_SET.to_string(),
        }
    }

    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = name.into();
        self
    }

    pub fn with_template_set(mut self, set: impl Into<String>) -> Self {
        self.template_set = set.into();
        self
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.output_root.as_os_str().is_empty() {
            return Err(ApplicationError::Configuration {
                message: "output root cannot be empty".into(),
            });
        }
        if self.application_name.trim().is_empty() {
            return Err(ApplicationError::Configuration {
                message: "application name cannot be empty".into(),
            });
        }
        if self.template_set.trim().is_empty() {
            return Err(ApplicationError::Configuration {
                message: "template set cannot be empty".into(),
            });
        }
        Ok(())
    }
}

/// Explicit factory class used instead of the generated `{Type}Factory`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryRef {
    pub simple_name: String,
    pub qualified_name: String,
}

impl FactoryRef {
    /// Build from a fully qualified class name.
    pub fn parse(qualified_name: &str) -> Self {
        let simple = qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(qualified_name);
        Self {
            simple_name: simple.to_string(),
            qualified_name: qualified_name.to_string(),
        }
    }
}

/// One file written by a generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// `false` when the placeholder already existed.
    pub created: bool,
    pub bytes: usize,
}

/// Outcome of [`GeneratorService::create_components`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub domain_type: String,
    pub artifacts: Vec<GeneratedArtifact>,
}

impl GenerationReport {
    pub fn created_count(&self) -> usize {
        self.artifacts.iter().filter(|a| a.created).count()
    }
}

/// Main generator service.
///
/// State is read-only after construction; callers own the merged-properties
/// accumulator.
pub struct GeneratorService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    settings: GeneratorSettings,
}

impl GeneratorService {
    /// Create a generator for one output root and base package.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the output root, application name
    /// or template set is empty. No file is touched in that case.
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        settings: GeneratorSettings,
    ) -> CrudgenResult<Self> {
        settings.validate()?;
        Ok(Self {
            renderer,
            filesystem,
            settings,
        })
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Output paths a call to `create_components` would write, in order.
    pub fn plan(&self, domain: &DomainType) -> Vec<(ArtifactKind, PathBuf)> {
        GENERATION_ORDER
            .iter()
            .map(|&kind| (kind, artifact_path(&self.settings.output_root, kind, domain.name())))
            .collect()
    }

    /// Path of the merged properties file.
    pub fn merged_properties_path(&self) -> PathBuf {
        artifact_path(
            &self.settings.output_root,
            ArtifactKind::MergedProperties,
            &self.settings.application_name,
        )
    }

    /// Generate every artifact for `domain`.
    ///
    /// The first I/O or template failure aborts the call; files written
    /// before it are left in place.
    #[instrument(
        skip_all,
        fields(
            domain_type = %domain.name(),
            output_root = %self.settings.output_root.display()
        )
    )]
    pub fn create_components(
        &self,
        domain: &DomainType,
        factory: Option<&FactoryRef>,
        merged: &mut MergedProperties,
    ) -> CrudgenResult<GenerationReport> {
        let contexts = ContextBuilder::new(domain, &self.settings, factory);
        let mut report = GenerationReport {
            domain_type: domain.name().to_string(),
            artifacts: Vec::with_capacity(GENERATION_ORDER.len()),
        };

        for (kind, path) in self.plan(domain) {
            info!(artifact = %kind, path = %path.display(), "Creating new component");
            let created = self.filesystem.create_if_absent(&path)?;

            let content = self.render_artifact(kind, domain, &contexts)?;
            self.filesystem.write_file(&path, &content)?;
            debug!(artifact = %kind, bytes = content.len(), "Component written");

            if kind == ArtifactKind::EditProperties {
                merged.append(&content);
            }

            report.artifacts.push(GeneratedArtifact {
                kind,
                path,
                created,
                bytes: content.len(),
            });
        }

        info!(
            artifacts = report.artifacts.len(),
            created = report.created_count(),
            "Domain type generated"
        );
        Ok(report)
    }

    /// Flush the accumulator to `{ApplicationName}.properties`.
    #[instrument(skip_all, fields(blocks = merged.len()))]
    pub fn write_merged_properties(&self, merged: &MergedProperties) -> CrudgenResult<PathBuf> {
        let path = self.merged_properties_path();
        info!(path = %path.display(), "Writing merged properties");
        self.filesystem.create_if_absent(&path)?;
        self.filesystem.write_file(&path, &merged.content())?;
        Ok(path)
    }

    /// Generate all `types` in order, then flush the merged properties.
    pub fn generate_all(
        &self,
        types: &[DomainType],
        factory: Option<&FactoryRef>,
    ) -> CrudgenResult<Vec<GenerationReport>> {
        let mut merged = MergedProperties::new();
        let reports = types
            .iter()
            .map(|domain| self.create_components(domain, factory, &mut merged))
            .collect::<CrudgenResult<Vec<_>>>()?;
        self.write_merged_properties(&merged)?;
        Ok(reports)
    }

    fn render_artifact(
        &self,
        kind: ArtifactKind,
        domain: &DomainType,
        contexts: &ContextBuilder<'_>,
    ) -> CrudgenResult<String> {
        match kind {
            ArtifactKind::CommonProperties => Ok(common_properties()?),
            ArtifactKind::EditProperties => {
                let fields = select_fields(domain, ViewMode::View, true);
                Ok(type_properties(domain.name(), &fields)?)
            }
            _ => {
                let name = kind.template_name().ok_or_else(|| CrudgenError::Internal {
                    message: format!("artifact '{kind}' has no template"),
                })?;
                let id = TemplateId::new(self.settings.template_set.as_str(), name)?;
                let context = contexts.build(kind)?;
                self.renderer.evaluate(&id, &context)
            }
        }
    }
}

/// Root-relative display path, for reports.
pub fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateRenderer};
    use crate::domain::{ColumnConstraints, FieldDeclaration};
    use std::sync::{Arc, Mutex};

    fn person() -> DomainType {
        DomainType::new("Person")
            .with_package("com.example.model")
            .with_field(FieldDeclaration::new("name", "String").order(1))
            .with_field(FieldDeclaration::new("bio", "String").order(2).column(
                ColumnConstraints {
                    length: 500,
                    ..ColumnConstraints::default()
                },
            ))
            .with_field(FieldDeclaration::new("active", "boolean"))
    }

    fn echo_renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_evaluate()
            .returning(|id, ctx| Ok(format!("{id} {}", ctx.len())));
        renderer
    }

    #[test]
    fn empty_output_root_is_rejected_before_any_io() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_if_absent().never();
        fs.expect_write_file().never();

        let result = GeneratorService::new(
            Box::new(MockTemplateRenderer::new()),
            Box::new(fs),
            GeneratorSettings::new("", "com.example.web"),
        );
        assert!(matches!(
            result,
            Err(CrudgenError::Application(ApplicationError::Configuration { .. }))
        ));
    }

    #[test]
    fn writes_artifacts_in_order() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let mut fs = MockFilesystem::new();
        fs.expect_create_if_absent().returning(|_| Ok(true));
        let log = Arc::clone(&writes);
        fs.expect_write_file().returning(move |path, _| {
            log.lock().unwrap().push(path.to_path_buf());
            Ok(())
        });

        let service = GeneratorService::new(
            Box::new(echo_renderer()),
            Box::new(fs),
            GeneratorSettings::new("/out", "com.example.web"),
        )
        .unwrap();

        let mut merged = MergedProperties::new();
        let report = service
            .create_components(&person(), None, &mut merged)
            .unwrap();

        let written = writes.lock().unwrap();
        assert_eq!(written.len(), 12);
        assert_eq!(written[0], PathBuf::from("/out/common.properties"));
        assert_eq!(written[1], PathBuf::from("/out/person/EditPersonPanel.java"));
        assert_eq!(written[3], PathBuf::from("/out/person/EditPersonPanel.properties"));
        assert_eq!(written[11], PathBuf::from("/out/person/PersonFactory.java"));
        assert_eq!(report.created_count(), 12);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn templates_are_addressed_by_set_and_name() {
        let ids = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&ids);
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_evaluate().returning(move |id, _| {
            log.lock().unwrap().push(id.to_string());
            Ok(String::new())
        });

        let mut fs = MockFilesystem::new();
        fs.expect_create_if_absent().returning(|_| Ok(false));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let service = GeneratorService::new(
            Box::new(renderer),
            Box::new(fs),
            GeneratorSettings::new("/out", "web").with_template_set("plain"),
        )
        .unwrap();
        service
            .create_components(&person(), None, &mut MergedProperties::new())
            .unwrap();

        let ids = ids.lock().unwrap();
        assert_eq!(ids.len(), 10);
        assert_eq!(ids[0], "plain/EditPanel.java.tmpl");
        assert_eq!(ids[4], "plain/ListPanelActions.java.tmpl");
        assert_eq!(ids[9], "plain/Factory.java.tmpl");
    }

    #[test]
    fn placeholder_failure_aborts_the_pass() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_if_absent().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let service = GeneratorService::new(
            Box::new(MockTemplateRenderer::new()),
            Box::new(fs),
            GeneratorSettings::new("/out", "web"),
        )
        .unwrap();

        let mut merged = MergedProperties::new();
        let result = service.create_components(&person(), None, &mut merged);
        assert!(result.is_err());
        assert!(merged.is_empty());
    }

    #[test]
    fn template_failure_aborts_the_pass() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_evaluate().returning(|id, _| {
            Err(ApplicationError::RenderingFailed {
                template: id.to_string(),
                reason: "boom".into(),
            }
            .into())
        });
        let mut fs = MockFilesystem::new();
        fs.expect_create_if_absent().returning(|_| Ok(true));
        // common.properties only
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let service = GeneratorService::new(
            Box::new(renderer),
            Box::new(fs),
            GeneratorSettings::new("/out", "web"),
        )
        .unwrap();

        let err = service
            .create_components(&person(), None, &mut MergedProperties::new())
            .unwrap_err();
        assert!(err.to_string().contains("EditPanel.java.tmpl"));
    }

    #[test]
    fn merged_properties_are_flushed_to_application_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_if_absent()
            .withf(|p| p.ends_with("ShopApplication.properties"))
            .returning(|_| Ok(true));
        fs.expect_write_file()
            .withf(|p, content| {
                p.ends_with("ShopApplication.properties") && content.to_string() == "x\n\n\n"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = GeneratorService::new(
            Box::new(MockTemplateRenderer::new()),
            Box::new(fs),
            GeneratorSettings::new("/out", "web").with_application_name("ShopApplication"),
        )
        .unwrap();

        let mut merged = MergedProperties::new();
        merged.append("x");
        let path = service.write_merged_properties(&merged).unwrap();
        assert_eq!(path, PathBuf::from("/out/ShopApplication.properties"));
    }

    #[test]
    fn factory_ref_parse() {
        let f = FactoryRef::parse("com.example.Factories");
        assert_eq!(f.simple_name, "Factories");
        let f = FactoryRef::parse("Bare");
        assert_eq!(f.simple_name, "Bare");
        assert_eq!(f.qualified_name, "Bare");
    }

    #[test]
    fn relative_paths_for_reports() {
        assert_eq!(
            relative_to(Path::new("/out/person/X.java"), Path::new("/out")),
            Path::new("person/X.java")
        );
    }
}
