//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crudgen-adapters` crate provides implementations.

use std::path::Path;

use crate::application::ApplicationError;
use crate::domain::{DomainType, GenerationContext, TemplateId};
use crate::error::CrudgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crudgen_adapters::filesystem::LocalFilesystem` (production)
/// - `crudgen_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create an empty file (and its parents) unless the path already exists.
    ///
    /// Returns `true` when a new file was created. An existing file is left
    /// untouched.
    fn create_if_absent(&self, path: &Path) -> CrudgenResult<bool>;

    /// Write the full contents of a file, replacing what was there.
    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template evaluation.
///
/// Implemented by:
/// - `crudgen_adapters::renderer::LiquidRenderer` (Liquid templates)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Evaluate `template` against `context` and return the produced text.
    fn evaluate(&self, template: &TemplateId, context: &GenerationContext) -> CrudgenResult<String>;
}

/// Port for reading domain types and their directives.
///
/// Implemented by:
/// - `crudgen_adapters::introspector::TomlModelIntrospector` (TOML model files)
#[cfg_attr(test, mockall::automock)]
pub trait TypeIntrospector: Send + Sync {
    /// All domain types, in source order.
    fn domain_types(&self) -> CrudgenResult<Vec<DomainType>>;

    /// One domain type by simple name.
    fn find(&self, name: &str) -> CrudgenResult<DomainType> {
        self.domain_types()?
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| {
                ApplicationError::TypeNotFound {
                    name: name.to_string(),
                }
                .into()
            })
    }
}
