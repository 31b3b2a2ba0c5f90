//! Application layer for crudgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GeneratorService, ContextBuilder)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DEFAULT_APPLICATION_NAME, DEFAULT_TEMPLATE_SET, FactoryRef, GeneratedArtifact,
    GenerationReport, GeneratorService, GeneratorSettings,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer, TypeIntrospector};

pub use error::ApplicationError;
