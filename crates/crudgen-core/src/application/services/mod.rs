//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate the panels for a domain type".

pub mod contexts;
pub mod generator_service;

pub use contexts::ContextBuilder;
pub use generator_service::{
    DEFAULT_APPLICATION_NAME, DEFAULT_TEMPLATE_SET, FactoryRef, GeneratedArtifact,
    GenerationReport, GeneratorService, GeneratorSettings, relative_to,
};
