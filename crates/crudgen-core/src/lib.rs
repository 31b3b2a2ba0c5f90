//! crudgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the crudgen
//! panel generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           crudgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (GeneratorService, contexts)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (Filesystem, TemplateRenderer,          │
//! │  TypeIntrospector)                      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     crudgen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, LiquidRenderer,       │
//! │  TomlModelIntrospector)                 │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (type resolution, field selection,      │
//! │  resource keys, artifacts)              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crudgen_core::prelude::*;
//!
//! # fn run(
//! #     renderer: Box<dyn TemplateRenderer>,
//! #     filesystem: Box<dyn Filesystem>,
//! #     person: DomainType,
//! # ) -> CrudgenResult<()> {
//! let settings = GeneratorSettings::new("/tmp/out", "com.example.web");
//! let generator = GeneratorService::new(renderer, filesystem, settings)?;
//!
//! let mut merged = MergedProperties::new();
//! generator.create_components(&person, None, &mut merged)?;
//! generator.write_merged_properties(&merged)?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FactoryRef, GenerationReport, GeneratorService, GeneratorSettings,
        ports::{Filesystem, TemplateRenderer, TypeIntrospector},
    };
    pub use crate::domain::{
        ArtifactKind, DomainType, FieldDeclaration, FieldDescriptor, GenerationContext,
        MergedProperties, ResourceKey, SemanticType, TemplateId, ViewMode, WidgetKind,
    };
    pub use crate::error::{CrudgenError, CrudgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
