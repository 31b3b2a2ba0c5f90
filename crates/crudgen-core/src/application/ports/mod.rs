//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `crudgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: placeholder creation and file writes
//!   - `TemplateRenderer`: template evaluation
//!   - `TypeIntrospector`: domain type metadata
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, TemplateRenderer, TypeIntrospector};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateRenderer, MockTypeIntrospector};
