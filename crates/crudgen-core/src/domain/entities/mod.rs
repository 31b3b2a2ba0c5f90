pub mod context;
pub mod domain_type;
pub mod field_descriptor;
pub mod template_id;

pub use crate::domain::DomainError;
pub use context::GenerationContext;
pub use domain_type::DomainType;
pub use field_descriptor::FieldDescriptor;
pub use template_id::TemplateId;
