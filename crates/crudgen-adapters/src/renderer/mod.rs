//! Template rendering adapters.

mod library;
mod liquid_renderer;

pub use library::TemplateLibrary;
pub use liquid_renderer::LiquidRenderer;
