//! Liquid template renderer.

use crudgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{GenerationContext, TemplateId},
    error::{CrudgenError, CrudgenResult},
};
use tracing::trace;

use super::TemplateLibrary;

/// Renders templates from a [`TemplateLibrary`] with the Liquid standard
/// library of tags and filters.
///
/// Referencing a key the context does not define is a rendering error, so a
/// template that drifts from its context fails loudly instead of emitting
/// blanks.
pub struct LiquidRenderer {
    parser: liquid::Parser,
    library: TemplateLibrary,
}

impl LiquidRenderer {
    pub fn new(library: TemplateLibrary) -> CrudgenResult<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| CrudgenError::Internal {
                message: format!("failed to build Liquid parser: {e}"),
            })?;
        Ok(Self { parser, library })
    }

    /// Renderer over the built-in templates.
    pub fn builtin() -> CrudgenResult<Self> {
        Self::new(TemplateLibrary::builtin())
    }

    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    fn to_liquid(template: &TemplateId, context: &GenerationContext) -> CrudgenResult<liquid::Object> {
        let mut object = liquid::Object::new();
        for (key, value) in context.iter() {
            let value = liquid::model::to_value(value).map_err(|e| {
                ApplicationError::RenderingFailed {
                    template: template.to_string(),
                    reason: format!("context value '{key}' is not representable: {e}"),
                }
            })?;
            object.insert(key.to_string().into(), value);
        }
        Ok(object)
    }
}

impl std::fmt::Debug for LiquidRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiquidRenderer")
            .field("templates", &self.library.len())
            .finish()
    }
}

impl TemplateRenderer for LiquidRenderer {
    fn evaluate(&self, template: &TemplateId, context: &GenerationContext) -> CrudgenResult<String> {
        let source = self
            .library
            .get(template)
            .ok_or_else(|| ApplicationError::TemplateNotFound {
                template: template.to_string(),
            })?;

        let failed = |e: liquid::Error| ApplicationError::RenderingFailed {
            template: template.to_string(),
            reason: e.to_string(),
        };

        let parsed = self.parser.parse(source).map_err(failed)?;
        let globals = Self::to_liquid(template, context)?;
        let output = parsed.render(&globals).map_err(failed)?;

        trace!(template = %template, bytes = output.len(), "template rendered");
        Ok(output)
    }
}
