//! Per-artifact template contexts.
//!
//! Every context starts from the common keys (`package`, `className`,
//! `entityImport`, `factoryComponent`, `factoryImport`, `requiredImports`) and
//! adds the keys its template reads. Field lists are recomputed for every
//! context: `fields` is the edit selection, `columns` the view selection.

use std::collections::BTreeSet;

use crate::{
    application::services::generator_service::{FactoryRef, GeneratorSettings},
    domain::{
        ArtifactKind, DomainType, GenerationContext, ResourceKey, ViewMode, select_fields,
    },
    error::{CrudgenError, CrudgenResult},
};

pub struct ContextBuilder<'a> {
    domain: &'a DomainType,
    settings: &'a GeneratorSettings,
    factory: Option<&'a FactoryRef>,
}

impl<'a> ContextBuilder<'a> {
    pub fn new(
        domain: &'a DomainType,
        settings: &'a GeneratorSettings,
        factory: Option<&'a FactoryRef>,
    ) -> Self {
        Self {
            domain,
            settings,
            factory,
        }
    }

    /// Context for one templated artifact.
    pub fn build(&self, kind: ArtifactKind) -> CrudgenResult<GenerationContext> {
        let mut ctx = self.common()?;
        let name = self.domain.name();

        match kind {
            ArtifactKind::ListSource => {
                ctx.insert("actionKey", ResourceKey::GenericActionsHeader.key()?);
                ctx.insert("actionValue", ResourceKey::GenericActionsHeader.value()?);
                self.component(&mut ctx, "javaComponent", ArtifactKind::ListSource);
                self.component(&mut ctx, "javaComponentEdit", ArtifactKind::EditSource);
                self.component(&mut ctx, "actionsPanelComponent", ArtifactKind::ListActionsSource);
                instance(&mut ctx, "createRecord", ResourceKey::InstanceCreateNew, name)?;
                self.columns(&mut ctx)?;
            }
            ArtifactKind::ListMarkup | ArtifactKind::ModelSource | ArtifactKind::FactorySource => {}
            ArtifactKind::ListActionsSource => {
                self.component(&mut ctx, "javaComponent", ArtifactKind::ListActionsSource);
                self.component(&mut ctx, "javaComponentList", ArtifactKind::ListSource);
                self.component(&mut ctx, "javaComponentEdit", ArtifactKind::EditSource);
                self.component(&mut ctx, "javaComponentView", ArtifactKind::ViewSource);
                instance(&mut ctx, "deletedRecordMessage", ResourceKey::MessageDeleted, name)?;
            }
            ArtifactKind::ListActionsMarkup => {
                ctx.insert("editKey", ResourceKey::GenericEdit.key()?);
                ctx.insert("deleteKey", ResourceKey::GenericDelete.key()?);
                ctx.insert("viewKey", ResourceKey::GenericView.key()?);
            }
            ArtifactKind::ViewSource => {
                self.component(&mut ctx, "javaComponent", ArtifactKind::ViewSource);
                self.component(&mut ctx, "javaComponentEdit", ArtifactKind::EditSource);
                self.component(&mut ctx, "javaComponentList", ArtifactKind::ListSource);
                self.columns(&mut ctx)?;
                instance(&mut ctx, "classHeader", ResourceKey::ClassHeader, name)?;
                instance(&mut ctx, "listRecords", ResourceKey::InstanceList, name)?;
                instance(&mut ctx, "createRecord", ResourceKey::InstanceCreateNew, name)?;
                instance(&mut ctx, "editRecord", ResourceKey::InstanceEdit, name)?;
                instance(&mut ctx, "deleteRecord", ResourceKey::InstanceDelete, name)?;
                instance(&mut ctx, "deletedRecordMessage", ResourceKey::MessageDeleted, name)?;
            }
            ArtifactKind::ViewMarkup => {
                self.columns(&mut ctx)?;
            }
            ArtifactKind::EditSource => {
                self.component(&mut ctx, "javaComponent", ArtifactKind::EditSource);
                self.component(&mut ctx, "javaComponentList", ArtifactKind::ListSource);
                ctx.insert("classResourceKey", ResourceKey::ClassHeader.key_for(name)?);
                instance(&mut ctx, "listRecords", ResourceKey::InstanceList, name)?;
                instance(&mut ctx, "updateRecord", ResourceKey::InstanceUpdate, name)?;
                instance(&mut ctx, "saveRecord", ResourceKey::InstanceSave, name)?;
                instance(&mut ctx, "deleteRecord", ResourceKey::InstanceDelete, name)?;
                instance(&mut ctx, "createdRecordMessage", ResourceKey::MessageSaved, name)?;
                instance(&mut ctx, "updatedRecordMessage", ResourceKey::MessageUpdated, name)?;
                self.fields(&mut ctx)?;
            }
            ArtifactKind::EditMarkup => {
                self.fields(&mut ctx)?;
                ctx.insert("submitKey", ResourceKey::GenericSubmit.key()?);
                ctx.insert("submitValue", ResourceKey::GenericSubmit.value()?);
            }
            ArtifactKind::CommonProperties
            | ArtifactKind::EditProperties
            | ArtifactKind::MergedProperties => {
                return Err(CrudgenError::Internal {
                    message: format!("artifact '{kind}' is not built from a template"),
                });
            }
        }

        Ok(ctx)
    }

    /// Keys shared by every template.
    pub fn common(&self) -> CrudgenResult<GenerationContext> {
        let mut ctx = GenerationContext::new();
        let name = self.domain.name();
        let lower = name.to_lowercase();

        let package = if self.settings.base_package.is_empty() {
            lower
        } else {
            format!("{}.{}", self.settings.base_package, lower)
        };
        ctx.insert("package", package);
        ctx.insert("className", name);
        ctx.insert(
            "entityImport",
            format!("import {};", self.domain.qualified_name()),
        );

        match self.factory {
            Some(factory) => {
                ctx.insert("factoryComponent", factory.simple_name.as_str());
                ctx.insert("factoryImport", format!("import {};\n", factory.qualified_name));
            }
            None => {
                self.component(&mut ctx, "factoryComponent", ArtifactKind::FactorySource);
                ctx.insert("factoryImport", "");
            }
        }

        ctx.insert("requiredImports", self.required_imports());
        Ok(ctx)
    }

    /// One import line per distinct enumeration or unknown-typed field type
    /// in the edit selection. Types without a package cannot be imported and
    /// are left out.
    fn required_imports(&self) -> String {
        let types: BTreeSet<String> = select_fields(self.domain, ViewMode::Edit, false)
            .iter()
            .filter(|f| f.is_enumeration() || f.is_unknown_type())
            .map(|f| f.qualified_type().to_string())
            .filter(|t| t.contains('.'))
            .collect();

        types.iter().map(|t| format!("import {t};\n")).collect()
    }

    fn component(&self, ctx: &mut GenerationContext, key: &str, kind: ArtifactKind) {
        ctx.insert(key, kind.component_name(self.domain.name()));
    }

    fn fields(&self, ctx: &mut GenerationContext) -> CrudgenResult<()> {
        let fields = select_fields(self.domain, ViewMode::Edit, false);
        ctx.insert_serialized("fields", &fields)?;
        Ok(())
    }

    fn columns(&self, ctx: &mut GenerationContext) -> CrudgenResult<()> {
        let columns = select_fields(self.domain, ViewMode::View, false);
        ctx.insert_serialized("columns", &columns)?;
        Ok(())
    }
}

/// Inserts `{prefix}Key` and `{prefix}DefaultValue` for an instance key.
fn instance(
    ctx: &mut GenerationContext,
    prefix: &str,
    key: ResourceKey,
    type_name: &str,
) -> CrudgenResult<()> {
    ctx.insert(format!("{prefix}Key"), key.key_for(type_name)?);
    ctx.insert(format!("{prefix}DefaultValue"), key.value_for(type_name)?);
    Ok(())
}
