//! Localization key registry.
//!
//! Two flavours of key share one enum:
//!
//! - **generic** keys have a fixed key and default value (`form.submit=Submit`)
//! - **instance** keys are `%s` templates filled with the domain type's
//!   display name (`Person.action.save=Save Person`)
//!
//! Calling the accessor of the wrong flavour returns
//! [`DomainError::MisusedResourceKey`].

use serde::Serialize;

use crate::domain::error::DomainError;

const PLACEHOLDER: &str = "%s";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKey {
    GenericSubmit,
    GenericActionsHeader,
    GenericEdit,
    GenericView,
    GenericDelete,
    GenericList,
    GenericCreateNew,
    ClassHeader,
    InstanceList,
    InstanceCreateNew,
    InstanceSave,
    InstanceEdit,
    InstanceView,
    InstanceDelete,
    InstanceUpdate,
    MessageUpdated,
    MessageSaved,
    MessageDeleted,
}

impl ResourceKey {
    /// Every key in declaration order.
    pub const ALL: [ResourceKey; 18] = [
        Self::GenericSubmit,
        Self::GenericActionsHeader,
        Self::GenericEdit,
        Self::GenericView,
        Self::GenericDelete,
        Self::GenericList,
        Self::GenericCreateNew,
        Self::ClassHeader,
        Self::InstanceList,
        Self::InstanceCreateNew,
        Self::InstanceSave,
        Self::InstanceEdit,
        Self::InstanceView,
        Self::InstanceDelete,
        Self::InstanceUpdate,
        Self::MessageUpdated,
        Self::MessageSaved,
        Self::MessageDeleted,
    ];

    /// Raw `(key, value)` templates.
    const fn template(&self) -> (&'static str, &'static str) {
        match self {
            Self::GenericSubmit => ("form.submit", "Submit"),
            Self::GenericActionsHeader => ("list.actions", "Actions"),
            Self::GenericEdit => ("list.actions.edit", "Edit"),
            Self::GenericView => ("list.actions.view", "View"),
            Self::GenericDelete => ("list.actions.delete", "Delete"),
            Self::GenericList => ("list.actions.list", "List"),
            Self::GenericCreateNew => ("list.actions.create", "Create"),
            Self::ClassHeader => ("%s.header", "%s"),
            Self::InstanceList => ("%s.action.list", "List %s"),
            Self::InstanceCreateNew => ("%s.action.create", "Create new %s"),
            Self::InstanceSave => ("%s.action.save", "Save %s"),
            Self::InstanceEdit => ("%s.action.edit", "Edit %s"),
            Self::InstanceView => ("%s.action.view", "View %s"),
            Self::InstanceDelete => ("%s.action.delete", "Delete %s"),
            Self::InstanceUpdate => ("%s.action.update", "Update %s"),
            Self::MessageUpdated => ("%s.message.updated", "Updated %s"),
            Self::MessageSaved => ("%s.message.saved", "Saved %s"),
            Self::MessageDeleted => ("%s.message.deleted", "Deleted %s"),
        }
    }

    pub const fn is_generic(&self) -> bool {
        matches!(
            self,
            Self::GenericSubmit
                | Self::GenericActionsHeader
                | Self::GenericEdit
                | Self::GenericView
                | Self::GenericDelete
                | Self::GenericList
                | Self::GenericCreateNew
        )
    }

    /// Key of a generic resource.
    pub fn key(&self) -> Result<&'static str, DomainError> {
        self.require_generic()?;
        Ok(self.template().0)
    }

    /// Default value of a generic resource.
    pub fn value(&self) -> Result<&'static str, DomainError> {
        self.require_generic()?;
        Ok(self.template().1)
    }

    /// Key of an instance resource for the given type name.
    pub fn key_for(&self, type_name: &str) -> Result<String, DomainError> {
        self.require_instance()?;
        Ok(self.template().0.replace(PLACEHOLDER, type_name))
    }

    /// Default value of an instance resource for the given type name.
    pub fn value_for(&self, type_name: &str) -> Result<String, DomainError> {
        self.require_instance()?;
        Ok(self.template().1.replace(PLACEHOLDER, type_name))
    }

    fn require_generic(&self) -> Result<(), DomainError> {
        if self.is_generic() {
            Ok(())
        } else {
            Err(DomainError::MisusedResourceKey {
                key: self.template().0,
                reason: "instance keys need a type name",
            })
        }
    }

    fn require_instance(&self) -> Result<(), DomainError> {
        if self.is_generic() {
            Err(DomainError::MisusedResourceKey {
                key: self.template().0,
                reason: "generic keys take no type name",
            })
        } else {
            Ok(())
        }
    }
}

pub fn generic_keys() -> impl Iterator<Item = ResourceKey> {
    ResourceKey::ALL.into_iter().filter(|k| k.is_generic())
}

pub fn instance_keys() -> impl Iterator<Item = ResourceKey> {
    ResourceKey::ALL.into_iter().filter(|k| !k.is_generic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_accessors() {
        assert_eq!(ResourceKey::GenericSubmit.key().unwrap(), "form.submit");
        assert_eq!(ResourceKey::GenericSubmit.value().unwrap(), "Submit");
        assert_eq!(
            ResourceKey::GenericActionsHeader.key().unwrap(),
            "list.actions"
        );
    }

    #[test]
    fn instance_accessors_fill_the_type_name() {
        assert_eq!(
            ResourceKey::InstanceSave.key_for("Person").unwrap(),
            "Person.action.save"
        );
        assert_eq!(
            ResourceKey::InstanceCreateNew.value_for("Person").unwrap(),
            "Create new Person"
        );
        assert_eq!(ResourceKey::ClassHeader.value_for("Person").unwrap(), "Person");
    }

    #[test]
    fn wrong_flavour_is_a_usage_error() {
        assert!(matches!(
            ResourceKey::InstanceSave.key(),
            Err(DomainError::MisusedResourceKey { .. })
        ));
        assert!(matches!(
            ResourceKey::InstanceSave.value(),
            Err(DomainError::MisusedResourceKey { .. })
        ));
        assert!(matches!(
            ResourceKey::GenericSubmit.key_for("Person"),
            Err(DomainError::MisusedResourceKey { .. })
        ));
        assert!(matches!(
            ResourceKey::GenericSubmit.value_for("Person"),
            Err(DomainError::MisusedResourceKey { .. })
        ));
    }

    #[test]
    fn flavours_partition_the_registry() {
        let generic: Vec<_> = generic_keys().collect();
        let instance: Vec<_> = instance_keys().collect();

        assert_eq!(generic.len(), 7);
        assert_eq!(instance.len(), 11);
        assert_eq!(generic[0], ResourceKey::GenericSubmit);
        assert_eq!(instance[0], ResourceKey::ClassHeader);
        assert_eq!(instance[10], ResourceKey::MessageDeleted);
    }
}
