//! The fixed set of files generated per domain type.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    CommonProperties,
    EditSource,
    EditMarkup,
    EditProperties,
    ListSource,
    ListMarkup,
    ListActionsSource,
    ListActionsMarkup,
    ViewSource,
    ViewMarkup,
    ModelSource,
    FactorySource,
    /// `{ApplicationName}.properties`, written only on explicit flush.
    MergedProperties,
}

/// Artifacts written by one generation pass, in write order.
pub const GENERATION_ORDER: [ArtifactKind; 12] = [
    ArtifactKind::CommonProperties,
    ArtifactKind::EditSource,
    ArtifactKind::EditMarkup,
    ArtifactKind::EditProperties,
    ArtifactKind::ListSource,
    ArtifactKind::ListMarkup,
    ArtifactKind::ListActionsSource,
    ArtifactKind::ListActionsMarkup,
    ArtifactKind::ViewSource,
    ArtifactKind::ViewMarkup,
    ArtifactKind::ModelSource,
    ArtifactKind::FactorySource,
];

impl ArtifactKind {
    /// File name for `subject`: the type's simple name, or the application
    /// name for [`ArtifactKind::MergedProperties`].
    pub fn file_name(&self, subject: &str) -> String {
        match self {
            Self::CommonProperties => "common.properties".to_string(),
            Self::EditSource => format!("Edit{subject}Panel.java"),
            Self::EditMarkup => format!("Edit{subject}Panel.html"),
            Self::EditProperties => format!("Edit{subject}Panel.properties"),
            Self::ListSource => format!("List{subject}Panel.java"),
            Self::ListMarkup => format!("List{subject}Panel.html"),
            Self::ListActionsSource => format!("List{subject}ActionsPanel.java"),
            Self::ListActionsMarkup => format!("List{subject}ActionsPanel.html"),
            Self::ViewSource => format!("View{subject}Panel.java"),
            Self::ViewMarkup => format!("View{subject}Panel.html"),
            Self::ModelSource => format!("{subject}Model.java"),
            Self::FactorySource => format!("{subject}Factory.java"),
            Self::MergedProperties => format!("{subject}.properties"),
        }
    }

    /// Whether the file lives under the lower-cased type directory.
    pub const fn in_type_directory(&self) -> bool {
        !matches!(self, Self::CommonProperties | Self::MergedProperties)
    }

    /// Template name inside a template set; `None` for properties files,
    /// which are built directly.
    pub const fn template_name(&self) -> Option<&'static str> {
        match self {
            Self::EditSource => Some("EditPanel.java"),
            Self::EditMarkup => Some("EditPanel.html"),
            Self::ListSource => Some("ListPanel.java"),
            Self::ListMarkup => Some("ListPanel.html"),
            Self::ListActionsSource => Some("ListPanelActions.java"),
            Self::ListActionsMarkup => Some("ListPanelActions.html"),
            Self::ViewSource => Some("ViewPanel.java"),
            Self::ViewMarkup => Some("ViewPanel.html"),
            Self::ModelSource => Some("Model.java"),
            Self::FactorySource => Some("Factory.java"),
            Self::CommonProperties | Self::EditProperties | Self::MergedProperties => None,
        }
    }

    /// Component name referenced from other artifacts: the file name
    /// without its extension.
    pub fn component_name(&self, subject: &str) -> String {
        let file = self.file_name(subject);
        match file.rsplit_once('.') {
            Some((stem, _)) => stem.to_string(),
            None => file,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CommonProperties => "common-properties",
            Self::EditSource => "edit-source",
            Self::EditMarkup => "edit-markup",
            Self::EditProperties => "edit-properties",
            Self::ListSource => "list-source",
            Self::ListMarkup => "list-markup",
            Self::ListActionsSource => "list-actions-source",
            Self::ListActionsMarkup => "list-actions-markup",
            Self::ViewSource => "view-source",
            Self::ViewMarkup => "view-markup",
            Self::ModelSource => "model-source",
            Self::FactorySource => "factory-source",
            Self::MergedProperties => "merged-properties",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output path of `kind` for `subject` under `root`.
pub fn artifact_path(root: &Path, kind: ArtifactKind, subject: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    if kind.in_type_directory() {
        path.push(subject.to_lowercase());
    }
    path.push(kind.file_name(subject));
    path
}

/// Every template name a complete template set must provide.
pub fn required_templates() -> impl Iterator<Item = &'static str> {
    GENERATION_ORDER.iter().filter_map(|k| k.template_name())
}
