//! Template libraries: the built-in set plus on-disk overrides.
//!
//! A library maps [`TemplateId`]s to Liquid source. The built-in
//! `bootstrap-horizontal` set is compiled into the binary; a templates
//! directory laid out as `<dir>/<set>/<Artifact>.tmpl` can add new sets or
//! replace individual built-in templates.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crudgen_core::{
    application::{ApplicationError, DEFAULT_TEMPLATE_SET},
    domain::{TemplateId, artifact::required_templates},
    error::CrudgenResult,
};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

const EXTENSION: &str = "tmpl";

/// Built-in sources of the default set, keyed by template name.
const BUILTIN: [(&str, &str); 10] = [
    (
        "EditPanel.java",
        include_str!("../../templates/bootstrap-horizontal/EditPanel.java.tmpl"),
    ),
    (
        "EditPanel.html",
        include_str!("../../templates/bootstrap-horizontal/EditPanel.html.tmpl"),
    ),
    (
        "ListPanel.java",
        include_str!("../../templates/bootstrap-horizontal/ListPanel.java.tmpl"),
    ),
    (
        "ListPanel.html",
        include_str!("../../templates/bootstrap-horizontal/ListPanel.html.tmpl"),
    ),
    (
        "ListPanelActions.java",
        include_str!("../../templates/bootstrap-horizontal/ListPanelActions.java.tmpl"),
    ),
    (
        "ListPanelActions.html",
        include_str!("../../templates/bootstrap-horizontal/ListPanelActions.html.tmpl"),
    ),
    (
        "ViewPanel.java",
        include_str!("../../templates/bootstrap-horizontal/ViewPanel.java.tmpl"),
    ),
    (
        "ViewPanel.html",
        include_str!("../../templates/bootstrap-horizontal/ViewPanel.html.tmpl"),
    ),
    (
        "Model.java",
        include_str!("../../templates/bootstrap-horizontal/Model.java.tmpl"),
    ),
    (
        "Factory.java",
        include_str!("../../templates/bootstrap-horizontal/Factory.java.tmpl"),
    ),
];

#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: BTreeMap<TemplateId, String>,
}

impl TemplateLibrary {
    /// Empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// The templates shipped with crudgen.
    pub fn builtin() -> Self {
        let mut library = Self::new();
        for (name, source) in BUILTIN {
            if let Ok(id) = TemplateId::new(DEFAULT_TEMPLATE_SET, name) {
                library.insert(id, source);
            }
        }
        library
    }

    /// Load every `<set>/<name>.tmpl` file below `dir`.
    ///
    /// Files at other depths or with other extensions are ignored.
    ///
    /// # Errors
    ///
    /// `FilesystemError` when the directory is missing or a file cannot be read.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn from_dir(dir: &Path) -> CrudgenResult<Self> {
        if !dir.is_dir() {
            return Err(ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: "templates directory not found".into(),
            }
            .into());
        }

        let mut library = Self::new();

        for entry in WalkDir::new(dir).min_depth(2).max_depth(2).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: format!("directory walk error: {e}"),
            })?;

            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(EXTENSION)
            {
                continue;
            }

            let Some(id) = template_id_for(dir, path) else {
                warn!(path = %path.display(), "skipping file with an unusable template name");
                continue;
            };

            let source = fs::read_to_string(path).map_err(|e| ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Failed to read template: {e}"),
            })?;

            debug!(template = %id, "loaded template");
            library.insert(id, source);
        }

        debug!(count = library.len(), "finished loading templates");
        Ok(library)
    }

    /// Built-ins overlaid with the templates found in `dir`.
    pub fn builtin_with_overrides(dir: &Path) -> CrudgenResult<Self> {
        let mut library = Self::builtin();
        library.merge(Self::from_dir(dir)?);
        Ok(library)
    }

    pub fn insert(&mut self, id: TemplateId, source: impl Into<String>) {
        self.templates.insert(id, source.into());
    }

    /// Add every template of `other`, replacing templates with the same id.
    pub fn merge(&mut self, other: TemplateLibrary) {
        self.templates.extend(other.templates);
    }

    pub fn get(&self, id: &TemplateId) -> Option<&str> {
        self.templates.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &TemplateId) -> bool {
        self.templates.contains_key(id)
    }

    /// Names of the template sets present, sorted.
    pub fn sets(&self) -> BTreeSet<&str> {
        self.templates.keys().map(TemplateId::set).collect()
    }

    /// Templates a full generation needs from `set` that this library lacks.
    pub fn missing(&self, set: &str) -> Vec<String> {
        required_templates()
            .filter(|name| {
                TemplateId::new(set, *name)
                    .map(|id| !self.contains(&id))
                    .unwrap_or(true)
            })
            .map(|name| format!("{set}/{name}.{EXTENSION}"))
            .collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &TemplateId> {
        self.templates.keys()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn template_id_for(root: &Path, path: &Path) -> Option<TemplateId> {
    let relative = path.strip_prefix(root).ok()?;
    let set = relative.parent()?.to_str()?;
    let name = relative.file_stem()?.to_str()?;
    TemplateId::new(set, name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn builtin_set_is_complete() {
        let library = TemplateLibrary::builtin();
        assert_eq!(library.len(), 10);
        assert!(library.missing(DEFAULT_TEMPLATE_SET).is_empty());
        assert_eq!(
            library.sets().into_iter().collect::<Vec<_>>(),
            vec![DEFAULT_TEMPLATE_SET]
        );
    }

    #[test]
    fn unknown_set_is_missing_everything() {
        let library = TemplateLibrary::builtin();
        let missing = library.missing("plain");
        assert_eq!(missing.len(), 10);
        assert!(missing.contains(&"plain/EditPanel.java.tmpl".to_string()));
    }

    #[test]
    fn loads_set_directories() {
        let dir = TempDir::new().unwrap();
        let set = dir.path().join("plain");
        fs::create_dir_all(&set).unwrap();
        fs::write(set.join("Model.java.tmpl"), "class {{ className }}Model {}").unwrap();
        fs::write(set.join("README.md"), "ignored").unwrap();
        fs::write(dir.path().join("Stray.java.tmpl"), "ignored").unwrap();

        let library = TemplateLibrary::from_dir(dir.path()).unwrap();
        assert_eq!(library.len(), 1);

        let id = TemplateId::parse("plain/Model.java.tmpl").unwrap();
        assert_eq!(library.get(&id), Some("class {{ className }}Model {}"));
    }

    #[test]
    fn overrides_replace_builtins() {
        let dir = TempDir::new().unwrap();
        let set = dir.path().join(DEFAULT_TEMPLATE_SET);
        fs::create_dir_all(&set).unwrap();
        fs::write(set.join("Factory.java.tmpl"), "custom").unwrap();

        let library = TemplateLibrary::builtin_with_overrides(dir.path()).unwrap();
        assert_eq!(library.len(), 10);

        let id = TemplateId::new(DEFAULT_TEMPLATE_SET, "Factory.java").unwrap();
        assert_eq!(library.get(&id), Some("custom"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(TemplateLibrary::from_dir(&dir.path().join("absent")).is_err());
    }
}
