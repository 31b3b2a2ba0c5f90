//! Implementation of the `crudgen list` command.

use std::path::Path;

use serde::Serialize;

use crudgen_adapters::TemplateLibrary;

use crate::{
    cli::{ListArgs, ListFormat},
    commands::csv_cell,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One available template and where it comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TemplateEntry {
    set: String,
    name: String,
    /// `builtin`, or the directory the template was loaded from.
    source: String,
}

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let dir = args
        .templates_dir
        .as_deref()
        .or(config.templates.directory.as_deref());
    let entries = collect_entries(dir)?;

    match args.format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            let mut current_set = None;
            for entry in &entries {
                if current_set != Some(entry.set.as_str()) {
                    output.print(&format!("  {}", entry.set))?;
                    current_set = Some(entry.set.as_str());
                }
                output.print(&format!("    {:<24} ({})", entry.name, entry.source))?;
            }
        }
        ListFormat::Json => output.json(&entries)?,
        ListFormat::Csv => {
            output.print("set,name,source")?;
            for entry in &entries {
                output.print(&format!(
                    "{},{},{}",
                    csv_cell(&entry.set),
                    csv_cell(&entry.name),
                    csv_cell(&entry.source)
                ))?;
            }
        }
    }

    Ok(())
}

/// Built-ins, replaced or extended by the templates found in `dir`.
fn collect_entries(dir: Option<&Path>) -> CliResult<Vec<TemplateEntry>> {
    let local = dir.map(TemplateLibrary::from_dir).transpose()?;

    let mut library = TemplateLibrary::builtin();
    if let Some(local) = &local {
        library.merge(local.clone());
    }

    let entries = library
        .ids()
        .map(|id| {
            let source = match (&local, dir) {
                (Some(local), Some(dir)) if local.contains(id) => dir.display().to_string(),
                _ => "builtin".to_string(),
            };
            TemplateEntry {
                set: id.set().to_string(),
                name: id.name().to_string(),
                source,
            }
        })
        .collect();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn builtins_only() {
        let entries = collect_entries(None).unwrap();
        assert_eq!(entries.len(), 10);
        assert!(entries.iter().all(|e| e.source == "builtin"));
        assert!(entries.iter().all(|e| e.set == "bootstrap-horizontal"));
    }

    #[test]
    fn directory_templates_are_attributed() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("plain");
        std::fs::create_dir_all(&plain).unwrap();
        std::fs::write(plain.join("EditPanel.java.tmpl"), "// edit\n").unwrap();
        let set = dir.path().join("bootstrap-horizontal");
        std::fs::create_dir_all(&set).unwrap();
        std::fs::write(set.join("Model.java.tmpl"), "// model\n").unwrap();

        let entries = collect_entries(Some(dir.path())).unwrap();
        assert_eq!(entries.len(), 11);

        let source_of = |set: &str, name: &str| {
            entries
                .iter()
                .find(|e| e.set == set && e.name == name)
                .map(|e| e.source.clone())
                .unwrap()
        };
        let dir_name = dir.path().display().to_string();
        assert_eq!(source_of("plain", "EditPanel.java"), dir_name);
        assert_eq!(source_of("bootstrap-horizontal", "Model.java"), dir_name);
        assert_eq!(source_of("bootstrap-horizontal", "ViewPanel.html"), "builtin");
    }
}
