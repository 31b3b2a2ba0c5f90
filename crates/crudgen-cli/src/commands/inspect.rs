//! Implementation of the `crudgen inspect` command.
//!
//! Shows, for one domain type, the fields a panel of the chosen mode would
//! display and how each of them resolved.

use tracing::instrument;

use crudgen_core::{
    application::ports::TypeIntrospector,
    domain::{FieldDescriptor, ViewMode, select_fields},
};

use crate::{
    cli::{InspectArgs, ListFormat},
    commands::{csv_cell, model_introspector, models_path},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

const COLUMNS: [&str; 7] = [
    "name",
    "declared type",
    "semantic",
    "widget",
    "generics",
    "property",
    "order",
];

#[instrument(skip_all, fields(domain_type = %args.type_name))]
pub fn execute(args: InspectArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let models = models_path(args.models.clone(), &config.generator.models);
    let domain = model_introspector(&models)?.find(&args.type_name)?;

    let mode = ViewMode::from(args.mode);
    let fields = select_fields(&domain, mode, args.all);

    match args.format {
        ListFormat::Table => {
            output.header(&format!(
                "{} ({} mode, {} field(s))",
                domain.qualified_name(),
                mode.as_str(),
                fields.len()
            ))?;
            for line in render_table(&fields) {
                output.print(&line)?;
            }
            if let Some(warning) = unresolved_warning(&fields) {
                output.warning(&warning)?;
            }
        }
        ListFormat::Json => output.json(&fields)?,
        ListFormat::Csv => {
            for line in render_csv(&fields) {
                output.print(&line)?;
            }
        }
    }
    Ok(())
}

fn unresolved_warning(fields: &[FieldDescriptor]) -> Option<String> {
    let unknown: Vec<&str> = fields
        .iter()
        .filter(|f| f.is_unknown_type())
        .map(FieldDescriptor::name)
        .collect();
    (!unknown.is_empty()).then(|| {
        format!(
            "Unresolved field types fall back to the Unknown placeholder widget: {}",
            unknown.join(", ")
        )
    })
}

fn row(field: &FieldDescriptor) -> [String; 7] {
    [
        field.name().to_string(),
        field.declared_type().to_string(),
        field.semantic_type().to_string(),
        field.widget_kind().to_string(),
        field.generics().to_string(),
        field.property_expression().to_string(),
        field.order().map(|o| o.to_string()).unwrap_or_default(),
    ]
}

/// Left-aligned columns separated by two spaces; header first.
fn render_table(fields: &[FieldDescriptor]) -> Vec<String> {
    let rows: Vec<[String; 7]> = fields.iter().map(row).collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(line(&COLUMNS));
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(line(&cells));
    }
    lines
}

fn render_csv(fields: &[FieldDescriptor]) -> Vec<String> {
    let header = COLUMNS.map(|c| c.replace(' ', "_")).join(",");
    std::iter::once(header)
        .chain(fields.iter().map(|field| {
            row(field)
                .iter()
                .map(|cell| csv_cell(cell))
                .collect::<Vec<_>>()
                .join(",")
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen_core::domain::{ColumnConstraints, DomainType, FieldDeclaration};

    fn person() -> DomainType {
        DomainType::new("Person")
            .with_package("com.example.model")
            .with_field(
                FieldDeclaration::new("name", "String")
                    .order(1)
                    .column(ColumnConstraints {
                        nullable: false,
                        ..ColumnConstraints::default()
                    }),
            )
            .with_field(FieldDeclaration::new("tags", "Set").generics("String"))
    }

    fn fields() -> Vec<FieldDescriptor> {
        select_fields(&person(), ViewMode::Edit, false)
    }

    #[test]
    fn table_has_header_and_one_line_per_field() {
        let lines = render_table(&fields());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("name"));
        assert!(lines[0].contains("declared type"));
        assert!(lines[1].starts_with("name "));
        assert!(lines[1].contains("String"));
        assert!(lines[1].ends_with('1'));
        assert!(lines[2].contains("<String>"));
    }

    #[test]
    fn table_columns_line_up() {
        let lines = render_table(&fields());
        let offset = |line: &str, needle: &str| line.find(needle).unwrap();
        assert_eq!(offset(&lines[0], "declared"), offset(&lines[1], "String"));
    }

    #[test]
    fn unresolved_fields_name_the_placeholder_widget() {
        assert_eq!(unresolved_warning(&fields()), None);

        let domain = person().with_field(FieldDeclaration::new("blob", "byte[]"));
        let fields = select_fields(&domain, ViewMode::Edit, false);
        let blob = fields.iter().find(|f| f.name() == "blob").unwrap();
        assert_eq!(blob.widget_kind().to_string(), "Unknown");
        assert_eq!(
            unresolved_warning(&fields).as_deref(),
            Some("Unresolved field types fall back to the Unknown placeholder widget: blob")
        );
    }

    #[test]
    fn csv_quotes_nothing_for_plain_cells() {
        let lines = render_csv(&fields());
        assert_eq!(
            lines[0],
            "name,declared_type,semantic,widget,generics,property,order"
        );
        assert!(lines[1].starts_with("name,String,"));
        assert!(lines[1].ends_with(",name,1"));
    }
}
