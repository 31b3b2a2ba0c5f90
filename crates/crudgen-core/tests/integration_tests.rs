//! Integration tests for crudgen-core.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crudgen_core::{
    application::ApplicationError,
    domain::{ColumnConstraints, TypeDirectives},
    prelude::*,
};

/// In-memory filesystem shared between the service and the test.
#[derive(Clone, Default)]
struct SharedFs {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl SharedFs {
    fn read(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    fn snapshot(&self) -> BTreeMap<PathBuf, String> {
        self.files.lock().unwrap().clone()
    }
}

impl Filesystem for SharedFs {
    fn create_if_absent(&self, path: &Path) -> CrudgenResult<bool> {
        let mut files = self.files.lock().map_err(|_| ApplicationError::StoreLockError)?;
        if files.contains_key(path) {
            return Ok(false);
        }
        files.insert(path.to_path_buf(), String::new());
        Ok(true)
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()> {
        let mut files = self.files.lock().map_err(|_| ApplicationError::StoreLockError)?;
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().map(|f| f.contains_key(path)).unwrap_or(false)
    }
}

/// Renders the template id followed by the sorted context keys.
struct EchoRenderer;

impl TemplateRenderer for EchoRenderer {
    fn evaluate(&self, template: &TemplateId, context: &GenerationContext) -> CrudgenResult<String> {
        let keys: Vec<&str> = context.keys().collect();
        Ok(format!("{template}\n{}\n", keys.join(",")))
    }
}

fn person() -> DomainType {
    DomainType::new("Person")
        .with_package("com.example.model")
        .with_field(FieldDeclaration::new("name", "String").order(1))
        .with_field(
            FieldDeclaration::new("bio", "String")
                .order(2)
                .column(ColumnConstraints {
                    length: 500,
                    ..ColumnConstraints::default()
                }),
        )
        .with_field(FieldDeclaration::new("active", "boolean"))
}

fn company() -> DomainType {
    DomainType::new("Company")
        .with_package("com.example.model")
        .with_directives(TypeDirectives {
            namespace: Some("company".into()),
            property_prefix: None,
        })
        .with_field(FieldDeclaration::new("title", "String"))
}

fn service(fs: &SharedFs) -> GeneratorService {
    GeneratorService::new(
        Box::new(EchoRenderer),
        Box::new(fs.clone()),
        GeneratorSettings::new("/out", "com.example.web").with_application_name("ShopApplication"),
    )
    .unwrap()
}

#[test]
fn test_full_generation_layout() {
    let fs = SharedFs::default();
    let generator = service(&fs);

    let reports = generator.generate_all(&[person(), company()], None).unwrap();
    assert_eq!(reports.len(), 2);

    let files = fs.snapshot();
    // 12 per type, common.properties shared, plus the merged file
    assert_eq!(files.len(), 11 * 2 + 1 + 1);

    for name in [
        "/out/person/EditPersonPanel.java",
        "/out/person/EditPersonPanel.html",
        "/out/person/EditPersonPanel.properties",
        "/out/person/ListPersonPanel.java",
        "/out/person/ListPersonPanel.html",
        "/out/person/ListPersonActionsPanel.java",
        "/out/person/ListPersonActionsPanel.html",
        "/out/person/ViewPersonPanel.java",
        "/out/person/ViewPersonPanel.html",
        "/out/person/PersonModel.java",
        "/out/person/PersonFactory.java",
        "/out/common.properties",
        "/out/ShopApplication.properties",
    ] {
        assert!(files.contains_key(Path::new(name)), "missing {name}");
    }
}

#[test]
fn test_templates_receive_artifact_contexts() {
    let fs = SharedFs::default();
    service(&fs)
        .create_components(&person(), None, &mut MergedProperties::new())
        .unwrap();

    let edit_markup = fs.read("/out/person/EditPersonPanel.html").unwrap();
    assert!(edit_markup.starts_with("bootstrap-horizontal/EditPanel.html.tmpl\n"));
    assert!(edit_markup.contains("fields"));
    assert!(edit_markup.contains("submitKey"));

    let model = fs.read("/out/person/PersonModel.java").unwrap();
    assert!(model.contains(
        "className,entityImport,factoryComponent,factoryImport,package,requiredImports\n"
    ));
}

#[test]
fn test_merged_properties_collect_each_type() {
    let fs = SharedFs::default();
    service(&fs).generate_all(&[person(), company()], None).unwrap();

    let person_props = fs.read("/out/person/EditPersonPanel.properties").unwrap();
    let company_props = fs.read("/out/company/EditCompanyPanel.properties").unwrap();
    let merged = fs.read("/out/ShopApplication.properties").unwrap();

    assert_eq!(merged, format!("{person_props}\n\n{company_props}\n\n\n"));
    assert!(company_props.contains("company.title=Title\n"));
    assert!(person_props.contains("com.example.model.Person.bio=Bio\n"));
}

#[test]
fn test_generation_is_repeatable() {
    let fs = SharedFs::default();
    let generator = service(&fs);

    generator.generate_all(&[person(), company()], None).unwrap();
    let first = fs.snapshot();
    generator.generate_all(&[person(), company()], None).unwrap();
    let second = fs.snapshot();

    assert_eq!(first, second);
}

#[test]
fn test_existing_placeholders_are_overwritten_with_output() {
    let fs = SharedFs::default();
    fs.write_file(Path::new("/out/person/PersonModel.java"), "stale")
        .unwrap();

    let report = service(&fs)
        .create_components(&person(), None, &mut MergedProperties::new())
        .unwrap();

    assert_eq!(report.created_count(), 11);
    let model = fs.read("/out/person/PersonModel.java").unwrap();
    assert!(model.starts_with("bootstrap-horizontal/Model.java.tmpl"));
}

#[test]
fn test_plan_touches_nothing() {
    let fs = SharedFs::default();
    let plan = service(&fs).plan(&person());

    assert_eq!(plan.len(), 12);
    assert_eq!(plan[0].1, PathBuf::from("/out/common.properties"));
    assert!(fs.snapshot().is_empty());
}
