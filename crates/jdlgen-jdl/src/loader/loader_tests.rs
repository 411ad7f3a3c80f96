#![allow(non_snake_case)]

use super::*;
use std::cell::RefCell;

/// Parser double recording the paths it was handed
struct RecordingParser {
    raw: RawJdl,
    seen: RefCell<Vec<PathBuf>>,
}

impl JdlParser for RecordingParser {
    fn parse(&self, paths: &[PathBuf]) -> CodegenResult<RawJdl> {
        self.seen.borrow_mut().extend_from_slice(paths);
        Ok(self.raw.clone())
    }
}

fn raw(json: &str) -> RawJdl {
    RawJdl::from_json_str(json).unwrap()
}

#[test]
fn JdlLoader___resolve_paths___relative_becomes_absolute() {
    let resolved = JdlLoader::<RawJdl>::resolve_paths(&["model/app.json"]).unwrap();

    assert!(resolved[0].is_absolute());
    assert!(resolved[0].ends_with("model/app.json"));
}

#[test]
fn JdlLoader___resolve_paths___absolute_is_kept() {
    let resolved = JdlLoader::<RawJdl>::resolve_paths(&["/srv/jdl/app.json"]).unwrap();

    assert_eq!(resolved[0], PathBuf::from("/srv/jdl/app.json"));
}

#[test]
fn JdlLoader___load___hands_absolute_paths_to_parser() {
    let loader = JdlLoader::new(RecordingParser {
        raw: RawJdl::default(),
        seen: RefCell::new(Vec::new()),
    });

    loader.load(&["a.json", "b.json"]).unwrap();

    let seen = loader.parser().seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|p| p.is_absolute()));
}

#[test]
fn JdlLoader___load_entities___zero_entities_fails() {
    let loader = JdlLoader::new(raw(r#"{ "applications": { "a": { "config": { "baseName": "a" } } } }"#));

    let result = loader.load_entities(&["x.json"]);

    assert_eq!(result, Err(CodegenError::NoEntitiesFound));
}

#[test]
fn JdlLoader___load_modules___zero_applications_fails() {
    let loader = JdlLoader::new(raw(r#"{ "entities": { "Book": { "name": "Book", "body": [] } } }"#));

    let result = loader.load_modules(&["x.json"]);

    assert_eq!(result, Err(CodegenError::NoApplicationsFound));
}

#[test]
fn JdlLoader___entities___follow_parser_order() {
    let document = raw(
        r#"{ "entities": {
            "Order": { "name": "Order", "body": [] },
            "Customer": { "name": "Customer", "body": [] },
            "Invoice": { "name": "Invoice", "body": [] }
        } }"#,
    );

    let entities = JdlLoader::<RawJdl>::entities(&document).unwrap();

    let names: Vec<&str> = entities.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Order", "Customer", "Invoice"]);
}

#[test]
fn JdlLoader___entities___attaches_relationships() {
    let document = raw(
        r#"{
            "entities": {
                "Book": { "name": "Book", "body": [] },
                "Author": { "name": "Author", "body": [] }
            },
            "relationships": [{ "type": "ManyToOne", "from": { "name": "Book" }, "to": { "name": "Author" } }]
        }"#,
    );

    let entities = JdlLoader::<RawJdl>::entities(&document).unwrap();

    assert_eq!(entities[0].relationships().len(), 1);
    assert!(entities[1].relationships().is_empty());
}

#[test]
fn JdlLoader___modules___follow_parser_order() {
    let document = raw(
        r#"{ "applications": {
            "billing": { "config": { "baseName": "billing" } },
            "crm": { "config": { "baseName": "crm" } }
        } }"#,
    );

    let modules = JdlLoader::<RawJdl>::modules(&document).unwrap();

    let names: Vec<&str> = modules.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["billing", "crm"]);
}
