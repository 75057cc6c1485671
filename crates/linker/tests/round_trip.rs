//! End-to-end scenarios: collect, extract, link

use pretty_assertions::assert_eq;
use scriptdoc_collector::SourceCollector;
use scriptdoc_extractor::{DeclarationExtractor, SignatureExtractor};
use scriptdoc_linker::{link, DESTROY, IS_VALID, TYPE_NAME};
use scriptdoc_model::{Diagnostic, Diagnostics, ScriptDocs};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn run(root: &Path) -> (ScriptDocs, Diagnostics) {
    let sources = SourceCollector::collect(&[root.join("src")]);
    let signatures = SignatureExtractor::extract(&sources);
    let mut extraction = DeclarationExtractor::extract(&sources);
    let mut diagnostics = link(&mut extraction.docs, &signatures);
    diagnostics.append(extraction.diagnostics);
    (extraction.docs, diagnostics)
}

#[test]
fn minimal_class_links_header_signature() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "src/foo.h", "class Foo { int bar(int x); };\n");
    write(
        tmp.path(),
        "src/foo.cpp",
        "/// Does a thing.\nREGISTER_SCRIPT_CLASS(Foo)\n/// bar description\nREGISTER_SCRIPT_CLASS_FUNCTION(Foo, bar)\n",
    );

    let (docs, diagnostics) = run(tmp.path());

    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    assert_eq!(docs.classes().count(), 1);
    let (_, foo) = docs.find_class("Foo").unwrap();
    assert_eq!(foo.description, "Does a thing.");
    assert!(foo.create);

    let bar = foo.function("bar").unwrap();
    assert_eq!(bar.description, "bar description");
    assert_eq!(bar.parameters.as_deref(), Some("int x"));

    let names: Vec<_> = foo.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["bar", IS_VALID, DESTROY]);
    assert_eq!(foo.members.len(), 1);
    assert_eq!(foo.members[0].name, TYPE_NAME);
}

#[test]
fn subclass_of_undeclared_parent() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "src/child.cpp",
        "REGISTER_SCRIPT_SUBCLASS_NO_CREATE(Child, Parent)\n",
    );

    let (docs, diagnostics) = run(tmp.path());

    let (_, child) = docs.find_class("Child").unwrap();
    assert!(!child.create);
    assert_eq!(child.parent, None);
    assert!(child.functions.is_empty());
    assert!(child.members.is_empty());
    assert_eq!(
        diagnostics.iter().cloned().collect::<Vec<_>>(),
        vec![Diagnostic::UnresolvedParent {
            class: "Child".into(),
            parent: "Parent".into()
        }]
    );
}

#[test]
fn hierarchy_across_files_with_inherited_function_docs() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "src/spaceObject.h",
        "class SpaceObject\n{\npublic:\n    void setPosition(sf::Vector2f v);\n};\n",
    );
    write(
        tmp.path(),
        "src/spaceObject.cpp",
        "/// Base of everything.\nREGISTER_SCRIPT_CLASS_NO_CREATE(SpaceObject)\n{\n    REGISTER_SCRIPT_CLASS_FUNCTION(SpaceObject, setPosition);\n}\n",
    );
    write(
        tmp.path(),
        "src/zone.cpp",
        "REGISTER_SCRIPT_SUBCLASS(Zone, SpaceObject)\n{\n    /// Where the zone is.\n    REGISTER_SCRIPT_CLASS_FUNCTION(SpaceObject, setPosition);\n    REGISTER_SCRIPT_CLASS_FUNCTION(Zone, setColor);\n}\n",
    );

    let (docs, diagnostics) = run(tmp.path());

    let (object_id, object) = docs.find_class("SpaceObject").unwrap();
    let (zone_id, zone) = docs.find_class("Zone").unwrap();
    assert_eq!(zone.parent, Some(object_id));
    assert_eq!(object.children, vec![zone_id]);
    assert!(!object.create);

    let inherited = zone.function("setPosition").unwrap();
    assert_eq!(inherited.parameters.as_deref(), Some("sf::Vector2f v"));
    assert_eq!(inherited.origin_class.as_deref(), Some("SpaceObject"));
    assert_eq!(inherited.description, "Where the zone is.");

    assert_eq!(zone.function("setColor").unwrap().parameters, None);
    assert_eq!(
        diagnostics.iter().cloned().collect::<Vec<_>>(),
        vec![Diagnostic::MissingSignature {
            class: "Zone".into(),
            function: "setColor".into()
        }]
    );
}

#[test]
fn inline_body_call_does_not_shadow_declared_signature() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "src/ship.h",
        "class Ship\n{\n    bool isAlive() { return check(hull); }\n    void check(int threshold);\n};\n",
    );
    write(
        tmp.path(),
        "src/ship.cpp",
        "REGISTER_SCRIPT_CLASS(Ship)\nREGISTER_SCRIPT_CLASS_FUNCTION(Ship, check)\n",
    );

    let (docs, diagnostics) = run(tmp.path());

    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    let (_, ship) = docs.find_class("Ship").unwrap();
    assert_eq!(
        ship.function("check").unwrap().parameters.as_deref(),
        Some("int threshold")
    );
}
