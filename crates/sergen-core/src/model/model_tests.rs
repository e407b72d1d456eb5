#![allow(non_snake_case)]

use super::*;

// Template parameter rendering

#[test]
fn declaration_list___no_parameters___is_empty() {
    assert_eq!(declaration_list(&[]), "");
}

#[test]
fn declaration_list___parameters___keep_declaration_order() {
    let params = vec![
        TemplateParameter::new("typename", "CELL"),
        TemplateParameter::new("int", "DIM"),
    ];

    assert_eq!(declaration_list(&params), ", typename CELL, int DIM");
}

#[test]
fn argument_list___no_parameters___has_no_angle_brackets() {
    assert_eq!(argument_list(&[]), "");
}

#[test]
fn argument_list___single_parameter___is_bracketed() {
    let params = vec![TemplateParameter::new("typename", "T")];

    assert_eq!(argument_list(&params), "<T>");
}

#[test]
fn argument_list___parameters___keep_declaration_order() {
    let params = vec![
        TemplateParameter::new("int", "DIM"),
        TemplateParameter::new("typename", "CELL"),
    ];

    assert_eq!(argument_list(&params), "<DIM, CELL>");
}

// ClassDescription

#[test]
fn ClassDescription___new___starts_empty() {
    let class = ClassDescription::new("Foo");

    assert_eq!(class.name, "Foo");
    assert!(class.members.is_empty());
    assert!(class.parents.is_empty());
    assert!(class.template_parameters.is_empty());
}

#[test]
fn ClassDescription___member_names___are_sorted() {
    let class = ClassDescription::new("Foo")
        .with_member("zeta", Member::default())
        .with_member("alpha", Member::typed("int"))
        .with_member("mu", Member::default());

    let names: Vec<&str> = class.member_names().collect();

    assert_eq!(names, vec!["alpha", "mu", "zeta"]);
}

#[test]
fn ClassDescription___parent_names___are_sorted_and_deduplicated() {
    let class = ClassDescription::new("Foo")
        .with_parent("Zed")
        .with_parent("Base")
        .with_parent("Zed");

    let names: Vec<&str> = class.parent_names().collect();

    assert_eq!(names, vec!["Base", "Zed"]);
}

#[test]
fn ClassDescription___qualified_type___plain_class_is_unparameterized() {
    let class = ClassDescription::new("LibGeoDecomp::Chronometer");

    assert_eq!(class.qualified_type(), "LibGeoDecomp::Chronometer");
}

#[test]
fn ClassDescription___qualified_type___template_class_lists_arguments() {
    let class = ClassDescription::new("Coord")
        .with_template_parameter("int", "DIM");

    assert_eq!(class.qualified_type(), "Coord<DIM>");
}

#[test]
fn ClassDescription___deserialize___reads_member_types_and_defaults() {
    let json = r#"{
        "name": "Foo",
        "members": { "b": { "type": "double" }, "a": {} }
    }"#;

    let class: ClassDescription = serde_json::from_str(json).unwrap();

    assert_eq!(class.members["b"], Member::typed("double"));
    assert_eq!(class.members["a"], Member::default());
    assert!(class.parents.is_empty());
    assert!(class.template_parameters.is_empty());
}
