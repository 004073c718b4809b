//! Component declaration tests

use lumber_domain::value_objects::{ComponentDeclaration, ElementType};

#[test]
fn test_declaration_from_toml_keeps_scalar_text() {
    let decl: ComponentDeclaration = toml::from_str(
        r#"
        type = "XMLLayout"
        [attributes]
        complete = true
        charset = "UTF-16"
        bufferSize = 512
        "#,
    )
    .expect("declaration should parse");

    assert_eq!(decl.type_name, "XMLLayout");
    assert_eq!(decl.attribute("complete"), Some("true"));
    assert_eq!(decl.attribute("charset"), Some("UTF-16"));
    assert_eq!(decl.attribute("buffersize"), Some("512"));
    assert!(decl.children.is_empty());
}

#[test]
fn test_nested_children_preserve_order() {
    let decl: ComponentDeclaration = toml::from_str(
        r#"
        type = "appenders"

        [[children]]
        type = "Memory"
        attributes = { name = "first" }

        [[children]]
        type = "Memory"
        attributes = { name = "second" }
        "#,
    )
    .expect("declaration should parse");

    let names: Vec<_> = decl
        .children
        .iter()
        .filter_map(|c| c.attribute("name"))
        .collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn test_builder_matches_parsed_form() {
    let built = ComponentDeclaration::new("Console")
        .with_attribute("name", "out")
        .with_child(ComponentDeclaration::new("XMLLayout"));
    assert_eq!(built.children.len(), 1);
    assert_eq!(built.children[0].type_name, "XMLLayout");
}

#[test]
fn test_element_type_names() {
    assert_eq!(ElementType::Layout.to_string(), "layout");
    assert_eq!(ElementType::Appenders.as_str(), "appenders");
}
