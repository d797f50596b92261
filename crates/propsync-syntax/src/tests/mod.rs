//! Outline extraction tests over representative component files.

#![expect(clippy::expect_used, reason = "tests use expect for clarity")]

use propsync_core::Symbol;

use crate::{Parser, document_outline};

fn outline_of(source: &str) -> propsync_core::Outline {
    let mut parser = Parser::new().expect("parser init");
    let parse = parser.parse(source).expect("parse");
    document_outline(&parse)
}

#[test]
fn interface_members_become_children() {
    let source = "interface CardProps {\n  title: string;\n  onClose: () => void;\n}\n";
    let outline = outline_of(source);

    let interface = outline.props_interface("Props").expect("interface");
    assert_eq!(interface.name(), "CardProps");
    assert_eq!(interface.child_names(), vec!["title", "onClose"]);
}

#[test]
fn interface_range_covers_the_declaration() {
    let source = "const x = 1;\ninterface CardProps {\n  title: string;\n}\n";
    let outline = outline_of(source);

    let interface = outline.props_interface("Props").expect("interface");
    let declared = source
        .get(interface.range().start()..interface.range().end())
        .expect("range");
    assert!(declared.starts_with("interface CardProps"));
    assert!(declared.ends_with('}'));
}

#[test]
fn object_type_alias_members_become_children() {
    let source = "type ModalProps = {\n  open: boolean;\n  onDismiss: () => void;\n};\n";
    let outline = outline_of(source);

    let alias = outline.props_interface("Props").expect("type alias");
    assert_eq!(alias.name(), "ModalProps");
    assert_eq!(alias.child_names(), vec!["open", "onDismiss"]);
}

#[test]
fn exported_function_component_is_listed() {
    let source = "interface CardProps {\n  title: string;\n}\n\nexport default function Card({ title }: CardProps) {\n  return null;\n}\n";
    let outline = outline_of(source);

    let component = outline.named("Card").expect("component");
    let name = source
        .get(component.selection_range().start()..component.selection_range().end())
        .expect("selection");
    assert_eq!(name, "Card");
}

#[test]
fn selection_range_end_precedes_the_parameter_list() {
    let source = "export default function Card({ title }: CardProps) {}\n";
    let outline = outline_of(source);

    let component = outline.named("Card").expect("component");
    let after_name = source
        .get(component.selection_range().end()..)
        .expect("tail");
    assert!(after_name.starts_with("({"));
}

#[test]
fn arrow_component_declarator_is_listed() {
    let source = "const Card = ({ title }: CardProps) => <div>{title}</div>;\nexport default Card;\n";
    let outline = outline_of(source);

    let component = outline.named("Card").expect("component");
    let after_name = source
        .get(component.selection_range().end()..)
        .expect("tail");
    assert!(after_name.starts_with(" = ({"));
}

#[test]
fn exported_const_component_is_unwrapped() {
    let source = "export const Badge = ({ label }: BadgeProps) => null;\n";
    let outline = outline_of(source);
    assert!(outline.named("Badge").is_some());
}

#[test]
fn symbols_keep_document_order() {
    let source = "interface CardProps {\n  a: string;\n}\n\nfunction helper() {}\n\nexport default function Card({ a }: CardProps) {}\n";
    let outline = outline_of(source);

    let names: Vec<&str> = outline.symbols().iter().map(Symbol::name).collect();
    assert_eq!(names, vec!["CardProps", "helper", "Card"]);
}

#[test]
fn broken_source_still_yields_parsed_symbols() {
    // The component body is mid-edit, but the interface above parses.
    let source = "interface CardProps {\n  title: string;\n}\n\nexport default function Card({ title }: CardProps) {\n  return <div\n";
    let outline = outline_of(source);

    let interface = outline.props_interface("Props").expect("interface");
    assert_eq!(interface.child_names(), vec!["title"]);
}

#[test]
fn empty_source_yields_empty_outline() {
    assert!(outline_of("").is_empty());
}

#[test]
fn non_object_type_alias_has_no_children() {
    let source = "type Name = string;\n";
    let outline = outline_of(source);
    let alias = outline.named("Name").expect("alias");
    assert!(alias.children().is_empty());
}
