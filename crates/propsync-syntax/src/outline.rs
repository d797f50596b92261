//! Symbol outline extraction from a parsed TSX tree.
//!
//! Walks the top level of a document and produces the
//! [`propsync_core::Outline`] shape the reconciler consumes: interface
//! declarations and object type aliases (their members become child
//! symbols), function declarations and `const` declarators (arrow
//! components), with `export` statements unwrapped.

use propsync_core::{Outline, Span, Symbol};

use crate::parser::ParseResult;

/// Produces the document outline for a parse result.
///
/// Extraction is best-effort: nodes without a readable name are skipped,
/// and a tree containing error nodes still yields the symbols that did
/// parse.
#[must_use]
pub fn document_outline(parse: &ParseResult) -> Outline {
    let mut symbols = Vec::new();
    let root = parse.root_node();
    let mut cursor = root.walk();
    for node in root.children(&mut cursor) {
        collect_symbol(node, parse.source(), &mut symbols);
    }
    Outline::new(symbols)
}

fn collect_symbol(node: tree_sitter::Node<'_>, source: &str, out: &mut Vec<Symbol>) {
    match node.kind() {
        "export_statement" => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                collect_symbol(child, source, out);
            }
        }
        "interface_declaration" => {
            if let Some(symbol) = declaration_with_members(node, source, "body") {
                out.push(symbol);
            }
        }
        "type_alias_declaration" => {
            if let Some(symbol) = declaration_with_members(node, source, "value") {
                out.push(symbol);
            }
        }
        "function_declaration" => {
            if let Some(symbol) = named_symbol(node, source) {
                out.push(symbol);
            }
        }
        "lexical_declaration" | "variable_declaration" => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                if child.kind() == "variable_declarator" {
                    if let Some(symbol) = named_symbol(child, source) {
                        out.push(symbol);
                    }
                }
            }
        }
        _ => {}
    }
}

/// Builds a symbol for a declaration whose member container sits in the
/// given field (`body` for interfaces, `value` for type aliases). Member
/// names become child symbols; non-object alias values simply yield no
/// children.
fn declaration_with_members(
    node: tree_sitter::Node<'_>,
    source: &str,
    members_field: &str,
) -> Option<Symbol> {
    let name_node = node.child_by_field_name("name")?;
    let name = text_of(name_node, source)?;

    let mut children = Vec::new();
    if let Some(container) = node.child_by_field_name(members_field) {
        let mut cursor = container.walk();
        for member in container.named_children(&mut cursor) {
            if !matches!(member.kind(), "property_signature" | "method_signature") {
                continue;
            }
            if let Some(member_symbol) = named_symbol(member, source) {
                children.push(member_symbol);
            }
        }
    }

    Some(Symbol::with_children(
        name,
        node_span(node),
        node_span(name_node),
        children,
    ))
}

/// Builds a leaf symbol whose name is read from `scope`'s `name` field,
/// ranging over `scope` with the name as selection range.
fn named_symbol(scope: tree_sitter::Node<'_>, source: &str) -> Option<Symbol> {
    let name_node = scope.child_by_field_name("name")?;
    let name = text_of(name_node, source)?;
    Some(Symbol::new(name, node_span(scope), node_span(name_node)))
}

fn text_of(node: tree_sitter::Node<'_>, source: &str) -> Option<String> {
    source.get(node.byte_range()).map(str::to_owned)
}

fn node_span(node: tree_sitter::Node<'_>) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}
