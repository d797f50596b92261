//! Literal text templates for the one-shot props scaffolding command.
//!
//! Everything here is pure and deterministic: given a component name the
//! builders return the exact text a host editor should insert. Templates
//! may carry the cursor placeholder understood by snippet-capable hosts.

/// Conventional suffix appended to a component name to form its props
/// interface name.
pub const PROPS_SUFFIX: &str = "Props";

/// Import statement inserted when the children marker is requested.
pub const REACT_NODE_IMPORT: &str = "import { ReactNode } from \"react\";\n";

/// Seed field declaring the conventional children prop.
pub const CHILDREN_SEED: &str = "children: ReactNode;";

/// Cursor placeholder understood by snippet-capable hosts.
pub const CURSOR_PLACEHOLDER: &str = "$0";

/// Builds the props interface declaration for a component.
///
/// Produces the opening line, one indented line per seed field (the
/// children marker first when requested), an indented cursor placeholder
/// line, the closing brace and a trailing blank line.
///
/// # Example
///
/// ```
/// use propsync_core::snippet::build_props_interface_snippet;
///
/// let snippet = build_props_interface_snippet("Card", false);
/// assert_eq!(snippet, "interface CardProps {\n  $0\n}\n\n");
/// ```
#[must_use]
pub fn build_props_interface_snippet(component_name: &str, with_children: bool) -> String {
    let mut lines = vec![CURSOR_PLACEHOLDER];
    if with_children {
        lines.insert(0, CHILDREN_SEED);
    }

    let body = lines
        .iter()
        .map(|line| format!("  {line}"))
        .collect::<Vec<String>>()
        .join("\n");

    format!("interface {component_name}{PROPS_SUFFIX} {{\n{body}\n}}\n\n")
}

/// Builds the empty destructured-parameter annotation for a component.
///
/// The scaffolder inserts this just past the parameter list's opening
/// parenthesis; reconciliation then fills the braces from the interface.
#[must_use]
pub fn build_parameter_annotation(component_name: &str) -> String {
    format!("{{ }}: {component_name}{PROPS_SUFFIX}")
}
