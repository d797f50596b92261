//! Text scanners for locating the exported component in a snapshot.
//!
//! These routines operate on a plain string snapshot and never consult a
//! parse tree, because during active editing a valid tree is not
//! guaranteed. Every lookup that cannot find its target returns `None`
//! rather than an error; the caller treats absence as "nothing to do".

const EXPORT_DEFAULT: &str = "export default ";
const FUNCTION_KEYWORD: &str = "function ";

/// Returns whether `c` can appear in a JavaScript identifier.
pub(crate) const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Finds the name of the default-exported component.
///
/// Matches `export default`, optionally followed by the `function`
/// keyword, followed by an identifier. Identifiers that are empty or do
/// not begin with an uppercase letter are rejected (component-name
/// convention), yielding `None`.
///
/// # Example
///
/// ```
/// use propsync_core::scan::find_component_name;
///
/// let text = "export default function Card({ title }: CardProps) {}";
/// assert_eq!(find_component_name(text), Some("Card"));
/// assert_eq!(find_component_name("export default useThing"), None);
/// ```
#[must_use]
pub fn find_component_name(text: &str) -> Option<&str> {
    let after_export = text.find(EXPORT_DEFAULT)? + EXPORT_DEFAULT.len();
    let rest = text.get(after_export..)?;
    let candidate = rest.strip_prefix(FUNCTION_KEYWORD).unwrap_or(rest);

    let name_len = candidate
        .find(|c: char| !is_ident_char(c))
        .unwrap_or(candidate.len());
    let name = candidate.get(..name_len)?;

    let first = name.chars().next()?;
    first.is_ascii_uppercase().then_some(name)
}

/// Finds the start-of-line offset of the component's definition.
///
/// Looks for `function <name>(` and `<name> = (` and prefers whichever
/// occurs later in the text; in practice the later match is the actual
/// definition rather than an import or reference. Returns `None` when
/// neither form occurs.
#[must_use]
pub fn find_definition_line_start(text: &str, name: &str) -> Option<usize> {
    let function_form = format!("{FUNCTION_KEYWORD}{name}(");
    let assignment_form = format!("{name} = (");

    let at = match (text.find(&function_form), text.find(&assignment_form)) {
        (Some(a), Some(b)) => a.max(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return None,
    };

    let line_start = text
        .get(..at)
        .and_then(|prefix| prefix.rfind('\n'))
        .map_or(0, |newline| newline + 1);
    Some(line_start)
}

/// Returns the offset just past the first `(` at or after `from`.
#[must_use]
pub fn find_parameter_list_open(text: &str, from: usize) -> Option<usize> {
    find_from(text, '(', from).map(|open| open + 1)
}

/// Returns the offset of the first occurrence of `needle` at or after
/// `from`, or `None` when absent or when `from` is out of bounds.
pub(crate) fn find_from(text: &str, needle: char, from: usize) -> Option<usize> {
    text.get(from..)?.find(needle).map(|rel| from + rel)
}

/// Finds `token` at or after `from`, requiring identifier boundaries on
/// both sides so that `id` never matches inside `userId`.
pub(crate) fn find_token(text: &str, token: &str, from: usize) -> Option<usize> {
    if token.is_empty() {
        return None;
    }

    let mut search = from;
    while let Some(rel) = text.get(search..)?.find(token) {
        let at = search + rel;
        let boundary_before = text
            .get(..at)
            .and_then(|prefix| prefix.chars().next_back())
            .is_none_or(|c| !is_ident_char(c));
        let boundary_after = text
            .get(at + token.len()..)
            .and_then(|suffix| suffix.chars().next())
            .is_none_or(|c| !is_ident_char(c));
        if boundary_before && boundary_after {
            return Some(at);
        }
        search = at + token.len();
    }
    None
}
