//! One-shot props scaffolding.
//!
//! Creates the props interface and the empty parameter annotation for a
//! component that has neither. Unlike reconciliation this is a
//! user-invoked command, so failures are reported through the host's
//! error notification as well as returned.

use thiserror::Error;

use propsync_core::scan;
use propsync_core::snippet::{
    REACT_NODE_IMPORT, build_parameter_annotation, build_props_interface_snippet,
};

use crate::event::DocumentId;
use crate::host::DocumentHost;

/// Failures the scaffolding command reports to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScaffoldError {
    /// The document is not open in the host.
    #[error("no active document")]
    NoDocument,

    /// No default-exported, uppercase-named component was found.
    #[error("could not find component name")]
    ComponentNameNotFound,

    /// The component's definition line was not found.
    #[error("could not find component location")]
    ComponentLocationNotFound,

    /// The definition has no parameter list to annotate.
    #[error("could not find component parameter list")]
    ParameterListNotFound,

    /// The host rejected a template insertion.
    #[error("could not insert the props template")]
    InsertRejected,
}

/// Scaffolds the props interface and parameter annotation for the
/// document's exported component, optionally seeding the children marker
/// (which also inserts the `ReactNode` import).
///
/// # Errors
///
/// Returns the failure after reporting it through the host's error
/// notification. No edits are applied when the component cannot be
/// located.
pub fn add_props<H: DocumentHost>(
    host: &mut H,
    document: &DocumentId,
    with_children: bool,
) -> Result<(), ScaffoldError> {
    let result = try_add_props(host, document, with_children);
    if let Err(error) = &result {
        tracing::debug!(document = %document, %error, "scaffolding failed");
        host.show_error(&error.to_string());
    }
    result
}

fn try_add_props<H: DocumentHost>(
    host: &mut H,
    document: &DocumentId,
    with_children: bool,
) -> Result<(), ScaffoldError> {
    let text = host.snapshot(document).ok_or(ScaffoldError::NoDocument)?;

    let name = scan::find_component_name(&text)
        .ok_or(ScaffoldError::ComponentNameNotFound)?
        .to_owned();
    let mut definition_start = scan::find_definition_line_start(&text, &name)
        .ok_or(ScaffoldError::ComponentLocationNotFound)?;

    if with_children {
        if !host.insert_template(document, 0, REACT_NODE_IMPORT) {
            return Err(ScaffoldError::InsertRejected);
        }
        // Everything after the import shifted by its length.
        definition_start += REACT_NODE_IMPORT.len();
    }

    // Re-read: the import insertion invalidated the first snapshot.
    let refreshed = host.snapshot(document).ok_or(ScaffoldError::NoDocument)?;
    let annotation_at = scan::find_parameter_list_open(&refreshed, definition_start)
        .ok_or(ScaffoldError::ParameterListNotFound)?;
    if !host.insert_template(document, annotation_at, &build_parameter_annotation(&name)) {
        return Err(ScaffoldError::InsertRejected);
    }

    // The annotation landed after the definition line start, so that
    // offset is still valid for the interface block.
    let snippet = build_props_interface_snippet(&name, with_children);
    if !host.insert_template(document, definition_start, &snippet) {
        return Err(ScaffoldError::InsertRejected);
    }

    Ok(())
}
