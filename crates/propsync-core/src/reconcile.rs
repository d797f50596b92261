//! The reconciliation planner.
//!
//! Given one immutable snapshot, its symbol outline and the offset of the
//! triggering edit, the planner decides whether the destructured parameter
//! list needs to change and, if so, produces one atomic [`EditBatch`]
//! containing every insertion and deletion. All offsets in the batch
//! address the input snapshot; nothing here mutates text.
//!
//! Failure is always absence: any lookup that misses yields a
//! [`SkipReason`] and the pass is silently abandoned.

use crate::edit::{EditBatch, TextEdit};
use crate::outline::Outline;
use crate::params::{self, ParameterList};
use crate::scan::{find_from, find_token};
use crate::span::Span;

/// Why a reconciliation pass was abandoned without producing edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No symbol in the outline ends with the props suffix.
    NoPropsInterface,
    /// The triggering edit lies outside the props interface's range.
    EditOutsideInterface,
    /// The component named by the interface has no outline symbol.
    NoComponentSymbol,
    /// No destructured `{ ... }` pattern follows the component's name.
    NoParameterList,
}

impl SkipReason {
    /// Returns a short identifier for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoPropsInterface => "no-props-interface",
            Self::EditOutsideInterface => "edit-outside-interface",
            Self::NoComponentSymbol => "no-component-symbol",
            Self::NoParameterList => "no-parameter-list",
        }
    }
}

/// Result of planning one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The pass does not apply to this edit; nothing happens.
    Skipped(SkipReason),
    /// Declared and destructured names already agree; no edits, no format.
    InSync,
    /// Edits are required.
    Plan(ReconcilePlan),
}

/// The edits for one pass, plus the bookkeeping the apply/format phases
/// need afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilePlan {
    batch: EditBatch,
    props_list_start: usize,
    added: Vec<String>,
    removed: Vec<String>,
}

impl ReconcilePlan {
    /// Returns the atomic edit batch for the snapshot the plan was
    /// computed from.
    #[must_use]
    pub const fn batch(&self) -> &EditBatch {
        &self.batch
    }

    /// Returns the offset just past the parameter pattern's opening `{`.
    ///
    /// The formatting phase anchors its range recomputation here; the
    /// offset stays valid after the batch because every edit in the batch
    /// lands at or after it only within the list interior.
    #[must_use]
    pub const fn props_list_start(&self) -> usize {
        self.props_list_start
    }

    /// Returns the field names the plan inserts, in declaration order.
    #[must_use]
    pub fn added(&self) -> &[String] {
        &self.added
    }

    /// Returns the field names the plan deletes, in occurrence order.
    #[must_use]
    pub fn removed(&self) -> &[String] {
        &self.removed
    }
}

/// Plans one reconciliation pass.
///
/// Steps, in order, each aborting with a [`SkipReason`] on absence:
/// locate the props interface (first outline symbol ending in `suffix`),
/// require the edit offset strictly inside its range, derive the
/// component name by stripping the suffix, locate the component symbol,
/// extract the destructured list after its name, then diff declared
/// against destructured names.
#[must_use]
pub fn plan(text: &str, outline: &Outline, edit_offset: usize, suffix: &str) -> Outcome {
    let Some(interface) = outline.props_interface(suffix) else {
        return Outcome::Skipped(SkipReason::NoPropsInterface);
    };

    if !interface.range().contains_exclusive(edit_offset) {
        return Outcome::Skipped(SkipReason::EditOutsideInterface);
    }

    let declared = interface.child_names();

    let component_name = interface
        .name()
        .strip_suffix(suffix)
        .unwrap_or_else(|| interface.name());
    let Some(component) = outline.named(component_name) else {
        return Outcome::Skipped(SkipReason::NoComponentSymbol);
    };

    let Some(params) = params::extract(text, component.selection_range().end()) else {
        return Outcome::Skipped(SkipReason::NoParameterList);
    };

    let to_add: Vec<&str> = declared
        .iter()
        .filter(|name| !params.fields().iter().any(|field| field == *name))
        .copied()
        .collect();
    let to_remove: Vec<&str> = params
        .fields()
        .iter()
        .map(String::as_str)
        .filter(|field| !declared.contains(field))
        .collect();

    if to_add.is_empty() && to_remove.is_empty() {
        return Outcome::InSync;
    }

    let mut batch = EditBatch::new();
    push_insertions(&mut batch, &params, &to_add);
    push_deletions(&mut batch, text, &params, &to_remove);

    Outcome::Plan(ReconcilePlan {
        batch,
        props_list_start: params.list_start(),
        added: to_add.iter().map(|&n| n.to_owned()).collect(),
        removed: to_remove.iter().map(|&n| n.to_owned()).collect(),
    })
}

/// Appends one insertion per missing field, all at the list's closing
/// brace. The separator flag threads through the fold: only the first
/// insertion needs the conditional leading comma, every later one sees a
/// separator already present.
fn push_insertions(batch: &mut EditBatch, params: &ParameterList, to_add: &[&str]) {
    let mut separator_present = params.has_trailing_separator();
    for field in to_add {
        let lead = if separator_present { "" } else { "," };
        batch.push(TextEdit::insert(
            params.list_end(),
            format!("{lead}{field}, "),
        ));
        separator_present = true;
    }
}

/// Appends one deletion per stale field.
///
/// Each field is located with identifier-boundary search so one field
/// name never matches inside another. The deletion start extends back to
/// the most recent line start when that is nearer than the most recent
/// separator (a field alone on its own line takes its line break with
/// it); both backward scans stop at the list interior so a deletion can
/// never reach into the function header. The end is the nearer of
/// one-past-the-next-separator and the next closing brace, so a deletion
/// never crosses the list's end.
fn push_deletions(batch: &mut EditBatch, text: &str, params: &ParameterList, to_remove: &[&str]) {
    for field in to_remove {
        let Some(field_start) = find_token(text, field, params.list_start()) else {
            continue;
        };

        let prefix = text.get(params.list_start()..field_start);
        let rebase = |at: usize| at + params.list_start();
        let last_newline = prefix.and_then(|p| p.rfind('\n')).map(rebase);
        let last_separator = prefix.and_then(|p| p.rfind(',')).map(rebase);
        let del_start = match (last_newline, last_separator) {
            (Some(newline), Some(separator)) if newline > separator => newline,
            (Some(newline), None) => newline,
            _ => field_start,
        };

        let next_separator = find_from(text, ',', del_start).map(|at| at + 1);
        let next_close = find_from(text, '}', del_start);
        let del_end = match (next_separator, next_close) {
            (Some(separator), Some(close)) => separator.min(close),
            (None, Some(close)) => close,
            _ => continue,
        };

        batch.push(TextEdit::delete(Span::new(del_start, del_end)));
    }
}

/// Computes the range to re-format after a plan's batch has been applied.
///
/// `fresh_text` must be re-read after application; the closing brace has
/// usually moved. The span runs from the offset of the pattern's opening
/// brace through one past the recomputed closing brace.
#[must_use]
pub fn format_span_after(fresh_text: &str, props_list_start: usize) -> Option<Span> {
    let open = props_list_start.checked_sub(1)?;
    let close = find_from(fresh_text, '}', props_list_start)?;
    Some(Span::new(open, close + 1))
}
