//! Byte-offset span type for locating text regions in a snapshot.

use serde::{Deserialize, Serialize};

/// A half-open byte range in a UTF-8 source snapshot.
///
/// `start` is inclusive and `end` is exclusive. Spans always address one
/// specific snapshot; applying any edit to the snapshot invalidates every
/// span computed from it.
///
/// # Example
///
/// ```
/// use propsync_core::Span;
///
/// let span = Span::new(4, 10);
/// assert_eq!(span.start(), 4);
/// assert_eq!(span.len(), 6);
/// assert!(span.contains_exclusive(5));
/// assert!(!span.contains_exclusive(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span from byte offsets.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at a single offset.
    #[must_use]
    pub const fn at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns the inclusive start byte offset.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the exclusive end byte offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the span length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns whether the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns whether `offset` lies strictly between the span's ends.
    ///
    /// Both bounds are exclusive: an offset equal to `start` or `end` is
    /// outside. The reconciliation trigger check relies on this, so an edit
    /// exactly on a declaration's braces never starts a pass.
    #[must_use]
    pub const fn contains_exclusive(&self, offset: usize) -> bool {
        self.start < offset && offset < self.end
    }
}
