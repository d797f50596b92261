//! Pure data model and algorithms for props reconciliation.
//!
//! This crate keeps a React component's props interface and the
//! destructured parameter list of its component function in agreement. It
//! owns the parts that need no host editor and no parser:
//!
//! - **Scanning** via [`scan`] — locate the exported component, its
//!   definition line and its parameter list in a plain text snapshot
//! - **Scaffolding templates** via [`snippet`] — the literal text the
//!   one-shot "add props" command inserts
//! - **Edits** via [`TextEdit`] and [`EditBatch`] — atomic batches whose
//!   offsets all address one frozen snapshot
//! - **Planning** via [`reconcile::plan`] — diff the declared prop names
//!   against the destructured ones and emit the insertions and deletions
//!
//! Outline acquisition, edit application and range formatting belong to
//! the host; this crate only defines their data shapes ([`Outline`],
//! [`Symbol`], [`Span`]).
//!
//! # Example
//!
//! ```
//! use propsync_core::{Outline, Span, Symbol, reconcile};
//!
//! let text = "interface CardProps {\n  title: string;\n}\n\nexport default function Card({ }: CardProps) {}\n";
//! let title_at = text.find("title").unwrap();
//! let outline = Outline::new(vec![
//!     Symbol::with_children(
//!         "CardProps",
//!         Span::new(0, 41),
//!         Span::new(10, 19),
//!         vec![Symbol::new("title", Span::new(title_at, title_at + 14), Span::new(title_at, title_at + 5))],
//!     ),
//!     Symbol::new("Card", Span::new(43, text.len()), Span::new(text.find("Card(").unwrap(), text.find("Card(").unwrap() + 4)),
//! ]);
//!
//! // An edit inside the interface triggers planning.
//! let outcome = reconcile::plan(text, &outline, title_at, "Props");
//! assert!(matches!(outcome, reconcile::Outcome::Plan(_)));
//! ```

pub mod edit;
pub mod outline;
pub mod params;
pub mod reconcile;
pub mod scan;
pub mod snippet;
pub mod span;

pub use edit::{EditBatch, TextEdit};
pub use outline::{Outline, Symbol};
pub use params::ParameterList;
pub use reconcile::{Outcome, ReconcilePlan, SkipReason};
pub use snippet::PROPS_SUFFIX;
pub use span::Span;

#[cfg(test)]
mod tests;
