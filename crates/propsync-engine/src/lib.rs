//! Debounced props reconciliation over pluggable host seams.
//!
//! This crate drives the synchronization pipeline: host edit events are
//! debounced per document, evaluated against a Tree-sitter outline, and
//! turned into atomic edit batches plus a range re-format — the
//! "props interface is the source of truth" workflow:
//!
//! - [`SyncEngine`] — the state machine: record events, tick, run passes
//! - [`DocumentHost`] / [`OutlineSource`] — the host editor seams
//! - [`TreeSitterOutlineSource`] — the parser-backed outline capability
//! - [`scaffold`] / [`Command`] — the one-shot "add props" commands
//! - [`MemoryHost`] (feature `test-support`) — an in-memory host with a
//!   deterministic formatter
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use propsync_engine::{
//!     ContentChange, DocumentId, EditEvent, EngineConfig, MemoryHost, SyncEngine,
//!     TreeSitterOutlineSource,
//! };
//! use propsync_core::Span;
//!
//! let mut host = MemoryHost::new();
//! let doc = DocumentId::new("Card.tsx");
//! host.open(
//!     doc.clone(),
//!     "interface CardProps {\n  title: string;\n}\n\nexport default function Card({ }: CardProps) {}\n",
//! );
//!
//! let outline = TreeSitterOutlineSource::new().unwrap();
//! let mut engine = SyncEngine::new(EngineConfig::default(), host, outline);
//!
//! // The user just finished typing `title: string;` inside the interface.
//! let edit_at = 24;
//! let now = Instant::now();
//! engine.on_did_change(
//!     EditEvent::new(doc.clone(), vec![ContentChange::new(Span::at(edit_at), ";")], 1),
//!     now,
//! );
//! let outcomes = engine.tick(now + Duration::from_millis(500));
//! assert_eq!(outcomes.len(), 1);
//! assert!(
//!     engine.host().text(&doc).unwrap().contains("{ title }: CardProps")
//! );
//! ```

mod commands;
mod debounce;
mod engine;
mod event;
mod host;
mod provider;
pub mod scaffold;

#[cfg(any(test, feature = "test-support"))]
mod testing;

pub use commands::{Command, execute};
pub use debounce::DebounceScheduler;
pub use engine::{EngineConfig, PassOutcome, SyncEngine};
pub use event::{ContentChange, DocumentId, EditEvent};
pub use host::{DocumentHost, OutlineSource};
pub use provider::TreeSitterOutlineSource;
pub use scaffold::ScaffoldError;

#[cfg(any(test, feature = "test-support"))]
pub use testing::MemoryHost;
