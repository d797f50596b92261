//! User-invocable command surface.
//!
//! Two actions, both delegating to the scaffolding service. Hosts
//! register these under [`Command::id`] and dispatch through
//! [`execute`].

use crate::event::DocumentId;
use crate::host::DocumentHost;
use crate::scaffold::{self, ScaffoldError};

/// The commands a host can register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Scaffold an empty props interface.
    AddProps,
    /// Scaffold a props interface seeded with the children marker.
    AddPropsWithChildren,
}

impl Command {
    /// Returns the host-facing command identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::AddProps => "propsync.addProps",
            Self::AddPropsWithChildren => "propsync.addPropsWithChildren",
        }
    }

    /// Returns whether the command seeds the children marker.
    #[must_use]
    pub const fn with_children(self) -> bool {
        matches!(self, Self::AddPropsWithChildren)
    }
}

/// Executes a command against the active document.
///
/// # Errors
///
/// Propagates the scaffolding failure after it has been reported to the
/// user through the host.
pub fn execute<H: DocumentHost>(
    command: Command,
    host: &mut H,
    document: &DocumentId,
) -> Result<(), ScaffoldError> {
    scaffold::add_props(host, document, command.with_children())
}
