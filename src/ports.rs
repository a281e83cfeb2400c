//! Port traits — the boundary between the core and its collaborators.
//!
//! ```text
//!   Bus adapter ──▶ ControlChannel / sinks ──▶ DataStore / CommandBus
//! ```
//!
//! The pub/sub transport and the document database are external; the core
//! only ever sees these traits, injected at call sites. Adapters decide
//! transport, timeouts, and authentication.

use core::fmt;

use crate::events::{CommandEvent, DataPoint};

/// Identifier of a stored record, assigned by the store.
pub type DocId = String;

/// Revision token for a stored record. Attachment writes are keyed to the
/// revision current at write time.
pub type Revision = String;

// ───────────────────────────────────────────────────────────────
// Data store port (sinks → document database)
// ───────────────────────────────────────────────────────────────

/// Write capability against the document store.
///
/// Both calls perform synchronous network I/O from the core's point of
/// view; a slow call delays only the owning sink instance. Implementations
/// should impose a timeout to bound that delay.
pub trait DataStore {
    /// Persist a data-point record. Returns its assigned id and revision.
    fn create_record(&mut self, point: &DataPoint) -> Result<(DocId, Revision), StoreError>;

    /// Attach binary content to an existing record.
    fn attach_binary(
        &mut self,
        id: &str,
        revision: &str,
        name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<Revision, StoreError>;
}

// ───────────────────────────────────────────────────────────────
// Command bus port (controller → actuators)
// ───────────────────────────────────────────────────────────────

/// Outbound side of the pub/sub bus for actuator commands.
///
/// Publishing is fire-and-forget; delivery guarantees are the transport's
/// concern, not the controller's.
pub trait CommandBus {
    fn publish(&mut self, command: &CommandEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`DataStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached (connect failure, timeout).
    Unreachable,
    /// The write conflicted with a concurrent update (stale revision).
    Conflict,
    /// The store rejected the request; carries the server's response.
    Rejected(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable => write!(f, "store unreachable"),
            Self::Conflict => write!(f, "write conflict"),
            Self::Rejected(msg) => write!(f, "rejected: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}
