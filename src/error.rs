//! Unified error types for the GrowRig core.
//!
//! A single `Error` enum that every module converts into, keeping error
//! handling uniform at the bus-binding layer. Configuration errors are
//! fatal at startup; everything else is scoped to the triggering event —
//! the instance drops it and keeps processing.

use core::fmt;

use crate::ports::{DocId, StoreError};

/// Every fallible operation in the core funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid. Fatal at startup, never recovered.
    Config(&'static str),
    /// An image frame arrived with a pixel encoding the sink cannot handle.
    /// Fatal for that frame only; the sink keeps running.
    UnsupportedEncoding(String),
    /// An image frame's payload does not match its declared dimensions.
    BadFrame(&'static str),
    /// The data store rejected or failed a write. The event is dropped;
    /// there is no retry queue.
    Store(StoreError),
    /// The data-point record was written but its binary attachment was not.
    /// The orphan record is left in place.
    PartialPersistence {
        /// Id of the orphaned record.
        id: DocId,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::UnsupportedEncoding(enc) => {
                write!(f, "unsupported pixel encoding: {enc}")
            }
            Self::BadFrame(msg) => write!(f, "bad frame: {msg}"),
            Self::Store(e) => write!(f, "store: {e}"),
            Self::PartialPersistence { id } => {
                write!(f, "record {id} written but attachment failed")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
