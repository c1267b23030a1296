//! # Storage Module
//!
//! Persistence for the signed-in wallet identity.
//!
//! ```text
//! record.rs  — IdentityRecord, the versioned JSON shape of the slot
//! session.rs — SessionStore trait, sled and in-memory backends
//! ```
//!
//! The store is a durable key/value slot on the local device, not a vault.
//! The secret is written in the clear; encrypting the slot is the obvious
//! next step and would slot in behind the same trait.

pub mod record;
pub mod session;

pub use record::IdentityRecord;
pub use session::{MemorySessionStore, SessionStore, SledSessionStore};

/// Errors from the session store.
///
/// An empty slot is not one of these; `load` reports it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage backend failed. Usually transient; retrying `save` or
    /// `clear` is always safe.
    #[error("storage I/O error: {0}")]
    Io(#[from] sled::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// The slot was written by a newer (or unknown) schema.
    #[error("unsupported identity record schema {found} (expected {expected})")]
    UnsupportedSchema { found: u32, expected: u32 },

    /// The slot holds a record whose keys do not decode or do not agree.
    #[error("stored identity record is corrupted")]
    Corrupted,
}

pub type StoreResult<T> = Result<T, StoreError>;
