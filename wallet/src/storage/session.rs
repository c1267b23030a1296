//! # Session Store
//!
//! A single slot holding the identity that is currently signed in.
//!
//! Two backends share the [`SessionStore`] trait:
//!
//! - [`SledSessionStore`] keeps the slot in an embedded sled database so it
//!   survives restarts. Every write is flushed before returning.
//! - [`MemorySessionStore`] keeps it in process. Tests inject it wherever a
//!   store is needed.
//!
//! Both store the same serialized [`IdentityRecord`], so a record read back
//! from either goes through the same schema and consistency checks.
//!
//! ## Semantics
//!
//! - `save` overwrites. There is at most one current identity, last write
//!   wins, nothing is merged.
//! - `load` distinguishes "nothing saved" (`Ok(None)`) from "could not read"
//!   (`Err`). Callers must not treat an error as an empty slot.
//! - `clear` is idempotent.
//!
//! Each call is atomic on its own. A `load`-then-`save` sequence is not, and
//! callers that interleave writers need their own serialization.

use parking_lot::Mutex;
use sled::{Db, Tree};
use std::path::Path;
use zeroize::Zeroizing;

use super::record::IdentityRecord;
use super::StoreResult;
use crate::config::{SESSION_SLOT_KEY, SESSION_TREE};
use crate::identity::Identity;

/// Persistence for the active identity.
pub trait SessionStore: Send + Sync {
    /// Persist `identity`, replacing whatever was saved before.
    fn save(&self, identity: &Identity) -> StoreResult<()>;

    /// The saved identity, or `None` if the slot is empty.
    fn load(&self) -> StoreResult<Option<Identity>>;

    /// Empty the slot. Clearing an empty slot is not an error.
    fn clear(&self) -> StoreResult<()>;
}

fn decode_slot(bytes: &[u8]) -> StoreResult<Identity> {
    IdentityRecord::from_bytes(bytes)?.into_identity()
}

// ---------------------------------------------------------------------------
// SledSessionStore
// ---------------------------------------------------------------------------

/// Durable session slot backed by sled.
///
/// | Tree      | Key               | Value                  |
/// |-----------|-------------------|------------------------|
/// | `session` | `active_identity` | `json(IdentityRecord)` |
///
/// Not encrypted at rest. Anyone who can read the data directory can read
/// the secret.
#[derive(Debug, Clone)]
pub struct SledSessionStore {
    db: Db,
    session: Tree,
}

impl SledSessionStore {
    /// Open or create the store at `path`.
    ///
    /// sled holds an exclusive lock on the directory, so only one handle per
    /// path can be open at a time. Drop the old handle before reopening.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let db = sled::open(path)?;
        Self::from_db(db)
    }

    /// An in-memory sled instance removed when dropped.
    pub fn open_temporary() -> StoreResult<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db)
    }

    fn from_db(db: Db) -> StoreResult<Self> {
        let session = db.open_tree(SESSION_TREE)?;
        Ok(Self { db, session })
    }
}

impl SessionStore for SledSessionStore {
    fn save(&self, identity: &Identity) -> StoreResult<()> {
        let bytes = IdentityRecord::new(identity).to_bytes()?;
        self.session.insert(SESSION_SLOT_KEY, bytes.as_slice())?;
        self.db.flush()?;
        tracing::info!(public_key = %identity.public_key(), "session identity saved");
        Ok(())
    }

    fn load(&self) -> StoreResult<Option<Identity>> {
        match self.session.get(SESSION_SLOT_KEY)? {
            Some(bytes) => {
                let identity = decode_slot(&bytes).map_err(|e| {
                    tracing::warn!(error = %e, "stored session identity is unreadable");
                    e
                })?;
                Ok(Some(identity))
            }
            None => Ok(None),
        }
    }

    fn clear(&self) -> StoreResult<()> {
        if self.session.remove(SESSION_SLOT_KEY)?.is_some() {
            tracing::info!("session identity cleared");
        }
        self.db.flush()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemorySessionStore
// ---------------------------------------------------------------------------

/// Process-local session slot.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<Zeroizing<Vec<u8>>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, identity: &Identity) -> StoreResult<()> {
        let bytes = IdentityRecord::new(identity).to_bytes()?;
        *self.slot.lock() = Some(bytes);
        Ok(())
    }

    fn load(&self) -> StoreResult<Option<Identity>> {
        self.slot
            .lock()
            .as_ref()
            .map(|bytes| decode_slot(bytes))
            .transpose()
    }

    fn clear(&self) -> StoreResult<()> {
        self.slot.lock().take();
        Ok(())
    }
}

impl std::fmt::Debug for MemorySessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySessionStore")
            .field("occupied", &self.slot.lock().is_some())
            .finish()
    }
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn save(&self, identity: &Identity) -> StoreResult<()> {
        (**self).save(identity)
    }

    fn load(&self) -> StoreResult<Option<Identity>> {
        (**self).load()
    }

    fn clear(&self) -> StoreResult<()> {
        (**self).clear()
    }
}
