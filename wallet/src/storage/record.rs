//! # Persisted Identity Record
//!
//! The on-disk shape of the session slot. One JSON object:
//!
//! ```text
//! { "schema_version": 1,
//!   "public_key":  "<base58 address>",
//!   "private_key": "<base58 seed||public>",
//!   "saved_at":    "<RFC 3339 timestamp>" }
//! ```
//!
//! JSON rather than bincode: the slot holds one small record, and a
//! self-describing format makes schema changes a matter of adding fields.
//! Every load re-derives the address from the stored secret, so a record
//! whose two keys disagree never turns back into an [`Identity`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

use super::StoreError;
use crate::config::RECORD_SCHEMA_VERSION;
use crate::identity::{codec, Identity};

/// Serialized form of one saved identity.
#[derive(Serialize, Deserialize)]
pub struct IdentityRecord {
    pub schema_version: u32,
    pub public_key: String,
    pub private_key: String,
    pub saved_at: DateTime<Utc>,
}

impl IdentityRecord {
    /// Snapshot an identity at the current time.
    pub fn new(identity: &Identity) -> Self {
        Self {
            schema_version: RECORD_SCHEMA_VERSION,
            public_key: identity.public_key().to_string(),
            private_key: identity.private_key().to_string(),
            saved_at: Utc::now(),
        }
    }

    /// Serialize to the bytes written into the slot.
    pub fn to_bytes(&self) -> Result<Zeroizing<Vec<u8>>, StoreError> {
        serde_json::to_vec(self)
            .map(Zeroizing::new)
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Parse slot bytes. Checks the schema version but not the keys; see
    /// [`into_identity`](Self::into_identity).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        let record: IdentityRecord =
            serde_json::from_slice(bytes).map_err(|e| StoreError::Serialization(e.to_string()))?;
        if record.schema_version != RECORD_SCHEMA_VERSION {
            return Err(StoreError::UnsupportedSchema {
                found: record.schema_version,
                expected: RECORD_SCHEMA_VERSION,
            });
        }
        Ok(record)
    }

    /// Rebuild the identity, refusing a record whose keys do not agree.
    pub fn into_identity(self) -> Result<Identity, StoreError> {
        let identity = codec::restore(&self.private_key).map_err(|_| StoreError::Corrupted)?;
        if identity.public_key() != self.public_key {
            return Err(StoreError::Corrupted);
        }
        Ok(identity)
    }
}

impl Drop for IdentityRecord {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_bytes_roundtrip() {
        let identity = codec::generate().unwrap();
        let bytes = IdentityRecord::new(&identity).to_bytes().unwrap();
        let restored = IdentityRecord::from_bytes(&bytes)
            .unwrap()
            .into_identity()
            .unwrap();
        assert_eq!(restored, identity);
    }

    #[test]
    fn test_record_carries_schema_version() {
        let identity = codec::generate().unwrap();
        let bytes = IdentityRecord::new(&identity).to_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["schema_version"], RECORD_SCHEMA_VERSION);
        assert_eq!(value["public_key"], identity.public_key());
        assert!(value["saved_at"].is_string());
    }

    #[test]
    fn test_future_schema_rejected() {
        let identity = codec::generate().unwrap();
        let mut record = IdentityRecord::new(&identity);
        record.schema_version = RECORD_SCHEMA_VERSION + 1;
        let bytes = record.to_bytes().unwrap();

        assert!(matches!(
            IdentityRecord::from_bytes(&bytes),
            Err(StoreError::UnsupportedSchema { found, expected })
                if found == RECORD_SCHEMA_VERSION + 1 && expected == RECORD_SCHEMA_VERSION
        ));
    }

    #[test]
    fn test_inconsistent_pair_rejected() {
        let a = codec::generate().unwrap();
        let b = codec::generate().unwrap();
        let mut record = IdentityRecord::new(&a);
        record.public_key = b.public_key().to_string();

        assert!(matches!(record.into_identity(), Err(StoreError::Corrupted)));
    }

    #[test]
    fn test_undecodable_secret_rejected() {
        let identity = codec::generate().unwrap();
        let mut record = IdentityRecord::new(&identity);
        record.private_key = "definitely not base58 0OIl".to_string();

        assert!(matches!(record.into_identity(), Err(StoreError::Corrupted)));
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(matches!(
            IdentityRecord::from_bytes(b"{not json"),
            Err(StoreError::Serialization(_))
        ));
    }
}
