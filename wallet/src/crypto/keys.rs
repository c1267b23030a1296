//! # Key Management
//!
//! Ed25519 keypair generation and byte-level (de)serialization for wallet
//! identities.
//!
//! A wallet keypair is exported as 64 bytes: the 32-byte secret seed followed
//! by the 32-byte public key. The trailing public half is redundant (it can
//! always be re-derived from the seed), which is exactly what makes it useful
//! on import: if the derived key disagrees with the embedded one, the input
//! was damaged and we refuse it instead of handing back some other valid key.
//!
//! ## Security considerations
//!
//! - Seeds come from `OsRng`. We call `try_fill_bytes` so that a broken
//!   entropy source surfaces as [`KeyError::EntropyUnavailable`] rather than
//!   a panic deep inside the RNG.
//! - Signing keys are zeroized on drop by ed25519-dalek; every intermediate
//!   seed or keypair buffer we create is wrapped in [`Zeroizing`].
//! - Key bytes are never logged, and `Debug` only ever prints the public half.

use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::config::{KEYPAIR_LENGTH, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};

/// Errors that can occur during key operations.
///
/// None of the variants carry key bytes, and the messages stay vague about
/// the material itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("system entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid key encoding")]
    InvalidEncoding,

    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,

    #[error("keypair validation failed: public key does not match secret key")]
    KeypairMismatch,
}

/// An Ed25519 keypair backing one wallet identity.
///
/// Like any private key holder, this type does not implement `Serialize`.
/// Exporting it is an explicit call to
/// [`to_keypair_bytes`](Self::to_keypair_bytes).
pub struct WalletKeypair {
    signing_key: SigningKey,
}

/// The public half of a wallet identity. Its base58 form is the address.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WalletPublicKey {
    bytes: [u8; PUBLIC_KEY_LENGTH],
}

impl WalletKeypair {
    /// Generate a fresh keypair from the OS cryptographic RNG.
    ///
    /// There is no seeded variant on purpose: nothing the caller passes in
    /// can influence the key. An RNG failure is returned, not retried.
    pub fn generate() -> Result<Self, KeyError> {
        let mut seed = Zeroizing::new([0u8; SECRET_KEY_LENGTH]);
        OsRng
            .try_fill_bytes(seed.as_mut_slice())
            .map_err(|e| KeyError::EntropyUnavailable(e.to_string()))?;
        Ok(Self::from_seed(&seed))
    }

    /// Builds a keypair from a 32-byte Ed25519 seed.
    ///
    /// Every 32-byte string is a valid Ed25519 seed, so this cannot fail.
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Reconstruct a keypair from its 64-byte `seed || public` export.
    ///
    /// The public half is checked twice: it has to decode to a curve point,
    /// and it has to equal the key derived from the seed.
    pub fn from_keypair_bytes(bytes: &[u8; KEYPAIR_LENGTH]) -> Result<Self, KeyError> {
        let embedded = WalletPublicKey::try_from_slice(&bytes[SECRET_KEY_LENGTH..])?;

        let mut seed = Zeroizing::new([0u8; SECRET_KEY_LENGTH]);
        seed.copy_from_slice(&bytes[..SECRET_KEY_LENGTH]);
        let keypair = Self::from_seed(&seed);

        if keypair.public_key() != embedded {
            return Err(KeyError::KeypairMismatch);
        }
        Ok(keypair)
    }

    /// Same as [`from_keypair_bytes`](Self::from_keypair_bytes) but accepts
    /// a slice of any length and rejects anything other than 64 bytes.
    pub fn from_keypair_slice(slice: &[u8]) -> Result<Self, KeyError> {
        if slice.len() != KEYPAIR_LENGTH {
            return Err(KeyError::InvalidKeyLength {
                expected: KEYPAIR_LENGTH,
                actual: slice.len(),
            });
        }
        let mut bytes = Zeroizing::new([0u8; KEYPAIR_LENGTH]);
        bytes.copy_from_slice(slice);
        Self::from_keypair_bytes(&bytes)
    }

    /// Export the 64-byte `seed || public` form.
    ///
    /// This is the whole secret. The buffer wipes itself when dropped, but
    /// anything you copy it into is your problem.
    pub fn to_keypair_bytes(&self) -> Zeroizing<[u8; KEYPAIR_LENGTH]> {
        let mut out = Zeroizing::new([0u8; KEYPAIR_LENGTH]);
        let seed = Zeroizing::new(self.signing_key.to_bytes());
        out[..SECRET_KEY_LENGTH].copy_from_slice(seed.as_slice());
        out[SECRET_KEY_LENGTH..].copy_from_slice(&self.public_key_bytes());
        out
    }

    /// Returns the public key associated with this keypair.
    pub fn public_key(&self) -> WalletPublicKey {
        WalletPublicKey {
            bytes: self.public_key_bytes(),
        }
    }

    /// Raw public key bytes (32 bytes).
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }
}

impl Clone for WalletKeypair {
    fn clone(&self) -> Self {
        let seed = Zeroizing::new(self.signing_key.to_bytes());
        Self::from_seed(&seed)
    }
}

impl fmt::Debug for WalletKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Public half only. A partial secret is still a leaked secret.
        write!(f, "WalletKeypair(pub={})", self.public_key().to_base58())
    }
}

impl PartialEq for WalletKeypair {
    /// Keypairs compare by public key. Comparing secrets with `==` is not a
    /// habit worth building.
    fn eq(&self, other: &Self) -> bool {
        self.public_key_bytes() == other.public_key_bytes()
    }
}

impl Eq for WalletKeypair {}

// ---------------------------------------------------------------------------
// WalletPublicKey
// ---------------------------------------------------------------------------

impl WalletPublicKey {
    /// Try to create a `WalletPublicKey` from a byte slice.
    ///
    /// Checks the length and that the bytes decompress to a point on the
    /// curve. Not every 32-byte string does.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; PUBLIC_KEY_LENGTH] =
            slice.try_into().map_err(|_| KeyError::InvalidKeyLength {
                expected: PUBLIC_KEY_LENGTH,
                actual: slice.len(),
            })?;
        VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { bytes })
    }

    /// Parse a base58 address.
    pub fn from_base58(s: &str) -> Result<Self, KeyError> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|_| KeyError::InvalidEncoding)?;
        Self::try_from_slice(&bytes)
    }

    /// Base58 form. 43 or 44 characters.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.bytes).into_string()
    }
}

impl fmt::Display for WalletPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for WalletPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WalletPublicKey({})", self.to_base58())
    }
}
