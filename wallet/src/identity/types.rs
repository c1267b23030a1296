//! The [`Identity`] value and the errors raised while producing one.

use std::fmt;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::config::INVALID_SECRET_MESSAGE;
use crate::crypto::keys::{KeyError, WalletKeypair};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures of the identity codec.
///
/// `Decode` and `KeyDerivation` deliberately say nothing about which check
/// rejected the input. Front ends should show
/// [`user_message`](Self::user_message) and nothing more specific.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The secret text is not a valid encoded private key.
    #[error("secret is not a valid encoded private key")]
    Decode,

    /// The decoded bytes do not form a valid Ed25519 keypair.
    #[error("decoded secret does not form a valid keypair")]
    KeyDerivation,

    /// The OS entropy source failed. Fatal for key generation.
    #[error("cannot generate identity: {0}")]
    EntropyUnavailable(String),
}

impl IdentityError {
    /// True for the errors caused by bad user input.
    pub fn is_decode_class(&self) -> bool {
        matches!(self, IdentityError::Decode | IdentityError::KeyDerivation)
    }

    /// The text a front end should display for this error.
    pub fn user_message(&self) -> String {
        if self.is_decode_class() {
            INVALID_SECRET_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<KeyError> for IdentityError {
    fn from(err: KeyError) -> Self {
        match err {
            KeyError::EntropyUnavailable(reason) => IdentityError::EntropyUnavailable(reason),
            KeyError::InvalidPublicKey => IdentityError::KeyDerivation,
            KeyError::InvalidKeyLength { .. }
            | KeyError::InvalidEncoding
            | KeyError::KeypairMismatch => IdentityError::Decode,
        }
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// One wallet account: a public address and the secret that controls it.
///
/// Both fields are text in base58. The only way to get an `Identity` is
/// through [`codec::generate`](super::codec::generate) or
/// [`codec::restore`](super::codec::restore), so the two fields always belong
/// to the same keypair. There are no setters; switching accounts means
/// replacing the whole value.
///
/// The private key text is wiped from memory when the `Identity` is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    public_key: String,
    private_key: Zeroizing<String>,
}

impl Identity {
    pub(crate) fn from_keypair(keypair: &WalletKeypair) -> Self {
        let keypair_bytes = keypair.to_keypair_bytes();
        Self {
            public_key: keypair.public_key().to_base58(),
            private_key: Zeroizing::new(bs58::encode(keypair_bytes.as_slice()).into_string()),
        }
    }

    /// Base58 wallet address. Safe to display, copy and share.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Base58 `seed || public` secret.
    ///
    /// Render this only on explicit user request. See
    /// [`SecretVisibility`](super::redact::SecretVisibility).
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
