//! # Identity Codec
//!
//! Turns keypairs into [`Identity`] values and back.
//!
//! | Field         | Bytes                       | Text          |
//! |---------------|-----------------------------|---------------|
//! | `public_key`  | Ed25519 public key (32)     | base58, 43-44 |
//! | `private_key` | seed (32) `\|\|` public (32) | base58, 86-88 |
//!
//! Generation and restoration are separate entry points. The first only
//! fails if the OS cannot supply entropy; the second parses untrusted text
//! and fails for ordinary bad input. Neither ever returns a key that was not
//! asked for: restoration either reproduces the exact bytes behind the text
//! or returns an error.
//!
//! The codec does not trim. `" abc"` and `"abc"` are different inputs, and
//! only the caller knows whether surrounding whitespace came from a text
//! field.

use zeroize::Zeroizing;

use super::types::{Identity, IdentityError};
use crate::config::MAX_ENCODED_SECRET_LENGTH;
use crate::crypto::keys::WalletKeypair;

/// Create a brand new identity from the OS CSPRNG.
pub fn generate() -> Result<Identity, IdentityError> {
    let keypair = WalletKeypair::generate().map_err(|e| {
        tracing::error!(error = %e, "entropy source unavailable, refusing to generate identity");
        IdentityError::from(e)
    })?;
    let identity = Identity::from_keypair(&keypair);
    tracing::debug!(public_key = %identity.public_key(), "generated identity");
    Ok(identity)
}

/// Rebuild an identity from its encoded private key.
///
/// Accepts exactly the text [`encode`] produces: base58 over 64 bytes whose
/// trailing 32 are the public key of the leading 32.
pub fn restore(secret: &str) -> Result<Identity, IdentityError> {
    if secret.len() > MAX_ENCODED_SECRET_LENGTH {
        return Err(IdentityError::Decode);
    }

    let bytes = Zeroizing::new(
        bs58::decode(secret)
            .into_vec()
            .map_err(|_| IdentityError::Decode)?,
    );
    let keypair = WalletKeypair::from_keypair_slice(&bytes)?;
    let identity = Identity::from_keypair(&keypair);

    // Base58 is canonical, so this only trips if the alphabet handling ever
    // changes underneath us.
    if identity.private_key() != secret {
        return Err(IdentityError::Decode);
    }

    tracing::debug!(public_key = %identity.public_key(), "restored identity");
    Ok(identity)
}

/// Textual form of an identity: `(public, private)`.
///
/// Pure and deterministic. The private half comes back in a buffer that is
/// wiped on drop.
pub fn encode(identity: &Identity) -> (String, Zeroizing<String>) {
    (
        identity.public_key().to_string(),
        Zeroizing::new(identity.private_key().to_string()),
    )
}
