//! # Identity Module
//!
//! Wallet identity management. Every account is an Ed25519 keypair; its
//! base58 public key is the address users share, and the base58
//! `seed || public` export is the secret they back up and paste back in.
//!
//! The module is layered:
//!
//! 1. **Types** — [`Identity`], the immutable pair of encoded keys, and
//!    [`IdentityError`].
//! 2. **Codec** — [`codec::generate`], [`codec::restore`] and
//!    [`codec::encode`]. The only constructors of an `Identity`.
//! 3. **Redaction** — [`redact::mask`] and [`SecretVisibility`] for front
//!    ends that need to put the secret on screen.
//!
//! ## Design Decisions
//!
//! - The secret format matches what Solana wallets export, so a key copied
//!   out of another wallet restores here unchanged.
//! - The embedded public half doubles as a checksum. Base58 has none of its
//!   own, and without it a typo would quietly restore a different wallet.

pub mod codec;
pub mod redact;
pub mod types;

pub use codec::{encode, generate, restore};
pub use redact::{mask, SecretVisibility};
pub use types::{Identity, IdentityError};
