//! # Cryptographic Primitives
//!
//! Thin, typed wrappers over `ed25519-dalek`. Nothing here implements curve
//! arithmetic; it only decides which bytes go where and refuses anything
//! that does not check out.

pub mod keys;

pub use keys::{KeyError, WalletKeypair, WalletPublicKey};
