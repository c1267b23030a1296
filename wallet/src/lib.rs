// Copyright (c) 2026 Lilypad Contributors. MIT License.
// See LICENSE for details.

//! # Lilypad Wallet — Identity Core
//!
//! Everything a wallet onboarding screen needs that is not a button: making
//! a new keypair, turning it into text a person can copy, taking that text
//! back, and remembering who is signed in.
//!
//! ## Architecture
//!
//! - **crypto** — Ed25519 keypairs and their 64-byte export format.
//! - **identity** — The [`Identity`](identity::Identity) value, the base58
//!   codec that creates and restores it, and redaction for display.
//! - **storage** — The single-slot session store (sled or in-memory).
//! - **onboarding** — Create / sign in / sign out, composed from the above.
//! - **config** — Constants.
//!
//! ## Ground rules
//!
//! 1. Secrets never reach a log line, a `Debug` string, or an error message.
//! 2. Bad input is a typed error. Nothing in here panics on user text.
//! 3. Secret buffers are zeroized on drop.

pub mod config;
pub mod crypto;
pub mod identity;
pub mod onboarding;
pub mod storage;

pub use identity::{Identity, IdentityError, SecretVisibility};
pub use onboarding::{Onboarding, OnboardingError};
pub use storage::{MemorySessionStore, SessionStore, SledSessionStore, StoreError};
