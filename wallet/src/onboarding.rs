//! # Onboarding
//!
//! The create / sign-in / sign-out flow a wallet front end drives, built from
//! the codec and a [`SessionStore`].
//!
//! ```text
//! create()   ──► codec::generate ──► store.save ──► Identity
//! sign_in(s) ──► trim ──► codec::restore ──► store.save ──► Identity
//! current()  ──► store.load
//! sign_out() ──► store.clear
//! ```
//!
//! The store is held by value. Pass an `Arc<S>` if several owners need the
//! same slot.

use thiserror::Error;

use crate::config::{INVALID_SECRET_MESSAGE, MISSING_SECRET_MESSAGE};
use crate::identity::{codec, Identity, IdentityError};
use crate::storage::{SessionStore, StoreError};

/// Errors surfaced to a front end.
#[derive(Debug, Error)]
pub enum OnboardingError {
    /// The secret field was empty or whitespace only.
    #[error("no private key supplied")]
    MissingSecret,

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl OnboardingError {
    /// The text to show the user. Every flavor of bad secret gets the same
    /// message.
    pub fn user_message(&self) -> String {
        match self {
            OnboardingError::MissingSecret => MISSING_SECRET_MESSAGE.to_string(),
            OnboardingError::Identity(e) if e.is_decode_class() => {
                INVALID_SECRET_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Drives identity creation and restoration against one session slot.
#[derive(Debug)]
pub struct Onboarding<S> {
    store: S,
}

impl<S: SessionStore> Onboarding<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Generate a new wallet and make it the active identity.
    pub fn create(&self) -> Result<Identity, OnboardingError> {
        let identity = codec::generate()?;
        self.store.save(&identity)?;
        tracing::info!(public_key = %identity.public_key(), "new wallet created");
        Ok(identity)
    }

    /// Restore a wallet from pasted secret text and make it active.
    ///
    /// Surrounding whitespace is stripped first, the way a text field would
    /// be cleaned up. A failed restore leaves the current identity alone.
    pub fn sign_in(&self, raw_secret: &str) -> Result<Identity, OnboardingError> {
        let secret = raw_secret.trim();
        if secret.is_empty() {
            return Err(OnboardingError::MissingSecret);
        }

        let identity = codec::restore(secret).map_err(|e| {
            tracing::warn!("sign-in rejected: invalid private key");
            e
        })?;
        self.store.save(&identity)?;
        tracing::info!(public_key = %identity.public_key(), "wallet signed in");
        Ok(identity)
    }

    /// The active identity, if any.
    pub fn current(&self) -> Result<Option<Identity>, OnboardingError> {
        Ok(self.store.load()?)
    }

    /// Forget the active identity.
    pub fn sign_out(&self) -> Result<(), OnboardingError> {
        self.store.clear()?;
        tracing::info!("wallet signed out");
        Ok(())
    }
}
