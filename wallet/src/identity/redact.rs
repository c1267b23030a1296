//! # Redaction
//!
//! Display-safe stand-ins for the private key, and the hidden/revealed toggle
//! that decides which one a front end renders.
//!
//! The placeholder has a fixed length ([`MASK_LENGTH`]) no matter what it
//! replaces, so a blurred field does not give away how long the secret is.

use std::borrow::Cow;

use super::types::Identity;
use crate::config::{MASK_CHAR, MASK_LENGTH};

/// Placeholder text for a hidden secret.
///
/// The input is ignored entirely; it is taken only so call sites read as
/// "mask this".
pub fn mask(_private_text: &str) -> String {
    std::iter::repeat(MASK_CHAR).take(MASK_LENGTH).collect()
}

/// Whether the private key field is currently shown.
///
/// Toggling never touches the [`Identity`]: no re-derivation, no
/// re-encoding, no persistence. It only changes what [`render`](Self::render)
/// hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecretVisibility {
    #[default]
    Hidden,
    Revealed,
}

impl SecretVisibility {
    /// Flip between `Hidden` and `Revealed`.
    pub fn toggle(&mut self) {
        *self = match self {
            SecretVisibility::Hidden => SecretVisibility::Revealed,
            SecretVisibility::Revealed => SecretVisibility::Hidden,
        };
    }

    pub fn is_revealed(self) -> bool {
        self == SecretVisibility::Revealed
    }

    /// The text to put in the private key field.
    pub fn render(self, identity: &Identity) -> Cow<'_, str> {
        match self {
            SecretVisibility::Hidden => Cow::Owned(mask(identity.private_key())),
            SecretVisibility::Revealed => Cow::Borrowed(identity.private_key()),
        }
    }
}
