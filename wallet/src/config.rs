//! # Wallet Configuration & Constants
//!
//! Every fixed parameter of the identity core lives here: key sizes, the
//! on-disk slot layout, and the redaction placeholder. Values that touch the
//! persisted record are part of the storage contract; bump
//! [`RECORD_SCHEMA_VERSION`] instead of silently changing their meaning.

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Signature scheme behind every wallet identity.
pub const SIGNING_ALGORITHM: &str = "Ed25519";

/// Ed25519 secret seed length in bytes.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Ed25519 public key length in bytes. The base58 form of these bytes is the
/// wallet address.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Length of the exported keypair: `seed || public key`. This is the layout
/// Solana wallets use for their "private key" strings, so secrets exported
/// elsewhere paste straight in.
pub const KEYPAIR_LENGTH: usize = SECRET_KEY_LENGTH + PUBLIC_KEY_LENGTH;

/// Textual encoding used for both keys.
pub const KEY_ENCODING: &str = "base58";

/// Longest base58 text a [`KEYPAIR_LENGTH`]-byte secret can encode to.
/// Anything longer is rejected before decoding, which is quadratic in the
/// input length.
pub const MAX_ENCODED_SECRET_LENGTH: usize = 88;

// ---------------------------------------------------------------------------
// Redaction
// ---------------------------------------------------------------------------

/// Number of placeholder characters shown in place of a hidden secret.
///
/// Deliberately unrelated to [`KEYPAIR_LENGTH`] or the encoded secret length:
/// the placeholder must not tell an onlooker how long the real secret is.
pub const MASK_LENGTH: usize = 48;

/// Character repeated to build the placeholder.
pub const MASK_CHAR: char = 'x';

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// Name of the sled tree holding the session slot.
pub const SESSION_TREE: &str = "session";

/// Fixed key of the single active-identity slot.
pub const SESSION_SLOT_KEY: &[u8] = b"active_identity";

/// Current version of the persisted identity record.
pub const RECORD_SCHEMA_VERSION: u32 = 1;

/// Default data directory name, resolved under the user's home directory by
/// front ends.
pub const DEFAULT_DATA_DIR_NAME: &str = ".lilypad";

/// Subdirectory of the data directory that holds the sled database.
pub const SESSION_DB_DIR: &str = "session.db";

// ---------------------------------------------------------------------------
// User-facing messages
// ---------------------------------------------------------------------------

/// The one message shown for any secret that fails to restore. Every
/// decode-class failure collapses into this text so the response never hints
/// at which validation step rejected the input.
pub const INVALID_SECRET_MESSAGE: &str = "Invalid private key. Please check and try again.";

/// Shown when the caller submits an empty secret field.
pub const MISSING_SECRET_MESSAGE: &str = "Please enter your private key.";
