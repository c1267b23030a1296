//! # CLI Interface
//!
//! Command-line argument structure for `lilypad` using `clap` derive.
//! Subcommands: `generate`, `restore`, `show`, `clear`, `version`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lilypad_wallet::config::{DEFAULT_DATA_DIR_NAME, SESSION_DB_DIR};

/// Lilypad wallet.
///
/// Create a wallet, restore one from its private key, and keep track of
/// which wallet is signed in on this machine.
#[derive(Parser, Debug)]
#[command(
    name = "lilypad",
    about = "Lilypad wallet identity manager",
    version,
    propagate_version = true
)]
pub struct LilypadCli {
    /// Directory holding the session store.
    ///
    /// Defaults to `~/.lilypad`.
    #[arg(long, short = 'd', env = "LILYPAD_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log output format: `pretty` or `json`.
    #[arg(long, env = "LILYPAD_LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new wallet and sign in with it.
    Generate(GenerateArgs),
    /// Sign in with an existing wallet's private key.
    Restore(RestoreArgs),
    /// Show the signed-in wallet.
    Show(ShowArgs),
    /// Sign out and forget the stored wallet.
    Clear,
    /// Print version information and exit.
    Version,
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Replace a wallet that is already signed in.
    #[arg(long)]
    pub force: bool,

    /// Print the private key instead of a placeholder.
    #[arg(long)]
    pub reveal: bool,
}

/// Arguments for the `restore` subcommand.
#[derive(Parser, Debug)]
pub struct RestoreArgs {
    /// Base58 private key. Read from stdin when omitted.
    ///
    /// Passing secrets on the command line leaves them in shell history;
    /// prefer stdin.
    #[arg(long, env = "LILYPAD_SECRET", hide_env_values = true)]
    pub secret: Option<String>,
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Print the private key instead of a placeholder.
    #[arg(long)]
    pub reveal: bool,
}

impl LilypadCli {
    /// Where the sled session database lives.
    pub fn session_db_path(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(default_data_dir)
            .join(SESSION_DB_DIR)
    }
}

/// `$HOME/.lilypad`, or `./.lilypad` when no home directory is known.
pub fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DATA_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        LilypadCli::command().debug_assert();
    }

    #[test]
    fn parses_restore_with_secret() {
        let cli = LilypadCli::try_parse_from(["lilypad", "restore", "--secret", "abc"]).unwrap();
        match cli.command {
            Commands::Restore(args) => assert_eq!(args.secret.as_deref(), Some("abc")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn data_dir_flag_sets_db_path() {
        let cli =
            LilypadCli::try_parse_from(["lilypad", "show", "--data-dir", "/tmp/lily"]).unwrap();
        assert_eq!(
            cli.session_db_path(),
            PathBuf::from("/tmp/lily").join(SESSION_DB_DIR)
        );
    }

    #[test]
    fn generate_flags_default_off() {
        let cli = LilypadCli::try_parse_from(["lilypad", "generate"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert!(!args.force);
                assert!(!args.reveal);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
