// Copyright (c) 2026 Lilypad Contributors. MIT License.
// See LICENSE for details.

//! # Lilypad CLI
//!
//! Entry point for the `lilypad` binary. Parses arguments, initializes
//! logging, opens the session store, and runs one onboarding action.
//!
//! - `generate` — create a wallet and sign in with it
//! - `restore`  — sign in with an existing private key
//! - `show`     — print the signed-in wallet
//! - `clear`    — sign out
//! - `version`  — print build version information

mod cli;
mod logging;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::BufRead;
use std::path::Path;

use lilypad_wallet::{Identity, Onboarding, OnboardingError, SecretVisibility, SledSessionStore};

use cli::{Commands, LilypadCli};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = LilypadCli::parse();

    logging::init_logging(
        logging::DEFAULT_FILTER,
        LogFormat::from_str_lossy(&cli.log_format),
    );

    let db_path = cli.session_db_path();
    match cli.command {
        Commands::Generate(args) => generate(&open_flow(&db_path)?, args),
        Commands::Restore(args) => restore(&open_flow(&db_path)?, args),
        Commands::Show(args) => show(&open_flow(&db_path)?, args),
        Commands::Clear => clear(&open_flow(&db_path)?),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Opens the sled session store, creating the data directory on first use.
fn open_flow(db_path: &Path) -> Result<Onboarding<SledSessionStore>> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory: {}", parent.display()))?;
    }
    let store = SledSessionStore::open(db_path)
        .with_context(|| format!("failed to open session store at {}", db_path.display()))?;
    tracing::debug!(path = %db_path.display(), "session store opened");
    Ok(Onboarding::new(store))
}

fn generate(flow: &Onboarding<SledSessionStore>, args: cli::GenerateArgs) -> Result<()> {
    if !args.force && flow.current().map_err(user_facing)?.is_some() {
        bail!("a wallet is already signed in; sign out with `lilypad clear` or pass --force");
    }

    let identity = flow.create().map_err(user_facing)?;
    println!("Wallet created.");
    print_identity(&identity, visibility(args.reveal));
    println!();
    println!("Save your private key now. If you lose it, the wallet cannot be recovered.");
    Ok(())
}

fn restore(flow: &Onboarding<SledSessionStore>, args: cli::RestoreArgs) -> Result<()> {
    let secret = match args.secret {
        Some(secret) => secret,
        None => read_secret_line()?,
    };

    let identity = flow.sign_in(&secret).map_err(user_facing)?;
    println!("Signed in.");
    print_identity(&identity, SecretVisibility::Hidden);
    Ok(())
}

fn show(flow: &Onboarding<SledSessionStore>, args: cli::ShowArgs) -> Result<()> {
    match flow.current().map_err(user_facing)? {
        Some(identity) => print_identity(&identity, visibility(args.reveal)),
        None => println!("No wallet signed in."),
    }
    Ok(())
}

fn clear(flow: &Onboarding<SledSessionStore>) -> Result<()> {
    flow.sign_out().map_err(user_facing)?;
    println!("Signed out.");
    Ok(())
}

fn print_identity(identity: &Identity, visibility: SecretVisibility) {
    println!("  Address     : {}", identity.public_key());
    println!("  Private key : {}", visibility.render(identity));
}

fn visibility(reveal: bool) -> SecretVisibility {
    let mut visibility = SecretVisibility::default();
    if reveal {
        visibility.toggle();
    }
    visibility
}

/// Reads one line from stdin.
fn read_secret_line() -> Result<String> {
    eprintln!("Enter your private key (base58), then press Enter:");
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read private key from stdin")?;
    Ok(line)
}

/// Collapse an onboarding error into the text a user should see.
fn user_facing(err: OnboardingError) -> anyhow::Error {
    anyhow::anyhow!(err.user_message())
}

/// Prints version information to stdout.
fn print_version() {
    println!("lilypad {}", env!("CARGO_PKG_VERSION"));
    println!(
        "keys    {} / {}",
        lilypad_wallet::config::SIGNING_ALGORITHM,
        lilypad_wallet::config::KEY_ENCODING
    );
    println!(
        "record  schema v{}",
        lilypad_wallet::config::RECORD_SCHEMA_VERSION
    );
}
