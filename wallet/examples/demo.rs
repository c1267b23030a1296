//! Walkthrough of the onboarding flow against an in-memory store.
//!
//! Run with: `cargo run -p lilypad-wallet --example demo`

use lilypad_wallet::{MemorySessionStore, Onboarding, SecretVisibility};

fn main() {
    let flow = Onboarding::new(MemorySessionStore::new());

    println!("== create ==");
    let identity = match flow.create() {
        Ok(identity) => identity,
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    let mut visibility = SecretVisibility::default();
    println!("address     : {}", identity.public_key());
    println!("private key : {}", visibility.render(&identity));
    visibility.toggle();
    println!("revealed    : {}", visibility.render(&identity));

    println!("\n== sign out, sign back in ==");
    let secret = identity.private_key().to_string();
    flow.sign_out().ok();
    println!("signed in   : {}", flow.current().ok().flatten().is_some());

    match flow.sign_in(&format!("  {secret}\n")) {
        Ok(restored) => println!("restored    : {}", restored.public_key()),
        Err(e) => println!("error       : {}", e.user_message()),
    }

    println!("\n== bad secret ==");
    if let Err(e) = flow.sign_in("not-base-encoded-!!!") {
        println!("error       : {}", e.user_message());
    }
}
