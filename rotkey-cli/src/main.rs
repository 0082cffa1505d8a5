//! A command-line interface for the rotating-key cipher.
//!
//! Reads up to [`MAX_CHARS`] characters, encrypts them, decrypts the result
//! with the same key, and appends the session report to a log file while
//! echoing it to the console.

use anyhow::{Context, ensure};
use clap::Parser;
use log::{error, info};
use rotkey_core::buffer::MAX_CHARS;
use rotkey_core::crypto;
use std::io::{self, Write};
use std::path::PathBuf;

mod input;
mod report;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Single ASCII character used as the initial encryption key
    #[arg(short, long, default_value_t = 't')]
    key: char,

    /// Path of the append-only session log
    #[arg(short, long, default_value = "log.txt")]
    log_file: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("session failed: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let key = key_byte(cli.key)?;

    let mut stdout = io::stdout();
    write!(stdout, "Please enter up to {MAX_CHARS} alphabetic characters: ")?;
    stdout.flush()?;

    let original = input::read_original(&mut io::stdin().lock())?;
    writeln!(stdout)?;
    info!("read {} characters", original.len());

    let encrypted = crypto::encrypt(&original, key);
    let decrypted = crypto::decrypt(&encrypted, key);
    if decrypted != original {
        error!("decryption did not reproduce the original string");
    }

    let session = report::Session {
        key: cli.key,
        original: &original,
        encrypted: &encrypted,
        decrypted: &decrypted,
    };
    report::emit(&mut stdout, &cli.log_file, &session.render())
        .with_context(|| format!("writing session log '{}'", cli.log_file.display()))?;
    info!("session appended to '{}'", cli.log_file.display());

    Ok(())
}

/// Converts the key argument to its byte value, rejecting anything outside
/// the ASCII range.
fn key_byte(key: char) -> anyhow::Result<u8> {
    ensure!(
        key.is_ascii(),
        "encryption key must be a single ASCII character, got {key:?}"
    );
    Ok(u8::try_from(key)?)
}
