//! Inspect and maintain symmetry store files.
//!
//! The store file is a flat sequence of (card count, holding) pairs
//! with no header; a missing file simply means no precomputed
//! symmetries yet.

use clap::{Parser, Subcommand};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use suit_core::Holding;
use suit_symmetry::SymmetryStore;

#[derive(Parser)]
#[command(name = "symmetry-tool")]
#[command(about = "Inspect and maintain symmetry store files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the built-in manual symmetry table to a store file
    Seed {
        /// Store file to create or overwrite
        file: PathBuf,
    },
    /// Show per-card-count holding counts of a store file
    Show {
        /// Store file to read
        file: PathBuf,
    },
    /// Query one holding for membership
    Check {
        /// Store file to read
        file: PathBuf,
        /// Number of cards in play
        cards: usize,
        /// Encoded holding, hex (0x prefix optional)
        holding: String,
    },
}

fn load(file: &Path) -> Result<SymmetryStore, String> {
    let mut store = SymmetryStore::new();
    match store.read_file(file) {
        Ok(()) => Ok(store),
        // Absence only costs lookups, not correctness.
        Err(err) if err.kind() == ErrorKind::NotFound => {
            eprintln!("note: {} not found, treating as empty", file.display());
            Ok(store)
        }
        Err(err) => Err(format!("cannot read {}: {}", file.display(), err)),
    }
}

fn parse_holding(text: &str) -> Result<Holding, String> {
    let digits = text.trim_start_matches("0x").trim_start_matches("0X");
    Holding::from_str_radix(digits, 16).map_err(|_| format!("bad holding '{}'", text))
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Seed { file } => {
            let mut store = SymmetryStore::new();
            store.set_manual();
            store
                .write_file(&file)
                .map_err(|err| format!("cannot write {}: {}", file.display(), err))?;
            println!("wrote {} holdings to {}", store.len(), file.display());
        }
        Command::Show { file } => {
            let store = load(&file)?;
            if store.is_empty() {
                println!("store is empty");
            }
            for (cards, count) in store.counts() {
                println!("{:2} cards: {} holdings", cards, count);
            }
        }
        Command::Check {
            file,
            cards,
            holding,
        } => {
            let store = load(&file)?;
            let holding = parse_holding(&holding)?;
            if store.symmetrize(cards, holding) {
                println!("0x{:x} with {} cards: symmetric", holding, cards);
            } else {
                println!("0x{:x} with {} cards: not in store", holding, cards);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}
