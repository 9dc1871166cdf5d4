//! address-book - in-memory contact manager with a text menu
//!
//! Reads menu choices from stdin and prints results to stdout. Nothing is
//! saved between runs.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial CLI with json/compact output flags

use address_book::menu::Menu;
use address_book::output::OutputControls;
use address_book::ContactStore;
use clap::Parser;
use std::io;
use std::process::ExitCode;

/// In-memory address book driven by a text menu.
#[derive(Parser, Debug)]
#[command(name = "address-book")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Render listings and search results as JSON
    #[arg(long)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long)]
    compact: bool,

    /// Hide the banner above the menu
    #[arg(long)]
    no_banner: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with menu output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let output_controls = OutputControls {
        json: cli.json,
        compact: cli.compact,
    };

    let mut store = ContactStore::new();
    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout(), output_controls).with_banner(!cli.no_banner);

    match menu.run(&mut store) {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
