//! Shelfmark - in-memory lending catalog with undo history.
//!
//! Console front-end: seeds the catalog from configuration, then reads
//! commands from stdin one at a time and renders the outcome of each.

use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelfmark::{
    config::AppConfig,
    console::{self, Command},
    services::LibraryService,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("shelfmark={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Shelfmark v{}", env!("CARGO_PKG_VERSION"));

    let mut library = LibraryService::with_seed(&config.seed);

    println!("Shelfmark - type 'help' to list commands.\n");
    println!("{}", console::render_books(&library.list_all()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => println!("{}", console::execute(command, &mut library)),
            Err(message) => println!("{}", message),
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}
