//! Lookbook CLI

use std::{
    io::{self, Write},
    process,
};

use thiserror::Error;
use tracing::error;

use lookbook::{
    cart::{CartError, shopping_cart},
    config::{Config, OutputFormat},
    fixtures::{FixtureError, load_catalog},
    observability::{ObservabilityError, init_subscriber},
    products::ProductId,
    receipt::ReceiptError,
};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Observability(#[from] ObservabilityError),

    #[error("failed to load catalog: {0}")]
    Catalog(#[from] FixtureError),

    #[error("failed to summarise cart: {0}")]
    Cart(#[from] CartError),

    #[error("failed to write summary: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Lookbook CLI entry point
pub fn main() {
    let config = Config::load().unwrap_or_else(|e| e.exit());

    if let Err(err) = run(&config) {
        error!("{err}");

        #[expect(
            clippy::print_stderr,
            reason = "the error must reach the user even when logging is filtered"
        )]
        {
            eprintln!("{err}");
        }

        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), CliError> {
    init_subscriber(&config.logging)?;

    let products = load_catalog(&config.catalog)?;
    let ids: Vec<ProductId> = config.ids.iter().map(String::as_str).map(ProductId::from).collect();
    let summary = shopping_cart(&ids, &products)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match config.output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, &summary)?;
            writeln!(handle)?;
        }
        OutputFormat::Table => summary.write_to(&mut handle)?,
    }

    Ok(())
}
