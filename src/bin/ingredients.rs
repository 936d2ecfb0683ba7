//! Reads a comma-separated ingredient list from standard input and echoes it
//! back split and trimmed.

use anyhow::Result as AnyResult;
use promptchain::ingredients::split_ingredients;
use promptchain::input::ask;
use promptchain::prompts;
use std::io::{self, BufRead, Write};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn run<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> promptchain::Result<Vec<String>> {
    writeln!(writer, "{}", prompts::INGREDIENTS_WELCOME)?;

    let line = ask(prompts::INGREDIENTS_QUESTION, reader, writer)?;
    let ingredients = split_ingredients(&line);

    writeln!(writer, "You have entered: {:?}", ingredients)?;
    Ok(ingredients)
}

fn main() -> AnyResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ingredients=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdin = io::stdin();
    if let Err(e) = run(&mut stdin.lock(), &mut io::stdout()) {
        error!("Error reading input: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
