use anyhow::Result;
use clap::Parser;
use promptchain::app::App;
use promptchain::input::{normalize_prompt, read_prompt};
use promptchain::models::{normalize_model_id, Config};
use promptchain::prompts;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "promptchain")]
#[command(about = "Ask Gemini a question and turn the answer into an image")]
struct CliArgs {
    /// Prompt to use instead of reading one from standard input.
    #[arg(short, long, conflicts_with = "builtin_prompt")]
    prompt: Option<String>,

    /// Run without interactive input, using the built-in prompt.
    #[arg(long)]
    builtin_prompt: bool,

    /// Where to write the generated image.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Text model override (for example `gemini-2.5-flash`).
    #[arg(long)]
    text_model: Option<String>,

    /// Image model override.
    #[arg(long)]
    image_model: Option<String>,
}

impl CliArgs {
    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(model) = &self.text_model {
            config.text_model = normalize_model_id(model);
        }
        if let Some(model) = &self.image_model {
            config.image_model = normalize_model_id(model);
        }
        config
    }

    fn acquire_prompt(&self) -> promptchain::Result<String> {
        if let Some(prompt) = &self.prompt {
            return normalize_prompt(prompt);
        }
        if self.builtin_prompt {
            return normalize_prompt(prompts::BUILTIN_PROMPT);
        }

        let stdin = io::stdin();
        read_prompt(prompts::QUESTION, &mut stdin.lock(), &mut io::stdout())
    }
}

async fn run(args: CliArgs) -> promptchain::Result<()> {
    let config = args.apply_overrides(Config::from_env()?);

    let prompt = args.acquire_prompt()?;
    println!("You asked: \"{}\"", prompt);

    let app = App::from_config(&config);
    app.run(&prompt).await?;

    println!("\nProgram finished.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promptchain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting promptchain");

    let args = CliArgs::parse();

    match run(args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
