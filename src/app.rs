//! Application orchestration for the text-then-image prompt chain.

use crate::ai::{
    GeminiImageClient, GeminiTextClient, GeneratedImage, ImageGenerationService,
    TextGenerationService,
};
use crate::chain::{choose_image_prompt, ImagePrompt, PromptSource};
use crate::models::Config;
use crate::output::save_image;
use crate::Result;
use std::path::PathBuf;
use tracing::info;

/// Runs one prompt through the text model and the resulting prompt through
/// the image model.
pub struct App {
    text: Box<dyn TextGenerationService>,
    image: Box<dyn ImageGenerationService>,
    output_path: PathBuf,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub text: Box<dyn TextGenerationService>,
    pub image: Box<dyn ImageGenerationService>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    Saved {
        path: PathBuf,
        bytes: usize,
        mime_type: String,
    },
    NotGenerated,
}

/// What a single run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub answer: Option<String>,
    pub image_prompt: ImagePrompt,
    pub image: ImageOutcome,
}

impl App {
    pub fn with_services(services: AppServices, output_path: PathBuf) -> Self {
        Self {
            text: services.text,
            image: services.image,
            output_path,
        }
    }

    /// Construct the Gemini-backed app from configuration.
    pub fn from_config(config: &Config) -> Self {
        // Reuse one HTTP connection pool across both clients.
        let http_client = reqwest::Client::new();

        info!("Text model: {}", config.text_model);
        info!("Image model: {}", config.image_model);

        let text = GeminiTextClient::new_with_client(
            config.api_key.clone(),
            config.text_model.clone(),
            http_client.clone(),
        )
        .with_base_url(config.base_url.clone())
        .with_timeout(config.text_timeout);

        let image = GeminiImageClient::new_with_client(
            config.api_key.clone(),
            config.image_model.clone(),
            http_client,
        )
        .with_base_url(config.base_url.clone())
        .with_timeout(config.image_timeout);

        Self::with_services(
            AppServices {
                text: Box::new(text),
                image: Box::new(image),
            },
            config.output_path.clone(),
        )
    }

    /// Run the chain for an already-normalized prompt.
    ///
    /// Any failure aborts the run; the only soft outcomes are a missing text
    /// answer (the original prompt is reused) and a missing image.
    pub async fn run(&self, prompt: &str) -> Result<RunReport> {
        println!("\n--- Getting Text Answer from Gemini ---");
        info!("Requesting text answer ({} chars)", prompt.len());

        let answer = self.text.generate_text(prompt).await?;
        match &answer {
            Some(text) => println!("Gemini's Answer: {}", text),
            None => println!("No text answer generated."),
        }

        println!("\n--- Generating Image with Imagen ---");
        let image_prompt = choose_image_prompt(prompt, answer.as_deref());
        match image_prompt.source {
            PromptSource::Generated => println!(
                "Using Gemini's answer as image prompt: \"{}\"",
                image_prompt.text
            ),
            PromptSource::Original => println!(
                "Using original prompt as image prompt: \"{}\"",
                image_prompt.text
            ),
        }

        let image = match self.image.generate_image(&image_prompt.text).await? {
            Some(generated) => self.store(generated)?,
            None => {
                println!("No image generated or found in the response.");
                ImageOutcome::NotGenerated
            }
        };

        Ok(RunReport {
            answer,
            image_prompt,
            image,
        })
    }

    fn store(&self, generated: GeneratedImage) -> Result<ImageOutcome> {
        save_image(&self.output_path, &generated.bytes)?;
        println!(
            "Image successfully saved to {}",
            self.output_path.display()
        );
        info!(
            "Saved {} bytes ({}) to {}",
            generated.bytes.len(),
            generated.mime_type,
            self.output_path.display()
        );

        Ok(ImageOutcome::Saved {
            path: self.output_path.clone(),
            bytes: generated.bytes.len(),
            mime_type: generated.mime_type,
        })
    }
}
