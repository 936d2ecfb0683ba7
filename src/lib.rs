//! Prompt chaining against Google's generative APIs
//!
//! Asks a Gemini text model a question, feeds the answer (or the question
//! itself) to an Imagen model, and saves the resulting picture. Also hosts the
//! small ingredient-list helper used by the `ingredients` binary.

pub mod ai;
pub mod app;
pub mod chain;
pub mod error;
pub mod ingredients;
pub mod input;
pub mod models;
pub mod output;
pub mod prompts;

pub use error::{Error, Result};
