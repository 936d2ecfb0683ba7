//! Prompt chaining policy
//!
//! Decides which text is forwarded to the image model: the text model's
//! answer when it adds something, otherwise the user's original prompt.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSource {
    Generated,
    Original,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePrompt {
    pub text: String,
    pub source: PromptSource,
}

/// The generated text is used only when it is non-empty and differs from the
/// original by exact string equality.
pub fn choose_image_prompt(original: &str, generated: Option<&str>) -> ImagePrompt {
    match generated {
        Some(text) if !text.is_empty() && text != original => ImagePrompt {
            text: text.to_string(),
            source: PromptSource::Generated,
        },
        _ => ImagePrompt {
            text: original.to_string(),
            source: PromptSource::Original,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_generated_text_uses_original() {
        let prompt = choose_image_prompt("a castle", None);
        assert_eq!(prompt.text, "a castle");
        assert_eq!(prompt.source, PromptSource::Original);
    }

    #[test]
    fn test_empty_generated_text_uses_original() {
        let prompt = choose_image_prompt("a castle", Some(""));
        assert_eq!(prompt.text, "a castle");
        assert_eq!(prompt.source, PromptSource::Original);
    }

    #[test]
    fn test_echoed_text_uses_original() {
        let prompt = choose_image_prompt("a castle", Some("a castle"));
        assert_eq!(prompt.source, PromptSource::Original);
    }

    #[test]
    fn test_different_text_is_chained() {
        let prompt = choose_image_prompt("a castle", Some("A stone castle on a cliff at dusk"));
        assert_eq!(prompt.text, "A stone castle on a cliff at dusk");
        assert_eq!(prompt.source, PromptSource::Generated);
    }

    #[test]
    fn test_comparison_is_exact() {
        // Differs only by case and whitespace, still counts as new text.
        let prompt = choose_image_prompt("a castle", Some("A castle "));
        assert_eq!(prompt.text, "A castle ");
        assert_eq!(prompt.source, PromptSource::Generated);
    }
}
