pub const QUESTION: &str = "What question or prompt would you like to ask (for text and image)? ";

/// Used when the runner is started without interactive input.
pub const BUILTIN_PROMPT: &str =
    "Describe a quiet mountain lake at sunrise, with mist over the water, in one vivid paragraph.";

pub const INGREDIENTS_WELCOME: &str = "Welcome to your smart kitchen assistant!";
pub const INGREDIENTS_QUESTION: &str = "Enter the ingredients you have (comma separated): ";
