//! Prompt composition.
//!
//! Static templates with a single substitution point (the user's sentence).
//! The tool catalogue itself travels in the structured `tools` field of the
//! chat request, not in the prompt text.

/// System directive sent with every benchmark request.
pub const SYSTEM_DIRECTIVE: &str = "You are a smart Agent. \
You are a master at understanding what a customer wants \
and utilize available tools only if you have to.";

const USER_TEMPLATE: &str = "Conduct a comprehensive analysis of the request provided.\n\
\nUSER REQUEST:\n\n{initial_request}\n";

/// Fill the user template with the benchmark sentence.
pub fn compose_user_prompt(sentence: &str) -> String {
    USER_TEMPLATE.replace("{initial_request}", sentence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_substitutes_sentence() {
        let prompt = compose_user_prompt("What is the weather in Oslo?");
        assert!(prompt.contains("USER REQUEST:"));
        assert!(prompt.contains("What is the weather in Oslo?"));
        assert!(!prompt.contains("{initial_request}"));
    }

    #[test]
    fn test_compose_is_pure() {
        let a = compose_user_prompt("Tell me a joke.");
        let b = compose_user_prompt("Tell me a joke.");
        assert_eq!(a, b);
    }
}
