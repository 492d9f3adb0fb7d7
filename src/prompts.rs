use std::collections::HashMap;

const UPWARD_PROMPT: &str = "You are a professional assistant for reporting to a superior. \
Convert the user's text into a polite, formal, and clear report format. \
Start with the conclusion first. Please write in Korean.";

const LATERAL_PROMPT: &str = "You are a helpful colleague. \
Convert the user's text into a friendly, mutually respectful tone for collaboration. \
Clearly state the request and deadline. Please write in Korean.";

const EXTERNAL_PROMPT: &str = "You are a customer service expert. \
Convert the user's text using the highest level of honorifics, emphasizing professionalism \
and a service-minded attitude. The result should be suitable for official announcements, \
apologies, or guidance. Please write in Korean.";

/// System prompts keyed by lowercase target audience
#[derive(Debug, Clone)]
pub struct PromptBook {
    prompts: HashMap<String, String>,
}

impl PromptBook {
    /// Build from configured prompts, or the built-in set when none are configured
    pub fn from_config(configured: &HashMap<String, String>) -> Self {
        if configured.is_empty() {
            return Self::default();
        }
        Self {
            prompts: configured
                .iter()
                .map(|(target, prompt)| (target.to_lowercase(), prompt.clone()))
                .collect(),
        }
    }

    /// Case-insensitive lookup
    pub fn get(&self, target: &str) -> Option<&str> {
        self.prompts.get(&target.to_lowercase()).map(String::as_str)
    }

    pub fn targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = self.prompts.keys().map(String::as_str).collect();
        targets.sort_unstable();
        targets
    }
}

impl Default for PromptBook {
    fn default() -> Self {
        let prompts = [
            ("upward", UPWARD_PROMPT),
            ("lateral", LATERAL_PROMPT),
            ("external", EXTERNAL_PROMPT),
        ]
        .into_iter()
        .map(|(target, prompt)| (target.to_string(), prompt.to_string()))
        .collect();
        Self { prompts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets() {
        let book = PromptBook::default();
        assert_eq!(book.targets(), vec!["external", "lateral", "upward"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let book = PromptBook::default();
        assert_eq!(book.get("UPWARD"), book.get("upward"));
        assert!(book.get("Lateral").unwrap().contains("colleague"));
    }

    #[test]
    fn test_unknown_target() {
        assert!(PromptBook::default().get("sideways").is_none());
    }

    #[test]
    fn test_configured_prompts_replace_defaults() {
        let mut configured = HashMap::new();
        configured.insert("Casual".to_string(), "Be casual.".to_string());
        let book = PromptBook::from_config(&configured);

        assert_eq!(book.get("casual"), Some("Be casual."));
        assert!(book.get("upward").is_none());
    }
}
