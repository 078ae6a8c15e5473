//! Prompt complexity heuristic.
//!
//! Decides whether an inbound request is likely a multi-step or
//! long-running task worth acknowledging immediately. Best effort only:
//! false positives cost an extra acknowledgment, false negatives a missed
//! one, neither affects correctness.

/// Prompt length above which a request is always treated as complex.
const COMPLEX_LENGTH_THRESHOLD: usize = 200;

/// Keywords that mark a prompt as a likely multi-step request.
const COMPLEX_KEYWORDS: &[&str] = &[
    "build",
    "create",
    "implement",
    "write a",
    "set up",
    "configure",
    "refactor",
    "migrate",
    "deploy",
    "analyze",
    "and then",
    "step by step",
    "multiple",
    "several",
    "research",
    "investigate",
];

/// True when the prompt looks like a multi-step or long-running request.
pub fn is_complex(prompt: &str) -> bool {
    if prompt.is_empty() {
        return false;
    }
    if prompt.chars().count() > COMPLEX_LENGTH_THRESHOLD {
        return true;
    }
    let lower = prompt.to_lowercase();
    COMPLEX_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_prompt_is_complex_regardless_of_content() {
        let prompt = "x".repeat(201);
        assert!(is_complex(&prompt));
    }

    #[test]
    fn prompt_at_threshold_is_not_complex() {
        let prompt = "x".repeat(200);
        assert!(!is_complex(&prompt));
    }

    #[test]
    fn keyword_marks_prompt_complex() {
        assert!(is_complex("build a new auth module"));
        assert!(is_complex("please investigate the outage"));
        assert!(is_complex("do X and then Y"));
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert!(is_complex("REFACTOR the session layer"));
        assert!(is_complex("Step By Step, please"));
    }

    #[test]
    fn plain_chat_is_not_complex() {
        assert!(!is_complex("hello there"));
        assert!(!is_complex("what time is it?"));
    }

    #[test]
    fn empty_prompt_is_not_complex() {
        assert!(!is_complex(""));
    }
}
