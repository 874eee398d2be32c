//! Keyword-based intent classification.

use serde::Serialize;

/// What a chat message is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    LogPrompt,
    Stats,
    Recommendations,
    Goal,
    Hygiene,
    Fallback,
}

/// Ordered rule table. The first rule with a matching keyword wins, so a
/// message like "hi, show my stats" is a greeting.
const RULES: &[(Intent, &[&str])] = &[
    (Intent::Greeting, &["hello", "hi", "hey"]),
    (Intent::LogPrompt, &["track", "log", "record"]),
    (
        Intent::Stats,
        &["stats", "statistics", "analysis", "data", "how am i doing"],
    ),
    (
        Intent::Recommendations,
        &[
            "recommend",
            "suggestion",
            "advice",
            "tip",
            "help me sleep",
            "improve",
            "better sleep",
        ],
    ),
    (Intent::Goal, &["goal", "target"]),
    (
        Intent::Hygiene,
        &["hygiene", "routine", "habit", "bedtime routine"],
    ),
];

/// Classify `message` by case-insensitive substring match.
///
/// Keywords are matched anywhere in the text, including inside other words.
pub fn classify(message: &str) -> Intent {
    let lower = message.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_intent() {
        assert_eq!(classify("Hello there"), Intent::Greeting);
        assert_eq!(classify("I want to record last night"), Intent::LogPrompt);
        assert_eq!(classify("How am I doing?"), Intent::Stats);
        assert_eq!(classify("any advice?"), Intent::Recommendations);
        assert_eq!(classify("what is my target"), Intent::Goal);
        assert_eq!(classify("sleep hygiene please"), Intent::Hygiene);
        assert_eq!(classify("what's the weather"), Intent::Fallback);
    }

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(classify("hi, show my stats"), Intent::Greeting);
        assert_eq!(classify("log my stats"), Intent::LogPrompt);
        assert_eq!(classify("stats and advice"), Intent::Stats);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("STATISTICS"), Intent::Stats);
        assert_eq!(classify("My GOAL"), Intent::Goal);
    }

    #[test]
    fn test_matches_inside_words() {
        // "this" contains "hi"
        assert_eq!(classify("is this normal"), Intent::Greeting);
        // "tips" contains "tip"
        assert_eq!(classify("sleep tips"), Intent::Recommendations);
    }

    #[test]
    fn test_empty_message_falls_back() {
        assert_eq!(classify(""), Intent::Fallback);
    }
}
