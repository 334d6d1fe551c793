//! Card content configuration.
//!
//! Every piece of copy on the card is configurable, so the same flow can be
//! dressed for any recipient. Defaults are built in; a JSON file can override
//! any subset of fields.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors from loading a content override file.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse content file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// All user-facing copy on the card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CardContent {
    /// Window title.
    pub window_title: String,
    /// Addressee line on the front of the envelope.
    pub envelope_label: String,
    /// Pulsing hint under the envelope label.
    pub envelope_hint: String,
    /// Seal glyph on the envelope flap.
    pub envelope_seal: String,
    /// Greeting headline on the proposal card.
    pub title: String,
    /// Body text above the question.
    pub message: String,
    /// The highlighted question line.
    pub question: String,
    /// Label of the affirmative button.
    pub yes_label: String,
    /// Label of the understated decline link.
    pub no_label: String,
    /// Response headline after "yes".
    pub yes_title: String,
    /// Response body after "yes".
    pub yes_text: String,
    /// Response headline after "no".
    pub no_title: String,
    /// Response body after "no".
    pub no_text: String,
    /// Caption under each photo.
    pub photo_caption: String,
}

impl Default for CardContent {
    fn default() -> Self {
        Self {
            window_title: "A Letter for You".to_string(),
            envelope_label: "For You 💌".to_string(),
            envelope_hint: "Click to open".to_string(),
            envelope_seal: "💜".to_string(),
            title: "Hi, it's me... 💜".to_string(),
            message: "I've been thinking about you a lot. I really like you, \
                      and I'm hoping you feel the same way."
                .to_string(),
            question: "Will you be mine? 💍".to_string(),
            yes_label: "Yes, a thousand times! 💕".to_string(),
            no_label: "Let me think... 🤍".to_string(),
            yes_title: "You just made me the happiest! 💖".to_string(),
            yes_text: "I can't wait for everything we'll do together. ✨".to_string(),
            no_title: "I respect that 🤍".to_string(),
            no_text: "You're still amazing to me.".to_string(),
            photo_caption: "Moments ✨".to_string(),
        }
    }
}

impl CardContent {
    /// Loads content from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<CardContent, ContentError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_nonempty() {
        let content = CardContent::default();
        assert!(!content.window_title.is_empty());
        assert!(!content.envelope_label.is_empty());
        assert!(!content.question.is_empty());
        assert!(!content.yes_title.is_empty());
        assert!(!content.no_title.is_empty());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let parsed: CardContent =
            serde_json::from_str(r#"{"envelope_label": "For Joy 💜", "question": "Joy, will you be my girlfriend? 💍"}"#)
                .unwrap();
        assert_eq!(parsed.envelope_label, "For Joy 💜");
        assert_eq!(parsed.question, "Joy, will you be my girlfriend? 💍");
        assert_eq!(parsed.yes_label, CardContent::default().yes_label);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = serde_json::from_str::<CardContent>("{not json").unwrap_err();
        assert!(err.is_syntax());
    }
}
