//! Text shown on the card.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardCopy {
    #[serde(default = "default_question")]
    pub question: String,
    /// Subtext indexed by decline count; the last entry repeats.
    #[serde(default = "default_subtexts")]
    pub subtexts: Vec<String>,
    #[serde(default = "default_accept_label")]
    pub accept_label: String,
    #[serde(default = "default_decline_label")]
    pub decline_label: String,
    #[serde(default = "default_hopeful_mood")]
    pub hopeful_mood: String,
    #[serde(default = "default_pleading_mood")]
    pub pleading_mood: String,
    #[serde(default = "default_headline")]
    pub headline: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_restart_label")]
    pub restart_label: String,
    #[serde(default = "default_footer")]
    pub footer: String,
}

fn default_question() -> String {
    "Will you be my Valentine?".into()
}
fn default_subtexts() -> Vec<String> {
    vec![
        "CHOOSE YOUR DESTINY".into(),
        "Wait, let's try that again...".into(),
        "Are you really sure?".into(),
        "It's getting a bit crowded in here...".into(),
        "The Yes button is taking over!".into(),
    ]
}
fn default_accept_label() -> String {
    "Yes".into()
}
fn default_decline_label() -> String {
    "No".into()
}
fn default_hopeful_mood() -> String {
    "🧸".into()
}
fn default_pleading_mood() -> String {
    "🥹".into()
}
fn default_headline() -> String {
    "Yay! See you on the 14th!".into()
}
fn default_tagline() -> String {
    "Our countdown has begun ❤️".into()
}
fn default_restart_label() -> String {
    "❤️ Can't Wait!".into()
}
fn default_footer() -> String {
    "Sent with love".into()
}

impl Default for CardCopy {
    fn default() -> Self {
        Self {
            question: default_question(),
            subtexts: default_subtexts(),
            accept_label: default_accept_label(),
            decline_label: default_decline_label(),
            hopeful_mood: default_hopeful_mood(),
            pleading_mood: default_pleading_mood(),
            headline: default_headline(),
            tagline: default_tagline(),
            restart_label: default_restart_label(),
            footer: default_footer(),
        }
    }
}

impl CardCopy {
    pub fn subtext(&self, decline_count: u32) -> &str {
        let idx = (decline_count as usize).min(self.subtexts.len().saturating_sub(1));
        self.subtexts.get(idx).map(String::as_str).unwrap_or("")
    }

    /// Mood glyph: hopeful until the negative option is withdrawn.
    pub fn mood(&self, decline_available: bool) -> &str {
        if decline_available {
            &self.hopeful_mood
        } else {
            &self.pleading_mood
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtext_follows_decline_count() {
        let copy = CardCopy::default();
        assert_eq!(copy.subtext(0), "CHOOSE YOUR DESTINY");
        assert_eq!(copy.subtext(2), "Are you really sure?");
        assert_eq!(copy.subtext(4), "The Yes button is taking over!");
        assert_eq!(copy.subtext(40), "The Yes button is taking over!");
    }

    #[test]
    fn empty_subtexts_render_blank() {
        let copy = CardCopy {
            subtexts: Vec::new(),
            ..CardCopy::default()
        };
        assert_eq!(copy.subtext(3), "");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let copy: CardCopy = toml::from_str("question = \"Coffee?\"").unwrap();
        assert_eq!(copy.question, "Coffee?");
        assert_eq!(copy.accept_label, "Yes");
        assert_eq!(copy.subtexts.len(), 5);
    }
}
