//! Card build request
//!
//! The per-build input: every field is optional, and an empty field simply
//! renders nothing for that element. Deserializes from the card JSON used
//! by deck files, where `flavor` and `abilities` may be single strings and
//! stats may be numbers.

use std::path::PathBuf;

use serde::{Deserialize, Deserializer};

/// Input for one card build
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CardRequest {
    /// Card name, rendered in the name zone
    pub name: String,

    /// Type line, e.g. "Creature — Vampire Assassin"
    #[serde(alias = "type")]
    pub type_line: String,

    /// Pre-wrapped ability text lines
    #[serde(deserialize_with = "lines", alias = "text")]
    pub abilities: Vec<String>,

    /// Pre-wrapped flavor text lines; a single string is one line
    #[serde(deserialize_with = "lines")]
    pub flavor: Vec<String>,

    /// Attack display string (not necessarily numeric)
    #[serde(deserialize_with = "display_string")]
    pub attack: String,

    /// Defense display string (not necessarily numeric)
    #[serde(deserialize_with = "display_string")]
    pub defense: String,

    /// Optional artwork to place in the art zone
    pub art: Option<PathBuf>,
}

impl CardRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the card name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the type line
    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = type_line.into();
        self
    }

    /// Add one ability line
    pub fn with_ability(mut self, line: impl Into<String>) -> Self {
        self.abilities.push(line.into());
        self
    }

    /// Add one flavor line
    pub fn with_flavor(mut self, line: impl Into<String>) -> Self {
        self.flavor.push(line.into());
        self
    }

    /// Set the attack value
    pub fn with_attack(mut self, attack: impl Into<String>) -> Self {
        self.attack = attack.into();
        self
    }

    /// Set the defense value
    pub fn with_defense(mut self, defense: impl Into<String>) -> Self {
        self.defense = defense.into();
        self
    }

    /// Set the artwork path
    pub fn with_art(mut self, art: impl Into<PathBuf>) -> Self {
        self.art = Some(art.into());
        self
    }
}

/// Accept a single string or a list of lines
fn lines<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lines {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Lines::deserialize(deserializer)? {
        Lines::One(line) if line.is_empty() => Vec::new(),
        Lines::One(line) => vec![line],
        Lines::Many(lines) => lines,
    })
}

/// Accept a display string or a bare number
fn display_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Display {
        Text(String),
        Number(i64),
    }

    Ok(match Display::deserialize(deserializer)? {
        Display::Text(text) => text,
        Display::Number(value) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let request = CardRequest::new()
            .with_name("BLOODRENDER")
            .with_type_line("Creature — Vampire Assassin")
            .with_ability("Deathstrike — When Bloodrender attacks,")
            .with_ability("destroy target creature with less power.")
            .with_flavor("\"The last thing they see is their\"")
            .with_attack("4")
            .with_defense("2");

        assert_eq!(request.abilities.len(), 2);
        assert_eq!(request.attack, "4");
        assert!(request.art.is_none());
    }

    #[test]
    fn test_deserialize_full() {
        let request: CardRequest = serde_json::from_str(
            r#"{
                "name": "Skeleton",
                "type": "Creature",
                "text": "Taunt",
                "flavor": "Bones bound by dark will.",
                "attack": 2,
                "defense": 2
            }"#,
        )
        .unwrap();

        assert_eq!(request.type_line, "Creature");
        assert_eq!(request.abilities, vec!["Taunt".to_string()]);
        assert_eq!(request.flavor, vec!["Bones bound by dark will.".to_string()]);
        assert_eq!(request.attack, "2");
    }

    #[test]
    fn test_deserialize_lists_and_strings() {
        let request: CardRequest = serde_json::from_str(
            r#"{
                "abilities": ["Flying — Can only be blocked by", "creatures with flying."],
                "flavor": ["line one", "line two"],
                "attack": "12",
                "defense": "X"
            }"#,
        )
        .unwrap();

        assert_eq!(request.abilities.len(), 2);
        assert_eq!(request.flavor.len(), 2);
        assert_eq!(request.defense, "X");
    }

    #[test]
    fn test_deserialize_empty_object() {
        let request: CardRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, CardRequest::default());
    }

    #[test]
    fn test_empty_text_is_no_lines() {
        let request: CardRequest = serde_json::from_str(r#"{"text": ""}"#).unwrap();
        assert!(request.abilities.is_empty());
    }
}
