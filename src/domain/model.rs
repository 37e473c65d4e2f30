use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::validation::is_duplicate;

pub const ROSTER_SEPARATOR: &str = ", ";
pub const PAIR_SEPARATOR: &str = " -> ";

/// Participants in insertion order. Entries are trimmed, non-empty and
/// unique ignoring case; only the orchestrator mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        is_duplicate(name, &self.names)
    }

    pub(crate) fn push(&mut self, name: String) {
        self.names.push(name);
    }

    pub(crate) fn clear(&mut self) {
        self.names.clear();
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(ROSTER_SEPARATOR))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub giver: String,
    pub recipient: String,
}

impl Pair {
    pub fn new(giver: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            giver: giver.into(),
            recipient: recipient.into(),
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.giver, PAIR_SEPARATOR, self.recipient)
    }
}

/// Result of one draw: a pair per participant, in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    pairs: Vec<Pair>,
}

impl Assignment {
    pub fn new(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.pairs.iter()
    }

    /// Who `giver` drew, matched ignoring case.
    pub fn recipient_of(&self, giver: &str) -> Option<&str> {
        let giver = giver.to_lowercase();
        self.pairs
            .iter()
            .find(|pair| pair.giver.to_lowercase() == giver)
            .map(|pair| pair.recipient.as_str())
    }

    /// One `"giver -> recipient"` entry per pair.
    pub fn lines(&self) -> Vec<String> {
        self.pairs.iter().map(Pair::to_string).collect()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_display_is_comma_separated() {
        let mut roster = Roster::new();
        assert_eq!(roster.to_string(), "");
        roster.push("João".to_string());
        assert_eq!(roster.to_string(), "João");
        roster.push("Maria".to_string());
        roster.push("Pedro".to_string());
        assert_eq!(roster.to_string(), "João, Maria, Pedro");
    }

    #[test]
    fn test_roster_contains_ignores_case() {
        let mut roster = Roster::new();
        roster.push("Maria".to_string());
        assert!(roster.contains("maria"));
        assert!(!roster.contains("Mario"));
    }

    #[test]
    fn test_assignment_formatting() {
        let assignment = Assignment::new(vec![Pair::new("A", "B"), Pair::new("B", "A")]);
        assert_eq!(assignment.lines(), vec!["A -> B", "B -> A"]);
        assert_eq!(assignment.to_string(), "A -> B\nB -> A");
    }

    #[test]
    fn test_names_containing_separator_stay_structured() {
        let pair = Pair::new("A -> B", "C");
        assert_eq!(pair.giver, "A -> B");
        assert_eq!(pair.recipient, "C");
    }

    #[test]
    fn test_recipient_of() {
        let assignment = Assignment::new(vec![Pair::new("Ana", "Bia"), Pair::new("Bia", "Ana")]);
        assert_eq!(assignment.recipient_of("ana"), Some("Bia"));
        assert_eq!(assignment.recipient_of("Caio"), None);
    }
}
