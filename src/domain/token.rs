//! Tagged tokens produced by the tagger adapter
//!
//! Part-of-speech and dependency vocabularies belong to the tagging model, so both are
//! kept as opaque strings. The constants below name the tags the built-in model emits
//! and the scrubbers look for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Universal part-of-speech tags
pub mod pos {
    pub const ADJ: &str = "ADJ";
    pub const ADP: &str = "ADP";
    pub const ADV: &str = "ADV";
    pub const AUX: &str = "AUX";
    pub const CCONJ: &str = "CCONJ";
    pub const DET: &str = "DET";
    pub const INTJ: &str = "INTJ";
    pub const NOUN: &str = "NOUN";
    pub const NUM: &str = "NUM";
    pub const PART: &str = "PART";
    pub const PRON: &str = "PRON";
    pub const PROPN: &str = "PROPN";
    pub const PUNCT: &str = "PUNCT";
    pub const SCONJ: &str = "SCONJ";
    pub const SYM: &str = "SYM";
    pub const VERB: &str = "VERB";
}

/// Dependency labels
pub mod dep {
    /// Preposition attached to its head
    pub const PREP: &str = "prep";
    /// Object of a preposition
    pub const POBJ: &str = "pobj";
    pub const COMPOUND: &str = "compound";
    pub const DET: &str = "det";
    pub const AMOD: &str = "amod";
    pub const NSUBJ: &str = "nsubj";
    pub const PUNCT: &str = "punct";
    pub const ROOT: &str = "ROOT";
    pub const DEP: &str = "dep";
}

/// A token annotated with part of speech and syntactic dependency role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface text
    pub text: String,
    /// Part-of-speech tag
    pub pos: String,
    /// Dependency label
    pub dep: String,
}

impl TaggedToken {
    /// Create a new tagged token
    pub fn new(text: impl Into<String>, pos: impl Into<String>, dep: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
            dep: dep.into(),
        }
    }

    /// Whether the token is tagged as a proper noun
    pub fn is_proper_noun(&self) -> bool {
        self.pos == pos::PROPN
    }

    /// Whether the token carries the given dependency label
    pub fn has_dep(&self, label: &str) -> bool {
        self.dep == label
    }
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.text, self.pos, self.dep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_token_predicates() {
        let token = TaggedToken::new("Paris", pos::PROPN, dep::POBJ);
        assert!(token.is_proper_noun());
        assert!(token.has_dep("pobj"));
        assert!(!token.has_dep(dep::PREP));
    }

    #[test]
    fn test_tagged_token_display() {
        let token = TaggedToken::new("in", pos::ADP, dep::PREP);
        assert_eq!(token.to_string(), "in/ADP/prep");
    }
}
