//! Lexicon-driven rule-based tagger
//!
//! The model is a TOML file mapping part-of-speech tags to word forms plus a table of
//! suffix fallbacks. Part-of-speech assignment:
//!
//! 1. punctuation-only tokens are `PUNCT` (`SYM` for currency and math symbols)
//! 2. numerals are `NUM`
//! 3. acronyms (two or more capitals) are `PROPN`
//! 4. closed-class lexicon entries (prepositions, determiners, pronouns, ...) win
//! 5. capitalized words are `PROPN`, except at sentence start where the lexicon
//!    entry for the lowercase form takes precedence
//! 6. open-class lexicon entries, then the longest matching suffix, then `NOUN`
//!
//! Dependency labels come from a shallow pass over the tag sequence; see
//! [`assign_dependencies`].

use super::tagger::Tagger;
use super::tokenizer::{is_placeholder, tokenize};
use crate::domain::{dep, pos, TaggedToken, TaggerError};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Model embedded in the binary, used when no model path is configured
const EMBEDDED_MODEL: &str = include_str!("../../models/en_core_lexicon.toml");

/// Tags whose lexicon entries override capitalization
const CLOSED_CLASSES: &[&str] = &[
    pos::ADP,
    pos::AUX,
    pos::CCONJ,
    pos::DET,
    pos::PART,
    pos::PRON,
    pos::SCONJ,
];

const SYMBOLS: &[&str] = &["$", "%", "€", "£", "+", "=", "&", "#", "@"];

/// Model metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    /// Model name
    pub name: String,
    /// Language code
    pub language: String,
    /// Model version
    #[serde(default)]
    pub version: Option<String>,
}

/// Model file layout
#[derive(Debug, Deserialize)]
struct LexiconModel {
    model: ModelInfo,
    lexicon: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    suffixes: BTreeMap<String, String>,
}

/// Rule-based tagger backed by a word lexicon
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    info: ModelInfo,
    closed: HashMap<String, String>,
    open: HashMap<String, String>,
    /// Sorted longest suffix first
    suffixes: Vec<(String, String)>,
}

impl LexiconTagger {
    /// Load a model from a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`TaggerError::ModelNotFound`] if the file does not exist,
    /// [`TaggerError::ModelLoadFailed`] if it cannot be read, and
    /// [`TaggerError::InvalidModel`] if its content is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TaggerError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TaggerError::ModelNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            TaggerError::ModelLoadFailed(format!("{}: {e}", path.display()))
        })?;

        Self::from_toml(&content)
    }

    /// Load a model from TOML content
    pub fn from_toml(content: &str) -> Result<Self, TaggerError> {
        let model: LexiconModel = toml::from_str(content)
            .map_err(|e| TaggerError::InvalidModel(format!("failed to parse model TOML: {e}")))?;

        if model.lexicon.is_empty() {
            return Err(TaggerError::InvalidModel(format!(
                "model '{}' has an empty lexicon",
                model.model.name
            )));
        }

        let mut closed = HashMap::new();
        let mut open = HashMap::new();

        for (tag, words) in &model.lexicon {
            if tag.is_empty() || tag.chars().any(|c| !c.is_ascii_uppercase()) {
                return Err(TaggerError::InvalidModel(format!(
                    "lexicon tag '{tag}' must be an uppercase part-of-speech tag"
                )));
            }
            let target = if CLOSED_CLASSES.contains(&tag.as_str()) {
                &mut closed
            } else {
                &mut open
            };
            for word in words {
                target
                    .entry(word.to_lowercase())
                    .or_insert_with(|| tag.clone());
            }
        }

        let mut suffixes: Vec<(String, String)> = model.suffixes.into_iter().collect();
        suffixes.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        Ok(Self {
            info: model.model,
            closed,
            open,
            suffixes,
        })
    }

    /// Load the model embedded in the binary
    pub fn embedded() -> Result<Self, TaggerError> {
        Self::from_toml(EMBEDDED_MODEL)
    }

    /// Model metadata
    pub fn info(&self) -> &ModelInfo {
        &self.info
    }

    /// Number of lexicon entries
    pub fn vocabulary_size(&self) -> usize {
        self.closed.len() + self.open.len()
    }

    fn pos_for(&self, word: &str, sentence_start: bool) -> String {
        if is_placeholder(word) {
            return pos::NOUN.to_string();
        }

        if !word.chars().any(char::is_alphanumeric) {
            let tag = if SYMBOLS.contains(&word) {
                pos::SYM
            } else {
                pos::PUNCT
            };
            return tag.to_string();
        }

        if is_numeral(word) {
            return pos::NUM.to_string();
        }

        if word.chars().count() > 1 && word.chars().all(|c| c.is_uppercase()) {
            return pos::PROPN.to_string();
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.closed.get(&lower) {
            return tag.clone();
        }

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !sentence_start {
            return pos::PROPN.to_string();
        }

        if let Some(tag) = self.open.get(&lower) {
            return tag.clone();
        }

        if capitalized {
            return pos::PROPN.to_string();
        }

        self.suffixes
            .iter()
            .find(|(suffix, _)| lower.len() > suffix.len() + 2 && lower.ends_with(suffix.as_str()))
            .map(|(_, tag)| tag.clone())
            .unwrap_or_else(|| pos::NOUN.to_string())
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let words = tokenize(text);

        let mut tags = Vec::with_capacity(words.len());
        let mut sentence_start = true;
        for word in &words {
            tags.push(self.pos_for(word, sentence_start));
            sentence_start = matches!(word.as_str(), "." | "!" | "?");
        }

        let deps = assign_dependencies(&tags);

        words
            .into_iter()
            .zip(tags)
            .zip(deps)
            .map(|((text, pos), dep)| TaggedToken::new(text, pos, dep))
            .collect()
    }

    fn name(&self) -> &str {
        &self.info.name
    }
}

fn is_numeral(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':' | '-' | '/'))
}

fn is_nominal(tag: &str) -> bool {
    matches!(tag, "NOUN" | "PROPN" | "PRON")
}

/// Assign shallow dependency labels from a part-of-speech sequence
///
/// - the first verb (or auxiliary if there is none) is `ROOT`
/// - prepositions are `prep`; the last nominal of the phrase that follows a preposition
///   (after optional determiners, adjectives and numerals) is `pobj`, earlier nominals in
///   that run are `compound`
/// - nominals before the root are `nsubj` (run-final) or `compound`
/// - determiners `det`, adjectives `amod`, punctuation `punct`, everything else `dep`
pub fn assign_dependencies(tags: &[String]) -> Vec<&'static str> {
    let mut deps = vec![dep::DEP; tags.len()];

    let root = tags
        .iter()
        .position(|t| t == pos::VERB)
        .or_else(|| tags.iter().position(|t| t == pos::AUX));

    for (i, tag) in tags.iter().enumerate() {
        deps[i] = match tag.as_str() {
            "PUNCT" => dep::PUNCT,
            "DET" => dep::DET,
            "ADJ" => dep::AMOD,
            "ADP" => dep::PREP,
            t if is_nominal(t) && root.is_some_and(|r| i < r) => {
                let next_nominal = tags.get(i + 1).is_some_and(|n| is_nominal(n));
                if next_nominal {
                    dep::COMPOUND
                } else {
                    dep::NSUBJ
                }
            }
            _ => dep::DEP,
        };
    }

    if let Some(r) = root {
        deps[r] = dep::ROOT;
    }

    for (i, tag) in tags.iter().enumerate() {
        if tag != pos::ADP {
            continue;
        }

        let mut j = i + 1;
        while j < tags.len() && matches!(tags[j].as_str(), "DET" | "ADJ" | "NUM") {
            j += 1;
        }

        let start = j;
        while j < tags.len() && is_nominal(&tags[j]) {
            j += 1;
        }

        if j > start {
            for label in deps.iter_mut().take(j - 1).skip(start) {
                *label = dep::COMPOUND;
            }
            deps[j - 1] = dep::POBJ;
        }
    }

    deps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger() -> LexiconTagger {
        LexiconTagger::embedded().unwrap()
    }

    fn triples(tokens: &[TaggedToken]) -> Vec<(&str, &str, &str)> {
        tokens
            .iter()
            .map(|t| (t.text.as_str(), t.pos.as_str(), t.dep.as_str()))
            .collect()
    }

    #[test]
    fn test_embedded_model_loads() {
        let tagger = tagger();
        assert_eq!(tagger.name(), "en_core_lexicon");
        assert_eq!(tagger.info().language, "en");
        assert!(tagger.vocabulary_size() > 100);
    }

    #[test]
    fn test_tag_location_sentence() {
        let tokens = tagger().tag("I live in Paris .");
        assert_eq!(
            triples(&tokens),
            vec![
                ("I", "PRON", "nsubj"),
                ("live", "VERB", "ROOT"),
                ("in", "ADP", "prep"),
                ("Paris", "PROPN", "pobj"),
                (".", "PUNCT", "punct"),
            ]
        );
    }

    #[test]
    fn test_tag_multi_word_proper_noun() {
        let tokens = tagger().tag("I live in New York City .");
        let tags: Vec<&str> = tokens.iter().map(|t| t.pos.as_str()).collect();
        assert_eq!(tags, vec!["PRON", "VERB", "ADP", "PROPN", "PROPN", "PROPN", "PUNCT"]);
        assert_eq!(tokens[3].dep, "compound");
        assert_eq!(tokens[5].dep, "pobj");
    }

    #[test]
    fn test_sentence_initial_capital_uses_lexicon() {
        let tokens = tagger().tag("The hotel is nice .");
        assert_eq!(tokens[0].pos, "DET");
        assert_eq!(tokens[2].pos, "AUX");
        assert_eq!(tokens[3].pos, "ADJ");

        let tokens = tagger().tag("Paris is nice .");
        assert_eq!(tokens[0].pos, "PROPN");
    }

    #[test]
    fn test_numerals_symbols_and_suffixes() {
        let tokens = tagger().tag("It costs $ 20 and moves quickly");
        assert_eq!(tokens[2].pos, "SYM");
        assert_eq!(tokens[3].pos, "NUM");
        assert_eq!(tokens[6].pos, "ADV");
    }

    #[test]
    fn test_placeholder_is_not_a_proper_noun() {
        let tokens = tagger().tag("I live in [LOCATION] .");
        assert_eq!(tokens[3].text, "[LOCATION]");
        assert_ne!(tokens[3].pos, "PROPN");
    }

    #[test]
    fn test_invalid_model() {
        assert!(matches!(
            LexiconTagger::from_toml("not = [valid"),
            Err(TaggerError::InvalidModel(_))
        ));

        let empty = "[model]\nname = \"x\"\nlanguage = \"en\"\n[lexicon]\n";
        assert!(matches!(
            LexiconTagger::from_toml(empty),
            Err(TaggerError::InvalidModel(_))
        ));

        let bad_tag = "[model]\nname = \"x\"\nlanguage = \"en\"\n[lexicon]\nnoun = [\"dog\"]\n";
        assert!(matches!(
            LexiconTagger::from_toml(bad_tag),
            Err(TaggerError::InvalidModel(_))
        ));
    }

    #[test]
    fn test_missing_model_file() {
        let result = LexiconTagger::from_file("/nonexistent/model.toml");
        assert!(matches!(result, Err(TaggerError::ModelNotFound(_))));
    }

    #[test]
    fn test_dependencies_without_verb() {
        let tags: Vec<String> = ["ADP", "DET", "PROPN"].iter().map(|s| s.to_string()).collect();
        assert_eq!(assign_dependencies(&tags), vec!["prep", "det", "pobj"]);
    }
}
