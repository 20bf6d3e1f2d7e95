//! Text normalization
//!
//! Collapses spacing artifacts left by token-based reconstruction. The substitutions
//! run in a fixed order over the whole string and the sequence is repeated until the
//! text stops changing, which makes [`TextNormalizer::normalize`] idempotent.

use crate::domain::{Result, ScrubError};

/// Ordered `(pattern, replacement)` substitutions without lookaround
const PLAIN_RULES: &[(&str, &str)] = &[
    (r"\$\s", "$"),
    (r"\(\s", "("),
    (r"\s\)", ")"),
    (r"\s\?", "?"),
    (r"\s\.", "."),
    (r"\s'", "'"),
    (r"\s!", "!"),
];

/// Substitutions that need lookaround, applied after [`PLAIN_RULES`]
const LOOKAROUND_RULES: &[(&str, &str)] = &[
    (r"\s(?=[^\w$]\s)", ""),
    (r"(?<=\w)n't(?!\w)", " not"),
];

/// Lookarounds are one character wide, so backtracking grows linearly with the input
const BACKTRACK_LIMIT: usize = usize::MAX;

enum Matcher {
    Plain(regex::Regex),
    Lookaround(fancy_regex::Regex),
}

struct Rule {
    matcher: Matcher,
    replacement: &'static str,
}

impl Rule {
    fn apply(&self, text: &str) -> Result<String> {
        match &self.matcher {
            Matcher::Plain(regex) => Ok(regex
                .replace_all(text, regex::NoExpand(self.replacement))
                .into_owned()),
            Matcher::Lookaround(regex) => {
                let mut out = String::with_capacity(text.len());
                let mut last = 0;
                for m in regex.find_iter(text) {
                    let m = m.map_err(|e| {
                        ScrubError::Other(format!(
                            "normalization rule '{}' failed: {e}",
                            regex.as_str()
                        ))
                    })?;
                    out.push_str(&text[last..m.start()]);
                    out.push_str(self.replacement);
                    last = m.end();
                }
                out.push_str(&text[last..]);
                Ok(out)
            }
        }
    }
}

fn invalid_rule(pattern: &str, e: impl std::fmt::Display) -> ScrubError {
    ScrubError::Other(format!("invalid normalization rule '{pattern}': {e}"))
}

/// Deterministic regex-based text normalizer
pub struct TextNormalizer {
    rules: Vec<Rule>,
}

impl TextNormalizer {
    /// Compile the substitution rules
    pub fn new() -> Result<Self> {
        let mut rules = Vec::with_capacity(PLAIN_RULES.len() + LOOKAROUND_RULES.len());

        for &(pattern, replacement) in PLAIN_RULES {
            let regex = regex::Regex::new(pattern).map_err(|e| invalid_rule(pattern, e))?;
            rules.push(Rule {
                matcher: Matcher::Plain(regex),
                replacement,
            });
        }

        for &(pattern, replacement) in LOOKAROUND_RULES {
            let regex = fancy_regex::RegexBuilder::new(pattern)
                .backtrack_limit(BACKTRACK_LIMIT)
                .build()
                .map_err(|e| invalid_rule(pattern, e))?;
            rules.push(Rule {
                matcher: Matcher::Lookaround(regex),
                replacement,
            });
        }

        Ok(Self { rules })
    }

    /// Normalize text
    ///
    /// # Examples
    ///
    /// ```
    /// use textscrub::anonymization::normalizer::TextNormalizer;
    ///
    /// let normalizer = TextNormalizer::new()?;
    /// assert_eq!(normalizer.normalize("I live in Paris .")?, "I live in Paris.");
    /// assert_eq!(normalizer.normalize("It doesn't ( really ) matter")?, "It does not (really) matter");
    /// # Ok::<(), textscrub::domain::ScrubError>(())
    /// ```
    pub fn normalize(&self, text: &str) -> Result<String> {
        let mut current = self.apply_rules(text)?;
        loop {
            let next = self.apply_rules(&current)?;
            if next == current {
                return Ok(current);
            }
            current = next;
        }
    }

    fn apply_rules(&self, text: &str) -> Result<String> {
        self.rules
            .iter()
            .try_fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("rules", &self.rules.len())
            .finish()
    }
}
