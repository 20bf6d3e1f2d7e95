//! Rule-based word tokenizer
//!
//! Splits text at Unicode word boundaries (UAX #29) and drops the whitespace segments,
//! so punctuation comes out as its own tokens. Two small passes then run over the
//! segments: `[UPPER]` placeholders such as `[LOCATION]` are merged back into one token
//! so that scrubbed text can be re-tagged by a later scrubber, and the `n't` and `'s`
//! clitics are separated from their host word.

use unicode_segmentation::UnicodeSegmentation;

const CLITICS: &[&str] = &["n't", "'s"];

/// Tokenize text into surface tokens in linear order
pub fn tokenize(text: &str) -> Vec<String> {
    let segments: Vec<&str> = text.split_word_bounds().collect();
    let mut tokens = Vec::with_capacity(segments.len());

    let mut i = 0;
    while i < segments.len() {
        if let [open, label, close, ..] = &segments[i..] {
            if *open == "[" && *close == "]" && is_placeholder_label(label) {
                tokens.push(format!("[{label}]"));
                i += 3;
                continue;
            }
        }

        let segment = segments[i];
        if !segment.trim().is_empty() {
            split_clitic(segment, &mut tokens);
        }
        i += 1;
    }

    tokens
}

/// Whether a token is a category placeholder like `[LOCATION]`
pub fn is_placeholder(token: &str) -> bool {
    token
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(is_placeholder_label)
}

fn is_placeholder_label(label: &str) -> bool {
    !label.is_empty() && label.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}

fn split_clitic(word: &str, out: &mut Vec<String>) {
    for clitic in CLITICS {
        if word.len() <= clitic.len() {
            continue;
        }
        let split_at = word.len() - clitic.len();
        if let (Some(host), Some(tail)) = (word.get(..split_at), word.get(split_at..)) {
            if tail.eq_ignore_ascii_case(clitic) {
                out.push(host.to_string());
                out.push(tail.to_string());
                return;
            }
        }
    }
    out.push(word.to_string());
}
