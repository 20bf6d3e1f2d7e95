//! Normalizer behavior over a corpus of tokenizer-style inputs

use proptest::prelude::*;
use test_case::test_case;
use textscrub::anonymization::TextNormalizer;

fn normalizer() -> TextNormalizer {
    TextNormalizer::new().unwrap()
}

#[test_case("I live in Paris ." ; "trailing period")]
#[test_case("Is it far ?" ; "question mark")]
#[test_case("Wow !" ; "exclamation")]
#[test_case("It costs $ 5 ( roughly ) ." ; "dollar and parens")]
#[test_case("It doesn't matter" ; "contraction")]
#[test_case("wait . . . what ?" ; "ellipsis")]
#[test_case("a , b ; c : d" ; "separators")]
#[test_case("( ( nested ) )" ; "nested parens")]
#[test_case("He said ' hi ' ." ; "quotes")]
#[test_case("$ $ $ 1" ; "dollar run")]
#[test_case("n't" ; "bare clitic")]
#[test_case("can't won't shouldn't" ; "several contractions")]
#[test_case("   " ; "only spaces")]
#[test_case("" ; "empty")]
#[test_case("I live in [LOCATION] [LOCATION] ." ; "placeholders")]
#[test_case("Tabs\t.\tand\nnewlines\n!" ; "other whitespace")]
#[test_case("Ünïcödé wörds , ok ?" ; "non ascii")]
fn test_normalize_is_idempotent(input: &str) {
    let normalizer = normalizer();
    let once = normalizer.normalize(input).unwrap();
    let twice = normalizer.normalize(&once).unwrap();
    assert_eq!(once, twice, "input: {input:?}");
}

#[test_case("doesn't", "does not")]
#[test_case("It isn't far .", "It is not far.")]
#[test_case("I live in Paris .", "I live in Paris.")]
#[test_case("It costs $ 5 .", "It costs $5.")]
#[test_case("Call me ( maybe ) !", "Call me (maybe)!")]
#[test_case("Really ?", "Really?")]
#[test_case("Paris , France", "Paris, France")]
#[test_case("I live in [LOCATION] .", "I live in [LOCATION].")]
#[test_case("nothing to do", "nothing to do")]
fn test_normalize_expected(input: &str, expected: &str) {
    assert_eq!(normalizer().normalize(input).unwrap(), expected);
}

#[test]
fn test_words_ending_in_nt_are_untouched() {
    let normalizer = normalizer();
    assert_eq!(normalizer.normalize("can't").unwrap(), "ca not");
    assert_eq!(normalizer.normalize("don'ts").unwrap(), "don'ts");
    assert_eq!(normalizer.normalize("want").unwrap(), "want");
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in any::<String>()) {
        let normalizer = normalizer();
        let once = normalizer.normalize(&s).unwrap();
        let twice = normalizer.normalize(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalize_is_idempotent_on_token_soup(s in "[ a-z'$().!?,n]*") {
        let normalizer = normalizer();
        let once = normalizer.normalize(&s).unwrap();
        let twice = normalizer.normalize(&once).unwrap();
        prop_assert_eq!(once, twice);
    }
}
