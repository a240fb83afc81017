//! Numeral extraction and placeholder substitution.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::spell::spell_out;

// Standalone digit runs only; digits embedded in alphanumeric tokens
// ("abc123") are not matched.
static NUMERAL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[0-9]+\b").unwrap());

/// Ordered mapping from placeholder token to spelled-out word.
///
/// One entry per numeral occurrence in order of first appearance; repeated
/// numerals get distinct tokens. Tokens have the form `{NUM<k>}` with a
/// 1-based counter, which cannot occur in natural text, so later substitution
/// is plain substring replacement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceholderMap {
    entries: Vec<(String, String)>,
}

impl PlaceholderMap {
    pub fn insert(&mut self, token: String, word: String) {
        self.entries.push((token, word));
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, w)| w.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, String)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Replace every standalone integer in `text` with a `{NUM<k>}` placeholder.
///
/// Returns the rewritten text and the map from placeholder to the number's
/// spelled-out English form. Leading zeros parse as plain integers ("007" is
/// spelled "seven"). Digit runs too large for `u64` are left verbatim in the
/// text rather than silently wrapped; they get no placeholder.
pub fn extract_numerals(text: &str) -> (String, PlaceholderMap) {
    let mut map = PlaceholderMap::default();
    let mut counter = 0usize;

    let replaced = NUMERAL_PATTERN.replace_all(text, |caps: &Captures<'_>| {
        let run = &caps[0];
        match run.parse::<u64>() {
            Ok(number) => {
                counter += 1;
                let token = format!("{{NUM{counter}}}");
                map.insert(token.clone(), spell_out(number));
                token
            }
            Err(_) => {
                tracing::warn!(run, "digit run does not fit u64, leaving it untouched");
                run.to_string()
            }
        }
    });

    (replaced.into_owned(), map)
}

/// Rewrite placeholders back into the text using the (translated) map.
///
/// Tokens are disjoint and non-overlapping by construction, so the order of
/// replacement across placeholders does not matter.
pub fn substitute_placeholders(text: &str, map: &PlaceholderMap) -> String {
    let mut result = text.to_string();
    for (token, word) in map.iter() {
        result = result.replace(token.as_str(), word);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_digits_returns_text_unchanged() {
        let (text, map) = extract_numerals("nta mibare irimo");
        assert_eq!(text, "nta mibare irimo");
        assert!(map.is_empty());
    }

    #[test]
    fn each_occurrence_gets_its_own_placeholder() {
        let (text, map) = extract_numerals("3 and 3 and 3");
        assert_eq!(text, "{NUM1} and {NUM2} and {NUM3}");
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("{NUM1}"), Some("three"));
        assert_eq!(map.get("{NUM3}"), Some("three"));
    }

    #[test]
    fn apples_and_oranges_scenario() {
        let (text, map) = extract_numerals("I have 3 apples and 12 oranges");
        assert_eq!(text, "I have {NUM1} apples and {NUM2} oranges");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("{NUM1}"), Some("three"));
        assert_eq!(map.get("{NUM2}"), Some("twelve"));
    }

    #[test]
    fn digits_inside_words_are_untouched() {
        let (text, map) = extract_numerals("room A42b and item abc123");
        assert_eq!(text, "room A42b and item abc123");
        assert!(map.is_empty());
    }

    #[test]
    fn leading_zeros_parse_as_plain_integers() {
        let (text, map) = extract_numerals("agent 007");
        assert_eq!(text, "agent {NUM1}");
        assert_eq!(map.get("{NUM1}"), Some("seven"));
    }

    #[test]
    fn oversized_run_is_left_verbatim() {
        let big = "99999999999999999999999999"; // > u64::MAX
        let input = format!("id {big} and 5");
        let (text, map) = extract_numerals(&input);
        assert_eq!(text, format!("id {big} and {{NUM1}}"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("{NUM1}"), Some("five"));
    }

    #[test]
    fn identity_substitution_round_trip() {
        let input = "pay 1500 francs to 12 people by day 3";
        let (with_placeholders, map) = extract_numerals(input);
        let restored = substitute_placeholders(&with_placeholders, &map);
        assert!(!restored.contains("{NUM"));
        assert_eq!(
            restored,
            "pay one thousand five hundred francs to twelve people by day three"
        );
    }
}
