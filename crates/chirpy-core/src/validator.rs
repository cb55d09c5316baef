//! Chirp length validation and forbidden-word masking.
//!
//! A chirp is valid when it has at most [`MAX_CHIRP_LENGTH`] Unicode code
//! points. Valid chirps are sanitized by splitting on single spaces,
//! replacing every token that equals a forbidden word (ignoring case)
//! with [`MASK`], and joining back with single spaces.
//!
//! Matching is whole-token only: `kerfuffle!` is left alone because the
//! punctuation makes it a different token. Runs of spaces survive the
//! round trip as empty tokens, while tabs and newlines are never split on.

use std::collections::BTreeSet;

/// Maximum chirp length in Unicode code points.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Replacement written in place of a forbidden token.
pub const MASK: &str = "****";

/// Words masked when no custom list is configured.
pub const DEFAULT_FORBIDDEN_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Reasons a chirp can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The chirp exceeds the length limit.
    #[error("chirp too long")]
    TooLong {
        /// Length of the rejected chirp in code points.
        length: usize,
        /// The limit it was checked against.
        max: usize,
    },
}

/// Chirp text that passed validation and had forbidden words masked.
///
/// Only [`ContentValidator::validate`] constructs this, so holding one
/// proves the text is safe to persist or echo back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedContent(String);

impl SanitizedContent {
    /// Borrow the sanitized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the sanitized text.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Pure, stateless chirp validator.
///
/// Holds an immutable set of lowercase forbidden words. Shared across
/// requests behind an [`Arc`](std::sync::Arc) without synchronization.
#[derive(Debug, Clone)]
pub struct ContentValidator {
    forbidden: BTreeSet<String>,
    max_length: usize,
}

impl ContentValidator {
    /// Validator using [`DEFAULT_FORBIDDEN_WORDS`].
    pub fn new() -> Self {
        Self::with_words(DEFAULT_FORBIDDEN_WORDS)
    }

    /// Validator masking a caller-supplied word list instead of the default.
    ///
    /// Words are lowercased on the way in so lookups only lowercase the token.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            forbidden: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            max_length: MAX_CHIRP_LENGTH,
        }
    }

    /// Check the length limit, then mask forbidden tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLong`] when `content` has more than
    /// [`MAX_CHIRP_LENGTH`] code points.
    pub fn validate(&self, content: &str) -> Result<SanitizedContent, ValidationError> {
        let length = content.chars().count();
        if length > self.max_length {
            return Err(ValidationError::TooLong {
                length,
                max: self.max_length,
            });
        }
        Ok(SanitizedContent(self.mask(content)))
    }

    fn mask(&self, content: &str) -> String {
        content
            .split(' ')
            .map(|token| if self.is_forbidden(token) { MASK } else { token })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn is_forbidden(&self, token: &str) -> bool {
        !token.is_empty() && self.forbidden.contains(&token.to_lowercase())
    }
}

impl Default for ContentValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn clean(content: &str) -> String {
        ContentValidator::new()
            .validate(content)
            .unwrap()
            .into_string()
    }

    #[test]
    fn masks_forbidden_word() {
        assert_eq!(
            clean("This is a kerfuffle opinion I need to share with the world"),
            "This is a **** opinion I need to share with the world"
        );
    }

    #[test]
    fn matching_ignores_case_but_mask_is_fixed() {
        assert_eq!(clean("I hear Mastodon is better than Chirpy. sharbert I need to migrate"),
            "I hear Mastodon is better than Chirpy. **** I need to migrate");
        assert_eq!(clean("KERFUFFLE Fornax sHaRbErT"), "**** **** ****");
    }

    #[test]
    fn punctuation_prevents_match() {
        assert_eq!(clean("what a kerfuffle!"), "what a kerfuffle!");
        assert_eq!(clean("Sharbert! fornax."), "Sharbert! fornax.");
    }

    #[test]
    fn substrings_are_not_masked() {
        assert_eq!(clean("kerfuffles fornaxian"), "kerfuffles fornaxian");
    }

    #[test]
    fn clean_text_is_unchanged() {
        let text = "I had something interesting for breakfast";
        assert_eq!(clean(text), text);
    }

    #[test]
    fn empty_string_is_valid() {
        assert_eq!(clean(""), "");
    }

    #[test]
    fn space_runs_are_kept_as_empty_tokens() {
        assert_eq!(clean("a  kerfuffle   b"), "a  ****   b");
        assert_eq!(clean(" fornax "), " **** ");
    }

    #[test]
    fn tabs_are_not_token_separators() {
        assert_eq!(clean("fornax\tfornax"), "fornax\tfornax");
    }

    #[test]
    fn length_limit_counts_code_points() {
        let validator = ContentValidator::new();
        let exactly = "é".repeat(MAX_CHIRP_LENGTH);
        assert!(exactly.len() > MAX_CHIRP_LENGTH);
        assert!(validator.validate(&exactly).is_ok());

        let over = "a".repeat(MAX_CHIRP_LENGTH + 1);
        assert_eq!(
            validator.validate(&over),
            Err(ValidationError::TooLong {
                length: 141,
                max: MAX_CHIRP_LENGTH,
            })
        );
    }

    #[test]
    fn too_long_message() {
        let err = ContentValidator::new()
            .validate(&"x".repeat(200))
            .unwrap_err();
        assert_eq!(err.to_string(), "chirp too long");
    }

    #[test]
    fn too_long_wins_even_with_forbidden_words() {
        let text = "kerfuffle ".repeat(20);
        assert!(ContentValidator::new().validate(&text).is_err());
    }

    #[test]
    fn validate_is_idempotent() {
        let validator = ContentValidator::new();
        let inputs = [
            "kerfuffle",
            "This is a kerfuffle opinion",
            "  Fornax  sharbert ",
            "nothing to see here",
            "",
        ];
        for input in inputs {
            let once = validator.validate(input).unwrap();
            let twice = validator.validate(once.as_str()).unwrap();
            assert_eq!(once, twice, "input: {input:?}");
        }
    }

    #[test]
    fn custom_word_list_replaces_default() {
        let validator = ContentValidator::with_words(["Bother"]);
        let out = validator.validate("oh bother kerfuffle").unwrap();
        assert_eq!(out.as_str(), "oh **** kerfuffle");
    }
}
