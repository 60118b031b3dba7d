/*
    ALICE-FIX-Scan
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Tag/value tokenizer for raw log lines.
//!
//! Splits a line on a configured field delimiter into `tag=value` tokens.
//!
//! ## Splitting Rules
//!
//! 1. Tokens come back in the order they appear in the line.
//! 2. Splitting follows plain `split` semantics: an empty line yields one
//!    empty token, a trailing delimiter yields a trailing empty token, and
//!    two adjacent delimiters yield an empty token between them.
//! 3. Tokens are not validated; a token without `=` is still a token.
//!
//! ## Zero-copy design
//!
//! Every token is a sub-slice of the input line. Nothing is allocated except
//! the `Vec` returned by [`TagTokenizer::tokenize`]; [`TagTokenizer::tokens`]
//! avoids even that.

use crate::error::ConfigError;
use crate::tag::SOH_STR;

/// Splits log lines into `tag=value` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTokenizer {
    delimiter: String,
}

impl TagTokenizer {
    /// Create a tokenizer for the given delimiter (a character or a short
    /// fixed string).
    pub fn new(delimiter: &str) -> Result<Self, ConfigError> {
        if delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(Self {
            delimiter: delimiter.to_string(),
        })
    }

    /// Tokenizer for the standard FIX SOH (0x01) delimiter.
    pub fn soh() -> Self {
        Self {
            delimiter: SOH_STR.to_string(),
        }
    }

    /// The configured delimiter.
    #[inline]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Split `line` into its tokens, left to right.
    pub fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        self.tokens(line).collect()
    }

    /// Lazy form of [`tokenize`](Self::tokenize).
    #[inline]
    pub fn tokens<'a, 'd>(&'d self, line: &'a str) -> Tokens<'a, 'd> {
        Tokens {
            remaining: Some(line),
            delimiter: &self.delimiter,
        }
    }
}

/// An iterator over delimiter-separated tokens of one line.
///
/// Yields `&str` sub-slices of the line. Unlike a wire-format field iterator,
/// empty segments are kept so that token positions mirror the raw line.
#[derive(Debug, Clone)]
pub struct Tokens<'a, 'd> {
    /// `None` once the final segment has been yielded.
    remaining: Option<&'a str>,
    delimiter: &'d str,
}

impl<'a, 'd> Iterator for Tokens<'a, 'd> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        let rest = self.remaining?;
        match rest.find(self.delimiter) {
            Some(end) => {
                self.remaining = Some(&rest[end + self.delimiter.len()..]);
                Some(&rest[..end])
            }
            None => {
                self.remaining = None;
                Some(rest)
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
