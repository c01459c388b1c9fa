//! Word-list browsing: filter a dictionary by a fragment or a wildcard
//! pattern and a length range.
//!
//! A pattern containing `_` is a wildcard pattern: it must match the whole
//! word, with each `_` standing for exactly one character, and the match
//! mode is ignored. Any other pattern is matched by the selected mode.

use std::fmt;
use std::str::FromStr;

/// Character that matches any single letter in a pattern.
pub const WILDCARD: char = '_';

/// Where a plain (non-wildcard) pattern must occur in a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    #[default]
    StartsWith,
    EndsWith,
    Contains,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "startswith" | "prefix" => Ok(MatchMode::StartsWith),
            "endswith" | "suffix" => Ok(MatchMode::EndsWith),
            "contains" | "substring" => Ok(MatchMode::Contains),
            _ => Err(format!(
                "unknown match mode {s:?} (expected starts-with, ends-with or contains)"
            )),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchMode::StartsWith => "starts-with",
            MatchMode::EndsWith => "ends-with",
            MatchMode::Contains => "contains",
        };
        f.write_str(label)
    }
}

/// A filter over a word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordQuery {
    pattern: Vec<char>,
    mode: MatchMode,
    min_len: usize,
    max_len: Option<usize>,
}

impl WordQuery {
    /// A query for `pattern` (trimmed, case-insensitive). An empty pattern
    /// matches every word in the length range.
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.trim().to_lowercase().chars().collect(),
            mode: MatchMode::default(),
            min_len: 1,
            max_len: None,
        }
    }

    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Restrict word length in characters. A minimum of 0 is treated as 1;
    /// `None` or `Some(0)` for the maximum means unbounded.
    pub fn lengths(mut self, min_len: usize, max_len: Option<usize>) -> Self {
        self.min_len = min_len.max(1);
        self.max_len = max_len.filter(|&max| max > 0);
        self
    }

    pub fn is_wildcard(&self) -> bool {
        self.pattern.contains(&WILDCARD)
    }

    pub fn matches(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
        let len = chars.len();
        if len < self.min_len || self.max_len.is_some_and(|max| len > max) {
            return false;
        }
        if self.pattern.is_empty() {
            return true;
        }
        if self.is_wildcard() {
            return len == self.pattern.len()
                && self
                    .pattern
                    .iter()
                    .zip(&chars)
                    .all(|(&p, &c)| p == WILDCARD || p == c);
        }

        let pattern = self.pattern.as_slice();
        match self.mode {
            MatchMode::StartsWith => chars.starts_with(pattern),
            MatchMode::EndsWith => chars.ends_with(pattern),
            MatchMode::Contains => chars.windows(pattern.len()).any(|w| w == pattern),
        }
    }
}

/// Words from `words` accepted by `query`, in list order.
pub fn query<'a, S: AsRef<str>>(words: &'a [S], query: &WordQuery) -> Vec<&'a str> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| query.matches(word))
        .collect()
}
