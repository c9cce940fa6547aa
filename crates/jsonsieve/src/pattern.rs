//! Compiled search terms.
//!
//! A [`SearchPattern`] is built once per search term and shared by the
//! matcher and the highlighter, so both agree on what an occurrence is.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the characters of a search term are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermSyntax {
    /// The term is a literal substring. Characters such as `.`, `(` or `*`
    /// match only themselves.
    #[default]
    Literal,
    /// The term is a regular expression and is used as-is.
    ///
    /// Invalid expressions are rejected when the pattern is compiled.
    Pattern,
}

/// A case-insensitive search term, ready for matching and highlighting.
///
/// # Example
///
/// ```
/// use jsonsieve::{SearchPattern, TermSyntax};
///
/// let literal = SearchPattern::literal("a.c").unwrap();
/// assert!(literal.is_match("A.C"));
/// assert!(!literal.is_match("abc"));
///
/// let pattern = SearchPattern::new("a.c", TermSyntax::Pattern).unwrap();
/// assert!(pattern.is_match("ABC"));
/// ```
#[derive(Debug, Clone)]
pub struct SearchPattern {
    term: String,
    syntax: TermSyntax,
    regex: Regex,
}

impl SearchPattern {
    /// Compiles a search term.
    ///
    /// Returns an error only for [`TermSyntax::Pattern`] terms that are not
    /// valid regular expressions.
    pub fn new(term: &str, syntax: TermSyntax) -> Result<Self> {
        let source = match syntax {
            TermSyntax::Literal => regex::escape(term),
            TermSyntax::Pattern => term.to_string(),
        };
        let regex = RegexBuilder::new(&source).case_insensitive(true).build()?;

        Ok(SearchPattern {
            term: term.to_string(),
            syntax,
            regex,
        })
    }

    /// Compiles a literal search term.
    ///
    /// Shorthand for `SearchPattern::new(term, TermSyntax::Literal)`.
    pub fn literal(term: &str) -> Result<Self> {
        Self::new(term, TermSyntax::Literal)
    }

    /// Returns the term as supplied by the caller.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Returns how the term was interpreted.
    pub fn syntax(&self) -> TermSyntax {
        self.syntax
    }

    /// Returns `true` if the term occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}
