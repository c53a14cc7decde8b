//! Token recognizers. The lexer holds an ordered list of these; at each input position the
//! first recognizer that matches emits the token.

mod keyword;
mod pattern;
mod punctuation;

#[cfg(test)]
mod __tests__;

pub(crate) use keyword::{is_non_reserved, KeywordProbe, NullProbe, NON_RESERVED, RESERVED};
pub(crate) use pattern::Pattern;
pub(crate) use punctuation::Punctuations;

use crate::Token;

/// A single token recognizer probing the input at a byte offset.
pub(crate) trait Lexeme: Send + Sync {
    /// Try to recognize a token at `source[at..]`. The returned token's text length is the
    /// number of consumed bytes.
    fn probe(&self, source: &str, at: usize) -> Option<Token>;
}

/// Fast rejection on the first byte, mirroring the recognizers' leading-character guards.
pub(crate) fn leads_match(leads: &[u8], source: &str, at: usize) -> bool {
    leads.is_empty() || leads.contains(&source.as_bytes()[at])
}
