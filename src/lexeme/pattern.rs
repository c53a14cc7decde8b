use super::{leads_match, Lexeme};
use crate::{Token, TokenKind};
use regex::Regex;

/// A recognizer backed by one or more anchored regular expressions, tried in order. All
/// patterns must be `^`-anchored and must not match the empty string.
pub(crate) struct Pattern {
    kind: TokenKind,
    leads: &'static [u8],
    regexes: Vec<Regex>,
}

impl Pattern {
    pub fn new(
        kind: TokenKind,
        leads: &'static [u8],
        patterns: &[&str],
    ) -> Result<Self, String> {
        let mut regexes = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let regex = Regex::new(pattern)
                .map_err(|err| format!("Pattern should be a valid regex expression. {:?}", err))?;
            if regex.is_match("") {
                return Err(format!(
                    "Regex expression '{}' should not be nullable.",
                    regex.as_str()
                ));
            }
            regexes.push(regex);
        }
        Ok(Self {
            kind,
            leads,
            regexes,
        })
    }
}

impl Lexeme for Pattern {
    fn probe(&self, source: &str, at: usize) -> Option<Token> {
        if !leads_match(self.leads, source, at) {
            return None;
        }
        let rest = &source[at..];
        for regex in &self.regexes {
            if let Some(found) = regex.find(rest) {
                debug_assert_eq!(found.start(), 0);
                if found.end() > 0 {
                    return Some(Token::new(self.kind, found.as_str()));
                }
            }
        }
        None
    }
}
