use crate::{Token, TokenKind, TokenStream};
use std::fmt::Write;

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Read the token at the cursor and advance. Returns a clone; the underlying vector is
    /// immutable for the lifetime of the stream.
    pub fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Set the cursor to an absolute position.
    pub fn reset(&mut self, pos: usize) {
        self.cursor = pos;
    }

    /// Rewind the cursor one token. No-op at the start of the stream.
    pub fn back_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn pos(&self) -> usize {
        self.cursor
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Up to `n` upcoming tokens, skipping whitespace and comments, without moving the cursor.
    pub fn peek_significant(&self, n: usize) -> Vec<&Token> {
        let mut picked = Vec::new();
        for token in &self.tokens[self.cursor.min(self.tokens.len())..] {
            if token.is_trivia() {
                continue;
            }
            picked.push(token);
            if picked.len() == n {
                break;
            }
        }
        picked
    }

    /// Whether any token of the stream (cursor position ignored) has the given kind and text.
    pub fn has(&self, kind: TokenKind, text: &str) -> bool {
        self.tokens
            .iter()
            .any(|token| token.kind == kind && token.text == text)
    }

    /// Split the stream into one sub-stream per top-level `;`-terminated statement, trimming
    /// leading and trailing whitespace tokens. Empty statements yield no sub-stream.
    pub fn divide(&self) -> Vec<TokenStream> {
        let mut parts = Vec::new();
        let (mut status, mut start, mut end) = (0u8, 0usize, 0usize);
        for (index, token) in self.tokens.iter().enumerate() {
            if token.is_delimiter(";") {
                if start != end {
                    parts.push(TokenStream::new(self.tokens[start..end].to_vec()));
                    start = end;
                }
                status = 0;
            } else if status == 0 {
                start = index + 1;
                end = index + 1;
                if token.kind != TokenKind::Space {
                    start = index;
                    status = 1;
                }
            } else if token.kind != TokenKind::Space {
                end = index + 1;
            }
        }
        if start != end {
            parts.push(TokenStream::new(self.tokens[start..end].to_vec()));
        }
        parts
    }

    /// Render every token as `<Kind: text>`, one per line. Used in syntax-error reports.
    pub fn dump(&self) -> String {
        let mut rendered = String::new();
        for token in &self.tokens {
            let _ = writeln!(rendered, "{}", token);
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn divide_splits_and_trims() {
        let stream = TokenStream::new(tokenize("  USE a; SELECT 1 ;;").unwrap());
        let parts = stream.divide();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].tokens.first().unwrap().text, "USE");
        assert_eq!(parts[0].tokens.last().unwrap().text, "a");
        assert_eq!(parts[1].tokens.first().unwrap().text, "SELECT");
        assert_eq!(parts[1].tokens.last().unwrap().text, "1");
    }

    #[test]
    fn peek_significant_skips_trivia() {
        let stream = TokenStream::new(tokenize("  /* hint */ SELECT  a").unwrap());
        let peeked = stream.peek_significant(2);
        assert_eq!(peeked.len(), 2);
        assert_eq!(peeked[0].text, "SELECT");
        assert_eq!(peeked[1].text, "a");
    }

    #[test]
    fn has_scans_the_whole_stream() {
        let mut stream = TokenStream::new(tokenize("SELECT 1 UNION SELECT 2").unwrap());
        stream.next();
        assert!(stream.has(TokenKind::Keyword, "UNION"));
        assert!(!stream.has(TokenKind::Keyword, "JOIN"));
    }
}
