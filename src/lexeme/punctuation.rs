use super::Lexeme;
use crate::{Token, TokenKind, Trie};

/// A recognizer for a set of constant spellings, matched longest-first through a byte trie.
/// One instance covers the delimiters, another the operator table.
pub(crate) struct Punctuations {
    kind: TokenKind,
    trie: Trie<usize>,
    spellings: Vec<String>,
}

impl Punctuations {
    pub fn new(kind: TokenKind, spellings: &[&str]) -> Result<Self, String> {
        let mut trie = Trie::new();
        for (index, spelling) in spellings.iter().enumerate() {
            trie.insert(spelling.as_bytes(), index).map_err(|previous| {
                format!(
                    "Punctuation '{}' is already added as '{}'",
                    spelling, spellings[previous]
                )
            })?;
        }
        Ok(Self {
            kind,
            trie,
            spellings: spellings.iter().map(|s| s.to_string()).collect(),
        })
    }
}

impl Lexeme for Punctuations {
    fn probe(&self, source: &str, at: usize) -> Option<Token> {
        let (index, len) = self.trie.find(source[at..].as_bytes())?;
        if len == 0 {
            return None;
        }
        Some(Token::new(self.kind, self.spellings[index].as_str()))
    }
}
