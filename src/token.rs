use crate::{Token, TokenKind};
use std::fmt::{Display, Formatter};

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Whitespace and comments: preserved in the tree, ignored by grammar rules.
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Space | TokenKind::Comment)
    }

    pub(crate) fn is_delimiter(&self, text: &str) -> bool {
        self.kind == TokenKind::Delimiter && self.text == text
    }

    pub(crate) fn is_operator(&self, text: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == text
    }

    pub(crate) fn is_keyword(&self, text: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == text
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Space => "Space",
            TokenKind::Comment => "Comment",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::Null => "Null",
            TokenKind::Str => "String",
            TokenKind::Numeric => "Numeric",
            TokenKind::Bit => "Bit",
            TokenKind::Hexadecimal => "Hexadecimal",
            TokenKind::QuotedIdentifier => "QuotedIdentifier",
            TokenKind::UnquotedIdentifier => "UnquotedIdentifier",
            TokenKind::Operator => "Operator",
            TokenKind::Keyword => "Keyword",
            TokenKind::Variable => "Variable",
        };
        f.write_str(name)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}: {}>", self.kind, self.text)
    }
}
