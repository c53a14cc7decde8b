use crate::{ParseError, Position};
use std::fmt::{Display, Formatter};

impl ParseError {
    pub(crate) fn lex(offset: usize, position: Position, rest: &str) -> Self {
        // A short head of the unrecognized input is enough to locate the problem.
        let context: String = rest.chars().take(32).collect();
        ParseError::Lex {
            offset,
            position,
            context,
        }
    }

    pub(crate) fn syntax(dump: String) -> Self {
        ParseError::Syntax { dump }
    }

    /// Byte offset of the failure for lex errors.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::Lex { offset, .. } => Some(*offset),
            ParseError::Syntax { .. } => None,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Lex {
                offset,
                position,
                context,
            } => write!(
                f,
                "LexError: no token matches at byte {} ({}) near '{}'",
                offset, position, context
            ),
            ParseError::Syntax { dump } => {
                writeln!(f, "SyntaxError: no statement parser accepted:")?;
                write!(f, "{}", dump)
            }
        }
    }
}

impl std::error::Error for ParseError {}
