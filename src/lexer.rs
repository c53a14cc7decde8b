use crate::lexeme::{KeywordProbe, Lexeme, NullProbe, Pattern, Punctuations};
use crate::logger::{trace, LogLevel};
use crate::{ParseError, SourceText, Token, TokenKind};
use once_cell::sync::Lazy;

/// Operator spellings. Longest-match is resolved by the punctuation trie, so `<=>` wins over
/// `<=` wins over `<`.
static OPERATORS: &[&str] = &[
    "&&", "&", "||", "|", "~",
    "<<", "<=>", ">>", "<=", ">=",
    "<>", ">", "<", "!=", "!",
    "+", "-", "*", "/", "^",
    "%", "=", ":=", "(", ")",
    ".",
];

struct Lexer {
    probes: Vec<Box<dyn Lexeme>>,
}

/// The recognizer order is part of the dialect: `Null` runs before `Keyword` so `NULL` lexes
/// as a null literal, strings before operators so quote contents never shed operators, and
/// the identifier probe runs last as the catch-all for word-like text.
static LEXER: Lazy<Lexer> = Lazy::new(|| {
    let probes: Vec<Box<dyn Lexeme>> = vec![
        Box::new(Punctuations::new(TokenKind::Delimiter, &[",", ";"]).unwrap()),
        Box::new(NullProbe),
        Box::new(Pattern::new(TokenKind::Space, b" \t\n\r", &[r"^\s+"]).unwrap()),
        Box::new(
            Pattern::new(
                TokenKind::Comment,
                b"-/#",
                &[r"^(--\s+|#).*?(\r\n|\r|\n|$)", r"^/\*.*?\*/"],
            )
            .unwrap(),
        ),
        Box::new(
            Pattern::new(
                TokenKind::Str,
                b"N\"'",
                &[r"(?i)^N?(''|'.*?[^\\]')", r#"(?is)^N?(""|".*?[^\\]")"#],
            )
            .unwrap(),
        ),
        Box::new(
            Pattern::new(
                TokenKind::QuotedIdentifier,
                b"`",
                &[r"^`(``|[\x{0001}-\x{005f}\x{0061}-\x{ffff}])+`"],
            )
            .unwrap(),
        ),
        Box::new(Punctuations::new(TokenKind::Operator, OPERATORS).unwrap()),
        Box::new(
            Pattern::new(
                TokenKind::Numeric,
                b"+-.0123456789",
                &[r"(?i)^[+-]?(\d+(\.\d*)?|\.\d+)(E[+-]?\d+)?"],
            )
            .unwrap(),
        ),
        Box::new(
            Pattern::new(
                TokenKind::Hexadecimal,
                b"0Xx",
                &[r"(?i)^X'([0-9A-F][0-9A-F])+'", r"^0x([0-9A-Fa-f][0-9A-Fa-f])+"],
            )
            .unwrap(),
        ),
        Box::new(
            Pattern::new(TokenKind::Bit, b"0Bb", &[r"(?i)^B'[01]+'", r"^0b[01]+"]).unwrap(),
        ),
        Box::new(
            Pattern::new(
                TokenKind::Variable,
                b"@",
                &[
                    r"(?i)^@'(''|\\|\'|[^'])*'",
                    r#"(?is)^@(""|".*?[^\\]")"#,
                    r"^@`(``|[\x{0001}-\x{005f}\x{0061}-\x{ffff}])+`",
                    r"(?i)^@[0-9a-z_.$]+",
                    r"^@@(global\.|session\.)?[a-zA-Z_-]+",
                ],
            )
            .unwrap(),
        ),
        Box::new(KeywordProbe),
        Box::new(
            Pattern::new(
                TokenKind::UnquotedIdentifier,
                b"",
                &[r"^\b[0-9a-zA-Z$_\x{0080}-\x{ffff}]+\b"],
            )
            .unwrap(),
        ),
    ];
    Lexer { probes }
});

/// Split `text` into tokens, or report the byte offset of the first position no recognizer
/// accepts. Lexing is total: the cursor advances on every emitted token.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let source = SourceText::new(text);
    let mut tokens = Vec::new();
    let mut at = 0;
    while at < text.len() {
        match LEXER.probes.iter().find_map(|probe| probe.probe(text, at)) {
            Some(token) => {
                trace(LogLevel::Info, || {
                    format!("lexed {} at byte {}", token, at)
                });
                at += token.text.len();
                tokens.push(token);
            }
            None => {
                return Err(ParseError::lex(at, source.position(at), &text[at..]));
            }
        }
    }
    Ok(tokens)
}
