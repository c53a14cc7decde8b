use crate::lexer::tokenize;
use crate::TokenKind;

fn lexed(sql: &str) -> Vec<(TokenKind, String)> {
    tokenize(sql)
        .unwrap()
        .into_iter()
        .map(|token| (token.kind, token.text))
        .collect()
}

fn first(sql: &str) -> (TokenKind, String) {
    lexed(sql).remove(0)
}

#[test]
fn delimiters() {
    assert_eq!(first(";abc"), (TokenKind::Delimiter, ";".into()));
    assert_eq!(first(",abc"), (TokenKind::Delimiter, ",".into()));
}

#[test]
fn null_literals() {
    assert_eq!(first("\\N"), (TokenKind::Null, "\\N".into()));
    assert_eq!(first("null"), (TokenKind::Null, "NULL".into()));
    // NULLIF is word-bounded past NULL, so it stays a keyword.
    assert_eq!(first("NULLIF"), (TokenKind::Keyword, "NULLIF".into()));
}

#[test]
fn whitespace_runs() {
    assert_eq!(first(" abcc"), (TokenKind::Space, " ".into()));
    assert_eq!(first("\t\tabc"), (TokenKind::Space, "\t\t".into()));
    assert_eq!(first("\n \tabc"), (TokenKind::Space, "\n \t".into()));
}

#[test]
fn comments() {
    assert_eq!(first("#abcd"), (TokenKind::Comment, "#abcd".into()));
    assert_eq!(first("-- abcd"), (TokenKind::Comment, "-- abcd".into()));
    assert_eq!(first("/*abcd*/efg"), (TokenKind::Comment, "/*abcd*/".into()));
}

#[test]
fn strings() {
    for (sql, expected) in [
        ("\"\"", "\"\""),
        ("\"abc\"def", "\"abc\""),
        ("'abc'd", "'abc'"),
        ("'',''", "''"),
        ("'\\'',''", "'\\''"),
    ] {
        assert_eq!(first(sql), (TokenKind::Str, expected.into()), "{}", sql);
    }
}

#[test]
fn quoted_identifiers() {
    assert_eq!(first("`abc`"), (TokenKind::QuotedIdentifier, "`abc`".into()));
    assert_eq!(
        first("`你好`啊"),
        (TokenKind::QuotedIdentifier, "`你好`".into())
    );
}

#[test]
fn operators_prefer_the_longest_spelling() {
    assert_eq!(first("|| a"), (TokenKind::Operator, "||".into()));
    assert_eq!(first("|a"), (TokenKind::Operator, "|".into()));
    assert_eq!(first("<=> 1"), (TokenKind::Operator, "<=>".into()));
    assert_eq!(first("<= 1"), (TokenKind::Operator, "<=".into()));
    assert_eq!(first(":= 1"), (TokenKind::Operator, ":=".into()));
    assert_eq!(first("(abcd + 1)"), (TokenKind::Operator, "(".into()));
}

#[test]
fn numerics() {
    assert_eq!(first("1234"), (TokenKind::Numeric, "1234".into()));
    assert_eq!(first("1234abc"), (TokenKind::Numeric, "1234".into()));
    assert_eq!(first("-123.819"), (TokenKind::Numeric, "-123.819".into()));
    assert_eq!(first("1.5E-3 x"), (TokenKind::Numeric, "1.5E-3".into()));
}

#[test]
fn hexadecimal_and_bit_quoted_forms() {
    assert_eq!(first("X'89a1'"), (TokenKind::Hexadecimal, "X'89a1'".into()));
    assert_eq!(first("B'1011'"), (TokenKind::Bit, "B'1011'".into()));
}

#[test]
fn zero_x_prefix_lexes_as_numeric_then_identifier() {
    // The numeric recognizer runs first and claims the leading zero.
    assert_eq!(
        lexed("0xa7cd"),
        vec![
            (TokenKind::Numeric, "0".into()),
            (TokenKind::UnquotedIdentifier, "xa7cd".into()),
        ]
    );
}

#[test]
fn variables() {
    assert_eq!(first("@abc"), (TokenKind::Variable, "@abc".into()));
    assert_eq!(first("@'a b'"), (TokenKind::Variable, "@'a b'".into()));
    assert_eq!(first("@`q`"), (TokenKind::Variable, "@`q`".into()));
    assert_eq!(
        first("@@global.abc"),
        (TokenKind::Variable, "@@global.abc".into())
    );
    assert_eq!(first("@@abcd.xyz"), (TokenKind::Variable, "@@abcd".into()));
}

#[test]
fn keywords_are_upper_cased_and_word_bounded() {
    assert_eq!(first("SELECT"), (TokenKind::Keyword, "SELECT".into()));
    assert_eq!(first("update sasa"), (TokenKind::Keyword, "UPDATE".into()));
    assert_eq!(
        first("updateabc"),
        (TokenKind::UnquotedIdentifier, "updateabc".into())
    );

    for (kind, text) in lexed("select Distinct a FROM t") {
        if kind == TokenKind::Keyword {
            assert_eq!(text, text.to_uppercase());
        }
    }
}

#[test]
fn unquoted_identifiers() {
    assert_eq!(first("abc d"), (TokenKind::UnquotedIdentifier, "abc".into()));
    assert_eq!(first("t$1 x"), (TokenKind::UnquotedIdentifier, "t$1".into()));
}

#[test]
fn lexing_is_total_or_fails_with_the_offset() {
    let err = tokenize("SELECT ? FROM t").unwrap_err();
    assert_eq!(err.offset(), Some(7));

    // Identifier-cased text keeps its spelling, so the token texts rebuild the input.
    let sql = "SELECT `a`, b2 FROM x WHERE y = 'z'";
    let rebuilt: String = tokenize(sql)
        .unwrap()
        .into_iter()
        .map(|token| token.text)
        .collect();
    assert_eq!(rebuilt, sql);
}
