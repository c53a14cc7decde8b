//! The top-level entry point: lex, divide into statements, route each sub-stream to a
//! statement parser by its first two significant tokens.

use crate::logger::{trace, LogLevel};
use crate::{extract, lexer, registry};
use crate::{ParseError, ParseNode, Statement, TokenKind, TokenStream};

fn starts_with(values: &[&str], text: &str) -> bool {
    values.contains(&text)
}

fn parse_single(stream: &mut TokenStream) -> Option<ParseNode> {
    let heads = stream.peek_significant(2);
    if heads.len() != 2 {
        return None;
    }
    let (first, second) = (heads[0].text.clone(), heads[1].text.clone());

    let node = match first.as_str() {
        "CREATE" => {
            if starts_with(&["DATABASE", "SCHEMA"], &second) {
                registry::parse_statement("CreateDatabase", stream)
            } else if starts_with(&["TEMPORARY", "TABLE"], &second) {
                registry::parse_statement("CreateTable", stream)
            } else if starts_with(
                &["ONLINE", "OFFLINE", "UNIQUE", "FULLTEXT", "SPATIAL", "INDEX"],
                &second,
            ) {
                registry::parse_statement("CreateIndex", stream)
            } else {
                None
            }
        }
        "ALTER" => {
            if starts_with(&["DATABASE", "SCHEMA"], &second) {
                registry::parse_statement("AlterDatabase", stream)
            } else if starts_with(&["ONLINE", "OFFLINE", "IGNORE", "TABLE"], &second) {
                registry::parse_statement("AlterTable", stream)
            } else {
                None
            }
        }
        "DROP" => {
            if starts_with(&["DATABASE", "SCHEMA"], &second) {
                registry::parse_statement("DropDatabase", stream)
            } else if starts_with(&["TEMPORARY", "TABLE"], &second) {
                registry::parse_statement("DropTable", stream)
            } else if starts_with(&["ONLINE", "OFFLINE", "INDEX"], &second) {
                registry::parse_statement("DropIndex", stream)
            } else {
                None
            }
        }
        "RENAME" => registry::parse_statement("RenameTable", stream),
        "TRUNCATE" => registry::parse_statement("TruncateTable", stream),
        "SELECT" | "(" => {
            let mut node = None;
            if stream.has(TokenKind::Keyword, "UNION") {
                node = registry::parse_statement("Union", stream);
            }
            if node.is_none() {
                node = registry::parse_statement("Select", stream);
            }
            node
        }
        "INSERT" => registry::parse_statement("Insert", stream),
        "REPLACE" => registry::parse_statement("Replace", stream),
        "UPDATE" => registry::parse_statement("Update", stream),
        "DELETE" => registry::parse_statement("Delete", stream),
        "SET" => registry::parse_statement("Set", stream),
        "SHOW" => registry::parse_statement("Show", stream),
        "EXPLAIN" | "DESCRIBE" | "DESC" => registry::parse_statement("Explain", stream),
        "USE" => registry::parse_statement("Use", stream),
        _ => None,
    };

    if let Some(node) = &node {
        trace(LogLevel::Debug, || {
            format!("parsed statement {}", node.name)
        });
    }
    node
}

/// Parse a source string of `;`-separated statements. Statements come back in input order;
/// the first sub-stream that lexes but does not parse aborts with a syntax error carrying
/// its token dump.
pub fn parse(sql: &str) -> Result<Vec<Statement>, ParseError> {
    let tokens = lexer::tokenize(sql)?;
    let stream = TokenStream::new(tokens);

    let mut statements = Vec::new();
    for mut sub_stream in stream.divide() {
        match parse_single(&mut sub_stream) {
            // A statement must account for its whole sub-stream; a parser that stops at a
            // backtracking checkpoint with significant tokens left did not accept it.
            Some(node) if sub_stream.peek_significant(1).is_empty() => {
                let names = extract::extract(&node);
                statements.push(Statement {
                    name: node.name,
                    names,
                    node,
                });
            }
            Some(_) => {
                trace(LogLevel::Notice, || {
                    format!("statement left unconsumed tokens:\n{}", sub_stream.dump())
                });
                return Err(ParseError::syntax(sub_stream.dump()));
            }
            None => {
                trace(LogLevel::Notice, || {
                    format!("statement rejected:\n{}", sub_stream.dump())
                });
                return Err(ParseError::syntax(sub_stream.dump()));
            }
        }
    }
    Ok(statements)
}
