//! The expression scanner. Expressions are not an FSM: they may nest sub-queries at any
//! depth, the `(` + `SELECT` entry has to be predicted one token ahead, and keyword
//! acceptance depends on whether the scanner is inside a function's argument brackets.

use crate::lexeme::is_non_reserved;
use crate::logger::{trace, LogLevel};
use crate::registry;
use crate::{Child, ParseNode, Token, TokenStream};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Keywords legal anywhere inside an expression.
static EXPRESSION_KEYWORDS: &[&str] = &[
    "AND", "BETWEEN", "BINARY", "CASE", "COLLATE",
    "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER", "DIV",
    "ELSE", "END", "EXISTS", "IN", "INTERVAL",
    "IS", "LAST_DAY", "LIKE", "LOCALTIME", "LOCALTIMESTAMP",
    "MATCH", "MOD", "NOT", "OR", "REGEXP",
    "RLIKE", "SOUNDS", "THEN", "WHEN", "XOR",
];

/// Keywords legal only between a function's brackets (`GROUP_CONCAT(x ORDER BY y)`).
static IN_FUNCTION_KEYWORDS: &[&str] = &[
    "AS", "ASC", "BY", "DESC", "DISTINCT",
    "GROUP", "ORDER", "SEPARATOR", "USING",
];

/// Built-in function names an expression may call.
static SUPPORTED_FUNCTIONS: &[&str] = &[
    "ABS", "ACOS", "ADDDATE", "ADDTIME", "AES_DECRYPT",
    "AES_ENCRYPT", "ASCII", "ASIN", "ATAN", "ATAN2",
    "AVG", "BENCHMARK", "BIN", "BIT_AND", "BIT_COUNT",
    "BIT_LENGTH", "BIT_OR", "BIT_XOR", "CAST", "CEIL",
    "CEILING", "CHAR", "CHARACTER_LENGTH", "CHARSET", "CHAR_LENGTH",
    "COERCIBILITY", "COLLATION", "COMPRESS", "CONCAT", "CONCAT_WS",
    "CONNECTION_ID", "CONV", "CONVERT", "CONVERT_TZ", "COS",
    "COT", "COUNT", "CRC32", "CURDATE", "CURRENT_DATE",
    "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER", "CURTIME", "DATABASE",
    "DATE", "DATEDIFF", "DATE_ADD", "DATE_FORMAT", "DATE_SUB",
    "DAY", "DAYNAME", "DAYOFMONTH", "DAYOFWEEK", "DAYOFYEAR",
    "DECODE", "DEFAULT", "DEGREES", "DES_DECRYPT", "DES_ENCRYPT",
    "ELT", "ENCODE", "ENCRYPT", "EXP", "EXPORT_SET",
    "EXTRACT", "FIELD", "FIND_IN_SET", "FLOOR", "FORMAT",
    "FORM_UNIXTIME", "FOUND_ROWS", "FROM_DAYS", "GET_FORMAT", "GET_LOCK",
    "GROUP_CONCAT", "HEX", "HOUR", "IF", "IFNULL",
    "INET_ATON", "INET_NTOA", "INSERT", "INSTR", "IS_FREE_LOCK",
    "IS_USED_LOCK", "LAST_INSERT_ID", "LCASE", "LEFT", "LENGTH",
    "LN", "LOAD_FILE", "LOCALTIME", "LOCALTIMESTAMP", "LOCATE",
    "LOG", "LOG10", "LOG2", "LOWER", "LPAD",
    "LTRIM", "MAKEDATE", "MAKETIME", "MAKE_SET", "MASTER_POS_WAIT",
    "MAX", "MD5", "MICROSECOND", "MID", "MIN",
    "MINUTE", "MOD", "MONTH", "MONTHNAME", "NAME_CONST",
    "NOW", "NULLIF", "OCT", "OCTET_LENGTH", "OLD_PASSWORD",
    "ORD", "PASSWORD", "PERIOD_ADD", "PERIOD_DIFF", "PI",
    "POSITION", "POW", "POWER", "QUARTER", "QUOTE",
    "RADIANS", "RAND", "RELEASE_LOCK", "REPEAT", "REPLACE",
    "REVERSE", "RIGHT", "ROUND", "ROW_COUNT", "RPAD",
    "RTRIM", "SCHEMA", "SECOND", "SESSION_USER", "SET_TO_TIME",
    "SHA", "SHA1", "SHA2", "SIGN", "SIN",
    "SLEEP", "SOUNDEX", "SPACE", "SQRT", "STD",
    "STDDEV", "STDDEV_POP", "STDDEV_SAMP", "STRCMP", "STR_TO_DATE",
    "SUBDATE", "SUBSTR", "SUBSTRING", "SUBSTRING_INDEX", "SUM",
    "SYSDATE", "SYSTEM_USER", "TAN", "TIME", "TIMEDIFF",
    "TIMESTAMP", "TIMESTAMPADD", "TIMESTAMPDIFF", "TIME_FORMAT", "TIME_TO_SEC",
    "TO_DAYS", "TO_SECONDS", "TRIM", "TRUNCATE", "UCASE",
    "UNCOMPRESS", "UNCOMPRESSED_LENGTH", "UNHEX", "UNIX_TIMESTAMP", "UPPER",
    "USER", "UTC_DATE", "UTC_TIME", "UTC_TIMESTAMP", "UUID",
    "UUID_SHORT", "VALUES", "VARIANCE", "VAR_POP", "VAR_SAMP",
    "VERSION", "WEEK", "WEEKDAY", "WEEKOFYEAR", "YEAR",
    "YEARWEEK",
];

static EXPRESSION_KEYWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| EXPRESSION_KEYWORDS.iter().copied().collect());
static IN_FUNCTION_KEYWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| IN_FUNCTION_KEYWORDS.iter().copied().collect());
static SUPPORTED_FUNCTION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SUPPORTED_FUNCTIONS.iter().copied().collect());

fn keyword_stops_scan(text: &str) -> bool {
    !EXPRESSION_KEYWORD_SET.contains(text)
        && !SUPPORTED_FUNCTION_SET.contains(text)
        && !is_non_reserved(text)
}

/// Tokens (and sub-query nodes) collected inside the current outermost bracket, flushed into
/// the expression node only when the bracket closes.
struct BracketBuffer {
    children: Vec<Child>,
    text: String,
}

impl BracketBuffer {
    fn new() -> Self {
        Self {
            children: Vec::new(),
            text: String::new(),
        }
    }

    fn push_token(&mut self, token: Token) {
        self.text.push_str(&token.text);
        self.children.push(Child::Token(token));
    }

    fn push_node(&mut self, node: ParseNode) {
        self.text.push_str(&node.text);
        self.children.push(Child::Node(node));
    }

    fn flush_into(&mut self, node: &mut ParseNode) {
        node.children.append(&mut self.children);
        node.text.push_str(&self.text);
        self.text.clear();
    }

    fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

pub(crate) fn parse_expression(stream: &mut TokenStream) -> Option<ParseNode> {
    let start = stream.pos();
    let mut node = ParseNode::empty("Expression");
    let mut depth = 0usize;
    let mut buffer = BracketBuffer::new();
    let mut last_accept = start;

    while !stream.at_end() {
        let token = match stream.next() {
            Some(token) => token,
            None => break,
        };
        trace(LogLevel::Info, || {
            format!("Expression: depth {} sees {}", depth, token)
        });

        if token.is_delimiter(";") {
            stream.back_up();
            break;
        } else if token.is_delimiter(",") {
            if depth == 0 {
                stream.back_up();
                break;
            }
            buffer.push_token(token);
            last_accept = stream.pos();
        } else if token.is_operator("(") {
            let select_ahead = stream
                .peek_significant(1)
                .first()
                .map_or(false, |next| next.is_keyword("SELECT"));
            if select_ahead {
                stream.back_up();
                match registry::parse_production("SubQuery", stream) {
                    Some(sub_query) => {
                        if depth > 0 {
                            buffer.push_node(sub_query);
                        } else {
                            node.push_node(sub_query);
                            last_accept = stream.pos();
                        }
                    }
                    None => {
                        stream.back_up();
                        break;
                    }
                }
            } else {
                buffer.push_token(token);
                depth += 1;
            }
        } else if token.is_operator(")") {
            if depth == 0 {
                stream.back_up();
                break;
            }
            buffer.push_token(token);
            depth -= 1;
            if depth == 0 {
                buffer.flush_into(&mut node);
                last_accept = stream.pos();
            }
        } else if token.kind == crate::TokenKind::Keyword
            && IN_FUNCTION_KEYWORD_SET.contains(token.text.as_str())
        {
            if depth > 0 {
                buffer.push_token(token);
            } else {
                stream.back_up();
                break;
            }
        } else if token.kind == crate::TokenKind::Keyword && keyword_stops_scan(&token.text) {
            stream.back_up();
            break;
        } else if depth > 0 {
            buffer.push_token(token);
        } else {
            let trivia = token.is_trivia();
            node.push_token(token);
            if !trivia {
                last_accept = stream.pos();
            }
        }
    }

    trace(LogLevel::Info, || {
        format!(
            "Expression: scan ends at {} (last accept {}, {} buffered)",
            stream.pos(),
            last_accept,
            buffer.children.len()
        )
    });

    if last_accept == start {
        stream.reset(start);
        return None;
    }
    if !buffer.is_empty() {
        // Unclosed brackets: accept what was complete at the last accept point and leave the
        // rest for the caller.
        stream.reset(last_accept);
    }
    Some(node)
}
