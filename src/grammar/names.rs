//! Identifier and name productions, and the controlled-value names validated against the
//! charset/collation/engine allow-lists.

use super::{comma, kw, op, prod, rule, tok, unquote};
use crate::lexeme::is_non_reserved;
use crate::{Child, FsmDef, NodeMeta, ParseNode, TokenKind, TokenStream, FINAL};

/// A bare identifier: a quoted or unquoted identifier token, or a keyword from the
/// non-reserved list. Hand-written because keyword acceptance depends on the keyword text,
/// which a rule table cannot express.
pub(crate) fn parse_identifier(stream: &mut TokenStream) -> Option<ParseNode> {
    let start = stream.pos();
    let mut node = ParseNode::empty("Identifier");
    while !stream.at_end() {
        let token = match stream.next() {
            Some(token) => token,
            None => break,
        };
        if token.is_trivia() {
            node.push_token(token);
            continue;
        }
        let accepted = match token.kind {
            TokenKind::QuotedIdentifier | TokenKind::UnquotedIdentifier => true,
            TokenKind::Keyword => is_non_reserved(&token.text),
            _ => false,
        };
        if accepted {
            node.push_token(token);
            return Some(node);
        }
        break;
    }
    stream.reset(start);
    None
}

fn identifier_texts(node: &ParseNode) -> impl Iterator<Item = String> + '_ {
    node.child_nodes("Identifier").map(|child| unquote(&child.text))
}

pub(crate) static DATABASE_NAME: FsmDef = FsmDef {
    name: "DatabaseName",
    rules: &[rule(&[0], prod("Identifier"), FINAL)],
    soft_accepts: &[],
    finish: Some(|node| {
        let mut database = String::new();
        for text in identifier_texts(node) {
            database = text;
        }
        node.meta = NodeMeta::Database { database };
        true
    }),
};

// tbl_name | db_name.tbl_name
pub(crate) static TABLE_NAME: FsmDef = FsmDef {
    name: "TableName",
    rules: &[
        rule(&[0], prod("Identifier"), 1),
        rule(&[0, 1], op("."), 2),
        rule(&[2], prod("Identifier"), FINAL),
    ],
    soft_accepts: &[1],
    finish: Some(|node| {
        let mut database = String::new();
        let mut table = String::new();
        for text in identifier_texts(node) {
            if !table.is_empty() {
                database = std::mem::take(&mut table);
            }
            table = text;
        }
        node.meta = NodeMeta::Table { database, table };
        true
    }),
};

pub(crate) static TABLE_NAME_LIST: FsmDef = FsmDef {
    name: "TableNameList",
    rules: &[
        rule(&[0, 2], prod("TableName"), 1),
        rule(&[1], comma(), 2),
    ],
    soft_accepts: &[1],
    finish: None,
};

// col_name | tbl_name.col_name | db_name.tbl_name.col_name
pub(crate) static COLUMN_NAME: FsmDef = FsmDef {
    name: "ColumnName",
    rules: &[
        rule(&[0], prod("Identifier"), 1),
        rule(&[1], op("."), 2),
        rule(&[2], prod("Identifier"), 3),
        rule(&[3], op("."), 4),
        rule(&[4], prod("Identifier"), FINAL),
    ],
    soft_accepts: &[1, 3],
    finish: Some(|node| {
        let mut database = String::new();
        let mut table = String::new();
        let mut column = String::new();
        for text in identifier_texts(node) {
            if !column.is_empty() && !table.is_empty() {
                database = std::mem::take(&mut table);
                table = std::mem::take(&mut column);
            } else if !column.is_empty() {
                table = std::mem::take(&mut column);
            }
            column = text;
        }
        node.meta = NodeMeta::Column {
            database,
            table,
            column,
        };
        true
    }),
};

pub(crate) static COLUMN_NAME_LIST: FsmDef = FsmDef {
    name: "ColumnNameList",
    rules: &[
        rule(&[0, 2], prod("ColumnName"), 1),
        rule(&[1], comma(), 2),
    ],
    soft_accepts: &[1],
    finish: None,
};

// col_name [(length)] [ASC | DESC]
pub(crate) static INDEX_COLUMN_NAME: FsmDef = FsmDef {
    name: "IndexColumnName",
    rules: &[
        rule(&[0], prod("ColumnName"), 1),
        rule(&[1], op("("), 2),
        rule(&[2], tok(TokenKind::Numeric), 3),
        rule(&[3], op(")"), 4),
        rule(&[1, 4], kw("ASC"), FINAL),
        rule(&[1, 4], kw("DESC"), FINAL),
    ],
    soft_accepts: &[1, 4],
    finish: None,
};

pub(crate) static INDEX_COLUMN_NAME_LIST: FsmDef = FsmDef {
    name: "IndexColumnNameList",
    rules: &[
        rule(&[0, 2], prod("IndexColumnName"), 1),
        rule(&[1], comma(), 2),
    ],
    soft_accepts: &[1],
    finish: None,
};

/// Character sets recognized by the dialect, sorted for binary search. Decoded values are
/// lower-cased before the lookup.
pub(crate) static CHARSETS: &[&str] = &[
    "armscii8", "ascii", "big5", "binary", "cp1250", "cp1251", "cp1256", "cp1257", "cp850",
    "cp852", "cp866", "cp932", "dec8", "eucjpms", "euckr", "gb2312", "gbk", "geostd8", "greek",
    "hebrew", "hp8", "keybcs2", "koi8r", "koi8u", "latin1", "latin2", "latin5", "latin7",
    "macce", "macroman", "sjis", "swe7", "tis620", "ucs2", "ujis", "utf16", "utf32", "utf8",
    "utf8mb4",
];

/// Legal trailing segments of a collation name, sorted for binary search.
static COLLATION_SUFFIXES: &[&str] = &["ai", "as", "bin", "ci", "cs"];

/// Storage engines recognized by the dialect, sorted for binary search. Decoded values are
/// upper-cased before the case-sensitive lookup, so the mixed-case `MyISAM` entry never
/// matches; kept verbatim from the reference vocabulary.
static ENGINES: &[&str] = &[
    "ARCHIVE", "BLACKHOLE", "CSV", "FEDERATED", "INNODB", "MEMORY", "MERGE", "MyISAM",
];

fn first_token_text(node: &ParseNode, kinds: &[TokenKind]) -> Option<String> {
    node.children
        .iter()
        .filter_map(Child::as_token)
        .find(|token| kinds.contains(&token.kind))
        .map(|token| token.text.clone())
}

pub(crate) static CHARSET_NAME: FsmDef = FsmDef {
    name: "CharsetName",
    rules: &[rule(&[0], tok(TokenKind::UnquotedIdentifier), FINAL)],
    soft_accepts: &[],
    finish: Some(|node| {
        let charset = match first_token_text(node, &[TokenKind::UnquotedIdentifier]) {
            Some(text) => text.to_lowercase(),
            None => return false,
        };
        if CHARSETS.binary_search(&charset.as_str()).is_err() {
            return false;
        }
        node.meta = NodeMeta::Charset(charset);
        true
    }),
};

pub(crate) static COLLATION_NAME: FsmDef = FsmDef {
    name: "CollationName",
    rules: &[rule(&[0], tok(TokenKind::UnquotedIdentifier), FINAL)],
    soft_accepts: &[],
    finish: Some(|node| {
        let collation = match first_token_text(node, &[TokenKind::UnquotedIdentifier]) {
            Some(text) => text.to_lowercase(),
            None => return false,
        };
        let pieces: Vec<&str> = collation.split('_').collect();
        if CHARSETS.binary_search(&pieces[0]).is_err() {
            return false;
        }
        if COLLATION_SUFFIXES
            .binary_search(&pieces[pieces.len() - 1])
            .is_err()
        {
            return false;
        }
        node.meta = NodeMeta::Collation(collation);
        true
    }),
};

pub(crate) static ENGINE_NAME: FsmDef = FsmDef {
    name: "EngineName",
    rules: &[
        rule(&[0], tok(TokenKind::UnquotedIdentifier), FINAL),
        rule(&[0], tok(TokenKind::Keyword), FINAL),
    ],
    soft_accepts: &[],
    finish: Some(|node| {
        let engine = match first_token_text(
            node,
            &[TokenKind::UnquotedIdentifier, TokenKind::Keyword],
        ) {
            Some(text) => text.to_uppercase(),
            None => return false,
        };
        if ENGINES.binary_search(&engine.as_str()).is_err() {
            return false;
        }
        node.meta = NodeMeta::Engine(engine);
        true
    }),
};
