//! The grammar: one [FsmDef] per production, declared as flat rule tables, plus the two
//! hand-written parsers (bare identifiers and expressions). State numbers and rule order are
//! the grammar; they follow the MySQL 5.x reference syntax the productions are named after.

mod definitions;
mod expression;
mod names;
mod options;
mod query;
mod statements;

#[cfg(test)]
mod __tests__;

pub(crate) use expression::parse_expression;
pub(crate) use names::parse_identifier;

use crate::{Acceptor, FsmDef, FsmRule, State, TokenKind};

pub(crate) const fn rule(from: &'static [State], accept: Acceptor, to: State) -> FsmRule {
    FsmRule { from, accept, to }
}

/// A keyword with this exact (upper-case) text.
pub(crate) const fn kw(text: &'static str) -> Acceptor {
    Acceptor::Token(TokenKind::Keyword, Some(text))
}

/// An operator with this exact text.
pub(crate) const fn op(text: &'static str) -> Acceptor {
    Acceptor::Token(TokenKind::Operator, Some(text))
}

/// The `,` delimiter.
pub(crate) const fn comma() -> Acceptor {
    Acceptor::Token(TokenKind::Delimiter, Some(","))
}

/// Any token of the given kind.
pub(crate) const fn tok(kind: TokenKind) -> Acceptor {
    Acceptor::Token(kind, None)
}

/// A token of the given kind with this exact text.
pub(crate) const fn lit(kind: TokenKind, text: &'static str) -> Acceptor {
    Acceptor::Token(kind, Some(text))
}

/// A named sub-production, resolved through the registry when the rule is tried.
pub(crate) const fn prod(name: &'static str) -> Acceptor {
    Acceptor::Production(name)
}

/// Every FSM component production, for registry construction.
pub(crate) static COMPONENT_DEFS: &[&FsmDef] = &[
    &names::DATABASE_NAME,
    &names::TABLE_NAME,
    &names::TABLE_NAME_LIST,
    &names::COLUMN_NAME,
    &names::COLUMN_NAME_LIST,
    &names::INDEX_COLUMN_NAME,
    &names::INDEX_COLUMN_NAME_LIST,
    &names::CHARSET_NAME,
    &names::COLLATION_NAME,
    &names::ENGINE_NAME,
    &options::NUMERIC_OPTION_VALUE,
    &options::BOOLEAN_OPTION_VALUE,
    &options::STRING_OPTION_VALUE,
    &options::DATABASE_OPTION,
    &options::TABLE_OPTION,
    &options::TABLE_OPTION_LIST,
    &options::INDEX_TYPE,
    &options::INDEX_OPTION,
    &options::REFERENCE_OPTION,
    &options::ORDER_OPTION,
    &options::ORDER_LIST_OPTION,
    &options::INDEX_HINT_OPTION,
    &options::EXPORT_OPTION,
    &definitions::DATA_TYPE,
    &definitions::REFERENCE_DEFINITION,
    &definitions::COLUMN_DEFINITION,
    &definitions::SUB_PARTITION_DEFINITION,
    &definitions::PARTITION_DEFINITION,
    &definitions::CREATE_TABLE_DEFINITION,
    &definitions::SUB_PARTITIONING_EXPRESSION,
    &definitions::PARTITIONING_EXPRESSION,
    &definitions::PARTITION_OPTION,
    &definitions::ALTER_TABLE_SPECIFICATION,
    &query::SUB_QUERY,
    &query::TABLE_FACTOR,
    &query::TABLE_REFERENCE,
    &query::TABLE_REFERENCE_LIST,
    &query::ASSIGNMENT_EXPRESSION,
    &query::ASSIGNMENT_LIST_EXPRESSION,
];

/// Every statement production, for registry construction and the dispatcher.
pub(crate) static STATEMENT_DEFS: &[&FsmDef] = &[
    &statements::ALTER_DATABASE,
    &statements::ALTER_TABLE,
    &statements::CREATE_DATABASE,
    &statements::CREATE_TABLE,
    &statements::CREATE_INDEX,
    &statements::DELETE,
    &statements::DROP_DATABASE,
    &statements::DROP_TABLE,
    &statements::DROP_INDEX,
    &statements::EXPLAIN,
    &statements::INSERT,
    &statements::RENAME_TABLE,
    &statements::REPLACE,
    &statements::SELECT,
    &statements::UNION,
    &statements::SET,
    &statements::SHOW,
    &statements::TRUNCATE_TABLE,
    &statements::UPDATE,
    &statements::USE,
];

/// Strip the backtick quoting of an identifier spelling.
pub(crate) fn unquote(text: &str) -> String {
    text.trim_matches('`').to_string()
}
