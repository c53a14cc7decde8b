//! A MySQL (5.x dialect) SQL parser (mysql_ast) producing a concrete syntax tree together with
//! the database and table names each statement reads or writes.
//!
//! # Overview
//! The crate parses a source string containing one or more `;`-separated MySQL statements into
//! an ordered list of [Statement] values. Each statement carries its full [ParseNode] tree —
//! every consumed token, whitespace and comments included, so the tree text round-trips the
//! input — plus the extracted [Names]: the target tables, the sub-query source tables and,
//! for database-level statements, the database name.
//!
//! # Design
//!
//! Parsing is layered. A lexer splits the input into typed [Token]s by trying an ordered list
//! of recognizers at each position. A [TokenStream] wraps the token vector with a rewindable
//! cursor. Grammar productions are small finite-state machines ([FsmDef]): a rule list mapping
//! `(state, accepted token or sub-production)` to a follow state, driven by one shared loop
//! with longest-prefix backtracking — when no rule fires, the driver rewinds to the most
//! recent *soft-accept* checkpoint instead of failing outright. Productions refer to each
//! other by name through a registry, which keeps the mutually recursive grammar (expressions
//! contain sub-queries contain `SELECT` statements contain expressions) acyclic at the code
//! level. Expressions themselves are scanned by a hand-written bracket-tracking routine
//! rather than an FSM, because they may nest arbitrary sub-queries.
//!
//! # Example
//!
//! ```
//! use mysql_ast::parse;
//!
//! let statements = parse("SELECT a, b FROM t1 WHERE c = (SELECT x FROM t2);").unwrap();
//! assert_eq!(statements.len(), 1);
//! assert_eq!(statements[0].name, "Select");
//!
//! let tables: Vec<&str> = statements[0]
//!     .names
//!     .tables
//!     .iter()
//!     .map(|t| t.table.as_str())
//!     .collect();
//! assert_eq!(tables, ["t1", "t2"]);
//! ```
//!
//! Parse failures are reported as a [ParseError]: either the byte offset of the first
//! unrecognizable character, or the token dump of the first sub-stream no statement parser
//! accepted.

mod error;
mod extract;
mod fsm;
mod grammar;
mod lexeme;
mod lexer;
mod logger;
mod node;
mod parsing;
mod position;
mod registry;
mod source;
mod stream;
mod token;
mod trie;

pub use extract::{Names, TableRef};
pub use lexer::tokenize;
pub use logger::{set_trace, LogLevel, TraceSink};
pub use parsing::parse;
pub use position::Position;

use once_cell::sync::OnceCell;

/// Discriminant of a lexed [Token].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    Space,
    Comment,
    Delimiter,
    Null,
    Str,
    Numeric,
    Bit,
    Hexadecimal,
    QuotedIdentifier,
    UnquotedIdentifier,
    Operator,
    Keyword,
    Variable,
}

/// A lexed token: its [TokenKind] and its text.
///
/// The text preserves the original spelling, with one exception fixed at lexing time:
/// keyword and `NULL` texts are upper-cased. Quoted identifiers keep their backticks and
/// the `\N` null escape is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// An ordered token sequence with a rewindable cursor.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

/// One node of the parse tree: the production name that built it, the verbatim text of every
/// consumed token (trivia included), the children in appearance order and the decoded fields
/// of name-carrying productions.
#[derive(Debug, Clone)]
pub struct ParseNode {
    pub name: &'static str,
    pub text: String,
    pub children: Vec<Child>,
    pub meta: NodeMeta,
}

/// A child of a [ParseNode]: either a consumed [Token] or a nested production node.
#[derive(Debug, Clone)]
pub enum Child {
    Token(Token),
    Node(ParseNode),
}

/// Decoded fields a production fills in once it accepts. Names are unquoted (backticks
/// stripped); charset and collation values are lower-cased, engine values upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeMeta {
    None,
    Database {
        database: String,
    },
    Table {
        database: String,
        table: String,
    },
    Column {
        database: String,
        table: String,
        column: String,
    },
    Charset(String),
    Collation(String),
    Engine(String),
}

/// FSM state number. State 0 is the entry state of every production.
pub type State = u16;

/// The single hard-accept state of every production.
pub const FINAL: State = 999;

/// What an [FsmRule] accepts: a token of a kind (optionally with an exact text), or a named
/// sub-production resolved through the registry when the rule is tried.
#[derive(Debug, Clone, Copy)]
pub enum Acceptor {
    Token(TokenKind, Option<&'static str>),
    Production(&'static str),
}

/// One transition of a production's state machine. Rules sharing a start state are tried in
/// rule-list order; the first that accepts wins.
#[derive(Debug, Clone, Copy)]
pub struct FsmRule {
    pub from: &'static [State],
    pub accept: Acceptor,
    pub to: State,
}

/// A grammar production: its rule list plus the soft-accept states at which the driver may
/// stop when no further rule fires. `finish` decodes name fields after acceptance and may
/// reject the node (allow-list validation).
pub struct FsmDef {
    pub name: &'static str,
    pub rules: &'static [FsmRule],
    pub soft_accepts: &'static [State],
    pub finish: Option<fn(&mut ParseNode) -> bool>,
}

/// The driver's record of the most recent soft-accept state passed through, kept as an
/// explicit struct so the rollback path can be exercised in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub pos: usize,
    pub state: State,
    pub children: usize,
}

/// A successfully parsed statement: its production name, its parse tree and the extracted
/// database/table names.
#[derive(Debug, Clone)]
pub struct Statement {
    pub name: &'static str,
    pub node: ParseNode,
    pub names: Names,
}

/// An error returned by [parse].
#[derive(Debug, Clone)]
pub enum ParseError {
    /// No token recognizer matched at `offset` (line/column in `position`); `context` is the
    /// head of the unrecognized input.
    Lex {
        offset: usize,
        position: Position,
        context: String,
    },
    /// No statement parser accepted the sub-stream; `dump` renders its tokens one per line.
    Syntax { dump: String },
}

/// Source text wrapper computing line/column positions from byte offsets on demand.
pub(crate) struct SourceText<'s> {
    pub value: &'s str,
    line_breaks: OnceCell<Vec<usize>>,
}

/// A byte trie for longest-match lookup of constant token spellings (operators, delimiters).
#[derive(Debug, Clone)]
pub(crate) struct Trie<T> {
    value: Option<T>,
    children: Vec<(u8, Trie<T>)>,
}
