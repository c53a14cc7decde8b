//! The production registry. Grammar rules reference each other by production name; the two
//! maps below resolve a name to its parser when the referring rule fires, which is what lets
//! the mutually recursive grammar be declared as flat tables.

use crate::grammar;
use crate::{FsmDef, ParseNode, TokenStream};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub(crate) enum Entry {
    Fsm(&'static FsmDef),
    Custom(fn(&mut TokenStream) -> Option<ParseNode>),
}

static COMPONENTS: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("Identifier", Entry::Custom(grammar::parse_identifier));
    map.insert("Expression", Entry::Custom(grammar::parse_expression));
    for def in grammar::COMPONENT_DEFS.iter().copied() {
        map.insert(def.name, Entry::Fsm(def));
    }
    map
});

static STATEMENTS: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    grammar::STATEMENT_DEFS
        .iter()
        .map(|def| (def.name, Entry::Fsm(*def)))
        .collect()
});

/// Parse the named production at the stream cursor. Component names shadow statement names;
/// both registries are searched so rules may embed statements (`SubQuery` embeds `Select`).
pub(crate) fn parse_production(name: &str, stream: &mut TokenStream) -> Option<ParseNode> {
    match COMPONENTS.get(name).or_else(|| STATEMENTS.get(name)) {
        Some(Entry::Fsm(def)) => crate::fsm::parse(def, stream),
        Some(Entry::Custom(parser)) => parser(stream),
        None => None,
    }
}

/// Parse the named statement at the stream cursor.
pub(crate) fn parse_statement(name: &str, stream: &mut TokenStream) -> Option<ParseNode> {
    match STATEMENTS.get(name) {
        Some(Entry::Fsm(def)) => crate::fsm::parse(def, stream),
        Some(Entry::Custom(parser)) => parser(stream),
        None => None,
    }
}
