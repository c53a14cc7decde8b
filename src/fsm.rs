//! The shared state-machine driver. Every FSM production runs through [parse]; the grammar
//! differs only in the rule list, the soft-accept set and the finishing hook.

use crate::logger::{trace, LogLevel};
use crate::registry;
use crate::{Acceptor, Checkpoint, FsmDef, ParseNode, TokenStream, FINAL};

/// Drive a production over the stream. On success the cursor rests after the consumed tokens
/// and the node (with decoded fields) is returned; on failure the cursor is rewound to where
/// it was on entry.
pub(crate) fn parse(def: &FsmDef, stream: &mut TokenStream) -> Option<ParseNode> {
    let start = stream.pos();
    match drive(def, stream) {
        Some(mut node) => {
            if let Some(finish) = def.finish {
                if !finish(&mut node) {
                    trace(LogLevel::Info, || {
                        format!("{}: rejected by validation", def.name)
                    });
                    stream.reset(start);
                    return None;
                }
            }
            Some(node)
        }
        None => {
            stream.reset(start);
            None
        }
    }
}

fn drive(def: &FsmDef, stream: &mut TokenStream) -> Option<ParseNode> {
    let mut node = ParseNode::empty(def.name);
    let mut state = 0;
    let mut checkpoint: Option<Checkpoint> = None;

    while !stream.at_end() {
        let token = match stream.next() {
            Some(token) => token,
            None => break,
        };
        trace(LogLevel::Info, || {
            format!("{}: state {} sees {}", def.name, state, token)
        });
        if token.is_trivia() {
            node.push_token(token);
            continue;
        }
        if token.is_delimiter(";") {
            // A statement delimiter ends the production wherever it stands; it is left for
            // the caller.
            stream.back_up();
            break;
        }

        let mut fired = false;
        let mut current = token;
        for rule in def.rules {
            if !rule.from.contains(&state) {
                continue;
            }
            match rule.accept {
                Acceptor::Token(kind, literal) => {
                    if current.kind == kind && literal.map_or(true, |text| current.text == text) {
                        fired = true;
                        state = rule.to;
                        trace(LogLevel::Info, || {
                            format!("{}: token rule fired, now in state {}", def.name, state)
                        });
                        node.push_token(current);
                        if state == FINAL {
                            return Some(node);
                        }
                        save_checkpoint(def, stream, &node, state, &mut checkpoint);
                        break;
                    }
                }
                Acceptor::Production(name) => {
                    stream.back_up();
                    match registry::parse_production(name, stream) {
                        Some(child) => {
                            fired = true;
                            state = rule.to;
                            trace(LogLevel::Info, || {
                                format!(
                                    "{}: production rule {} fired, now in state {}",
                                    def.name, name, state
                                )
                            });
                            node.push_node(child);
                            if state == FINAL {
                                return Some(node);
                            }
                            save_checkpoint(def, stream, &node, state, &mut checkpoint);
                            break;
                        }
                        None => {
                            // The sub-parser rewound to the probe token; take it again so the
                            // remaining rules of this scan test the same token.
                            match stream.next() {
                                Some(token) => current = token,
                                None => break,
                            }
                        }
                    }
                }
            }
        }

        if !fired {
            return match checkpoint {
                Some(saved) => {
                    trace(LogLevel::Info, || {
                        format!(
                            "{}: no rule from state {}, rolling back to state {} at {}",
                            def.name, state, saved.state, saved.pos
                        )
                    });
                    node.truncate(saved.children);
                    stream.reset(saved.pos);
                    Some(node)
                }
                None => {
                    stream.back_up();
                    None
                }
            };
        }
    }

    if def.soft_accepts.contains(&state) {
        Some(node)
    } else {
        None
    }
}

fn save_checkpoint(
    def: &FsmDef,
    stream: &TokenStream,
    node: &ParseNode,
    state: crate::State,
    checkpoint: &mut Option<Checkpoint>,
) {
    if def.soft_accepts.contains(&state) {
        *checkpoint = Some(Checkpoint {
            pos: stream.pos(),
            state,
            children: node.children.len(),
        });
        trace(LogLevel::Info, || {
            format!(
                "{}: checkpoint at {} in state {}",
                def.name,
                stream.pos(),
                state
            )
        });
    }
}
