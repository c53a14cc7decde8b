//! Query-structure productions: sub-queries, table factors and join chains, assignment
//! lists.

use super::{comma, kw, op, prod, rule};
use crate::{FsmDef, FINAL};

// ( SELECT ... ) | ( ... UNION ... )
pub(crate) static SUB_QUERY: FsmDef = FsmDef {
    name: "SubQuery",
    rules: &[
        rule(&[0], op("("), 1),
        rule(&[1], prod("Union"), 2),
        rule(&[1], prod("Select"), 2),
        rule(&[2], op(")"), FINAL),
    ],
    soft_accepts: &[],
    finish: None,
};

// table_factor:
//    tbl_name [[AS] alias] [index_hint_list]
//  | table_subquery [AS] alias
//  | ( table_references )
pub(crate) static TABLE_FACTOR: FsmDef = FsmDef {
    name: "TableFactor",
    rules: &[
        rule(&[0], prod("TableName"), 1),
        rule(&[1], kw("AS"), 2),
        rule(&[1, 2], prod("Identifier"), 3),
        rule(&[1, 3, 5], prod("IndexHintOption"), 4),
        rule(&[4], comma(), 5),
        rule(&[0], prod("SubQuery"), 6),
        rule(&[6], kw("AS"), 7),
        rule(&[6, 7], prod("Identifier"), FINAL),
        rule(&[0], op("("), 8),
        rule(&[8], prod("TableReference"), 9),
        rule(&[9], op(")"), FINAL),
    ],
    soft_accepts: &[1, 3, 4],
    finish: None,
};

// table_reference: table_factor followed by any chain of joins, each with an optional
// ON expression or USING column list.
pub(crate) static TABLE_REFERENCE: FsmDef = FsmDef {
    name: "TableReference",
    rules: &[
        rule(&[0], prod("TableFactor"), 1),
        rule(&[1], kw("INNER"), 2),
        rule(&[1], kw("CROSS"), 2),
        rule(&[1, 2], kw("JOIN"), 3),
        rule(&[3], prod("TableFactor"), 4),
        rule(&[4, 10, 14], kw("ON"), 5),
        rule(&[5], prod("Expression"), 1),
        rule(&[4, 14], kw("USING"), 6),
        rule(&[6], op("("), 7),
        rule(&[7], prod("ColumnNameList"), 8),
        rule(&[8], op(")"), 1),
        rule(&[1], kw("STRAIGHT_JOIN"), 9),
        rule(&[9], prod("TableFactor"), 10),
        rule(&[1], kw("LEFT"), 11),
        rule(&[1], kw("RIGHT"), 11),
        rule(&[11], kw("OUTER"), 12),
        rule(&[11, 12], kw("JOIN"), 13),
        rule(&[13], prod("TableFactor"), 14),
        rule(&[1], kw("NATURAL"), 15),
        rule(&[15], kw("LEFT"), 16),
        rule(&[15], kw("RIGHT"), 16),
        rule(&[16], kw("OUTER"), 17),
        rule(&[15, 16, 17], kw("JOIN"), 18),
        rule(&[18], prod("TableFactor"), 1),
    ],
    soft_accepts: &[1, 4, 10],
    finish: None,
};

// escaped_table_reference [, escaped_table_reference] ...  with the `{ OJ ... }` wrapper
// reduced to its OJ keyword, as in the reference tables.
pub(crate) static TABLE_REFERENCE_LIST: FsmDef = FsmDef {
    name: "TableReferenceList",
    rules: &[
        rule(&[0, 2, 3], prod("TableReference"), 1),
        rule(&[0, 3], kw("OJ"), 2),
        rule(&[1], comma(), 3),
    ],
    soft_accepts: &[1],
    finish: None,
};

// col_name = expr
pub(crate) static ASSIGNMENT_EXPRESSION: FsmDef = FsmDef {
    name: "AssignmentExpression",
    rules: &[
        rule(&[0], prod("ColumnName"), 1),
        rule(&[1], op("="), 2),
        rule(&[2], prod("Expression"), FINAL),
    ],
    soft_accepts: &[],
    finish: None,
};

// assignment [, assignment] ...
pub(crate) static ASSIGNMENT_LIST_EXPRESSION: FsmDef = FsmDef {
    name: "AssignmentListExpression",
    rules: &[
        rule(&[0, 2], prod("AssignmentExpression"), 1),
        rule(&[1], comma(), 2),
    ],
    soft_accepts: &[1],
    finish: None,
};
