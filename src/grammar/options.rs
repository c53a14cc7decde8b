//! Option productions: option values, database/table/index options, reference options,
//! ordering clauses and index hints.

use super::{comma, kw, lit, op, prod, rule, tok};
use crate::{FsmDef, TokenKind, FINAL};

// [=] value
pub(crate) static NUMERIC_OPTION_VALUE: FsmDef = FsmDef {
    name: "NumericOptionValue",
    rules: &[
        rule(&[0], op("="), 1),
        rule(&[0, 1], tok(TokenKind::Numeric), FINAL),
    ],
    soft_accepts: &[],
    finish: None,
};

// [=] {0 | 1}
pub(crate) static BOOLEAN_OPTION_VALUE: FsmDef = FsmDef {
    name: "BooleanOptionValue",
    rules: &[
        rule(&[0], op("="), 1),
        rule(&[0, 1], lit(TokenKind::Numeric, "0"), FINAL),
        rule(&[0, 1], lit(TokenKind::Numeric, "1"), FINAL),
    ],
    soft_accepts: &[],
    finish: None,
};

// [=] 'string'
pub(crate) static STRING_OPTION_VALUE: FsmDef = FsmDef {
    name: "StringOptionValue",
    rules: &[
        rule(&[0], op("="), 1),
        rule(&[0, 1], tok(TokenKind::Str), FINAL),
    ],
    soft_accepts: &[],
    finish: None,
};

// [DEFAULT] CHARACTER SET [=] charset_name | [DEFAULT] COLLATE [=] collation_name
pub(crate) static DATABASE_OPTION: FsmDef = FsmDef {
    name: "DatabaseOption",
    rules: &[
        rule(&[0], kw("DEFAULT"), 1),
        rule(&[0, 1], kw("CHARACTER"), 2),
        rule(&[0, 1], kw("COLLATE"), 5),
        rule(&[2], kw("SET"), 3),
        rule(&[0, 1], kw("CHARSET"), 3),
        rule(&[3], op("="), 4),
        rule(&[3, 4], prod("CharsetName"), FINAL),
        rule(&[5], op("="), 6),
        rule(&[5, 6], prod("CollationName"), FINAL),
    ],
    soft_accepts: &[],
    finish: None,
};

// table_option:
//   AUTO_INCREMENT [=] value
// | AVG_ROW_LENGTH [=] value
// | [DEFAULT] CHARACTER SET [=] charset_name
// | CHECKSUM [=] {0 | 1}
// | [DEFAULT] COLLATE [=] collation_name
// | COMMENT [=] 'string'
// | CONNECTION [=] 'connect_string'
// | {DATA|INDEX} DIRECTORY [=] 'absolute path to directory'
// | DELAY_KEY_WRITE [=] {0 | 1}
// | ENGINE [=] engine_name
// | INSERT_METHOD [=] { NO | FIRST | LAST }
// | KEY_BLOCK_SIZE [=] value
// | MAX_ROWS [=] value
// | MIN_ROWS [=] value
// | PACK_KEYS [=] {0 | 1 | DEFAULT}
// | PASSWORD [=] 'string'
// | ROW_FORMAT [=] {DEFAULT|DYNAMIC|FIXED|COMPRESSED|REDUNDANT|COMPACT}
// | TABLESPACE tablespace_name [STORAGE {DISK|MEMORY|DEFAULT}]
// | UNION [=] (tbl_name[,tbl_name]...)
pub(crate) static TABLE_OPTION: FsmDef = FsmDef {
    name: "TableOption",
    rules: &[
        rule(&[0], kw("AUTO_INCREMENT"), 1),
        rule(&[1], prod("NumericOptionValue"), FINAL),
        rule(&[0], kw("AVG_ROW_LENGTH"), 2),
        rule(&[2], prod("NumericOptionValue"), FINAL),
        rule(&[0], prod("DatabaseOption"), FINAL),
        rule(&[0], kw("CHECKSUM"), 3),
        rule(&[3], prod("BooleanOptionValue"), FINAL),
        rule(&[0], kw("COMMENT"), 4),
        rule(&[4], prod("StringOptionValue"), FINAL),
        rule(&[0], kw("CONNECTION"), 5),
        rule(&[5], prod("StringOptionValue"), FINAL),
        rule(&[0], kw("DATA"), 6),
        rule(&[0], kw("INDEX"), 6),
        rule(&[6], kw("DIRECTORY"), 7),
        rule(&[7], prod("StringOptionValue"), FINAL),
        rule(&[0], kw("DELAY_KEY_WRITE"), 8),
        rule(&[8], prod("BooleanOptionValue"), FINAL),
        rule(&[0], kw("ENGINE"), 9),
        rule(&[9], op("="), 25),
        rule(&[9, 25], prod("EngineName"), FINAL),
        rule(&[0], kw("INSERT_METHOD"), 10),
        rule(&[10], op("="), 11),
        rule(&[10, 11], kw("NO"), FINAL),
        rule(&[10, 11], kw("FIRST"), FINAL),
        rule(&[10, 11], kw("LAST"), FINAL),
        rule(&[0], kw("KEY_BLOCK_SIZE"), 12),
        rule(&[12], prod("NumericOptionValue"), FINAL),
        rule(&[0], kw("MAX_ROWS"), 13),
        rule(&[13], prod("NumericOptionValue"), FINAL),
        rule(&[0], kw("MIN_ROWS"), 14),
        rule(&[14], prod("NumericOptionValue"), FINAL),
        rule(&[0], kw("PACK_KEYS"), 15),
        rule(&[15], op("="), 16),
        rule(&[15, 16], lit(TokenKind::Numeric, "0"), FINAL),
        rule(&[15, 16], lit(TokenKind::Numeric, "1"), FINAL),
        rule(&[15, 16], kw("DEFAULT"), FINAL),
        rule(&[0], kw("PASSWORD"), 17),
        rule(&[17], prod("StringOptionValue"), FINAL),
        // A second INSERT_METHOD arm carrying the ROW_FORMAT value set, kept verbatim from
        // the reference grammar tables.
        rule(&[0], kw("INSERT_METHOD"), 18),
        rule(&[18], op("="), 19),
        rule(&[18, 19], kw("DEFAULT"), FINAL),
        rule(&[18, 19], kw("DYNAMIC"), FINAL),
        rule(&[18, 19], kw("FIXED"), FINAL),
        rule(&[18, 19], kw("COMPRESSED"), FINAL),
        rule(&[18, 19], kw("REDUNDANT"), FINAL),
        rule(&[18, 19], kw("COMPACT"), FINAL),
        rule(&[0], kw("TABLESPACE"), 20),
        rule(&[20], prod("Identifier"), 21),
        rule(&[21], kw("STORAGE"), 22),
        rule(&[22], kw("DISK"), FINAL),
        rule(&[22], kw("MEMORY"), FINAL),
        rule(&[22], kw("DEFAULT"), FINAL),
        rule(&[0], kw("UNION"), 23),
        rule(&[23], op("="), 24),
        rule(&[23, 24], prod("TableNameList"), FINAL),
    ],
    soft_accepts: &[21],
    finish: None,
};

// table_option [[,] table_option] ...
pub(crate) static TABLE_OPTION_LIST: FsmDef = FsmDef {
    name: "TableOptionList",
    rules: &[
        rule(&[0, 1, 2], prod("TableOption"), 1),
        rule(&[1], comma(), 2),
    ],
    soft_accepts: &[1],
    finish: None,
};

// USING {BTREE | HASH}
pub(crate) static INDEX_TYPE: FsmDef = FsmDef {
    name: "IndexType",
    rules: &[
        rule(&[0], kw("USING"), 1),
        rule(&[1], kw("BTREE"), FINAL),
        rule(&[1], kw("HASH"), FINAL),
    ],
    soft_accepts: &[],
    finish: None,
};

// KEY_BLOCK_SIZE [=] value | index_type | WITH PARSER parser_name | COMMENT 'string'
pub(crate) static INDEX_OPTION: FsmDef = FsmDef {
    name: "IndexOption",
    rules: &[
        rule(&[0], kw("KEY_BLOCK_SIZE"), 1),
        rule(&[1], prod("NumericOptionValue"), FINAL),
        rule(&[0], prod("IndexType"), FINAL),
        rule(&[0], kw("WITH"), 2),
        rule(&[2], kw("PARSER"), 3),
        rule(&[3], prod("Identifier"), FINAL),
        rule(&[0], kw("COMMENT"), 4),
        rule(&[4], tok(TokenKind::Str), FINAL),
    ],
    soft_accepts: &[],
    finish: None,
};

// RESTRICT | CASCADE | SET NULL | NO ACTION | SET DEFAULT
pub(crate) static REFERENCE_OPTION: FsmDef = FsmDef {
    name: "ReferenceOption",
    rules: &[
        rule(&[0], kw("RESTRICT"), FINAL),
        rule(&[0], kw("CASCADE"), FINAL),
        rule(&[0], kw("SET"), 1),
        rule(&[1], lit(TokenKind::Null, "NULL"), FINAL),
        rule(&[1], kw("DEFAULT"), FINAL),
        rule(&[0], kw("NO"), 2),
        rule(&[2], kw("ACTION"), FINAL),
    ],
    soft_accepts: &[],
    finish: None,
};

// {col_name | expr | position} [ASC | DESC]
pub(crate) static ORDER_OPTION: FsmDef = FsmDef {
    name: "OrderOption",
    rules: &[
        rule(&[0], prod("Expression"), 1),
        rule(&[0], prod("ColumnName"), 1),
        rule(&[0], tok(TokenKind::Numeric), 1),
        rule(&[1], kw("ASC"), FINAL),
        rule(&[1], kw("DESC"), FINAL),
    ],
    soft_accepts: &[1],
    finish: None,
};

pub(crate) static ORDER_LIST_OPTION: FsmDef = FsmDef {
    name: "OrderListOption",
    rules: &[
        rule(&[0, 2], prod("OrderOption"), 1),
        rule(&[1], comma(), 2),
    ],
    soft_accepts: &[1],
    finish: None,
};

// {USE|IGNORE|FORCE} {INDEX|KEY} [FOR {JOIN|ORDER BY|GROUP BY}] (index_list)
pub(crate) static INDEX_HINT_OPTION: FsmDef = FsmDef {
    name: "IndexHintOption",
    rules: &[
        rule(&[0], kw("USE"), 1),
        rule(&[1], kw("INDEX"), 2),
        rule(&[1], kw("KEY"), 2),
        rule(&[2], kw("FOR"), 3),
        rule(&[3], kw("JOIN"), 5),
        rule(&[3], kw("ORDER"), 4),
        rule(&[3], kw("GROUP"), 4),
        rule(&[4], kw("BY"), 5),
        rule(&[2, 5], op("("), 6),
        rule(&[6, 8], prod("Identifier"), 7),
        rule(&[7], comma(), 8),
        rule(&[6, 7, 15], op(")"), FINAL),
        rule(&[0], kw("IGNORE"), 9),
        rule(&[0], kw("FORCE"), 9),
        rule(&[9], kw("INDEX"), 10),
        rule(&[9], kw("KEY"), 10),
        rule(&[10], kw("FOR"), 11),
        rule(&[11], kw("JOIN"), 13),
        rule(&[11], kw("ORDER"), 12),
        rule(&[11], kw("GROUP"), 12),
        rule(&[12], kw("BY"), 13),
        rule(&[10, 13], op("("), 14),
        rule(&[14, 16], prod("Identifier"), 15),
        rule(&[15], comma(), 16),
    ],
    soft_accepts: &[],
    finish: None,
};

// export_options: [{FIELDS | COLUMNS} ...] [LINES ...]
pub(crate) static EXPORT_OPTION: FsmDef = FsmDef {
    name: "ExportOption",
    // TODO: rule list for the FIELDS/COLUMNS and LINES clauses; with no rules the production
    // never matches and INTO OUTFILE cannot carry export options.
    rules: &[],
    soft_accepts: &[],
    finish: None,
};
