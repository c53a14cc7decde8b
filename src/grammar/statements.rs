//! Statement productions. Each follows the MySQL 5.x reference syntax section named in its
//! comment; the dispatcher in `parsing` routes a sub-stream to one of these.

use super::{comma, kw, op, prod, rule, tok};
use crate::{FsmDef, TokenKind, FINAL};

// 13.1.1 ALTER DATABASE
// ALTER {DATABASE | SCHEMA} [db_name] alter_specification ...
// ALTER {DATABASE | SCHEMA} db_name UPGRADE DATA DIRECTORY NAME
pub(crate) static ALTER_DATABASE: FsmDef = FsmDef {
    name: "AlterDatabase",
    rules: &[
        rule(&[0], kw("ALTER"), 1),
        rule(&[1], kw("DATABASE"), 2),
        rule(&[1], kw("SCHEMA"), 2),
        rule(&[2], prod("DatabaseName"), 3),
        rule(&[2, 3, 7], prod("DatabaseOption"), 7),
        rule(&[3], kw("UPGRADE"), 4),
        rule(&[4], kw("DATA"), 5),
        rule(&[5], kw("DIRECTORY"), 6),
        rule(&[6], kw("NAME"), FINAL),
    ],
    soft_accepts: &[7],
    finish: None,
};

// 13.1.7 ALTER TABLE
// ALTER [ONLINE|OFFLINE] [IGNORE] TABLE tbl_name
//   [alter_specification [, alter_specification] ...] [partition_options]
pub(crate) static ALTER_TABLE: FsmDef = FsmDef {
    name: "AlterTable",
    rules: &[
        rule(&[0], kw("ALTER"), 1),
        rule(&[1], kw("ONLINE"), 2),
        rule(&[1], kw("OFFLINE"), 2),
        rule(&[1, 2], kw("IGNORE"), 3),
        rule(&[1, 2, 3], kw("TABLE"), 4),
        rule(&[4], prod("TableName"), 5),
        rule(&[5, 7], prod("AlterTableSpecification"), 6),
        rule(&[6], comma(), 7),
        rule(&[5, 6, 7], prod("PartitionOption"), FINAL),
    ],
    soft_accepts: &[5, 6],
    finish: None,
};

// 13.1.10 CREATE DATABASE
// CREATE {DATABASE | SCHEMA} [IF NOT EXISTS] db_name [create_specification] ...
pub(crate) static CREATE_DATABASE: FsmDef = FsmDef {
    name: "CreateDatabase",
    rules: &[
        rule(&[0], kw("CREATE"), 1),
        rule(&[1], kw("DATABASE"), 2),
        rule(&[1], kw("SCHEMA"), 2),
        rule(&[2], kw("IF"), 3),
        rule(&[3], kw("NOT"), 4),
        rule(&[4], kw("EXISTS"), 5),
        rule(&[2, 5], prod("DatabaseName"), 6),
        rule(&[6, 7], prod("DatabaseOption"), 7),
    ],
    soft_accepts: &[6, 7],
    finish: None,
};

// 13.1.17 CREATE TABLE
// CREATE [TEMPORARY] TABLE [IF NOT EXISTS] tbl_name
//   (create_definition, ...) [table_options] [partition_options]
//   [IGNORE | REPLACE] [AS] query_expression
// CREATE [TEMPORARY] TABLE [IF NOT EXISTS] tbl_name { LIKE old_tbl | (LIKE old_tbl) }
pub(crate) static CREATE_TABLE: FsmDef = FsmDef {
    name: "CreateTable",
    rules: &[
        rule(&[0], kw("CREATE"), 1),
        rule(&[1], kw("TEMPORARY"), 2),
        rule(&[1, 2], kw("TABLE"), 3),
        rule(&[3], kw("IF"), 4),
        rule(&[4], kw("NOT"), 5),
        rule(&[5], kw("EXISTS"), 6),
        rule(&[3, 6], prod("TableName"), 7),
        rule(&[7], op("("), 8),
        rule(&[8, 17], prod("CreateTableDefinition"), 9),
        rule(&[9], comma(), 17),
        rule(&[9], op(")"), 10),
        rule(&[10], prod("TableOptionList"), 11),
        rule(&[10, 11], prod("PartitionOption"), 12),
        rule(&[10, 11, 12], kw("IGNORE"), 13),
        rule(&[10, 11, 12], kw("REPLACE"), 13),
        rule(&[10, 11, 12, 13], kw("AS"), 14),
        rule(&[10, 11, 12, 13, 14], prod("Expression"), FINAL),
        rule(&[7], kw("LIKE"), 15),
        rule(&[15], prod("TableName"), FINAL),
        rule(&[8], kw("LIKE"), 16),
        rule(&[16], op(")"), FINAL),
    ],
    soft_accepts: &[10, 11, 12],
    finish: None,
};

// 13.1.13 CREATE INDEX
// CREATE [ONLINE|OFFLINE] [UNIQUE|FULLTEXT|SPATIAL] INDEX index_name [index_type]
//   ON tbl_name (index_col_name,...) [index_option] ...
pub(crate) static CREATE_INDEX: FsmDef = FsmDef {
    name: "CreateIndex",
    rules: &[
        rule(&[0], kw("CREATE"), 1),
        rule(&[1], kw("ONLINE"), 2),
        rule(&[1], kw("OFFLINE"), 2),
        rule(&[1, 2], kw("UNIQUE"), 3),
        rule(&[1, 2], kw("FULLTEXT"), 3),
        rule(&[1, 2], kw("SPATIAL"), 3),
        rule(&[1, 2, 3], kw("INDEX"), 4),
        rule(&[4], prod("Identifier"), 5),
        rule(&[5], prod("IndexType"), 6),
        rule(&[5, 6], kw("ON"), 7),
        rule(&[7], prod("TableName"), 8),
        rule(&[8], op("("), 9),
        rule(&[9], prod("IndexColumnNameList"), 10),
        rule(&[10], op(")"), 11),
        rule(&[11, 12], prod("IndexOption"), 12),
    ],
    soft_accepts: &[11, 12],
    finish: None,
};

// 13.2.2 DELETE
// DELETE [LOW_PRIORITY] [QUICK] [IGNORE] FROM tbl_name [WHERE ...] [ORDER BY ...] [LIMIT n]
// DELETE ... tbl_name[.*] [, tbl_name[.*]] ... FROM table_references [WHERE ...]
// DELETE ... FROM tbl_name[.*] [, tbl_name[.*]] ... USING table_references [WHERE ...]
pub(crate) static DELETE: FsmDef = FsmDef {
    name: "Delete",
    rules: &[
        rule(&[0], kw("DELETE"), 1),
        rule(&[1], kw("LOW_PRIORITY"), 2),
        rule(&[1, 2], kw("QUICK"), 3),
        rule(&[1, 2, 3], kw("IGNORE"), 4),
        rule(&[1, 2, 3, 4], kw("IGNORE"), 5),
        rule(&[5], prod("TableName"), 6),
        rule(&[6], kw("WHERE"), 7),
        rule(&[7], prod("Expression"), 8),
        rule(&[6, 8], kw("ORDER"), 9),
        rule(&[9], kw("BY"), 10),
        rule(&[10], prod("OrderListOption"), 11),
        rule(&[6, 8, 11], kw("LIMIT"), 12),
        rule(&[12], tok(TokenKind::Numeric), FINAL),
        rule(&[6, 16], op("."), 13),
        rule(&[13], op("*"), 14),
        rule(&[14], comma(), 15),
        rule(&[15], prod("TableName"), 16),
        rule(&[6, 14, 16], kw("USING"), 17),
        rule(&[1, 2, 3, 4], prod("TableName"), 18),
        rule(&[18], op("."), 19),
        rule(&[19], op("*"), 20),
        rule(&[20], comma(), 18),
        rule(&[20], kw("FROM"), 17),
        rule(&[17], prod("TableReferenceList"), 21),
        rule(&[21], kw("WHERE"), 22),
        rule(&[22], prod("Expression"), FINAL),
    ],
    soft_accepts: &[6, 8, 11, 21],
    finish: None,
};

// 13.1.21 DROP DATABASE
// DROP {DATABASE | SCHEMA} [IF EXISTS] db_name
pub(crate) static DROP_DATABASE: FsmDef = FsmDef {
    name: "DropDatabase",
    rules: &[
        rule(&[0], kw("DROP"), 1),
        rule(&[1], kw("DATABASE"), 2),
        rule(&[1], kw("SCHEMA"), 2),
        rule(&[2], kw("IF"), 3),
        rule(&[3], kw("EXISTS"), 4),
        rule(&[2, 4], prod("DatabaseName"), FINAL),
    ],
    soft_accepts: &[],
    finish: None,
};

// 13.1.28 DROP TABLE
// DROP [TEMPORARY] TABLE [IF EXISTS] tbl_name [, tbl_name] ... [RESTRICT | CASCADE]
pub(crate) static DROP_TABLE: FsmDef = FsmDef {
    name: "DropTable",
    rules: &[
        rule(&[0], kw("DROP"), 1),
        rule(&[1], kw("TEMPORARY"), 2),
        rule(&[1, 2], kw("TABLE"), 3),
        rule(&[3], kw("IF"), 4),
        rule(&[4], kw("EXISTS"), 5),
        rule(&[3, 5], prod("TableNameList"), 6),
        rule(&[6], kw("RESTRICT"), FINAL),
        rule(&[6], kw("CASCADE"), FINAL),
    ],
    soft_accepts: &[6],
    finish: None,
};

// 13.1.24 DROP INDEX
// DROP [ONLINE|OFFLINE] INDEX index_name ON tbl_name
pub(crate) static DROP_INDEX: FsmDef = FsmDef {
    name: "DropIndex",
    rules: &[
        rule(&[0], kw("DROP"), 1),
        rule(&[1], kw("ONLINE"), 2),
        rule(&[1], kw("OFFLINE"), 2),
        rule(&[1, 2], kw("INDEX"), 3),
        rule(&[3], prod("Identifier"), 4),
        rule(&[4], kw("ON"), 5),
        rule(&[5], prod("TableName"), FINAL),
    ],
    soft_accepts: &[],
    finish: None,
};

// 13.8.2 EXPLAIN
// {EXPLAIN | DESCRIBE | DESC} tbl_name [col_name | wild]
// {EXPLAIN | DESCRIBE | DESC} [EXTENDED | PARTITIONS] SELECT ...
pub(crate) static EXPLAIN: FsmDef = FsmDef {
    name: "Explain",
    rules: &[
        rule(&[0], kw("EXPLAIN"), 1),
        rule(&[0], kw("DESCRIBE"), 1),
        rule(&[0], kw("DESC"), 1),
        rule(&[1], prod("TableName"), 2),
        rule(&[2], prod("ColumnName"), FINAL),
        rule(&[2], tok(TokenKind::Str), FINAL),
        rule(&[1], kw("EXTENDED"), 3),
        rule(&[1], kw("PARTITIONS"), 3),
        rule(&[1, 3], prod("Union"), FINAL),
        rule(&[1, 3], prod("Select"), FINAL),
    ],
    soft_accepts: &[2],
    finish: None,
};

// 13.2.5 INSERT
// INSERT [LOW_PRIORITY | DELAYED | HIGH_PRIORITY] [IGNORE] [INTO] tbl_name
//   [(col_name, ...)] {VALUES | VALUE} (value_list) [, (value_list)] ...
//   [ON DUPLICATE KEY UPDATE assignment_list]
// INSERT ... [INTO] tbl_name SET assignment_list [ON DUPLICATE KEY UPDATE assignment_list]
// INSERT ... [INTO] tbl_name [(col_name, ...)] SELECT ...
pub(crate) static INSERT: FsmDef = FsmDef {
    name: "Insert",
    rules: &[
        rule(&[0], kw("INSERT"), 1),
        rule(&[1], kw("LOW_PRIORITY"), 2),
        rule(&[1], kw("HIGH_PRIORITY"), 2),
        rule(&[1], kw("DELAYED"), 2),
        rule(&[1, 2], kw("IGNORE"), 3),
        rule(&[1, 2, 3], kw("INTO"), 4),
        rule(&[1, 2, 3, 4], prod("TableName"), 5),
        rule(&[5], op("("), 6),
        rule(&[6], prod("ColumnNameList"), 7),
        rule(&[7], op(")"), 8),
        rule(&[5, 8], kw("VALUES"), 9),
        rule(&[5, 8], kw("VALUE"), 9),
        rule(&[9], op("("), 10),
        rule(&[10], kw("DEFAULT"), 11),
        rule(&[10], prod("Expression"), 11),
        rule(&[11], comma(), 10),
        rule(&[11], op(")"), 12),
        rule(&[12], comma(), 9),
        rule(&[5], kw("SET"), 13),
        rule(&[13], prod("AssignmentListExpression"), 14),
        rule(&[5, 8], prod("Union"), 15),
        rule(&[5, 8], prod("Select"), 15),
        rule(&[12, 14, 15], kw("ON"), 16),
        rule(&[16], kw("DUPLICATE"), 17),
        rule(&[17], kw("KEY"), 18),
        rule(&[18], kw("UPDATE"), 19),
        rule(&[19], prod("AssignmentListExpression"), FINAL),
    ],
    soft_accepts: &[12, 14, 15],
    finish: None,
};

// 13.1.32 RENAME TABLE
// RENAME TABLE tbl_name TO new_tbl_name [, tbl_name2 TO new_tbl_name2] ...
pub(crate) static RENAME_TABLE: FsmDef = FsmDef {
    name: "RenameTable",
    rules: &[
        rule(&[0], kw("RENAME"), 1),
        rule(&[1], kw("TABLE"), 2),
        rule(&[2], prod("TableName"), 3),
        rule(&[3], kw("TO"), 4),
        rule(&[4], prod("TableName"), 5),
        rule(&[5], comma(), 2),
    ],
    soft_accepts: &[5],
    finish: None,
};

// 13.2.8 REPLACE
// REPLACE [LOW_PRIORITY | DELAYED] [IGNORE] [INTO] tbl_name
//   [(col_name, ...)] {VALUES | VALUE} (value_list) [, (value_list)] ...
// REPLACE ... [INTO] tbl_name SET assignment_list
// REPLACE ... [INTO] tbl_name [(col_name, ...)] SELECT ...
pub(crate) static REPLACE: FsmDef = FsmDef {
    name: "Replace",
    rules: &[
        rule(&[0], kw("REPLACE"), 1),
        rule(&[1], kw("LOW_PRIORITY"), 2),
        rule(&[1], kw("DELAYED"), 2),
        rule(&[1, 2], kw("IGNORE"), 3),
        rule(&[1, 2, 3], kw("INTO"), 4),
        rule(&[1, 2, 3, 4], prod("TableName"), 5),
        rule(&[5], op("("), 6),
        rule(&[6], prod("ColumnNameList"), 7),
        rule(&[7], op(")"), 8),
        rule(&[5, 8], kw("VALUES"), 9),
        rule(&[5, 8], kw("VALUE"), 9),
        rule(&[9], op("("), 10),
        rule(&[10], kw("DEFAULT"), 11),
        rule(&[10], prod("Expression"), 11),
        rule(&[11], comma(), 10),
        rule(&[11], op(")"), 12),
        rule(&[12], comma(), 9),
        rule(&[5], kw("SET"), 13),
        rule(&[13], prod("AssignmentListExpression"), FINAL),
        rule(&[5, 8], prod("Union"), FINAL),
        rule(&[5, 8], prod("Select"), FINAL),
    ],
    soft_accepts: &[12],
    finish: None,
};

// 13.2.9 SELECT
// SELECT [modifiers] select_expr [, select_expr ...]
//   [FROM table_references [WHERE ...] [GROUP BY ... [WITH ROLLUP]] [HAVING ...]
//    [ORDER BY ...] [LIMIT ...] [PROCEDURE ...] [INTO ...] [FOR UPDATE | LOCK IN SHARE MODE]]
pub(crate) static SELECT: FsmDef = FsmDef {
    name: "Select",
    rules: &[
        rule(&[0], kw("SELECT"), 1),
        rule(&[1], kw("ALL"), 2),
        rule(&[1], kw("DISTINCT"), 2),
        rule(&[1], kw("DISTINCTROW"), 2),
        rule(&[1, 2], kw("HIGH_PRIORITY"), 3),
        rule(&[1, 2, 3], kw("STRAIGHT_JOIN"), 4),
        rule(&[1, 2, 3, 4], kw("SQL_SMALL_RESULT"), 5),
        rule(&[1, 2, 3, 4, 5], kw("SQL_BIG_RESULT"), 6),
        rule(&[1, 2, 3, 4, 5, 6], kw("SQL_BUFFER_RESULT"), 7),
        rule(&[1, 2, 3, 4, 5, 6, 7], kw("SQL_CACHE"), 8),
        rule(&[1, 2, 3, 4, 5, 6, 7], kw("SQL_NO_CACHE"), 8),
        rule(&[1, 2, 3, 4, 5, 6, 7, 8], kw("SQL_CALC_FOUND_ROWS"), 9),
        rule(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 11], prod("Expression"), 10),
        rule(&[10], kw("AS"), 51),
        rule(&[51], tok(TokenKind::Str), 52),
        rule(&[51], prod("Identifier"), 52),
        rule(&[10, 52], comma(), 11),
        rule(&[10, 52], kw("FROM"), 12),
        rule(&[12], prod("TableReferenceList"), 13),
        rule(&[13], kw("WHERE"), 14),
        rule(&[14], prod("Expression"), 15),
        rule(&[13, 15], kw("GROUP"), 16),
        rule(&[16], kw("BY"), 17),
        rule(&[17], prod("Expression"), 18),
        rule(&[17], prod("ColumnName"), 18),
        rule(&[17], tok(TokenKind::Numeric), 18),
        rule(&[18], kw("ASC"), 19),
        rule(&[18], kw("DESC"), 19),
        rule(&[18, 19], comma(), 17),
        rule(&[18, 19], kw("WITH"), 20),
        rule(&[20], kw("ROLLUP"), 21),
        rule(&[13, 15, 18, 19, 21], kw("HAVING"), 22),
        rule(&[22], prod("Expression"), 23),
        rule(&[13, 15, 18, 19, 21, 23], kw("ORDER"), 24),
        rule(&[24], kw("BY"), 25),
        rule(&[25], prod("Expression"), 26),
        rule(&[25], prod("ColumnName"), 26),
        rule(&[25], tok(TokenKind::Numeric), 26),
        rule(&[26], kw("ASC"), 27),
        rule(&[26], kw("DESC"), 27),
        rule(&[26, 27], comma(), 25),
        rule(&[13, 15, 18, 19, 21, 23, 26, 27], kw("LIMIT"), 28),
        rule(&[28], tok(TokenKind::Numeric), 29),
        rule(&[29], comma(), 30),
        rule(&[29], kw("OFFSET"), 30),
        rule(&[30], tok(TokenKind::Numeric), 31),
        rule(&[13, 15, 18, 19, 21, 23, 26, 27, 29, 31], kw("PROCEDURE"), 32),
        rule(&[32], prod("Identifier"), 33),
        rule(&[33], op("("), 34),
        rule(&[34], prod("Identifier"), 35),
        rule(&[35], op(")"), 36),
        rule(&[35], comma(), 34),
        rule(
            &[13, 15, 18, 19, 21, 23, 26, 27, 29, 31, 36],
            kw("INTO"),
            37,
        ),
        rule(&[37], kw("OUTFILE"), 38),
        rule(&[38], tok(TokenKind::Str), 39),
        rule(&[39], kw("CHARACTER"), 40),
        rule(&[40], kw("SET"), 41),
        rule(&[39], kw("CHARSET"), 41),
        rule(&[41], prod("CharsetName"), 42),
        rule(&[39, 42], prod("ExportOption"), 43),
        rule(&[37], kw("DUMPFILE"), 44),
        rule(&[44], tok(TokenKind::Str), 43),
        rule(&[37, 46], tok(TokenKind::Variable), 45),
        rule(&[45], comma(), 46),
        rule(
            &[13, 15, 18, 19, 21, 23, 26, 27, 29, 31, 36, 39, 42, 43, 45],
            kw("FOR"),
            47,
        ),
        rule(&[47], kw("UPDATE"), 53),
        rule(
            &[13, 15, 18, 19, 21, 23, 26, 27, 29, 31, 36, 39, 42, 43, 45],
            kw("LOCK"),
            48,
        ),
        rule(&[48], kw("IN"), 49),
        rule(&[49], kw("SHARE"), 50),
        rule(&[50], kw("MODE"), 53),
    ],
    soft_accepts: &[
        10, 13, 15, 18, 19, 21, 23, 26, 27, 29, 31, 36, 39, 42, 43, 45, 52, 53,
    ],
    finish: None,
};

// 13.2.9.3 UNION
// SELECT ... UNION [ALL | DISTINCT] SELECT ... [UNION [ALL | DISTINCT] SELECT ...]
// (SELECT ...) UNION (SELECT ...) [ORDER BY ...] [LIMIT ...]
pub(crate) static UNION: FsmDef = FsmDef {
    name: "Union",
    rules: &[
        rule(&[0], prod("Select"), 1),
        rule(&[1, 4], kw("UNION"), 2),
        rule(&[2], kw("ALL"), 3),
        rule(&[2], kw("DISTINCT"), 3),
        rule(&[2, 3], prod("Select"), 4),
        rule(&[0], op("("), 5),
        rule(&[5], prod("Select"), 6),
        rule(&[6], op(")"), 7),
        rule(&[7, 12], kw("UNION"), 8),
        rule(&[8], kw("ALL"), 9),
        rule(&[8], kw("DISTINCT"), 9),
        rule(&[8, 9], op("("), 10),
        rule(&[10], prod("Select"), 11),
        rule(&[11], op(")"), 12),
        rule(&[12], kw("ORDER"), 13),
        rule(&[13], kw("BY"), 14),
        rule(&[14], prod("Expression"), 15),
        rule(&[14], prod("ColumnName"), 15),
        rule(&[14], tok(TokenKind::Numeric), 15),
        rule(&[15], kw("ASC"), 16),
        rule(&[15], kw("DESC"), 16),
        rule(&[16], comma(), 14),
        rule(&[12, 15, 16], kw("LIMIT"), 17),
        rule(&[17], tok(TokenKind::Numeric), 18),
        rule(&[18], comma(), 19),
        rule(&[18], kw("OFFSET"), 19),
        rule(&[19], tok(TokenKind::Numeric), FINAL),
    ],
    soft_accepts: &[4, 12, 15, 16, 18],
    finish: None,
};

// 13.7.4 SET
// SET variable_assignment [, variable_assignment] ...
// SET ONE_SHOT system_var_name = expr
// SET {CHARACTER SET | CHARSET} {'charset_name' | DEFAULT}
// SET NAMES {'charset_name' [COLLATE 'collation_name'] | DEFAULT}
pub(crate) static SET: FsmDef = FsmDef {
    name: "Set",
    rules: &[
        rule(&[0], kw("SET"), 1),
        rule(&[1, 6], kw("GLOBAL"), 2),
        rule(&[1, 6], kw("SESSION"), 2),
        rule(&[1, 6], tok(TokenKind::Variable), 3),
        rule(&[1, 2, 6], tok(TokenKind::UnquotedIdentifier), 3),
        rule(&[1, 2, 6], tok(TokenKind::Keyword), 3),
        rule(&[3], op("="), 4),
        rule(&[4], prod("Expression"), 5),
        rule(&[5], comma(), 6),
        rule(&[1], kw("ONE_SHOT"), 7),
        rule(&[7], tok(TokenKind::UnquotedIdentifier), 8),
        rule(&[7], tok(TokenKind::Keyword), 8),
        rule(&[8], op("="), 9),
        rule(&[9], prod("Expression"), FINAL),
        rule(&[1], kw("CHARACTER"), 10),
        rule(&[10], kw("SET"), 11),
        rule(&[1], kw("CHARSET"), 11),
        rule(&[11], kw("DEFAULT"), FINAL),
        rule(&[11], prod("CharsetName"), FINAL),
        rule(&[1], kw("NAMES"), 12),
        rule(&[12], kw("DEFAULT"), FINAL),
        rule(&[12], prod("CharsetName"), 13),
        rule(&[13], kw("COLLATE"), 14),
        rule(&[14], prod("CollationName"), FINAL),
    ],
    soft_accepts: &[5, 13],
    finish: None,
};

// 13.7.5 SHOW — the show-target table from the reference manual, one arm per target.
pub(crate) static SHOW: FsmDef = FsmDef {
    name: "Show",
    rules: &[
        rule(&[0], kw("SHOW"), 1),
        rule(&[1], kw("AUTHORS"), FINAL),
        rule(&[1], kw("BINARY"), 2),
        rule(&[1], kw("MASTER"), 2),
        rule(&[2], kw("LOGS"), FINAL),
        rule(&[1], kw("BINLOG"), 3),
        rule(&[3], kw("EVENTS"), 4),
        rule(&[4], kw("IN"), 5),
        rule(&[5], tok(TokenKind::Str), 6),
        rule(&[4, 6], kw("FROM"), 7),
        rule(&[7], tok(TokenKind::Numeric), 8),
        rule(&[4, 6, 8], kw("LIMIT"), 9),
        rule(&[9], tok(TokenKind::Numeric), 10),
        rule(&[10], comma(), 11),
        rule(&[11], tok(TokenKind::Numeric), FINAL),
        rule(&[1], kw("CHARACTER"), 12),
        rule(&[12], kw("SET"), 13),
        rule(&[1], kw("CHARSET"), 13),
        rule(&[13, 19], kw("LIKE"), 14),
        rule(&[14], tok(TokenKind::Str), FINAL),
        rule(&[13, 19], kw("WHERE"), 15),
        rule(&[15], prod("Expression"), FINAL),
        rule(&[1], kw("COLLATION"), 13),
        rule(&[1], kw("FULL"), 16),
        rule(&[1, 16], kw("COLUMNS"), 17),
        rule(&[1, 16], kw("FIELDS"), 17),
        rule(&[17], kw("FROM"), 18),
        rule(&[17], kw("IN"), 18),
        rule(&[18], prod("TableName"), 19),
        rule(&[19], kw("FROM"), 20),
        rule(&[19], kw("IN"), 20),
        rule(&[20], prod("DatabaseName"), 13),
        rule(&[1], kw("CONTRIBUTORS"), FINAL),
        rule(&[1], kw("CREATE"), 21),
        rule(&[21], kw("DATABASE"), 22),
        rule(&[21], kw("SCHEMA"), 22),
        rule(&[22], kw("IF"), 32),
        rule(&[32], kw("NOT"), 33),
        rule(&[33], kw("EXISTS"), 34),
        rule(&[22, 34], prod("DatabaseName"), FINAL),
        rule(&[21], kw("EVENT"), 23),
        rule(&[23], prod("Identifier"), FINAL),
        rule(&[21], kw("FUNCTION"), 23),
        rule(&[21], kw("PROCEDURE"), 23),
        rule(&[21], kw("TABLE"), 24),
        rule(&[24], prod("TableName"), FINAL),
        rule(&[21], kw("TRIGGER"), 23),
        rule(&[21], kw("VIEW"), 23),
        rule(&[1], kw("DATABASES"), 13),
        rule(&[1], kw("SCHEMAS"), 13),
        rule(&[1], kw("ENGINE"), 25),
        rule(&[25], prod("EngineName"), 26),
        rule(&[26, 42, 56], kw("STATUS"), FINAL),
        rule(&[26], kw("MUTEX"), FINAL),
        rule(&[1], kw("STORAGE"), 27),
        rule(&[1, 27], kw("ENGINES"), FINAL),
        rule(&[1], kw("ERRORS"), 8),
        rule(&[1], kw("COUNT"), 35),
        rule(&[35], op("("), 36),
        rule(&[36], op("*"), 37),
        rule(&[37], op(")"), 38),
        rule(&[38], kw("ERRORS"), FINAL),
        rule(&[1], kw("EVENTS"), 19),
        rule(&[1], kw("FUNCTION"), 28),
        rule(&[28], kw("CODE"), 29),
        rule(&[29], prod("Identifier"), FINAL),
        rule(&[28], kw("STATUS"), 13),
        rule(&[1], kw("GRANTS"), 30),
        rule(&[30], kw("FOR"), 31),
        rule(&[31], kw("CURRENT_USER"), 39),
        rule(&[39], op("("), 40),
        rule(&[40], op(")"), FINAL),
        rule(&[31], tok(TokenKind::Str), 41),
        rule(&[41], tok(TokenKind::Variable), FINAL),
        rule(&[1], kw("INDEX"), 17),
        rule(&[1], kw("INDEXES"), 17),
        rule(&[1], kw("KEYS"), 17),
        rule(&[1], kw("MASTER"), 42),
        rule(&[1], kw("OPEN"), 43),
        rule(&[43], kw("TABLES"), 19),
        rule(&[1], kw("PLUGINS"), FINAL),
        rule(&[1], kw("PRIVILEGES"), FINAL),
        rule(&[1], kw("PROCEDURE"), 28),
        rule(&[1, 16], kw("PROCESSLIST"), FINAL),
        rule(&[1], kw("PROFILE"), 44),
        rule(&[44, 49], kw("ALL"), 45),
        rule(&[44, 49], kw("BLOCK"), 46),
        rule(&[46], kw("IO"), 45),
        rule(&[44, 49], kw("CONTEXT"), 47),
        rule(&[47], kw("SWITCHES"), 45),
        rule(&[44, 49], kw("CPU"), 45),
        rule(&[44, 49], kw("IPC"), 45),
        rule(&[44, 49], kw("MEMORY"), 45),
        rule(&[44, 49], kw("PAGE"), 48),
        rule(&[48], kw("FAULTS"), 45),
        rule(&[44, 49], kw("SOURCE"), 45),
        rule(&[44, 49], kw("SWAPS"), 45),
        rule(&[45], comma(), 49),
        rule(&[44, 45], kw("FOR"), 50),
        rule(&[50], kw("QUERY"), 51),
        rule(&[51], tok(TokenKind::Numeric), 52),
        rule(&[44, 45, 52], kw("LIMIT"), 53),
        rule(&[53], tok(TokenKind::Numeric), 54),
        rule(&[54], kw("OFFSET"), 55),
        rule(&[55], tok(TokenKind::Numeric), FINAL),
        rule(&[1], kw("PROFILES"), FINAL),
        rule(&[1], kw("RELAYLOG"), 3),
        rule(&[1], kw("SLAVE"), 56),
        rule(&[56], kw("HOSTS"), FINAL),
        rule(&[1], kw("GLOBAL"), 57),
        rule(&[1], kw("SESSION"), 57),
        rule(&[1, 57], kw("STATUS"), 13),
        rule(&[1], kw("TABLE"), 58),
        rule(&[58], kw("STATUS"), 19),
        rule(&[1, 16], kw("TABLES"), 19),
        rule(&[1], kw("TRIGGERS"), 19),
        rule(&[1, 57], kw("VARIABLES"), 13),
        rule(&[1], kw("WARNINGS"), 8),
        rule(&[38], kw("WARNINGS"), FINAL),
    ],
    soft_accepts: &[4, 6, 8, 10, 13, 19, 30, 39, 44, 45, 52, 54],
    finish: None,
};

// 13.1.33 TRUNCATE TABLE
// TRUNCATE [TABLE] tbl_name
pub(crate) static TRUNCATE_TABLE: FsmDef = FsmDef {
    name: "TruncateTable",
    rules: &[
        rule(&[0], kw("TRUNCATE"), 1),
        rule(&[1], kw("TABLE"), 2),
        rule(&[1, 2], prod("TableName"), FINAL),
    ],
    soft_accepts: &[],
    finish: None,
};

// 13.2.11 UPDATE
// UPDATE [LOW_PRIORITY] [IGNORE] table_references SET assignment_list
//   [WHERE ...] [ORDER BY ...] [LIMIT row_count]
pub(crate) static UPDATE: FsmDef = FsmDef {
    name: "Update",
    rules: &[
        rule(&[0], kw("UPDATE"), 1),
        rule(&[1], kw("LOW_PRIORITY"), 2),
        rule(&[1, 2], kw("IGNORE"), 3),
        rule(&[1, 2, 3], prod("TableReferenceList"), 4),
        rule(&[4], kw("SET"), 5),
        rule(&[5], prod("AssignmentListExpression"), 6),
        rule(&[6], kw("WHERE"), 7),
        rule(&[7], prod("Expression"), 8),
        rule(&[6, 8], kw("ORDER"), 9),
        rule(&[9], kw("BY"), 10),
        rule(&[10], prod("Expression"), 11),
        rule(&[10], prod("ColumnName"), 11),
        rule(&[10], tok(TokenKind::Numeric), 11),
        rule(&[11], kw("ASC"), 12),
        rule(&[11], kw("DESC"), 12),
        rule(&[12], comma(), 10),
        rule(&[6, 8, 11, 12], kw("LIMIT"), 13),
        rule(&[13], tok(TokenKind::Numeric), FINAL),
    ],
    soft_accepts: &[6, 8, 11, 12],
    finish: None,
};

// 13.8.4 USE
// USE db_name
pub(crate) static USE: FsmDef = FsmDef {
    name: "Use",
    rules: &[
        rule(&[0], kw("USE"), 1),
        rule(&[1], prod("DatabaseName"), FINAL),
    ],
    soft_accepts: &[],
    finish: None,
};
