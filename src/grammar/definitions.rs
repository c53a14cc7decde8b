//! Schema-definition productions: column types, column/key definitions, partitioning and the
//! ALTER TABLE specification.

use super::{comma, kw, lit, op, prod, rule, tok};
use crate::{FsmDef, TokenKind, FINAL};

// data_type:
//    BIT[(length)]
//  | TINYINT[(length)] [UNSIGNED] [ZEROFILL]          (and the other integer types)
//  | REAL[(length,decimals)] [UNSIGNED] [ZEROFILL]    (DOUBLE, FLOAT)
//  | DECIMAL[(length[,decimals])] [UNSIGNED] [ZEROFILL]   (NUMERIC)
//  | DATE | TIME | TIMESTAMP | DATETIME | YEAR
//  | CHAR[(length)] [CHARACTER SET charset_name] [COLLATE collation_name]
//  | VARCHAR(length) [CHARACTER SET charset_name] [COLLATE collation_name]
//  | BINARY[(length)] | VARBINARY(length)
//  | TINYBLOB | BLOB[(length)] | MEDIUMBLOB | LONGBLOB
//  | TINYTEXT | TEXT[(length)] | MEDIUMTEXT | LONGTEXT
//      [CHARACTER SET charset_name] [COLLATE collation_name]
//  | ENUM(value1,value2,...) [CHARACTER SET charset_name] [COLLATE collation_name]
//  | SET(value1,value2,...) [CHARACTER SET charset_name] [COLLATE collation_name]
pub(crate) static DATA_TYPE: FsmDef = FsmDef {
    name: "DataType",
    rules: &[
        rule(&[0], kw("DATE"), FINAL),
        rule(&[0], kw("TIME"), FINAL),
        rule(&[0], kw("TIMESTAMP"), FINAL),
        rule(&[0], kw("DATETIME"), FINAL),
        rule(&[0], kw("YEAR"), FINAL),
        rule(&[0], kw("TINYBLOB"), FINAL),
        rule(&[0], kw("MEDIUMBLOB"), FINAL),
        rule(&[0], kw("LONGBLOB"), FINAL),
        rule(&[0], kw("BIT"), 1),
        rule(&[0], kw("BINARY"), 1),
        rule(&[0], kw("BLOB"), 1),
        rule(&[1], op("("), 2),
        rule(&[2], tok(TokenKind::Numeric), 3),
        rule(&[3], op(")"), FINAL),
        rule(&[0], kw("TINYINT"), 4),
        rule(&[0], kw("SMALLINT"), 4),
        rule(&[0], kw("MEDIUMINT"), 4),
        rule(&[0], kw("INT"), 4),
        rule(&[0], kw("INTEGER"), 4),
        rule(&[0], kw("BIGINT"), 4),
        rule(&[4], op("("), 5),
        rule(&[5], tok(TokenKind::Numeric), 6),
        rule(&[6, 13, 16, 18], op(")"), 7),
        rule(&[4, 7], kw("UNSIGNED"), 8),
        rule(&[4, 7, 8], kw("ZEROFILL"), FINAL),
        rule(&[0], kw("REAL"), 9),
        rule(&[0], kw("DOUBLE"), 9),
        rule(&[0], kw("FLOAT"), 9),
        rule(&[9], op("("), 10),
        rule(&[10], tok(TokenKind::Numeric), 11),
        rule(&[11], comma(), 12),
        rule(&[12], tok(TokenKind::Numeric), 13),
        rule(&[0], kw("DECIMAL"), 14),
        rule(&[0], kw("NUMERIC"), 14),
        rule(&[14], op("("), 15),
        rule(&[15], tok(TokenKind::Numeric), 16),
        rule(&[16], comma(), 17),
        rule(&[17], tok(TokenKind::Numeric), 18),
        rule(&[0], kw("TINYTEXT"), 19),
        rule(&[0], kw("MEDIUMTEXT"), 19),
        rule(&[0], kw("LONGTEXT"), 19),
        rule(&[19, 24], kw("CHARACTER"), 20),
        rule(&[20], kw("SET"), 21),
        rule(&[19, 24], kw("CHARSET"), 21),
        rule(&[21], prod("CharsetName"), 22),
        rule(&[19, 22, 24], kw("COLLATE"), 23),
        rule(&[23], prod("CollationName"), FINAL),
        rule(&[0], kw("CHAR"), 24),
        rule(&[0], kw("TEXT"), 24),
        rule(&[24], op("("), 25),
        rule(&[25], tok(TokenKind::Numeric), 26),
        rule(&[26, 30], op(")"), 19),
        rule(&[0], kw("VARCHAR"), 27),
        rule(&[27], op("("), 25),
        rule(&[0], kw("ENUM"), 28),
        rule(&[0], kw("SET"), 28),
        rule(&[28], op("("), 29),
        rule(&[29, 31], tok(TokenKind::Str), 30),
        rule(&[30], comma(), 31),
    ],
    soft_accepts: &[1, 4, 7, 8, 9, 14, 19, 22, 24],
    finish: None,
};

// REFERENCES tbl_name (index_col_name,...)
//   [MATCH FULL | MATCH PARTIAL | MATCH SIMPLE]
//   [ON DELETE reference_option] [ON UPDATE reference_option]
pub(crate) static REFERENCE_DEFINITION: FsmDef = FsmDef {
    name: "ReferenceDefinition",
    rules: &[
        rule(&[0], kw("REFERENCES"), 1),
        rule(&[0], prod("TableName"), 2),
        rule(&[2], op("("), 3),
        rule(&[3], prod("IndexColumnNameList"), 4),
        rule(&[4], op(")"), 5),
        rule(&[5], kw("MATCH"), 6),
        rule(&[6], kw("FULL"), 7),
        rule(&[6], kw("PARTIAL"), 7),
        rule(&[6], kw("SIMPLE"), 7),
        rule(&[5, 7], kw("ON"), 8),
        rule(&[8], kw("DELETE"), 9),
        rule(&[9], prod("ReferenceOption"), 10),
        rule(&[10], kw("ON"), 11),
        rule(&[8, 11], kw("UPDATE"), 12),
        rule(&[12], prod("ReferenceOption"), FINAL),
    ],
    soft_accepts: &[5, 7, 10],
    finish: None,
};

// column_definition:
//    data_type [NOT NULL | NULL] [DEFAULT default_value]
//      [AUTO_INCREMENT | ON UPDATE CURRENT_TIMESTAMP] [UNIQUE [KEY]] [[PRIMARY] KEY]
//      [COMMENT 'string']
//      [COLUMN_FORMAT {FIXED|DYNAMIC|DEFAULT}]
//      [STORAGE {DISK|MEMORY|DEFAULT}]
//      [reference_definition]
pub(crate) static COLUMN_DEFINITION: FsmDef = FsmDef {
    name: "ColumnDefinition",
    rules: &[
        rule(&[0], prod("DataType"), 1),
        rule(&[1, 5, 6], kw("NOT"), 2),
        rule(&[1, 2], lit(TokenKind::Null, "NULL"), 3),
        rule(&[1, 3, 5, 6], kw("DEFAULT"), 4),
        rule(&[4], tok(TokenKind::Str), 5),
        rule(&[4], tok(TokenKind::Numeric), 5),
        rule(&[4], tok(TokenKind::Null), 5),
        rule(&[4], kw("CURRENT_TIMESTAMP"), 5),
        rule(&[1, 3, 5], kw("ON"), 17),
        rule(&[17], kw("UPDATE"), 18),
        rule(&[18], kw("CURRENT_TIMESTAMP"), 6),
        rule(&[1, 3, 5], kw("AUTO_INCREMENT"), 6),
        rule(&[1, 3, 5, 6], kw("UNIQUE"), 7),
        rule(&[7], kw("KEY"), 8),
        rule(&[1, 3, 5, 6, 7, 8], kw("PRIMARY"), 9),
        rule(&[1, 9], kw("KEY"), 10),
        rule(&[3, 5, 6, 7, 8], kw("KEY"), 9),
        rule(&[1, 3, 5, 6, 7, 8, 10], kw("COMMENT"), 11),
        rule(&[11], tok(TokenKind::Str), 12),
        rule(&[1, 3, 5, 6, 7, 8, 10, 12], kw("COLUMN_FORMAT"), 13),
        rule(&[13], kw("FIXED"), 14),
        rule(&[13], kw("DYNAMIC"), 14),
        rule(&[13], kw("DEFAULT"), 14),
        rule(&[1, 3, 5, 6, 7, 8, 10, 12, 14], kw("STORAGE"), 15),
        rule(&[15], kw("DISK"), 16),
        rule(&[15], kw("MEMORY"), 16),
        rule(&[15], kw("DEFAULT"), 16),
        rule(
            &[1, 3, 5, 6, 7, 8, 10, 12, 14, 16],
            prod("ReferenceDefinition"),
            FINAL,
        ),
    ],
    soft_accepts: &[1, 3, 5, 6, 7, 8, 10, 12, 14, 16],
    finish: None,
};

// SUBPARTITION logical_name
//   [[STORAGE] ENGINE [=] engine_name] [COMMENT [=] 'string']
//   [DATA DIRECTORY [=] 'data_dir'] [INDEX DIRECTORY [=] 'index_dir']
//   [MAX_ROWS [=] n] [MIN_ROWS [=] n] [TABLESPACE [=] name] [NODEGROUP [=] id]
pub(crate) static SUB_PARTITION_DEFINITION: FsmDef = FsmDef {
    name: "SubPartitionDefinition",
    rules: &[
        rule(&[0], kw("SUBPARTITION"), 1),
        rule(&[1], prod("Identifier"), 2),
        rule(&[2], kw("STORAGE"), 3),
        rule(&[2, 3], kw("ENGINE"), 4),
        rule(&[4], op("="), 5),
        rule(&[4, 5], prod("EngineName"), 6),
        rule(&[2, 6], kw("COMMENT"), 7),
        rule(&[7], prod("StringOptionValue"), 8),
        rule(&[2, 6, 8], kw("DATA"), 9),
        rule(&[9], kw("DIRECTORY"), 10),
        rule(&[10], prod("StringOptionValue"), 11),
        rule(&[2, 6, 8, 11], kw("INDEX"), 12),
        rule(&[12], kw("DIRECTORY"), 13),
        rule(&[13], prod("StringOptionValue"), 14),
        rule(&[2, 6, 8, 11, 14], kw("MAX_ROWS"), 15),
        rule(&[15], prod("NumericOptionValue"), 16),
        rule(&[2, 6, 8, 11, 14, 16], kw("MIN_ROWS"), 17),
        rule(&[17], prod("NumericOptionValue"), 18),
        rule(&[2, 6, 8, 11, 14, 16, 18], kw("TABLESPACE"), 19),
        rule(&[19], op("="), 20),
        rule(&[19, 20], prod("Identifier"), 21),
        rule(&[2, 6, 8, 11, 14, 16, 18, 21], kw("NODEGROUP"), 22),
        rule(&[22], prod("NumericOptionValue"), FINAL),
    ],
    soft_accepts: &[2, 6, 8, 11, 14, 16, 18, 21],
    finish: None,
};

// PARTITION partition_name
//   [VALUES {LESS THAN {(expr | value_list) | MAXVALUE} | IN (value_list)}]
//   [[STORAGE] ENGINE [=] engine_name] [COMMENT [=] 'string']
//   [DATA DIRECTORY [=] 'data_dir'] [INDEX DIRECTORY [=] 'index_dir']
//   [MAX_ROWS [=] n] [MIN_ROWS [=] n] [TABLESPACE [=] name] [NODEGROUP [=] id]
//   [(subpartition_definition [, subpartition_definition] ...)]
pub(crate) static PARTITION_DEFINITION: FsmDef = FsmDef {
    name: "PartitionDefinition",
    rules: &[
        rule(&[0], kw("PARTITION"), 1),
        rule(&[1], prod("Identifier"), 2),
        rule(&[2], kw("VALUES"), 3),
        rule(&[3], kw("LESS"), 4),
        rule(&[4], kw("THAN"), 5),
        rule(&[5], op("("), 6),
        rule(&[6], tok(TokenKind::Numeric), 7),
        rule(&[6], kw("MAXVALUE"), 7),
        rule(&[7, 11], op(")"), 8),
        rule(&[7], comma(), 6),
        rule(&[5], kw("MAXVALUE"), 8),
        rule(&[3], kw("IN"), 9),
        rule(&[9], op("("), 10),
        rule(&[10], tok(TokenKind::Numeric), 11),
        rule(&[11], comma(), 10),
        rule(&[2, 8], kw("STORAGE"), 12),
        rule(&[2, 8], kw("ENGINE"), 13),
        rule(&[12], kw("ENGINE"), 13),
        rule(&[13], op("="), 14),
        rule(&[13, 14], prod("EngineName"), 15),
        rule(&[2, 8, 15], kw("COMMENT"), 16),
        rule(&[16], prod("StringOptionValue"), 17),
        rule(&[2, 8, 15, 17], kw("DATA"), 18),
        rule(&[18], kw("DIRECTORY"), 19),
        rule(&[19], prod("StringOptionValue"), 20),
        rule(&[2, 8, 15, 17, 20], kw("INDEX"), 21),
        rule(&[21], kw("DIRECTORY"), 22),
        rule(&[22], prod("StringOptionValue"), 23),
        rule(&[2, 8, 15, 17, 20, 23], kw("MAX_ROWS"), 24),
        rule(&[24], prod("NumericOptionValue"), 25),
        rule(&[2, 8, 15, 17, 20, 23, 25], kw("MIN_ROWS"), 26),
        rule(&[26], prod("NumericOptionValue"), 27),
        rule(&[2, 8, 15, 17, 20, 23, 25, 27], kw("TABLESPACE"), 28),
        rule(&[28], op("="), 29),
        rule(&[28, 29], prod("Identifier"), 30),
        rule(&[2, 8, 15, 17, 20, 23, 25, 27, 30], kw("NODEGROUP"), 31),
        rule(&[31], prod("NumericOptionValue"), 32),
        rule(
            &[2, 8, 15, 17, 20, 23, 25, 27, 30, 32, 8, 15, 17, 20, 23, 25, 27, 30],
            op("("),
            33,
        ),
        rule(&[33], prod("SubPartitionDefinition"), 34),
        rule(&[34], op(")"), FINAL),
        rule(&[34], comma(), 33),
    ],
    soft_accepts: &[2, 8, 15, 17, 20, 23, 25, 27, 30, 32],
    finish: None,
};

// create_definition:
//    col_name column_definition
//  | [CONSTRAINT [symbol]] PRIMARY KEY [index_type] (index_col_name,...) [index_option] ...
//  | {INDEX|KEY} [index_name] [index_type] (index_col_name,...) [index_option] ...
//  | [CONSTRAINT [symbol]] UNIQUE [INDEX|KEY] [index_name] [index_type]
//      (index_col_name,...) [index_option] ...
//  | {FULLTEXT|SPATIAL} [INDEX|KEY] [index_name] (index_col_name,...) [index_option] ...
//  | [CONSTRAINT [symbol]] FOREIGN KEY [index_name] (index_col_name,...)
//      reference_definition
//  | CHECK (expr)
pub(crate) static CREATE_TABLE_DEFINITION: FsmDef = FsmDef {
    name: "CreateTableDefinition",
    rules: &[
        rule(&[0], prod("ColumnName"), 1),
        rule(&[1], prod("ColumnDefinition"), FINAL),
        rule(&[0], kw("CONSTRAINT"), 2),
        rule(&[2], prod("Identifier"), 3),
        rule(&[0, 2, 3], kw("PRIMARY"), 4),
        rule(&[4], kw("KEY"), 5),
        rule(&[5, 10, 11], prod("IndexType"), 6),
        rule(&[5, 6, 10, 11], op("("), 7),
        rule(&[7], prod("IndexColumnName"), 8),
        rule(&[8], op(")"), 9),
        rule(&[8], comma(), 7),
        rule(&[9], prod("IndexOption"), 9),
        rule(&[0, 11], kw("INDEX"), 10),
        rule(&[0, 11], kw("KEY"), 10),
        rule(&[10, 11], prod("Identifier"), 5),
        rule(&[0, 2, 3], kw("UNIQUE"), 11),
        rule(&[0], kw("FULLTEXT"), 11),
        rule(&[0], kw("SPATIAL"), 11),
        rule(&[0, 2, 3], kw("FOREIGN"), 12),
        rule(&[12], kw("KEY"), 13),
        rule(&[13], prod("Identifier"), 14),
        rule(&[13, 14], op("("), 15),
        rule(&[15], prod("IndexColumnName"), 16),
        rule(&[16], op(")"), 17),
        rule(&[16], comma(), 15),
        rule(&[17], prod("ReferenceDefinition"), FINAL),
        rule(&[0], kw("CHECK"), 18),
        rule(&[18], op("("), 19),
        rule(&[19], prod("PartitioningExpression"), 20),
        rule(&[20], op(")"), FINAL),
    ],
    soft_accepts: &[9],
    finish: None,
};

// [LINEAR] HASH(expr) | [LINEAR] KEY [ALGORITHM={1|2}] (column_list)
pub(crate) static SUB_PARTITIONING_EXPRESSION: FsmDef = FsmDef {
    name: "SubPartitioningExpression",
    rules: &[
        rule(&[0], kw("LINEAR"), 1),
        rule(&[0, 1], kw("HASH"), 2),
        rule(&[2], op("("), 3),
        rule(&[3], prod("Expression"), 4),
        rule(&[4], op(")"), FINAL),
        rule(&[0, 1], kw("KEY"), 5),
        rule(&[5], kw("ALGORITHM"), 6),
        rule(&[6], op("="), 7),
        rule(&[7], lit(TokenKind::Numeric, "1"), 8),
        rule(&[7], lit(TokenKind::Numeric, "2"), 8),
        rule(&[5, 8], op("("), 9),
        rule(&[9], prod("ColumnNameList"), 10),
        rule(&[10], op(")"), FINAL),
    ],
    soft_accepts: &[],
    finish: None,
};

// [LINEAR] HASH(expr) | [LINEAR] KEY [ALGORITHM={1|2}] (column_list)
// | RANGE{(expr) | COLUMNS(column_list)} | LIST{(expr) | COLUMNS(column_list)}
pub(crate) static PARTITIONING_EXPRESSION: FsmDef = FsmDef {
    name: "PartitioningExpression",
    rules: &[
        rule(&[0], kw("LINEAR"), 1),
        rule(&[0, 1], kw("HASH"), 2),
        rule(&[2], op("("), 3),
        rule(&[3], prod("Expression"), 4),
        rule(&[4], op(")"), FINAL),
        rule(&[0, 1], kw("KEY"), 5),
        rule(&[5], kw("ALGORITHM"), 6),
        rule(&[6], op("="), 7),
        rule(&[7], lit(TokenKind::Numeric, "1"), 8),
        rule(&[7], lit(TokenKind::Numeric, "2"), 8),
        rule(&[5, 8], op("("), 9),
        rule(&[9], prod("ColumnNameList"), 10),
        rule(&[10], op(")"), FINAL),
        rule(&[0], kw("RANGE"), 11),
        rule(&[0], kw("LIST"), 11),
        rule(&[11], op("("), 3),
        rule(&[11], kw("COLUMNS"), 8),
    ],
    soft_accepts: &[],
    finish: None,
};

// PARTITION BY partitioning_expression [PARTITIONS num]
//   [SUBPARTITION BY subpartitioning_expression [SUBPARTITIONS num]]
//   [(partition_definition [, partition_definition] ...)]
pub(crate) static PARTITION_OPTION: FsmDef = FsmDef {
    name: "PartitionOption",
    rules: &[
        rule(&[0], kw("PARTITION"), 1),
        rule(&[1], kw("BY"), 2),
        rule(&[2], prod("PartitioningExpression"), 3),
        rule(&[3], kw("PARTITIONS"), 4),
        rule(&[4], tok(TokenKind::Numeric), 5),
        rule(&[3, 5], kw("SUBPARTITION"), 6),
        rule(&[6], kw("BY"), 7),
        rule(&[7], prod("SubPartitioningExpression"), 8),
        rule(&[8], kw("SUBPARTITIONS"), 9),
        rule(&[9], tok(TokenKind::Numeric), 10),
        rule(&[3, 5, 8, 10, 12], prod("PartitionDefinition"), 11),
        rule(&[11], comma(), 12),
    ],
    soft_accepts: &[3, 5, 8, 10, 11],
    finish: None,
};

// alter_specification: table options, ADD/ALTER/CHANGE/DROP/MODIFY column and key clauses,
// charset conversions, partition maintenance. Follows 13.1.7 ALTER TABLE syntax.
pub(crate) static ALTER_TABLE_SPECIFICATION: FsmDef = FsmDef {
    name: "AlterTableSpecification",
    rules: &[
        rule(&[0], prod("TableOptionList"), FINAL),
        rule(&[0], kw("ADD"), 1),
        rule(&[1], kw("COLUMN"), 2),
        rule(&[1, 2, 58, 59, 81], prod("ColumnName"), 3),
        rule(&[3], prod("ColumnDefinition"), 4),
        rule(&[4], kw("FIRST"), FINAL),
        rule(&[4], kw("AFTER"), 5),
        rule(&[5], prod("ColumnName"), FINAL),
        rule(&[1, 2], op("("), 6),
        rule(&[6, 9], prod("ColumnName"), 7),
        rule(&[7], prod("ColumnDefinition"), 8),
        rule(&[8], comma(), 9),
        rule(&[8], op(")"), FINAL),
        rule(&[1, 20], kw("INDEX"), 10),
        rule(&[1, 20], kw("KEY"), 10),
        rule(&[10, 20], prod("Identifier"), 11),
        rule(&[10, 11], prod("IndexType"), 12),
        rule(&[10, 11, 12, 21, 22], op("("), 13),
        rule(&[13, 15], prod("IndexColumnName"), 14),
        rule(&[14], op(")"), 16),
        rule(&[14], comma(), 15),
        rule(&[16], prod("IndexOption"), 16),
        rule(&[1], kw("CONSTRAINT"), 17),
        rule(&[17], prod("Identifier"), 18),
        rule(&[1, 17, 18], kw("PRIMARY"), 19),
        rule(&[19], kw("KEY"), 11),
        rule(&[1, 17, 18], kw("UNIQUE"), 20),
        rule(&[1], kw("FULLTEXT"), 21),
        rule(&[1], kw("SPATIAL"), 21),
        rule(&[21], kw("INDEX"), 22),
        rule(&[21], kw("KEY"), 22),
        rule(&[21, 22], prod("Identifier"), 12),
        rule(&[1, 17, 18], kw("FOREIGN"), 23),
        rule(&[23], kw("KEY"), 24),
        rule(&[24], prod("Identifier"), 25),
        rule(&[24, 25], op("("), 26),
        rule(&[26, 28], prod("IndexColumnName"), 27),
        rule(&[27], op(")"), 29),
        rule(&[27], comma(), 28),
        rule(&[29], prod("ReferenceDefinition"), FINAL),
        rule(&[0], kw("ALTER"), 30),
        rule(&[30], kw("COLUMN"), 31),
        rule(&[30, 31], prod("ColumnName"), 32),
        rule(&[32], kw("SET"), 33),
        rule(&[33], kw("DEFAULT"), 34),
        rule(&[34], tok(TokenKind::Str), FINAL),
        rule(&[32], kw("DROP"), 35),
        rule(&[35], kw("DEFAULT"), FINAL),
        rule(&[0], kw("CHANGE"), 36),
        rule(&[36], kw("COLUMN"), 37),
        rule(&[36, 37], prod("ColumnName"), 81),
        rule(&[0], kw("DEFAULT"), 38),
        rule(&[0, 38], kw("CHARACTER"), 39),
        rule(&[39], kw("SET"), 40),
        rule(&[0, 38], kw("CHARSET"), 40),
        rule(&[40], op("="), 41),
        rule(&[40, 41], prod("CharsetName"), 42),
        rule(&[42], kw("COLLATE"), 43),
        rule(&[43], op("="), 44),
        rule(&[43, 44], prod("CollationName"), FINAL),
        rule(&[0], kw("CONVERT"), 45),
        rule(&[45], kw("TO"), 46),
        rule(&[46], kw("CHARACTER"), 47),
        rule(&[47], kw("SET"), 48),
        rule(&[46], kw("CHARSET"), 48),
        rule(&[48], prod("CharsetName"), 49),
        rule(&[49], kw("COLLATE"), 50),
        rule(&[50], prod("CollationName"), FINAL),
        rule(&[0], kw("DISABLE"), 51),
        rule(&[0], kw("ENABLE"), 51),
        rule(&[51], kw("KEYS"), FINAL),
        rule(&[0], kw("DISCARD"), 52),
        rule(&[0], kw("IMPORT"), 52),
        rule(&[52], kw("TABLESPACE"), FINAL),
        rule(&[0], kw("DROP"), 53),
        rule(&[53], kw("COLUMN"), 54),
        rule(&[53, 54], prod("ColumnName"), FINAL),
        rule(&[53], kw("INDEX"), 55),
        rule(&[53], kw("KEY"), 55),
        rule(&[55], prod("Identifier"), FINAL),
        rule(&[53], kw("PRIMARY"), 56),
        rule(&[56], kw("KEY"), FINAL),
        rule(&[53], kw("FOREIGN"), 57),
        rule(&[57], kw("KEY"), 55),
        rule(&[0], kw("FORCE"), FINAL),
        rule(&[0], kw("MODIFY"), 58),
        rule(&[58], kw("COLUMN"), 59),
        rule(&[0], kw("ORDER"), 60),
        rule(&[60], kw("BY"), 61),
        rule(&[61], prod("ColumnName"), 62),
        rule(&[62], comma(), 61),
        rule(&[0], kw("RENAME"), 63),
        rule(&[63], kw("TO"), 64),
        rule(&[63], kw("AS"), 64),
        rule(&[63, 64], prod("TableName"), FINAL),
        rule(&[1], kw("PARTITION"), 65),
        rule(&[65], op("("), 66),
        rule(&[66], prod("PartitionDefinition"), 67),
        rule(&[67], op(")"), 68),
        rule(&[53], kw("PARTITION"), 69),
        rule(&[69, 72], prod("Identifier"), 70),
        rule(&[70], comma(), 69),
        rule(&[0], kw("TRUNCATE"), 71),
        rule(&[0], kw("ANALYZE"), 71),
        rule(&[0], kw("CHECK"), 71),
        rule(&[0], kw("OPTIMIZE"), 71),
        rule(&[0], kw("REBUILD"), 71),
        rule(&[0], kw("REPAIR"), 71),
        rule(&[71], kw("PARTITION"), 72),
        rule(&[72], kw("ALL"), FINAL),
        rule(&[0], kw("COALESCE"), 73),
        rule(&[73], kw("PARTITION"), 74),
        rule(&[74], tok(TokenKind::Numeric), FINAL),
        rule(&[0], kw("REORGANIZE"), 75),
        rule(&[75], kw("PARTITION"), 76),
        rule(&[76], prod("Identifier"), 77),
        rule(&[77], comma(), 76),
        rule(&[77], kw("INTO"), 65),
        rule(&[0], kw("REMOVE"), 78),
        rule(&[78], kw("PARTITIONING"), FINAL),
    ],
    soft_accepts: &[4, 16, 42, 49, 62, 68, 70, 76],
    finish: None,
};
