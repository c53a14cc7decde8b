use super::Lexeme;
use crate::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Non-reserved keywords. These lex as [TokenKind::Keyword] but may still appear as bare
/// identifiers (table names, column names, aliases).
pub(crate) static NON_RESERVED: &[&str] = &[
    "ABS", "ACOS", "ACTION", "ADDDATE", "ADDTIME",
    "AES_DECRYPT", "AES_ENCRYPT", "AFTER", "AGAINST", "AGGREGATE",
    "ALGORITHM", "ANY", "ASCII", "ASIN", "AT",
    "ATAN", "ATAN2", "AUTHORS", "AUTO_INCREMENT", "AUTOEXTEND_SIZE",
    "AVG", "AVG_ROW_LENGTH", "BACKUP", "BEGIN", "BENCHMARK",
    "BIN", "BINLOG", "BIT", "BIT_AND", "BIT_COUNT",
    "BIT_LENGTH", "BIT_OR", "BIT_XOR", "BLOCK", "BOOL",
    "BOOLEAN", "BTREE", "BYTE", "CACHE", "CASCADED",
    "CAST", "CATALOG_NAME", "CCONCAT_WS", "CEIL", "CEILING",
    "CHAIN", "CHANGED", "CHAR_LENGTH", "CHARACTER_LENGTH", "CHARSET",
    "CHECKSUM", "CIPHER", "CLASS_ORIGIN", "CLIENT", "CLOSE",
    "COALESCE", "CODE", "COERCIBILITY", "COLLATION", "COLUMN_NAME",
    "COLUMNS", "COMMENT", "COMMIT", "COMMITTED", "COMPACT",
    "COMPLETION", "COMPRESS", "COMPRESSED", "CONCAT", "CONCURRENT",
    "CONNECTION", "CONNECTION_ID", "CONSISTENT", "CONSTRAINT_CATALOG", "CONSTRAINT_NAME",
    "CONSTRAINT_SCHEMA", "CONTAINS", "CONTEXT", "CONTRIBUTORS", "CONV",
    "CONVERT_TZ", "COS", "COT", "COUNT", "CPU",
    "CRC32", "CUBE", "CURDATE", "CURSOR_NAME", "CURTIME",
    "DATA", "DATAFILE", "DATE", "DATE_ADD", "DATE_FORMAT",
    "DATE_SUB", "DATEDIFF", "DATETIME", "DAY", "DAYNAME",
    "DAYOFMONTH", "DAYOFWEEK", "DAYOFYEAR", "DEALLOCATE", "DECODE",
    "DEFINER", "DEGREES", "DELAY_KEY_WRITE", "DES_DECRYPT", "DES_ENCRYPT",
    "DES_KEY_FILE", "DIRECTORY", "DISABLE", "DISCARD", "DISK",
    "DO", "DUMPFILE", "DUPLICATE", "DYNAMIC", "ELT",
    "ENABLE", "ENCODE", "ENCRYPT", "END", "ENDS",
    "ENGINE", "ENGINES", "ENUM", "ERROR", "ERRORS",
    "ESCAPE", "EVENT", "EVENTS", "EVERY", "EXECUTE",
    "EXP", "EXPANSION", "EXPORT_SET", "EXTENDED", "EXTENT_SIZE",
    "EXTRACT", "FAST", "FAULTS", "FIELD", "FIELDS",
    "FILE", "FIND_IN_SET", "FIRST", "FIXED", "FLOOR",
    "FLUSH", "FORM_UNIXTIME", "FORMAT", "FOUND", "FOUND_ROWS",
    "FRAC_SECOND", "FROM_DAYS", "FULL", "FUNCTION", "GEOMETRY",
    "GEOMETRYCOLLECTION", "GET_FORMAT", "GET_LOCK", "GLOBAL", "GRANTS",
    "GROUP_CONCAT", "HANDLER", "HASH", "HELP", "HEX",
    "HOST", "HOSTS", "HOUR", "IDENTIFIED", "IFNULL",
    "IGNORE_SERVER_IDS", "IMPORT", "INDEXES", "INET_ATON", "INET_NTOA",
    "INITIAL_SIZE", "INNOBASE", "INNODB", "INSERT_METHOD", "INSTALL",
    "INSTR", "INTERNAL", "INTO", "INVOKER", "IO", "IO_THREAD",
    "IPC", "IS_FREE_LOCK", "IS_USED_LOCK", "ISOLATION", "ISSUER",
    "KEY_BLOCK_SIZE", "LANGUAGE", "LAST", "LAST_DAY", "LAST_INSERT_ID",
    "LCASE", "LEAVES", "LENGTH", "LESS", "LEVEL",
    "LINESTRING", "LIST", "LN", "LOAD_FILE", "LOCAL",
    "LOCATE", "LOCKS", "LOG", "LOG10", "LOG2",
    "LOGFILE", "LOGS", "LOWER", "LPAD", "LTRIM",
    "MAKE_SET", "MAKEDATE", "MAKETIME", "MASTER", "MASTER_CONNECT_RETRY",
    "MASTER_HEARTBEAT_PERIOD", "MASTER_HOST", "MASTER_LOG_FILE", "MASTER_LOG_POS", "MASTER_PASSWORD",
    "MASTER_PORT", "MASTER_POS_WAIT", "MASTER_SERVER_ID", "MASTER_SSL", "MASTER_SSL_CA",
    "MASTER_SSL_CAPATH", "MASTER_SSL_CERT", "MASTER_SSL_CIPHER", "MASTER_SSL_KEY", "MASTER_USER",
    "MAX", "MAX_CONNECTIONS_PER_HOUR", "MAX_QUERIES_PER_HOUR", "MAX_ROWS", "MAX_SIZE",
    "MAX_UPDATES_PER_HOUR", "MAX_USER_CONNECTIONS", "MD5", "MEDIUM", "MEMORY",
    "MERGE", "MESSAGE_TEXT", "MICROSECOND", "MID", "MIGRATE",
    "MIN", "MIN_ROWS", "MINUTE", "MODE", "MODIFY",
    "MONTH", "MONTHNAME", "MULTILINESTRING", "MULTIPOINT", "MULTIPOLYGON",
    "MUTEX", "MYSQL_ERRNO", "NAME", "NAME_CONST", "NAMES",
    "NATIONAL", "NCHAR", "NDB", "NDBCLUSTER", "NEW",
    "NEXT", "NO", "NO_WAIT", "NODEGROUP", "NONE",
    "NOW", "NULLIF", "NVARCHAR", "OCT", "OCTET_LENGTH",
    "OFFSET", "OJ", "OLD_PASSWORD", "ONE", "ONE_SHOT",
    "OPEN", "OPTIONS", "ORD", "OWNER", "PACK_KEYS",
    "PAGE", "PARSER", "PARTIAL", "PARTITION", "PARTITIONING",
    "PARTITIONS", "PASSWORD", "PERIOD_ADD", "PERIOD_DIFF", "PHASE",
    "PI", "PLUGIN", "PLUGINS", "POINT", "POLYGON", "PORT",
    "POSITION", "POW", "POWER", "PREPARE", "PRESERVE",
    "PREV", "PRIVILEGES", "PROCESSLIST", "PROFILE", "PROFILES",
    "PROXY", "QUARTER", "QUERY", "QUICK", "QUOTE",
    "RADIANS", "RAND", "READ_ONLY", "REBUILD", "RECOVER",
    "REDO_BUFFER_SIZE", "REDOFILE", "REDUNDANT", "RELAY", "RELAY_LOG_FILE",
    "RELAY_LOG_POS", "RELAY_THREAD", "RELAYLOG", "RELEASE_LOCK", "RELOAD",
    "REMOVE", "REORGANIZE", "REPAIR", "REPEATABLE", "REPLICATION",
    "RESET", "RESTORE", "RESUME", "RETURNS", "REVERSE",
    "ROLLBACK", "ROLLUP", "ROUND", "ROUTINE", "ROW",
    "ROW_COUNT", "ROW_FORMAT", "ROWS", "RPAD", "RTREE",
    "RTRIM", "SAVEPOINT", "SCHEDULE", "SCHEMA_NAME", "SECOND",
    "SECURITY", "SERIAL", "SERIALIZABLE", "SERVER", "SESSION",
    "SESSION_USER", "SET_TO_TIME", "SHA", "SHA1", "SHA2",
    "SHARE", "SHUTDOWN", "SIGN", "SIGNED", "SIMPLE",
    "SIN", "SLAVE", "SLEEP", "SNAPSHOT", "SOCKET",
    "SOME", "SONAME", "SOUNDEX", "SOUNDS", "SOURCE",
    "SPACE", "SQL_BUFFER_RESULT", "SQL_CACHE", "SQL_NO_CACHE", "SQL_THREAD",
    "SQL_TSI_DAY", "SQL_TSI_FRAC_SECOND", "SQL_TSI_HOUR", "SQL_TSI_MINUTE", "SQL_TSI_MONTH",
    "SQL_TSI_QUARTER", "SQL_TSI_SECOND", "SQL_TSI_WEEK", "SQL_TSI_YEAR", "SQRT",
    "START", "STARTS", "STATUS", "STD", "STDDEV",
    "STDDEV_POP", "STDDEV_SAMP", "STOP", "STORAGE", "STR_TO_DATE",
    "STRCMP", "STRING", "SUBCLASS_ORIGIN", "SUBDATE", "SUBJECT",
    "SUBPARTITION", "SUBPARTITIONS", "SUBSTR", "SUBSTRING", "SUBSTRING_INDEX",
    "SUM", "SUPER", "SUSPEND", "SWAPS", "SWITCHES",
    "SYSDATE", "SYSTEM_USER", "TABLE_CHECKSUM", "TABLE_NAME", "TABLES",
    "TABLESPACE", "TAN", "TEMPORARY", "TEMPTABLE", "TEXT",
    "THAN", "TIME", "TIME_FORMAT", "TIME_TO_SEC", "TIMEDIFF",
    "TIMESTAMP", "TIMESTAMPADD", "TIMESTAMPDIFF", "TO_DAYS", "TO_SECONDS",
    "TRANSACTION", "TRIGGERS", "TRIM", "TRUNCATE", "TYPE",
    "TYPES", "UCASE", "UNCOMMITTED", "UNCOMPRESS", "UNCOMPRESSED_LENGTH",
    "UNDEFINED", "UNDO_BUFFER_SIZE", "UNDOFILE", "UNHEX", "UNICODE",
    "UNINSTALL", "UNIX_TIMESTAMP", "UNKNOWN", "UNTIL", "UPGRADE",
    "UPPER", "USE_FRM", "USER", "USER_RESOURCES", "UUID",
    "UUID_SHORT", "VALUE", "VAR_POP", "VAR_SAMP", "VARIABLES",
    "VARIANCE", "VERSION", "VIEW", "WAIT", "WARNINGS",
    "WEEK", "WEEKDAY", "WEEKOFYEAR", "WORK", "WRAPPER",
    "X509", "XA", "XML", "YEAR", "YEARWEEK",
];

/// Reserved keywords. These can never appear as bare identifiers.
pub(crate) static RESERVED: &[&str] = &[
    "ACCESSIBLE", "ADD", "ALL", "ALTER", "ANALYZE",
    "AND", "AS", "ASC", "ASENSITIVE", "BEFORE",
    "BETWEEN", "BIGINT", "BINARY", "BLOB", "BOTH",
    "BY", "CALL", "CASCADE", "CASE", "CHANGE",
    "CHAR", "CHARACTER", "CHECK", "COLLATE", "COLUMN",
    "CONDITION", "CONSTRAINT", "CONTINUE", "CONVERT", "CREATE",
    "CROSS", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER",
    "CURSOR", "DATABASE", "DATABASES", "DAY_HOUR", "DAY_MICROSECOND",
    "DAY_MINUTE", "DAY_SECOND", "DEC", "DECIMAL", "DECLARE",
    "DEFAULT", "DELAYED", "DELETE", "DESC", "DESCRIBE",
    "DETERMINISTIC", "DISTINCT", "DISTINCTROW", "DIV", "DOUBLE",
    "DROP", "DUAL", "EACH", "ELSE", "ELSEIF",
    "ENCLOSED", "ESCAPED", "EXISTS", "EXIT", "EXPLAIN",
    "FALSE", "FETCH", "FLOAT", "FLOAT4", "FLOAT8",
    "FOR", "FORCE", "FOREIGN", "FROM", "FULLTEXT",
    "GENERAL", "GRANT", "GROUP", "HAVING", "HIGH_PRIORITY",
    "HOUR_MICROSECOND", "HOUR_MINUTE", "HOUR_SECOND", "IF", "IGNORE",
    "IN", "INDEX", "INFILE", "INNER", "INOUT",
    "INSENSITIVE", "INSERT", "INT", "INT1", "INT2",
    "INT3", "INT4", "INT8", "INTERGER", "INTERVAL",
    "INFO", "IS", "ITERATE", "JOIN", "KEY",
    "KEYS", "KILL", "LEADING", "LEAVE", "LEFT",
    "LIKE", "LIMIT", "LINEAR", "LINES", "LOAD",
    "LOCALTIME", "LOCALTIMESTAMP", "LOCK", "LONG", "LONGBLOB",
    "LONGTEXT", "LOOP", "LOW_PRIORITY", "MASTER_SSL_VERIFY_SERVER_CERT", "MATCH",
    "MAXVALUE", "MEDIUMBLOB", "MEDIUMINT", "MEDIUMTEXT", "MIDDLEINT",
    "MINUTE_MICROSECOND", "MINUTE_SECOND", "MOD", "MODIFIES", "NATURAL",
    "NOT", "NO_WRITE_TO_BINLOG", "NULL", "NUMERIC", "ON",
    "OPTIMIZE", "OPTION", "OPTIONALLY", "OR", "ORDER",
    "OUT", "OUTER", "OUTFILE", "PRECISION", "PRIMARY",
    "PROCEDURE", "PURGE", "RANGE", "READ", "READS",
    "READ_WRITE", "REAL", "REFERENCES", "REGEXP", "RELEASE",
    "RENAME", "REPEAT", "REPLACE", "REQUIRE", "RESIGNAL",
    "RESTRICT", "RETURN", "REVOKE", "RIGHT", "RLIKE",
    "SCHEMA", "SCHEMAS", "SECOND_MICROSECOND", "SELECT", "SENSITIVE",
    "SEPARATOR", "SET", "SHOW", "SIGNAL", "SLOW",
    "SMALLINT", "SPATIAL", "SPECIFIC", "SQL", "SQLEXCEPTION",
    "SQLSTATE", "SQLWARNING", "SQL_BIG_RESULT", "SQL_CALC_FOUND_ROWS", "SQL_SMALL_RESULT",
    "SSL", "STARTING", "STRAIGHT_JOIN", "TABLE", "TERMINATED",
    "THEN", "TINYBLOB", "TINYINT", "TINYTEXT", "TO",
    "TRAILING", "TRIGGER", "TRUE", "UNDO", "UNION",
    "UNIQUE", "UNLOCK", "UNSIGNED", "UPDATE", "USAGE",
    "USE", "USING", "UTC_DATE", "UTC_TIME", "UTC_TIMESTAMP",
    "VALUES", "VARBINARY", "VARCHAR", "VARCHARACTER", "VARYING",
    "WHEN", "WHERE", "WHILE", "WITH", "WRITE",
    "XOR", "YEAR_MONTH", "ZEROFILL",
];

static NON_RESERVED_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NON_RESERVED.iter().copied().collect());

/// Whether an upper-cased keyword text is in the non-reserved list (and may therefore still
/// act as an identifier).
pub(crate) fn is_non_reserved(text: &str) -> bool {
    NON_RESERVED_SET.contains(text)
}

fn word_bounded_alternation(words: &[&str]) -> Regex {
    let pattern = format!("(?i)^\\b({})\\b", words.join("|"));
    Regex::new(&pattern).expect("keyword alternation is a valid regex")
}

static RESERVED_REGEX: Lazy<Regex> = Lazy::new(|| word_bounded_alternation(RESERVED));
static NON_RESERVED_REGEX: Lazy<Regex> = Lazy::new(|| word_bounded_alternation(NON_RESERVED));

/// Recognizer for reserved and non-reserved keywords; the emitted text is upper-cased.
pub(crate) struct KeywordProbe;

impl Lexeme for KeywordProbe {
    fn probe(&self, source: &str, at: usize) -> Option<Token> {
        if !source.as_bytes()[at].is_ascii_alphabetic() {
            return None;
        }
        let rest = &source[at..];
        for regex in [&*RESERVED_REGEX, &*NON_RESERVED_REGEX] {
            if let Some(found) = regex.find(rest) {
                return Some(Token::new(
                    TokenKind::Keyword,
                    found.as_str().to_uppercase(),
                ));
            }
        }
        None
    }
}

static NULL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new("(?i)^\\b(NULL)\\b").expect("null keyword regex is valid"));

/// Recognizer for the null literal: the `\N` escape or the word `NULL` (emitted upper-case).
pub(crate) struct NullProbe;

impl Lexeme for NullProbe {
    fn probe(&self, source: &str, at: usize) -> Option<Token> {
        let lead = source.as_bytes()[at];
        if lead != b'N' && lead != b'n' && lead != b'\\' {
            return None;
        }
        let rest = &source[at..];
        if rest.starts_with("\\N") {
            return Some(Token::new(TokenKind::Null, "\\N"));
        }
        NULL_REGEX
            .find(rest)
            .map(|found| Token::new(TokenKind::Null, found.as_str().to_uppercase()))
    }
}
