use crate::lexer::tokenize;
use crate::{parse, registry, NodeMeta, TokenStream};

fn stream(sql: &str) -> TokenStream {
    TokenStream::new(tokenize(sql).unwrap())
}

fn component(name: &str, sql: &str) -> Option<(crate::ParseNode, usize)> {
    let mut stream = stream(sql);
    registry::parse_production(name, &mut stream).map(|node| (node, stream.pos()))
}

fn table_names(refs: &[crate::TableRef]) -> Vec<&str> {
    refs.iter().map(|t| t.table.as_str()).collect()
}

#[test]
fn table_name_decodes_database_and_table() {
    let (node, _) = component("TableName", "db1.t1").unwrap();
    assert_eq!(
        node.meta,
        NodeMeta::Table {
            database: "db1".into(),
            table: "t1".into()
        }
    );

    let (node, _) = component("TableName", "`a`.`b`").unwrap();
    assert_eq!(
        node.meta,
        NodeMeta::Table {
            database: "a".into(),
            table: "b".into()
        }
    );
}

#[test]
fn column_name_decodes_all_three_levels() {
    let (node, _) = component("ColumnName", "d.t.c").unwrap();
    assert_eq!(
        node.meta,
        NodeMeta::Column {
            database: "d".into(),
            table: "t".into(),
            column: "c".into()
        }
    );
}

#[test]
fn identifier_rejects_reserved_keywords() {
    assert!(component("Identifier", "SELECT").is_none());
    assert!(component("Identifier", "STATUS").is_some());
    assert!(component("Identifier", "`select`").is_some());
}

#[test]
fn charset_name_enforces_the_allow_list() {
    let (node, _) = component("CharsetName", "UTF8MB4").unwrap();
    assert_eq!(node.meta, NodeMeta::Charset("utf8mb4".into()));

    let mut failing = stream("cp999 rest");
    assert!(registry::parse_production("CharsetName", &mut failing).is_none());
    // A rejected production leaves the cursor where it started.
    assert_eq!(failing.pos(), 0);
}

#[test]
fn collation_name_checks_charset_head_and_suffix() {
    let (node, _) = component("CollationName", "utf8_general_ci").unwrap();
    assert_eq!(node.meta, NodeMeta::Collation("utf8_general_ci".into()));

    assert!(component("CollationName", "nochars_ci").is_none());
    assert!(component("CollationName", "utf8_general").is_none());
}

#[test]
fn engine_name_decodes_upper_case() {
    let (node, _) = component("EngineName", "InnoDB").unwrap();
    assert_eq!(node.meta, NodeMeta::Engine("INNODB".into()));
    assert!(component("EngineName", "ndbcluster").is_none());
}

#[test]
fn data_type_covers_the_type_grammar() {
    for sql in [
        "DATE",
        "INT",
        "INT(11) UNSIGNED",
        "DECIMAL(10,2)",
        "VARCHAR(32) CHARACTER SET utf8 COLLATE utf8_bin",
        "ENUM('a','b','c')",
        "TEXT",
    ] {
        assert!(component("DataType", sql).is_some(), "{}", sql);
    }
    assert!(component("DataType", "POINTER").is_none());
}

#[test]
fn driver_rolls_back_to_the_last_soft_accept() {
    // INT UNSIGNED parses, the trailing NOT NULL belongs to the column definition.
    let mut stream = stream("INT UNSIGNED NOT NULL");
    let node = registry::parse_production("DataType", &mut stream).unwrap();
    assert_eq!(node.text, "INT UNSIGNED");
    assert_eq!(stream.peek_significant(1)[0].text, "NOT");
}

#[test]
fn expression_scanner_stops_at_clause_boundaries() {
    let (node, _) = component("Expression", "a + b FROM t").unwrap();
    assert_eq!(node.text, "a + b ");

    let mut at_comma = stream("a, b");
    let node = registry::parse_production("Expression", &mut at_comma).unwrap();
    assert_eq!(node.text, "a");
    assert_eq!(at_comma.peek_significant(1)[0].text, ",");

    assert!(component("Expression", ", a").is_none());
}

#[test]
fn expression_scanner_keeps_function_keywords_inside_brackets() {
    let (node, _) = component("Expression", "GROUP_CONCAT(x ORDER BY y)").unwrap();
    assert_eq!(node.text, "GROUP_CONCAT(x ORDER BY y)");

    // Outside brackets the same keyword ends the expression.
    let (node, _) = component("Expression", "x ORDER BY y").unwrap();
    assert_eq!(node.text, "x ");
}

#[test]
fn expression_scanner_predicts_sub_queries() {
    let (node, _) = component("Expression", "(SELECT x FROM t2)").unwrap();
    assert!(node.contains("SubQuery"));
    assert!(node.contains("Select"));
}

#[test]
fn use_statement_extracts_the_database() {
    let statements = parse("USE mydb;").unwrap();
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].name, "Use");
    assert_eq!(statements[0].names.database.as_deref(), Some("mydb"));
}

#[test]
fn select_collects_sub_query_tables() {
    let statements = parse("SELECT a, b FROM t1 WHERE c = (SELECT x FROM t2);").unwrap();
    assert_eq!(statements[0].name, "Select");
    assert_eq!(table_names(&statements[0].names.tables), ["t1", "t2"]);
}

#[test]
fn insert_from_select_splits_targets_and_sources() {
    let statements = parse("INSERT INTO a SELECT * FROM b;").unwrap();
    assert_eq!(statements[0].name, "Insert");
    assert_eq!(table_names(&statements[0].names.tables), ["a"]);
    assert_eq!(table_names(&statements[0].names.from_tables), ["b"]);
}

#[test]
fn create_table_full_form_parses() {
    let statements = parse(
        "CREATE TABLE t (id INT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY, \
         name VARCHAR(32) CHARACTER SET utf8 COLLATE utf8_bin DEFAULT 'x') \
         ENGINE = InnoDB DEFAULT CHARSET=utf8mb4;",
    )
    .unwrap();
    statements[0].node.print().unwrap();
    assert_eq!(statements[0].name, "CreateTable");
    assert_eq!(table_names(&statements[0].names.tables), ["t"]);
    assert!(statements[0].node.contains("ColumnDefinition"));
    assert!(statements[0].node.contains("TableOptionList"));
}

#[test]
fn create_table_like_records_the_source() {
    let statements = parse("CREATE TABLE t LIKE old.src;").unwrap();
    assert_eq!(table_names(&statements[0].names.tables), ["t"]);
    assert_eq!(table_names(&statements[0].names.from_tables), ["src"]);
    assert_eq!(statements[0].names.from_tables[0].database, "old");
}

#[test]
fn rename_table_pairs_old_and_new_names() {
    let statements = parse("RENAME TABLE a TO b, c TO d;").unwrap();
    assert_eq!(statements[0].name, "RenameTable");
    assert_eq!(table_names(&statements[0].names.from_tables), ["a", "c"]);
    assert_eq!(table_names(&statements[0].names.tables), ["b", "d"]);
}

#[test]
fn multiple_statements_keep_input_order() {
    let statements = parse(
        "UPDATE t1 SET x = 1 WHERE y = 2; \
         INSERT INTO t2 VALUES (1,'a',(SELECT id FROM t3));",
    )
    .unwrap();
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].name, "Update");
    assert_eq!(table_names(&statements[0].names.tables), ["t1"]);
    assert_eq!(statements[1].name, "Insert");
    assert_eq!(table_names(&statements[1].names.tables), ["t2"]);
    assert_eq!(table_names(&statements[1].names.from_tables), ["t3"]);
}

#[test]
fn truncated_input_is_a_syntax_error() {
    assert!(parse("INSERT INTO t VALUES (1,").is_err());
}

#[test]
fn unknown_charset_fails_the_statement() {
    assert!(parse("CREATE DATABASE d CHARACTER SET cp999;").is_err());
    assert!(parse("CREATE DATABASE d CHARACTER SET utf8;").is_ok());
}

#[test]
fn statement_text_round_trips_the_sub_stream() {
    let sql = "SELECT a , `b` FROM t1 /* keep */ WHERE c = 1";
    let statements = parse(sql).unwrap();
    assert_eq!(statements[0].node.text, sql);
}

#[test]
fn parsing_is_deterministic() {
    let sql = "SELECT a FROM t1 LEFT JOIN t2 ON t1.a = t2.a;USE d2;";
    let one = parse(sql).unwrap();
    let two = parse(sql).unwrap();
    assert_eq!(one.len(), two.len());
    for (left, right) in one.iter().zip(two.iter()) {
        assert_eq!(left.name, right.name);
        assert_eq!(left.node.text, right.node.text);
        assert_eq!(left.names, right.names);
    }
}

#[test]
fn join_chains_collect_every_factor() {
    let statements = parse(
        "SELECT x FROM t1 LEFT OUTER JOIN t2 USING (a) INNER JOIN t3 ON t2.b = t3.b;",
    )
    .unwrap();
    assert_eq!(table_names(&statements[0].names.tables), ["t1", "t2", "t3"]);
}

#[test]
fn union_collects_both_sides() {
    let statements = parse("SELECT a FROM t1 UNION ALL SELECT b FROM t2;").unwrap();
    assert_eq!(statements[0].name, "Union");
    assert_eq!(table_names(&statements[0].names.tables), ["t1", "t2"]);
}

#[test]
fn reserved_words_never_act_as_bare_identifiers() {
    for word in crate::lexeme::RESERVED {
        assert!(
            component("Identifier", word).is_none(),
            "reserved word accepted: {}",
            word
        );
    }
}

#[test]
fn non_reserved_words_can_name_tables() {
    for word in crate::lexeme::NON_RESERVED {
        let (node, _) = component("TableName", word)
            .unwrap_or_else(|| panic!("non-reserved word rejected: {}", word));
        assert_eq!(
            node.meta,
            NodeMeta::Table {
                database: String::new(),
                table: (*word).to_string()
            }
        );
    }
}

#[test]
fn acceptance_fixture() {
    let fixture = r#"{
        "UPDATE db.t SET a = 1, b = 'x' WHERE id = 3": true,
        "UPDATE db.t SET `a`=1 WHERE `id`=3 LIMIT 1": true,
        "INSERT INTO t2 (a, b) VALUES (1, 'x'), (2, 'y')": true,
        "INSERT INTO t SET a = 1 ON DUPLICATE KEY UPDATE a = 2": true,
        "REPLACE INTO t (a) VALUES (1)": true,
        "DELETE t1.* FROM t1 WHERE a = 1": true,
        "DELETE FROM t1": false,
        "DROP TABLE IF EXISTS a, b": true,
        "DROP INDEX i ON t": true,
        "TRUNCATE TABLE a.b": true,
        "CREATE INDEX i USING BTREE ON t (a(10) ASC, b)": true,
        "ALTER TABLE t ADD COLUMN c INT UNSIGNED": true,
        "ALTER TABLE t DROP PRIMARY KEY": true,
        "SHOW DATABASES LIKE 'x%'": true,
        "SHOW FULL COLUMNS FROM t IN d": true,
        "SET autocommit = 1": true,
        "SET GLOBAL max_connections = 500": true,
        "SET @@session.sql_mode = 'STRICT'": true,
        "SET NAMES utf8": false,
        "EXPLAIN SELECT a FROM t": true,
        "GRANT ALL ON x.* TO 'u'": false,
        "SELECT FROM": false,
        "INSERT INTO t VALUES (1,": false
    }"#;
    let cases: serde_json::Value = serde_json::from_str(fixture).unwrap();
    for (sql, expected) in cases.as_object().unwrap() {
        assert_eq!(
            parse(sql).is_ok(),
            expected.as_bool().unwrap(),
            "unexpected outcome for: {}",
            sql
        );
    }
}
