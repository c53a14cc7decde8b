//! Name extraction: a post-parse walk over a statement tree collecting the database/table
//! pairs it references. Kept out of the parse loop; the visitor dispatches on production
//! names only.

use crate::{NodeMeta, ParseNode};

/// A referenced table. `database` is empty when the statement did not qualify the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub database: String,
    pub table: String,
}

/// The names a statement reads or writes. Target tables land in `tables`; sub-query sources
/// (and the `LIKE` source of CREATE TABLE, and the old names of RENAME TABLE) land in
/// `from_tables`; database-level statements fill `database`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Names {
    pub database: Option<String>,
    pub tables: Vec<TableRef>,
    pub from_tables: Vec<TableRef>,
}

fn table_ref(node: &ParseNode) -> Option<TableRef> {
    match &node.meta {
        NodeMeta::Table { database, table } => Some(TableRef {
            database: database.clone(),
            table: table.clone(),
        }),
        _ => None,
    }
}

fn database_of(node: &ParseNode) -> Option<String> {
    match &node.meta {
        NodeMeta::Database { database } => Some(database.clone()),
        _ => None,
    }
}

/// Tables collected from a component node, one level of statement nesting included. Each
/// production propagates the tables its direct children already collected.
fn component_tables(node: &ParseNode) -> Vec<TableRef> {
    let mut tables = Vec::new();
    match node.name {
        "TableName" => tables.extend(table_ref(node)),
        "TableNameList" => {
            for child in node.child_nodes("TableName") {
                tables.extend(table_ref(child));
            }
        }
        "SubQuery" => {
            for child in node.children.iter().filter_map(crate::Child::as_node) {
                if child.name == "Select" || child.name == "Union" {
                    tables.extend(extract(child).tables);
                }
            }
        }
        "TableFactor" => {
            for child in node.children.iter().filter_map(crate::Child::as_node) {
                match child.name {
                    "TableName" => tables.extend(table_ref(child)),
                    "SubQuery" => tables.extend(component_tables(child)),
                    _ => {}
                }
            }
        }
        "TableReference" => {
            for child in node.children.iter().filter_map(crate::Child::as_node) {
                match child.name {
                    "TableFactor" => tables.extend(component_tables(child)),
                    "Expression" => tables.extend(expression_sub_query_tables(child)),
                    _ => {}
                }
            }
        }
        "TableReferenceList" => {
            for child in node.child_nodes("TableReference") {
                tables.extend(component_tables(child));
            }
        }
        _ => {}
    }
    tables
}

/// Tables of the sub-queries sitting directly under an expression node.
fn expression_sub_query_tables(expression: &ParseNode) -> Vec<TableRef> {
    expression
        .child_nodes("SubQuery")
        .flat_map(component_tables)
        .collect()
}

/// Extract the referenced names of a parsed statement.
pub(crate) fn extract(node: &ParseNode) -> Names {
    let mut names = Names::default();
    match node.name {
        "CreateDatabase" | "AlterDatabase" | "DropDatabase" | "Use" => {
            for child in node.child_nodes("DatabaseName") {
                names.database = database_of(child);
            }
        }
        "CreateTable" => {
            // The first table is the created one; a second TableName child is the LIKE
            // source. Sub-queries of the AS query expression count as regular sources.
            for child in node.children.iter().filter_map(crate::Child::as_node) {
                match child.name {
                    "TableName" => {
                        if names.tables.is_empty() {
                            names.tables.extend(table_ref(child));
                        } else {
                            names.from_tables.extend(table_ref(child));
                        }
                    }
                    "Expression" => names.tables.extend(expression_sub_query_tables(child)),
                    _ => {}
                }
            }
        }
        "AlterTable" | "CreateIndex" | "DropIndex" | "TruncateTable" => {
            for child in node.child_nodes("TableName") {
                names.tables.extend(table_ref(child));
            }
        }
        "DropTable" => {
            for child in node.child_nodes("TableNameList") {
                names.tables.extend(component_tables(child));
            }
        }
        "RenameTable" => {
            // TableName children alternate old, new, old, new ...
            for (index, child) in node.child_nodes("TableName").enumerate() {
                if index % 2 == 0 {
                    names.from_tables.extend(table_ref(child));
                } else {
                    names.tables.extend(table_ref(child));
                }
            }
        }
        "Insert" | "Replace" => {
            for child in node.children.iter().filter_map(crate::Child::as_node) {
                match child.name {
                    "TableName" => names.tables.extend(table_ref(child)),
                    "Expression" => names
                        .from_tables
                        .extend(expression_sub_query_tables(child)),
                    "Select" | "Union" => names.from_tables.extend(extract(child).tables),
                    _ => {}
                }
            }
        }
        "Update" => {
            for child in node.children.iter().filter_map(crate::Child::as_node) {
                match child.name {
                    "TableReferenceList" => names.tables.extend(component_tables(child)),
                    "Expression" => names
                        .from_tables
                        .extend(expression_sub_query_tables(child)),
                    _ => {}
                }
            }
        }
        "Delete" => {
            for child in node.children.iter().filter_map(crate::Child::as_node) {
                match child.name {
                    "TableName" => names.tables.extend(table_ref(child)),
                    "TableReferenceList" => names.tables.extend(component_tables(child)),
                    "Expression" => names.tables.extend(expression_sub_query_tables(child)),
                    _ => {}
                }
            }
        }
        "Select" => {
            for child in node.children.iter().filter_map(crate::Child::as_node) {
                match child.name {
                    "TableReferenceList" => names.tables.extend(component_tables(child)),
                    "Expression" => names.tables.extend(expression_sub_query_tables(child)),
                    _ => {}
                }
            }
        }
        "Union" => {
            for child in node.child_nodes("Select") {
                names.tables.extend(extract(child).tables);
            }
        }
        "Explain" => {
            for child in node.children.iter().filter_map(crate::Child::as_node) {
                match child.name {
                    "TableName" => names.tables.extend(table_ref(child)),
                    "Select" | "Union" => names.tables.extend(extract(child).tables),
                    _ => {}
                }
            }
        }
        "Show" => {
            for child in node.children.iter().filter_map(crate::Child::as_node) {
                match child.name {
                    // A bare database target pairs with an empty table name.
                    "DatabaseName" => {
                        if let Some(database) = database_of(child) {
                            names.tables.push(TableRef {
                                database,
                                table: String::new(),
                            });
                        }
                    }
                    "TableName" => names.tables.extend(table_ref(child)),
                    "Expression" => names.tables.extend(expression_sub_query_tables(child)),
                    _ => {}
                }
            }
        }
        _ => {}
    }
    names
}
