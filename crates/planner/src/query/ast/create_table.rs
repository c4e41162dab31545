//! `CREATE TABLE` statements for entity tables.

use crate::query::ast::common::TableRef;
use model::{core::data_type::DataType, entity::ColumnSchema};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTable {
    pub table: TableRef,
    pub columns: Vec<ColumnDef>,
    pub foreign_keys: Vec<ForeignKeyDef>,
    pub if_not_exists: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
    pub max_length: Option<usize>,
    pub nullable: bool,
    pub primary_key: bool,
}

impl From<&ColumnSchema> for ColumnDef {
    fn from(schema: &ColumnSchema) -> Self {
        ColumnDef {
            name: schema.name.to_string(),
            data_type: schema.data_type,
            max_length: schema.max_length,
            nullable: schema.nullable,
            primary_key: schema.primary_key,
        }
    }
}

/// A single-column reference to another table's key.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyDef {
    pub column: String,
    pub references: TableRef,
    pub referenced_column: String,
}
