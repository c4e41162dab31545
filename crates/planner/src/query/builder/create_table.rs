//! Provides a fluent builder for constructing `CreateTable` ASTs.

use crate::{
    query::ast::{
        common::TableRef,
        create_table::{ColumnDef, CreateTable, ForeignKeyDef},
    },
    table_ref,
};
use model::{core::data_type::DataType, entity::Entity};

#[derive(Debug, Clone)]
pub struct CreateTableBuilder {
    ast: CreateTable,
}

impl CreateTableBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: CreateTable {
                table,
                ..Default::default()
            },
        }
    }

    /// Derives the table definition from an entity's column declarations.
    pub fn from_entity<E: Entity>() -> Self {
        let mut builder = Self::new(table_ref!(E::TABLE));
        for schema in E::COLUMNS {
            builder.ast.columns.push(ColumnDef::from(schema));
            if let Some(fk) = schema.references {
                builder = builder.foreign_key(schema.name, table_ref!(fk.table), fk.column);
            }
        }
        builder
    }

    pub fn if_not_exists(mut self) -> Self {
        self.ast.if_not_exists = true;
        self
    }

    /// Starts a NOT NULL column; finish it with [`ColumnBuilder::add`].
    pub fn column(self, name: &str, data_type: DataType) -> ColumnBuilder {
        ColumnBuilder {
            table_builder: self,
            column: ColumnDef {
                name: name.to_string(),
                data_type,
                max_length: None,
                nullable: false,
                primary_key: false,
            },
        }
    }

    pub fn foreign_key(mut self, column: &str, references: TableRef, referenced_column: &str) -> Self {
        self.ast.foreign_keys.push(ForeignKeyDef {
            column: column.to_string(),
            references,
            referenced_column: referenced_column.to_string(),
        });
        self
    }

    pub fn build(self) -> CreateTable {
        self.ast
    }
}

pub struct ColumnBuilder {
    table_builder: CreateTableBuilder,
    column: ColumnDef,
}

impl ColumnBuilder {
    pub fn nullable(mut self) -> Self {
        self.column.nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.column.primary_key = true;
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.column.max_length = Some(len);
        self
    }

    pub fn add(mut self) -> CreateTableBuilder {
        self.table_builder.ast.columns.push(self.column);
        self.table_builder
    }
}
