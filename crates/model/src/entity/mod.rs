//! Entity schema declarations and the mapping between entities and rows.

use crate::{core::data_type::DataType, error::ModelError, records::row::RowData};
use std::fmt;

pub mod item;
pub mod shop;

pub use item::{Item, ItemBuilder};
pub use shop::{Shop, ShopBuilder};

/// A foreign key from one entity column to another table's column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    pub table: &'static str,
    pub column: &'static str,
}

/// Declares one persisted attribute of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSchema {
    pub name: &'static str,
    pub data_type: DataType,
    pub nullable: bool,
    pub primary_key: bool,
    pub max_length: Option<usize>,
    pub references: Option<ForeignKey>,
}

impl ColumnSchema {
    pub const fn new(name: &'static str, data_type: DataType) -> Self {
        Self {
            name,
            data_type,
            nullable: false,
            primary_key: false,
            max_length: None,
            references: None,
        }
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub const fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub const fn references(mut self, table: &'static str, column: &'static str) -> Self {
        self.references = Some(ForeignKey { table, column });
        self
    }
}

/// A persistent type with a table, a column layout and a surrogate `id` key.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    const TABLE: &'static str;
    const COLUMNS: &'static [ColumnSchema];

    /// Name of the surrogate key column.
    const PRIMARY_KEY: &'static str = "id";

    fn id(&self) -> Option<i64>;

    /// Returns the entity with the id assigned by the store.
    fn with_id(self, id: i64) -> Self;

    fn to_row(&self) -> RowData;

    fn from_row(row: &RowData) -> Result<Self, ModelError>;

    fn column_names() -> Vec<&'static str> {
        Self::COLUMNS.iter().map(|c| c.name).collect()
    }
}
