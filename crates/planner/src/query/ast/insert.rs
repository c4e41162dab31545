//! `INSERT` statements persisting entity rows.

use crate::query::ast::{common::TableRef, expr::Expr};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insert {
    pub table: TableRef,
    pub columns: Vec<String>,
    /// One entry per inserted row, each in `columns` order.
    pub rows: Vec<Vec<Expr>>,
    pub upsert: Option<Upsert>,
}

/// Turns a key collision into an update of the stored row.
///
/// Rendered as `ON CONFLICT (key) DO UPDATE SET col = excluded.col` for
/// every column in `update`, or `DO NOTHING` when `update` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Upsert {
    pub key: Vec<String>,
    pub update: Vec<String>,
}
