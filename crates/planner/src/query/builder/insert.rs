//! Provides a fluent builder for constructing `Insert` ASTs.

use crate::query::ast::{
    common::TableRef,
    expr::Expr,
    insert::{Insert, Upsert},
};

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    ast: Insert,
}

impl InsertBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: Insert {
                table,
                ..Default::default()
            },
        }
    }

    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.ast.columns = columns.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Adds a row of values. Call repeatedly for a multi-row insert.
    pub fn values(mut self, values: Vec<Expr>) -> Self {
        self.ast.rows.push(values);
        self
    }

    /// Rows colliding on `key` overwrite every other inserted column.
    /// Call after [`columns`](Self::columns).
    pub fn upsert_on(mut self, key: &[&str]) -> Self {
        let update = self
            .ast
            .columns
            .iter()
            .filter(|c| !key.contains(&c.as_str()))
            .cloned()
            .collect();

        self.ast.upsert = Some(Upsert {
            key: key.iter().map(|s| s.to_string()).collect(),
            update,
        });
        self
    }

    pub fn build(self) -> Insert {
        self.ast
    }
}
