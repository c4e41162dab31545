//! SELECT statements over aliased entity sources.

use crate::query::ast::{
    common::{JoinKind, OrderDir, TableRef},
    expr::Expr,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    pub columns: Vec<Expr>,
    pub from: Option<Source>,
    pub joins: Vec<Join>,
    pub where_clause: Option<Expr>,
    pub order_by: Vec<OrderBy>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// One occurrence of a table in a query, optionally under an alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub table: TableRef,
    pub alias: Option<String>,
}

impl Source {
    pub fn new(table: TableRef, alias: Option<&str>) -> Self {
        Self {
            table,
            alias: alias.map(String::from),
        }
    }

    /// The name other clauses use to qualify this source's columns: the
    /// alias, or the bare table name when there is none.
    pub fn binding(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.table.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub source: Source,
    pub on: Expr,
}

impl Join {
    pub fn binding(&self) -> &str {
        self.source.binding()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub expr: Expr,
    pub direction: OrderDir,
}
