//! Typestate builder for `Select` ASTs.
//!
//! The state parameter makes `select -> from -> clauses` the only order
//! that compiles; clause methods exist only once a FROM source is set.

use crate::query::ast::{
    common::{JoinKind, OrderDir, TableRef},
    expr::Expr,
    select::{Join, OrderBy, Select, Source},
};
use std::marker::PhantomData;

#[derive(Debug, Default, Clone)]
pub struct InitialState;

#[derive(Debug, Default, Clone)]
pub struct SelectState;

#[derive(Debug, Default, Clone)]
pub struct FromState;

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    ast: Select,
    _state: PhantomData<State>,
}

impl Default for SelectBuilder<InitialState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State> SelectBuilder<State> {
    fn into_state<Next>(self) -> SelectBuilder<Next> {
        SelectBuilder {
            ast: self.ast,
            _state: PhantomData,
        }
    }
}

impl SelectBuilder<InitialState> {
    pub fn new() -> Self {
        Self {
            ast: Select::default(),
            _state: PhantomData,
        }
    }

    pub fn select(mut self, columns: Vec<Expr>) -> SelectBuilder<SelectState> {
        self.ast.columns = columns;
        self.into_state()
    }
}

impl SelectBuilder<SelectState> {
    pub fn from(mut self, table: TableRef, alias: Option<&str>) -> SelectBuilder<FromState> {
        self.ast.from = Some(Source::new(table, alias));
        self.into_state()
    }
}

impl SelectBuilder<FromState> {
    pub fn join(mut self, kind: JoinKind, table: TableRef, alias: Option<&str>, on: Expr) -> Self {
        self.ast.joins.push(Join {
            kind,
            source: Source::new(table, alias),
            on,
        });
        self
    }

    /// Repeated calls are combined with `AND`.
    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.ast.where_clause = Some(match self.ast.where_clause.take() {
            Some(existing) => existing.and(condition),
            None => condition,
        });
        self
    }

    pub fn order_by(mut self, expr: Expr, direction: OrderDir) -> Self {
        self.ast.order_by.push(OrderBy { expr, direction });
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.ast.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.ast.offset = Some(offset);
        self
    }

    pub fn build(self) -> Select {
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        query::{
            ast::{
                common::{JoinKind, OrderDir},
                expr::{BinaryOp, BinaryOperator, Expr},
            },
            builder::select::SelectBuilder,
            ident, qualified, value,
        },
        table_ref,
    };
    use model::core::value::Value;

    fn eq(left: Expr, right: Expr) -> Expr {
        Expr::BinaryOp(Box::new(BinaryOp {
            left,
            op: BinaryOperator::Eq,
            right,
        }))
    }

    #[test]
    fn test_unaliased_source() {
        let ast = SelectBuilder::new()
            .select(vec![ident("id"), ident("name")])
            .from(table_ref!("shop"), None)
            .build();

        let from = ast.from.unwrap();
        assert_eq!(from.alias, None);
        assert_eq!(from.binding(), "shop");
        assert!(ast.where_clause.is_none());
    }

    #[test]
    fn test_repeated_where_clauses_are_and_ed() {
        let first = eq(qualified("item", "price"), value(Value::Int(5000)));
        let second = eq(qualified("item", "stock"), value(Value::Int(20)));

        let ast = SelectBuilder::new()
            .select(vec![qualified("item", "id")])
            .from(table_ref!("item"), Some("item"))
            .where_clause(first.clone())
            .where_clause(second.clone())
            .build();

        assert_eq!(ast.where_clause, Some(first.and(second)));
    }

    #[test]
    fn test_join_ordering_and_paging() {
        let ast = SelectBuilder::new()
            .select(vec![qualified("i", "name"), qualified("s", "name")])
            .from(table_ref!("item"), Some("i"))
            .join(
                JoinKind::Left,
                table_ref!("shop"),
                Some("s"),
                eq(qualified("i", "shop_id"), qualified("s", "id")),
            )
            .order_by(qualified("i", "price"), OrderDir::Desc)
            .limit(50)
            .offset(100)
            .build();

        assert_eq!(ast.joins.len(), 1);
        assert_eq!(ast.joins[0].binding(), "s");
        assert_eq!(ast.order_by[0].direction, OrderDir::Desc);
        assert_eq!((ast.limit, ast.offset), (Some(50), Some(100)));
    }
}
