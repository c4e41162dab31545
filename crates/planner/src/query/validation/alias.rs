//! Resolves the aliases referenced by a SELECT against the sources it declares.
//!
//! Every qualified identifier in the projection, the join conditions, the
//! WHERE clause and the ORDER BY list must name a source declared by the
//! query itself: the FROM source or one of its JOINs. Matching is strict
//! string equality. Unqualified identifiers are left to the database.
//!
//! A JOIN condition may only see the sources declared up to and including
//! its own join, mirroring SQL scoping.

use crate::{
    error::QueryError,
    query::ast::{expr::Expr, select::Select},
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AliasResolver<'a> {
    declared: Vec<&'a str>,
}

impl<'a> AliasResolver<'a> {
    /// Walks the query and returns the resolved source aliases, or the first
    /// alias violation found.
    pub fn resolve(select: &'a Select) -> Result<Self, QueryError> {
        let from = select.from.as_ref().ok_or(QueryError::MissingFrom)?;
        let mut resolver = Self {
            declared: vec![from.binding()],
        };

        for join in &select.joins {
            resolver.declare(join.binding())?;
            resolver.check(&join.on)?;
        }

        for column in &select.columns {
            resolver.check(column)?;
        }

        if let Some(condition) = &select.where_clause {
            resolver.check(condition)?;
        }

        for order in &select.order_by {
            resolver.check(&order.expr)?;
        }

        Ok(resolver)
    }

    pub fn declared(&self) -> &[&'a str] {
        &self.declared
    }

    fn declare(&mut self, alias: &'a str) -> Result<(), QueryError> {
        if self.declared.contains(&alias) {
            return Err(QueryError::DuplicateAlias {
                alias: alias.to_string(),
            });
        }
        self.declared.push(alias);
        Ok(())
    }

    fn check(&self, expr: &Expr) -> Result<(), QueryError> {
        let mut undeclared = None;
        expr.for_each_ident(&mut |ident| {
            if undeclared.is_some() {
                return;
            }
            if let Some(qualifier) = &ident.qualifier
                && !self.declared.contains(&qualifier.as_str())
            {
                undeclared = Some(qualifier.clone());
            }
        });

        match undeclared {
            Some(alias) => {
                debug!(alias = %alias, declared = ?self.declared, "Rejecting undeclared alias");
                Err(QueryError::AliasMismatch {
                    alias,
                    declared: self.declared.iter().map(|a| a.to_string()).collect(),
                })
            }
            None => Ok(()),
        }
    }
}

/// Checks that every alias the query references is one it declares.
pub fn validate(select: &Select) -> Result<(), QueryError> {
    AliasResolver::resolve(select).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::{AliasResolver, validate};
    use crate::{
        error::QueryError,
        query::{
            ast::{
                common::JoinKind,
                expr::{BinaryOp, BinaryOperator, Expr},
                select::Select,
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

    fn items_where(alias: &str, condition: Expr) -> Select {
        SelectBuilder::new()
            .select(vec![qualified(alias, "id"), qualified(alias, "name")])
            .from(table_ref!("item"), Some(alias))
            .where_clause(condition)
            .build()
    }

    #[test]
    fn test_matching_alias_resolves() {
        let select = items_where(
            "item",
            eq(qualified("item", "name"), value(Value::from("itemA"))),
        );

        let resolver = AliasResolver::resolve(&select).unwrap();
        assert_eq!(resolver.declared(), &["item"]);
    }

    #[test]
    fn test_foreign_alias_in_predicate_is_rejected() {
        let select = items_where(
            "item",
            eq(qualified("item2", "name"), value(Value::from("itemD"))),
        );

        assert_eq!(
            validate(&select),
            Err(QueryError::AliasMismatch {
                alias: "item2".to_string(),
                declared: vec!["item".to_string()],
            })
        );
    }

    #[test]
    fn test_aliases_are_case_sensitive() {
        let select = items_where(
            "item",
            eq(qualified("Item", "name"), value(Value::from("itemA"))),
        );

        assert!(matches!(
            validate(&select),
            Err(QueryError::AliasMismatch { alias, .. }) if alias == "Item"
        ));
    }

    #[test]
    fn test_foreign_alias_in_projection_is_rejected() {
        let select = SelectBuilder::new()
            .select(vec![qualified("item2", "name")])
            .from(table_ref!("item"), Some("item"))
            .build();

        assert!(matches!(
            validate(&select),
            Err(QueryError::AliasMismatch { .. })
        ));
    }

    #[test]
    fn test_unaliased_source_binds_table_name() {
        let select = SelectBuilder::new()
            .select(vec![qualified("item", "name"), ident("price")])
            .from(table_ref!("item"), None)
            .build();

        assert_eq!(validate(&select), Ok(()));
    }

    #[test]
    fn test_self_join_declares_both_aliases() {
        let select = SelectBuilder::new()
            .select(vec![qualified("item", "name")])
            .from(table_ref!("item"), Some("item"))
            .join(
                JoinKind::Inner,
                table_ref!("item"),
                Some("item2"),
                eq(qualified("item", "shop_id"), qualified("item2", "shop_id")),
            )
            .where_clause(eq(qualified("item2", "name"), value(Value::from("itemB"))))
            .build();

        let resolver = AliasResolver::resolve(&select).unwrap();
        assert_eq!(resolver.declared(), &["item", "item2"]);
    }

    #[test]
    fn test_join_condition_cannot_see_later_sources() {
        let select = SelectBuilder::new()
            .select(vec![qualified("item", "name")])
            .from(table_ref!("item"), Some("item"))
            .join(
                JoinKind::Inner,
                table_ref!("shop"),
                Some("shop"),
                eq(qualified("item", "shop_id"), qualified("other", "id")),
            )
            .join(
                JoinKind::Inner,
                table_ref!("item"),
                Some("other"),
                eq(qualified("other", "id"), qualified("item", "id")),
            )
            .build();

        assert!(matches!(
            validate(&select),
            Err(QueryError::AliasMismatch { alias, .. }) if alias == "other"
        ));
    }

    #[test]
    fn test_duplicate_alias_is_rejected() {
        let select = SelectBuilder::new()
            .select(vec![qualified("item", "name")])
            .from(table_ref!("item"), Some("item"))
            .join(
                JoinKind::Left,
                table_ref!("shop"),
                Some("item"),
                eq(qualified("item", "shop_id"), qualified("item", "id")),
            )
            .build();

        assert_eq!(
            validate(&select),
            Err(QueryError::DuplicateAlias {
                alias: "item".to_string()
            })
        );
    }

    #[test]
    fn test_missing_from_is_rejected() {
        let select = Select {
            columns: vec![ident("id")],
            ..Default::default()
        };

        assert_eq!(validate(&select), Err(QueryError::MissingFrom));
    }
}
