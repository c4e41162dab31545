use crate::query::{
    ast::{
        common::OrderDir,
        expr::{BinaryOp, BinaryOperator, Expr},
    },
    qualified,
};
use model::{core::value::Value, entity::Entity};
use std::{fmt, marker::PhantomData, sync::Arc};

/// One occurrence of entity `E` in a query, named by `alias`.
pub struct EntityPath<E> {
    alias: Arc<str>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityPath<E> {
    pub fn new(alias: &str) -> Self {
        Self {
            alias: Arc::from(alias),
            _entity: PhantomData,
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn table(&self) -> &'static str {
        E::TABLE
    }

    /// Binds `column` to this alias. Nothing is checked until the query that
    /// uses the path is evaluated.
    pub fn field<T>(&self, column: &'static str) -> Path<E, T> {
        Path {
            alias: Arc::clone(&self.alias),
            column,
            _marker: PhantomData,
        }
    }

    /// Every column of the entity, qualified by this alias.
    pub fn projection(&self) -> Vec<Expr> {
        E::COLUMNS
            .iter()
            .map(|col| qualified(&self.alias, col.name))
            .collect()
    }
}

impl<E> Clone for EntityPath<E> {
    fn clone(&self) -> Self {
        Self {
            alias: Arc::clone(&self.alias),
            _entity: PhantomData,
        }
    }
}

impl<E> PartialEq for EntityPath<E> {
    fn eq(&self, other: &Self) -> bool {
        self.alias == other.alias
    }
}

impl<E> Eq for EntityPath<E> {}

impl<E: Entity> fmt::Debug for EntityPath<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityPath")
            .field("entity", &E::TABLE)
            .field("alias", &self.alias)
            .finish()
    }
}

/// Anything that can act as a query source or projection for entity `E`.
pub trait EntitySource<E: Entity> {
    fn entity_path(&self) -> &EntityPath<E>;
}

impl<E: Entity> EntitySource<E> for EntityPath<E> {
    fn entity_path(&self) -> &EntityPath<E> {
        self
    }
}

/// A typed attribute of entity `E`, scoped to exactly one alias.
pub struct Path<E, T> {
    alias: Arc<str>,
    column: &'static str,
    _marker: PhantomData<fn() -> (E, T)>,
}

impl<E, T> Path<E, T> {
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn column(&self) -> &'static str {
        self.column
    }

    pub fn expr(&self) -> Expr {
        qualified(&self.alias, self.column)
    }

    fn compare(&self, op: BinaryOperator, right: Expr) -> Predicate {
        Predicate(Expr::BinaryOp(Box::new(BinaryOp {
            left: self.expr(),
            op,
            right,
        })))
    }

    pub fn is_null(&self) -> Predicate {
        Predicate(Expr::IsNull {
            expr: Box::new(self.expr()),
            negated: false,
        })
    }

    pub fn is_not_null(&self) -> Predicate {
        Predicate(Expr::IsNull {
            expr: Box::new(self.expr()),
            negated: true,
        })
    }

    /// Compares two paths of the same attribute type, possibly bound to
    /// different aliases (join conditions, self-joins).
    pub fn eq_field<F>(&self, other: &Path<F, T>) -> Predicate {
        self.compare(BinaryOperator::Eq, other.expr())
    }

    pub fn asc(&self) -> OrderSpecifier {
        OrderSpecifier {
            expr: self.expr(),
            direction: OrderDir::Asc,
        }
    }

    pub fn desc(&self) -> OrderSpecifier {
        OrderSpecifier {
            expr: self.expr(),
            direction: OrderDir::Desc,
        }
    }
}

impl<E, T: Into<Value>> Path<E, T> {
    fn bind(value: impl Into<T>) -> Expr {
        let value: T = value.into();
        Expr::Value(value.into())
    }

    pub fn eq(&self, value: impl Into<T>) -> Predicate {
        self.compare(BinaryOperator::Eq, Self::bind(value))
    }

    pub fn ne(&self, value: impl Into<T>) -> Predicate {
        self.compare(BinaryOperator::NotEq, Self::bind(value))
    }

    pub fn lt(&self, value: impl Into<T>) -> Predicate {
        self.compare(BinaryOperator::Lt, Self::bind(value))
    }

    pub fn loe(&self, value: impl Into<T>) -> Predicate {
        self.compare(BinaryOperator::LtEq, Self::bind(value))
    }

    pub fn gt(&self, value: impl Into<T>) -> Predicate {
        self.compare(BinaryOperator::Gt, Self::bind(value))
    }

    pub fn goe(&self, value: impl Into<T>) -> Predicate {
        self.compare(BinaryOperator::GtEq, Self::bind(value))
    }
}

impl<E, T> Clone for Path<E, T> {
    fn clone(&self) -> Self {
        Self {
            alias: Arc::clone(&self.alias),
            column: self.column,
            _marker: PhantomData,
        }
    }
}

impl<E, T> fmt::Debug for Path<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.alias, self.column)
    }
}

/// A boolean condition over one or more paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate(Expr);

impl Predicate {
    pub fn and(self, other: Predicate) -> Predicate {
        Predicate(self.0.and(other.0))
    }

    pub fn or(self, other: Predicate) -> Predicate {
        Predicate(self.0.or(other.0))
    }

    pub fn expr(&self) -> &Expr {
        &self.0
    }

    pub fn into_expr(self) -> Expr {
        self.0
    }
}

impl From<Predicate> for Expr {
    fn from(predicate: Predicate) -> Self {
        predicate.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSpecifier {
    pub expr: Expr,
    pub direction: OrderDir,
}

#[cfg(test)]
mod tests {
    use super::EntityPath;
    use crate::query::{
        ast::expr::{BinaryOperator, Expr},
        qualified,
    };
    use model::{core::value::Value, entity::Item};

    #[test]
    fn test_field_carries_alias() {
        let item2 = EntityPath::<Item>::new("item2");
        let name = item2.field::<String>("name");

        assert_eq!(name.alias(), "item2");
        assert_eq!(name.expr(), qualified("item2", "name"));
    }

    #[test]
    fn test_eq_builds_parameterized_comparison() {
        let item = EntityPath::<Item>::new("item");
        let predicate = item.field::<i64>("price").goe(5000);

        match predicate.into_expr() {
            Expr::BinaryOp(op) => {
                assert_eq!(op.op, BinaryOperator::GtEq);
                assert_eq!(op.left, qualified("item", "price"));
                assert_eq!(op.right, Expr::Value(Value::Int(5000)));
            }
            other => panic!("unexpected expression: {other:?}"),
        }
    }

    #[test]
    fn test_paths_with_different_aliases_differ() {
        let item = EntityPath::<Item>::new("item");
        let item2 = EntityPath::<Item>::new("item2");

        assert_ne!(item, item2);
        assert_eq!(item, EntityPath::<Item>::new("item"));
        assert_ne!(
            item.field::<String>("name").eq("itemA"),
            item2.field::<String>("name").eq("itemA")
        );
    }

    #[test]
    fn test_projection_lists_every_column() {
        let item = EntityPath::<Item>::new("i");
        assert_eq!(
            item.projection(),
            vec![
                qualified("i", "id"),
                qualified("i", "shop_id"),
                qualified("i", "name"),
                qualified("i", "price"),
                qualified("i", "stock"),
            ]
        );
    }
}
