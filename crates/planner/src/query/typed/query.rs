//! Fluent `select / from / where` construction over typed paths.
//!
//! Construction never validates aliases. A finished [`QueryExpression`] is
//! resolved against its declared sources when it is rendered, so a query that
//! mixes an undeclared alias into its clauses fails at evaluation time with
//! [`QueryError::AliasMismatch`].

use crate::{
    error::QueryError,
    query::{
        ast::{common::JoinKind, select::Select},
        builder::select::{FromState, SelectBuilder, SelectState},
        count_all,
        dialect::Dialect,
        renderer::render_sql,
        typed::path::{EntitySource, OrderSpecifier, Predicate},
        validation::alias,
    },
    table_ref,
};
use model::{core::value::Value, entity::Entity};
use std::marker::PhantomData;

/// A query under construction whose rows map onto entity `E`.
#[derive(Debug, Clone)]
pub struct EntityQuery<E, State> {
    builder: SelectBuilder<State>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityQuery<E, SelectState> {
    /// Starts a query projecting every column of `projection`.
    pub fn select(projection: &impl EntitySource<E>) -> Self {
        Self {
            builder: SelectBuilder::new().select(projection.entity_path().projection()),
            _entity: PhantomData,
        }
    }

    /// Declares the FROM source. It need not be the projected entity when
    /// the projection is reached through a join.
    pub fn from<F: Entity>(self, source: &impl EntitySource<F>) -> EntityQuery<E, FromState> {
        let source = source.entity_path();
        EntityQuery {
            builder: self
                .builder
                .from(table_ref!(source.table()), Some(source.alias())),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> EntityQuery<E, FromState> {
    /// Shorthand for `select(source).from(source)`.
    pub fn select_from(source: &impl EntitySource<E>) -> Self {
        EntityQuery::select(source).from(source)
    }

    /// Declares an additional source joined on `on`. Its alias becomes
    /// available to every clause of the query.
    pub fn inner_join<J: Entity>(self, target: &impl EntitySource<J>, on: Predicate) -> Self {
        self.join(JoinKind::Inner, target, on)
    }

    pub fn left_join<J: Entity>(self, target: &impl EntitySource<J>, on: Predicate) -> Self {
        self.join(JoinKind::Left, target, on)
    }

    fn join<J: Entity>(
        self,
        kind: JoinKind,
        target: &impl EntitySource<J>,
        on: Predicate,
    ) -> Self {
        let target = target.entity_path();
        Self {
            builder: self.builder.join(
                kind,
                table_ref!(target.table()),
                Some(target.alias()),
                on.into_expr(),
            ),
            _entity: PhantomData,
        }
    }

    /// Adds a predicate. Repeated calls are combined with `AND`.
    pub fn where_clause(self, predicate: Predicate) -> Self {
        Self {
            builder: self.builder.where_clause(predicate.into_expr()),
            _entity: PhantomData,
        }
    }

    pub fn order_by(self, order: OrderSpecifier) -> Self {
        Self {
            builder: self.builder.order_by(order.expr, order.direction),
            _entity: PhantomData,
        }
    }

    pub fn limit(self, limit: u32) -> Self {
        Self {
            builder: self.builder.limit(limit),
            _entity: PhantomData,
        }
    }

    pub fn offset(self, offset: u32) -> Self {
        Self {
            builder: self.builder.offset(offset),
            _entity: PhantomData,
        }
    }

    pub fn build(self) -> QueryExpression<E> {
        QueryExpression {
            select: self.builder.build(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> From<EntityQuery<E, FromState>> for QueryExpression<E> {
    fn from(query: EntityQuery<E, FromState>) -> Self {
        query.build()
    }
}

/// A finished query. It is evaluated once and then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryExpression<E> {
    select: Select,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> QueryExpression<E> {
    pub fn ast(&self) -> &Select {
        &self.select
    }

    /// Resolves every referenced alias against the query's declared sources.
    pub fn validate(&self) -> Result<(), QueryError> {
        alias::validate(&self.select)
    }

    /// Restricts the query to at most `limit` rows. A tighter limit already
    /// set on the query is kept.
    pub fn limited(mut self, limit: u32) -> Self {
        self.select.limit = Some(self.select.limit.map_or(limit, |own| own.min(limit)));
        self
    }

    /// Validates and renders the query for `dialect`.
    pub fn render(&self, dialect: &dyn Dialect) -> Result<(String, Vec<Value>), QueryError> {
        self.validate()?;
        Ok(render_sql(&self.select, dialect))
    }

    /// Validates the query, then renders a `COUNT(*)` over the same sources
    /// and predicates.
    pub fn render_count(&self, dialect: &dyn Dialect) -> Result<(String, Vec<Value>), QueryError> {
        self.validate()?;
        let count = Select {
            columns: vec![count_all()],
            from: self.select.from.clone(),
            joins: self.select.joins.clone(),
            where_clause: self.select.where_clause.clone(),
            ..Default::default()
        };
        Ok(render_sql(&count, dialect))
    }
}

#[cfg(test)]
mod tests {
    use super::EntityQuery;
    use crate::{
        error::QueryError,
        query::{
            dialect::Sqlite,
            typed::qtypes::{QItem, QShop},
        },
    };
    use model::core::value::Value;

    #[test]
    fn test_select_from_renders_aliased_query() {
        let q_item = QItem::new("item");
        let query = EntityQuery::select(&q_item)
            .from(&q_item)
            .where_clause(q_item.name.eq("itemA"))
            .build();

        let (sql, params) = query.render(&Sqlite).unwrap();
        assert_eq!(
            sql,
            concat!(
                r#"SELECT "item"."id", "item"."shop_id", "item"."name", "item"."price", "item"."stock" "#,
                r#"FROM "item" AS "item" WHERE ("item"."name" = ?1)"#
            )
        );
        assert_eq!(params, vec![Value::String("itemA".to_string())]);
    }

    #[test]
    fn test_select_from_equals_select_then_from() {
        let q_item = QItem::new("item");
        let long = EntityQuery::select(&q_item)
            .from(&q_item)
            .where_clause(q_item.name.eq("itemB"))
            .build();
        let short = EntityQuery::select_from(&q_item)
            .where_clause(q_item.name.eq("itemB"))
            .build();

        assert_eq!(long, short);
    }

    #[test]
    fn test_construction_defers_alias_check_to_evaluation() {
        let q_item = QItem::new("item");
        let q_item2 = QItem::new("item2");

        // Building succeeds; only rendering resolves the aliases.
        let query = EntityQuery::select_from(&q_item)
            .where_clause(q_item2.name.eq("itemD"))
            .build();

        assert_eq!(
            query.render(&Sqlite),
            Err(QueryError::AliasMismatch {
                alias: "item2".to_string(),
                declared: vec!["item".to_string()],
            })
        );
    }

    #[test]
    fn test_canonical_alias_matches_ad_hoc_alias() {
        let ad_hoc = QItem::new("item");
        let canonical = QItem::item();

        let a = EntityQuery::select_from(&ad_hoc)
            .where_clause(ad_hoc.name.eq("itemB"))
            .build();
        let b = EntityQuery::select_from(canonical)
            .where_clause(canonical.name.eq("itemB"))
            .build();

        assert_eq!(a.render(&Sqlite), b.render(&Sqlite));
    }

    #[test]
    fn test_join_declares_second_source() {
        let q_item = QItem::item();
        let q_shop = QShop::shop();

        let query = EntityQuery::select_from(q_item)
            .inner_join(q_shop, q_item.shop_id.eq_field(&q_shop.id))
            .where_clause(q_shop.name.eq("shopA"))
            .order_by(q_item.price.desc())
            .build();

        let (sql, params) = query.render(&Sqlite).unwrap();
        assert!(sql.contains(r#"INNER JOIN "shop" AS "shop" ON ("item"."shop_id" = "shop"."id")"#));
        assert!(sql.ends_with(r#"WHERE ("shop"."name" = ?1) ORDER BY "item"."price" DESC"#));
        assert_eq!(params, vec![Value::String("shopA".to_string())]);
    }

    #[test]
    fn test_render_count_and_limit() {
        let q_item = QItem::item();
        let query = EntityQuery::select_from(q_item)
            .where_clause(q_item.price.goe(6000).and(q_item.name.is_not_null()))
            .order_by(q_item.price.asc())
            .build();

        let (sql, params) = query.render_count(&Sqlite).unwrap();
        assert_eq!(
            sql,
            r#"SELECT COUNT(*) FROM "item" AS "item" WHERE (("item"."price" >= ?1) AND ("item"."name" IS NOT NULL))"#
        );
        assert_eq!(params, vec![Value::Int(6000)]);

        let (sql, params) = query.limited(1).render(&Sqlite).unwrap();
        assert!(sql.ends_with(r#"ORDER BY "item"."price" ASC LIMIT ?2"#));
        assert_eq!(params, vec![Value::Int(6000), Value::Int(1)]);
    }

    #[test]
    fn test_limited_keeps_tighter_limit() {
        let q_item = QItem::item();

        let query = EntityQuery::select_from(q_item).limit(0).build().limited(1);
        let (_, params) = query.render(&Sqlite).unwrap();
        assert_eq!(params, vec![Value::Int(0)]);

        let query = EntityQuery::select_from(q_item).limit(5).build().limited(2);
        let (_, params) = query.render(&Sqlite).unwrap();
        assert_eq!(params, vec![Value::Int(2)]);
    }
}
