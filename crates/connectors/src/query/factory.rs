//! Evaluates typed query expressions against the store.
//!
//! Every evaluation resolves the query's aliases first; a query that
//! references an alias it does not declare never reaches SQLite and fails
//! with [`DbError::Query`].

use crate::{error::DbError, sql::sqlite::adapter::SqliteAdapter};
use model::{core::value::Value, entity::Entity};
use planner::query::typed::QueryExpression;
use tracing::{debug, warn};

pub struct QueryFactory<'a> {
    adapter: &'a SqliteAdapter,
}

impl<'a> QueryFactory<'a> {
    pub fn new(adapter: &'a SqliteAdapter) -> Self {
        Self { adapter }
    }

    /// Returns every matching entity.
    pub fn fetch<E: Entity>(&self, query: impl Into<QueryExpression<E>>) -> Result<Vec<E>, DbError> {
        let (sql, params) = self.render(&query.into(), false)?;
        self.load(&sql, &params)
    }

    /// Returns the single matching entity, `None` when nothing matches.
    pub fn fetch_one<E: Entity>(
        &self,
        query: impl Into<QueryExpression<E>>,
    ) -> Result<Option<E>, DbError> {
        // Two rows are enough to tell "one" from "many".
        let query = query.into().limited(2);
        let (sql, params) = self.render(&query, false)?;
        let mut rows = self.load(&sql, &params)?;
        match rows.len() {
            0 | 1 => Ok(rows.pop()),
            n => Err(DbError::NonUniqueResult(n)),
        }
    }

    /// Returns the first matching entity in query order.
    pub fn fetch_first<E: Entity>(
        &self,
        query: impl Into<QueryExpression<E>>,
    ) -> Result<Option<E>, DbError> {
        let query = query.into().limited(1);
        let (sql, params) = self.render(&query, false)?;
        Ok(self.load(&sql, &params)?.into_iter().next())
    }

    pub fn fetch_count<E: Entity>(
        &self,
        query: impl Into<QueryExpression<E>>,
    ) -> Result<i64, DbError> {
        let (sql, params) = self.render(&query.into(), true)?;
        self.adapter.query_scalar_i64(&sql, &params)
    }

    fn render<E: Entity>(
        &self,
        query: &QueryExpression<E>,
        count: bool,
    ) -> Result<(String, Vec<Value>), DbError> {
        let dialect = self.adapter.dialect();
        let rendered = if count {
            query.render_count(dialect)
        } else {
            query.render(dialect)
        };

        match rendered {
            Ok((sql, params)) => {
                debug!(entity = E::TABLE, %sql, "Rendered query");
                Ok((sql, params))
            }
            Err(err) => {
                warn!(entity = E::TABLE, error = %err, "Rejected query");
                Err(err.into())
            }
        }
    }

    fn load<E: Entity>(&self, sql: &str, params: &[Value]) -> Result<Vec<E>, DbError> {
        let rows = self.adapter.query_rows(sql, params, E::TABLE)?;
        let entities = rows
            .iter()
            .map(E::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entities)
    }
}
