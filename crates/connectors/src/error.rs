use model::error::ModelError;
use planner::error::QueryError;
use thiserror::Error;

/// All errors coming from the data source and query layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Any SQL driver error.
    #[error("SQL error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// The query was rejected before reaching the store, e.g. because it
    /// references an alias it does not declare.
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// A fetched row could not be mapped onto its entity.
    #[error("Row mapping error: {0}")]
    Model(#[from] ModelError),

    /// `fetch_one` matched more than one row.
    #[error("Query returned {0} rows where at most one was expected")]
    NonUniqueResult(usize),

    /// A lookup by primary key found nothing.
    #[error("No {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// The data source URL is not one this connector understands.
    #[error("Invalid data source URL: {0}")]
    InvalidUrl(String),
}

impl DbError {
    pub fn is_alias_mismatch(&self) -> bool {
        matches!(self, DbError::Query(QueryError::AliasMismatch { .. }))
    }
}
