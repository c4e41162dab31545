use thiserror::Error;

/// Errors raised while resolving a query against its declared sources.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A field reference is bound to an alias that no FROM or JOIN source
    /// of the query declares.
    #[error("alias '{alias}' is not declared by this query (declared: {})", .declared.join(", "))]
    AliasMismatch {
        alias: String,
        declared: Vec<String>,
    },

    /// The same alias names two sources of one query.
    #[error("alias '{alias}' is declared more than once")]
    DuplicateAlias { alias: String },

    #[error("query has no FROM source")]
    MissingFrom,
}
