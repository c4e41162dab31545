use crate::{
    config::{DataSourceConfig, StoreLocation},
    error::DbError,
    sql::sqlite::{params::to_params, row::to_row_data, schema, transaction::Transaction},
};
use model::{core::value::Value, records::row::RowData};
use planner::query::dialect::{self, Dialect};
use rusqlite::{Connection, OptionalExtension, params_from_iter};
use tracing::{debug, info};

const QUERY_TABLE_EXISTS_SQL: &str =
    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1";
const QUERY_LIST_TABLES_SQL: &str = "SELECT name FROM sqlite_master \
     WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name";

/// Embedded SQLite store backing the repositories and the query factory.
pub struct SqliteAdapter {
    conn: Connection,
    dialect: dialect::Sqlite,
}

impl SqliteAdapter {
    pub fn open(config: &DataSourceConfig) -> Result<Self, DbError> {
        let conn = match &config.location {
            StoreLocation::Memory => Connection::open_in_memory()?,
            StoreLocation::File(path) => Connection::open(path)?,
        };
        info!(source = %config, "Opened data source");

        let adapter = SqliteAdapter {
            conn,
            dialect: dialect::Sqlite,
        };

        if config.foreign_keys {
            adapter.exec("PRAGMA foreign_keys = ON;")?;
        }
        if config.create_schema {
            schema::create_schema(&adapter)?;
        }
        Ok(adapter)
    }

    /// An in-memory store with the default configuration.
    pub fn open_in_memory() -> Result<Self, DbError> {
        Self::open(&DataSourceConfig::in_memory())
    }

    pub fn dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    pub fn exec(&self, sql: &str) -> Result<(), DbError> {
        debug!(sql, "Executing batch");
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Executes one statement and returns the number of affected rows.
    pub fn exec_params(&self, sql: &str, params: &[Value]) -> Result<usize, DbError> {
        debug!(sql, params = params.len(), "Executing statement");
        let mut stmt = self.conn.prepare_cached(sql)?;
        let affected = stmt.execute(params_from_iter(to_params(params)))?;
        Ok(affected)
    }

    pub fn query_rows(
        &self,
        sql: &str,
        params: &[Value],
        entity: &str,
    ) -> Result<Vec<RowData>, DbError> {
        debug!(sql, params = params.len(), "Querying rows");
        let mut stmt = self.conn.prepare_cached(sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        let rows = stmt
            .query_map(params_from_iter(to_params(params)), |row| {
                to_row_data(row, &columns, entity)
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Runs a query returning a single integer, e.g. a `COUNT(*)`.
    pub fn query_scalar_i64(&self, sql: &str, params: &[Value]) -> Result<i64, DbError> {
        debug!(sql, params = params.len(), "Querying scalar");
        let mut stmt = self.conn.prepare_cached(sql)?;
        let value = stmt
            .query_row(params_from_iter(to_params(params)), |row| row.get::<_, i64>(0))
            .optional()?;
        Ok(value.unwrap_or_default())
    }

    pub fn last_insert_id(&self) -> i64 {
        self.conn.last_insert_rowid()
    }

    pub fn begin(&self) -> Result<Transaction<'_>, DbError> {
        Ok(Transaction::new(self.conn.unchecked_transaction()?))
    }

    pub fn table_exists(&self, table: &str) -> Result<bool, DbError> {
        let count = self.query_scalar_i64(QUERY_TABLE_EXISTS_SQL, &[Value::from(table)])?;
        Ok(count > 0)
    }

    pub fn list_tables(&self) -> Result<Vec<String>, DbError> {
        let rows = self.query_rows(QUERY_LIST_TABLES_SQL, &[], "sqlite_master")?;
        let tables = rows
            .iter()
            .map(|row| row.string("name"))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tables)
    }
}
