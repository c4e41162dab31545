//! Schema bootstrap for the persisted entities.

use crate::{error::DbError, sql::sqlite::adapter::SqliteAdapter};
use model::entity::{Entity, Item, Shop};
use planner::query::{builder::create_table::CreateTableBuilder, renderer::render_sql};
use tracing::debug;

/// Creates the table of `E` unless it already exists.
pub fn ensure_table<E: Entity>(adapter: &SqliteAdapter) -> Result<(), DbError> {
    let ast = CreateTableBuilder::from_entity::<E>().if_not_exists().build();
    let (sql, _) = render_sql(&ast, adapter.dialect());
    debug!(table = E::TABLE, "Ensuring table");
    adapter.exec(&sql)
}

/// Tables are created in dependency order: `item` references `shop`.
pub fn create_schema(adapter: &SqliteAdapter) -> Result<(), DbError> {
    ensure_table::<Shop>(adapter)?;
    ensure_table::<Item>(adapter)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{create_schema, ensure_table};
    use crate::{config::DataSourceConfig, sql::sqlite::adapter::SqliteAdapter};
    use model::entity::Shop;

    #[test]
    fn test_create_schema_is_idempotent() {
        let adapter = SqliteAdapter::open_in_memory().unwrap();
        create_schema(&adapter).unwrap();
        ensure_table::<Shop>(&adapter).unwrap();
        assert_eq!(adapter.list_tables().unwrap(), vec!["item", "shop"]);
    }

    #[test]
    fn test_file_store_keeps_schema() {
        let dir = tempfile::tempdir().unwrap();
        let config = DataSourceConfig::file(dir.path().join("shop.db"));

        drop(SqliteAdapter::open(&config).unwrap());

        let reopened = SqliteAdapter::open(&DataSourceConfig {
            create_schema: false,
            ..config
        })
        .unwrap();
        assert!(reopened.table_exists("shop").unwrap());
        assert!(reopened.table_exists("item").unwrap());
    }
}
