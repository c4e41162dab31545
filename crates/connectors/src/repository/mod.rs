//! Repositories persisting entities through the SQLite data source.

use crate::{error::DbError, query::factory::QueryFactory, sql::sqlite::adapter::SqliteAdapter};
use model::{
    core::value::Value,
    entity::{Entity, Item, Shop},
};
use planner::{
    query::{
        builder::insert::InsertBuilder,
        renderer::render_sql,
        typed::{EntityPath, EntityQuery},
        value,
    },
    table_ref,
};
use std::marker::PhantomData;
use tracing::{debug, info, warn};

pub type ShopRepository<'a> = EntityRepository<'a, Shop>;
pub type ItemRepository<'a> = EntityRepository<'a, Item>;

pub struct EntityRepository<'a, E> {
    adapter: &'a SqliteAdapter,
    _entity: PhantomData<fn() -> E>,
}

impl<'a, E: Entity> EntityRepository<'a, E> {
    pub fn new(adapter: &'a SqliteAdapter) -> Self {
        Self {
            adapter,
            _entity: PhantomData,
        }
    }

    /// Persists `entity` and returns it with its id.
    ///
    /// An entity without an id is inserted and receives the id the store
    /// assigns; one with an id overwrites the stored row with that id.
    pub fn save(&self, entity: E) -> Result<E, DbError> {
        let saved = self.write(entity)?;
        debug!(table = E::TABLE, id = saved.id(), "Saved entity");
        Ok(saved)
    }

    /// Persists every entity in one transaction: either all are saved or
    /// none is.
    pub fn save_all(&self, entities: Vec<E>) -> Result<Vec<E>, DbError> {
        let tx = self.adapter.begin()?;
        let saved = match entities
            .into_iter()
            .map(|entity| self.write(entity))
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(saved) => saved,
            Err(err) => {
                warn!(table = E::TABLE, error = %err, "Batch failed, rolling back");
                tx.rollback()?;
                return Err(err);
            }
        };
        tx.commit()?;

        info!(table = E::TABLE, count = saved.len(), "Saved entities");
        Ok(saved)
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<E>, DbError> {
        let path = EntityPath::<E>::new(E::TABLE);
        let query = EntityQuery::select_from(&path)
            .where_clause(path.field::<i64>(E::PRIMARY_KEY).eq(id));
        QueryFactory::new(self.adapter).fetch_one(query)
    }

    /// Like [`find_by_id`](Self::find_by_id), but a missing row is an error.
    pub fn get(&self, id: i64) -> Result<E, DbError> {
        self.find_by_id(id)?.ok_or(DbError::NotFound {
            entity: E::TABLE,
            id,
        })
    }

    pub fn find_all(&self) -> Result<Vec<E>, DbError> {
        let path = EntityPath::<E>::new(E::TABLE);
        let query =
            EntityQuery::select_from(&path).order_by(path.field::<i64>(E::PRIMARY_KEY).asc());
        QueryFactory::new(self.adapter).fetch(query)
    }

    pub fn count(&self) -> Result<i64, DbError> {
        let path = EntityPath::<E>::new(E::TABLE);
        QueryFactory::new(self.adapter).fetch_count(EntityQuery::select_from(&path))
    }

    fn write(&self, entity: E) -> Result<E, DbError> {
        let id = entity.id();
        let row = entity.to_row();

        let (columns, values): (Vec<&str>, Vec<Value>) = E::COLUMNS
            .iter()
            .filter(|column| id.is_some() || column.name != E::PRIMARY_KEY)
            .map(|column| (column.name, row.get_value(column.name)))
            .unzip();

        let mut builder = InsertBuilder::new(table_ref!(E::TABLE))
            .columns(&columns)
            .values(values.into_iter().map(value).collect());
        if id.is_some() {
            builder = builder.upsert_on(&[E::PRIMARY_KEY]);
        }

        let (sql, params) = render_sql(&builder.build(), self.adapter.dialect());
        self.adapter.exec_params(&sql, &params)?;

        Ok(match id {
            Some(_) => entity,
            None => entity.with_id(self.adapter.last_insert_id()),
        })
    }
}
