use crate::error::DbError;
use tracing::debug;

/// A unit of work on a [`SqliteAdapter`](super::adapter::SqliteAdapter).
///
/// Dropping it without calling [`commit`](Transaction::commit) rolls back.
pub struct Transaction<'a> {
    inner: rusqlite::Transaction<'a>,
}

impl<'a> Transaction<'a> {
    pub(crate) fn new(inner: rusqlite::Transaction<'a>) -> Self {
        debug!("BEGIN");
        Self { inner }
    }

    pub fn commit(self) -> Result<(), DbError> {
        self.inner.commit()?;
        debug!("COMMIT");
        Ok(())
    }

    pub fn rollback(self) -> Result<(), DbError> {
        self.inner.rollback()?;
        debug!("ROLLBACK");
        Ok(())
    }
}
