use model::core::value::Value;
use rusqlite::{
    ToSql,
    types::{ToSqlOutput, Value as SqliteValue, ValueRef},
};

/// Binds a model [`Value`] as a SQLite parameter without copying text.
pub struct SqliteParam<'a>(pub &'a Value);

impl ToSql for SqliteParam<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self.0 {
            Value::Int(i) => ToSqlOutput::Owned(SqliteValue::Integer(*i)),
            Value::Float(f) => ToSqlOutput::Owned(SqliteValue::Real(*f)),
            Value::String(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Boolean(b) => ToSqlOutput::Owned(SqliteValue::Integer(i64::from(*b))),
            Value::Null => ToSqlOutput::Owned(SqliteValue::Null),
        })
    }
}

pub fn to_params(values: &[Value]) -> Vec<SqliteParam<'_>> {
    values.iter().map(SqliteParam).collect()
}
