use model::{
    core::value::{FieldValue, Value},
    records::row::RowData,
};
use rusqlite::{Row, types::ValueRef};
use tracing::warn;

/// Converts one SQLite result row into a [`RowData`] for `entity`.
///
/// `columns` must list the statement's column names in result order.
pub fn to_row_data(row: &Row<'_>, columns: &[String], entity: &str) -> rusqlite::Result<RowData> {
    let mut field_values = Vec::with_capacity(columns.len());
    for (idx, name) in columns.iter().enumerate() {
        let value = read_value(row.get_ref(idx)?, name);
        let data_type = value.data_type();
        field_values.push(FieldValue {
            name: name.clone(),
            value: Some(value),
            data_type,
        });
    }
    Ok(RowData::new(entity, field_values))
}

fn read_value(value: ValueRef<'_>, column: &str) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Int(i),
        ValueRef::Real(f) => Value::Float(f),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => {
            warn!(column, len = bytes.len(), "Reading BLOB column as text");
            Value::String(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
