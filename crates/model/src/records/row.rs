use crate::{
    core::{
        data_type::DataType,
        value::{FieldValue, Value},
    },
    error::ModelError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowData {
    pub entity: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(entity: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            entity: entity.to_string(),
            field_values,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .and_then(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }

    /// Reads a nullable integer column.
    pub fn opt_i64(&self, field: &str) -> Result<Option<i64>, ModelError> {
        match self.require(field)?.value.as_ref() {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_i64().map(Some).ok_or_else(|| ModelError::TypeMismatch {
                field: field.to_string(),
                expected: DataType::LongLong,
                found: value.data_type(),
            }),
        }
    }

    pub fn i64(&self, field: &str) -> Result<i64, ModelError> {
        self.opt_i64(field)?.ok_or_else(|| ModelError::UnexpectedNull {
            field: field.to_string(),
        })
    }

    /// Reads a nullable text column.
    pub fn opt_string(&self, field: &str) -> Result<Option<String>, ModelError> {
        match self.require(field)?.value.as_ref() {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(ModelError::TypeMismatch {
                field: field.to_string(),
                expected: DataType::String,
                found: other.data_type(),
            }),
        }
    }

    pub fn string(&self, field: &str) -> Result<String, ModelError> {
        self.opt_string(field)?
            .ok_or_else(|| ModelError::UnexpectedNull {
                field: field.to_string(),
            })
    }

    fn require(&self, field: &str) -> Result<&FieldValue, ModelError> {
        self.get(field).ok_or_else(|| ModelError::MissingField {
            entity: self.entity.clone(),
            field: field.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RowData;
    use crate::{
        core::{
            data_type::DataType,
            value::{FieldValue, Value},
        },
        error::ModelError,
    };

    fn row() -> RowData {
        RowData::new(
            "item",
            vec![
                FieldValue::new("id", Some(Value::Int(1)), DataType::LongLong),
                FieldValue::new("name", Some(Value::Null), DataType::String),
                FieldValue::new("price", Some(Value::Int(5000)), DataType::LongLong),
            ],
        )
    }

    #[test]
    fn test_typed_getters() {
        let row = row();
        assert_eq!(row.i64("price"), Ok(5000));
        assert_eq!(row.opt_string("name"), Ok(None));
        assert_eq!(row.get_value("ID"), Value::Int(1));
    }

    #[test]
    fn test_missing_and_null_fields() {
        let row = row();
        assert!(matches!(
            row.i64("stock"),
            Err(ModelError::MissingField { .. })
        ));
        assert!(matches!(
            row.string("name"),
            Err(ModelError::UnexpectedNull { .. })
        ));
        assert!(matches!(
            row.opt_string("price"),
            Err(ModelError::TypeMismatch { .. })
        ));
    }
}
