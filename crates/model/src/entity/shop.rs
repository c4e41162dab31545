use crate::{
    core::{
        data_type::DataType,
        value::{FieldValue, Value},
    },
    entity::{ColumnSchema, Entity},
    error::ModelError,
    records::row::RowData,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
}

impl Shop {
    pub fn builder() -> ShopBuilder {
        ShopBuilder::default()
    }
}

impl Entity for Shop {
    const TABLE: &'static str = "shop";
    const COLUMNS: &'static [ColumnSchema] = &[
        ColumnSchema::new("id", DataType::LongLong).primary_key(),
        ColumnSchema::new("name", DataType::VarChar).max_length(255),
        ColumnSchema::new("description", DataType::String).nullable(),
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    fn to_row(&self) -> RowData {
        RowData::new(
            Self::TABLE,
            vec![
                FieldValue::new("id", Some(self.id.into()), DataType::LongLong),
                FieldValue::new(
                    "name",
                    Some(Value::String(self.name.clone())),
                    DataType::VarChar,
                ),
                FieldValue::new(
                    "description",
                    Some(self.description.clone().into()),
                    DataType::String,
                ),
            ],
        )
    }

    fn from_row(row: &RowData) -> Result<Self, ModelError> {
        Ok(Shop {
            id: row.opt_i64("id")?,
            name: row.string("name")?,
            description: row.opt_string("description")?,
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct ShopBuilder {
    name: String,
    description: Option<String>,
}

impl ShopBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> Shop {
        Shop {
            id: None,
            name: self.name,
            description: self.description,
        }
    }
}
