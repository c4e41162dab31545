use crate::{
    core::{data_type::DataType, value::FieldValue},
    entity::{ColumnSchema, Entity, Shop},
    error::ModelError,
    records::row::RowData,
};
use serde::{Deserialize, Serialize};

/// A stocked product, optionally sold by a [`Shop`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Option<i64>,
    pub shop_id: Option<i64>,
    pub name: Option<String>,
    pub price: i64,
    pub stock: i64,
}

impl Item {
    pub fn builder() -> ItemBuilder {
        ItemBuilder::default()
    }
}

impl Entity for Item {
    const TABLE: &'static str = "item";
    const COLUMNS: &'static [ColumnSchema] = &[
        ColumnSchema::new("id", DataType::LongLong).primary_key(),
        ColumnSchema::new("shop_id", DataType::LongLong)
            .nullable()
            .references("shop", "id"),
        ColumnSchema::new("name", DataType::VarChar)
            .nullable()
            .max_length(255),
        ColumnSchema::new("price", DataType::Int),
        ColumnSchema::new("stock", DataType::Int),
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
                FieldValue::new("shop_id", Some(self.shop_id.into()), DataType::LongLong),
                FieldValue::new("name", Some(self.name.clone().into()), DataType::VarChar),
                FieldValue::new("price", Some(self.price.into()), DataType::Int),
                FieldValue::new("stock", Some(self.stock.into()), DataType::Int),
            ],
        )
    }

    fn from_row(row: &RowData) -> Result<Self, ModelError> {
        Ok(Item {
            id: row.opt_i64("id")?,
            shop_id: row.opt_i64("shop_id")?,
            name: row.opt_string("name")?,
            price: row.i64("price")?,
            stock: row.i64("stock")?,
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct ItemBuilder {
    shop_id: Option<i64>,
    name: Option<String>,
    price: i64,
    stock: i64,
}

impl ItemBuilder {
    /// Links the item to a shop. The shop must already be persisted for the
    /// link to carry an id.
    pub fn shop(mut self, shop: &Shop) -> Self {
        self.shop_id = shop.id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    pub fn build(self) -> Item {
        Item {
            id: None,
            shop_id: self.shop_id,
            name: self.name,
            price: self.price,
            stock: self.stock,
        }
    }
}
