//! Query types for the persisted entities.
//!
//! Each query type bundles an [`EntityPath`] with one typed [`Path`] per
//! column. `QItem::new("item2")` creates an ad hoc alias local to the caller;
//! `QItem::item()` returns the canonical alias shared by the whole process.

use crate::query::typed::path::{EntityPath, EntitySource, Path};
use lazy_static::lazy_static;
use model::entity::{Item, Shop};

lazy_static! {
    static ref SHOP: QShop = QShop::new("shop");
    static ref ITEM: QItem = QItem::new("item");
}

#[derive(Debug, Clone)]
pub struct QShop {
    entity: EntityPath<Shop>,
    pub id: Path<Shop, i64>,
    pub name: Path<Shop, String>,
    pub description: Path<Shop, String>,
}

impl QShop {
    pub fn new(alias: &str) -> Self {
        let entity = EntityPath::new(alias);
        Self {
            id: entity.field("id"),
            name: entity.field("name"),
            description: entity.field("description"),
            entity,
        }
    }

    /// The canonical `shop` alias.
    pub fn shop() -> &'static QShop {
        &SHOP
    }

    pub fn alias(&self) -> &str {
        self.entity.alias()
    }
}

impl EntitySource<Shop> for QShop {
    fn entity_path(&self) -> &EntityPath<Shop> {
        &self.entity
    }
}

#[derive(Debug, Clone)]
pub struct QItem {
    entity: EntityPath<Item>,
    pub id: Path<Item, i64>,
    pub shop_id: Path<Item, i64>,
    pub name: Path<Item, String>,
    pub price: Path<Item, i64>,
    pub stock: Path<Item, i64>,
}

impl QItem {
    pub fn new(alias: &str) -> Self {
        let entity = EntityPath::new(alias);
        Self {
            id: entity.field("id"),
            shop_id: entity.field("shop_id"),
            name: entity.field("name"),
            price: entity.field("price"),
            stock: entity.field("stock"),
            entity,
        }
    }

    /// The canonical `item` alias.
    pub fn item() -> &'static QItem {
        &ITEM
    }

    pub fn alias(&self) -> &str {
        self.entity.alias()
    }
}

impl EntitySource<Item> for QItem {
    fn entity_path(&self) -> &EntityPath<Item> {
        &self.entity
    }
}

#[cfg(test)]
mod tests {
    use super::{QItem, QShop};
    use crate::query::typed::path::EntitySource;
    use std::ptr;

    #[test]
    fn test_canonical_alias_is_a_singleton() {
        let first = QItem::item();
        let second = QItem::item();

        assert!(ptr::eq(first, second));
        assert_eq!(first.alias(), "item");
        assert_eq!(QShop::shop().alias(), "shop");
    }

    #[test]
    fn test_ad_hoc_alias_equals_canonical_by_name() {
        let local = QItem::new("item");
        assert_eq!(local.entity_path(), QItem::item().entity_path());
        assert_eq!(local.name.alias(), QItem::item().name.alias());
    }

    #[test]
    fn test_every_field_shares_the_entity_alias() {
        let item2 = QItem::new("item2");
        for alias in [
            item2.id.alias(),
            item2.shop_id.alias(),
            item2.name.alias(),
            item2.price.alias(),
            item2.stock.alias(),
        ] {
            assert_eq!(alias, "item2");
        }
    }
}
