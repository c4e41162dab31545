use crate::{
    error::DbError,
    query::factory::QueryFactory,
    repository::{ItemRepository, ShopRepository},
    sql::sqlite::adapter::SqliteAdapter,
};
use model::entity::{Item, Shop};
use planner::query::typed::{EntityQuery, QItem};
use tracing::info;

/// Persisted rows of the demo data set.
#[derive(Debug, Clone)]
pub struct DemoData {
    pub shops: Vec<Shop>,
    pub items: Vec<Item>,
}

/// Seeds two shops and six items: `itemA`/`itemB` in `shopA`,
/// `itemC`/`itemD` in `shopB`, `itemE` without a shop and one unnamed item.
pub fn seed_demo_data(adapter: &SqliteAdapter) -> Result<DemoData, DbError> {
    let shops = ShopRepository::new(adapter).save_all(vec![
        Shop::builder().name("shopA").description("shop A description").build(),
        Shop::builder().name("shopB").description("shop B description").build(),
    ])?;
    let (shop_a, shop_b) = (&shops[0], &shops[1]);

    let items = ItemRepository::new(adapter).save_all(vec![
        Item::builder().shop(shop_a).name("itemA").price(5000).stock(20).build(),
        Item::builder().shop(shop_a).name("itemB").price(6000).stock(30).build(),
        Item::builder().shop(shop_b).name("itemC").price(8000).stock(40).build(),
        Item::builder().shop(shop_b).name("itemD").price(10000).stock(50).build(),
        Item::builder().name("itemE").price(11000).stock(10).build(),
        Item::builder().price(10500).stock(25).build(),
    ])?;

    info!(shops = shops.len(), items = items.len(), "Seeded demo data");
    Ok(DemoData { shops, items })
}

/// Facade combining the item repository with typed queries.
pub struct QueryDslRepo<'a> {
    items: ItemRepository<'a>,
    factory: QueryFactory<'a>,
}

impl<'a> QueryDslRepo<'a> {
    pub fn new(adapter: &'a SqliteAdapter) -> Self {
        Self {
            items: ItemRepository::new(adapter),
            factory: QueryFactory::new(adapter),
        }
    }

    /// Saves a `new item` and reads it back through an ad hoc `item` alias.
    pub fn hello_querydsl(&self) -> Result<Vec<Item>, DbError> {
        self.items
            .save(Item::builder().name("new item").price(1000).stock(1000).build())?;

        let q_item = QItem::new("item");
        let found: Vec<Item> = self
            .factory
            .fetch(EntityQuery::select_from(&q_item).where_clause(q_item.name.eq("new item")))?;

        for item in &found {
            info!(
                "{}: {} ({})",
                item.name.as_deref().unwrap_or_default(),
                item.price,
                item.stock
            );
        }
        Ok(found)
    }
}
