#![allow(dead_code)]

use connectors::{
    query::demo::{DemoData, seed_demo_data},
    sql::sqlite::adapter::SqliteAdapter,
};

pub mod utils;

/// Opens an empty in-memory store with the entity schema in place.
pub fn store() -> SqliteAdapter {
    SqliteAdapter::open_in_memory().expect("open in-memory store")
}

/// A store holding the two shops and six items of the demo data set.
pub fn seeded_store() -> (SqliteAdapter, DemoData) {
    let adapter = store();
    let data = seed_demo_data(&adapter).expect("seed demo data");
    (adapter, data)
}
