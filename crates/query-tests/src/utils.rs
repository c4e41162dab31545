#![allow(dead_code)]

use model::entity::Item;

/// Names of `items` in order; unnamed items show up as `None`.
pub fn item_names(items: &[Item]) -> Vec<Option<&str>> {
    items.iter().map(|item| item.name.as_deref()).collect()
}

pub fn assert_single_item(items: &[Item], name: &str) {
    assert_eq!(items.len(), 1, "expected exactly one item, got {items:?}");
    assert_eq!(items[0].name.as_deref(), Some(name));
}
