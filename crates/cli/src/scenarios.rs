//! The canned queries run by the `demo` command.

use crate::output::{Outcome, ScenarioReport};
use connectors::{query::factory::QueryFactory, sql::sqlite::adapter::SqliteAdapter};
use model::entity::Item;
use planner::query::typed::{EntityQuery, QItem, QShop};
use tracing::{info, warn};

pub fn run(adapter: &SqliteAdapter) -> Vec<ScenarioReport> {
    let factory = QueryFactory::new(adapter);
    let q_item = QItem::new("item");
    let q_item2 = QItem::new("item2");
    let canonical = QItem::item();
    let q_shop = QShop::shop();

    let reports = vec![
        ScenarioReport {
            name: "matching alias",
            outcome: Outcome::rows(
                factory.fetch(
                    EntityQuery::select(&q_item)
                        .from(&q_item)
                        .where_clause(q_item.name.eq("itemA")),
                ),
            ),
        },
        ScenarioReport {
            name: "undeclared alias",
            outcome: Outcome::rows(
                factory.fetch(
                    EntityQuery::select(&q_item)
                        .from(&q_item)
                        .where_clause(q_item2.name.eq("itemD")),
                ),
            ),
        },
        ScenarioReport {
            name: "canonical alias",
            outcome: Outcome::rows(
                factory.fetch(
                    EntityQuery::select_from(canonical).where_clause(canonical.name.eq("itemB")),
                ),
            ),
        },
        ScenarioReport {
            name: "self join",
            outcome: Outcome::rows(
                factory.fetch(
                    EntityQuery::select_from(&q_item)
                        .inner_join(&q_item2, q_item.shop_id.eq_field(&q_item2.shop_id))
                        .where_clause(q_item2.name.eq("itemD"))
                        .where_clause(q_item.name.ne("itemD")),
                ),
            ),
        },
        ScenarioReport {
            name: "items of shopB",
            outcome: Outcome::rows(
                factory.fetch(
                    EntityQuery::select_from(canonical)
                        .inner_join(q_shop, canonical.shop_id.eq_field(&q_shop.id))
                        .where_clause(q_shop.name.eq("shopB"))
                        .order_by(canonical.price.desc()),
                ),
            ),
        },
        ScenarioReport {
            name: "items without a shop",
            outcome: Outcome::count(factory.fetch_count(
                EntityQuery::select_from(canonical).where_clause(canonical.shop_id.is_null()),
            )),
        },
    ];

    for report in &reports {
        match &report.outcome {
            Outcome::Rows { rows } => {
                info!(scenario = report.name, rows = rows.len(), "Scenario evaluated");
                rows.iter().for_each(log_item);
            }
            Outcome::Count { count } => {
                info!(scenario = report.name, count, "Scenario evaluated");
            }
            Outcome::Rejected { error } => {
                warn!(scenario = report.name, %error, "Scenario rejected");
            }
        }
    }
    reports
}

fn log_item(item: &Item) {
    info!(
        "{}: {} ({})",
        item.name.as_deref().unwrap_or("<unnamed>"),
        item.price,
        item.stock
    );
}
