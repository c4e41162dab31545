use crate::error::CliError;
use connectors::error::DbError;
use model::entity::Item;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SeedSummary {
    pub shops: i64,
    pub items: i64,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Rows { rows: Vec<Item> },
    Count { count: i64 },
    Rejected { error: String },
}

impl Outcome {
    pub fn rows(result: Result<Vec<Item>, DbError>) -> Self {
        match result {
            Ok(rows) => Outcome::Rows { rows },
            Err(err) => Outcome::Rejected {
                error: err.to_string(),
            },
        }
    }

    pub fn count(result: Result<i64, DbError>) -> Self {
        match result {
            Ok(count) => Outcome::Count { count },
            Err(err) => Outcome::Rejected {
                error: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    pub name: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
}

pub fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

pub fn write_json(value: &impl Serialize, path: &str) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
