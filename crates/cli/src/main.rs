use crate::{
    error::CliError,
    output::{SeedSummary, print_json, write_json},
};
use clap::Parser;
use commands::Commands;
use connectors::{
    config::DataSourceConfig,
    query::demo::{QueryDslRepo, seed_demo_data},
    repository::{ItemRepository, ShopRepository},
    sql::sqlite::adapter::SqliteAdapter,
};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;
mod scenarios;

#[derive(Parser)]
#[command(
    name = "querydsl-demo",
    version = "0.0.1",
    about = "Typed, alias-bound queries over shops and items"
)]
struct Cli {
    #[arg(
        long,
        env = "QUERYDSL_DATABASE_URL",
        default_value = "sqlite::memory:",
        help = "Data source URL: sqlite::memory: or sqlite://<path>"
    )]
    database: DataSourceConfig,

    #[arg(long, default_value = "info", help = "Log level used when RUST_LOG is unset")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let adapter = SqliteAdapter::open(&cli.database)?;

    match cli.command {
        Commands::Seed => {
            seed_demo_data(&adapter)?;
            print_json(&SeedSummary {
                shops: ShopRepository::new(&adapter).count()?,
                items: ItemRepository::new(&adapter).count()?,
            })?;
        }
        Commands::Demo { output } => {
            seed_demo_data(&adapter)?;
            let reports = scenarios::run(&adapter);
            match output {
                Some(path) => write_json(&reports, &path)?,
                None => print_json(&reports)?,
            }
        }
        Commands::Hello => {
            let items = QueryDslRepo::new(&adapter).hello_querydsl()?;
            print_json(&items)?;
        }
    }

    Ok(())
}

fn init_tracing(level: &str) -> Result<(), CliError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|_| CliError::InvalidLogLevel(level.to_string()))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
