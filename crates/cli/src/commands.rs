use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Insert the demo shops and items and print the table counts
    Seed,
    /// Seed the store, then run the alias scenarios
    Demo {
        #[arg(
            long,
            help = "If specified, writes the JSON report to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Save a `new item` and read it back through an ad hoc alias
    Hello,
}
