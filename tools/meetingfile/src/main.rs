mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{schema::SchemaArgs, show::ShowArgs, update::UpdateArgs};
use meetingfile::log_filter;

#[derive(Parser)]
#[command(name = "meetingfile", about = "Load, update and rewrite a stored meeting descriptor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the title and user limit and write the file back
    Update(UpdateArgs),
    /// Print the stored meeting field by field
    Show(ShowArgs),
    /// Print the meeting field list with the text pattern of each field
    Schema(SchemaArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Update(args) => args.run(),
        Commands::Show(args) => args.run(),
        Commands::Schema(args) => args.run(),
    }
}
