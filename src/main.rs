// ===== cleanroute/src/main.rs =====
use clap::{Parser, Subcommand};
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the optimized visiting order and proximity batches
    Plan(cmd::plan::PlanArgs),
    /// Inspect a jobs file: counts, missing or unusable locations
    Audit(cmd::audit::AuditArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Plan(args) => cmd::plan::run(args).await,
        Commands::Audit(args) => cmd::audit::run(args),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
