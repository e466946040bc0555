use crate::reports;
use clap::Args;
use cleanroute::config::Config;
use cleanroute::dispatch::{Dispatcher, RouteRequest};
use cleanroute::error::CrResult;
use cleanroute::job::JobRecord;
use cleanroute::notify::LogSink;
use cleanroute::route::HttpDirectionsProvider;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON file holding the assigned jobs
    #[arg(short, long)]
    pub jobs: PathBuf,

    /// Worker latitude
    #[arg(long)]
    pub lat: f64,

    /// Worker longitude
    #[arg(long)]
    pub lng: f64,

    /// Worker id to notify once the plan is ready
    #[arg(long)]
    pub worker: Option<u64>,

    /// Load config from a JSON file instead of CLI flags
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,

    /// Print the raw plan as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub async fn run(args: PlanArgs) -> CrResult<()> {
    let config = match &args.config_file {
        Some(path) => Config::load_from_file(path)?,
        None => args.config.clone(),
    };

    let records: Vec<JobRecord> = serde_json::from_str(&fs::read_to_string(&args.jobs)?)?;
    println!("🚚 Planning route for {} assigned jobs...", records.len());

    let provider = HttpDirectionsProvider::from_config(&config.provider);
    if provider.is_none() {
        println!("⚠️  No directions provider configured. Using local heuristic.");
    }

    let request = RouteRequest {
        worker_lat: args.lat,
        worker_lng: args.lng,
        jobs: records,
        worker_id: args.worker,
    };

    let dispatcher = Dispatcher::new(&config, provider).with_sink(Box::new(LogSink));
    let plan = dispatcher.plan(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        reports::print_plan(&plan);
    }

    Ok(())
}
