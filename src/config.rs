use crate::error::CrResult;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub provider: ProviderParams,
    #[command(flatten)]
    pub batching: BatchParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderParams {
    /// Base URL of the external directions service. With no URL configured
    /// the optimizer goes straight to the local heuristic.
    #[arg(long)]
    pub provider_url: Option<String>,

    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value_t = 10)]
    pub provider_timeout_secs: u64,

    /// Directions APIs cap waypoint optimization around 25 stops; larger
    /// job sets skip the provider and use the local heuristic.
    #[arg(long, default_value_t = 25)]
    pub max_stops: usize,
}

impl Default for ProviderParams {
    fn default() -> Self {
        Self {
            provider_url: None,
            api_key: None,
            provider_timeout_secs: 10,
            max_stops: 25,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchParams {
    /// Jobs within this distance of a batch anchor are grouped together.
    #[arg(long, default_value_t = 0.2)]
    pub threshold_km: f64,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self { threshold_km: 0.2 }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CrResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
