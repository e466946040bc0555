use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanRouteError {
    #[error("Coordinate out of range: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("Worker location unavailable or invalid (lat {lat}, lng {lng}); enable location sharing and retry")]
    InvalidOrigin { lat: f64, lng: f64 },

    #[error("Job {job_id} has no location data")]
    MissingLocation { job_id: u64 },

    #[error("Job {job_id} has an unusable location: lat {lat}, lng {lng}")]
    InvalidJobLocation { job_id: u64, lat: f64, lng: f64 },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CrResult<T> = Result<T, CleanRouteError>;

/// Failures of the external directions provider. These are always recovered
/// by the local nearest-neighbor fallback and never escape the optimizer.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no response within {secs}s")]
    Timeout { secs: u64 },

    #[error("provider returned status {0}")]
    Status(String),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}
