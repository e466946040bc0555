// Public modules
pub mod batch;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod geo;
pub mod job;
pub mod notify;
pub mod route;

// Re-exports for the common call path
pub use batch::{batch_by_proximity, Batch};
pub use dispatch::{Dispatcher, PlanOutcome, RoutePlan, RouteRequest};
pub use error::{CleanRouteError, CrResult, ProviderError};
pub use geo::GeoPoint;
pub use job::{partition_located, Job, JobRecord, Severity, WasteType};
pub use notify::{LogSink, NotificationSink, NotifyLevel};
pub use route::{nearest_neighbor, HttpDirectionsProvider, RouteOptimizer, RouteProvider};
