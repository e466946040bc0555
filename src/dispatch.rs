// ===== cleanroute/src/dispatch.rs =====
use crate::batch::{batch_by_proximity, Batch};
use crate::config::Config;
use crate::error::{CleanRouteError, CrResult};
use crate::geo::GeoPoint;
use crate::job::{partition_located, JobRecord};
use crate::notify::{NotificationSink, NotifyLevel};
use crate::route::{RouteOptimizer, RouteProvider};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use tracing::info;

/// Caller request: worker position plus the raw assigned-job payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    pub worker_lat: f64,
    pub worker_lng: f64,
    pub jobs: Vec<JobRecord>,
    /// Target for the optional plan notification; absent on anonymous calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PlanOutcome {
    /// Every assigned job was routed.
    Complete,
    /// Routed the located subset; `skipped` lists the jobs without usable
    /// coordinates.
    Partial,
    /// Jobs are assigned but none carry location data.
    NoLocatedJobs,
    /// The worker has no assigned jobs.
    NoJobs,
}

/// The serialized answer to a route request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlan {
    pub worker_location: GeoPoint,
    pub batches: Vec<Batch>,
    pub optimized_order: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<u64>,
    pub outcome: PlanOutcome,
}

impl RoutePlan {
    fn empty(worker_location: GeoPoint, outcome: PlanOutcome, skipped: Vec<u64>) -> Self {
        Self {
            worker_location,
            batches: Vec::new(),
            optimized_order: Vec::new(),
            skipped,
            outcome,
        }
    }
}

/// The full dispatch pipeline: validate, split located/unlocated, optimize
/// the visiting order, group into proximity batches.
pub struct Dispatcher<P> {
    optimizer: RouteOptimizer<P>,
    threshold_km: f64,
    sink: Option<Box<dyn NotificationSink + Send + Sync>>,
}

impl<P: RouteProvider> Dispatcher<P> {
    pub fn new(config: &Config, provider: Option<P>) -> Self {
        Self {
            optimizer: RouteOptimizer::new(&config.provider, provider),
            threshold_km: config.batching.threshold_km,
            sink: None,
        }
    }

    pub fn with_sink(mut self, sink: Box<dyn NotificationSink + Send + Sync>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub async fn plan(&self, request: &RouteRequest) -> CrResult<RoutePlan> {
        let origin = GeoPoint::new(request.worker_lat, request.worker_lng).map_err(|_| {
            CleanRouteError::InvalidOrigin {
                lat: request.worker_lat,
                lng: request.worker_lng,
            }
        })?;

        if request.jobs.is_empty() {
            return Ok(RoutePlan::empty(origin, PlanOutcome::NoJobs, Vec::new()));
        }

        let (located, skipped) = partition_located(&request.jobs)?;
        if located.is_empty() {
            return Ok(RoutePlan::empty(origin, PlanOutcome::NoLocatedJobs, skipped));
        }

        let ordered = self.optimizer.optimize(origin, located).await;
        let optimized_order: Vec<u64> = ordered.iter().map(|j| j.id).collect();
        let batches = batch_by_proximity(&ordered, self.threshold_km);

        let outcome = if skipped.is_empty() {
            PlanOutcome::Complete
        } else {
            PlanOutcome::Partial
        };
        info!(
            "planned route: {} stops, {} batches, {} skipped ({})",
            optimized_order.len(),
            batches.len(),
            skipped.len(),
            outcome
        );

        let plan = RoutePlan {
            worker_location: origin,
            batches,
            optimized_order,
            skipped,
            outcome,
        };

        if let (Some(sink), Some(worker_id)) = (&self.sink, request.worker_id) {
            let message = match plan.outcome {
                PlanOutcome::Partial => format!(
                    "{} stops in {} batches; {} jobs skipped for missing location",
                    plan.optimized_order.len(),
                    plan.batches.len(),
                    plan.skipped.len()
                ),
                _ => format!(
                    "{} stops in {} batches",
                    plan.optimized_order.len(),
                    plan.batches.len()
                ),
            };
            let level = match plan.outcome {
                PlanOutcome::Partial => NotifyLevel::Warning,
                _ => NotifyLevel::Info,
            };
            sink.notify(worker_id, "Route ready", &message, level);
        }

        Ok(plan)
    }
}
