mod fallback;
mod provider;

pub use fallback::nearest_neighbor;
pub use provider::HttpDirectionsProvider;

use crate::config::ProviderParams;
use crate::error::ProviderError;
use crate::geo::GeoPoint;
use crate::job::Job;
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Strategy seam for the external routing service.
///
/// Given the worker origin and the stop coordinates, returns the visiting
/// order as a permutation of `0..stops.len()`. Implementations decide which
/// stops are fixed; the optimizer verifies the permutation either way.
pub trait RouteProvider {
    fn optimize_stops(
        &self,
        origin: GeoPoint,
        stops: &[GeoPoint],
    ) -> impl Future<Output = Result<Vec<usize>, ProviderError>> + Send;
}

/// Computes the visiting order for a worker's assigned jobs.
///
/// The provider is the primary path; any provider failure (transport error,
/// timeout, non-success status, malformed payload) is logged and recovered
/// by the deterministic nearest-neighbor fallback, so valid input always
/// yields a valid ordering.
pub struct RouteOptimizer<P> {
    provider: Option<P>,
    timeout: Duration,
    max_stops: usize,
}

impl<P: RouteProvider> RouteOptimizer<P> {
    pub fn new(params: &ProviderParams, provider: Option<P>) -> Self {
        Self {
            provider,
            timeout: Duration::from_secs(params.provider_timeout_secs),
            max_stops: params.max_stops,
        }
    }

    /// Orders `jobs` into an approximately shortest open path from `origin`.
    /// The result is always a permutation of the input.
    pub async fn optimize(&self, origin: GeoPoint, jobs: Vec<Job>) -> Vec<Job> {
        if jobs.len() <= 1 {
            return jobs;
        }

        if let Some(provider) = &self.provider {
            if jobs.len() > self.max_stops {
                warn!(
                    "{} stops exceed the provider limit of {}; using local heuristic",
                    jobs.len(),
                    self.max_stops
                );
            } else {
                let stops: Vec<GeoPoint> = jobs.iter().map(|j| j.location).collect();
                match timeout(self.timeout, provider.optimize_stops(origin, &stops)).await {
                    Ok(Ok(order)) => match apply_order(jobs.clone(), &order) {
                        Ok(ordered) => {
                            debug!("provider ordering accepted for {} stops", ordered.len());
                            return ordered;
                        }
                        Err(e) => warn!("{}; falling back to nearest-neighbor", e),
                    },
                    Ok(Err(e)) => warn!("{}; falling back to nearest-neighbor", e),
                    Err(_) => {
                        let e = ProviderError::Timeout {
                            secs: self.timeout.as_secs(),
                        };
                        warn!("{}; falling back to nearest-neighbor", e);
                    }
                }
            }
        }

        nearest_neighbor(origin, &jobs)
    }
}

/// Reorders `jobs` by the provider's index order, rejecting anything that is
/// not an exact permutation so a misbehaving provider can never drop or
/// duplicate a job.
fn apply_order(mut jobs: Vec<Job>, order: &[usize]) -> Result<Vec<Job>, ProviderError> {
    if order.len() != jobs.len() {
        return Err(ProviderError::Malformed(format!(
            "order has {} entries for {} stops",
            order.len(),
            jobs.len()
        )));
    }

    let mut seen = vec![false; jobs.len()];
    for &idx in order {
        if idx >= jobs.len() || seen[idx] {
            return Err(ProviderError::Malformed(format!(
                "order index {} out of range or repeated",
                idx
            )));
        }
        seen[idx] = true;
    }

    let mut slots: Vec<Option<Job>> = jobs.drain(..).map(Some).collect();
    Ok(order.iter().filter_map(|&idx| slots[idx].take()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{Severity, WasteType};

    fn job(id: u64) -> Job {
        Job {
            id,
            location: GeoPoint { lat: 0.0, lng: 0.0 },
            waste_type: WasteType::default(),
            severity: Severity::default(),
            description: String::new(),
        }
    }

    #[test]
    fn test_apply_order_permutes() {
        let jobs = vec![job(1), job(2), job(3)];
        let ids: Vec<u64> = apply_order(jobs, &[2, 0, 1])
            .unwrap()
            .iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_apply_order_rejects_short_order() {
        assert!(apply_order(vec![job(1), job(2)], &[0]).is_err());
    }

    #[test]
    fn test_apply_order_rejects_duplicates_and_out_of_range() {
        assert!(apply_order(vec![job(1), job(2)], &[0, 0]).is_err());
        assert!(apply_order(vec![job(1), job(2)], &[0, 5]).is_err());
    }
}
