use crate::job::Job;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A cluster of jobs visitable together: an anchor plus every job within the
/// proximity threshold of that anchor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    #[serde(rename = "main_report")]
    pub anchor: Job,
    #[serde(rename = "others")]
    pub members: Vec<Job>,
    #[serde(rename = "count")]
    pub size: usize,
}

/// Greedy single-link clustering around anchors, scanning the input in its
/// given order.
///
/// Each not-yet-visited job opens a batch as its anchor; every remaining job
/// within `threshold_km` of the anchor joins that batch. Membership is
/// measured against the anchor only, so two members may themselves be
/// farther apart than the threshold. That asymmetry is intended behavior,
/// not a defect.
///
/// Every input job lands in exactly one batch (as anchor or member). A
/// threshold of zero or less degenerates to one singleton batch per job.
pub fn batch_by_proximity(jobs: &[Job], threshold_km: f64) -> Vec<Batch> {
    if threshold_km <= 0.0 {
        return jobs
            .iter()
            .map(|job| Batch {
                anchor: job.clone(),
                members: Vec::new(),
                size: 1,
            })
            .collect();
    }

    let mut batches = Vec::new();
    let mut visited: HashSet<u64> = HashSet::with_capacity(jobs.len());

    for anchor in jobs {
        if visited.contains(&anchor.id) {
            continue;
        }
        visited.insert(anchor.id);

        let mut members = Vec::new();
        for candidate in jobs {
            if visited.contains(&candidate.id) {
                continue;
            }
            if anchor.location.haversine_km(&candidate.location) <= threshold_km {
                visited.insert(candidate.id);
                members.push(candidate.clone());
            }
        }

        batches.push(Batch {
            anchor: anchor.clone(),
            size: members.len() + 1,
            members,
        });
    }

    batches
}
