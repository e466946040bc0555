use crate::geo::GeoPoint;
use crate::job::Job;

/// Deterministic nearest-neighbor ordering, used whenever the external
/// directions provider is unavailable or misbehaves.
///
/// Starting from `origin`, repeatedly visits the closest unvisited job by
/// great-circle distance. The strict `<` comparison keeps the earliest input
/// index on equidistant candidates, so repeated calls over the same input
/// always produce the same order.
pub fn nearest_neighbor(origin: GeoPoint, jobs: &[Job]) -> Vec<Job> {
    let mut order = Vec::with_capacity(jobs.len());
    let mut visited = vec![false; jobs.len()];
    let mut current = origin;

    for _ in 0..jobs.len() {
        let mut best: Option<(usize, f64)> = None;
        for (i, job) in jobs.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let dist = current.haversine_km(&job.location);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
        }

        if let Some((i, _)) = best {
            visited[i] = true;
            current = jobs[i].location;
            order.push(jobs[i].clone());
        }
    }

    order
}
