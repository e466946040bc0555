use crate::error::{CleanRouteError, CrResult};
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WasteType {
    Plastic,
    Organic,
    Metal,
    Glass,
    Paper,
    Electronic,
    Construction,
    EWaste,
    Hazardous,
    #[default]
    Other,
}

/// Raw job payload as it arrives over the wire. Coordinates are optional
/// here; records are promoted to [`Job`] once validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: u64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(rename = "type", default)]
    pub waste_type: WasteType,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub description: String,
}

/// A routable cleanup job: one active assignment, exclusively owned by one
/// worker, with a validated location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    #[serde(flatten)]
    pub location: GeoPoint,
    #[serde(rename = "type", default)]
    pub waste_type: WasteType,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl TryFrom<&JobRecord> for Job {
    type Error = CleanRouteError;

    fn try_from(record: &JobRecord) -> CrResult<Self> {
        let (lat, lng) = match (record.lat, record.lng) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => return Err(CleanRouteError::MissingLocation { job_id: record.id }),
        };
        let location = GeoPoint::new(lat, lng).map_err(|_| CleanRouteError::InvalidJobLocation {
            job_id: record.id,
            lat,
            lng,
        })?;

        Ok(Job {
            id: record.id,
            location,
            waste_type: record.waste_type,
            severity: record.severity,
            description: record.description.clone(),
        })
    }
}

/// Splits wire records into routable jobs and the ids of records that carry
/// no location. Records with out-of-range coordinates fail hard, naming the
/// offending job; records merely missing coordinates are reported back to
/// the caller, never silently dropped.
pub fn partition_located(records: &[JobRecord]) -> CrResult<(Vec<Job>, Vec<u64>)> {
    let mut located = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for record in records {
        match Job::try_from(record) {
            Ok(job) => located.push(job),
            Err(CleanRouteError::MissingLocation { job_id }) => skipped.push(job_id),
            Err(e) => return Err(e),
        }
    }

    Ok((located, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, lat: Option<f64>, lng: Option<f64>) -> JobRecord {
        JobRecord {
            id,
            lat,
            lng,
            waste_type: WasteType::default(),
            severity: Severity::default(),
            description: String::new(),
        }
    }

    #[test]
    fn test_partition_reports_unlocated_ids() {
        let records = vec![
            record(1, Some(1.0), Some(2.0)),
            record(2, None, Some(2.0)),
            record(3, Some(1.0), None),
            record(4, Some(3.0), Some(4.0)),
        ];

        let (located, skipped) = partition_located(&records).unwrap();
        let ids: Vec<u64> = located.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(skipped, vec![2, 3]);
    }

    #[test]
    fn test_partition_rejects_bad_coordinates() {
        let records = vec![record(7, Some(99.0), Some(0.0))];
        let err = partition_located(&records).unwrap_err();
        assert!(matches!(
            err,
            CleanRouteError::InvalidJobLocation { job_id: 7, .. }
        ));
    }
}
