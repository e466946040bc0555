use crate::reports;
use clap::Args;
use cleanroute::error::CrResult;
use cleanroute::geo::GeoPoint;
use cleanroute::job::JobRecord;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    /// JSON file holding the assigned jobs
    #[arg(short, long)]
    pub jobs: PathBuf,
}

#[derive(Debug, Default)]
pub struct AuditSummary {
    pub total: usize,
    pub located: usize,
    pub missing: Vec<u64>,
    pub invalid: Vec<u64>,
    pub by_severity: BTreeMap<String, usize>,
    pub by_waste_type: BTreeMap<String, usize>,
}

pub fn summarize(records: &[JobRecord]) -> AuditSummary {
    let mut summary = AuditSummary {
        total: records.len(),
        ..Default::default()
    };

    for record in records {
        *summary
            .by_severity
            .entry(record.severity.to_string())
            .or_insert(0) += 1;
        *summary
            .by_waste_type
            .entry(record.waste_type.to_string())
            .or_insert(0) += 1;

        match (record.lat, record.lng) {
            (Some(lat), Some(lng)) => match GeoPoint::new(lat, lng) {
                Ok(_) => summary.located += 1,
                Err(_) => summary.invalid.push(record.id),
            },
            _ => summary.missing.push(record.id),
        }
    }

    summary
}

pub fn run(args: AuditArgs) -> CrResult<()> {
    let records: Vec<JobRecord> = serde_json::from_str(&fs::read_to_string(&args.jobs)?)?;

    println!("\n🔎 === JOBS AUDIT === 🔎");
    let summary = summarize(&records);
    reports::print_audit(&summary);

    Ok(())
}
