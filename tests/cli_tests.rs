use cleanroute::config::Config;
use cleanroute::job::{JobRecord, Severity, WasteType};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_config_loads_with_partial_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "provider": {{ "provider_url": "https://maps.example/api", "provider_timeout_secs": 3 }} }}"#
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(
        config.provider.provider_url.as_deref(),
        Some("https://maps.example/api")
    );
    assert_eq!(config.provider.provider_timeout_secs, 3);
    // Everything absent from the file keeps its default
    assert_eq!(config.provider.max_stops, 25);
    assert_eq!(config.batching.threshold_km, 0.2);
}

#[test]
fn test_config_rejects_invalid_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(Config::load_from_file(file.path()).is_err());
}

#[test]
fn test_jobs_wire_format_parses() {
    let payload = r#"[
        { "id": 1, "lat": 23.81, "lng": 90.41, "type": "plastic", "severity": "high", "description": "overflowing bin" },
        { "id": 2, "lat": 23.82, "lng": 90.42, "type": "ewaste", "severity": "low" },
        { "id": 3, "type": "organic" }
    ]"#;

    let records: Vec<JobRecord> = serde_json::from_str(payload).unwrap();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].waste_type, WasteType::Plastic);
    assert_eq!(records[0].severity, Severity::High);
    assert_eq!(records[0].description, "overflowing bin");

    assert_eq!(records[1].waste_type, WasteType::EWaste);
    assert_eq!(records[1].severity, Severity::Low);

    // Record without coordinates parses; routing decides what to do with it
    assert_eq!(records[2].lat, None);
    assert_eq!(records[2].lng, None);
    assert_eq!(records[2].severity, Severity::Medium);
}

#[test]
fn test_job_defaults_match_platform_defaults() {
    let record: JobRecord = serde_json::from_str(r#"{ "id": 9 }"#).unwrap();
    assert_eq!(record.waste_type, WasteType::Other);
    assert_eq!(record.severity, Severity::Medium);
    assert!(record.description.is_empty());
}
