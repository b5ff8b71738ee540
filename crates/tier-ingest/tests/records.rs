use tempfile::TempDir;
use tier_ingest::{IngestError, ProductRecord, read_records, write_records};

#[test]
fn writes_and_reads_record_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("psu_data.json");
    let mut record = ProductRecord::new("Seasonic", "Focus GX", "550-1000W", "A-");
    record.odm = Some("Seasonic".to_string());

    write_records(&path, std::slice::from_ref(&record)).unwrap();
    let loaded = read_records(&path).unwrap();
    assert_eq!(loaded, vec![record]);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("[\n  {"), "expected pretty JSON, got {text}");
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = read_records(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileRead { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_file_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"brand": "not an array"}"#).unwrap();
    let err = read_records(&path).unwrap_err();
    assert!(matches!(err, IngestError::Json { .. }));
}
