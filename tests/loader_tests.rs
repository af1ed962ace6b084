use bidforge::config::CostTable;
use bidforge::error::BidError;
use bidforge::loader::{load_cost_table, load_cost_table_csv};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

#[test]
fn test_csv_in_memory() {
    let data = "key,value\nhourly_wage,32.5\nnet_cost, 250\n";
    let table = load_cost_table_csv(Cursor::new(data)).expect("CSV load failed");
    assert_eq!(table.hourly_wage, 32.5);
    assert_eq!(table.net_cost, 250.0);
    // Untouched keys keep defaults.
    assert_eq!(table.hoop_cost, 2300.0);
}

#[test]
fn test_csv_skips_malformed_rows() {
    let data = "key,value\nhourly_wage,abc\nlonely\nlight_cost,1200\n";
    let table = load_cost_table_csv(Cursor::new(data)).unwrap();
    assert_eq!(table.hourly_wage, 30.0);
    assert_eq!(table.light_cost, 1200.0);
}

#[test]
fn test_csv_unknown_key_is_error() {
    let data = "key,value\npool_chlorine,3\n";
    let err = load_cost_table_csv(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, BidError::Config(_)));
}

#[test]
fn test_csv_negative_rate_is_error() {
    let data = "key,value\nmileage_rate,-0.5\n";
    let err = load_cost_table_csv(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, BidError::Validation(_)));
}

#[test]
fn test_json_partial_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("costs.json");
    fs::write(&path, r#"{ "hourly_wage": 41.0, "workday_hours": 10 }"#).unwrap();

    let table = load_cost_table(&path).unwrap();
    assert_eq!(table.hourly_wage, 41.0);
    assert_eq!(table.workday_hours, 10.0);
    assert_eq!(table.mileage_rate, 0.58);
}

#[test]
fn test_json_unknown_field_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("costs.json");
    fs::write(&path, r#"{ "pool_chlorine": 3.0 }"#).unwrap();
    assert!(matches!(load_cost_table(&path), Err(BidError::Json(_))));
}

#[test]
fn test_csv_file_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("costs.CSV");
    fs::write(&path, "key,value\nfence_cost_per_foot,9\n").unwrap();
    assert_eq!(load_cost_table(&path).unwrap().fence_cost_per_foot, 9.0);
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("costs.toml");
    fs::write(&path, "hourly_wage = 30").unwrap();
    assert!(matches!(load_cost_table(&path), Err(BidError::Config(_))));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    assert!(matches!(load_cost_table(&path), Err(BidError::Io(_))));
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("export.json");
    let mut table = CostTable::default();
    table.set_by_name("lodging_cost_per_day", 175.0).unwrap();

    table.save_to_file(&path).unwrap();
    assert_eq!(load_cost_table(&path).unwrap(), table);
}
