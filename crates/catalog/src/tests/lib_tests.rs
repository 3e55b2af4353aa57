use super::*;
use shared::domain::DesignId;

const SAMPLE: &str = r##"[
    ["001", "Tranquille", "Dave Shea", "http://www.mezzoblue.com/"],
    ["002", "Salmon Cream Cheese", "Dave Shea", "http://www.mezzoblue.com/"],
    ["003", "Stormweather", "Dave Shea", "#"]
]"##;

#[test]
fn parses_positional_entries_in_submission_order() {
    let catalog = Catalog::from_json_str(SAMPLE).expect("catalog");
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.records()[0].name, "Tranquille");
    assert_eq!(catalog.newest().expect("newest").id, DesignId::from("003"));
}

#[test]
fn rejects_duplicate_design_ids() {
    let raw = r##"[["001", "A", "x", "#"], ["001", "B", "y", "#"]]"##;
    let error = Catalog::from_json_str(raw).expect_err("duplicate ids");
    assert!(error.to_string().contains("repeats design id '001'"));
}

#[test]
fn rejects_empty_design_id() {
    let raw = r##"[["  ", "A", "x", "#"]]"##;
    assert!(Catalog::from_json_str(raw).is_err());
}

#[test]
fn rejects_entries_with_wrong_arity() {
    let raw = r#"[["001", "A", "x"]]"#;
    assert!(Catalog::from_json_str(raw).is_err());
}

#[test]
fn empty_array_is_an_empty_catalog() {
    let catalog = Catalog::from_json_str("[]").expect("catalog");
    assert!(catalog.is_empty());
    assert!(catalog.newest().is_none());
}

#[test]
fn loads_catalog_file_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("designs.json");
    fs::write(&path, SAMPLE).expect("write catalog");

    let catalog = Catalog::load(&path).expect("load");
    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.records().get(1).map(|r| r.name.as_str()),
        Some("Salmon Cream Cheese")
    );
}

#[test]
fn missing_catalog_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    let error = Catalog::load(&path).expect_err("missing file");
    assert!(format!("{error:#}").contains("absent.json"));
}

#[test]
fn clones_share_records() {
    let catalog = Catalog::from_json_str(SAMPLE).expect("catalog");
    let clone = catalog.clone();
    assert!(std::ptr::eq(catalog.records(), clone.records()));
}
