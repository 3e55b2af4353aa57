use super::*;

use std::fs;

#[test]
fn numbered_designs_map_to_their_folder() {
    assert_eq!(stylesheet_for_design("214"), "/214/214.css");
    assert_eq!(stylesheet_for_design("/custom/mine.css"), "/custom/mine.css");
    assert_eq!(
        stylesheet_for_design("https://example.com/zen.css"),
        "https://example.com/zen.css"
    );
}

#[test]
fn finds_marker_with_loose_spacing_and_case() {
    assert_eq!(
        find_typekit_marker("/* TYPEKIT_KIT_ID: abc123 */\nbody {}"),
        Some("abc123")
    );
    assert_eq!(find_typekit_marker("/*typekit_kit_id:XyZ9*/"), Some("XyZ9"));
    assert_eq!(
        find_typekit_marker("/* theme */\n/*\n  TYPEKIT_KIT_ID:   k1\n*/"),
        Some("k1")
    );
}

#[test]
fn rejects_malformed_markers() {
    assert_eq!(find_typekit_marker("body { color: red; }"), None);
    assert_eq!(find_typekit_marker("/* TYPEKIT_KIT_ID: */"), None);
    assert_eq!(find_typekit_marker("/* TYPEKIT_KIT_ID: abc-123 */"), None);
    assert_eq!(find_typekit_marker("/* TYPEKIT_KIT_ID: abc123"), None);
    assert_eq!(find_typekit_marker("TYPEKIT_KIT_ID: abc123 */"), None);
}

#[test]
fn first_well_formed_marker_wins() {
    let css = "/* TYPEKIT_KIT_ID: bad-id */\n/* typekit_kit_id: first */\n/* TYPEKIT_KIT_ID: second */";
    assert_eq!(find_typekit_marker(css), Some("first"));
}

#[test]
fn reads_kit_id_from_local_stylesheet() {
    let root = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(root.path().join("214")).expect("design dir");
    fs::write(
        root.path().join("214/214.css"),
        "/* TYPEKIT_KIT_ID: gxk5nqo */\nhtml { margin: 0; }\n",
    )
    .expect("write css");

    assert_eq!(
        typekit_kit_id(root.path(), "/214/214.css"),
        Some("gxk5nqo".to_string())
    );
    assert_eq!(
        typekit_kit_id(root.path(), "/214/214.css?v=2"),
        Some("gxk5nqo".to_string())
    );
}

#[test]
fn missing_or_remote_stylesheets_have_no_kit() {
    let root = tempfile::tempdir().expect("tempdir");
    assert_eq!(typekit_kit_id(root.path(), "/999/999.css"), None);
    assert_eq!(typekit_kit_id(root.path(), "http://example.com/a.css"), None);
    assert_eq!(typekit_kit_id(root.path(), ""), None);
}

#[test]
fn marker_past_scan_window_is_ignored() {
    let root = tempfile::tempdir().expect("tempdir");
    let mut css = " ".repeat(TYPEKIT_SCAN_BYTES as usize);
    css.push_str("/* TYPEKIT_KIT_ID: late */");
    fs::write(root.path().join("late.css"), css).expect("write css");
    assert_eq!(typekit_kit_id(root.path(), "/late.css"), None);
}

#[test]
fn refuses_paths_that_leave_the_site_root() {
    let root = tempfile::tempdir().expect("tempdir");
    assert_eq!(local_path(root.path(), "/../secret.css"), None);
    assert_eq!(local_path(root.path(), "a/../../b.css"), None);
    assert_eq!(
        local_path(root.path(), "/214/214.css"),
        Some(root.path().join("214/214.css"))
    );
}
