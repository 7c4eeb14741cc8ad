//! CLI command tests

mod common;

use common::{roster_rows, staff_row, write_workbook};
use pretty_assertions::assert_eq;
use staff_roster::cli::commands;
use staff_roster::excel::read_records;
use staff_roster::json::{load_records, to_json_string};
use staff_roster::types::{Record, CANONICAL_ORDER};
use staff_roster::RosterError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}

fn roster_file(dir: &Path, name: &str, people: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let data = people
        .iter()
        .map(|p| staff_row(p, "0244", &format!("{}@x.com", p.to_lowercase())))
        .collect();
    write_workbook(&path, &roster_rows(data));
    path
}

// ═══════════════════════════════════════════════════════════════════════════
// EXTRACT COMMAND TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_extract_writes_timestamped_json() {
    let dir = TempDir::new().unwrap();
    let input = roster_file(dir.path(), "north.xlsx", &["Ama", "Kofi"]);
    let out_dir = dir.path().join("out");

    let written =
        commands::extract(vec![input], None, out_dir.clone(), false, false, false).unwrap();

    assert_eq!(written.len(), 1);
    assert!(written[0].starts_with(&out_dir));
    let name = file_name(&written[0]);
    assert!(name.starts_with("staff_data_"));
    assert!(name.ends_with(".json"));
    // staff_data_YYYYMMDD_HHMMSS.json
    assert_eq!(name.len(), "staff_data_".len() + 15 + ".json".len());

    let records = load_records(&written[0]).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("Full Name"), Some("Ama"));
}

#[test]
fn test_extract_explicit_output_path() {
    let dir = TempDir::new().unwrap();
    let input = roster_file(dir.path(), "north.xlsx", &["Ama"]);
    let output = dir.path().join("combined.json");

    let written = commands::extract(
        vec![input],
        Some(output.clone()),
        dir.path().to_path_buf(),
        false,
        false,
        true,
    )
    .unwrap();

    assert_eq!(written, vec![output.clone()]);
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("[\n    {\n        \"Full Name\": \"Ama\""));
}

#[test]
fn test_extract_combines_files_in_order() {
    let dir = TempDir::new().unwrap();
    let first = roster_file(dir.path(), "a.xlsx", &["Ama", "Kofi"]);
    let second = roster_file(dir.path(), "b.xlsx", &["Esi"]);
    let output = dir.path().join("all.json");

    commands::extract(
        vec![first, second],
        Some(output.clone()),
        dir.path().to_path_buf(),
        false,
        false,
        false,
    )
    .unwrap();

    let names: Vec<String> = load_records(&output)
        .unwrap()
        .iter()
        .map(|r| r.get_or_empty("Full Name").to_string())
        .collect();
    assert_eq!(names, vec!["Ama", "Kofi", "Esi"]);
}

#[test]
fn test_extract_with_rearrange_and_excel() {
    let dir = TempDir::new().unwrap();
    let input = roster_file(dir.path(), "north.xlsx", &["Ama"]);

    let written = commands::extract(
        vec![input],
        None,
        dir.path().to_path_buf(),
        true,
        true,
        false,
    )
    .unwrap();

    assert_eq!(written.len(), 3);
    assert!(file_name(&written[1]).starts_with("rearranged_staff_data_"));
    assert!(file_name(&written[2]).starts_with("rearranged_staff_data_"));
    assert!(file_name(&written[2]).ends_with(".xlsx"));

    let rearranged = load_records(&written[1]).unwrap();
    assert_eq!(
        rearranged[0].keys().collect::<Vec<_>>(),
        CANONICAL_ORDER.to_vec()
    );
    assert_eq!(read_records(&written[2]).unwrap(), rearranged);
}

#[test]
fn test_extract_no_records_is_error() {
    let dir = TempDir::new().unwrap();
    let narrow = dir.path().join("narrow.xlsx");
    write_workbook(&narrow, &vec![vec!["a".to_string(); 5]; 3]);

    let result = commands::extract(
        vec![narrow, dir.path().join("missing.xlsx")],
        None,
        dir.path().to_path_buf(),
        false,
        false,
        false,
    );
    assert!(matches!(result, Err(RosterError::NoData(_))));
}

// ═══════════════════════════════════════════════════════════════════════════
// REARRANGE COMMAND TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_rearrange_json_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.json");
    fs::write(
        &input,
        r#"[{"Phone Number": "111", "Full Name": "A", "Staff Id": "9"}]"#,
    )
    .unwrap();
    let output = dir.path().join("out.json");

    let written = commands::rearrange(
        input,
        Some(output.clone()),
        dir.path().to_path_buf(),
        false,
        true,
    )
    .unwrap();

    assert_eq!(written, vec![output.clone()]);
    let expected: Vec<Record> = vec![[
        ("Full Name", "A"),
        ("Email", ""),
        ("Phone Number", "111"),
        ("School Name", ""),
        ("Designation - Level", ""),
        ("Region", ""),
        ("District", ""),
    ]
    .into_iter()
    .collect()];
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        to_json_string(&expected).unwrap()
    );
}

#[test]
fn test_rearrange_with_excel() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.json");
    fs::write(&input, r#"[{"Full Name": "A"}, {"Email": "b@x.com"}]"#).unwrap();

    let written =
        commands::rearrange(input, None, dir.path().to_path_buf(), true, false).unwrap();

    assert_eq!(written.len(), 2);
    assert!(file_name(&written[0]).starts_with("rearranged_staff_data_"));
    let workbook_records = read_records(&written[1]).unwrap();
    assert_eq!(workbook_records.len(), 2);
    assert_eq!(workbook_records[1].get("Email"), Some("b@x.com"));
}

#[test]
fn test_rearrange_malformed_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.json");
    fs::write(&input, r#"[{"Full Name": "A"}, "oops"]"#).unwrap();
    let output = dir.path().join("out.json");

    let result = commands::rearrange(
        input,
        Some(output.clone()),
        dir.path().to_path_buf(),
        false,
        false,
    );
    assert!(matches!(result, Err(RosterError::MalformedJson(_))));
    assert!(!output.exists(), "no partial result should be written");
}

#[test]
fn test_rearrange_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = commands::rearrange(
        dir.path().join("nope.json"),
        None,
        dir.path().to_path_buf(),
        false,
        false,
    );
    assert!(matches!(result, Err(RosterError::Io(_))));
}

// ═══════════════════════════════════════════════════════════════════════════
// TO-EXCEL COMMAND TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_to_excel_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("staff.json");
    fs::write(
        &input,
        r#"[
    {"Full Name": "Ama", "Phone Number": 244000111, "Region": "Volta"},
    {"Full Name": "Kofi", "Phone Number": "0200", "Region": "Ashanti"}
]"#,
    )
    .unwrap();
    let output = dir.path().join("staff.xlsx");

    let path =
        commands::to_excel(input.clone(), Some(output.clone()), dir.path().to_path_buf())
            .unwrap();

    assert_eq!(path, output);
    assert_eq!(read_records(&output).unwrap(), load_records(&input).unwrap());
}

#[test]
fn test_to_excel_timestamped_name() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("staff.json");
    fs::write(&input, r#"[{"Full Name": "Ama"}]"#).unwrap();
    let out_dir = dir.path().join("exports");

    let path = commands::to_excel(input, None, out_dir.clone()).unwrap();

    assert!(path.starts_with(&out_dir));
    assert!(file_name(&path).starts_with("staff_data_"));
    assert!(path.exists());
}

#[test]
fn test_to_excel_empty_input_is_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.json");
    fs::write(&input, "[]").unwrap();
    let out_dir = dir.path().join("exports");
    let output = dir.path().join("empty.xlsx");

    let result = commands::to_excel(input.clone(), None, out_dir.clone());
    assert!(matches!(result, Err(RosterError::NoData(_))));
    assert!(!out_dir.exists(), "no workbook should be written");

    let result = commands::to_excel(input, Some(output.clone()), out_dir);
    assert!(matches!(result, Err(RosterError::NoData(_))));
    assert!(!output.exists());
}

#[test]
fn test_to_excel_malformed_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.json");
    fs::write(&input, "{not json").unwrap();

    let result = commands::to_excel(input, None, dir.path().to_path_buf());
    assert!(matches!(result, Err(RosterError::MalformedJson(_))));
}
