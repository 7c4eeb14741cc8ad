//! Shared fixtures: roster workbooks built on the fly

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

pub const HEADER_TITLE: [&str; 10] = ["STAFF ROSTER", "", "", "", "", "", "", "", "", ""];
pub const HEADER_COLUMNS: [&str; 10] = [
    "No",
    "Staff Id",
    "Name",
    "Phone",
    "School",
    "Level",
    "Ghana Card",
    "NTC Email",
    "Region",
    "District",
];

/// A ten-column data row with the mapped fields filled in
pub fn staff_row(name: &str, phone: &str, email: &str) -> Vec<String> {
    [
        "1", "S-001", name, phone, "Central School", "L2", "GHA-1", email, "Ashanti", "Kumasi",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn blank_row(width: usize) -> Vec<String> {
    vec![String::new(); width]
}

/// Two header rows followed by the given data rows
pub fn roster_rows(data: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut rows = vec![
        HEADER_TITLE.iter().map(|s| s.to_string()).collect(),
        HEADER_COLUMNS.iter().map(|s| s.to_string()).collect(),
    ];
    rows.extend(data);
    rows
}

/// Write rows to the first worksheet; empty strings are left as blank cells
pub fn write_workbook(path: &Path, rows: &[Vec<String>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if !value.is_empty() {
                worksheet
                    .write_string(r as u32, c as u16, value)
                    .expect("write cell");
            }
        }
    }
    workbook.save(path).expect("save workbook");
}
