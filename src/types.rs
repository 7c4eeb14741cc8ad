use serde::ser::{Serialize, SerializeMap, Serializer};

//==============================================================================
// Staff Roster Layout
//==============================================================================

pub const FULL_NAME: &str = "Full Name";
pub const PHONE_NUMBER: &str = "Phone Number";
pub const SCHOOL_NAME: &str = "School Name";
pub const DESIGNATION_LEVEL: &str = "Designation - Level";
pub const EMAIL: &str = "Email";
pub const REGION: &str = "Region";
pub const DISTRICT: &str = "District";

/// Source column (zero-indexed, C..J without G) and the field it fills, in scan order
pub const COLUMN_MAPPING: [(usize, &str); 7] = [
    (2, FULL_NAME),
    (3, PHONE_NUMBER),
    (4, SCHOOL_NAME),
    (5, DESIGNATION_LEVEL),
    (7, EMAIL),
    (8, REGION),
    (9, DISTRICT),
];

/// Leading rows treated as header material when a table has more rows than this
pub const HEADER_ROWS: usize = 2;

/// Field order produced by the reorderer
pub const CANONICAL_ORDER: [&str; 7] = [
    FULL_NAME,
    EMAIL,
    PHONE_NUMBER,
    SCHOOL_NAME,
    DESIGNATION_LEVEL,
    REGION,
    DISTRICT,
];

/// Worksheet name used for tabular exports
pub const SHEET_NAME: &str = "Staff Data";

/// Minimum column count a source table needs for the fixed mapping
pub const fn required_columns() -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < COLUMN_MAPPING.len() {
        if COLUMN_MAPPING[i].0 > max {
            max = COLUMN_MAPPING[i].0;
        }
        i += 1;
    }
    max + 1
}

//==============================================================================
// Records
//==============================================================================

/// A flat field-name → text mapping that remembers insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Set a field, keeping its original position if it already exists
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Field value, or "" when the field is absent
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Records in source order, concatenated across inputs
pub type RecordSet = Vec<Record>;

//==============================================================================
// Source Tables
//==============================================================================

/// One spreadsheet cell; `None` for blank/missing
pub type Cell = Option<String>;

/// Untyped grid read from one spreadsheet, zero-indexed from A1
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTable {
    /// Display name of the source (usually the file name)
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl SourceTable {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Build a table where every cell is present text
    pub fn from_text_rows<R, S>(name: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| Some(cell.into())).collect())
            .collect();
        Self::new(name, rows)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row; ragged rows are padded with missing cells on read
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }
}
