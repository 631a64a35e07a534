//! Postal code rows and tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::distance::Coordinate;

/// One row of the GeoNames postal code export.
///
/// Field order matches the column order of both the tab-separated source
/// and the CSV cache files. `postal_code` is always a string so that codes
/// with leading zeros survive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostalRecord {
    pub country_code: String,
    pub postal_code: String,
    pub place_name: String,
    pub state_name: String,
    pub state_code: String,
    pub county_name: String,
    pub county_code: String,
    pub community_name: String,
    pub community_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Integer in the GeoNames export, but cache files may store it as `4.0`.
    pub accuracy: Option<f64>,
}

impl PostalRecord {
    /// The (latitude, longitude) pair, if both are present.
    pub fn coordinate(&self) -> Option<Coordinate> {
        Some((self.latitude?, self.longitude?))
    }
}

/// All rows for one country, as published (postal codes may repeat).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    rows: Vec<PostalRecord>,
}

impl RawTable {
    pub fn new(rows: Vec<PostalRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PostalRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One row per distinct postal code, indexed by code.
#[derive(Debug, Clone, Default)]
pub struct UniqueTable {
    rows: Vec<PostalRecord>,
    index: HashMap<String, usize>,
}

impl UniqueTable {
    /// Build a table from rows, indexing them by postal code.
    ///
    /// If a code appears more than once the first row wins.
    pub fn new(rows: Vec<PostalRecord>) -> Self {
        let mut index = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            index.entry(row.postal_code.clone()).or_insert(i);
        }
        Self { rows, index }
    }

    /// Look up a row by postal code.
    pub fn get(&self, postal_code: &str) -> Option<&PostalRecord> {
        self.index.get(postal_code).map(|&i| &self.rows[i])
    }

    pub fn contains(&self, postal_code: &str) -> bool {
        self.index.contains_key(postal_code)
    }

    /// Rows in table order (sorted by postal code when derived from raw data).
    pub fn rows(&self) -> &[PostalRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &PostalRecord> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn record(postal_code: &str, place_name: &str, lat: f64, lon: f64) -> PostalRecord {
    PostalRecord {
        country_code: "US".to_string(),
        postal_code: postal_code.to_string(),
        place_name: place_name.to_string(),
        state_name: String::new(),
        state_code: String::new(),
        county_name: String::new(),
        county_code: String::new(),
        community_name: String::new(),
        community_code: String::new(),
        latitude: Some(lat),
        longitude: Some(lon),
        accuracy: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_requires_both_values() {
        let mut rec = record("10001", "New York", 40.75, -73.99);
        assert_eq!(rec.coordinate(), Some((40.75, -73.99)));

        rec.longitude = None;
        assert_eq!(rec.coordinate(), None);
    }

    #[test]
    fn unique_table_lookup() {
        let table = UniqueTable::new(vec![
            record("01001", "Agawam", 42.06, -72.61),
            record("10001", "New York", 40.75, -73.99),
        ]);

        assert_eq!(table.len(), 2);
        assert!(table.contains("01001"));
        assert!(!table.contains("1001"));
        assert_eq!(table.get("10001").unwrap().place_name, "New York");
        assert!(table.get("99999").is_none());
    }

    #[test]
    fn unique_table_keeps_first_duplicate() {
        let table = UniqueTable::new(vec![
            record("10001", "First", 1.0, 1.0),
            record("10001", "Second", 2.0, 2.0),
        ]);

        assert_eq!(table.get("10001").unwrap().place_name, "First");
    }

    #[test]
    fn empty_tables() {
        assert!(RawTable::default().is_empty());
        assert!(UniqueTable::default().is_empty());
        assert_eq!(UniqueTable::default().iter().count(), 0);
    }
}
