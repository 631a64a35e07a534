//! Collapse a raw table to one row per postal code.
//!
//! Rows sharing a postal code are merged: coordinates are averaged, place
//! names are joined with ", " in the order they appear, and every other
//! field keeps the first non-empty value seen.

use std::collections::BTreeMap;

use super::record::{PostalRecord, RawTable, UniqueTable};

/// Separator between merged place names.
const PLACE_SEPARATOR: &str = ", ";

/// Running mean over the values actually present.
#[derive(Debug, Default)]
struct Mean {
    sum: f64,
    count: u32,
}

impl Mean {
    fn add(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / f64::from(self.count))
    }
}

/// Accumulated state for one postal code.
struct Group {
    first: PostalRecord,
    place_names: Vec<String>,
    latitude: Mean,
    longitude: Mean,
}

impl Group {
    fn new(record: &PostalRecord) -> Self {
        let mut group = Self {
            first: record.clone(),
            place_names: Vec::new(),
            latitude: Mean::default(),
            longitude: Mean::default(),
        };
        group.add_values(record);
        group
    }

    fn absorb(&mut self, record: &PostalRecord) {
        let first = &mut self.first;
        fill(&mut first.country_code, &record.country_code);
        fill(&mut first.state_name, &record.state_name);
        fill(&mut first.state_code, &record.state_code);
        fill(&mut first.county_name, &record.county_name);
        fill(&mut first.county_code, &record.county_code);
        fill(&mut first.community_name, &record.community_name);
        fill(&mut first.community_code, &record.community_code);
        if first.accuracy.is_none() {
            first.accuracy = record.accuracy;
        }
        self.add_values(record);
    }

    fn add_values(&mut self, record: &PostalRecord) {
        self.place_names.push(record.place_name.clone());
        self.latitude.add(record.latitude);
        self.longitude.add(record.longitude);
    }

    fn finish(self) -> PostalRecord {
        PostalRecord {
            place_name: self.place_names.join(PLACE_SEPARATOR),
            latitude: self.latitude.value(),
            longitude: self.longitude.value(),
            ..self.first
        }
    }
}

/// Keep `target` unless it is empty, in which case take `candidate`.
fn fill(target: &mut String, candidate: &str) {
    if target.is_empty() && !candidate.is_empty() {
        candidate.clone_into(target);
    }
}

/// Group a raw table by postal code.
///
/// The result is sorted by postal code.
pub fn deduplicate(raw: &RawTable) -> UniqueTable {
    let mut groups: BTreeMap<&str, Group> = BTreeMap::new();

    for record in raw.rows() {
        match groups.get_mut(record.postal_code.as_str()) {
            Some(group) => group.absorb(record),
            None => {
                groups.insert(&record.postal_code, Group::new(record));
            }
        }
    }

    UniqueTable::new(groups.into_values().map(Group::finish).collect())
}
