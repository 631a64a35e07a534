//! Postal code tables.
//!
//! A raw table holds every row of a country's export; a unique table holds
//! one aggregated row per postal code and is what lookups run against.

mod codec;
mod dedup;
mod record;

pub use codec::{FIELDS, parse_source, read_cache, write_cache};
pub use dedup::deduplicate;
pub use record::{PostalRecord, RawTable, UniqueTable};
