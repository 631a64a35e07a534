//! Two-level caching of postal tables.
//!
//! `RawTableCache` keeps each country's export on disk. `UniqueTableCache`
//! builds the per-code table from it, saves that to disk as well, and holds
//! it in memory for the rest of the cache's lifetime.

mod raw;
mod unique;

pub use raw::RawTableCache;
pub use unique::UniqueTableCache;
