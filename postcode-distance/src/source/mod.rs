//! Postal data download.
//!
//! Fetches a country's tab-separated GeoNames export, trying a list of
//! mirrors in order. Zip archives are unpacked to the `{COUNTRY}.txt`
//! member they contain.

mod client;
mod error;
mod fetcher;
pub mod mock;

pub use client::{HttpTransport, Transport};
pub use error::FetchError;
pub use fetcher::SourceFetcher;
pub use mock::StaticTransport;
