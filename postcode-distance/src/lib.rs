//! Postal code geolocation and distance.
//!
//! Resolves a (postal code, country) pair to a coordinate using the GeoNames
//! postal code export, and computes great-circle distances between codes.
//! Each country's data is downloaded once, reduced to one row per code, and
//! cached on disk.

pub mod cache;
pub mod config;
pub mod country;
pub mod distance;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod source;
pub mod table;

#[cfg(test)]
mod test_support;

pub use config::GeoConfig;
pub use country::Country;
pub use engine::GeoDistanceEngine;
pub use error::{GeoError, LookupError};
