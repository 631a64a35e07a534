//! Reading and writing postal tables.
//!
//! The GeoNames export is tab-separated with no header and no quoting.
//! Cache files are plain CSV with a header row naming the twelve fields.

use std::fs::File;
use std::path::Path;

use crate::error::GeoError;

use super::record::PostalRecord;

/// Parse the tab-separated source export.
pub fn parse_source(data: &[u8]) -> Result<Vec<PostalRecord>, GeoError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .from_reader(data);

    reader
        .deserialize()
        .collect::<Result<Vec<PostalRecord>, _>>()
        .map_err(|e| GeoError::Parse {
            message: format!("invalid postal data: {}", e),
        })
}

/// Load a CSV cache file.
pub fn read_cache(path: &Path) -> Result<Vec<PostalRecord>, GeoError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| GeoError::Cache {
        message: format!("failed to open {}: {}", path.display(), e),
    })?;

    reader
        .deserialize()
        .collect::<Result<Vec<PostalRecord>, _>>()
        .map_err(|e| GeoError::Parse {
            message: format!("invalid cache file {}: {}", path.display(), e),
        })
}

/// Write rows to a CSV cache file, replacing any existing file.
///
/// Creates the parent directory if it doesn't exist.
pub fn write_cache(path: &Path, rows: &[PostalRecord]) -> Result<(), GeoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| GeoError::Cache {
            message: format!("failed to create cache directory: {}", e),
        })?;
    }

    let file = File::create(path).map_err(|e| GeoError::Cache {
        message: format!("failed to create {}: {}", path.display(), e),
    })?;
    let mut writer = csv::Writer::from_writer(file);

    let write_error = |e: csv::Error| GeoError::Cache {
        message: format!("failed to write {}: {}", path.display(), e),
    };

    if rows.is_empty() {
        writer.write_record(FIELDS).map_err(write_error)?;
    }
    for row in rows {
        writer.serialize(row).map_err(write_error)?;
    }

    writer.flush().map_err(|e| GeoError::Cache {
        message: format!("failed to flush {}: {}", path.display(), e),
    })?;

    Ok(())
}

/// Column names, in file order.
pub const FIELDS: [&str; 12] = [
    "country_code",
    "postal_code",
    "place_name",
    "state_name",
    "state_code",
    "county_name",
    "county_code",
    "community_name",
    "community_code",
    "latitude",
    "longitude",
    "accuracy",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::record::record;
    use tempfile::tempdir;

    const SOURCE: &str = "US\t01001\tAgawam\tMassachusetts\tMA\tHampden\t013\t\t\t42.0702\t-72.6227\t1\n\
                          US\t10001\tNew York\tNew York\tNY\tNew York\t061\t\t\t40.7484\t-73.9967\t\n";

    #[test]
    fn parse_source_rows() {
        let rows = parse_source(SOURCE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].postal_code, "01001");
        assert_eq!(rows[0].place_name, "Agawam");
        assert_eq!(rows[0].state_code, "MA");
        assert_eq!(rows[0].community_name, "");
        assert_eq!(rows[0].coordinate(), Some((42.0702, -72.6227)));
        assert_eq!(rows[0].accuracy, Some(1.0));

        assert_eq!(rows[1].accuracy, None);
    }

    #[test]
    fn parse_source_keeps_quotes_literal() {
        let data = "FR\t75001\tParis \"Louvre\"\tIle-de-France\t11\tParis\t75\t\t\t48.86\t2.34\t5\n";
        let rows = parse_source(data.as_bytes()).unwrap();
        assert_eq!(rows[0].place_name, "Paris \"Louvre\"");
    }

    #[test]
    fn parse_source_rejects_bad_coordinates() {
        let data = "US\t10001\tNew York\t\t\t\t\t\t\tnorth\t-73.99\t\n";
        let err = parse_source(data.as_bytes()).unwrap_err();
        assert!(matches!(err, GeoError::Parse { .. }));
    }

    #[test]
    fn cache_roundtrip_preserves_leading_zeros() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("US.txt");
        let rows = vec![
            record("01001", "Agawam", 42.0702, -72.6227),
            record("00501", "Holtsville, Brookhaven", 40.8154, -73.0451),
        ];

        write_cache(&path, &rows).unwrap();
        let loaded = read_cache(&path).unwrap();

        assert_eq!(loaded, rows);
        assert_eq!(loaded[1].postal_code, "00501");
    }

    #[test]
    fn cache_file_has_header_and_no_index() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("US.txt");
        write_cache(&path, &[record("10001", "New York", 40.75, -73.99)]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), FIELDS.join(","));
        assert!(lines.next().unwrap().starts_with("US,10001,New York,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn read_cache_accepts_float_accuracy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("US-index.txt");
        std::fs::write(
            &path,
            format!("{}\nUS,10001,New York,,,,,,,40.7495,-73.99695,4.0\n", FIELDS.join(",")),
        )
        .unwrap();

        let rows = read_cache(&path).unwrap();
        assert_eq!(rows[0].accuracy, Some(4.0));
        assert_eq!(rows[0].coordinate(), Some((40.7495, -73.99695)));
    }

    #[test]
    fn empty_table_still_writes_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("US.txt");
        write_cache(&path, &[]).unwrap();

        assert!(read_cache(&path).unwrap().is_empty());
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("US.txt");
        write_cache(&path, &[record("10001", "New York", 40.75, -73.99)]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn missing_cache_file_is_a_cache_error() {
        let err = read_cache(Path::new("/nonexistent/path/US.txt")).unwrap_err();
        assert!(matches!(err, GeoError::Cache { .. }));
    }
}
