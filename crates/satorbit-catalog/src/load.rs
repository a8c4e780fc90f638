//! Reading catalog documents from disk.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{CatalogError, CatalogGroup, GpRecord};

/// Parse a GP JSON array, keeping document order.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the document is not an array of records.
pub fn load_records<R: Read>(reader: R) -> Result<Vec<GpRecord>, CatalogError> {
    let records: Vec<GpRecord> = serde_json::from_reader(reader)?;
    Ok(records)
}

/// Read and parse a GP JSON file.
///
/// # Errors
///
/// Returns [`CatalogError::Read`] if the file cannot be opened, or
/// [`CatalogError::Parse`] if its contents are malformed.
pub fn load_records_from_path(path: &Path) -> Result<Vec<GpRecord>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = load_records(BufReader::new(file))?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded catalog");
    Ok(records)
}

/// Read the cached document of `group` from `dir`.
///
/// # Errors
///
/// See [`load_records_from_path`].
pub fn load_group(dir: &Path, group: CatalogGroup) -> Result<Vec<GpRecord>, CatalogError> {
    let path = dir.join(group.cache_file_name());
    if !path.exists() {
        tracing::warn!(
            path = %path.display(),
            url = %group.query_url(),
            "catalog not cached; download it from the query URL"
        );
    }
    load_records_from_path(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RECORDS: &str = r#"[
        {
            "OBJECT_NAME": "GSAT0101 (GALILEO-PFM)",
            "MEAN_MOTION": 1.70475323,
            "ECCENTRICITY": 0.0003026,
            "INCLINATION": 57.0907,
            "RA_OF_ASC_NODE": 347.9538,
            "ARG_OF_PERICENTER": 3.4329,
            "NORAD_CAT_ID": 37846
        },
        {
            "OBJECT_NAME": "GSAT0102 (GALILEO-FM2)",
            "MEAN_MOTION": 1.70475452,
            "ECCENTRICITY": 0.0005017,
            "INCLINATION": 57.0911,
            "RA_OF_ASC_NODE": 347.9612,
            "ARG_OF_PERICENTER": 340.4129,
            "NORAD_CAT_ID": 37847
        }
    ]"#;

    #[test]
    fn test_load_records_preserves_order() {
        let records = load_records(TWO_RECORDS.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].object_name, "GSAT0101 (GALILEO-PFM)");
        assert_eq!(records[1].object_name, "GSAT0102 (GALILEO-FM2)");
    }

    #[test]
    fn test_empty_array() {
        assert!(load_records("[]".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_non_array_is_parse_error() {
        let err = load_records(r#"{"OBJECT_NAME": "X"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_load_group_from_cache_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("galileo.json"), TWO_RECORDS).unwrap();

        let records = load_group(dir.path(), CatalogGroup::Galileo).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_group(dir.path(), CatalogGroup::Beidou).unwrap_err();
        match err {
            CatalogError::Read { path, .. } => assert!(path.ends_with("beidou.json")),
            other => panic!("expected read error, got {other}"),
        }
    }
}
