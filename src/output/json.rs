//! JSON output of island records
//!
//! Records are written as a single array with 4-space indentation and one
//! trailing newline.

use crate::record::IslandRecord;
use crate::{IslandError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

/// Serializes records as a pretty-printed JSON array
pub fn to_json_string(records: &[IslandRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    buf.push(b'\n');

    Ok(String::from_utf8(buf)?)
}

/// Writes records to `path`, replacing any existing file
///
/// The whole document is serialized before the file is opened.
pub fn write_records(records: &[IslandRecord], path: &Path) -> Result<()> {
    let json = to_json_string(records)?;

    std::fs::write(path, json).map_err(|source| IslandError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Reads records back from a file written by [`write_records`]
pub fn read_records(path: &Path) -> Result<Vec<IslandRecord>> {
    let content = std::fs::read_to_string(path).map_err(|source| IslandError::Read {
        path: path.display().to_string(),
        source,
    })?;

    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Link;
    use tempfile::TempDir;

    fn sample_records() -> Vec<IslandRecord> {
        vec![
            IslandRecord::new(
                "Bejeweled",
                Some(1024),
                Some(Link::new("Jack", "/yoweb/pirate.wm?name=Jack")),
                Some("5%".to_string()),
                Some(Link::new("Crimson Tide", "/yoweb/flag.wm?id=1")),
            ),
            IslandRecord::new("Emerald", None, None, None, None),
        ]
    }

    #[test]
    fn test_four_space_indent_and_key_order() {
        let json = to_json_string(&sample_records()[1..]).unwrap();

        let expected = r#"[
    {
        "name": "Emerald",
        "population": null,
        "governor": null,
        "governor_link": null,
        "property_tax": null,
        "flag": null,
        "flag_link": null
    }
]
"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_non_ascii_names_are_kept() {
        let records = vec![IslandRecord::new(
            "Île Émeraude",
            Some(3),
            None,
            Some("5 ☠".to_string()),
            None,
        )];
        let json = to_json_string(&records).unwrap();

        assert!(json.contains("\"name\": \"Île Émeraude\""));
        assert!(json.contains("\"property_tax\": \"5 ☠\""));
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(to_json_string(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn test_write_then_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("islands.json");
        let records = sample_records();

        write_records(&records, &path).unwrap();
        let read_back = read_records(&path).unwrap();

        assert_eq!(read_back, records);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("islands.json");
        std::fs::write(&path, "stale contents that are much longer than the new ones").unwrap();

        write_records(&[], &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_write_to_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("islands.json");

        let result = write_records(&sample_records(), &path);
        assert!(matches!(result, Err(IslandError::Write { .. })));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_records(Path::new("/nonexistent/islands.json"));
        assert!(matches!(result, Err(IslandError::Read { .. })));
    }
}
