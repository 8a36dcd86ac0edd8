//! JSON output writing.
//!
//! Serializes a full collection of normalized records as one pretty-printed
//! JSON array (2-space indent) and writes it atomically: the document goes
//! to a temporary file next to the destination and is renamed into place,
//! so a crashed run never leaves a half-written output behind.

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::WriteResult;

/// Write records to `dest`, creating parent directories as needed.
///
/// Any existing file at `dest` is fully replaced. Returns the number of
/// records written.
pub fn write_records<P: AsRef<Path>>(records: &[Value], dest: P) -> WriteResult<usize> {
    let dest = dest.as_ref();

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut json = serde_json::to_string_pretty(&records)?;
    json.push('\n');

    let tmp = tmp_path(dest);
    std::fs::write(&tmp, &json)?;
    std::fs::rename(&tmp, dest)?;

    Ok(records.len())
}

fn tmp_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("pilots.json");

        let records = vec![
            json!({ "pilot_id": "P001", "skills": ["Thermal"], "daily_rate_inr": 5000 }),
            json!({ "pilot_id": "P002", "skills": [], "daily_rate_inr": 0 }),
        ];

        let count = write_records(&records, &dest).unwrap();
        assert_eq!(count, 2);

        let content = std::fs::read_to_string(&dest).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("drones.json");

        write_records(&[json!({ "drone_id": "D001" })], &dest).unwrap();

        let content = std::fs::read_to_string(&dest).unwrap();
        assert!(content.contains("\n  {"));
        assert!(content.contains("\n    \"drone_id\": \"D001\""));
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out").join("data").join("missions.json");

        write_records(&[], &dest).unwrap();
        assert!(dest.exists());
    }

    #[test]
    fn test_empty_collection_is_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("pilots.json");

        let count = write_records(&[], &dest).unwrap();
        assert_eq!(count, 0);

        let content = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(content, "[]\n");
    }

    #[test]
    fn test_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("pilots.json");

        write_records(&vec![json!({ "pilot_id": "P001" }); 5], &dest).unwrap();
        write_records(&[json!({ "pilot_id": "P009" })], &dest).unwrap();

        let parsed: Vec<Value> =
            serde_json::from_str(&std::fs::read_to_string(&dest).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0]["pilot_id"], "P009");
    }

    #[test]
    fn test_repeated_writes_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("pilots.json");
        let records = vec![json!({ "pilot_id": "P001", "skills": ["Thermal", "LiDAR"] })];

        write_records(&records, &dest).unwrap();
        let first = std::fs::read(&dest).unwrap();

        write_records(&records, &dest).unwrap();
        let second = std::fs::read(&dest).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_no_tmp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("drones.json");

        write_records(&[json!({ "drone_id": "D001" })], &dest).unwrap();
        assert!(!tmp_path(&dest).exists());
    }

    #[test]
    fn test_unwritable_destination() {
        let result = write_records(&[], "/proc/skyload-denied/out.json");
        assert!(result.is_err());
    }
}
