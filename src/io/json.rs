use std::{fs::File, io::{BufReader, BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Reads a JSON payload from the file at `path`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("[io::json] Failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("[io::json] Failed to decode {}", path.display()))
}

/// Writes `value` as pretty-printed JSON to the file at `path`.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::json] Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("[io::json] Failed to encode {}", path.display()))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// One entry of a path list: a bare string or any object carrying `svgPath`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PathEntry {
    Raw(String),
    Shape {
        #[serde(rename = "svgPath", default)]
        svg_path: String,
    },
}

/// Parse a JSON array of path strings, or of objects with an `svgPath` field.
pub fn parse_path_list(json: &str) -> Result<Vec<String>> {
    let entries: Vec<PathEntry> = serde_json::from_str(json)
        .context("[io::json] Expected an array of path strings or objects with \"svgPath\"")?;
    Ok(entries.into_iter()
        .map(|entry| match entry {
            PathEntry::Raw(d) => d,
            PathEntry::Shape { svg_path } => svg_path,
        })
        .collect())
}

/// Read a path list (see [`parse_path_list`]) from the file at `path`.
pub fn read_path_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("[io::json] Failed to read {}", path.display()))?;
    parse_path_list(&text)
        .with_context(|| format!("[io::json] Bad path list in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Roster;

    #[test]
    fn path_list_accepts_strings_and_objects() {
        let paths = parse_path_list(r#"["M0 0L1 1", { "id": 3, "svgPath": "M2 2L3 3" }, { "id": 4 }]"#).unwrap();
        assert_eq!(paths, vec!["M0 0L1 1", "M2 2L3 3", ""]);
    }

    #[test]
    fn path_list_rejects_non_array() {
        assert!(parse_path_list(r#"{ "svgPath": "M0 0" }"#).is_err());
    }

    #[test]
    fn json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        let roster = Roster::default();
        write_json_file(&path, &roster).unwrap();
        let back: Roster = read_json_file(&path).unwrap();
        assert_eq!(back, roster);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_json_file::<Roster>(Path::new("/nonexistent/roster.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/roster.json"));
    }
}
