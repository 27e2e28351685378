//! CLI file and stdout helpers

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::{CliError, CliResult};

/// Read a file to string with a path-bearing error.
pub fn read_file(path: &Path) -> CliResult<String> {
    fs::read_to_string(path)
        .map_err(|e| CliError::io_error(format!("failed to read {}: {}", path.display(), e)))
}

/// Read a JSON object (a submission record) from a file.
pub fn read_json_object(path: &Path) -> CliResult<Map<String, Value>> {
    let content = read_file(path)?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|e| CliError::invalid_input(format!("{}: {}", path.display(), e)))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(CliError::invalid_input(format!(
            "{}: expected a JSON object mapping field names to values",
            path.display()
        ))),
    }
}

/// Pretty-print a JSON value to stdout.
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io_error(format!("failed to serialize output: {}", e)))?;
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_json_object_accepts_record() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "Ada"}}"#).unwrap();

        let record = read_json_object(file.path()).unwrap();
        assert_eq!(record["name"], "Ada");
    }

    #[test]
    fn test_read_json_object_rejects_array() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[1, 2]").unwrap();

        let err = read_json_object(file.path()).unwrap_err();
        assert!(err.message().contains("expected a JSON object"));
    }

    #[test]
    fn test_read_file_reports_path() {
        let err = read_file(Path::new("/nonexistent/formsmith.json")).unwrap_err();
        assert!(err.message().contains("/nonexistent/formsmith.json"));
    }
}
