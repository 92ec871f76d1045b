use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::error::StoreError;
use crate::schema::FILENAME_MAX_CHARS;

/// One row of the `uploaded_files` table: a file with an id, a name, a
/// timestamp and an attached JSON value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: Uuid,
    pub filename: String,
    pub uploaded: DateTime<Utc>,
    pub file_bytes: Vec<u8>,
    pub json_data: JsonValue,
}

impl UploadedFile {
    /// Build a record with a fresh v4 id and the current UTC time.
    /// The filename must be non-empty and at most 256 characters, the
    /// bound enforced by the `VARCHAR(256)` column.
    pub fn new(
        filename: impl Into<String>,
        file_bytes: Vec<u8>,
        json_data: JsonValue,
    ) -> Result<Self, StoreError> {
        let filename = filename.into();
        if filename.is_empty() {
            return Err(StoreError::InvalidFilename(
                "filename must not be empty".to_string(),
            ));
        }
        let chars = filename.chars().count();
        if chars > FILENAME_MAX_CHARS as usize {
            return Err(StoreError::InvalidFilename(format!(
                "filename is {chars} characters, maximum is {FILENAME_MAX_CHARS}"
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            filename,
            uploaded: Utc::now(),
            file_bytes,
            json_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_generates_v4_id_and_timestamp() {
        let before = Utc::now();
        let record = UploadedFile::new("test.pdf", vec![1, 2, 3], json!({"k": "v"})).unwrap();
        assert_eq!(record.id.get_version_num(), 4);
        assert_eq!(record.filename, "test.pdf");
        assert!(record.uploaded >= before && record.uploaded <= Utc::now());
    }

    #[test]
    fn test_distinct_records_get_distinct_ids() {
        let a = UploadedFile::new("a.bin", vec![], json!(null)).unwrap();
        let b = UploadedFile::new("a.bin", vec![], json!(null)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_filename_at_limit_is_accepted() {
        let name = "x".repeat(256);
        assert!(UploadedFile::new(name, vec![], json!(null)).is_ok());
    }

    #[test]
    fn test_filename_over_limit_is_rejected() {
        let name = "x".repeat(257);
        assert!(matches!(
            UploadedFile::new(name, vec![], json!(null)),
            Err(StoreError::InvalidFilename(_))
        ));
    }

    #[test]
    fn test_empty_filename_is_rejected() {
        assert!(matches!(
            UploadedFile::new("", vec![], json!(null)),
            Err(StoreError::InvalidFilename(_))
        ));
    }
}
