//! Loading content documents from JSON files

use std::fs;
use std::path::{Path, PathBuf};

use crate::ContentDocument;

/// Errors that can occur when loading a document
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read document {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid document JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and parse one document file
pub fn load_document(path: &Path) -> Result<ContentDocument, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&content).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a document from JSON text
pub fn parse_document(json: &str) -> Result<ContentDocument, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_optional_fields_default() {
        let doc = parse_document(r#"{ "content": "<p>Hi</p>", "keyphrase": "hi" }"#).unwrap();
        assert_eq!(doc.keyphrase, "hi");
        assert!(doc.used_keyphrases.is_empty());
        assert!(doc.slug.is_empty());
    }

    #[test]
    fn test_camel_case_fields() {
        let doc = parse_document(
            r#"{ "content": "", "usedKeyphrases": ["a"], "metaDescription": "m" }"#,
        )
        .unwrap();
        assert_eq!(doc.used_keyphrases, vec!["a"]);
        assert_eq!(doc.meta_description, "m");
    }

    #[test]
    fn test_missing_file() {
        let err = load_document(Path::new("/nonexistent/doc.json")).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
        assert!(err.to_string().contains("Failed to read document"));
    }

    #[test]
    fn test_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_document(file.path()).unwrap_err();
        assert!(matches!(err, InputError::Parse { .. }));
    }
}
