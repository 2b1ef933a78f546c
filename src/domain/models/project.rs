use std::collections::BTreeMap;

use serde_derive::Deserialize;
use serde_derive::Serialize;

/// One generated (or scaffolded) source file. Paths live in the surrounding
/// [`FileMap`] keys, mirroring the `{path: {code}}` wire shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub code: String,
}

impl FileRecord {
    pub fn new(code: &str) -> FileRecord {
        return FileRecord {
            code: code.to_string(),
        };
    }
}

pub type FileMap = BTreeMap<String, FileRecord>;

/// Payload returned by the structured completion endpoint. Only `files` is
/// required downstream; the metadata is carried but not displayed in scope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedProject {
    pub files: FileMap,
    #[serde(rename = "projectTitle", skip_serializing_if = "Option::is_none")]
    pub project_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(rename = "generatedFiles", skip_serializing_if = "Option::is_none")]
    pub generated_files: Option<Vec<String>>,
}
