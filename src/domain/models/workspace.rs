use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::FileMap;
use super::Message;

/// The remote workspace document. A fresh workspace may be missing either
/// part, so both default when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceDoc {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(rename = "fileData", default)]
    pub file_data: FileMap,
}
