use serde::Serialize;

use super::Method;
use crate::types::File;

/// `getFile` — basic info about a file, including the `file_path` needed to
/// build a download link. Links stay valid for at least one hour.
#[derive(Debug, Clone, Serialize)]
pub struct GetFile {
    pub file_id: String,
}

impl GetFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

impl Method for GetFile {
    const NAME: &'static str = "getFile";
    type Response = File;
}
