//! Request descriptor: what a single Bot API call puts on the wire.
//!
//! Exactly one primary body per call. A JSON payload is sent verbatim; a file
//! upload becomes a multipart form that may carry auxiliary text fields
//! alongside the file part (e.g. `url` next to a webhook `certificate`).

use std::fmt;

/// A named blob to upload as a multipart file part.
#[derive(Clone, PartialEq, Eq)]
pub struct InputFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl InputFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

// Certificates and media can be large; print the size only.
impl fmt::Debug for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputFile")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A multipart upload: one file part plus zero or more text parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Form field name of the file part (e.g. `"certificate"`, `"photo"`).
    pub field: String,
    pub file: InputFile,
    /// Plain text parts, sent in insertion order.
    pub fields: Vec<(String, String)>,
}

impl Upload {
    pub fn new(field: impl Into<String>, file: InputFile) -> Self {
        Self {
            field: field.into(),
            file,
            fields: Vec::new(),
        }
    }

    /// Append a text part.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

/// Content mode of one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// `Content-Type: application/json`, bytes sent unmodified.
    Json(Vec<u8>),
    /// `multipart/form-data`, no JSON body.
    Multipart(Upload),
}

impl RequestBody {
    /// JSON mode with no payload, for parameterless methods like `getMe`.
    pub fn empty() -> Self {
        RequestBody::Json(Vec::new())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RequestBody::Json(_) => "json",
            RequestBody::Multipart(_) => "multipart",
        }
    }

    /// Primary payload size in bytes.
    pub fn len(&self) -> usize {
        match self {
            RequestBody::Json(bytes) => bytes.len(),
            RequestBody::Multipart(upload) => upload.file.bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Upload> for RequestBody {
    fn from(upload: Upload) -> Self {
        RequestBody::Multipart(upload)
    }
}
