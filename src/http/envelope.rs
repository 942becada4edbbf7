//! The uniform response envelope every Bot API call returns.

use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::{ApiError, ResponseParameters, TransportError};

/// `{"ok": bool, "result": <any>, "description": string?, "error_code": int?}`
///
/// `result` is kept as raw JSON text; decoding it into a method-specific
/// shape is the caller's job.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<Box<RawValue>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub parameters: Option<ResponseParameters>,
}

impl Envelope {
    /// Strictly decode a response body. `status` is carried for diagnostics only.
    pub fn decode(status: u16, body: &[u8]) -> Result<Self, TransportError> {
        serde_json::from_slice(body).map_err(|source| TransportError::Decode { status, source })
    }

    /// `Ok(result)` when `ok` is true, otherwise the remote's own failure.
    /// A failed envelope's `result` is ignored.
    pub fn into_result(self) -> Result<Option<Box<RawValue>>, ApiError> {
        if self.ok {
            return Ok(self.result);
        }
        Err(ApiError {
            description: self.description.unwrap_or_default(),
            error_code: self.error_code,
            parameters: self.parameters,
        })
    }
}
