use serde::Serialize;

use super::Method;
use crate::error::SdkResult;
use crate::request::{InputFile, RequestBody, Upload};

/// Form field name and file name used for a webhook certificate upload.
pub const CERTIFICATE_FIELD: &str = "certificate";
pub const CERTIFICATE_FILE_NAME: &str = "cert.pem";

/// `setWebhook` — receive updates via an outgoing webhook to `url`.
/// An empty `url` removes the webhook. Returns `true` on success.
///
/// When a self-signed `certificate` is attached the call switches to a
/// multipart upload with the remaining parameters as text parts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetWebhook {
    pub url: String,

    /// Public key certificate (PEM) so the root certificate in use can be checked.
    #[serde(skip)]
    pub certificate: Option<InputFile>,

    /// Max simultaneous HTTPS connections for update delivery, 1-100.
    /// Values outside that range are not sent.
    #[serde(skip_serializing_if = "out_of_range")]
    pub max_connections: Option<u32>,

    /// Update types to receive. Empty keeps the previous setting.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_updates: Vec<String>,
}

impl SetWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_certificate(mut self, pem: impl Into<Vec<u8>>) -> Self {
        self.certificate = Some(InputFile::new(CERTIFICATE_FILE_NAME, pem));
        self
    }

    /// Only 1..=100 is sent; anything else leaves the server default (40)
    /// in place, for both JSON and multipart bodies.
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = Some(max);
        self
    }

    pub fn with_allowed_updates<I, S>(mut self, updates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_updates = updates.into_iter().map(Into::into).collect();
        self
    }
}

fn in_range(max: Option<u32>) -> Option<u32> {
    max.filter(|m| (1..=100).contains(m))
}

fn out_of_range(max: &Option<u32>) -> bool {
    in_range(*max).is_none()
}

impl Method for SetWebhook {
    const NAME: &'static str = "setWebhook";
    type Response = bool;

    fn body(&self) -> SdkResult<RequestBody> {
        let Some(certificate) = &self.certificate else {
            return Ok(RequestBody::Json(serde_json::to_vec(self)?));
        };

        let mut upload = Upload::new(CERTIFICATE_FIELD, certificate.clone()).text("url", &self.url);
        if let Some(max) = in_range(self.max_connections) {
            upload = upload.text("max_connections", max.to_string());
        }
        if !self.allowed_updates.is_empty() {
            upload = upload.text("allowed_updates", serde_json::to_string(&self.allowed_updates)?);
        }
        Ok(upload.into())
    }
}
