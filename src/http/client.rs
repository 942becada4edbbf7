//! Low-level HTTP client — `BotHttp`.
//!
//! Every Bot API method funnels through [`BotHttp::request`]: build the
//! endpoint, send a JSON or multipart body, decode the envelope, and hand back
//! the raw `result`. One attempt per call; failures are returned as-is.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use futures_util::future::{self, Either};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, ClientBuilder, RequestBuilder};
use serde_json::value::RawValue;

use crate::error::{SdkResult, TransportError};
use crate::http::envelope::Envelope;
use crate::network;
use crate::request::{RequestBody, Upload};

/// Low-level HTTP client for the Bot API.
///
/// Configuration is fixed at construction; clones share the connection pool.
#[derive(Clone)]
pub struct BotHttp {
    base_url: String,
    /// Access token. NEVER logged or exposed publicly.
    token: String,
    client: Client,
}

impl BotHttp {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self, TransportError> {
        Ok(Self::from_client(base_url, token, client_builder(timeout).build()?))
    }

    /// Use a preconfigured `reqwest::Client` (proxy, TLS roots, shared pool).
    pub fn from_client(base_url: &str, token: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint for `method`: `<base>/bot<token>/<method>`.
    pub(crate) fn endpoint(&self, method: &str) -> String {
        network::method_url(&self.base_url, &self.token, method)
    }

    pub(crate) fn file_url(&self, file_path: &str) -> String {
        network::file_url(&self.base_url, &self.token, file_path)
    }

    // ── Request façade ───────────────────────────────────────────────────

    /// Run one call and return the raw `result` of a successful envelope.
    ///
    /// An absent `result` on success is returned as JSON `null`.
    pub async fn request(&self, method: &str, body: RequestBody) -> SdkResult<Box<RawValue>> {
        let envelope = self.send(method, body).await?;
        match envelope.into_result() {
            Ok(Some(raw)) => Ok(raw),
            Ok(None) => Ok(serde_json::value::to_raw_value(&serde_json::Value::Null)?),
            Err(api) => {
                tracing::warn!(
                    method,
                    error_code = ?api.error_code,
                    "Bot API reported failure: {}",
                    api.description
                );
                Err(api.into())
            }
        }
    }

    /// [`request`](Self::request), abandoned as soon as `cancel` completes.
    ///
    /// The in-flight HTTP exchange is dropped and `TransportError::Cancelled`
    /// is returned. A call that finishes first wins.
    pub async fn request_until<C>(
        &self,
        method: &str,
        body: RequestBody,
        cancel: C,
    ) -> SdkResult<Box<RawValue>>
    where
        C: Future<Output = ()>,
    {
        let call = self.request(method, body);
        futures_util::pin_mut!(call);
        futures_util::pin_mut!(cancel);

        match future::select(call, cancel).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                tracing::debug!(method, "Request cancelled");
                Err(TransportError::Cancelled.into())
            }
        }
    }

    // ── Transport ────────────────────────────────────────────────────────

    /// Dispatch on content mode.
    pub async fn send(&self, method: &str, body: RequestBody) -> Result<Envelope, TransportError> {
        match body {
            RequestBody::Json(payload) => self.execute(method, payload).await,
            RequestBody::Multipart(upload) => self.execute_multipart(method, upload).await,
        }
    }

    /// POST `payload` verbatim as `application/json`.
    pub async fn execute(
        &self,
        method: &str,
        payload: impl Into<Vec<u8>>,
    ) -> Result<Envelope, TransportError> {
        let payload = payload.into();
        tracing::debug!(method, kind = "json", len = payload.len(), "Sending request");

        let req = self
            .client
            .post(self.endpoint(method))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(payload);
        self.dispatch(method, req).await
    }

    /// POST a `multipart/form-data` body: text parts first, then the file part.
    pub async fn execute_multipart(
        &self,
        method: &str,
        upload: Upload,
    ) -> Result<Envelope, TransportError> {
        tracing::debug!(
            method,
            kind = "multipart",
            field = %upload.field,
            len = upload.file.bytes.len(),
            "Sending request"
        );

        let req = self
            .client
            .post(self.endpoint(method))
            .multipart(into_form(upload));
        self.dispatch(method, req).await
    }

    async fn dispatch(&self, method: &str, req: RequestBuilder) -> Result<Envelope, TransportError> {
        let resp = req.send().await?;
        let status = resp.status().as_u16();
        // The Bot API reports failures inside the envelope, often with a
        // 4xx status, so the body is decoded regardless of status.
        let bytes = resp.bytes().await?;

        let envelope = Envelope::decode(status, &bytes)?;
        tracing::debug!(
            method,
            status,
            ok = envelope.ok,
            error_code = ?envelope.error_code,
            "Decoded response"
        );
        Ok(envelope)
    }
}

/// Connection-layer defaults shared by every `BotHttp`.
pub(crate) fn client_builder(timeout: Duration) -> ClientBuilder {
    Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(10)
}

fn into_form(upload: Upload) -> Form {
    let form = upload
        .fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value));
    let part = Part::bytes(upload.file.bytes).file_name(upload.file.file_name);
    form.part(upload.field, part)
}

impl fmt::Debug for BotHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotHttp")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
