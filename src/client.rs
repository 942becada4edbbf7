//! High-level client — `BotClient`.
//!
//! Wraps [`BotHttp`] with the generic typed [`call`](BotClient::call) and a
//! few convenience methods built on the bundled descriptors.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use crate::error::{SdkError, SdkResult, TransportError};
use crate::http::client::client_builder;
use crate::http::BotHttp;
use crate::methods::{
    AnswerCallbackQuery, ExportChatInviteLink, GetChatMembersCount, GetFile, GetMe, Method,
    SetWebhook,
};
use crate::network;
use crate::types::{File, User};

/// The primary entry point for the SDK.
#[derive(Clone)]
pub struct BotClient {
    pub(crate) http: BotHttp,
}

impl BotClient {
    pub fn builder(token: &str) -> BotClientBuilder {
        BotClientBuilder::new(token)
    }

    /// Low-level transport, for methods without a bundled descriptor.
    pub fn http(&self) -> &BotHttp {
        &self.http
    }

    /// Serialize → request → decode `result` into `M::Response`.
    pub async fn call<M: Method>(&self, params: &M) -> SdkResult<M::Response> {
        let raw = self.http.request(M::NAME, params.body()?).await?;
        Ok(serde_json::from_str(raw.get())?)
    }

    /// [`call`](Self::call), abandoned with `TransportError::Cancelled` once
    /// `cancel` completes.
    pub async fn call_until<M, C>(&self, params: &M, cancel: C) -> SdkResult<M::Response>
    where
        M: Method,
        C: Future<Output = ()>,
    {
        let raw = self
            .http
            .request_until(M::NAME, params.body()?, cancel)
            .await?;
        Ok(serde_json::from_str(raw.get())?)
    }

    // ── Convenience ──────────────────────────────────────────────────────

    pub async fn get_me(&self) -> SdkResult<User> {
        self.call(&GetMe).await
    }

    pub async fn get_chat_members_count(&self, chat_id: i64) -> SdkResult<i64> {
        self.call(&GetChatMembersCount { chat_id }).await
    }

    pub async fn export_chat_invite_link(&self, chat_id: i64) -> SdkResult<String> {
        self.call(&ExportChatInviteLink { chat_id }).await
    }

    pub async fn answer_callback_query(&self, params: &AnswerCallbackQuery) -> SdkResult<bool> {
        self.call(params).await
    }

    pub async fn get_file(&self, file_id: &str) -> SdkResult<File> {
        self.call(&GetFile::new(file_id)).await
    }

    pub async fn set_webhook(&self, params: &SetWebhook) -> SdkResult<bool> {
        self.call(params).await
    }

    /// Download link for a [`File`] returned by [`get_file`](Self::get_file).
    pub fn file_url(&self, file: &File) -> Option<String> {
        file.file_path.as_deref().map(|path| self.http.file_url(path))
    }
}

impl fmt::Debug for BotClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotClient").field("http", &self.http).finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BotClientBuilder {
    token: String,
    base_url: String,
    timeout: Duration,
    no_proxy: bool,
}

impl BotClientBuilder {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            base_url: network::DEFAULT_API_URL.to_string(),
            timeout: network::DEFAULT_TIMEOUT,
            no_proxy: false,
        }
    }

    /// Token from `TELEGRAM_BOT_TOKEN`, base URL from `TELEGRAM_API_URL` if set.
    pub fn from_env() -> SdkResult<Self> {
        let token = std::env::var(network::ENV_BOT_TOKEN).map_err(|_| {
            SdkError::Validation(format!("{} is not set", network::ENV_BOT_TOKEN))
        })?;
        let mut builder = Self::new(&token);
        if let Ok(url) = std::env::var(network::ENV_API_URL) {
            builder = builder.base_url(&url);
        }
        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ignore `HTTP(S)_PROXY` environment settings.
    pub fn no_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    pub fn build(self) -> SdkResult<BotClient> {
        if self.token.trim().is_empty() {
            return Err(SdkError::Validation("bot token cannot be empty".to_string()));
        }
        // The token is spliced into the URL path unescaped.
        if !self.token.chars().all(is_token_char) {
            return Err(SdkError::Validation(
                "bot token may only contain [A-Za-z0-9:_-]".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base url cannot be empty".to_string()));
        }

        let mut http = client_builder(self.timeout);
        if self.no_proxy {
            http = http.no_proxy();
        }
        let client = http.build().map_err(TransportError::from)?;

        Ok(BotClient {
            http: BotHttp::from_client(&self.base_url, &self.token, client),
        })
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ':' | '_' | '-')
}

impl fmt::Debug for BotClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotClientBuilder")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("no_proxy", &self.no_proxy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = BotClient::builder("123:abc").build().unwrap();
        assert_eq!(client.http().base_url(), network::DEFAULT_API_URL);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = BotClient::builder("123:abc")
            .base_url("http://localhost:8081/")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.http().base_url(), "http://localhost:8081");
    }

    #[test]
    fn test_builder_rejects_empty_token() {
        let err = BotClient::builder("  ").build().unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_builder_rejects_url_breaking_token() {
        for token in ["123/abc", "1:a?b", "1:a#b", "1:a b", "1:a%2Fb", "1:ab\n", "1:é"] {
            let err = BotClient::builder(token).build().unwrap_err();
            assert!(matches!(err, SdkError::Validation(_)), "accepted {token:?}");
        }
    }

    #[test]
    fn test_builder_accepts_token_alphabet() {
        assert!(BotClient::builder("123456:AAH_x-Yz09").build().is_ok());
    }

    #[test]
    fn test_file_url() {
        let client = BotClient::builder("1:x").build().unwrap();
        let file = File {
            file_id: "AgAD".into(),
            file_path: Some("documents/file_3.pdf".into()),
            ..Default::default()
        };
        assert_eq!(
            client.file_url(&file).as_deref(),
            Some("https://api.telegram.org/file/bot1:x/documents/file_3.pdf")
        );
        assert!(client.file_url(&File::default()).is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = BotClient::builder("123:very-secret").build().unwrap();
        assert!(!format!("{:?}", client).contains("very-secret"));
        assert!(!format!("{:?}", BotClient::builder("123:very-secret")).contains("very-secret"));
    }
}
