//! # Telegram Bot SDK
//!
//! A Rust client for the Telegram Bot API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Errors, network constants, request descriptor, typed method descriptors
//! 2. **Login** — Login widget claim + HMAC verification (no I/O)
//! 3. **HTTP** — `BotHttp`: endpoint construction, JSON / multipart bodies, envelope decoding
//! 4. **High-Level Client** — `BotClient` with a builder and the generic typed `call`
//!
//! Every call is a single attempt: no retries, no rate limiting, no update
//! polling loop. Failures come back as [`error::SdkError`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tgbot_sdk::prelude::*;
//!
//! let client = BotClient::builder("123456:ABC-DEF").build()?;
//!
//! let me = client.get_me().await?;
//! let ok = client
//!     .set_webhook(&SetWebhook::new("https://example.com/hook").with_certificate(pem))
//!     .await?;
//!
//! let widget = LoginWidget::new("123456:ABC-DEF");
//! let claim = LoginClaim::from_query(query)?;
//! if widget.check_authorization(Some(&claim))? { /* trusted */ }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Request descriptor: JSON payload or multipart upload.
pub mod request;

/// Result shapes used by the bundled method descriptors.
pub mod types;

/// Typed method descriptors.
pub mod methods;

// ── Layer 2: Login ───────────────────────────────────────────────────────────

/// Login widget verification.
pub mod login;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP transport and response envelope.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `BotClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::{
        ApiError, ResponseParameters, SdkError, SdkResult, TransportError, VerifyError,
    };

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Request descriptor
    pub use crate::request::{InputFile, RequestBody, Upload};

    // Types + methods
    pub use crate::methods::{
        AnswerCallbackQuery, ExportChatInviteLink, GetChatMembersCount, GetFile, GetMe, Method,
        SetWebhook,
    };
    pub use crate::types::{File, User};

    // Login
    pub use crate::login::{LoginClaim, LoginWidget};

    // HTTP client
    #[cfg(feature = "http")]
    pub use crate::client::{BotClient, BotClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::http::{BotHttp, Envelope};
}
