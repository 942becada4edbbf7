//! HTTP transport layer — `BotHttp`, one round trip per call, no retries.

pub mod client;
pub mod envelope;

pub use client::BotHttp;
pub use envelope::Envelope;
