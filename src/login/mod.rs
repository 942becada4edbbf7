//! Login widget — verifying the identity payload a third-party redirect hands
//! back after "Log in with Telegram".
//!
//! ## Data-check string
//!
//! The signed data is every present field except `hash`, sorted by field
//! name, rendered as `key=value` and joined with `\n`:
//!
//! ```text
//! auth_date=1600000000
//! first_name=Ann
//! id=12345
//! ```
//!
//! `last_name`, `photo_url` and `username` are included only when non-empty.
//! Integers are rendered in plain base 10.
//!
//! ## Signature
//!
//! `hex(HMAC-SHA-256(key = SHA-256(bot_token), data_check_string))`, compared
//! against the claim's `hash`. See [`LoginWidget`].

pub mod widget;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};

pub use widget::LoginWidget;

pub const KEY_AUTH_DATE: &str = "auth_date";
pub const KEY_FIRST_NAME: &str = "first_name";
pub const KEY_HASH: &str = "hash";
pub const KEY_ID: &str = "id";
pub const KEY_LAST_NAME: &str = "last_name";
pub const KEY_PHOTO_URL: &str = "photo_url";
pub const KEY_USERNAME: &str = "username";

/// Identity fields plus the received hex digest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginClaim {
    pub id: i64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Unix seconds at which the user authenticated.
    pub auth_date: i64,
    /// Lowercase hex HMAC-SHA-256 digest.
    pub hash: String,
}

impl LoginClaim {
    /// Decode redirect query parameters, e.g.
    /// `id=12345&first_name=Ann&auth_date=1600000000&hash=...`.
    ///
    /// A leading `?` is tolerated. Unknown parameters are ignored.
    pub fn from_query(query: &str) -> SdkResult<Self> {
        serde_urlencoded::from_str(query.trim_start_matches('?'))
            .map_err(|e| SdkError::Validation(format!("Invalid login query: {}", e)))
    }

    /// The canonical string the widget signed.
    pub fn data_check_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = vec![
            (KEY_AUTH_DATE, self.auth_date.to_string()),
            (KEY_FIRST_NAME, self.first_name.clone()),
            (KEY_ID, self.id.to_string()),
        ];

        let optional = [
            (KEY_LAST_NAME, &self.last_name),
            (KEY_PHOTO_URL, &self.photo_url),
            (KEY_USERNAME, &self.username),
        ];
        for (key, value) in optional {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key, v.to_string()));
            }
        }

        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `auth_date` as a timestamp, if representable.
    pub fn auth_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.auth_date, 0)
    }
}
