//! Typed calls: one generic operation, many data-only method descriptors.
//!
//! A descriptor is a serializable parameter struct that names its remote
//! method and the shape of its `result`. [`crate::client::BotClient::call`]
//! does the rest: serialize → request → decode.

pub mod callback;
pub mod chat;
pub mod file;
pub mod webhook;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SdkResult;
use crate::request::RequestBody;
use crate::types::User;

pub use callback::AnswerCallbackQuery;
pub use chat::{ExportChatInviteLink, GetChatMembersCount};
pub use file::GetFile;
pub use webhook::SetWebhook;

/// A remote Bot API method.
pub trait Method: Serialize {
    /// Remote method name, appended to the endpoint (`.../bot<token>/<NAME>`).
    const NAME: &'static str;

    /// Shape of the envelope's `result` on success.
    type Response: DeserializeOwned;

    /// Request body for this call. JSON-serialized parameters by default.
    fn body(&self) -> SdkResult<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_vec(self)?))
    }
}

/// `getMe` — test the access token; returns the bot's own [`User`].
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct GetMe;

impl Method for GetMe {
    const NAME: &'static str = "getMe";
    type Response = User;

    fn body(&self) -> SdkResult<RequestBody> {
        Ok(RequestBody::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_me_sends_empty_body() {
        assert_eq!(GetMe.body().unwrap(), RequestBody::empty());
        assert_eq!(GetMe::NAME, "getMe");
    }
}
