use serde::Serialize;

use super::Method;

/// `answerCallbackQuery` — reply to a callback query sent from an inline
/// keyboard. Returns `true` on success.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,

    /// Notification text, 0-200 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Show an alert instead of a top-of-chat notification.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub show_alert: bool,

    /// Seconds the result may be cached client-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<u32>,
}

impl AnswerCallbackQuery {
    /// Only the required parameter set.
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_alert(mut self) -> Self {
        self.show_alert = true;
        self
    }
}

impl Method for AnswerCallbackQuery {
    const NAME: &'static str = "answerCallbackQuery";
    type Response = bool;
}
