use serde::Serialize;

use super::Method;

/// `getChatMembersCount` — number of members in a chat.
#[derive(Debug, Clone, Serialize)]
pub struct GetChatMembersCount {
    pub chat_id: i64,
}

impl Method for GetChatMembersCount {
    const NAME: &'static str = "getChatMembersCount";
    type Response = i64;
}

/// `exportChatInviteLink` — generate a new invite link; the bot must be an
/// administrator with the appropriate rights.
#[derive(Debug, Clone, Serialize)]
pub struct ExportChatInviteLink {
    pub chat_id: i64,
}

impl Method for ExportChatInviteLink {
    const NAME: &'static str = "exportChatInviteLink";
    type Response = String;
}
