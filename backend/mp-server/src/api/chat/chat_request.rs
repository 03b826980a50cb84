use mp_ai::ChatTurn;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatContext {
    /// Overrides the stored pantry when present
    pub pantry_items: Option<Vec<String>>,
    pub previous_messages: Vec<ChatTurn>,
}

/// Body of POST /api/chat
#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    pub message: String,
    #[serde(default)]
    pub context: ChatContext,
}
