//! Wire types of the chat service.

use serde::{Deserialize, Serialize};

pub const CHAT_PATH: &str = "/chat/chat";
pub const UPLOAD_PATH: &str = "/chat/upload";
pub const UPLOAD_FIELD: &str = "file";

#[derive(Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Deserialize)]
pub struct ChatReply {
    pub reply: String,
}
