use serde_json::Value;

/// The preset outcome of a `send_message` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresetReply {
    /// Resolve with this reply text.
    Text(String),
    /// Fail with `SendFailed`.
    Failure,
}

/// The preset outcome of an `upload_file` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresetUpload {
    /// Resolve with this receipt payload.
    Receipt(Value),
    /// Fail with `UploadFailed`.
    Failure,
}

impl PresetReply {
    /// Creates a successful reply.
    #[inline]
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }
}
