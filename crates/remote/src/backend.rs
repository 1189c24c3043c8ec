use serde_json::Value;

use crate::error::Error;
use crate::upload::Upload;

/// The opaque payload returned by the service after an upload.
///
/// Nothing in the chat flow consumes it yet; it is kept so callers can
/// inspect whatever the service reports about the stored file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadReceipt(pub Value);

impl UploadReceipt {
    /// Wraps a raw response body. Bodies that are not JSON are kept as a
    /// JSON string.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(value) => Self(value),
            Err(_) => Self(Value::String(body.to_owned())),
        }
    }
}

/// A type that represents the remote chatbot service.
///
/// Implementors map every failure to one of the two domain error kinds:
/// [`send_message`](Self::send_message) fails with
/// [`ErrorKind::SendFailed`](crate::ErrorKind::SendFailed), and
/// [`upload_file`](Self::upload_file) fails with
/// [`ErrorKind::UploadFailed`](crate::ErrorKind::UploadFailed).
///
/// The returned futures own everything they need, so a caller can issue a
/// request and keep mutating its own state while awaiting it.
pub trait ChatBackend: Send + Sync {
    /// Sends a message and resolves to the reply text.
    fn send_message(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<String, Error>> + Send + 'static;

    /// Uploads a file and resolves to the service's receipt.
    fn upload_file(
        &self,
        file: &Upload,
    ) -> impl Future<Output = Result<UploadReceipt, Error>> + Send + 'static;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_receipt_from_body() {
        assert_eq!(
            UploadReceipt::from_body(r#"{"id":"doc-1"}"#),
            UploadReceipt(json!({ "id": "doc-1" }))
        );
        assert_eq!(
            UploadReceipt::from_body("stored"),
            UploadReceipt(json!("stored"))
        );
    }
}
