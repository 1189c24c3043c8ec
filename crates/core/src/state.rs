use chatpad_remote::Upload;

use crate::conversation::Conversation;

/// Everything the presentation layer needs to render a session.
#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    pub(crate) conversation: Conversation,
    pub(crate) draft_text: String,
    pub(crate) pending_file: Option<Upload>,
    pub(crate) is_busy: bool,
    pub(crate) last_error: Option<String>,
}

impl ConversationState {
    /// Returns the conversation log.
    #[inline]
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Returns the text currently in the input box.
    #[inline]
    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    /// Returns the file selected for upload, if any.
    #[inline]
    pub fn pending_file(&self) -> Option<&Upload> {
        self.pending_file.as_ref()
    }

    /// Returns `true` while a submission is in flight.
    ///
    /// The flag is advisory. Input controls should be disabled while it is
    /// set, but nothing prevents a second submission from being issued.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.is_busy
    }

    /// Returns the user-facing message of the last failed submission.
    #[inline]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
