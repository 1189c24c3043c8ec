mod busy;
#[cfg(test)]
mod tests;

use std::cell::{Ref, RefCell};

use chatpad_remote::{ChatBackend, Upload};

use crate::conversation::Message;
use crate::locale::Locale;
use crate::state::ConversationState;
use busy::BusyGuard;

/// [`Controller`] builder.
pub struct ControllerBuilder<B> {
    backend: B,
    locale: Locale,
}

impl<B: ChatBackend> ControllerBuilder<B> {
    /// Creates a new builder with the specified backend.
    #[inline]
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            locale: Locale::default(),
        }
    }

    /// Sets the language of the status strings.
    #[inline]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Builds the controller with an empty conversation.
    #[inline]
    pub fn build(self) -> Controller<B> {
        Controller {
            backend: self.backend,
            locale: self.locale,
            state: RefCell::default(),
        }
    }
}

/// Owns the state of one chat session and drives the backend on behalf
/// of the presentation layer.
///
/// All operations take `&self` and the state is never borrowed across an
/// await point, so the presentation layer can keep reading the state while
/// a submission is in flight. Submissions absorb every failure into
/// [`ConversationState::last_error`]; none of them return an error.
///
/// The controller is meant to live on a single thread. It has no timers or
/// background tasks, and a submission only makes progress while it is
/// being awaited.
pub struct Controller<B> {
    backend: B,
    locale: Locale,
    state: RefCell<ConversationState>,
}

impl<B: ChatBackend> Controller<B> {
    /// Creates a controller with the default locale.
    #[inline]
    pub fn new(backend: B) -> Self {
        ControllerBuilder::with_backend(backend).build()
    }

    /// Returns the backend requests are sent to.
    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Borrows the current state for rendering.
    ///
    /// A submission that completes while the returned borrow is alive
    /// panics, so don't hold it across an await point.
    #[inline]
    pub fn state(&self) -> Ref<'_, ConversationState> {
        self.state.borrow()
    }

    /// Returns `true` while a submission is in flight.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_busy
    }

    /// Returns the user-facing message of the last failed submission.
    #[inline]
    pub fn last_error(&self) -> Option<String> {
        self.state.borrow().last_error.clone()
    }

    /// Returns a copy of the conversation log.
    #[inline]
    pub fn messages(&self) -> Vec<Message> {
        self.state.borrow().conversation.messages().to_vec()
    }

    /// Replaces the draft text.
    #[inline]
    pub fn set_draft_text<S: Into<String>>(&self, text: S) {
        self.state.borrow_mut().draft_text = text.into();
    }

    /// Selects a file for upload, or clears the selection with `None`.
    #[inline]
    pub fn select_file(&self, file: Option<Upload>) {
        self.state.borrow_mut().pending_file = file;
    }

    /// Sends `text` and appends it together with the bot's reply.
    ///
    /// Blank text is ignored without touching the state. On failure the
    /// log is left as is, the draft is kept for another attempt and the
    /// last error is set.
    pub async fn submit_message(&self, text: &str) {
        if text.trim().is_empty() {
            trace!("ignoring a blank message");
            return;
        }

        let _busy = BusyGuard::acquire(&self.state);
        let result = self.backend.send_message(text).await;

        let mut state = self.state.borrow_mut();
        match result {
            Ok(reply) => {
                state.conversation.push(Message::user(text));
                state.conversation.push(Message::bot(reply));
                state.draft_text.clear();
            }
            Err(err) => {
                warn!("failed to send a message: {err}");
                state.last_error = Some(self.locale.send_failed().to_owned());
            }
        }
    }

    /// Submits the current draft text.
    pub async fn submit_draft(&self) {
        let draft = self.state.borrow().draft_text.clone();
        self.submit_message(&draft).await;
    }

    /// Uploads `file` and confirms it in the log.
    ///
    /// `None` is ignored without touching the state. Whatever the outcome,
    /// the selected file is cleared once the upload ends.
    pub async fn submit_file(&self, file: Option<Upload>) {
        let Some(file) = file else {
            trace!("no file to upload");
            return;
        };

        let mut busy = BusyGuard::acquire(&self.state);
        busy.clear_pending_file_on_release();
        let result = self.backend.upload_file(&file).await;

        let mut state = self.state.borrow_mut();
        match result {
            Ok(receipt) => {
                debug!("uploaded {}: {:?}", file.file_name(), receipt);
                let ack = self.locale.upload_succeeded();
                state.conversation.push(Message::bot(ack));
            }
            Err(err) => {
                warn!("failed to upload {}: {err}", file.file_name());
                state.last_error =
                    Some(self.locale.upload_failed().to_owned());
            }
        }
    }

    /// Submits the selected file, if any.
    pub async fn submit_pending_file(&self) {
        let file = self.state.borrow().pending_file.clone();
        self.submit_file(file).await;
    }
}
