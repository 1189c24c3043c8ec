//! Conversation-related types.

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sender {
    /// The person typing into the client.
    User,
    /// The remote chatbot.
    Bot,
}

/// A message in the conversation. Messages never change once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Message {
    sender: Sender,
    text: String,
}

impl Message {
    pub(crate) fn user<S: Into<String>>(text: S) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub(crate) fn bot<S: Into<String>>(text: S) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    /// Returns the sender of this message.
    #[inline]
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Returns the text of this message.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Represents the conversation log.
///
/// The log only grows: messages are kept in the order they were appended
/// and are never edited, removed or reordered.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Returns the messages in insertion order.
    #[inline]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if nothing has been exchanged yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
