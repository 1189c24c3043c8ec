use chatpad_core::{Controller, ControllerBuilder, Locale};
use chatpad_http_remote::{ConfigError, HttpChatBackend, RemoteConfig};
use chatpad_remote::ChatBackend;

use crate::command::Command;
use crate::picker::{PickError, pick_file};

/// A session builder.
///
/// See [`Session`].
pub struct SessionBuilder<B> {
    controller_builder: ControllerBuilder<B>,
}

impl SessionBuilder<HttpChatBackend> {
    /// Creates a session builder talking to the service at `config`.
    #[inline]
    pub fn with_config(config: RemoteConfig) -> Self {
        Self::with_backend(HttpChatBackend::new(config))
    }

    /// Creates a session builder configured from the environment.
    #[inline]
    pub fn from_env() -> Result<Self, ConfigError> {
        RemoteConfig::from_env().map(Self::with_config)
    }
}

impl<B: ChatBackend> SessionBuilder<B> {
    /// Creates a session builder with a specified backend.
    #[inline]
    pub fn with_backend(backend: B) -> Self {
        let controller_builder = ControllerBuilder::with_backend(backend);
        Self { controller_builder }
    }

    /// Sets the language of the status strings.
    #[inline]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.controller_builder = self.controller_builder.with_locale(locale);
        self
    }

    /// Builds a new session.
    #[inline]
    pub fn build(self) -> Session<B> {
        Session {
            controller: self.controller_builder.build(),
        }
    }
}

/// What the front end should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// Leave.
    Quit,
}

/// A chat session, like a window that displays messages and has an input
/// box and an upload button.
///
/// The session owns the [`Controller`] and translates typed commands into
/// controller actions.
pub struct Session<B = HttpChatBackend> {
    controller: Controller<B>,
}

impl<B: ChatBackend> Session<B> {
    /// Returns the controller, for rendering its state.
    #[inline]
    pub fn controller(&self) -> &Controller<B> {
        &self.controller
    }

    /// Runs one command to completion.
    ///
    /// Submission failures are recorded in the controller state; only a
    /// file that cannot be picked is reported here.
    pub async fn run(&self, command: Command) -> Result<Flow, PickError> {
        match command {
            Command::Send(text) => {
                self.controller.set_draft_text(text);
                self.controller.submit_draft().await;
            }
            Command::Resend => self.controller.submit_draft().await,
            Command::SelectFile(path) => {
                let file = pick_file(&path).await?;
                self.controller.select_file(Some(file));
            }
            Command::Upload => self.controller.submit_pending_file().await,
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => {}
        }
        Ok(Flow::Continue)
    }
}

impl Session<HttpChatBackend> {
    /// Returns the base URL of the service.
    #[inline]
    pub fn base_url(&self) -> &str {
        self.controller.backend().config().base_url()
    }
}
