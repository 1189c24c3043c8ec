//! A chat backend talking to the chatbot service over HTTP.

#[macro_use]
extern crate tracing;

mod config;
mod proto;

use std::sync::Arc;

use chatpad_remote::{ChatBackend, Error, Upload, UploadReceipt};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use tracing::Instrument;

pub use config::{
    BASE_URL_ENV, ConfigError, RemoteConfig, RemoteConfigBuilder,
};
use proto::{CHAT_PATH, ChatReply, ChatRequest, UPLOAD_FIELD, UPLOAD_PATH};

/// HTTP implementation of [`ChatBackend`].
///
/// Every transport failure is logged here and replaced by the matching
/// domain error before it reaches the caller.
#[derive(Clone, Debug)]
pub struct HttpChatBackend {
    client: Client,
    config: Arc<RemoteConfig>,
}

impl HttpChatBackend {
    /// Creates a new `HttpChatBackend` with the given configuration.
    #[inline]
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }

    /// Returns the configuration in use.
    #[inline]
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }
}

impl ChatBackend for HttpChatBackend {
    fn send_message(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<String, Error>> + Send + 'static {
        let resp_fut = self
            .client
            .post(self.config.endpoint(CHAT_PATH))
            .json(&ChatRequest { message: text })
            .send();

        async move {
            let resp = resp_fut
                .await
                .and_then(Response::error_for_status)
                .map_err(|err| {
                    error!("message request failed: {err}");
                    Error::send_failed()
                })?;

            let reply: ChatReply = resp.json().await.map_err(|err| {
                error!("unreadable chat reply: {err}");
                Error::send_failed()
            })?;
            trace!("got a reply: {:?}", reply.reply);
            Ok(reply.reply)
        }
        .instrument(debug_span!("send message"))
    }

    fn upload_file(
        &self,
        file: &Upload,
    ) -> impl Future<Output = Result<UploadReceipt, Error>> + Send + 'static
    {
        let span = debug_span!("upload file", file = %file.file_name());
        let resp_fut = multipart_form(file).map(|form| {
            self.client
                .post(self.config.endpoint(UPLOAD_PATH))
                .multipart(form)
                .send()
        });

        async move {
            let resp_fut = resp_fut.map_err(|err| {
                error!("cannot build upload form: {err}");
                Error::upload_failed()
            })?;
            let resp = resp_fut
                .await
                .and_then(Response::error_for_status)
                .map_err(|err| {
                    error!("upload request failed: {err}");
                    Error::upload_failed()
                })?;

            let body = resp.text().await.map_err(|err| {
                error!("unreadable upload response: {err}");
                Error::upload_failed()
            })?;
            debug!("upload response: {body}");
            Ok(UploadReceipt::from_body(&body))
        }
        .instrument(span)
    }
}

fn multipart_form(file: &Upload) -> reqwest::Result<Form> {
    let content = file.content().clone();
    let len = content.len() as u64;
    let part = Part::stream_with_length(content, len)
        .file_name(file.file_name().to_owned())
        .mime_str(file.mime().as_ref())?;
    Ok(Form::new().part(UPLOAD_FIELD, part))
}
