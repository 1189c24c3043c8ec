//! A local fake chat backend for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chatpad_remote::{ChatBackend, Error, Upload, UploadReceipt};
use serde_json::Value;
use tokio::sync::Semaphore;
use tokio::time::sleep;

pub use preset::*;

#[derive(Default)]
struct Script {
    replies: VecDeque<PresetReply>,
    uploads: VecDeque<PresetUpload>,
    sent_messages: Vec<String>,
    uploaded_files: Vec<Upload>,
}

/// Holds requests of a [`TestChatBackend`] until permits are released.
///
/// Requests are admitted in the order they were issued.
#[derive(Clone)]
pub struct Gate(Arc<Semaphore>);

impl Gate {
    /// Lets `count` more requests through.
    #[inline]
    pub fn release(&self, count: usize) {
        self.0.add_permits(count);
    }
}

/// A local fake chat backend for testing purpose.
///
/// Before sending requests, you need to set up the script, which is how the
/// backend should answer each call. Outcomes are consumed in call order,
/// separately for messages and uploads. When the script runs out, calls
/// fail.
///
/// Clones share the script and the request record, so a test can keep one
/// clone to inspect what the code under test sent.
///
/// The request is recorded and its outcome picked as soon as the backend
/// method is called, before the returned future is polled.
#[derive(Clone, Default)]
pub struct TestChatBackend {
    script: Arc<Mutex<Script>>,
    delay: Option<Duration>,
    gate: Option<Gate>,
}

impl TestChatBackend {
    #[inline]
    pub fn add_reply(&mut self, preset: PresetReply) {
        self.script().replies.push_back(preset);
    }

    #[inline]
    pub fn add_upload(&mut self, preset: PresetUpload) {
        self.script().uploads.push_back(preset);
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Makes every request wait for a permit from the returned gate.
    pub fn install_gate(&mut self) -> Gate {
        let gate = Gate(Arc::new(Semaphore::new(0)));
        self.gate = Some(gate.clone());
        gate
    }

    /// Returns the texts passed to `send_message`, in call order.
    pub fn sent_messages(&self) -> Vec<String> {
        self.script().sent_messages.clone()
    }

    /// Returns the files passed to `upload_file`, in call order.
    pub fn uploaded_files(&self) -> Vec<Upload> {
        self.script().uploaded_files.clone()
    }

    fn script(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().expect("script lock is poisoned")
    }

    fn hold(&self) -> impl Future<Output = ()> + Send + 'static {
        let delay = self.delay;
        let gate = self.gate.clone();
        async move {
            if let Some(Gate(semaphore)) = gate {
                semaphore
                    .acquire()
                    .await
                    .expect("gate is never closed")
                    .forget();
            }
            if let Some(delay) = delay {
                sleep(delay).await;
            }
        }
    }
}

impl ChatBackend for TestChatBackend {
    fn send_message(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<String, Error>> + Send + 'static {
        let preset = {
            let mut script = self.script();
            script.sent_messages.push(text.to_owned());
            script.replies.pop_front()
        };
        let hold = self.hold();
        async move {
            hold.await;
            match preset {
                Some(PresetReply::Text(reply)) => Ok(reply),
                Some(PresetReply::Failure) | None => Err(Error::send_failed()),
            }
        }
    }

    fn upload_file(
        &self,
        file: &Upload,
    ) -> impl Future<Output = Result<UploadReceipt, Error>> + Send + 'static
    {
        let preset = {
            let mut script = self.script();
            script.uploaded_files.push(file.clone());
            script.uploads.pop_front()
        };
        let hold = self.hold();
        async move {
            hold.await;
            match preset {
                Some(PresetUpload::Receipt(value)) => Ok(UploadReceipt(value)),
                Some(PresetUpload::Failure) | None => {
                    Err(Error::upload_failed())
                }
            }
        }
    }
}

/// Creates a backend whose only script entry is a successful reply.
pub fn replying<S: Into<String>>(reply: S) -> TestChatBackend {
    let mut backend = TestChatBackend::default();
    backend.add_reply(PresetReply::text(reply));
    backend
}

/// Creates a backend whose only script entry is an accepted upload.
pub fn accepting_uploads(receipt: Value) -> TestChatBackend {
    let mut backend = TestChatBackend::default();
    backend.add_upload(PresetUpload::Receipt(receipt));
    backend
}
