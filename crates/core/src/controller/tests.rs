use std::future::poll_fn;
use std::pin::pin;
use std::task::Poll;

use chatpad_remote::Upload;
use chatpad_test_remote::{
    PresetReply, PresetUpload, TestChatBackend, accepting_uploads, replying,
};
use serde_json::json;
use tokio::task::yield_now;

use crate::conversation::{Message, Sender};
use crate::{Controller, ControllerBuilder, Locale};

fn report() -> Upload {
    Upload::new("report.pdf", "%PDF-1.4")
}

fn failing_backend() -> TestChatBackend {
    let mut backend = TestChatBackend::default();
    backend.add_reply(PresetReply::Failure);
    backend.add_upload(PresetUpload::Failure);
    backend
}

fn summary(messages: &[Message]) -> Vec<(Sender, &str)> {
    messages.iter().map(|m| (m.sender(), m.text())).collect()
}

#[tokio::test]
async fn test_send_success() {
    let backend = replying("Hi there");
    let controller = Controller::new(backend.clone());
    controller.set_draft_text("Hello");

    controller.submit_draft().await;

    let state = controller.state();
    assert_eq!(
        summary(state.conversation().messages()),
        [(Sender::User, "Hello"), (Sender::Bot, "Hi there")]
    );
    assert_eq!(state.draft_text(), "");
    assert_eq!(state.last_error(), None);
    assert!(!state.is_busy());
    assert_eq!(backend.sent_messages(), ["Hello"]);
}

#[tokio::test]
async fn test_send_failure_keeps_draft() {
    let controller = Controller::new(failing_backend());
    controller.set_draft_text("Hello");

    controller.submit_draft().await;

    let state = controller.state();
    assert!(state.conversation().is_empty());
    assert_eq!(state.last_error(), Some("message send failed"));
    assert_eq!(state.draft_text(), "Hello");
    assert!(!state.is_busy());
}

#[tokio::test]
async fn test_retry_after_failure() {
    let mut backend = TestChatBackend::default();
    backend.add_reply(PresetReply::Failure);
    backend.add_reply(PresetReply::text("Hi there"));
    let controller = Controller::new(backend.clone());
    controller.set_draft_text("Hello");

    controller.submit_draft().await;
    assert!(controller.last_error().is_some());
    controller.submit_draft().await;

    assert_eq!(controller.last_error(), None);
    assert_eq!(controller.messages().len(), 2);
    assert_eq!(backend.sent_messages(), ["Hello", "Hello"]);
}

#[tokio::test]
async fn test_blank_message_is_ignored() {
    let backend = failing_backend();
    let controller = Controller::new(backend.clone());
    controller.submit_file(Some(report())).await;
    controller.set_draft_text("   ");

    for text in ["", "   ", "\n\t"] {
        controller.submit_message(text).await;
    }
    controller.submit_draft().await;

    let state = controller.state();
    assert!(backend.sent_messages().is_empty());
    assert!(state.conversation().is_empty());
    assert_eq!(state.draft_text(), "   ");
    // The error of the earlier upload is untouched.
    assert_eq!(state.last_error(), Some("file upload failed"));
}

#[tokio::test]
async fn test_upload_success() {
    let backend = accepting_uploads(json!({ "document_id": "abc" }));
    let controller = Controller::new(backend.clone());
    controller.select_file(Some(report()));

    controller.submit_pending_file().await;

    let state = controller.state();
    assert_eq!(
        summary(state.conversation().messages()),
        [(Sender::Bot, "file uploaded successfully")]
    );
    assert_eq!(state.pending_file(), None);
    assert_eq!(state.last_error(), None);
    assert!(!state.is_busy());
    assert_eq!(backend.uploaded_files(), [report()]);
}

#[tokio::test]
async fn test_upload_failure_clears_file() {
    let controller = Controller::new(failing_backend());
    controller.select_file(Some(report()));

    controller.submit_pending_file().await;

    let state = controller.state();
    assert!(state.conversation().is_empty());
    assert_eq!(state.last_error(), Some("file upload failed"));
    assert_eq!(state.pending_file(), None);
    assert!(!state.is_busy());
}

#[tokio::test]
async fn test_missing_file_is_ignored() {
    let mut backend = accepting_uploads(json!({}));
    backend.add_reply(PresetReply::Failure);
    let controller = Controller::new(backend.clone());
    controller.submit_message("Hello").await;

    controller.submit_pending_file().await;
    controller.submit_file(None).await;

    assert!(backend.uploaded_files().is_empty());
    let state = controller.state();
    assert!(state.conversation().is_empty());
    assert_eq!(state.last_error(), Some("message send failed"));
    assert_eq!(state.pending_file(), None);
    assert!(!state.is_busy());
    drop(state);

    // A selected file stays selected when `None` is submitted.
    controller.select_file(Some(report()));
    controller.submit_file(None).await;
    let state = controller.state();
    assert_eq!(state.pending_file(), Some(&report()));
    assert_eq!(state.last_error(), Some("message send failed"));
    assert!(!state.is_busy());
    assert!(backend.uploaded_files().is_empty());
}

#[tokio::test]
async fn test_busy_while_in_flight() {
    let mut backend = replying("Hi there");
    let gate = backend.install_gate();
    let controller = Controller::new(backend);
    assert!(!controller.is_busy());

    let submit = controller.submit_message("Hello");
    assert!(!controller.is_busy());
    let observe = async {
        yield_now().await;
        assert!(controller.is_busy());
        assert!(controller.state().conversation().is_empty());
        gate.release(1);
    };
    tokio::join!(submit, observe);

    assert!(!controller.is_busy());
    assert_eq!(controller.messages().len(), 2);
}

#[tokio::test]
async fn test_error_cleared_when_submission_starts() {
    let mut backend = failing_backend();
    backend.add_reply(PresetReply::text("ok"));
    let gate = backend.install_gate();
    gate.release(1);
    let controller = Controller::new(backend);

    controller.submit_message("first").await;
    assert!(controller.last_error().is_some());

    let submit = controller.submit_message("second");
    let observe = async {
        yield_now().await;
        assert!(controller.is_busy());
        assert_eq!(controller.last_error(), None);
        gate.release(1);
    };
    tokio::join!(submit, observe);
}

#[tokio::test]
async fn test_dropped_submission_releases_busy() {
    let mut backend = accepting_uploads(json!({}));
    let _gate = backend.install_gate();
    let controller = Controller::new(backend);
    controller.select_file(Some(report()));

    {
        let mut upload = pin!(controller.submit_pending_file());
        let pending =
            poll_fn(|cx| Poll::Ready(upload.as_mut().poll(cx).is_pending()))
                .await;
        assert!(pending);
        assert!(controller.is_busy());
    }

    let state = controller.state();
    assert!(!state.is_busy());
    assert_eq!(state.pending_file(), None);
    assert!(state.conversation().is_empty());
}

#[tokio::test]
async fn test_busy_flag_is_advisory() {
    let mut backend = TestChatBackend::default();
    backend.add_reply(PresetReply::text("re: one"));
    backend.add_reply(PresetReply::text("re: two"));
    let gate = backend.install_gate();
    let controller = Controller::new(backend.clone());

    let first = controller.submit_message("one");
    let second = controller.submit_message("two");
    let observe = async {
        yield_now().await;
        // Nothing stopped the second submission from reaching the backend.
        let mut sent = backend.sent_messages();
        sent.sort();
        assert_eq!(sent, ["one", "two"]);
        assert!(controller.is_busy());

        gate.release(1);
        loop {
            let len = controller.state().conversation().len();
            if len == 2 {
                break;
            }
            yield_now().await;
        }
        // One request is still held by the gate, yet the flag is down.
        assert!(!controller.is_busy());
        gate.release(1);
    };
    tokio::join!(first, second, observe);

    let messages = controller.messages();
    let mut pairs: Vec<_> = messages
        .chunks(2)
        .map(|pair| (pair[0].text(), pair[1].text()))
        .collect();
    pairs.sort();
    assert_eq!(pairs, [("one", "re: one"), ("two", "re: two")]);
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn test_spanish_strings() {
    let mut backend = failing_backend();
    backend.add_upload(PresetUpload::Receipt(json!({})));
    let controller = ControllerBuilder::with_backend(backend)
        .with_locale(Locale::Spanish)
        .build();

    controller.submit_message("Hola").await;
    assert_eq!(
        controller.last_error().as_deref(),
        Some("Error al enviar el mensaje")
    );

    controller.submit_file(Some(report())).await;
    assert_eq!(
        controller.last_error().as_deref(),
        Some("Error al cargar el archivo")
    );

    controller.submit_file(Some(report())).await;
    assert_eq!(
        summary(&controller.messages()),
        [(Sender::Bot, "Archivo subido con éxito")]
    );
}
