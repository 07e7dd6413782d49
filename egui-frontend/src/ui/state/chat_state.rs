//! # Chat UI State
//!
//! Holds the advice chat session, the input box and the channel an in-flight
//! advice request answers on.
//!
//! ## Flow:
//! 1. `start_request()` moves the session into its pending phase and spawns the
//!    gateway call on the app's runtime
//! 2. the task sends the reply over an mpsc channel and asks egui to repaint
//! 3. `poll_reply()` runs every frame on the UI thread and resolves the session
//!
//! Only the UI thread touches the session.

use eframe::egui;
use log::{debug, error};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use tokio::runtime::Runtime;

use crate::backend::domain::{AdviceService, ChatSession, CONNECTION_FALLBACK};

#[derive(Debug, Default)]
pub struct ChatUiState {
    pub session: ChatSession,

    /// Current contents of the message box
    pub input: String,

    /// Receiving end for the reply of the in-flight request
    reply_rx: Option<Receiver<String>>,
}

impl ChatUiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.session.is_awaiting_response()
    }

    pub fn can_send(&self) -> bool {
        self.session.can_send(&self.input)
    }

    /// Send the current input. Returns false when the session rejects it
    /// (blank input or a reply still pending); nothing changes in that case.
    pub fn start_request(
        &mut self,
        runtime: &Runtime,
        advice_service: &AdviceService,
        ctx: &egui::Context,
    ) -> bool {
        let Some(turn) = self.session.begin_send(&self.input) else {
            return false;
        };
        self.input.clear();

        let (tx, rx) = mpsc::channel();
        self.reply_rx = Some(rx);

        let advice_service = advice_service.clone();
        let ctx = ctx.clone();
        runtime.spawn(async move {
            let reply = advice_service
                .get_advice(&turn.history, &turn.user_text)
                .await;
            // Receiver is gone when the app was closed; the reply is dropped
            if tx.send(reply).is_err() {
                debug!("Advice reply arrived after the chat was closed");
            }
            ctx.request_repaint();
        });

        true
    }

    /// Apply a finished reply, if any. Returns true when the transcript changed.
    pub fn poll_reply(&mut self) -> bool {
        let Some(rx) = &self.reply_rx else {
            return false;
        };

        let reply = match rx.try_recv() {
            Ok(reply) => reply,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                error!("Advice task ended without a reply");
                CONNECTION_FALLBACK.to_string()
            }
        };

        self.reply_rx = None;
        self.session.resolve(reply);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::{AdviceError, AdviceProvider, AdviceRequest};
    use async_trait::async_trait;
    use shared::ChatRole;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    struct EchoProvider;

    #[async_trait]
    impl AdviceProvider for EchoProvider {
        async fn generate(&self, request: &AdviceRequest) -> Result<Option<String>, AdviceError> {
            let last = request.turns.last().map(|t| t.text.clone()).unwrap_or_default();
            Ok(Some(format!("You asked: {}", last)))
        }
    }

    fn runtime() -> Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap()
    }

    fn wait_for_reply(chat: &mut ChatUiState) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !chat.poll_reply() {
            assert!(Instant::now() < deadline, "reply never arrived");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_send_and_poll_round_trip() {
        let runtime = runtime();
        let service = AdviceService::new(Arc::new(EchoProvider));
        let ctx = egui::Context::default();
        let mut chat = ChatUiState::new();

        chat.input = "Training basics".to_string();
        assert!(chat.start_request(&runtime, &service, &ctx));
        assert!(chat.input.is_empty());
        assert!(chat.is_awaiting_response());
        assert!(!chat.can_send());

        wait_for_reply(&mut chat);

        let transcript = chat.session.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[2].role, ChatRole::Model);
        assert_eq!(transcript[2].content, "You asked: Training basics");
        assert!(!chat.is_awaiting_response());
    }

    #[test]
    fn test_blank_input_is_not_sent() {
        let runtime = runtime();
        let service = AdviceService::new(Arc::new(EchoProvider));
        let ctx = egui::Context::default();
        let mut chat = ChatUiState::new();

        chat.input = "  ".to_string();
        assert!(!chat.start_request(&runtime, &service, &ctx));
        assert_eq!(chat.input, "  ");
        assert_eq!(chat.session.transcript().len(), 1);
        assert!(!chat.poll_reply());
    }

    #[test]
    fn test_second_send_rejected_while_pending() {
        let runtime = runtime();
        let service = AdviceService::new(Arc::new(EchoProvider));
        let ctx = egui::Context::default();
        let mut chat = ChatUiState::new();

        chat.input = "Safe foods for dogs?".to_string();
        assert!(chat.start_request(&runtime, &service, &ctx));
        chat.input = "Kitten grooming tips".to_string();
        assert!(!chat.start_request(&runtime, &service, &ctx));
        assert_eq!(chat.input, "Kitten grooming tips");

        wait_for_reply(&mut chat);
        assert_eq!(chat.session.transcript().len(), 3);
    }

    #[test]
    fn test_disconnected_channel_falls_back() {
        let mut chat = ChatUiState::new();
        assert!(chat.session.begin_send("hello").is_some());
        let (tx, rx) = mpsc::channel::<String>();
        chat.reply_rx = Some(rx);
        drop(tx);

        assert!(chat.poll_reply());
        let last = chat.session.transcript().last().unwrap();
        assert_eq!(last.content, CONNECTION_FALLBACK);
        assert!(!chat.is_awaiting_response());
    }
}
