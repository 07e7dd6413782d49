//! # Chat Session
//!
//! Two-phase state of the advice chat. `begin_send` moves the session into the
//! pending phase (user message appended, turn recorded); `resolve` is the only
//! way a model reply enters the transcript and moves the session back to idle.

use log::{debug, warn};
use shared::ChatMessage;

/// Greeting shown as the first model turn of every session
pub const GREETING: &str = "Hi there! I'm your PawsomeCare AI assistant. I can help with feeding guides, \
training tips, or general health questions for your pets. How can I help you today?";

/// A user turn waiting for its reply
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTurn {
    /// The message as typed
    pub user_text: String,
    /// Transcript before the user message was appended
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    pending: Option<PendingTurn>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::model(GREETING)],
            pending: None,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether `input` would be accepted by `begin_send` right now
    pub fn can_send(&self, input: &str) -> bool {
        !input.trim().is_empty() && self.pending.is_none()
    }

    /// Start a turn. Returns None (and changes nothing) for blank input or
    /// while another turn is in flight.
    pub fn begin_send(&mut self, input: &str) -> Option<PendingTurn> {
        if !self.can_send(input) {
            debug!("Rejected chat send (blank input or reply pending)");
            return None;
        }

        let turn = PendingTurn {
            user_text: input.to_string(),
            history: self.transcript.clone(),
        };
        self.transcript.push(ChatMessage::user(input));
        self.pending = Some(turn.clone());
        Some(turn)
    }

    /// Append the model's reply and leave the pending phase.
    /// A reply with nothing pending is dropped.
    pub fn resolve(&mut self, reply: String) {
        if self.pending.take().is_none() {
            warn!("Dropping advice reply with no pending turn");
            return;
        }
        self.transcript.push(ChatMessage::model(reply));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ChatRole;

    #[test]
    fn test_new_session_has_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.transcript(), &[ChatMessage::model(GREETING)]);
        assert!(!session.is_awaiting_response());
    }

    #[test]
    fn test_send_then_resolve_adds_two_turns() {
        let mut session = ChatSession::new();
        let before = session.transcript().len();

        let turn = session.begin_send("Safe foods for dogs?").expect("send accepted");
        assert_eq!(turn.history.len(), before);
        assert_eq!(session.transcript().len(), before + 1);
        assert!(session.is_awaiting_response());

        session.resolve("Carrots and plain rice are fine.".to_string());

        let transcript = session.transcript();
        assert_eq!(transcript.len(), before + 2);
        assert_eq!(transcript[before].role, ChatRole::User);
        assert_eq!(transcript[before + 1].role, ChatRole::Model);
        assert!(!session.is_awaiting_response());
    }

    #[test]
    fn test_blank_input_rejected() {
        let mut session = ChatSession::new();
        assert!(session.begin_send("").is_none());
        assert!(session.begin_send("   \n\t").is_none());
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_send_rejected_while_pending() {
        let mut session = ChatSession::new();
        session.begin_send("first").unwrap();

        assert!(session.begin_send("second").is_none());
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn test_resolve_without_pending_is_ignored() {
        let mut session = ChatSession::new();
        session.resolve("stray".to_string());
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_user_text_kept_verbatim() {
        let mut session = ChatSession::new();
        let turn = session.begin_send("  Kitten grooming tips ").unwrap();
        assert_eq!(turn.user_text, "  Kitten grooming tips ");
        assert_eq!(session.transcript()[1].content, "  Kitten grooming tips ");
    }
}
