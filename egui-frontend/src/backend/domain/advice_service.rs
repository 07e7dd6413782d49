//! # Advice Service
//!
//! Turns a chat transcript plus a new user message into the model's reply.
//! The service is stateless: every call re-sends the transcript it is given,
//! and provider failures never escape it. They are logged and replaced with
//! a fixed fallback reply.

use async_trait::async_trait;
use log::{error, info, warn};
use std::sync::Arc;
use thiserror::Error;

use shared::{ChatMessage, ChatRole};

/// Persona and safety directive sent with every request
pub const SYSTEM_INSTRUCTION: &str = "You are PawsomeCare AI, a professional and compassionate pet care expert. \
You provide advice on pet health, nutrition, behavior, and daily care. \
Always remind owners to consult a local veterinarian for medical emergencies or serious health concerns. \
Keep your tone warm, encouraging, and clear.";

/// Reply used when the provider answers without any text
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't process that request right now.";

/// Reply used when the provider call fails
pub const CONNECTION_FALLBACK: &str =
    "I'm having trouble connecting to my knowledge base. Please try again in a moment.";

/// Fixed sampling parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.8,
            top_k: 40,
        }
    }
}

/// One role-tagged turn as sent to the provider
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Provider-neutral advice request
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceRequest {
    /// Prior turns followed by the new user turn
    pub turns: Vec<AdviceTurn>,
    pub system_instruction: String,
    pub sampling: SamplingParams,
}

impl AdviceRequest {
    /// Map the transcript 1:1 and append the new user turn
    pub fn build(transcript: &[ChatMessage], new_user_text: &str) -> Self {
        let mut turns: Vec<AdviceTurn> = transcript
            .iter()
            .map(|m| AdviceTurn {
                role: m.role,
                text: m.content.clone(),
            })
            .collect();

        turns.push(AdviceTurn {
            role: ChatRole::User,
            text: new_user_text.to_string(),
        });

        Self {
            turns,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            sampling: SamplingParams::default(),
        }
    }
}

/// Failures raised by an advice provider
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("no API key configured for the advice provider")]
    MissingApiKey,

    /// Transport failure, carried as text so this layer stays HTTP-agnostic
    #[error("network error: {0}")]
    Network(String),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// External text-generation provider
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Generate a reply. `Ok(None)` means the provider answered without text.
    async fn generate(&self, request: &AdviceRequest) -> Result<Option<String>, AdviceError>;
}

/// Stateless gateway in front of the advice provider
#[derive(Clone)]
pub struct AdviceService {
    provider: Arc<dyn AdviceProvider>,
}

impl AdviceService {
    pub fn new(provider: Arc<dyn AdviceProvider>) -> Self {
        Self { provider }
    }

    /// Ask the provider for advice. Always resolves to displayable text.
    pub async fn get_advice(&self, transcript: &[ChatMessage], new_user_text: &str) -> String {
        let request = AdviceRequest::build(transcript, new_user_text);
        info!("Requesting advice with {} turns", request.turns.len());

        match self.provider.generate(&request).await {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => {
                warn!("Advice provider returned no text");
                EMPTY_REPLY_FALLBACK.to_string()
            }
            Err(e) => {
                error!("Advice provider error: {}", e);
                CONNECTION_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Provider stub that records requests and replays a canned outcome
    struct StubProvider {
        outcome: fn() -> Result<Option<String>, AdviceError>,
        requests: Mutex<Vec<AdviceRequest>>,
    }

    impl StubProvider {
        fn new(outcome: fn() -> Result<Option<String>, AdviceError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl AdviceProvider for StubProvider {
        async fn generate(&self, request: &AdviceRequest) -> Result<Option<String>, AdviceError> {
            self.requests.lock().unwrap().push(request.clone());
            (self.outcome)()
        }
    }

    fn transcript() -> Vec<ChatMessage> {
        vec![
            ChatMessage::model("Hi there!"),
            ChatMessage::user("My dog sneezes a lot"),
            ChatMessage::model("Sneezing can have many causes."),
        ]
    }

    #[tokio::test]
    async fn test_returns_provider_text_verbatim() {
        let provider = StubProvider::new(|| Ok(Some("  Brush twice a week.\n".to_string())));
        let service = AdviceService::new(provider.clone());

        let reply = service.get_advice(&transcript(), "How often should I brush?").await;

        assert_eq!(reply, "  Brush twice a week.\n");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_request_carries_transcript_and_new_turn() {
        let provider = StubProvider::new(|| Ok(Some("ok".to_string())));
        let service = AdviceService::new(provider.clone());

        service.get_advice(&transcript(), "What about allergies?").await;

        let requests = provider.requests.lock().unwrap();
        let request = &requests[0];
        assert_eq!(request.turns.len(), 4);
        assert_eq!(request.turns[0].role, ChatRole::Model);
        assert_eq!(request.turns[1].text, "My dog sneezes a lot");
        assert_eq!(request.turns[3].role, ChatRole::User);
        assert_eq!(request.turns[3].text, "What about allergies?");
        assert_eq!(request.system_instruction, SYSTEM_INSTRUCTION);
        assert_eq!(request.sampling.temperature, 0.7);
        assert_eq!(request.sampling.top_p, 0.8);
        assert_eq!(request.sampling.top_k, 40);
    }

    #[tokio::test]
    async fn test_empty_text_falls_back() {
        let service = AdviceService::new(StubProvider::new(|| Ok(Some(String::new()))));
        assert_eq!(service.get_advice(&[], "hello").await, EMPTY_REPLY_FALLBACK);

        let service = AdviceService::new(StubProvider::new(|| Ok(None)));
        assert_eq!(service.get_advice(&[], "hello").await, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_without_retry() {
        let provider = StubProvider::new(|| {
            Err(AdviceError::Status {
                status: 401,
                body: "API key not valid".to_string(),
            })
        });
        let service = AdviceService::new(provider.clone());

        let reply = service.get_advice(&transcript(), "Is chocolate safe?").await;

        assert_eq!(reply, CONNECTION_FALLBACK);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_network_error_falls_back() {
        let service = AdviceService::new(StubProvider::new(|| {
            Err(AdviceError::Network("connection refused".to_string()))
        }));
        assert_eq!(service.get_advice(&[], "hello").await, CONNECTION_FALLBACK);
    }

    #[tokio::test]
    async fn test_missing_key_falls_back() {
        let service = AdviceService::new(StubProvider::new(|| Err(AdviceError::MissingApiKey)));
        assert_eq!(service.get_advice(&[], "hello").await, CONNECTION_FALLBACK);
    }

    #[test]
    fn test_build_does_not_validate_alternation() {
        let transcript = vec![ChatMessage::user("one"), ChatMessage::user("two")];
        let request = AdviceRequest::build(&transcript, "three");
        let roles: Vec<ChatRole> = request.turns.iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![ChatRole::User; 3]);
    }
}
