//! Capability factory: explicit configuration in, open conversation out.

use async_trait::async_trait;
use tracing::info;

use crate::{AiClient, AiError, GeminiClient, GeminiConfig, Session};

/// An open conversation: the client plus the history it has accumulated.
pub struct Conversation {
    client: Box<dyn AiClient>,
    session: Session,
}

impl Conversation {
    pub fn new(client: Box<dyn AiClient>, session: Session) -> Self {
        Self { client, session }
    }

    /// Forward one user message and return the reply text.
    pub async fn send(&mut self, text: &str) -> Result<String, AiError> {
        self.session.chat(self.client.as_ref(), text).await
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Opens conversations against a remote capability.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, config: GeminiConfig) -> Result<Conversation, AiError>;
}

/// Connects to the Gemini API.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeminiConnector;

#[async_trait]
impl Connector for GeminiConnector {
    async fn connect(&self, config: GeminiConfig) -> Result<Conversation, AiError> {
        let mut session = Session::new("gemini");
        if let Some(ref instruction) = config.system_instruction {
            session = session.with_system_prompt(instruction.clone());
        }

        let verify = config.verify_on_connect;
        let client = GeminiClient::new(config)?;
        if verify {
            client.verify().await?;
        }

        info!(model = %client.config().model, "conversation opened");
        Ok(Conversation::new(Box::new(client), session))
    }
}
