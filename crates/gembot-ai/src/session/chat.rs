//! Async chat method for Session.

use tracing::debug;

use crate::{AiClient, AiError, Message};

use super::manager::Session;

impl Session {
    /// Send a user message and return the assistant's reply.
    ///
    /// The exchange is appended to the history only when the call
    /// succeeds; a failed call leaves the session exactly as it was.
    pub async fn chat(
        &mut self,
        client: &dyn AiClient,
        user_message: impl Into<String>,
    ) -> Result<String, AiError> {
        let pending = Message::user(user_message);
        let messages = self.build_messages(&pending);

        let response = client.send_message(&messages).await?;
        self.tracker.record(&response.usage);

        self.messages.push(pending);
        self.messages.push(Message::assistant(response.content.clone()));
        debug!(
            provider = %self.provider,
            turns = self.turn_count(),
            tokens = response.usage.total_tokens(),
            "turn recorded"
        );

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::{AiResponse, Role, TokenUsage};

    use super::*;

    /// Replays canned results and remembers every request it saw.
    struct ScriptedClient {
        replies: Mutex<Vec<Result<String, AiError>>>,
        seen: Mutex<Vec<Vec<Message>>>,
    }

    impl ScriptedClient {
        fn new(mut replies: Vec<Result<String, AiError>>) -> Self {
            replies.reverse();
            Self {
                replies: Mutex::new(replies),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AiClient for ScriptedClient {
        async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
            self.seen.lock().unwrap().push(messages.to_vec());
            let next = self
                .replies
                .lock()
                .unwrap()
                .pop()
                .expect("no scripted reply left");
            next.map(|content| AiResponse {
                content,
                usage: TokenUsage {
                    input_tokens: 3,
                    output_tokens: 2,
                },
            })
        }
    }

    #[tokio::test]
    async fn successful_turn_is_recorded() {
        let client = ScriptedClient::new(vec![Ok("Hi Ada".into())]);
        let mut session = Session::new("gemini");

        let reply = session.chat(&client, "Hello").await.unwrap();

        assert_eq!(reply, "Hi Ada");
        assert_eq!(
            session.messages(),
            &[Message::user("Hello"), Message::assistant("Hi Ada")]
        );
        assert_eq!(session.turn_count(), 1);
        assert_eq!(session.tracker().total_tokens(), 5);
    }

    #[tokio::test]
    async fn failed_turn_leaves_history_untouched() {
        let client = ScriptedClient::new(vec![
            Ok("first".into()),
            Err(AiError::Network("connection reset".into())),
            Ok("third".into()),
        ]);
        let mut session = Session::new("gemini");

        session.chat(&client, "one").await.unwrap();
        let err = session.chat(&client, "two").await.unwrap_err();
        assert!(matches!(err, AiError::Network(_)));
        assert_eq!(session.turn_count(), 1);
        assert_eq!(session.tracker().call_count(), 1);

        session.chat(&client, "three").await.unwrap();
        let seen = client.seen.lock().unwrap();
        // The third request carries turn one but not the failed "two".
        let contents: Vec<&str> = seen[2].iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "first", "three"]);
    }

    #[tokio::test]
    async fn system_prompt_leads_every_request() {
        let client = ScriptedClient::new(vec![Ok("a".into()), Ok("b".into())]);
        let mut session = Session::new("gemini").with_system_prompt("Be brief.");

        session.chat(&client, "x").await.unwrap();
        session.chat(&client, "y").await.unwrap();

        let seen = client.seen.lock().unwrap();
        for request in seen.iter() {
            assert_eq!(request[0].role, Role::System);
            assert_eq!(request[0].content, "Be brief.");
        }
        // The system prompt is not part of the stored history.
        assert!(session.messages().iter().all(|m| m.role != Role::System));
    }
}
