//! The interactive chat session: setup prompts, then the read/reply loop.
//!
//! The runner is generic over its input, output and connector so the
//! whole lifecycle can be driven from memory in tests.

mod messages;


use std::io::Write;
use std::string::FromUtf8Error;

use gembot_ai::{Connector, Conversation, GeminiConfig};
use gembot_common::GembotError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use messages::*;

/// How a chat run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exit keyword or end of input in the chat loop.
    Farewell,
    /// Interrupt signal, or input closed during setup.
    Interrupted,
    /// No credential from the environment or the prompt.
    MissingCredential,
    /// The remote capability could not be initialized.
    SetupFailed,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Farewell | Self::Interrupted)
    }
}

/// One read from the user.
enum Input {
    Line(String),
    /// A line arrived but was not valid UTF-8; its bytes are consumed.
    Undecodable(FromUtf8Error),
    Eof,
    Interrupted,
}

/// Drives one chat session from banner to farewell.
pub struct ChatRunner<R, W, C> {
    input: R,
    output: W,
    connector: C,
    /// Client configuration minus the credential.
    template: GeminiConfig,
    env_credential: Option<String>,
    interrupt: CancellationToken,
    /// Overwrite the "thinking" line in place instead of leaving it.
    transient_status: bool,
}

impl<R, W, C> ChatRunner<R, W, C>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    C: Connector,
{
    pub fn new(
        input: R,
        output: W,
        connector: C,
        template: GeminiConfig,
        interrupt: CancellationToken,
    ) -> Self {
        Self {
            input,
            output,
            connector,
            template,
            env_credential: None,
            interrupt,
            transient_status: false,
        }
    }

    /// Credential found in the environment; when set, the prompt is skipped.
    pub fn with_env_credential(mut self, credential: Option<String>) -> Self {
        self.env_credential = credential.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn with_transient_status(mut self, transient: bool) -> Self {
        self.transient_status = transient;
        self
    }

    pub async fn run(mut self) -> Result<Outcome, GembotError> {
        self.say(BANNER_RULE)?;
        self.say(BANNER_TITLE)?;
        self.say(BANNER_RULE)?;

        let name = match self.ask(NAME_PROMPT).await? {
            Input::Line(name) => name,
            Input::Undecodable(e) => {
                warn!(error = %e, "name is not valid UTF-8");
                String::from_utf8_lossy(e.as_bytes()).trim().to_string()
            }
            Input::Eof | Input::Interrupted => return self.interrupted(),
        };
        let name = (!name.is_empty()).then_some(name);
        match name.as_deref() {
            Some(name) => self.say(&greeting(name))?,
            None => self.say(NO_NAME)?,
        }
        self.say(USAGE_HINT)?;

        let credential = match self.resolve_credential().await? {
            Input::Line(credential) if !credential.is_empty() => credential,
            Input::Line(_) | Input::Undecodable(_) => {
                warn!("no usable API key provided");
                self.say(MISSING_CREDENTIAL)?;
                return Ok(Outcome::MissingCredential);
            }
            Input::Eof | Input::Interrupted => return self.interrupted(),
        };

        let config = GeminiConfig {
            api_key: credential,
            ..self.template.clone()
        };
        debug!(?config, "opening conversation");

        let connected = tokio::select! {
            biased;
            _ = self.interrupt.cancelled() => None,
            result = self.connector.connect(config) => Some(result),
        };
        let mut conversation = match connected {
            None => return self.interrupted(),
            Some(Ok(conversation)) => conversation,
            Some(Err(e)) => {
                warn!(error = %e, "conversation setup failed");
                self.say(SETUP_FAILED)?;
                self.say(&format!("Details: {e}"))?;
                return Ok(Outcome::SetupFailed);
            }
        };

        let outcome = self.chat_loop(&mut conversation, name.as_deref()).await?;

        let tracker = conversation.session().tracker();
        info!(
            turns = conversation.session().turn_count(),
            calls = tracker.call_count(),
            tokens = tracker.total_tokens(),
            "conversation closed"
        );
        Ok(outcome)
    }

    async fn chat_loop(
        &mut self,
        conversation: &mut Conversation,
        name: Option<&str>,
    ) -> Result<Outcome, GembotError> {
        loop {
            let text = match self.ask(USER_PROMPT).await? {
                Input::Line(text) => text,
                Input::Undecodable(e) => {
                    warn!(error = %e, "input is not valid UTF-8");
                    self.say(&format!("An error occurred: input is not valid UTF-8: {e}"))?;
                    self.say(TRY_AGAIN)?;
                    continue;
                }
                Input::Eof => break,
                Input::Interrupted => return self.interrupted(),
            };

            if is_exit_keyword(&text) {
                break;
            }
            if text.is_empty() {
                continue;
            }

            self.show_thinking()?;
            let result = tokio::select! {
                biased;
                _ = self.interrupt.cancelled() => None,
                result = conversation.send(&text) => Some(result),
            };

            match result {
                None => return self.interrupted(),
                Some(Ok(reply)) => {
                    self.clear_thinking()?;
                    self.say(&format!("Bot: {reply}"))?;
                }
                Some(Err(e)) => {
                    warn!(error = %e, "turn failed");
                    self.clear_thinking()?;
                    self.say(&format!("An error occurred: {e}"))?;
                    self.say(TRY_AGAIN)?;
                }
            }
        }

        self.say(&farewell(name))?;
        Ok(Outcome::Farewell)
    }

    /// Environment first, then the interactive prompt.
    async fn resolve_credential(&mut self) -> Result<Input, GembotError> {
        if let Some(credential) = self.env_credential.clone() {
            debug!("API key taken from the environment");
            return Ok(Input::Line(credential));
        }
        self.ask(CREDENTIAL_PROMPT).await
    }

    /// Print `prompt` and wait for a trimmed line, end of input, or an interrupt.
    ///
    /// Lines are read as raw bytes so an undecodable line is skipped whole
    /// instead of failing the session.
    async fn ask(&mut self, prompt: &str) -> Result<Input, GembotError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        tokio::select! {
            biased;
            _ = self.interrupt.cancelled() => Ok(Input::Interrupted),
            read = self.input.read_until(b'\n', &mut line) => match read? {
                0 => Ok(Input::Eof),
                _ => match String::from_utf8(line) {
                    Ok(line) => Ok(Input::Line(line.trim().to_string())),
                    Err(e) => Ok(Input::Undecodable(e)),
                },
            },
        }
    }

    fn interrupted(&mut self) -> Result<Outcome, GembotError> {
        info!("interrupted by user");
        self.say(INTERRUPTED)?;
        Ok(Outcome::Interrupted)
    }

    fn show_thinking(&mut self) -> Result<(), GembotError> {
        if self.transient_status {
            write!(self.output, "{THINKING}")?;
            self.output.flush()?;
            Ok(())
        } else {
            self.say(THINKING)
        }
    }

    fn clear_thinking(&mut self) -> Result<(), GembotError> {
        if self.transient_status {
            write!(self.output, "{CLEAR_LINE}")?;
        }
        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<(), GembotError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }
}
