//! User-facing text of the chat session.

pub(super) const BANNER_RULE: &str = "---------------------------------";
pub(super) const BANNER_TITLE: &str = " Welcome to the Gemini Chatbot! Ask Me Anything!";

pub(super) const NAME_PROMPT: &str = "Bot: Before we begin, what's your name? ";
pub(super) const NO_NAME: &str = "Bot: No name provided, proceeding without a personalized greeting.";
pub(super) const USAGE_HINT: &str =
    "\nYou can start chatting. Type 'quit', 'exit', or 'bye' to end the conversation.";

pub(super) const CREDENTIAL_PROMPT: &str = "Please enter your Gemini API Key: ";
pub(super) const MISSING_CREDENTIAL: &str = "\nERROR: API Key not provided. Exiting.";
pub(super) const SETUP_FAILED: &str =
    "\nERROR: Failed to configure the model. Please check your API key and network connection.";

pub(super) const USER_PROMPT: &str = "\nYou: ";
pub(super) const THINKING: &str = "\nBot: Thinking...";
pub(super) const TRY_AGAIN: &str = "Please try again.";
pub(super) const INTERRUPTED: &str = "\n\nExiting chatbot. Goodbye!";

/// Erases the current terminal line (carriage return + clear to end).
pub(super) const CLEAR_LINE: &str = "\r\x1b[K";

/// Words that end the conversation, compared case-insensitively.
pub const EXIT_KEYWORDS: [&str; 3] = ["quit", "exit", "bye"];

/// Whether `input` (already trimmed) is exactly one of the exit keywords.
pub fn is_exit_keyword(input: &str) -> bool {
    EXIT_KEYWORDS
        .iter()
        .any(|keyword| input.eq_ignore_ascii_case(keyword))
}

pub(super) fn greeting(name: &str) -> String {
    format!("Bot: Hello, {name}! I'm ready to chat.")
}

pub(super) fn farewell(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("\nBot: Goodbye, {name}! Have a great day."),
        None => "\nBot: Goodbye! Have a great day.".to_string(),
    }
}
