//! Shared constants used across the application

/// Endpoint used when neither the command line, the environment, nor the
/// config file names one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/chat";

/// Environment variable that overrides the configured endpoint.
pub const ENDPOINT_ENV_VAR: &str = "INTELLICOURSE_ENDPOINT";

/// First bot message of every session.
pub const DEFAULT_GREETING: &str = "👋 Hi! Ask me anything about your courses.";

/// Shown when the server replies without a usable `answer`.
pub const NO_ANSWER_TEXT: &str = "⚠️ No answer received.";

/// Shown for every failed request, whatever the cause.
pub const REQUEST_FAILED_TEXT: &str = "❌ Error contacting server.";

pub const THINKING_TEXT: &str = "🤖 Thinking...";

pub const INPUT_PLACEHOLDER: &str = "Type your question...";

pub const PRODUCT_NAME: &str = "IntelliCourse";

/// Terminal width below which the sidebar is hidden.
pub const SIDEBAR_MIN_TERMINAL_WIDTH: u16 = 80;
pub const SIDEBAR_WIDTH: u16 = 26;
