use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::gateway::GatewayPublisherVia;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub publisher: GatewayPublisherVia,
}

impl AppState {
    pub fn new(config: Configuration, publisher: GatewayPublisherVia) -> AppState {
        AppState {
            config,
            publisher,
        }
    }

    pub fn from_env() -> AppState {
        AppState::new(Configuration::from_env(), GatewayPublisherVia::Logs)
    }
}

// How a failed user action should be presented.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Severity {
    NotFound,
    Error,
}

impl Severity {
    pub fn title(&self) -> &'static str {
        match self {
            Severity::NotFound => "Not Found",
            Severity::Error => "Error",
        }
    }
}

pub type ControllerError = (Severity, String);

pub fn user_error(message: &str) -> ControllerError {
    (Severity::Error, message.to_string())
}

impl From<CommandError> for ControllerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { message } => {
                (Severity::Error, message)
            }
            CommandError::NotAvailable { message } => {
                (Severity::Error, message)
            }
            CommandError::DuplicateKey { message } => {
                (Severity::Error, message)
            }
            CommandError::Validation { message, .. } => {
                (Severity::Error, message)
            }
            CommandError::Serialization { message } => {
                (Severity::Error, format!("internal error: {}", message))
            }
            CommandError::Runtime { message, .. } => {
                (Severity::Error, format!("internal error: {}", message))
            }
        }
    }
}
