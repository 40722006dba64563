// Centralized error handling for chat commands

use crate::console::statement::Statement;
use thiserror::Error;

/// Errors that abort a single command invocation
///
/// None of these are fatal: the dispatcher renders each one into a private
/// notice for the requesting player and leaves shared state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("No such item: {0}")]
    ItemNotFound(String),

    #[error("Unknown player: {0}")]
    UnknownUser(String),

    #[error("{0} is not online")]
    NotOnline(String),

    #[error("Unknown kit '{name}'. Available kits: {available}")]
    UnknownKit { name: String, available: String },

    #[error("You have no shortcut named '{0}'")]
    UnknownShortcut(String),

    #[error("Unknown command '{0}'. Try {1}help")]
    UnknownCommand(String, String),

    #[error("You do not have permission to use {0}")]
    PermissionDenied(String),

    #[error("Shortcuts cannot run other shortcuts ({0})")]
    NestedShortcut(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{reason}. Usage: {usage}")]
    Malformed { reason: String, usage: String },
}

impl CommandError {
    /// Render the error as a private notice for `user`
    pub fn into_notice(self, user: &str) -> Statement {
        Statement::error(user, self.to_string())
    }
}

/// Item resolution failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No catalog entry matches '{0}'")]
    NotFound(String),
}

impl From<ResolveError> for CommandError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound(query) => CommandError::ItemNotFound(query),
        }
    }
}

/// Argument validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required argument: {0}")]
    MissingParameter(String),

    #[error("Invalid argument: {0}")]
    InvalidFormat(String),
}
