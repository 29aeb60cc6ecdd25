use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Unavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                CommandError::Unavailable { message, reason_code, retryable }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl From<CommandError> for LibraryError {
    fn from(other: CommandError) -> Self {
        match other {
            CommandError::Database { message, reason_code, retryable } => {
                LibraryError::Database { message, reason_code, retryable }
            }
            CommandError::Unavailable { message, reason_code, retryable } => {
                LibraryError::CurrentlyUnavailable { message, reason_code, retryable }
            }
            CommandError::Runtime { message, reason_code } => {
                LibraryError::Runtime { message, reason_code }
            }
            CommandError::Serialization { message } => {
                LibraryError::Serialization { message }
            }
            CommandError::Validation { message, reason_code } => {
                LibraryError::Validation { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_convert_library_errors() {
        assert!(matches!(CommandError::from(LibraryError::database("test", None, false)), CommandError::Database { .. }));
        assert!(matches!(CommandError::from(LibraryError::unavailable("test", None, true)), CommandError::Unavailable { retryable: true, .. }));
        assert!(matches!(CommandError::from(LibraryError::validation("test", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("test")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("test", None)), CommandError::Runtime { .. }));
    }

    #[tokio::test]
    async fn test_should_convert_command_errors() {
        let err = LibraryError::from(CommandError::Validation { message: "bad".to_string(), reason_code: None });
        assert!(matches!(err, LibraryError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_should_keep_runtime_and_unavailable_apart() {
        let runtime = LibraryError::from(CommandError::from(LibraryError::runtime("poisoned", None)));
        assert!(matches!(runtime, LibraryError::Runtime { .. }));
        assert!(!runtime.retryable());

        let unavailable = LibraryError::from(CommandError::from(LibraryError::unavailable("busy", None, true)));
        assert!(matches!(unavailable, LibraryError::CurrentlyUnavailable { retryable: true, .. }));
    }
}
