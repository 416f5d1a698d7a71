//! Binary-level error type.
//!
//! Every fallible front-end step maps its failure into an [`AppError`] carrying
//! the process exit code the `salbench` binary should return.

use crate::notify::NotifyError;

/// Bad input: CLI usage, profile/table files, export paths.
pub const EXIT_INPUT: u8 = 2;
/// The notification address was rejected.
pub const EXIT_ADDRESS: u8 = 3;
/// Terminal or other runtime failure.
pub const EXIT_RUNTIME: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INPUT, message)
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(EXIT_RUNTIME, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<NotifyError> for AppError {
    fn from(err: NotifyError) -> Self {
        let code = match err {
            NotifyError::InvalidAddress(_) => EXIT_ADDRESS,
            NotifyError::Transport(_) => EXIT_RUNTIME,
        };
        AppError::new(code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
