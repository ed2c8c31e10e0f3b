use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArduError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("delimiter {delimiter:?} occurs in the input at byte {offset}")]
    DelimiterCollision { delimiter: String, offset: usize },

    #[error("invalid raw string delimiter {0:?}")]
    InvalidDelimiter(String),

    #[error("failed to launch {program}: {source}")]
    ToolLaunch {
        program: String,
        source: std::io::Error,
    },

    #[error("{step} failed ({})", describe_exit(.code))]
    ToolFailure { step: String, code: Option<i32> },

    #[error("cannot install interrupt handler: {0}")]
    Interrupt(#[from] ctrlc::Error),

    #[error("can't monitor, no port found")]
    NoDeviceFound,

    #[error("Format error: {0}")]
    Format(String),

    #[error("config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl ArduError {
    /// Process exit status for this error; tool failures relay the tool's own code.
    pub fn exit_code(&self) -> i32 {
        match self {
            ArduError::ToolFailure { code: Some(c), .. } if *c != 0 => *c,
            _ => 1,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "terminated by signal".to_string(),
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, ArduError>;
