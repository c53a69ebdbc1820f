use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required external binary is missing from PATH.
    #[error("{tool} not found")]
    ToolUnavailable { tool: &'static str },

    /// Nothing matched; the message names what was looked for.
    #[error("{0}")]
    NotFound(String),

    /// A choice was needed but interactive picking is disabled.
    #[error("{0} selection requires fzf but it is disabled")]
    AmbiguousDisallowed(&'static str),

    /// The picker ran but nothing was chosen.
    #[error("no {0} selected")]
    NoSelection(&'static str),

    #[error("confirmation required but no TTY available")]
    ConfirmationRequired,

    #[error("context confirmation failed")]
    ConfirmationFailed,

    #[error("kubectl timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("{0}")]
    MalformedArgument(String),

    #[error("{what} failed: {detail}")]
    CommandFailed { what: &'static str, detail: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}
