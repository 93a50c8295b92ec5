use thiserror::Error as ThisError;
use thisslime::TracingError;

#[derive(Debug, ThisError, TracingError)]
#[span(level = WARN)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    #[event(level = WARN)]
    Unknown(String),

    #[error("invalid parameters: {0}")]
    #[event(level = WARN)]
    Params(#[from] serde_json::Error),
}

#[derive(Debug, ThisError, TracingError)]
#[span(level = WARN)]
pub enum InvocationError {
    #[error("couldn't parse invocation: {0}")]
    #[event(level = ERROR)]
    Parse(#[from] serde_json::Error),

    #[error("couldn't read invocation: {0}")]
    #[event(level = ERROR)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, ThisError, TracingError)]
#[span]
pub enum Error {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error(transparent)]
    Config(#[from] crate::framework::config::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
