use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop a synthesis run.
///
/// The process only ever reports these as exit status 1, the variants exist so
/// the single log line on stderr says what actually went wrong.
#[derive(Debug, Error)]
pub enum Error {
    #[error("usage: agi-google-tts <text> <output-path> (got {got} arguments)")]
    Usage { got: usize },

    #[error("text argument is not valid UTF-8")]
    InvalidText,

    #[error("no API key configured (set GOOGLE_TTS_API_KEY)")]
    MissingCredential,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("request to text-to-speech API failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("text-to-speech API answered with HTTP {0}")]
    Status(StatusCode),

    #[error("malformed text-to-speech response: {0}")]
    Body(#[source] serde_json::Error),
}

impl From<envy::Error> for Error {
    fn from(e: envy::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl Error {
    /// Wraps a reqwest error, dropping the request URL so the API key carried
    /// in its query string never reaches the logs.
    pub fn transport(e: reqwest::Error) -> Self {
        Error::Transport(e.without_url())
    }
}
