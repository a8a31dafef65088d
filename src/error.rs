use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("config error in {}: {message}", .path.display())]
    Script { path: PathBuf, message: String },

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("invalid theme {}: {source}", .path.display())]
    Theme {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),
}
