use std::path::PathBuf;

use crate::models::TaskId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Please fill in both the title and body.")]
    MissingFields,

    #[error("Note {index} no longer exists (there are {len} notes).")]
    NoteIndexOutOfRange { index: usize, len: usize },

    #[error("Task id {0} is already taken.")]
    DuplicateTaskId(TaskId),

    #[error("color `{0}` is not one of the palette swatches")]
    UnknownColor(String),

    #[error("failed to read config `{path}`: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config `{path}`: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to set up logging: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
