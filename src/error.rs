use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access pet file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode pet record: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum PetError {
    #[error("Pet not found. Use `create` to make a new pet.")]
    NotFound,

    #[error("Pet already exists. Load or use a different file to create a new pet.")]
    AlreadyExists,

    #[error("A pet needs a name before it can be created.")]
    MissingName,

    #[error(transparent)]
    Store(#[from] StoreError),
}
