use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatastoreError {
    #[error("Failed to read fixture file '{path}': {source}")]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Fixture file '{path}' is not valid JSON: {source}")]
    FixtureMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
