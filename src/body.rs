use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File {} not found!", path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}

/// Reads the release description verbatim.
pub async fn load(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();

    match tokio::fs::read_to_string(path).await {
        Ok(body) => {
            log::debug!("loaded {} bytes from {}", body.len(), path.display());
            Ok(body)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Err(Error::NotFound {
            path: path.to_owned(),
        }),
        Err(err) => Err(Error::Read {
            path: path.to_owned(),
            cause: err,
        }),
    }
}
