use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a client file.
#[derive(Error, Debug)]
pub enum ClientFileError {
    #[error("client file not found at path {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read client file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a client record file as UTF-8 text.
pub fn read_client_file(path: impl AsRef<Path>) -> Result<String, ClientFileError> {
    let path = path.as_ref();

    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ClientFileError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ClientFileError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
