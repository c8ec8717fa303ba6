use log::debug;
use serde::de::DeserializeOwned;
use thiserror::Error;

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

/// Reasons a JSON input file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error al procesar el archivo {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Error al procesar el archivo {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns the path of the file that failed to load.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// Reads the file at `path` and parses it as JSON into a `T`.
///
/// The file is opened, read, and closed within this call.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be opened, and
/// [`LoadError::Parse`] if its contents are not valid JSON or do not have the
/// shape of `T`.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let data = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        LoadError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!("loaded {}", path.display());
    Ok(data)
}
