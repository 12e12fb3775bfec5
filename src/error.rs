//! Module defining the errors which are exposed to the users of the crate

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output file could not be created, written, flushed or synced
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A variant name that matches none of the supported test frameworks
    #[error("unknown variant: {0} (expected one of: gtest, lightest)")]
    UnknownVariant(String),
}

pub(crate) fn io_error(path: impl AsRef<Path>) -> impl FnOnce(std::io::Error) -> Error {
    let path = path.as_ref().to_path_buf();
    move |source| Error::Io { path, source }
}
