//! Error types shared by all site operations.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by the init, new-page and build operations.
///
/// The builder treats `Io` and `Template` as fatal only for the file that
/// triggered them; everything else aborts the operation that returned it.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("directory already exists: `{0}`")]
    DirectoryExists(PathBuf),

    #[error("missing required directory: `{0}`")]
    MissingDirectory(PathBuf),

    #[error("io error on `{0}`: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("template error in `{0}`: {1}")]
    Template(PathBuf, #[source] tera::Error),
}

impl SiteError {
    /// Attach a path to a raw io error.
    pub fn io(path: impl AsRef<Path>, err: std::io::Error) -> Self {
        Self::Io(path.as_ref().to_path_buf(), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_error_display_includes_path() {
        let err = SiteError::io("pages/about.html", Error::new(ErrorKind::NotFound, "gone"));
        let display = format!("{err}");
        assert!(display.contains("io error"));
        assert!(display.contains("pages/about.html"));

        let missing = SiteError::MissingDirectory(PathBuf::from("templates"));
        assert!(format!("{missing}").contains("templates"));
    }
}
