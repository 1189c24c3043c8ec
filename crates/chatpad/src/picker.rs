use std::fmt::{self, Display};
use std::io;
use std::path::Path;

use chatpad_remote::{Upload, has_extension};

const ACCEPTED_EXTENSION: &str = "pdf";

/// Error returned when a file cannot be selected.
#[derive(Debug)]
pub enum PickError {
    /// The picker only offers PDF files.
    NotAccepted,
    /// The file could not be read.
    Io(io::Error),
}

impl Display for PickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickError::NotAccepted => write!(f, "only PDF files can be selected"),
            PickError::Io(err) => write!(f, "cannot read the file: {err}"),
        }
    }
}

impl std::error::Error for PickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PickError::NotAccepted => None,
            PickError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for PickError {
    #[inline]
    fn from(err: io::Error) -> Self {
        PickError::Io(err)
    }
}

/// Returns `true` if the picker offers this file.
///
/// The filter only lives in the picker. Neither the controller nor the
/// backend look at file types.
#[inline]
pub fn accepts_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| has_extension(name, ACCEPTED_EXTENSION))
}

/// Loads a file the way the picker offers it.
pub async fn pick_file(path: &Path) -> Result<Upload, PickError> {
    if !accepts_file(path) {
        return Err(PickError::NotAccepted);
    }
    let upload = Upload::from_path(path).await?;
    debug!("picked {} ({} bytes)", path.display(), upload.content().len());
    Ok(upload)
}
