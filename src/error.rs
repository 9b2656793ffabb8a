use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to load a sprite from the resource directory.  Always fatal at
/// startup.
#[derive(Debug)]
pub enum AssetError {
    Io { path: PathBuf, source: io::Error },
    Empty { path: PathBuf },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read sprite {}: {source}", path.display())
            }
            Self::Empty { path } => write!(f, "sprite {} has no pixels", path.display()),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}
