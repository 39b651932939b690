use relative_path::{RelativePath, RelativePathBuf};
use std::path::Path;

use crate::io::IoError;

/// A markdown source file, addressed relative to the content directory
#[derive(Debug, Clone, PartialEq)]
pub struct ContentFile {
    relative_path: RelativePathBuf,
    output_path: RelativePathBuf,
}

impl ContentFile {
    /// Create a new ContentFile from a path relative to the content root
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let output_path = relative_path.with_extension("html");
        Self {
            relative_path,
            output_path,
        }
    }

    /// Create from an absolute path found under `content_root`
    pub fn from_path(path: &Path, content_root: &Path) -> Result<Self, IoError> {
        let relative = path
            .strip_prefix(content_root)
            .map_err(|_| IoError::OutsideRoot(path.to_path_buf()))?;
        let relative = RelativePathBuf::from_path(relative)
            .map_err(|_| IoError::OutsideRoot(path.to_path_buf()))?;
        Ok(Self::new(relative))
    }

    /// Get the relative path of the markdown source
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the relative path of the generated page (`.md` becomes `.html`)
    pub fn output_path(&self) -> &RelativePath {
        &self.output_path
    }
}

impl From<RelativePathBuf> for ContentFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for ContentFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
