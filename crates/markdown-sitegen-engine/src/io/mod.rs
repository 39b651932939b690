use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Path is not relative to its root: {0}")]
    OutsideRoot(PathBuf),
}

/// Read a file relative to `root` and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    read_path(&relative_path.to_path(root))
}

/// Read a file by absolute or working-directory relative path
pub fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file relative to `root`
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    write_path(&relative_path.to_path(root), content)
}

/// Write content to a path, creating parent directories as needed
pub fn write_path(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files under the content directory, sorted
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "{} does not exist",
            path.display()
        )));
    }

    Ok(())
}

/// Replace `destination` with a recursive copy of `source`.
///
/// The destination is deleted first so stale files never survive a rebuild.
/// Returns the copied files, sorted.
pub fn copy_directory(source: &Path, destination: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !source.is_dir() {
        return Err(IoError::NotFound(source.to_path_buf()));
    }
    if destination.exists() {
        fs::remove_dir_all(destination).map_err(IoError::Io)?;
    }

    let mut copied = Vec::new();
    copy_directory_recursive(source, destination, &mut copied)?;
    copied.sort();
    Ok(copied)
}

fn copy_directory_recursive(
    source: &Path,
    destination: &Path,
    copied: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    fs::create_dir_all(destination).map_err(IoError::Io)?;

    for entry in fs::read_dir(source).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let source_path = entry.path();
        let destination_path = destination.join(entry.file_name());

        if source_path.is_dir() {
            copy_directory_recursive(&source_path, &destination_path, copied)?;
        } else {
            log::debug!(
                "Copying {} -> {}",
                source_path.display(),
                destination_path.display()
            );
            fs::copy(&source_path, &destination_path).map_err(IoError::Io)?;
            copied.push(destination_path);
        }
    }

    Ok(())
}
