use std::fs;
use std::path::{Path, PathBuf};

/// File extension of sources picked up by [`scan_tex_files`].
pub const TEX_EXTENSION: &str = "tex";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid documents directory: {0}")]
    InvalidDocumentsDir(String),
}

/// Read a source file and return its content
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Scan for `.tex` files under the documents directory, sorted by path
pub fn scan_tex_files(documents_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_documents_dir(documents_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(documents_root, &mut files)?;
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
            && ext == TEX_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_documents_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocumentsDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
