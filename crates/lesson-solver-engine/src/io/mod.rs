use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::models::Solution;
use crate::render::render_html;

/// File name used when saving the raw response as plain text.
pub const TEXT_EXPORT_NAME: &str = "lesson-solution.txt";
/// File name used when saving the rendered cards as HTML.
pub const HTML_EXPORT_NAME: &str = "lesson-solution.html";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a saved model response
pub fn read_response(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read a model response from any reader (e.g. stdin)
pub fn read_response_from(mut reader: impl Read) -> Result<String, IoError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(raw)
}

/// Save the raw response text into `dir`, returning the written path
pub fn export_text(solution: &Solution, dir: &Path) -> Result<PathBuf, IoError> {
    let path = dir.join(TEXT_EXPORT_NAME);
    write_file(&path, solution.raw())?;
    log::info!("Exported solution text to {}", path.display());
    Ok(path)
}

/// Save the rendered cards into `dir`, returning the written path
pub fn export_html(solution: &Solution, dir: &Path) -> Result<PathBuf, IoError> {
    let path = dir.join(HTML_EXPORT_NAME);
    write_file(&path, &render_html(solution.blocks()))?;
    log::info!("Exported solution HTML to {}", path.display());
    Ok(path)
}

/// Write content to a file, creating parent directories as needed
fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, content).map_err(IoError::Io)
}
