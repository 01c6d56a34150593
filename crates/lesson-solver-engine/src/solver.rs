//! The seam to the hosted vision-language model.
//!
//! The engine never talks to a model itself. Callers plug in a
//! [`LessonSolver`] and [`solve_lesson`] applies the pre- and post-conditions
//! around it: no images means no call, and a failed or empty response is never
//! parsed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Solution;

/// One lesson page to send to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePart {
    pub data: Vec<u8>,
    pub mime_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("No images provided to solve")]
    NoImages,
    #[error("Unsupported image type: {0}")]
    UnsupportedImage(PathBuf),
    #[error("Failed to read image {path}: {source}")]
    ImageRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Model request failed: {0}")]
    Backend(String),
    #[error("Received an empty response from the model")]
    EmptyResponse,
}

impl ImagePart {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Load an image file, deriving its MIME type from the extension
    pub fn from_path(path: &Path) -> Result<Self, SolveError> {
        let mime_type = mime_type_for(path)
            .ok_or_else(|| SolveError::UnsupportedImage(path.to_path_buf()))?;
        let data = fs::read(path).map_err(|source| SolveError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(data, mime_type))
    }
}

/// MIME type for the image formats lesson photos come in.
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}

/// Something that turns lesson pages into a markdown solution.
pub trait LessonSolver {
    /// Returns the model's markdown, or [`SolveError::Backend`] on failure.
    fn solve(&self, images: &[ImagePart]) -> Result<String, SolveError>;
}

/// Run `solver` over `images` and parse what comes back.
pub fn solve_lesson(
    solver: &dyn LessonSolver,
    images: &[ImagePart],
) -> Result<Solution, SolveError> {
    if images.is_empty() {
        return Err(SolveError::NoImages);
    }

    log::info!("Solving lesson from {} image(s)", images.len());
    let raw = solver.solve(images)?;
    if raw.trim().is_empty() {
        return Err(SolveError::EmptyResponse);
    }

    Ok(Solution::from_raw(raw))
}
