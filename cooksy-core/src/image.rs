//! Image staging for the submission workflow.
//!
//! A submission can attach one image, read from disk and carried as a
//! base64 data URI. Reads are asynchronous, so each file selection gets a
//! monotonically increasing request id; a read that completes after a newer
//! selection began is discarded instead of clobbering the newer image.

use std::io::Cursor;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use base64::{engine::general_purpose, Engine as _};
use image::{ImageFormat, ImageReader};
use thiserror::Error;

/// Allowed image formats for recipe photos.
pub const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Maximum file size for images (10MB).
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Could not detect image format")]
    UnknownFormat,

    #[error("Unsupported image format: {0}. Allowed: JPEG, PNG, GIF, WebP")]
    UnsupportedFormat(String),
}

/// Validate image data: check size and format, detect the MIME type.
///
/// Returns the content type on success (e.g. "image/jpeg").
pub fn validate_image(data: &[u8]) -> Result<String, ImageError> {
    if data.len() > MAX_FILE_SIZE {
        return Err(ImageError::TooLarge {
            size: data.len(),
            max: MAX_FILE_SIZE,
        });
    }

    let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
    let format = reader.format().ok_or(ImageError::UnknownFormat)?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(ImageError::UnsupportedFormat(format!("{:?}", format)));
    }

    Ok(format.to_mime_type().to_string())
}

/// Read an image file and encode it as a base64 data URI.
pub async fn read_as_data_uri(path: &Path) -> Result<String, ImageError> {
    let data = tokio::fs::read(path).await?;
    let content_type = validate_image(&data)?;
    Ok(format!(
        "data:{};base64,{}",
        content_type,
        general_purpose::STANDARD.encode(&data)
    ))
}

/// An image staged for the next submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedImage {
    /// Selection this image came from.
    pub request_id: u64,
    /// The image as a data URI.
    pub data_uri: String,
}

/// Staging area holding at most one image.
///
/// `begin_selection` and `stage` are split so callers can run the file read
/// in between; [`ImageStaging::select_file`] does all three steps.
#[derive(Debug, Default)]
pub struct ImageStaging {
    issued: AtomicU64,
    staged: Mutex<Option<StagedImage>>,
}

impl ImageStaging {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new selection, superseding any still-running earlier read.
    ///
    /// Returns the request id to pass to [`ImageStaging::stage`].
    pub fn begin_selection(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Complete a selection's read.
    ///
    /// Returns whether the image was staged; a read whose selection has been
    /// superseded is discarded. A failed read never reaches this point, so
    /// the previously staged image stays in place.
    pub fn stage(&self, request_id: u64, data_uri: String) -> bool {
        let mut staged = self.staged.lock().unwrap();
        if request_id < self.issued.load(Ordering::SeqCst) {
            tracing::debug!(request_id, "discarding stale image read");
            return false;
        }
        *staged = Some(StagedImage {
            request_id,
            data_uri,
        });
        true
    }

    /// The currently staged image, if any.
    pub fn staged(&self) -> Option<StagedImage> {
        self.staged.lock().unwrap().clone()
    }

    /// The staged image's data URI, ready for the submission payload.
    pub fn staged_data_uri(&self) -> Option<String> {
        self.staged().map(|image| image.data_uri)
    }

    /// Drop the staged image.
    pub fn clear(&self) {
        *self.staged.lock().unwrap() = None;
    }

    /// Select an image file: read, validate and stage it.
    ///
    /// Returns whether the image ended up staged.
    pub async fn select_file(&self, path: &Path) -> Result<bool, ImageError> {
        let request_id = self.begin_selection();
        let data_uri = read_as_data_uri(path).await?;
        Ok(self.stage(request_id, data_uri))
    }
}
