//! MIME type detection for source images.

use std::path::Path;

/// Used when neither the bytes nor the file name identify the format.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Guess MIME by inspecting bytes (magic numbers)
pub fn guess_mime_from_bytes(bytes: &[u8]) -> Option<&'static str> {
    infer::get(bytes).map(|kind| kind.mime_type())
}

/// Guess MIME by file extension
pub fn guess_mime_from_path(path: &Path) -> Option<&'static str> {
    mime_guess::from_path(path).first_raw()
}

/// Prefer the bytes, fall back to the extension, otherwise PNG.
pub fn guess_image_mime(bytes: &[u8], path: Option<&Path>) -> &'static str {
    guess_mime_from_bytes(bytes)
        .or_else(|| path.and_then(guess_mime_from_path))
        .unwrap_or(DEFAULT_IMAGE_MIME)
}
