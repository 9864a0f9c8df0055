//! Photo upload validation
//!
//! Only the reference to an accepted image is kept; the bytes themselves
//! are discarded once checked.

use uuid::Uuid;

use crate::models::PhotoAttachment;
use crate::utils::{AppError, AppResult};

/// Content types accepted for report photos
pub const ACCEPTED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/heic", "image/jpg"];

/// Largest accepted upload (10 MB)
pub const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

/// Check an upload and build the attachment stored on the draft
pub fn accept_photo(content_type: &str, size_bytes: usize) -> AppResult<PhotoAttachment> {
    let essence = mime_essence(content_type);

    if !ACCEPTED_CONTENT_TYPES.contains(&essence.as_str()) {
        return Err(AppError::UnsupportedMediaType(format!(
            "unsupported photo type '{}'; use JPG, PNG or HEIC",
            content_type
        )));
    }

    if size_bytes > MAX_PHOTO_BYTES {
        return Err(AppError::PayloadTooLarge(format!(
            "photo is {} but the limit is 10 MB",
            size_label(size_bytes as u64)
        )));
    }

    if size_bytes == 0 {
        return Err(AppError::BadRequest("photo upload is empty".to_string()));
    }

    Ok(PhotoAttachment {
        reference: photo_reference(&essence),
        content_type: essence,
        size_bytes: size_bytes as u64,
        size_label: size_label(size_bytes as u64),
    })
}

/// Lowercased `type/subtype` without parameters
fn mime_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn photo_reference(essence: &str) -> String {
    let extension = match essence {
        "image/png" => "png",
        "image/heic" => "heic",
        _ => "jpg",
    };
    format!("photo_{}.{}", Uuid::new_v4().simple(), extension)
}

/// Size in megabytes with two decimals
pub fn size_label(size_bytes: u64) -> String {
    format!("{:.2} MB", size_bytes as f64 / (1024.0 * 1024.0))
}
