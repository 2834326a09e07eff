//! Uploads Module
//!
//! Image upload for placing pictures on a canvas.

pub mod handlers;

pub use handlers::{upload_image, UploadResponse, ALLOWED_CONTENT_TYPES};
