//! Supporting services.

pub mod uploads;

pub use uploads::{UploadError, UploadStore};
