pub mod base64;
pub mod file;
pub mod http;
pub mod url;

// Re-export common utilities
pub use file::{file_exists, file_get};
pub use http::{web_get, HttpConfig, HttpError};
