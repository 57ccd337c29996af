use std::fs;
use std::io;
use std::path::Path;

/// Checks if a file exists at the given path
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Reads the whole file as UTF-8 text
pub fn file_get(path: impl AsRef<Path>) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Reads the file when it exists, `Ok(None)` otherwise
pub fn file_get_optional(path: impl AsRef<Path>) -> io::Result<Option<String>> {
    let path = path.as_ref();
    if !file_exists(path) {
        return Ok(None);
    }
    file_get(path).map(Some)
}
