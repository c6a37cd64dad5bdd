//! Getting calendar text into the importer.
//!
//! Only plain text is accepted. Documents and images have to be converted
//! (or the agenda pasted) by the user first; the importer never sees binary
//! content.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Extensions of files whose text has to be pasted manually.
const DOCUMENT_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "odt", "rtf", "pages", "png", "jpg", "jpeg", "gif", "webp", "bmp",
    "tif", "tiff", "heic",
];

/// Decode raw bytes as calendar text.
fn text_from_bytes(buffer: Vec<u8>, origin: &str) -> Result<String, String> {
    let text = String::from_utf8(buffer).map_err(|_| {
        format!(
            "{} is not UTF-8 text; open it and paste the calendar text instead",
            origin
        )
    })?;
    if text.contains('\0') {
        return Err(format!(
            "{} looks like binary data; paste the calendar text instead",
            origin
        ));
    }
    Ok(text)
}

fn read_stdin() -> Result<String, String> {
    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;
    text_from_bytes(buffer, "stdin")
}

/// Read input, handling `@path` syntax for file reading and `@-` for stdin.
///
/// Anything not starting with `@` is the calendar text itself.
pub fn read_input(input: &str) -> Result<String, String> {
    let Some(path) = input.strip_prefix('@') else {
        return Ok(input.to_string());
    };

    if path == "-" {
        return read_stdin();
    }

    let file_path = Path::new(path);
    if let Some(ext) = file_path.extension().and_then(|e| e.to_str()) {
        let ext = ext.to_lowercase();
        if DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
            return Err(format!(
                "'{}' is a .{} file; copy the calendar text out of it and paste it instead",
                path, ext
            ));
        }
    }

    if !file_path.exists() {
        return Err(format!("File not found: {}", path));
    }

    let buffer =
        fs::read(file_path).map_err(|e| format!("Failed to read file '{}': {}", path, e))?;
    text_from_bytes(buffer, &format!("'{}'", path))
}

/// Read piped stdin when no input argument was given.
pub fn read_piped() -> Result<String, String> {
    read_stdin()
}
