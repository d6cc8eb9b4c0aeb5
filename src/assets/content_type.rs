//! Content-type inference for ingested files.
//!
//! Ordered fallback chain: system guesser, then a fixed extension table,
//! then `application/octet-stream`. First non-empty result wins.

use std::path::Path;

pub const FALLBACK_TYPE: &str = "application/octet-stream";

const EXTENSION_TABLE: &[(&str, &str)] = &[
    ("js", "application/javascript"),
    ("css", "text/css"),
    ("html", "text/html"),
    ("txt", "text/plain"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
    ("ico", "image/x-icon"),
];

pub fn guess_content_type(path: &Path) -> String {
    if let Some(mime) = mime_guess::from_path(path).first() {
        return mime.essence_str().to_string();
    }

    lookup_extension(path).unwrap_or(FALLBACK_TYPE).to_string()
}

fn lookup_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    EXTENSION_TABLE
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}
