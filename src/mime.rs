//! MIME type detection from file extensions
//!
//! Local files carry no MIME metadata, so the type is guessed from the
//! extension. Unknown extensions map to `application/octet-stream`.

use std::path::Path;

/// Fallback for files with no or an unrecognized extension.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// MIME type for a file extension (without the dot), case-insensitive.
///
/// # Examples
///
/// ```
/// use docindex::mime::from_extension;
///
/// assert_eq!(from_extension("pdf"), Some("application/pdf"));
/// assert_eq!(from_extension("JPG"), Some("image/jpeg"));
/// assert_eq!(from_extension("unknown"), None);
/// ```
pub fn from_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext.to_lowercase().as_str() {
        "txt" | "text" | "log" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "csv" => "text/csv",
        "tsv" => "text/tab-separated-values",
        "htm" | "html" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "yaml" | "yml" => "application/yaml",
        "toml" => "application/toml",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "odt" => "application/vnd.oasis.opendocument.text",
        "ods" => "application/vnd.oasis.opendocument.spreadsheet",
        "odp" => "application/vnd.oasis.opendocument.presentation",
        "rtf" => "application/rtf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        _ => return None,
    };
    Some(mime)
}

/// MIME type for a path, falling back to [`DEFAULT_MIME_TYPE`].
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use docindex::mime::for_path;
///
/// assert_eq!(for_path(Path::new("notes/plan.md")), "text/markdown");
/// assert_eq!(for_path(Path::new("Makefile")), "application/octet-stream");
/// ```
pub fn for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(from_extension)
        .unwrap_or(DEFAULT_MIME_TYPE)
}
