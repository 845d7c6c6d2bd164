//! MIME type lookup by file extension.

/// Get the media type for a file extension given without the leading dot.
///
/// Only the handful of types the static front-end needs are mapped;
/// anything else yields `None`.
///
/// # Examples
/// ```
/// use httpaction_rs::get_mime_by_ext;
/// assert_eq!(get_mime_by_ext("svg"), Some("image/svg+xml"));
/// assert_eq!(get_mime_by_ext("unknown"), None);
/// ```
pub fn get_mime_by_ext(ext: &str) -> Option<&'static str> {
    match ext {
        "html" => Some("text/html"),
        "css" => Some("text/css"),
        "js" => Some("text/javascript"),
        "ts" => Some("text/typescript"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
