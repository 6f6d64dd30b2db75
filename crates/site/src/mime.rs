//! Content-type pinning for extensions browsers are strict about.

/// Forced content type for `path`, if any.
///
/// `.css` and `.js` are pinned regardless of what extension-based inference
/// would produce; every other path defers to the serving layer's default
/// table.
pub fn forced_content_type(path: &str) -> Option<&'static str> {
    if path.ends_with(".css") {
        Some("text/css")
    } else if path.ends_with(".js") {
        Some("application/javascript")
    } else {
        None
    }
}
