//! Object metadata policy: `Content-Type` by extension and `Cache-Control` by basename.

use std::path::Path;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Entry document name. Always revalidated so a new deploy is picked up immediately.
pub const INDEX_DOCUMENT: &str = "index.html";

pub const NO_CACHE: &str = "no-cache";

/// One year. Every asset other than the entry document is assumed to be content-addressed.
pub const IMMUTABLE_CACHE: &str = "max-age=31536000";

/// Content type for `path`, looked up from its extension (case-insensitive).
///
/// Scripts, source maps and web manifests are pinned; everything else comes from the
/// MIME database, falling back to [`DEFAULT_CONTENT_TYPE`].
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return DEFAULT_CONTENT_TYPE,
    };

    match ext.as_str() {
        "js" | "mjs" | "cjs" => "application/javascript",
        "map" => "application/json",
        "webmanifest" => "application/manifest+json",
        other => mime_guess::from_ext(other)
            .first_raw()
            .unwrap_or(DEFAULT_CONTENT_TYPE),
    }
}

/// Cache directive for `path`. Only an exact (case-sensitive) `index.html` basename is `no-cache`.
pub fn cache_control_for(path: &Path) -> &'static str {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(INDEX_DOCUMENT) => NO_CACHE,
        _ => IMMUTABLE_CACHE,
    }
}
