//! Audio file extension inference.
//!
//! Order: exact media type table, then `mpeg`/`aac` substring rules, then the
//! extension of the URL path. The result always starts with `.` unless empty.

/// Media types with a known preferred extension. Keys are lower-case, no parameters.
const MEDIA_TYPE_EXTENSIONS: &[(&str, &str)] = &[
    ("audio/mpeg", ".mp3"),
    ("audio/mp3", ".mp3"),
    ("audio/aac", ".aac"),
    ("audio/x-aac", ".aac"),
    ("audio/mp4", ".m4a"),
    ("audio/x-m4a", ".m4a"),
    ("audio/ogg", ".ogg"),
    ("audio/opus", ".opus"),
    ("audio/webm", ".weba"),
    ("audio/wav", ".wav"),
    ("audio/x-wav", ".wav"),
    ("audio/wave", ".wav"),
    ("audio/flac", ".flac"),
    ("audio/x-flac", ".flac"),
    ("audio/basic", ".au"),
    ("audio/x-aiff", ".aif"),
    ("video/mp4", ".mp4"),
    ("video/webm", ".webm"),
    ("application/ogg", ".ogx"),
];

/// Looks up the media type (parameters stripped, case-insensitive) in the table.
pub fn extension_from_content_type(content_type: &str) -> Option<&'static str> {
    let media_type = content_type.split(';').next().unwrap_or("").trim();
    MEDIA_TYPE_EXTENSIONS
        .iter()
        .find(|(mt, _)| mt.eq_ignore_ascii_case(media_type))
        .map(|(_, ext)| *ext)
}

/// Extension (with dot) of the last path segment of `url`, or `None`.
///
/// Query and fragment are ignored. Leading dots of the segment do not start an
/// extension, so `/.hidden` has none.
pub fn extension_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    let stem = segment.trim_start_matches('.');
    let dot = stem.rfind('.')?;
    let ext = &stem[dot..];
    if ext.len() <= 1 {
        return None;
    }
    Some(ext.to_string())
}

/// Full fallback chain used for non-JSON responses.
pub fn extension_for(content_type: &str, url: &str) -> String {
    if let Some(ext) = extension_from_content_type(content_type) {
        return ext.to_string();
    }
    if content_type.contains("mpeg") {
        return ".mp3".to_string();
    }
    if content_type.contains("aac") {
        return ".aac".to_string();
    }
    extension_from_url_path(url).unwrap_or_default()
}
