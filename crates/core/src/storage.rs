//! Upload storage naming.
//!
//! Uploaded binaries are stored under a generated name so two uploads of the
//! same file never collide and a hostile filename cannot address anything
//! outside the upload directory.

use uuid::Uuid;

/// Maximum accepted upload size in bytes (50 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Build a collision-resistant stored filename for an uploaded file.
///
/// The name is `{uuid}-{original}`, where the original name is reduced to
/// its final path component and restricted to ASCII alphanumerics plus
/// `.`, `-`, and `_`.
pub fn stored_filename(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("upload");

    let mut sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    // ".." would otherwise survive sanitization intact.
    if sanitized.chars().all(|c| c == '.') {
        sanitized = "upload".to_string();
    }

    format!("{}-{sanitized}", Uuid::new_v4())
}
