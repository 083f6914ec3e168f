//! Embedding image files into evidence cards as data URLs.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

/// MIME type used when the bytes match no known image signature.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Guess an image MIME type from the file's leading bytes.
#[must_use]
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        [b'B', b'M', ..] => "image/bmp",
        _ if looks_like_svg(bytes) => "image/svg+xml",
        _ => FALLBACK_MIME,
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(256)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

/// Encode `bytes` as a base64 `data:` URL.
///
/// `mime` overrides the sniffed type when the host knows it (for example from
/// the file picker).
#[must_use]
pub fn data_url(bytes: &[u8], mime: Option<&str>) -> String {
    let mime = mime.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| sniff_mime(bytes));
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Split a base64 data URL into its MIME type and decoded payload.
///
/// Returns `None` for anything that isn't a well-formed base64 data URL.
#[must_use]
pub fn decode_data_url(url: &str) -> Option<(String, Vec<u8>)> {
    let rest = url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let mime = meta.strip_suffix(";base64")?;
    match STANDARD.decode(payload) {
        Ok(bytes) => Some((mime.to_string(), bytes)),
        Err(e) => {
            debug!(error = %e, "bad data URL payload");
            None
        }
    }
}
