use super::*;

const PNG_HEAD: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn sniff_known_signatures() {
    assert_eq!(sniff_mime(&PNG_HEAD), "image/png");
    assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]), "image/jpeg");
    assert_eq!(sniff_mime(b"GIF89a...."), "image/gif");
    assert_eq!(sniff_mime(b"RIFF\x10\x00\x00\x00WEBPVP8 "), "image/webp");
    assert_eq!(sniff_mime(b"BM\x00\x00"), "image/bmp");
}

#[test]
fn sniff_svg_text() {
    assert_eq!(sniff_mime(b"  <svg xmlns=\"http://www.w3.org/2000/svg\"/>"), "image/svg+xml");
    assert_eq!(sniff_mime(b"<?xml version=\"1.0\"?><svg/>"), "image/svg+xml");
}

#[test]
fn sniff_unknown_falls_back() {
    assert_eq!(sniff_mime(b""), FALLBACK_MIME);
    assert_eq!(sniff_mime(b"hello world"), FALLBACK_MIME);
    assert_eq!(sniff_mime(b"RIFF\x10\x00\x00\x00WAVE"), FALLBACK_MIME);
}

#[test]
fn data_url_uses_sniffed_type() {
    let url = data_url(&PNG_HEAD, None);
    assert_eq!(url, "data:image/png;base64,iVBORw0KGgo=");
}

#[test]
fn data_url_prefers_explicit_type() {
    let url = data_url(b"abc", Some("image/heic"));
    assert_eq!(url, "data:image/heic;base64,YWJj");
}

#[test]
fn data_url_ignores_blank_type() {
    assert!(data_url(&PNG_HEAD, Some("  ")).starts_with("data:image/png;"));
}

#[test]
fn decode_data_url_recovers_bytes() {
    let (mime, bytes) = decode_data_url(&data_url(&PNG_HEAD, None)).unwrap();
    assert_eq!(mime, "image/png");
    assert_eq!(bytes, PNG_HEAD);
}

#[test]
fn decode_data_url_rejects_malformed() {
    assert!(decode_data_url("http://example.com/a.png").is_none());
    assert!(decode_data_url("data:image/png,plain").is_none());
    assert!(decode_data_url("data:image/png;base64,!!!").is_none());
}
