/// Sniff an image MIME type from its leading magic bytes.
pub fn detect_image_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, 0x50, 0x4E, 0x47, ..] => Some("image/png"),
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Some("image/webp"),
        [0x47, 0x49, 0x46, 0x38, ..] => Some("image/gif"),
        _ => None,
    }
}

/// Resolve the MIME type to report for a decoded payload.
///
/// The backend's declared type wins; a mismatch with the sniffed bytes is
/// only logged.
pub fn resolve_mime(declared: &str, bytes: &[u8]) -> String {
    let sniffed = detect_image_mime(bytes);
    let declared = declared.trim();

    match (declared.is_empty(), sniffed) {
        (true, Some(sniffed)) => sniffed.to_string(),
        (true, None) => {
            tracing::warn!(
                "Unrecognized image format (first 4 bytes: {:02X?}), assuming image/png",
                &bytes[..bytes.len().min(4)]
            );
            "image/png".to_string()
        }
        (false, Some(sniffed)) if sniffed != declared => {
            tracing::warn!(
                "Declared mime type {} does not match image bytes ({})",
                declared,
                sniffed
            );
            declared.to_string()
        }
        (false, _) => declared.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        assert_eq!(
            detect_image_mime(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A]),
            Some("image/png")
        );
    }

    #[test]
    fn test_detect_jpeg() {
        assert_eq!(
            detect_image_mime(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some("image/jpeg")
        );
    }

    #[test]
    fn test_detect_webp() {
        assert_eq!(
            detect_image_mime(&[
                0x52, 0x49, 0x46, 0x46, 0x00, 0x00, 0x00, 0x00, 0x57, 0x45, 0x42, 0x50
            ]),
            Some("image/webp")
        );
    }

    #[test]
    fn test_unknown_and_empty_are_unrecognized() {
        assert_eq!(detect_image_mime(&[0x00, 0x01, 0x02, 0x03]), None);
        assert_eq!(detect_image_mime(&[]), None);
    }

    #[test]
    fn test_resolve_prefers_declared_type() {
        assert_eq!(resolve_mime("image/jpeg", b"hello"), "image/jpeg");
        assert_eq!(
            resolve_mime("image/jpeg", &[0x89, 0x50, 0x4E, 0x47]),
            "image/jpeg"
        );
    }

    #[test]
    fn test_resolve_falls_back_to_sniffed_then_png() {
        assert_eq!(resolve_mime("", &[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(resolve_mime("  ", b"hello"), "image/png");
    }
}
