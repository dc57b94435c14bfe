use solace_core::image::{ImageError, ImageKind, MAX_IMAGE_BYTES, to_data_uri};

const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n";

fn png(len: usize) -> Vec<u8> {
    let mut bytes = PNG_HEADER.to_vec();
    bytes.resize(len, 0);
    bytes
}

#[test]
fn png_becomes_data_uri() {
    let uri = to_data_uri(&png(16), "image/png").unwrap();
    assert!(uri.starts_with("data:image/png;base64,iVBORw0KGgo"));
}

#[test]
fn jpg_alias_and_parameters_are_accepted() {
    let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    let uri = to_data_uri(&jpeg, "Image/JPG; charset=binary").unwrap();
    assert!(uri.starts_with("data:image/jpeg;base64,"));
}

#[test]
fn rejects_unsupported_types() {
    let err = to_data_uri(b"<svg/>", "image/svg+xml").unwrap_err();
    assert_eq!(err, ImageError::UnsupportedType("image/svg+xml".to_string()));
}

#[test]
fn enforces_one_megabyte_limit() {
    assert!(to_data_uri(&png(MAX_IMAGE_BYTES), "image/png").is_ok());

    let err = to_data_uri(&png(MAX_IMAGE_BYTES + 1), "image/png").unwrap_err();
    assert!(matches!(err, ImageError::TooLarge { .. }));
}

#[test]
fn rejects_content_that_does_not_match_declared_type() {
    let err = to_data_uri(b"GIF89a....", "image/png").unwrap_err();
    assert_eq!(err, ImageError::ContentMismatch { declared: "image/png" });
    assert_eq!(ImageKind::sniff(b"GIF89a...."), Some(ImageKind::Gif));
}

#[test]
fn rejects_empty_upload() {
    assert_eq!(to_data_uri(&[], "image/gif").unwrap_err(), ImageError::Empty);
}
