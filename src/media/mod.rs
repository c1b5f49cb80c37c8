// SPDX-License-Identifier: MPL-2.0
//! Reading uploaded images and writing enhanced results to disk.
//!
//! Uploads are sniffed from their content rather than their extension, so a
//! mislabelled file still loads. A text file holding a `data:` URL is
//! accepted as well.

use crate::domain::enhancement::ImagePayload;
use crate::error::{Error, Result};
use image_rs::ImageFormat;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Suggested name for the downloaded result.
pub const DOWNLOAD_FILE_NAME: &str = "enhanced-image.png";

/// Extensions offered by the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "tif", "ico",
];

const DATA_URL_PREFIX: &[u8] = b"data:";

/// Loads an image file (or a file containing a data URL) as a payload.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Decode`] if
/// its content is not a supported image.
pub fn load_payload<P: AsRef<Path>>(path: P) -> Result<ImagePayload> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    let payload = payload_from_bytes(bytes)?;
    tracing::debug!(path = %path.display(), mime = payload.mime_type(), bytes = payload.len(), "image loaded");
    Ok(payload)
}

/// Resolves a command-line argument: a `data:` URL is parsed in place,
/// anything else is treated as a path.
///
/// # Errors
///
/// Same as [`load_payload`], plus [`Error::Decode`] for a malformed data URL.
pub fn payload_from_argument(arg: &str) -> Result<ImagePayload> {
    if arg.trim_start().starts_with("data:") {
        return Ok(ImagePayload::from_data_url(arg)?);
    }
    load_payload(arg)
}

/// Builds a payload from raw file content, sniffing the format.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the bytes are neither a data URL nor a
/// decodable image.
pub fn payload_from_bytes(bytes: Vec<u8>) -> Result<ImagePayload> {
    if bytes.trim_ascii_start().starts_with(DATA_URL_PREFIX) {
        let text = std::str::from_utf8(&bytes)
            .map_err(|_| Error::Decode("data URL is not valid UTF-8".into()))?;
        return Ok(ImagePayload::from_data_url(text)?);
    }

    let format = image_rs::guess_format(&bytes)?;
    image_rs::load_from_memory_with_format(&bytes, format)?;

    Ok(ImagePayload::new(bytes, format.to_mime_type())?)
}

/// Returns PNG bytes for the payload, converting when needed.
///
/// # Errors
///
/// Returns [`Error::Encode`] if a non-PNG payload cannot be decoded or
/// re-encoded.
pub fn encode_png(payload: &ImagePayload) -> Result<Vec<u8>> {
    if payload.is_png() {
        return Ok(payload.bytes().to_vec());
    }

    let image = image_rs::load_from_memory(payload.bytes())
        .map_err(|e| Error::Encode(e.to_string()))?;
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

/// Writes the payload to `path` as PNG.
///
/// # Errors
///
/// Returns [`Error::Encode`] on conversion failure and [`Error::Io`] if the
/// file cannot be written.
pub fn save_png<P: AsRef<Path>>(payload: &ImagePayload, path: P) -> Result<()> {
    let path = path.as_ref();
    let png = encode_png(payload)?;
    fs::write(path, png)?;
    tracing::info!(path = %path.display(), "enhanced image saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::tempdir;

    fn png_bytes() -> Vec<u8> {
        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png).expect("encode png");
        out.into_inner()
    }

    fn jpeg_bytes() -> Vec<u8> {
        let image = RgbImage::from_pixel(8, 8, Rgb([10, 200, 30]));
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Jpeg).expect("encode jpeg");
        out.into_inner()
    }

    #[test]
    fn load_png_sniffs_mime() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("sample.png");
        fs::write(&path, png_bytes()).expect("write png");

        let payload = load_payload(&path).expect("png should load");
        assert_eq!(payload.mime_type(), "image/png");
    }

    #[test]
    fn mislabelled_jpeg_is_detected_by_content() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("photo.png");
        fs::write(&path, jpeg_bytes()).expect("write jpeg");

        let payload = load_payload(&path).expect("jpeg should load");
        assert_eq!(payload.mime_type(), "image/jpeg");
    }

    #[test]
    fn data_url_file_is_parsed() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("image.txt");
        fs::write(&path, "data:image/webp;base64,AAAA\n").expect("write data url");

        let payload = load_payload(&path).expect("data url should load");
        assert_eq!(payload.mime_type(), "image/webp");
        assert_eq!(payload.bytes(), &[0u8, 0, 0]);
    }

    #[test]
    fn non_image_is_a_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, b"just some text").expect("write text");

        match load_payload(&path) {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn truncated_png_is_a_decode_error() {
        let mut bytes = png_bytes();
        bytes.truncate(20);
        assert!(matches!(payload_from_bytes(bytes), Err(Error::Decode(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does_not_exist.png");
        assert!(matches!(load_payload(&missing), Err(Error::Io(_))));
    }

    #[test]
    fn argument_accepts_inline_data_url() {
        let payload = payload_from_argument("data:image/png;base64,AAAA").unwrap();
        assert!(payload.is_png());
    }

    #[test]
    fn png_passes_through_unchanged() {
        let bytes = png_bytes();
        let payload = ImagePayload::new(bytes.clone(), "image/png").unwrap();
        assert_eq!(encode_png(&payload).unwrap(), bytes);
    }

    #[test]
    fn jpeg_is_reencoded_as_png() {
        let payload = ImagePayload::new(jpeg_bytes(), "image/jpeg").unwrap();
        let png = encode_png(&payload).unwrap();
        assert_eq!(image_rs::guess_format(&png).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn undecodable_payload_fails_to_encode() {
        let payload = ImagePayload::new(vec![1u8, 2, 3], "image/jpeg").unwrap();
        assert!(matches!(encode_png(&payload), Err(Error::Encode(_))));
    }

    #[test]
    fn save_png_writes_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(DOWNLOAD_FILE_NAME);
        let payload = ImagePayload::new(jpeg_bytes(), "image/jpeg").unwrap();

        save_png(&payload, &path).expect("save should succeed");
        let written = fs::read(&path).expect("read back");
        assert_eq!(image_rs::guess_format(&written).unwrap(), ImageFormat::Png);
    }
}
