//! Local image → `data:` URL.
//!
//! The result can go anywhere an image URL is accepted (main images, feature
//! images, comparison images, the logo). The format is sniffed from the
//! file's magic bytes, not its extension.

use crate::error::ListingError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;
use tracing::debug;

/// Read `path` and encode it as `data:<mime>;base64,<payload>`.
pub fn image_data_url(path: impl AsRef<Path>) -> Result<String, ListingError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => ListingError::PermissionDenied {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::NotFound => ListingError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ListingError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    let url = bytes_to_data_url(&bytes).ok_or_else(|| ListingError::NotAnImage {
        path: path.to_path_buf(),
    })?;
    debug!("Embedded {} → {} bytes", path.display(), url.len());
    Ok(url)
}

/// Encode raw image bytes, `None` when they are not a recognised image.
pub fn bytes_to_data_url(bytes: &[u8]) -> Option<String> {
    let format = image::guess_format(bytes).ok()?;
    Some(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(bytes)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = RgbaImage::from_pixel(2, 2, Rgba([200, 10, 10, 255]));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .expect("encode png");
        buf
    }

    #[test]
    fn png_becomes_data_url() {
        let url = bytes_to_data_url(&png_bytes()).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        let payload = url.trim_start_matches("data:image/png;base64,");
        assert_eq!(STANDARD.decode(payload).unwrap(), png_bytes());
    }

    #[test]
    fn extension_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        std::fs::write(&path, png_bytes()).unwrap();
        assert!(image_data_url(&path).unwrap().starts_with("data:image/png;"));
    }

    #[test]
    fn non_image_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "just some text").unwrap();
        assert!(matches!(
            image_data_url(&path),
            Err(ListingError::NotAnImage { .. })
        ));
    }
}
