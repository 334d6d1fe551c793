//! File loading utilities for webview display.
//!
//! The desktop webview cannot reach arbitrary local paths, so photos and
//! music are handed over as base64 data URLs.

use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Errors from loading media files.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unsupported media type: {0}")]
    UnsupportedType(PathBuf),
}

/// Image extensions eligible for the photo deck.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "mp3" => Some("audio/mpeg"),
        "ogg" => Some("audio/ogg"),
        "wav" => Some("audio/wav"),
        "m4a" => Some("audio/mp4"),
        "flac" => Some("audio/flac"),
        _ => None,
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Converts a local image or audio file to a data URL.
pub fn load_media_as_data_url(path: &Path) -> Result<String, MediaError> {
    let mime = extension_of(path)
        .as_deref()
        .and_then(mime_for_extension)
        .ok_or_else(|| MediaError::UnsupportedType(path.to_path_buf()))?;

    let data = std::fs::read(path).map_err(|source| MediaError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let encoded = STANDARD.encode(&data);
    Ok(format!("data:{};base64,{}", mime, encoded))
}

/// Wraps inline SVG markup in a data URL.
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// Scans a directory for photos, in filename order, up to `limit` entries.
pub fn scan_photo_dir(dir: &Path, limit: usize) -> Result<Vec<PathBuf>, MediaError> {
    let entries = std::fs::read_dir(dir).map_err(|source| MediaError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut photos: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && extension_of(path)
                    .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
                    .unwrap_or(false)
        })
        .collect();

    photos.sort();
    photos.truncate(limit);
    Ok(photos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("billet-ui-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("jpg"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("mp3"), Some("audio/mpeg"));
        assert_eq!(mime_for_extension("exe"), None);
    }

    #[test]
    fn test_data_url_prefix() {
        let dir = temp_dir("data-url");
        let file = dir.join("photo.png");
        std::fs::write(&file, [0x89, 0x50, 0x4e, 0x47]).unwrap();

        let url = load_media_as_data_url(&file).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_svg_data_url() {
        let url = svg_data_url("<svg xmlns='http://www.w3.org/2000/svg'/>");
        assert!(url.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_unsupported_type_is_rejected() {
        let err = load_media_as_data_url(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(err, MediaError::UnsupportedType(_)));
    }

    #[test]
    fn test_scan_orders_and_limits() {
        let dir = temp_dir("scan");
        for name in ["c.jpg", "a.png", "d.webp", "b.jpeg", "skip.txt"] {
            std::fs::write(dir.join(name), b"x").unwrap();
        }

        let photos = scan_photo_dir(&dir, 3).unwrap();
        let names: Vec<_> = photos
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.png", "b.jpeg", "c.jpg"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
