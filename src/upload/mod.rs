/// File acquisition for the detection screen
///
/// This module handles:
/// - Picking a photo through the native file dialog
/// - Reading files dropped onto the window
/// - Advisory image-type checks by extension
/// - Deriving previews (preview.rs)

pub mod preview;

use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::state::data::PickedFile;

/// Extensions offered by the picker and accepted on drop
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Show the file dialog and read the chosen file.
///
/// None means the dialog was cancelled.
pub async fn pick_image() -> Option<PickedFile> {
    let handle = AsyncFileDialog::new()
        .set_title("Pilih Foto Tanaman")
        .add_filter("Gambar", &IMAGE_EXTENSIONS)
        .pick_file()
        .await;

    let Some(handle) = handle else {
        debug!("File dialog cancelled");
        return None;
    };

    // rfd reports read failures as an empty Vec
    let bytes = handle.read().await;
    Some(into_picked(handle.file_name(), bytes))
}

/// Read a file dropped onto the window
pub async fn read_dropped(path: PathBuf) -> Result<PickedFile, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("Gagal membaca {}: {}", path.display(), e))?;

    Ok(into_picked(file_name(&path), bytes))
}

/// Wrap a payload as a selection. Empty payloads are kept: they show no
/// preview and fail at analysis like any other undecodable file.
fn into_picked(name: String, bytes: Vec<u8>) -> PickedFile {
    if bytes.is_empty() {
        warn!("{} is empty or could not be read", name);
    } else {
        info!("Picked {} ({} bytes)", name, bytes.len());
    }
    PickedFile { name, bytes }
}

/// Whether a file name carries an image extension.
///
/// Advisory only: the picker filter and the drop handler use it, nothing
/// downstream relies on it.
pub fn looks_like_image(name: &str) -> bool {
    extension(name)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Best-effort MIME type for the upload part
pub fn guess_mime(name: &str) -> &'static str {
    match extension(name).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

fn extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_looks_like_image() {
        assert!(looks_like_image("daun.jpg"));
        assert!(looks_like_image("DAUN.JPEG"));
        assert!(looks_like_image("leaf.webp"));
        assert!(!looks_like_image("notes.txt"));
        assert!(!looks_like_image("no_extension"));
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("a.PNG"), "image/png");
        assert_eq!(guess_mime("a.jpeg"), "image/jpeg");
        assert_eq!(guess_mime("a.webp"), "image/webp");
        assert_eq!(guess_mime("a.heic"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_read_dropped_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tomat.png");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let file = read_dropped(path).await.unwrap();

        assert_eq!(file.name, "tomat.png");
        assert_eq!(file.bytes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_read_dropped_missing_file() {
        let temp = tempdir().unwrap();
        let result = read_dropped(temp.path().join("hilang.jpg")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_file_is_still_selected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("kosong.jpg");
        std::fs::write(&path, b"").unwrap();

        let file = read_dropped(path).await.unwrap();

        assert_eq!(file.name, "kosong.jpg");
        assert!(file.bytes.is_empty());
    }

    #[test]
    fn test_into_picked_keeps_empty_payload() {
        let file = into_picked("daun.png".to_string(), Vec::new());
        assert_eq!(
            file,
            PickedFile {
                name: "daun.png".to_string(),
                bytes: Vec::new(),
            }
        );
    }
}
