/// Thumbnail generation for the gallery grid
use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};

/// Size of generated thumbnails (square bounding box)
const THUMBNAIL_SIZE: u32 = 256;

/// Decode a local asset and downscale it for the gallery
/// Returns None if the file is missing or not a decodable raster image
pub async fn generate(path: PathBuf) -> Option<Handle> {
    // Spawn blocking task for the CPU-bound decode work
    tokio::task::spawn_blocking(move || generate_blocking(&path))
        .await
        .ok()
        .flatten()
}

/// Blocking version of thumbnail generation
fn generate_blocking(path: &Path) -> Option<Handle> {
    let decoded = match image::open(path) {
        Ok(decoded) => decoded,
        Err(error) => {
            eprintln!("⚠️  Failed to decode {}: {}", path.display(), error);
            return None;
        }
    };

    // Resize to thumbnail size, preserving aspect ratio
    let thumbnail = decoded.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);
    let rgba = thumbnail.to_rgba8();
    let (width, height) = rgba.dimensions();

    Some(Handle::from_rgba(width, height, rgba.into_raw()))
}
