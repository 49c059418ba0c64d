use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if path.is_file() && lowercase_extension(&path).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str())) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        bail!("no image files found in directory {}", dir_path.display());
    }
    Ok(paths)
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension().and_then(|s| s.to_str()).map(str::to_lowercase)
}

/// EXIF orientation tag of a JPEG, 1 (upright) when absent or unreadable.
pub fn exif_orientation(file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Non-critical: proceed without rotation
            warn!("could not read EXIF data: {e}");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read file {}", image_path.display()))?;

    let extension = lowercase_extension(image_path).unwrap_or_default();
    // Only JPEG carries EXIF reliably
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("failed to decode {}: {e}", image_path.display()))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Mirrored variants are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(path = %image_path.display(), orientation, "applied EXIF rotation");
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {e}", image_path.display()))?;

    Ok(texture)
}
