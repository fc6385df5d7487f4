// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! This module decodes image files into RGBA pixels suitable for uploading
//! as an egui texture.

use anyhow::{Context, Result};
use std::path::Path;

/// File extensions offered in the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "webp", "tiff", "tif"];

/// A decoded image.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major, unmultiplied alpha.
    pub pixels: Vec<u8>,
}

/// Decode an image file into RGBA pixels.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path).with_context(|| format!("Failed to decode {}", path.display()))?;
    let rgba = img.to_rgba8();
    anyhow::ensure!(
        rgba.width() > 0 && rgba.height() > 0,
        "Image {} has no pixels",
        path.display()
    );

    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}
