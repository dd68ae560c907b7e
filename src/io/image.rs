//! PNG preview export for generated levels
//!
//! One pixel per cell with the route endpoints highlighted. This is a
//! static file dump for eyeballing generation output, not a rendering
//! surface.

use crate::io::error::GenerationError;
use crate::spatial::grid::TileGrid;
use image::{ImageBuffer, Rgba};
use std::path::Path;

const WALL_COLOR: [u8; 4] = [44, 40, 52, 255];
const AIR_COLOR: [u8; 4] = [232, 228, 220, 255];
const START_COLOR: [u8; 4] = [64, 176, 72, 255];
const END_COLOR: [u8; 4] = [200, 56, 48, 255];

/// Export the grid as a PNG preview with start and end marked
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// image cannot be saved.
pub fn export_preview(
    grid: &TileGrid,
    start: [i32; 2],
    end: [i32; 2],
    output_path: &Path,
) -> crate::io::error::Result<()> {
    let width = grid.width() as u32;
    let height = grid.height() as u32;
    let mut img = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let position = [x as i32, y as i32];
            let color = if position == start {
                START_COLOR
            } else if position == end {
                END_COLOR
            } else if grid.get(position[0], position[1]).is_blocked() {
                WALL_COLOR
            } else {
                AIR_COLOR
            };
            img.put_pixel(x, y, Rgba(color));
        }
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| GenerationError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
