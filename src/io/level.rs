//! Text level export
//!
//! The on-disk format is H lines of W characters (`0` open, `1` blocked,
//! `@` start, `X` end) followed by a fixed metadata block: author line,
//! title line, four numeric fields, a resource line (`NONE` when absent),
//! a revision field, two blank lines, and a trailing `0`. The downstream
//! consumer depends on the line order, not the values.

use crate::io::configuration::{
    LEVEL_AUTHOR, LEVEL_NUMERIC_FIELDS, LEVEL_REVISION, LEVEL_TITLE,
};
use crate::io::error::GenerationError;
use crate::spatial::grid::TileGrid;
use std::fmt::Write as _;
use std::path::Path;

/// Header values appended after the grid rows
#[derive(Clone, Debug)]
pub struct LevelMetadata {
    /// Author line
    pub author: String,
    /// Title line
    pub title: String,
    /// Four numeric fields following the title
    pub fields: [i32; 4],
    /// Optional resource name; the literal `NONE` is written when absent
    pub resource: Option<String>,
    /// Revision field closing the numeric block
    pub revision: i32,
}

impl Default for LevelMetadata {
    fn default() -> Self {
        Self {
            author: LEVEL_AUTHOR.to_string(),
            title: LEVEL_TITLE.to_string(),
            fields: LEVEL_NUMERIC_FIELDS,
            resource: None,
            revision: LEVEL_REVISION,
        }
    }
}

/// Render the level and its metadata block as text
pub fn render_level(
    grid: &TileGrid,
    start: [i32; 2],
    end: [i32; 2],
    metadata: &LevelMetadata,
) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * (grid.height() + 12));

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let glyph = if [x, y] == start {
                '@'
            } else if [x, y] == end {
                'X'
            } else if grid.get(x, y).is_blocked() {
                '1'
            } else {
                '0'
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    out.push_str(&metadata.author);
    out.push('\n');
    out.push_str(&metadata.title);
    out.push('\n');
    for field in metadata.fields {
        let _ = writeln!(out, "{field}");
    }
    match &metadata.resource {
        Some(resource) => out.push_str(resource),
        None => out.push_str("NONE"),
    }
    out.push('\n');
    let _ = writeln!(out, "{}", metadata.revision);
    out.push('\n');
    out.push('\n');
    out.push_str("0\n");

    out
}

/// Write the rendered level to disk, creating parent directories
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn save_level(
    grid: &TileGrid,
    start: [i32; 2],
    end: [i32; 2],
    metadata: &LevelMetadata,
    path: &Path,
) -> crate::io::error::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let rendered = render_level(grid, start, end, metadata);
    std::fs::write(path, rendered).map_err(|e| GenerationError::LevelExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
