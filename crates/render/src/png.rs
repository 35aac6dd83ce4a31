//! PNG encoding of finished frames.
//!
//! The frame is written to a sibling temp file and renamed into place, so a
//! reader polling the target path never sees a half-written image.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use cairo::ImageSurface;

use crate::error::{RenderError, Result};

/// Encode a surface as PNG bytes
pub fn encode_png(surface: &ImageSurface) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    surface.write_to_png(&mut buffer)?;
    Ok(buffer)
}

/// Write a surface to `path` as PNG
pub fn write_png(surface: &ImageSurface, path: &Path) -> Result<()> {
    let temp_path = temp_path_for(path);

    let result = write_synced(surface, &temp_path, path).and_then(|()| {
        std::fs::rename(&temp_path, path).map_err(|source| io_error(path, source))
    });
    if result.is_err() {
        let _ = std::fs::remove_file(&temp_path);
    }
    result?;

    log::debug!("Wrote frame to {}", path.display());
    Ok(())
}

/// Encode into `temp_path` and make sure the bytes reached the disk
fn write_synced(surface: &ImageSurface, temp_path: &Path, target: &Path) -> Result<()> {
    let file = File::create(temp_path).map_err(|source| io_error(target, source))?;
    let mut writer = BufWriter::new(file);
    surface.write_to_png(&mut writer)?;
    writer.flush().map_err(|source| io_error(target, source))?;

    let file = writer
        .into_inner()
        .map_err(|e| io_error(target, e.into_error()))?;
    file.sync_all().map_err(|source| io_error(target, source))?;
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
