//! Render error type

use std::path::PathBuf;

use thiserror::Error;

/// Why a frame could not be produced
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid display size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("failed to create {width}x{height} surface: {source}")]
    Surface {
        width: u32,
        height: u32,
        #[source]
        source: cairo::Error,
    },

    #[error("failed to create drawing context: {0}")]
    Context(#[source] cairo::Error),

    #[error("drawing failed: {0}")]
    Draw(#[from] cairo::Error),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
