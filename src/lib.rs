//! coolerdash: temperature dashboard frames for cooler LCD panels
//!
//! This library ties the workspace together:
//! - `coolerdash-types`: configuration, sensor readings, threshold tables
//! - `coolerdash-render`: dynamic scaling and Cairo rendering
//! - [`config`]: loading and saving the application config file

pub mod config;

pub use coolerdash_render as render;
pub use coolerdash_types as types;

// Re-export commonly used types
pub use config::AppConfig;
pub use coolerdash_render::{LcdRenderer, RenderError};
pub use coolerdash_types::{DeviceInfo, LcdConfig, SensorReading};
