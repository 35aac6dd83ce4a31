//! coolerdash-types: Shared data types for the coolerdash LCD renderer.
//!
//! This crate contains pure data types (configuration, sensor readings,
//! threshold tables) shared by the renderer and the application. Nothing
//! here depends on Cairo unless the `cairo` feature is enabled.

pub mod color;
pub mod config;
pub mod sensor;
pub mod thresholds;

// Re-export commonly used types at the crate root for convenience
pub use color::Color;
pub use config::{
    ColorSettings, DisplayMode, DisplaySettings, FontSettings, KindOffsets, LayoutSettings,
    LcdConfig, Offset, ShapeOverride, SlotConfig, SlotSettings, TemperatureSettings,
};
pub use sensor::{DeviceInfo, SensorKind, SensorReading, SlotPosition};
pub use thresholds::{ColorThreshold, ThresholdTable};
