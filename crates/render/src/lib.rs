//! coolerdash-render: Cairo rendering and dynamic scaling for LCD frames.
//!
//! [`LcdRenderer`] is the entry point. It computes [`ScalingParams`] for the
//! panel, lays out either the dual or the circle frame and draws it onto an
//! ARGB32 [`cairo::ImageSurface`] of exactly the configured size.

pub mod circle;
pub mod dispatcher;
pub mod dual;
pub mod error;
pub mod layout;
pub mod pango_text;
pub mod png;
pub mod primitives;
pub mod scaling;
pub mod slots;

pub use circle::CircleModeState;
pub use dispatcher::LcdRenderer;
pub use error::{RenderError, Result};
pub use layout::{BarRect, FramePlan, LabelPlacement, SlotLayout, TextSide};
pub use scaling::{DisplayShape, ScalingParams};
pub use slots::ResolvedSlot;

// Re-export types used in the renderer's signatures
pub use coolerdash_types::{DeviceInfo, DisplayMode, LcdConfig, SensorReading};
