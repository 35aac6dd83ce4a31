//! Dynamic scaling for rectangular and round panels.
//!
//! Round panels lose their corners behind the bezel, so everything has to fit
//! inside the largest inscribed square. The inscribe factor is the side of
//! that square relative to the display width: `1/sqrt(2)` for a circle.

use coolerdash_types::{DeviceInfo, DisplayMode, LcdConfig, ShapeOverride, SlotPosition};

/// Side of the largest square inscribed in a unit-diameter circle
pub const CIRCLE_INSCRIBE_FACTOR: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Width the visual constants were tuned for
pub const REFERENCE_WIDTH: f64 = 240.0;

/// Bar corner radius at the reference width
pub const REFERENCE_CORNER_RADIUS: f64 = 8.0;

/// Panel families with a round LCD, matched case-insensitively against the device name
const ROUND_PANEL_FAMILIES: &[&str] = &["kraken"];

/// Round panels report more than this square resolution
const ROUND_PANEL_MIN_SIZE: u32 = 240;

const DEFAULT_CONTENT_SCALE_FACTOR: f64 = 0.98;

/// Effective display shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayShape {
    Rectangular,
    Circular,
}

/// Geometry derived once per render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingParams {
    pub safe_area_width: f64,
    pub safe_bar_width: f64,
    pub corner_radius: f64,
    pub is_circular: bool,
    pub inscribe_factor: f64,
}

impl ScalingParams {
    /// Compute the scaling for a config and an optional device hint
    pub fn compute(config: &LcdConfig, hint: Option<&DeviceInfo>) -> Self {
        let shape = effective_shape(config.display.shape, hint);
        let is_circular = shape == DisplayShape::Circular;
        let inscribe_factor = resolve_inscribe_factor(shape, config.display.inscribe_factor);

        let display_width = config.display.width as f64;
        let safe_area_width = display_width * inscribe_factor;
        let safe_bar_width = safe_area_width * content_scale(config.display.content_scale_factor);

        let shortest_bar = drawn_positions(config.display.mode)
            .iter()
            .map(|&position| config.slots.get(position))
            .filter(|slot| slot.sensor.is_active())
            .map(|slot| slot.bar_height)
            .fold(f64::INFINITY, f64::min);
        let corner_radius = clamp_corner_radius(
            REFERENCE_CORNER_RADIUS * display_width / REFERENCE_WIDTH,
            safe_bar_width,
            shortest_bar,
        );

        Self {
            safe_area_width,
            safe_bar_width,
            corner_radius,
            is_circular,
            inscribe_factor,
        }
    }

    /// Left edge of the centered safe bar span
    pub fn bar_x(&self, display_width: f64) -> f64 {
        (display_width - self.safe_bar_width) / 2.0
    }
}

/// Slot positions a display mode can draw
pub fn drawn_positions(mode: DisplayMode) -> &'static [SlotPosition] {
    match mode {
        DisplayMode::Dual => &[SlotPosition::Up, SlotPosition::Down],
        DisplayMode::Circle => &SlotPosition::ALL,
    }
}

/// Whether a device reports a round panel
pub fn detect_shape(device: &DeviceInfo) -> DisplayShape {
    let name = device.name.to_lowercase();
    let known_family = ROUND_PANEL_FAMILIES
        .iter()
        .any(|family| name.contains(family));

    if known_family && device.width > ROUND_PANEL_MIN_SIZE && device.height > ROUND_PANEL_MIN_SIZE
    {
        DisplayShape::Circular
    } else {
        DisplayShape::Rectangular
    }
}

/// Explicit override first, then detection, rectangular without a hint
pub fn effective_shape(shape: ShapeOverride, hint: Option<&DeviceInfo>) -> DisplayShape {
    match shape {
        ShapeOverride::Rectangular => DisplayShape::Rectangular,
        ShapeOverride::Circular => DisplayShape::Circular,
        ShapeOverride::Auto => hint.map(detect_shape).unwrap_or(DisplayShape::Rectangular),
    }
}

/// Inscribe factor for a shape; out of range values fall back to `1/sqrt(2)`
pub fn resolve_inscribe_factor(shape: DisplayShape, configured: f64) -> f64 {
    match shape {
        DisplayShape::Rectangular => 1.0,
        DisplayShape::Circular => {
            if configured > 0.0 && configured <= 1.0 {
                configured
            } else {
                if configured != 0.0 {
                    log::debug!(
                        "Inscribe factor {} out of range, using {:.4}",
                        configured,
                        CIRCLE_INSCRIBE_FACTOR
                    );
                }
                CIRCLE_INSCRIBE_FACTOR
            }
        }
    }
}

fn content_scale(factor: f64) -> f64 {
    if factor.is_finite() {
        factor.clamp(0.0, 1.0)
    } else {
        log::debug!("Content scale factor {} is not finite, using default", factor);
        DEFAULT_CONTENT_SCALE_FACTOR
    }
}

/// Keep the radius within half the shorter bar side
pub fn clamp_corner_radius(radius: f64, bar_width: f64, bar_height: f64) -> f64 {
    let limit = bar_width.min(bar_height) / 2.0;
    radius.min(limit).max(0.0)
}
