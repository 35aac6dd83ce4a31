//! Frame rendering entry point.
//!
//! [`LcdRenderer`] owns the circle mode rotation state. Rendering takes
//! `&mut self`, so two frames can never interleave their state updates; share
//! a renderer between threads behind a `Mutex`.

use std::path::Path;
use std::time::Instant;

use cairo::{Context, Format, ImageSurface};
use coolerdash_types::{DeviceInfo, DisplayMode, LcdConfig, SensorReading};

use crate::circle::{plan_circle, switch_interval, CircleModeState};
use crate::dual::plan_dual;
use crate::error::{RenderError, Result};
use crate::layout::{draw_frame, FramePlan};
use crate::png::write_png;
use crate::scaling::ScalingParams;

/// Renders LCD frames from a config and sensor readings
#[derive(Debug, Default)]
pub struct LcdRenderer {
    circle: CircleModeState,
    device: Option<DeviceInfo>,
}

impl LcdRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with a device hint for shape auto-detection
    pub fn with_device(device: DeviceInfo) -> Self {
        Self {
            circle: CircleModeState::default(),
            device: Some(device),
        }
    }

    pub fn set_device(&mut self, device: Option<DeviceInfo>) {
        self.device = device;
    }

    pub fn device(&self) -> Option<&DeviceInfo> {
        self.device.as_ref()
    }

    /// Circle mode rotation state
    pub fn circle_state(&self) -> &CircleModeState {
        &self.circle
    }

    /// Render a frame at the current time
    pub fn render(&mut self, config: &LcdConfig, data: &SensorReading) -> Result<ImageSurface> {
        self.render_at(config, data, Instant::now())
    }

    /// Render a frame as if the clock read `now`
    pub fn render_at(
        &mut self,
        config: &LcdConfig,
        data: &SensorReading,
        now: Instant,
    ) -> Result<ImageSurface> {
        let scaling = ScalingParams::compute(config, self.device.as_ref());
        let plan = self.plan_at(config, data, &scaling, now);
        paint(config, &scaling, &plan)
    }

    /// Render and write the frame to `path` as PNG
    pub fn render_to_png(
        &mut self,
        config: &LcdConfig,
        data: &SensorReading,
        path: &Path,
    ) -> Result<()> {
        let surface = self.render(config, data)?;
        write_png(&surface, path)
    }

    /// Lay out a frame, advancing the circle rotation in circle mode
    pub fn plan_at(
        &mut self,
        config: &LcdConfig,
        data: &SensorReading,
        scaling: &ScalingParams,
        now: Instant,
    ) -> FramePlan {
        match config.display.mode {
            DisplayMode::Dual => plan_dual(config, data, scaling),
            DisplayMode::Circle => {
                let position = self
                    .circle
                    .advance(&config.slots, switch_interval(config), now);
                plan_circle(config, data, scaling, position)
            }
        }
    }
}

/// Create the surface, paint the background and draw the plan
fn paint(config: &LcdConfig, scaling: &ScalingParams, plan: &FramePlan) -> Result<ImageSurface> {
    let width = config.display.width;
    let height = config.display.height;
    let (surface_width, surface_height) = match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => return Err(RenderError::InvalidSize { width, height }),
    };

    let surface = ImageSurface::create(Format::ARgb32, surface_width, surface_height).map_err(
        |source| RenderError::Surface {
            width,
            height,
            source,
        },
    )?;

    {
        let cr = Context::new(&surface).map_err(RenderError::Context)?;

        config.colors.background.apply_to_cairo(&cr);
        cr.paint()?;

        apply_orientation(&cr, config);
        draw_frame(&cr, config, scaling, plan)?;
    }

    surface.flush();
    log::debug!(
        "Rendered {:?} frame {}x{} with {} slot(s)",
        config.display.mode,
        width,
        height,
        plan.slots.len()
    );
    Ok(surface)
}

/// Rotate the drawing space clockwise around the display center.
///
/// Quarter turns need a square panel; on other panels they are skipped.
fn apply_orientation(cr: &Context, config: &LcdConfig) {
    let width = config.display.width;
    let height = config.display.height;

    let quarter_turns: u8 = match config.display.orientation {
        0 => return,
        90 => 1,
        180 => 2,
        270 => 3,
        other => {
            log::debug!("Unsupported orientation {}, drawing unrotated", other);
            return;
        }
    };

    if quarter_turns % 2 == 1 && width != height {
        log::debug!(
            "Orientation {} needs a square panel, drawing {}x{} unrotated",
            config.display.orientation,
            width,
            height
        );
        return;
    }

    let (center_x, center_y) = (width as f64 / 2.0, height as f64 / 2.0);
    cr.translate(center_x, center_y);
    cr.rotate(f64::from(quarter_turns) * std::f64::consts::FRAC_PI_2);
    cr.translate(-center_x, -center_y);
}
