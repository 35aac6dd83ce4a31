//! Drawing primitives: rounded bars, temperature numbers and labels.

use cairo::Context;
use coolerdash_types::LcdConfig;

use crate::layout::{BarRect, TextSide};
use crate::pango_text::{show_text_at, text_extents, FontSpec, TextExtents};
use crate::scaling::ScalingParams;
use crate::slots::ResolvedSlot;

/// Degree glyph size relative to the temperature digits
const DEGREE_SIZE_RATIO: f64 = 0.5;

const DEGREE_GLYPH: &str = "°";

/// Build a closed rounded rectangle path.
///
/// The radius is clamped to half the shorter side; a zero radius gives a
/// plain rectangle.
pub fn rounded_rectangle_path(cr: &Context, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    let radius = radius.min(width / 2.0).min(height / 2.0).max(0.0);

    cr.new_path();
    if radius <= 0.0 {
        cr.rectangle(x, y, width, height);
        return;
    }

    cr.arc(
        x + radius,
        y + radius,
        radius,
        std::f64::consts::PI,
        3.0 * std::f64::consts::PI / 2.0,
    );
    cr.arc(
        x + width - radius,
        y + radius,
        radius,
        3.0 * std::f64::consts::PI / 2.0,
        0.0,
    );
    cr.arc(
        x + width - radius,
        y + height - radius,
        radius,
        0.0,
        std::f64::consts::PI / 2.0,
    );
    cr.arc(
        x + radius,
        y + height - radius,
        radius,
        std::f64::consts::PI / 2.0,
        std::f64::consts::PI,
    );
    cr.close_path();
}

/// Filled width in whole pixels for a value on a bar of `bar_width`.
///
/// Values above `max_scale` saturate at the full width.
pub fn fill_width(value: f64, max_scale: f64, bar_width: f64) -> f64 {
    if max_scale <= 0.0 || !value.is_finite() || bar_width <= 0.0 {
        return 0.0;
    }
    let ratio = (value / max_scale).clamp(0.0, 1.0);
    (ratio * bar_width).round().clamp(0.0, bar_width)
}

/// Draw one bar: background, threshold-colored fill, optional border
pub fn draw_bar(
    cr: &Context,
    config: &LcdConfig,
    scaling: &ScalingParams,
    slot: &ResolvedSlot,
    bar: &BarRect,
) -> Result<(), cairo::Error> {
    let radius = scaling.corner_radius;

    rounded_rectangle_path(cr, bar.x, bar.y, bar.width, bar.height, radius);
    config.colors.bar_background.apply_to_cairo(cr);
    cr.fill()?;

    let filled = fill_width(slot.value, slot.max_scale, bar.width);
    if filled > 0.0 {
        cr.save()?;
        rounded_rectangle_path(cr, bar.x, bar.y, bar.width, bar.height, radius);
        cr.clip();
        cr.rectangle(bar.x, bar.y, filled, bar.height);
        slot.fill_color(config).apply_to_cairo(cr);
        cr.fill()?;
        cr.restore()?;
    }

    let layout = &config.layout;
    if layout.bar_border_enabled && layout.bar_border_width > 0.0 {
        rounded_rectangle_path(cr, bar.x, bar.y, bar.width, bar.height, radius);
        config.colors.bar_border.apply_to_cairo(cr);
        cr.set_line_width(layout.bar_border_width);
        cr.stroke()?;
    }

    Ok(())
}

/// Where a temperature number ended up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperaturePlacement {
    pub baseline: f64,
    /// Extents of the digits, without the degree glyph
    pub extents: TextExtents,
    /// Right ink edge of the digits
    pub digits_right: f64,
    /// Left ink edge of the degree glyph
    pub degree_left: f64,
}

impl TemperaturePlacement {
    pub fn ink_top(&self) -> f64 {
        self.baseline + self.extents.y_bearing
    }

    pub fn ink_bottom(&self) -> f64 {
        self.baseline + self.extents.descent()
    }
}

fn temperature_font(config: &LcdConfig) -> FontSpec<'_> {
    FontSpec::new(
        &config.font.face,
        config.font.temperature_size,
        config.font.bold,
    )
}

fn label_font(config: &LcdConfig) -> FontSpec<'_> {
    FontSpec::new(&config.font.face, config.font.label_size, config.font.bold)
}

/// Draw a slot's temperature above or below its bar, followed by a degree glyph
pub fn draw_temperature_text(
    cr: &Context,
    config: &LcdConfig,
    slot: &ResolvedSlot,
    bar: &BarRect,
    side: TextSide,
) -> Result<TemperaturePlacement, cairo::Error> {
    let text = slot.formatted_value();
    let font = temperature_font(config);
    let extents = text_extents(cr, &text, &font);
    let offset = config.layout.temp_offsets.get(slot.kind);
    let margin = config.layout.temp_bar_margin;

    let center_x = bar.x + bar.width / 2.0 + offset.x;
    let x = center_x - extents.width / 2.0 - extents.x_bearing;
    let baseline = match side {
        TextSide::Above => bar.y - margin - extents.descent(),
        TextSide::Below => bar.y + bar.height + margin - extents.y_bearing,
    } + offset.y;

    cr.save()?;
    config.colors.temperature.apply_to_cairo(cr);
    show_text_at(cr, x, baseline, &text, &font);

    let degree_font = FontSpec::new(font.family, font.size * DEGREE_SIZE_RATIO, font.bold);
    let degree = text_extents(cr, DEGREE_GLYPH, &degree_font);
    let digits_right = x + extents.x_bearing + extents.width;
    let degree_left = digits_right + config.layout.degree_spacing;
    // Align the glyph's top with the top of the digits
    let degree_baseline = baseline + extents.y_bearing - degree.y_bearing;
    show_text_at(
        cr,
        degree_left - degree.x_bearing,
        degree_baseline,
        DEGREE_GLYPH,
        &degree_font,
    );
    cr.restore()?;

    Ok(TemperaturePlacement {
        baseline,
        extents,
        digits_right,
        degree_left,
    })
}

/// Anchor for a slot label
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelAnchor {
    /// Left ink edge at `x`, baseline at `y`
    Baseline { x: f64, y: f64 },
    /// Horizontally centered on `center_x`, ink top at `top`
    CenteredTop { center_x: f64, top: f64 },
    /// Horizontally centered on `center_x`, ink bottom at `bottom`
    CenteredBottom { center_x: f64, bottom: f64 },
}

/// Draw a label at its anchor, shifted by the configured label margin
pub fn draw_label(
    cr: &Context,
    config: &LcdConfig,
    text: &str,
    anchor: LabelAnchor,
) -> Result<(), cairo::Error> {
    let font = label_font(config);
    let extents = text_extents(cr, text, &font);
    let margin = config.layout.label_margin;

    let (x, y) = match anchor {
        LabelAnchor::Baseline { x, y } => (x - extents.x_bearing, y),
        LabelAnchor::CenteredTop { center_x, top } => (
            center_x - extents.width / 2.0 - extents.x_bearing,
            top - extents.y_bearing,
        ),
        LabelAnchor::CenteredBottom { center_x, bottom } => (
            center_x - extents.width / 2.0 - extents.x_bearing,
            bottom - extents.descent(),
        ),
    };

    cr.save()?;
    config.colors.label.apply_to_cairo(cr);
    show_text_at(cr, x + margin.x, y + margin.y, text, &font);
    cr.restore()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairo::{Format, ImageSurface};
    use coolerdash_types::{Color, SensorReading, SlotPosition};

    #[test]
    fn test_fill_width_bounds() {
        assert_eq!(fill_width(0.0, 115.0, 166.0), 0.0);
        assert_eq!(fill_width(115.0, 115.0, 166.0), 166.0);
        assert_eq!(fill_width(300.0, 115.0, 166.0), 166.0);
        assert_eq!(fill_width(-20.0, 115.0, 166.0), 0.0);
        assert!((fill_width(57.5, 115.0, 166.0) - 83.0).abs() <= 0.5);
        assert!((fill_width(57.5, 115.0, 165.0) - 82.5).abs() <= 0.5);
        assert_eq!(fill_width(f64::NAN, 115.0, 166.0), 0.0);
        assert_eq!(fill_width(40.0, 0.0, 166.0), 0.0);
    }

    fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8) {
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        // ARGB32 is stored as native-endian u32
        let offset = y * stride + x * 4;
        let value = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        (
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    #[test]
    fn test_draw_bar_fills_left_part_with_threshold_color() {
        let mut config = LcdConfig::default();
        config.layout.bar_border_enabled = false;
        config.colors.bar_background = Color::from_rgb8(0, 0, 255);

        let scaling = ScalingParams::compute(&config, None);
        let reading = SensorReading::new(57.5, 0.0, 0.0);
        let slot = ResolvedSlot::resolve(&config, &reading, SlotPosition::Up);
        let bar = BarRect::new(10.0, 10.0, 200.0, 20.0);

        let mut surface = ImageSurface::create(Format::ARgb32, 240, 40).unwrap();
        {
            let cr = Context::new(&surface).unwrap();
            draw_bar(&cr, &config, &scaling, &slot, &bar).unwrap();
        }

        // Half filled: standard table maps 57.5 to orange
        assert_eq!(pixel(&mut surface, 60, 20), (255, 140, 0));
        assert_eq!(pixel(&mut surface, 180, 20), (0, 0, 255));
        // Outside the bar stays transparent black
        assert_eq!(pixel(&mut surface, 230, 20), (0, 0, 0));
    }

    /// Bounding box `(min_x, min_y, max_x, max_y)` of pixels with any coverage
    fn ink_bounds(surface: &mut ImageSurface) -> Option<(usize, usize, usize, usize)> {
        surface.flush();
        let width = surface.width() as usize;
        let height = surface.height() as usize;
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();

        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for y in 0..height {
            for x in 0..width {
                let offset = y * stride + x * 4;
                let value = u32::from_ne_bytes([
                    data[offset],
                    data[offset + 1],
                    data[offset + 2],
                    data[offset + 3],
                ]);
                if value >> 24 == 0 {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }

    fn draw_number(
        config: &LcdConfig,
        bar: &BarRect,
        side: TextSide,
    ) -> (ImageSurface, TemperaturePlacement) {
        let reading = SensorReading::new(42.0, 0.0, 0.0);
        let slot = ResolvedSlot::resolve(config, &reading, SlotPosition::Up);
        let surface = ImageSurface::create(Format::ARgb32, 240, 240).unwrap();
        let placement = {
            let cr = Context::new(&surface).unwrap();
            draw_temperature_text(&cr, config, &slot, bar, side).unwrap()
        };
        (surface, placement)
    }

    #[test]
    fn test_number_above_bar() {
        let config = LcdConfig::default();
        let bar = BarRect::new(37.0, 120.0, 166.0, 24.0);
        let (mut surface, placement) = draw_number(&config, &bar, TextSide::Above);

        let (_, min_y, _, max_y) = ink_bounds(&mut surface).unwrap();
        assert!(max_y < bar.y as usize);
        assert!(min_y < max_y);
        assert!(placement.ink_bottom() <= bar.y - config.layout.temp_bar_margin + 1.0);
    }

    #[test]
    fn test_number_below_bar() {
        let config = LcdConfig::default();
        let bar = BarRect::new(37.0, 40.0, 166.0, 24.0);
        let (mut surface, placement) = draw_number(&config, &bar, TextSide::Below);

        let (_, min_y, _, _) = ink_bounds(&mut surface).unwrap();
        assert!(min_y > bar.bottom() as usize);
        assert!(placement.ink_top() >= bar.bottom() + config.layout.temp_bar_margin - 1.0);
    }

    #[test]
    fn test_degree_glyph_follows_digits_at_spacing() {
        let mut config = LcdConfig::default();
        config.layout.degree_spacing = 20.0;
        let bar = BarRect::new(37.0, 120.0, 166.0, 24.0);
        let (mut surface, placement) = draw_number(&config, &bar, TextSide::Above);

        assert!((placement.degree_left - placement.digits_right - 20.0).abs() < 1e-9);

        // Columns between the digits and the glyph stay empty, the glyph starts at its edge
        surface.flush();
        let stride = surface.stride() as usize;
        let gap_start = placement.digits_right.ceil() as usize + 2;
        let glyph_start = placement.degree_left.floor() as usize - 2;
        let data = surface.data().unwrap();
        let column_has_ink = |x: usize| {
            (0..240).any(|y| data[y * stride + x * 4..y * stride + x * 4 + 4] != [0, 0, 0, 0])
        };
        assert!((gap_start..glyph_start).all(|x| !column_has_ink(x)));
        assert!((glyph_start..240).any(column_has_ink));
    }

    #[test]
    fn test_label_anchor_centers_text() {
        let config = LcdConfig::default();
        let mut surface = ImageSurface::create(Format::ARgb32, 240, 240).unwrap();
        {
            let cr = Context::new(&surface).unwrap();
            let anchor = LabelAnchor::CenteredBottom {
                center_x: 120.0,
                bottom: 60.0,
            };
            draw_label(&cr, &config, "CPU", anchor).unwrap();
        }
        let (min_x, _, max_x, max_y) = ink_bounds(&mut surface).unwrap();

        let center = (min_x + max_x) as f64 / 2.0;
        assert!((center - 120.0).abs() <= 2.0);
        assert!(max_y <= 61);
    }

    #[test]
    fn test_draw_bar_without_value_has_no_fill() {
        let mut config = LcdConfig::default();
        config.layout.bar_border_enabled = false;
        config.colors.bar_background = Color::from_rgb8(0, 0, 255);

        let scaling = ScalingParams::compute(&config, None);
        let slot = ResolvedSlot::resolve(&config, &SensorReading::default(), SlotPosition::Up);
        let bar = BarRect::new(10.0, 10.0, 200.0, 20.0);

        let mut surface = ImageSurface::create(Format::ARgb32, 240, 40).unwrap();
        {
            let cr = Context::new(&surface).unwrap();
            draw_bar(&cr, &config, &scaling, &slot, &bar).unwrap();
        }

        assert_eq!(pixel(&mut surface, 20, 20), (0, 0, 255));
    }
}
