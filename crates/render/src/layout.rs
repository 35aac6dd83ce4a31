//! Frame plans shared by the dual and circle layouts.
//!
//! A layout decides where bars, numbers and labels go without touching
//! Cairo. [`draw_frame`] then walks the plan in a fixed order: temperature
//! numbers first, then bars, then labels.

use cairo::Context;
use coolerdash_types::LcdConfig;

use crate::primitives::{
    draw_bar, draw_label, draw_temperature_text, LabelAnchor, TemperaturePlacement,
};
use crate::scaling::ScalingParams;
use crate::slots::ResolvedSlot;

/// Bar rectangle in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Which side of its bar a temperature number sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSide {
    Above,
    Below,
}

/// Where a slot's label goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Centered on the bar, on the far side of the temperature number
    BeyondTemperature,
    /// Centered under the bar
    BelowBar,
}

/// One slot's position in a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    pub slot: ResolvedSlot,
    pub bar: BarRect,
    pub temperature: TextSide,
    /// `None` when labels are suppressed for this frame
    pub label: Option<LabelPlacement>,
}

/// Everything drawn on top of the background for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FramePlan {
    pub slots: Vec<SlotLayout>,
}

impl FramePlan {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of label draws this plan will issue
    pub fn label_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|layout| layout.label.is_some() && layout.slot.label.is_some())
            .count()
    }
}

/// Anchor for a slot's label, given where its number was drawn
pub fn label_anchor(
    layout: &SlotLayout,
    placement: LabelPlacement,
    temperature: &TemperaturePlacement,
    spacing: f64,
) -> LabelAnchor {
    let center_x = layout.bar.center_x();
    match (placement, layout.temperature) {
        (LabelPlacement::BeyondTemperature, TextSide::Above) => LabelAnchor::CenteredBottom {
            center_x,
            bottom: temperature.ink_top() - spacing,
        },
        (LabelPlacement::BeyondTemperature, TextSide::Below) => LabelAnchor::CenteredTop {
            center_x,
            top: temperature.ink_bottom() + spacing,
        },
        (LabelPlacement::BelowBar, _) => LabelAnchor::CenteredTop {
            center_x,
            top: layout.bar.bottom() + spacing,
        },
    }
}

/// Draw a plan onto a context that already has the background painted
pub fn draw_frame(
    cr: &Context,
    config: &LcdConfig,
    scaling: &ScalingParams,
    plan: &FramePlan,
) -> Result<(), cairo::Error> {
    let mut placements = Vec::with_capacity(plan.slots.len());
    for layout in &plan.slots {
        placements.push(draw_temperature_text(
            cr,
            config,
            &layout.slot,
            &layout.bar,
            layout.temperature,
        )?);
    }

    for layout in &plan.slots {
        draw_bar(cr, config, scaling, &layout.slot, &layout.bar)?;
    }

    for (layout, temperature) in plan.slots.iter().zip(&placements) {
        let (Some(placement), Some(text)) = (layout.label, layout.slot.label) else {
            continue;
        };
        let anchor = label_anchor(
            layout,
            placement,
            temperature,
            config.layout.temp_bar_margin,
        );
        draw_label(cr, config, text, anchor)?;
    }

    Ok(())
}
