//! Dual mode: the up and down slots stacked around the vertical center.
//!
//! The up number sits above its bar and the down number below its bar, so
//! the bars form the middle of the stack. The mid slot is never shown here.

use coolerdash_types::{LcdConfig, SensorReading, SlotPosition};

use crate::layout::{BarRect, FramePlan, LabelPlacement, SlotLayout, TextSide};
use crate::scaling::ScalingParams;
use crate::slots::ResolvedSlot;

/// From this temperature on, three digits leave no room for labels
pub const LABEL_SUPPRESS_TEMPERATURE: f64 = 99.0;

/// Whether labels are drawn for a set of slots
pub fn labels_visible(slots: &[ResolvedSlot]) -> bool {
    !slots
        .iter()
        .any(|slot| slot.is_active && slot.value >= LABEL_SUPPRESS_TEMPERATURE)
}

/// Lay out the dual mode frame
pub fn plan_dual(config: &LcdConfig, data: &SensorReading, scaling: &ScalingParams) -> FramePlan {
    let up = ResolvedSlot::resolve(config, data, SlotPosition::Up);
    let down = ResolvedSlot::resolve(config, data, SlotPosition::Down);
    let active: Vec<(ResolvedSlot, TextSide)> = [(up, TextSide::Above), (down, TextSide::Below)]
        .into_iter()
        .filter(|(slot, _)| slot.is_active)
        .collect();

    if active.is_empty() {
        return FramePlan::default();
    }

    let display_width = config.display.width as f64;
    let display_height = config.display.height as f64;
    let gap = if active.len() == 2 {
        config.layout.bar_gap
    } else {
        0.0
    };
    let stack_height: f64 = active.iter().map(|(slot, _)| slot.bar_height).sum::<f64>() + gap;

    let bar_x = scaling.bar_x(display_width);
    let show_labels = {
        let slots: Vec<ResolvedSlot> = active.iter().map(|(slot, _)| *slot).collect();
        labels_visible(&slots)
    };

    let mut y = (display_height - stack_height) / 2.0;
    let mut slots = Vec::with_capacity(active.len());
    for (slot, side) in active {
        slots.push(SlotLayout {
            slot,
            bar: BarRect::new(bar_x, y, scaling.safe_bar_width, slot.bar_height),
            temperature: side,
            label: show_labels.then_some(LabelPlacement::BeyondTemperature),
        });
        y += slot.bar_height + gap;
    }

    log::trace!(
        "Dual layout: {} slot(s), stack height {:.1}, labels {}",
        slots.len(),
        stack_height,
        show_labels
    );

    FramePlan { slots }
}
