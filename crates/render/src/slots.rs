//! Slot resolution: what a position shows and how tall its bar is.

use coolerdash_types::{Color, LcdConfig, SensorKind, SensorReading, SlotPosition};

/// Everything the layouts need to know about one slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSlot {
    pub position: SlotPosition,
    pub kind: SensorKind,
    /// Temperature in degrees Celsius, 0.0 for inactive slots
    pub value: f64,
    pub label: Option<&'static str>,
    /// Temperature that fills the bar completely
    pub max_scale: f64,
    pub bar_height: f64,
    pub is_active: bool,
}

impl ResolvedSlot {
    /// Resolve a slot position against the config and the current reading
    pub fn resolve(config: &LcdConfig, data: &SensorReading, position: SlotPosition) -> Self {
        let slot = config.slots.get(position);
        let kind = slot.sensor;

        Self {
            position,
            kind,
            value: data.value(kind).unwrap_or(0.0),
            label: kind.label(),
            max_scale: config.temperature.max_scale_for(kind),
            bar_height: slot.bar_height,
            is_active: kind.is_active(),
        }
    }

    /// Bar fill ratio, clamped to `[0, 1]`
    pub fn fill_ratio(&self) -> f64 {
        if self.max_scale <= 0.0 || !self.value.is_finite() {
            return 0.0;
        }
        (self.value / self.max_scale).clamp(0.0, 1.0)
    }

    /// Fill color from the kind's threshold table
    pub fn fill_color(&self, config: &LcdConfig) -> Color {
        config.temperature.table_for(self.kind).resolve(self.value)
    }

    /// Number as drawn on the panel
    pub fn formatted_value(&self) -> String {
        self.kind.format_value(self.value)
    }
}

/// Resolve all three positions in scan order
pub fn resolve_all(config: &LcdConfig, data: &SensorReading) -> [ResolvedSlot; 3] {
    SlotPosition::ALL.map(|position| ResolvedSlot::resolve(config, data, position))
}
