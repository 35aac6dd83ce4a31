//! Sensor kinds, slot positions and the per-render reading snapshot.

use serde::{Deserialize, Serialize};

/// What a slot displays
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SensorKind {
    #[serde(rename = "cpu")]
    Cpu,
    #[serde(rename = "gpu")]
    Gpu,
    #[serde(rename = "liquid")]
    Liquid,
    #[serde(rename = "none")]
    #[default]
    None,
}

impl SensorKind {
    /// A slot bound to `None` is never drawn
    pub fn is_active(self) -> bool {
        self != SensorKind::None
    }

    /// Coolant sensors use the liquid scale and threshold table
    pub fn is_liquid(self) -> bool {
        self == SensorKind::Liquid
    }

    /// Short text drawn next to the slot
    pub fn label(self) -> Option<&'static str> {
        match self {
            SensorKind::Cpu => Some("CPU"),
            SensorKind::Gpu => Some("GPU"),
            SensorKind::Liquid => Some("LIQ"),
            SensorKind::None => None,
        }
    }

    /// Format a value the way the panel shows it.
    ///
    /// Liquid temperatures keep one decimal; CPU and GPU are whole degrees.
    pub fn format_value(self, value: f64) -> String {
        if self.is_liquid() {
            format!("{:.1}", value)
        } else {
            format!("{:.0}", value)
        }
    }
}

/// Vertical slot position on the panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SlotPosition {
    #[serde(rename = "up")]
    #[default]
    Up,
    #[serde(rename = "mid")]
    Mid,
    #[serde(rename = "down")]
    Down,
}

impl SlotPosition {
    /// All positions in scan order
    pub const ALL: [SlotPosition; 3] = [SlotPosition::Up, SlotPosition::Mid, SlotPosition::Down];

    pub fn index(self) -> usize {
        match self {
            SlotPosition::Up => 0,
            SlotPosition::Mid => 1,
            SlotPosition::Down => 2,
        }
    }

    /// Position for an index, wrapping modulo 3
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Next position in scan order, wrapping from `Down` back to `Up`
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Temperatures in degrees Celsius, valid for a single render call
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SensorReading {
    pub cpu: f64,
    pub gpu: f64,
    pub liquid: f64,
}

impl SensorReading {
    pub fn new(cpu: f64, gpu: f64, liquid: f64) -> Self {
        Self { cpu, gpu, liquid }
    }

    /// Value for a sensor kind, `None` for unassigned slots
    pub fn value(&self, kind: SensorKind) -> Option<f64> {
        match kind {
            SensorKind::Cpu => Some(self.cpu),
            SensorKind::Gpu => Some(self.gpu),
            SensorKind::Liquid => Some(self.liquid),
            SensorKind::None => None,
        }
    }
}

/// Display metadata reported by the cooler, used to auto-detect round panels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DeviceInfo {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl DeviceInfo {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}
