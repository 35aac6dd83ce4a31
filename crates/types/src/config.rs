//! LCD rendering configuration.
//!
//! Every field carries a serde default so a partial JSON file deserializes
//! into a complete config. The renderer takes the result as-is; out of range
//! values are handled by the renderer's own fallbacks, not here.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::sensor::{SensorKind, SlotPosition};
use crate::thresholds::ThresholdTable;

/// Display shape override
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ShapeOverride {
    /// Detect from the device name and resolution
    #[serde(rename = "auto")]
    #[default]
    Auto,
    #[serde(rename = "rectangular")]
    Rectangular,
    #[serde(rename = "circular")]
    Circular,
}

/// Presentation mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Up and down slots shown together
    #[serde(rename = "dual")]
    #[default]
    Dual,
    /// One active slot at a time, rotating on a timer
    #[serde(rename = "circle")]
    Circle,
}

/// Panel geometry and mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplaySettings {
    #[serde(default = "default_display_size")]
    pub width: u32,
    #[serde(default = "default_display_size")]
    pub height: u32,
    #[serde(default)]
    pub shape: ShapeOverride,
    #[serde(default)]
    pub mode: DisplayMode,
    /// Fraction of the safe area used by bars (0.0 to 1.0)
    #[serde(default = "default_content_scale_factor")]
    pub content_scale_factor: f64,
    /// Safe-area fraction on round panels, 0.0 = automatic (1/sqrt(2))
    #[serde(default)]
    pub inscribe_factor: f64,
    /// Seconds between slot switches in circle mode
    #[serde(default = "default_circle_switch_interval")]
    pub circle_switch_interval: f64,
    /// Clockwise rotation in degrees: 0, 90, 180 or 270
    #[serde(default)]
    pub orientation: u32,
}

fn default_display_size() -> u32 {
    240
}

fn default_content_scale_factor() -> f64 {
    0.98
}

fn default_circle_switch_interval() -> f64 {
    5.0
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            width: default_display_size(),
            height: default_display_size(),
            shape: ShapeOverride::default(),
            mode: DisplayMode::default(),
            content_scale_factor: default_content_scale_factor(),
            inscribe_factor: 0.0,
            circle_switch_interval: default_circle_switch_interval(),
            orientation: 0,
        }
    }
}

/// A single slot binding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SlotConfig {
    #[serde(default)]
    pub sensor: SensorKind,
    /// Bar height in pixels
    #[serde(default = "default_bar_height")]
    pub bar_height: f64,
}

fn default_bar_height() -> f64 {
    24.0
}

impl SlotConfig {
    pub fn new(sensor: SensorKind, bar_height: f64) -> Self {
        Self { sensor, bar_height }
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self::new(SensorKind::None, default_bar_height())
    }
}

/// Slot bindings for the three vertical positions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotSettings {
    #[serde(default = "default_up_slot")]
    pub up: SlotConfig,
    /// Only used in circle mode
    #[serde(default = "default_mid_slot")]
    pub mid: SlotConfig,
    #[serde(default = "default_down_slot")]
    pub down: SlotConfig,
}

fn default_up_slot() -> SlotConfig {
    SlotConfig::new(SensorKind::Cpu, default_bar_height())
}

fn default_mid_slot() -> SlotConfig {
    SlotConfig::new(SensorKind::Liquid, default_bar_height())
}

fn default_down_slot() -> SlotConfig {
    SlotConfig::new(SensorKind::Gpu, default_bar_height())
}

impl SlotSettings {
    pub fn get(&self, position: SlotPosition) -> &SlotConfig {
        match position {
            SlotPosition::Up => &self.up,
            SlotPosition::Mid => &self.mid,
            SlotPosition::Down => &self.down,
        }
    }

    pub fn get_mut(&mut self, position: SlotPosition) -> &mut SlotConfig {
        match position {
            SlotPosition::Up => &mut self.up,
            SlotPosition::Mid => &mut self.mid,
            SlotPosition::Down => &mut self.down,
        }
    }

    pub fn is_active(&self, position: SlotPosition) -> bool {
        self.get(position).sensor.is_active()
    }
}

impl Default for SlotSettings {
    fn default() -> Self {
        Self {
            up: default_up_slot(),
            mid: default_mid_slot(),
            down: default_down_slot(),
        }
    }
}

/// Pixel offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Offset {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Temperature number offsets per sensor kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct KindOffsets {
    #[serde(default)]
    pub cpu: Offset,
    #[serde(default)]
    pub gpu: Offset,
    #[serde(default)]
    pub liquid: Offset,
}

impl KindOffsets {
    pub fn get(&self, kind: SensorKind) -> Offset {
        match kind {
            SensorKind::Cpu => self.cpu,
            SensorKind::Gpu => self.gpu,
            SensorKind::Liquid => self.liquid,
            SensorKind::None => Offset::default(),
        }
    }
}

/// Spacing and border options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutSettings {
    /// Vertical gap between the up and down bars in dual mode
    #[serde(default = "default_bar_gap")]
    pub bar_gap: f64,
    #[serde(default = "default_true")]
    pub bar_border_enabled: bool,
    #[serde(default = "default_bar_border_width")]
    pub bar_border_width: f64,
    /// Distance between the temperature digits and their bar
    #[serde(default = "default_temp_bar_margin")]
    pub temp_bar_margin: f64,
    /// Label offset from its anchor
    #[serde(default)]
    pub label_margin: Offset,
    /// Gap between the number and the degree glyph
    #[serde(default = "default_degree_spacing")]
    pub degree_spacing: f64,
    #[serde(default)]
    pub temp_offsets: KindOffsets,
}

fn default_bar_gap() -> f64 {
    12.0
}

fn default_true() -> bool {
    true
}

fn default_bar_border_width() -> f64 {
    1.5
}

fn default_temp_bar_margin() -> f64 {
    10.0
}

fn default_degree_spacing() -> f64 {
    4.0
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            bar_gap: default_bar_gap(),
            bar_border_enabled: true,
            bar_border_width: default_bar_border_width(),
            temp_bar_margin: default_temp_bar_margin(),
            label_margin: Offset::default(),
            degree_spacing: default_degree_spacing(),
            temp_offsets: KindOffsets::default(),
        }
    }
}

/// Frame colors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorSettings {
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default = "default_bar_background")]
    pub bar_background: Color,
    #[serde(default = "default_bar_border")]
    pub bar_border: Color,
    #[serde(default = "default_text")]
    pub label: Color,
    #[serde(default = "default_text")]
    pub temperature: Color,
}

fn default_background() -> Color {
    Color::BLACK
}

fn default_bar_background() -> Color {
    Color::from_rgb8(52, 52, 52)
}

fn default_bar_border() -> Color {
    Color::from_rgb8(192, 192, 192)
}

fn default_text() -> Color {
    Color::WHITE
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background: default_background(),
            bar_background: default_bar_background(),
            bar_border: default_bar_border(),
            label: default_text(),
            temperature: default_text(),
        }
    }
}

/// Font face and pixel sizes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontSettings {
    #[serde(default = "default_font_face")]
    pub face: String,
    #[serde(default = "default_temperature_size")]
    pub temperature_size: f64,
    #[serde(default = "default_label_size")]
    pub label_size: f64,
    #[serde(default = "default_true")]
    pub bold: bool,
}

fn default_font_face() -> String {
    "Roboto Black".to_string()
}

fn default_temperature_size() -> f64 {
    70.0
}

fn default_label_size() -> f64 {
    24.0
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            face: default_font_face(),
            temperature_size: default_temperature_size(),
            label_size: default_label_size(),
            bold: true,
        }
    }
}

/// Bar scaling and color thresholds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureSettings {
    /// Full-bar temperature for CPU and GPU
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,
    /// Full-bar temperature for coolant
    #[serde(default = "default_liquid_max_scale")]
    pub liquid_max_scale: f64,
    #[serde(default = "ThresholdTable::standard")]
    pub thresholds: ThresholdTable,
    #[serde(default = "ThresholdTable::liquid")]
    pub liquid_thresholds: ThresholdTable,
}

fn default_max_scale() -> f64 {
    115.0
}

fn default_liquid_max_scale() -> f64 {
    50.0
}

impl TemperatureSettings {
    pub fn max_scale_for(&self, kind: SensorKind) -> f64 {
        if kind.is_liquid() {
            self.liquid_max_scale
        } else {
            self.max_scale
        }
    }

    pub fn table_for(&self, kind: SensorKind) -> &ThresholdTable {
        if kind.is_liquid() {
            &self.liquid_thresholds
        } else {
            &self.thresholds
        }
    }
}

impl Default for TemperatureSettings {
    fn default() -> Self {
        Self {
            max_scale: default_max_scale(),
            liquid_max_scale: default_liquid_max_scale(),
            thresholds: ThresholdTable::standard(),
            liquid_thresholds: ThresholdTable::liquid(),
        }
    }
}

/// Complete LCD configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LcdConfig {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub slots: SlotSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub colors: ColorSettings,
    #[serde(default)]
    pub font: FontSettings,
    #[serde(default)]
    pub temperature: TemperatureSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        let config: LcdConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LcdConfig::default());
        assert_eq!(config.display.width, 240);
        assert_eq!(config.display.content_scale_factor, 0.98);
        assert_eq!(config.temperature.max_scale, 115.0);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let json = r#"{
            "display": { "mode": "circle", "shape": "circular" },
            "slots": { "mid": { "sensor": "none" } }
        }"#;
        let config: LcdConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.display.mode, DisplayMode::Circle);
        assert_eq!(config.display.shape, ShapeOverride::Circular);
        assert_eq!(config.display.circle_switch_interval, 5.0);
        assert_eq!(config.slots.mid.sensor, SensorKind::None);
        assert_eq!(config.slots.mid.bar_height, 24.0);
        assert_eq!(config.slots.up.sensor, SensorKind::Cpu);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = LcdConfig::default();
        config.layout.temp_offsets.liquid = Offset::new(-3.0, 2.0);
        config.slots.down = SlotConfig::new(SensorKind::Liquid, 30.0);

        let json = serde_json::to_string_pretty(&config).unwrap();
        let deserialized: LcdConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_liquid_uses_its_own_scale_and_table() {
        let temps = TemperatureSettings::default();
        assert_eq!(temps.max_scale_for(SensorKind::Liquid), 50.0);
        assert_eq!(temps.max_scale_for(SensorKind::Gpu), 115.0);
        assert_eq!(temps.table_for(SensorKind::Liquid), &ThresholdTable::liquid());
    }
}
