//! Temperature to color mapping.
//!
//! A [`ThresholdTable`] is an ordered list of `(ceiling, color)` pairs with
//! strictly increasing ceilings. A temperature resolves to the color of the
//! first entry whose ceiling it does not exceed. The last entry acts as the
//! catch-all: its ceiling is treated as +infinity.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// One step of a threshold table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ColorThreshold {
    /// Highest temperature (inclusive) that still maps to `color`
    pub ceiling: f64,
    pub color: Color,
}

impl ColorThreshold {
    pub fn new(ceiling: f64, color: Color) -> Self {
        Self { ceiling, color }
    }
}

/// Ordered threshold table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ThresholdTable {
    steps: Vec<ColorThreshold>,
}

impl ThresholdTable {
    pub fn new(steps: Vec<ColorThreshold>) -> Self {
        Self { steps }
    }

    /// Build a table from finite ceilings plus the color used above all of them
    pub fn from_ceilings(ceilings: &[(f64, Color)], above: Color) -> Self {
        let mut steps: Vec<ColorThreshold> = ceilings
            .iter()
            .map(|(ceiling, color)| ColorThreshold::new(*ceiling, *color))
            .collect();
        steps.push(ColorThreshold::new(f64::MAX, above));
        Self { steps }
    }

    pub fn steps(&self) -> &[ColorThreshold] {
        &self.steps
    }

    /// Resolve a temperature to its color.
    ///
    /// Returns the default color for an empty table.
    pub fn resolve(&self, temperature: f64) -> Color {
        let Some((last, finite)) = self.steps.split_last() else {
            return Color::default();
        };

        finite
            .iter()
            .find(|step| temperature <= step.ceiling)
            .map(|step| step.color)
            .unwrap_or(last.color)
    }

    /// Standard CPU/GPU table: green up to 55, orange to 65, dark orange to 75, red above
    pub fn standard() -> Self {
        Self::from_ceilings(
            &[
                (55.0, Color::from_rgb8(0, 255, 0)),
                (65.0, Color::from_rgb8(255, 140, 0)),
                (75.0, Color::from_rgb8(255, 70, 0)),
            ],
            Color::from_rgb8(255, 0, 0),
        )
    }

    /// Coolant table: same palette, shifted to liquid temperatures
    pub fn liquid() -> Self {
        Self::from_ceilings(
            &[
                (25.0, Color::from_rgb8(0, 255, 0)),
                (28.0, Color::from_rgb8(255, 140, 0)),
                (31.0, Color::from_rgb8(255, 70, 0)),
            ],
            Color::from_rgb8(255, 0, 0),
        )
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::standard()
    }
}
