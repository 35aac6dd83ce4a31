//! Circle mode: one slot at a time, rotating through the active slots.
//!
//! [`CircleModeState`] is the only state that survives between renders. It
//! starts on the first active slot and moves on once the switch interval has
//! elapsed, skipping inactive positions. When no other slot is active the
//! current one is kept.

use std::time::{Duration, Instant};

use coolerdash_types::{LcdConfig, SensorReading, SlotPosition, SlotSettings};

use crate::layout::{BarRect, FramePlan, LabelPlacement, SlotLayout, TextSide};
use crate::scaling::ScalingParams;
use crate::slots::ResolvedSlot;

/// Switch interval used when the configured one is not a valid duration
pub const DEFAULT_SWITCH_INTERVAL: Duration = Duration::from_secs(5);

/// Slot rotation state for circle mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CircleModeState {
    current: SlotPosition,
    last_switch: Option<Instant>,
}

impl CircleModeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot currently shown
    pub fn current(&self) -> SlotPosition {
        self.current
    }

    /// When the current slot was adopted, `None` before the first render
    pub fn last_switch(&self) -> Option<Instant> {
        self.last_switch
    }

    /// Advance the rotation for a render at `now` and return the slot to draw
    pub fn advance(
        &mut self,
        slots: &SlotSettings,
        interval: Duration,
        now: Instant,
    ) -> SlotPosition {
        let Some(last_switch) = self.last_switch else {
            self.current = first_active(slots).unwrap_or(SlotPosition::Up);
            self.last_switch = Some(now);
            log::debug!("Circle mode starting on {:?}", self.current);
            return self.current;
        };

        if now.saturating_duration_since(last_switch) >= interval {
            if let Some(next) = next_active(slots, self.current) {
                if next != self.current {
                    log::debug!("Circle mode switching {:?} -> {:?}", self.current, next);
                }
                self.current = next;
                self.last_switch = Some(now);
            }
        }

        self.current
    }
}

/// First active slot scanning from `up`
fn first_active(slots: &SlotSettings) -> Option<SlotPosition> {
    SlotPosition::ALL
        .into_iter()
        .find(|&position| slots.is_active(position))
}

/// Next active slot after `current`, wrapping once around all three positions
fn next_active(slots: &SlotSettings, current: SlotPosition) -> Option<SlotPosition> {
    (1..=SlotPosition::ALL.len())
        .map(|step| SlotPosition::from_index(current.index() + step))
        .find(|&position| slots.is_active(position))
}

/// Configured switch interval, falling back to five seconds
pub fn switch_interval(config: &LcdConfig) -> Duration {
    Duration::try_from_secs_f64(config.display.circle_switch_interval)
        .ok()
        .filter(|interval| !interval.is_zero())
        .unwrap_or(DEFAULT_SWITCH_INTERVAL)
}

/// Lay out a single slot: number above, bar centered, label below
pub fn plan_circle(
    config: &LcdConfig,
    data: &SensorReading,
    scaling: &ScalingParams,
    position: SlotPosition,
) -> FramePlan {
    let slot = ResolvedSlot::resolve(config, data, position);
    if !slot.is_active {
        return FramePlan::default();
    }

    let display_width = config.display.width as f64;
    let display_height = config.display.height as f64;
    let bar = BarRect::new(
        scaling.bar_x(display_width),
        (display_height - slot.bar_height) / 2.0,
        scaling.safe_bar_width,
        slot.bar_height,
    );

    FramePlan {
        slots: vec![SlotLayout {
            slot,
            bar,
            temperature: TextSide::Above,
            label: Some(LabelPlacement::BelowBar),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coolerdash_types::{SensorKind, SlotConfig};

    fn slots(up: SensorKind, mid: SensorKind, down: SensorKind) -> SlotSettings {
        SlotSettings {
            up: SlotConfig::new(up, 24.0),
            mid: SlotConfig::new(mid, 24.0),
            down: SlotConfig::new(down, 24.0),
        }
    }

    const INTERVAL: Duration = Duration::from_secs(5);

    #[test]
    fn test_first_render_starts_on_first_active_slot() {
        let slots = slots(SensorKind::None, SensorKind::Liquid, SensorKind::Gpu);
        let mut state = CircleModeState::new();
        let t0 = Instant::now();

        assert_eq!(state.advance(&slots, INTERVAL, t0), SlotPosition::Mid);
        assert_eq!(state.last_switch(), Some(t0));
    }

    #[test]
    fn test_all_inactive_defaults_to_up() {
        let slots = slots(SensorKind::None, SensorKind::None, SensorKind::None);
        let mut state = CircleModeState::new();
        let t0 = Instant::now();

        assert_eq!(state.advance(&slots, INTERVAL, t0), SlotPosition::Up);
        assert_eq!(
            state.advance(&slots, INTERVAL, t0 + Duration::from_secs(6)),
            SlotPosition::Up
        );
    }

    #[test]
    fn test_switches_only_after_interval() {
        let slots = slots(SensorKind::Cpu, SensorKind::Liquid, SensorKind::Gpu);
        let mut state = CircleModeState::new();
        let t0 = Instant::now();
        state.advance(&slots, INTERVAL, t0);

        let early = t0 + Duration::from_millis(4900);
        assert_eq!(state.advance(&slots, INTERVAL, early), SlotPosition::Up);
        assert_eq!(state.last_switch(), Some(t0));

        let late = t0 + Duration::from_millis(5100);
        assert_eq!(state.advance(&slots, INTERVAL, late), SlotPosition::Mid);
        assert_eq!(state.last_switch(), Some(late));
    }

    #[test]
    fn test_interval_restarts_after_switch() {
        let slots = slots(SensorKind::Cpu, SensorKind::Liquid, SensorKind::Gpu);
        let mut state = CircleModeState::new();
        let t0 = Instant::now();
        state.advance(&slots, INTERVAL, t0);

        let t1 = t0 + Duration::from_secs(5);
        assert_eq!(state.advance(&slots, INTERVAL, t1), SlotPosition::Mid);
        assert_eq!(
            state.advance(&slots, INTERVAL, t1 + Duration::from_secs(4)),
            SlotPosition::Mid
        );
        let t2 = t1 + Duration::from_secs(5);
        assert_eq!(state.advance(&slots, INTERVAL, t2), SlotPosition::Down);
        let t3 = t2 + Duration::from_secs(5);
        assert_eq!(state.advance(&slots, INTERVAL, t3), SlotPosition::Up);
    }

    #[test]
    fn test_skips_inactive_mid() {
        let slots = slots(SensorKind::Cpu, SensorKind::None, SensorKind::Gpu);
        let mut state = CircleModeState::new();
        let t0 = Instant::now();
        state.advance(&slots, INTERVAL, t0);

        let t1 = t0 + Duration::from_millis(5100);
        assert_eq!(state.advance(&slots, INTERVAL, t1), SlotPosition::Down);
        let t2 = t1 + Duration::from_millis(5100);
        assert_eq!(state.advance(&slots, INTERVAL, t2), SlotPosition::Up);
    }

    #[test]
    fn test_single_active_slot_is_kept() {
        let slots = slots(SensorKind::None, SensorKind::None, SensorKind::Liquid);
        let mut state = CircleModeState::new();
        let t0 = Instant::now();
        state.advance(&slots, INTERVAL, t0);

        let t1 = t0 + Duration::from_secs(30);
        assert_eq!(state.advance(&slots, INTERVAL, t1), SlotPosition::Down);
    }

    #[test]
    fn test_current_slot_deactivated_moves_on() {
        let mut settings = slots(SensorKind::Cpu, SensorKind::Liquid, SensorKind::Gpu);
        let mut state = CircleModeState::new();
        let t0 = Instant::now();
        state.advance(&settings, INTERVAL, t0);

        // Config changes between renders; the frozen slot is left once the timer fires
        settings.up.sensor = SensorKind::None;
        settings.mid.sensor = SensorKind::None;
        let t1 = t0 + Duration::from_secs(6);
        assert_eq!(state.advance(&settings, INTERVAL, t1), SlotPosition::Down);
    }

    #[test]
    fn test_switch_interval_fallback() {
        let mut config = LcdConfig::default();
        assert_eq!(switch_interval(&config), Duration::from_secs(5));

        config.display.circle_switch_interval = 2.5;
        assert_eq!(switch_interval(&config), Duration::from_millis(2500));

        for invalid in [0.0, -1.0, f64::NAN] {
            config.display.circle_switch_interval = invalid;
            assert_eq!(switch_interval(&config), DEFAULT_SWITCH_INTERVAL);
        }
    }

    #[test]
    fn test_plan_circle_centers_single_bar() {
        let mut config = LcdConfig::default();
        config.slots.mid = SlotConfig::new(SensorKind::Liquid, 30.0);
        let scaling = ScalingParams::compute(&config, None);
        let plan = plan_circle(
            &config,
            &SensorReading::new(40.0, 50.0, 30.0),
            &scaling,
            SlotPosition::Mid,
        );

        assert_eq!(plan.slots.len(), 1);
        let layout = &plan.slots[0];
        assert_eq!(layout.bar.y, 105.0);
        assert_eq!(layout.temperature, TextSide::Above);
        assert_eq!(layout.label, Some(LabelPlacement::BelowBar));
        assert_eq!(layout.slot.kind, SensorKind::Liquid);
    }

    #[test]
    fn test_plan_circle_keeps_label_at_high_temperature() {
        let config = LcdConfig::default();
        let scaling = ScalingParams::compute(&config, None);
        let plan = plan_circle(
            &config,
            &SensorReading::new(104.0, 50.0, 30.0),
            &scaling,
            SlotPosition::Up,
        );
        assert_eq!(plan.label_count(), 1);
    }

    #[test]
    fn test_plan_circle_inactive_slot_is_empty() {
        let mut config = LcdConfig::default();
        config.slots.up.sensor = SensorKind::None;
        let scaling = ScalingParams::compute(&config, None);
        let plan = plan_circle(&config, &SensorReading::default(), &scaling, SlotPosition::Up);
        assert!(plan.is_empty());
    }
}
