use crate::config::{ADC_MAX, PWM_PERIOD};

/// One reading of both joystick axes, each in `0..=ADC_MAX`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSample {
    pub x: u16,
    pub y: u16,
}

impl AxisSample {
    /// Build a sample from raw conversions, clamping each to the ADC range.
    pub fn from_raw(x: u16, y: u16) -> Self {
        Self {
            x: clamp_sample(x),
            y: clamp_sample(y),
        }
    }
}

/// Clamp a raw conversion to `0..=ADC_MAX`.
pub fn clamp_sample(raw: u16) -> u16 {
    raw.min(ADC_MAX)
}

/// PWM compare level for an axis sample (identity, bounded by the period).
pub fn led_level(sample: u16) -> u16 {
    sample.min(PWM_PERIOD)
}

/// The joystick button pulls its pin low when pressed.
pub fn button_pressed(pin_high: bool) -> bool {
    !pin_high
}
