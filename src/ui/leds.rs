//! Blue and red LEDs driven by PWM channel B of two slices.

use embassy_rp::pwm::{Config, Pwm};
use fixed::FixedU16;

use crate::config::{PWM_CLOCK_DIVIDER, PWM_PERIOD};

/// Slice configuration with the shared divider and period and the given
/// channel-B duty level.
pub fn pwm_config(level: u16) -> Config {
    let mut config = Config::default();
    config.divider = FixedU16::from_num(PWM_CLOCK_DIVIDER);
    config.top = PWM_PERIOD;
    config.compare_b = level.min(PWM_PERIOD);
    config
}

pub struct LedPair<'d> {
    blue: Pwm<'d>,
    red: Pwm<'d>,
    blue_config: Config,
    red_config: Config,
}

impl<'d> LedPair<'d> {
    /// Take ownership of two slices already configured with [`pwm_config`].
    pub fn new(blue: Pwm<'d>, blue_level: u16, red: Pwm<'d>, red_level: u16) -> Self {
        Self {
            blue,
            red,
            blue_config: pwm_config(blue_level),
            red_config: pwm_config(red_level),
        }
    }

    pub fn set_levels(&mut self, blue: u16, red: u16) {
        self.blue_config.compare_b = blue.min(PWM_PERIOD);
        self.red_config.compare_b = red.min(PWM_PERIOD);
        self.blue.set_config(&self.blue_config);
        self.red.set_config(&self.red_config);
    }

    pub fn off(&mut self) {
        self.set_levels(0, 0);
    }
}
