//! Analog joystick input: two ADC axes and the push button.
//!
//! The button is active-low with the internal pull-up enabled. Presses are
//! debounced with a short re-check after the falling edge.

use defmt::info;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::error::Error;
use crate::ui::input_logic::{button_pressed, clamp_sample, AxisSample};

pub struct Joystick<'d> {
    adc: Adc<'d, Async>,
    x: Channel<'d>,
    y: Channel<'d>,
    button: Input<'d>,
}

impl<'d> Joystick<'d> {
    pub fn new(adc: Adc<'d, Async>, x: Channel<'d>, y: Channel<'d>, button: Input<'d>) -> Self {
        Self { adc, x, y, button }
    }

    /// Read the Y axis only (the menu axis).
    pub async fn read_y(&mut self) -> Result<u16, Error> {
        let raw = self.adc.read(&mut self.y).await?;
        Ok(clamp_sample(raw))
    }

    /// Read both axes, X first.
    pub async fn read_axes(&mut self) -> Result<AxisSample, Error> {
        let x = self.adc.read(&mut self.x).await?;
        let y = self.adc.read(&mut self.y).await?;
        Ok(AxisSample::from_raw(x, y))
    }

    /// Current (undebounced) button level.
    pub fn button_pressed(&self) -> bool {
        button_pressed(self.button.is_high())
    }

    /// Wait for a debounced press.
    pub async fn wait_for_press(&mut self) {
        loop {
            self.button.wait_for_falling_edge().await;

            // Debounce: wait and re-check.
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

            if self.button.is_low() {
                info!("Button: pressed");
                return;
            }
        }
    }

    /// Wait until the button is released, then let it settle.
    pub async fn wait_for_release(&mut self) {
        self.button.wait_for_high().await;
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
    }
}
