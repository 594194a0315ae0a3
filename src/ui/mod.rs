//! User interface subsystem - joystick, PWM LEDs and SSD1306 OLED.
//!
//! The main loop polls the joystick, steps the menu, and renders the
//! selected entry on the OLED.
//!
//! ## Components
//!
//! - **Joystick**: two ADC axes plus an active-low push button
//! - **LEDs**: blue and red, brightness via PWM
//! - **Display**: SSD1306 128×64 OLED via I²C, full redraw per frame

pub mod display;
pub mod framebuffer;
pub mod input_logic;
pub mod joystick;
pub mod leds;
pub mod menu;
pub mod presenter;
pub mod wrap;
