//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and display geometry
//! live here so they can be tuned in one place.

// Startup

/// Single console message emitted once at boot.
pub const STARTUP_BANNER: &str = "Joystick-PWM";

// GPIO pin assignments (Raspberry Pi Pico / BitDogLab wiring)
//
// These are logical names; actual `embassy_rp::peripherals::*` values are
// picked in `main.rs`.  Adjust for your own board.
//
//   Joystick VRX   → GPIO26 (ADC0)
//   Joystick VRY   → GPIO27 (ADC1)
//   Joystick SW    → GPIO22 (active-low, internal pull-up)
//   LED blue       → GPIO13 (PWM slice 6, channel B)
//   LED red        → GPIO11 (PWM slice 5, channel B)
//   I²C1 SDA       → GPIO14
//   I²C1 SCL       → GPIO15

// Joystick

/// Largest value the 12-bit ADC can report.
pub const ADC_MAX: u16 = 4095;

/// Y-axis level above which the menu advances; at or below it regresses.
pub const MENU_THRESHOLD: u16 = 2000;

/// Interval between menu poll ticks (ms). Also the only debounce the
/// menu transition gets.
pub const MENU_POLL_MS: u64 = 200;

/// Interval between LED updates while the joystick drives the LEDs (ms).
pub const LED_POLL_MS: u64 = 100;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

// PWM

/// Fractional clock divider applied to the PWM slices.
pub const PWM_CLOCK_DIVIDER: u8 = 16;

/// PWM counter top (period). Axis samples map 1:1 onto this range.
pub const PWM_PERIOD: u16 = 4096;

/// Boot-time duty level of the blue LED.
pub const LED_B_INITIAL_LEVEL: u16 = 0;

/// Boot-time duty level of the red LED.
pub const LED_R_INITIAL_LEVEL: u16 = 100;

// Display (SSD1306 128×64 OLED)

/// I²C address of the SSD1306.
pub const OLED_I2C_ADDR: u8 = 0x3C;

/// I²C bus clock for the display (Hz).
pub const OLED_I2C_FREQ_HZ: u32 = 400_000;

/// Panel width in pixels.
pub const OLED_WIDTH: usize = 128;

/// Number of 8-row pages on the panel.
pub const OLED_PAGES: usize = 8;

/// Bytes needed to hold one full-screen frame (one byte per column per page).
pub const OLED_BUFFER_LEN: usize = OLED_WIDTH * OLED_PAGES;

/// Rows per page, fixed by the controller's addressing granularity.
pub const PAGE_HEIGHT: usize = 8;

/// Characters that fit on one display line with the 5×8 font.
pub const MAX_CHARS_PER_LINE: usize = 21;

/// Vertical distance between consecutive text lines (pixels).
pub const LINE_HEIGHT: i32 = 8;

// Menu text

/// Message shown by menu option 2.
pub const SIGNAL_MESSAGE: &str = "SINAL ABERTO - ATRAVESSAR COM CUIDADO";
