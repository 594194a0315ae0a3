//! Test-only library interface for joymenu.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required).
//!
//! Usage: `cargo test --lib` or `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod config;

// Internal module paths for the actual implementations
#[path = "ui/framebuffer.rs"]
mod ui_framebuffer_impl;
#[path = "ui/input_logic.rs"]
mod ui_input_logic_impl;
#[path = "ui/menu.rs"]
mod ui_menu_impl;
#[path = "ui/presenter.rs"]
mod ui_presenter_impl;
#[path = "ui/wrap.rs"]
mod ui_wrap_impl;

pub mod ui {
    pub mod framebuffer {
        pub use crate::ui_framebuffer_impl::{FrameBuffer, RenderRegion};
    }

    pub mod input_logic {
        pub use crate::ui_input_logic_impl::{button_pressed, clamp_sample, led_level, AxisSample};
    }

    pub mod menu {
        pub use crate::ui_menu_impl::{status_line, MenuNavigator, MenuOption, MenuState};
    }

    pub mod presenter {
        pub use crate::ui_presenter_impl::{DisplayPresenter, FrameSink};
    }

    pub mod wrap {
        pub use crate::ui_wrap_impl::{wrap, Line, Wrap};
    }

    pub use framebuffer::RenderRegion;
    pub use menu::{MenuNavigator, MenuState};
    pub use presenter::{DisplayPresenter, FrameSink};
    pub use wrap::{wrap, Line};
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - cross-module behaviour
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::config::*;
    use super::ui::input_logic::*;
    use super::ui::*;

    // ════════════════════════════════════════════════════════════════════════
    // Input Logic Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn axis_sample_clamps_to_adc_range() {
        let sample = AxisSample::from_raw(5000, 4095);
        assert_eq!(sample.x, 4095);
        assert_eq!(sample.y, 4095);
        assert_eq!(AxisSample::from_raw(0, 17), AxisSample { x: 0, y: 17 });
    }

    #[test]
    fn led_level_tracks_sample() {
        assert_eq!(led_level(0), 0);
        assert_eq!(led_level(2048), 2048);
        assert_eq!(led_level(ADC_MAX), 4095);
        assert_eq!(led_level(u16::MAX), PWM_PERIOD);
    }

    #[test]
    fn button_is_active_low() {
        assert!(button_pressed(false));
        assert!(!button_pressed(true));
    }

    #[test]
    fn clamp_sample_passes_valid_values() {
        for raw in [0, 1, 2000, 4094, 4095] {
            assert_eq!(clamp_sample(raw), raw);
        }
        assert_eq!(clamp_sample(4096), 4095);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Wrap + Menu Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn signal_message_wraps_into_three_lines() {
        let lines: Vec<&str> = wrap(SIGNAL_MESSAGE, MAX_CHARS_PER_LINE)
            .map(|l| l.text(SIGNAL_MESSAGE))
            .collect();
        assert_eq!(lines, ["SINAL ABERTO -", "ATRAVESSAR COM", "CUIDADO"]);
    }

    #[test]
    fn every_status_line_fits_one_display_row() {
        for state in [MenuState::One, MenuState::Two, MenuState::Three] {
            let text = menu::status_line(state);
            assert_eq!(wrap(&text, MAX_CHARS_PER_LINE).count(), 1);
        }
    }

    #[test]
    fn full_screen_holds_eight_text_rows() {
        let region = RenderRegion::full_screen();
        assert_eq!(region.buffer_len(), OLED_BUFFER_LEN);
        assert_eq!(region.line_capacity(LINE_HEIGHT), 8);
    }

    #[test]
    fn default_navigator_uses_configured_threshold() {
        let mut nav = MenuNavigator::default();
        assert_eq!(nav.poll(MENU_THRESHOLD), MenuState::Three);
        assert_eq!(nav.poll(MENU_THRESHOLD + 1), MenuState::One);
    }
}
