//! Three-option cyclic menu driven by one joystick axis.
//!
//! The transition is level-triggered: every poll tick moves the selection
//! one step, forward while the axis is above the threshold and backward
//! otherwise. The fixed poll interval is the only rate limit.

use core::fmt::Write;

use crate::config::MENU_THRESHOLD;

/// Selected menu entry. Always one of 1, 2 or 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuState {
    #[default]
    One,
    Two,
    Three,
}

impl MenuState {
    /// 1-based position in the menu.
    pub fn index(self) -> u8 {
        match self {
            MenuState::One => 1,
            MenuState::Two => 2,
            MenuState::Three => 3,
        }
    }

    /// Next entry, wrapping 3 → 1.
    pub fn next(self) -> Self {
        match self {
            MenuState::One => MenuState::Two,
            MenuState::Two => MenuState::Three,
            MenuState::Three => MenuState::One,
        }
    }

    /// Previous entry, wrapping 1 → 3.
    pub fn prev(self) -> Self {
        match self {
            MenuState::One => MenuState::Three,
            MenuState::Two => MenuState::One,
            MenuState::Three => MenuState::Two,
        }
    }

    /// Apply one poll tick.
    pub fn step(self, sample: u16, threshold: u16) -> Self {
        if sample > threshold {
            self.next()
        } else {
            self.prev()
        }
    }

    /// Action bound to this entry.
    pub fn option(self) -> MenuOption {
        match self {
            MenuState::One => MenuOption::LedJoystick,
            MenuState::Two => MenuOption::Signal,
            MenuState::Three => MenuOption::LedsOff,
        }
    }
}

/// What selecting a menu entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuOption {
    /// LEDs follow the joystick axes until the button is pressed.
    LedJoystick,
    /// Show the crossing-signal message until the button is pressed.
    Signal,
    /// Switch both LEDs off.
    LedsOff,
}

impl MenuOption {
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::LedJoystick => "LED JOYSTICK",
            MenuOption::Signal => "SINAL",
            MenuOption::LedsOff => "LEDS OFF",
        }
    }
}

/// Status line shown for `state`, e.g. `"MENU 2 SINAL"`.
pub fn status_line(state: MenuState) -> heapless::String<32> {
    let mut line = heapless::String::new();
    // 32 bytes always fit "MENU n " plus the longest label.
    let _ = write!(line, "MENU {} {}", state.index(), state.option().label());
    line
}

/// Owner of the single process-wide [`MenuState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuNavigator {
    state: MenuState,
    threshold: u16,
}

impl Default for MenuNavigator {
    fn default() -> Self {
        Self::new(MENU_THRESHOLD)
    }
}

impl MenuNavigator {
    /// Navigator starting on entry 1.
    pub fn new(threshold: u16) -> Self {
        Self {
            state: MenuState::One,
            threshold,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Feed one axis sample and return the new selection.
    pub fn poll(&mut self, sample: u16) -> MenuState {
        self.state = self.state.step(sample, self.threshold);
        self.state
    }
}
