//! joymenu - joystick menu demo for the Raspberry Pi Pico (RP2040).
//!
//! A single cooperative loop samples the joystick Y axis every
//! `MENU_POLL_MS`, steps the three-entry menu, and redraws the selected
//! entry on the SSD1306. Holding the joystick button runs the selected
//! entry's action.

#![no_std]
#![no_main]

mod config;
mod error;
mod ui;

use defmt::{debug, info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::Pwm;
use embassy_time::{Duration, Timer};
use embedded_graphics::prelude::Point;
use {defmt_rtt as _, panic_probe as _};

use crate::config::*;
use crate::ui::display::Oled;
use crate::ui::framebuffer::RenderRegion;
use crate::ui::input_logic::led_level;
use crate::ui::joystick::Joystick;
use crate::ui::leds::{pwm_config, LedPair};
use crate::ui::menu::{status_line, MenuNavigator, MenuOption};
use crate::ui::presenter::DisplayPresenter;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

type Panel = Oled<I2c<'static, I2C1, Blocking>>;

/// Everything the poll loop mutates, owned in one place.
struct App<'d> {
    joystick: Joystick<'d>,
    leds: LedPair<'d>,
    presenter: DisplayPresenter<Panel>,
    menu: MenuNavigator,
}

impl App<'_> {
    /// One poll tick: sample → decide → act. The caller sleeps.
    async fn tick(&mut self) {
        let y = match self.joystick.read_y().await {
            Ok(y) => y,
            Err(e) => {
                warn!("Joystick: {}", e);
                return;
            }
        };

        let state = self.menu.poll(y);
        debug!("Menu: y={} -> {}", y, state.index());
        self.render(status_line(state).as_str());

        if self.joystick.button_pressed() {
            self.joystick.wait_for_release().await;
            self.run(state.option()).await;
        }
    }

    async fn run(&mut self, option: MenuOption) {
        info!("Menu: running {}", option.label());
        match option {
            MenuOption::LedJoystick => self.follow_joystick().await,
            MenuOption::Signal => {
                self.render(SIGNAL_MESSAGE);
                self.joystick.wait_for_press().await;
                self.joystick.wait_for_release().await;
            }
            MenuOption::LedsOff => self.leds.off(),
        }
    }

    /// LED brightness tracks the axes until the button is pressed.
    async fn follow_joystick(&mut self) {
        self.render(MenuOption::LedJoystick.label());

        while !self.joystick.button_pressed() {
            match self.joystick.read_axes().await {
                Ok(sample) => self.leds.set_levels(led_level(sample.x), led_level(sample.y)),
                Err(e) => warn!("Joystick: {}", e),
            }
            Timer::after(Duration::from_millis(LED_POLL_MS)).await;
        }

        self.joystick.wait_for_release().await;
    }

    fn render(&mut self, text: &str) {
        if let Err(e) = self.presenter.show(text, Point::zero()) {
            warn!("Display: {}", e);
        }
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("{=str}", STARTUP_BANNER);

    // Joystick: X on ADC0, Y on ADC1, button with pull-up
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let joystick = Joystick::new(
        adc,
        Channel::new_pin(p.PIN_26, Pull::None),
        Channel::new_pin(p.PIN_27, Pull::None),
        Input::new(p.PIN_22, Pull::Up),
    );

    // LEDs: GPIO13 = slice 6 B (blue), GPIO11 = slice 5 B (red)
    let blue = Pwm::new_output_b(p.PWM_SLICE6, p.PIN_13, pwm_config(LED_B_INITIAL_LEVEL));
    let red = Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, pwm_config(LED_R_INITIAL_LEVEL));
    let leds = LedPair::new(blue, LED_B_INITIAL_LEVEL, red, LED_R_INITIAL_LEVEL);

    // OLED on I2C1: SCL = GPIO15, SDA = GPIO14
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = OLED_I2C_FREQ_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let oled = unwrap!(ui::display::init(i2c));

    let mut presenter = DisplayPresenter::new(oled, RenderRegion::full_screen());
    if let Err(e) = presenter.clear() {
        warn!("Display: {}", e);
    }
    info!("Peripherals initialized");

    let mut app = App {
        joystick,
        leds,
        presenter,
        menu: MenuNavigator::default(),
    };

    loop {
        app.tick().await;
        Timer::after(Duration::from_millis(MENU_POLL_MS)).await;
    }
}
