//! SSD1306 OLED display wrapper.
//!
//! The driver runs in basic (unbuffered) mode; the pixel buffer lives in
//! the presenter's framebuffer and is pushed here whole.

use defmt::debug;
use ssd1306::mode::BasicMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::config::OLED_I2C_ADDR;
use crate::error::Error;
use crate::ui::framebuffer::RenderRegion;
use crate::ui::presenter::FrameSink;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> = Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BasicMode>;

/// The physical panel as a [`FrameSink`].
pub struct Oled<I2C> {
    display: Display<I2C>,
}

/// Initialise the SSD1306 in horizontal addressing mode.
pub fn init<I2C>(i2c: I2C) -> Result<Oled<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, OLED_I2C_ADDR);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0);
    display.init().map_err(|_| Error::Display)?;
    debug!("OLED: SSD1306 initialised at {=u8:#x}", OLED_I2C_ADDR);
    Ok(Oled { display })
}

impl<I2C> FrameSink for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = Error;

    fn write_frame(&mut self, region: &RenderRegion, bytes: &[u8]) -> Result<(), Error> {
        // The driver converts pixel rows back to pages.
        let (start, end) = region.draw_area();

        self.display
            .set_draw_area(start, end)
            .map_err(|_| Error::Display)?;
        self.display.draw(bytes).map_err(|_| Error::Display)
    }
}
