//! Unified error type for joymenu.
//!
//! We avoid `alloc` - all error variants carry no data.
//! Implements `defmt::Format` for efficient on-target logging.

use defmt::Format;

/// Top-level error type for the hardware boundary.
///
/// The menu and text-wrapping logic never fail; only peripheral access
/// produces these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Error {
    /// I²C transaction to the display failed.
    Display,

    /// An ADC conversion failed.
    Adc,
}

impl From<embassy_rp::adc::Error> for Error {
    fn from(_: embassy_rp::adc::Error) -> Self {
        Error::Adc
    }
}
