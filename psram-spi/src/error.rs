//! Driver error type.

use core::fmt;

/// Error returned by [`Psram`](crate::Psram) operations.
///
/// `SpiE` and `PinE` are the error types of the bus and chip-select
/// collaborators; their faults are passed through untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error<SpiE, PinE> {
    /// Address outside `0..=Address::MAX`. No bus activity took place.
    InvalidAddress,
    /// Data value does not fit in one byte. No bus activity took place.
    InvalidValue,
    /// Timing configuration below the device minimum. No pin or bus activity took place.
    InvalidConfiguration,
    /// Fault reported by the SPI bus.
    Spi(SpiE),
    /// Fault reported by the chip-select pin.
    Pin(PinE),
}

impl<SpiE, PinE> Error<SpiE, PinE> {
    /// `true` for faults raised by the bus or pin rather than by caller input.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Spi(_) | Self::Pin(_))
    }
}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> fmt::Display for Error<SpiE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAddress => write!(
                f,
                "address is outside of device address range: 0 to {}",
                crate::Address::MAX.get()
            ),
            Self::InvalidValue => f.write_str("data value must fit in 8 bits (0-255)"),
            Self::InvalidConfiguration => write!(
                f,
                "power-up delay below device minimum of {}us",
                crate::config::MIN_POWER_UP_DELAY_US
            ),
            Self::Spi(e) => write!(f, "SPI bus error: {:?}", e),
            Self::Pin(e) => write!(f, "chip-select pin error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<SpiE: fmt::Debug, PinE: fmt::Debug> defmt::Format for Error<SpiE, PinE> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::InvalidAddress => defmt::write!(f, "InvalidAddress"),
            Self::InvalidValue => defmt::write!(f, "InvalidValue"),
            Self::InvalidConfiguration => defmt::write!(f, "InvalidConfiguration"),
            Self::Spi(e) => defmt::write!(f, "SPI bus error: {:?}", defmt::Debug2Format(e)),
            Self::Pin(e) => {
                defmt::write!(f, "chip-select pin error: {:?}", defmt::Debug2Format(e))
            }
        }
    }
}
