//! Reset-sequence timing.
//!
//! The defaults are margins over the datasheet minimums that absorb scheduler
//! jitter on the host. Check the datasheet of the actual part before
//! tightening them.

use crate::error::Error;

/// Minimum time CE# must be held high after power-up before the first command.
/// Reference: ESP-PSRAM64H / APS6404L datasheet, power-up initialization (tPU).
pub const MIN_POWER_UP_DELAY_US: u32 = 150;

pub const DEFAULT_POWER_UP_DELAY_US: u32 = 200;
pub const DEFAULT_RESET_ENABLE_DELAY_US: u32 = 50;
pub const DEFAULT_RESET_DELAY_US: u32 = 100;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// CE# high hold before the reset-enable command. Must be at least
    /// [`MIN_POWER_UP_DELAY_US`].
    pub power_up_delay_us: u32,
    /// Gap between the reset-enable and reset transactions.
    pub reset_enable_delay_us: u32,
    /// Wait after the reset transaction before the device accepts commands.
    pub reset_delay_us: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            power_up_delay_us: DEFAULT_POWER_UP_DELAY_US,
            reset_enable_delay_us: DEFAULT_RESET_ENABLE_DELAY_US,
            reset_delay_us: DEFAULT_RESET_DELAY_US,
        }
    }
}

impl Config {
    pub fn validate<SpiE, PinE>(&self) -> Result<(), Error<SpiE, PinE>> {
        if self.power_up_delay_us < MIN_POWER_UP_DELAY_US {
            return Err(Error::InvalidConfiguration);
        }
        Ok(())
    }
}
