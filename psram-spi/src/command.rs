//! Command set for the 64 Mbit SPI PSRAM.
//!
//! Only the single-I/O commands needed for reset and random byte access are
//! listed. Fast read, wrapped burst and QPI entry are not used by this driver.

/// Instruction byte sent first in every transaction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// Arms the device for a software reset. Must directly precede [`Command::Reset`].
    ResetEnable = 0x66,
    /// Software reset.
    Reset = 0x99,
    /// Write, followed by a 24-bit address and data.
    Write = 0x02,
    /// Read (no dummy cycles), followed by a 24-bit address.
    Read = 0x03,
}

impl Command {
    #[inline(always)]
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}
