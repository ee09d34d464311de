//! 23-bit PSRAM address.

use core::fmt;

/// Device capacity: 64 Mbit organised as 8M x 8.
pub const CAPACITY_BYTES: usize = 8 * 1024 * 1024;

/// Byte address inside the PSRAM array, always in `0..=Address::MAX`.
///
/// The device takes 24 address bits on the wire; bit 23 is always zero for a
/// valid address.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(u32);

/// A value could not be converted into an [`Address`] because it lies outside
/// `0..=Address::MAX`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressOutOfRange;

impl Address {
    pub const MIN: Address = Address(0);
    pub const MAX: Address = Address((CAPACITY_BYTES - 1) as u32);

    pub const fn new(raw: u32) -> Option<Self> {
        if raw <= Self::MAX.0 {
            Some(Self(raw))
        } else {
            None
        }
    }

    #[inline(always)]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Wire encoding, most significant byte first (bits 23..16, 15..8, 7..0).
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 3] {
        let [_, hi, mid, lo] = self.0.to_be_bytes();
        [hi, mid, lo]
    }
}

impl From<Address> for u32 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl TryFrom<u32> for Address {
    type Error = AddressOutOfRange;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Address::new(raw).ok_or(AddressOutOfRange)
    }
}

macro_rules! impl_try_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<$ty> for Address {
                type Error = AddressOutOfRange;

                fn try_from(raw: $ty) -> Result<Self, Self::Error> {
                    u32::try_from(raw)
                        .ok()
                        .and_then(Address::new)
                        .ok_or(AddressOutOfRange)
                }
            }
        )*
    };
}

impl_try_from_int!(u8, u16, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#08x}", self.0)
    }
}

impl fmt::Display for AddressOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "address outside 0..={}", Address::MAX.0)
    }
}
