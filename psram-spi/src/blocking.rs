//! Blocking single-byte driver.

use embedded_hal_1::delay::DelayNs;
use embedded_hal_1::digital::{self, OutputPin};
use embedded_hal_1::spi::{self, SpiBus};

use crate::address::{Address, CAPACITY_BYTES};
use crate::command::Command;
use crate::config::Config;
use crate::error::Error;


/// Error type of a [`Psram`] built on bus `SPI` and chip-select `CS`.
pub type PsramError<SPI, CS> =
    Error<<SPI as spi::ErrorType>::Error, <CS as digital::ErrorType>::Error>;

/// 64 Mbit SPI PSRAM with single-byte random access.
///
/// The bus must already be configured for SPI mode 0 (CPOL = 0, CPHA = 0) and
/// a clock within the device limits. `SPI` is a handle, not necessarily the
/// bus itself: pass `&mut bus` or a mutex-backed wrapper when other devices
/// share the same wires. Transactions on a shared bus must be serialized by
/// the caller.
///
/// A value of this type only exists once the reset sequence has completed, so
/// every `Psram` is ready for reads and writes.
#[derive(Debug)]
pub struct Psram<SPI, CS> {
    spi: SPI,
    cs: CS,
    config: Config,
}

impl<SPI, CS> Psram<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Reset the device with the default timing and return a ready driver.
    pub fn new(spi: SPI, cs: CS, delay: &mut impl DelayNs) -> Result<Self, PsramError<SPI, CS>> {
        Self::with_config(spi, cs, delay, Config::default())
    }

    pub fn with_config(
        spi: SPI,
        cs: CS,
        delay: &mut impl DelayNs,
        config: Config,
    ) -> Result<Self, PsramError<SPI, CS>> {
        config.validate::<SPI::Error, CS::Error>()?;

        let mut this = Self { spi, cs, config };
        this.reset(delay)?;
        Ok(this)
    }

    /// Power-up initialization: CE# high for tPU, then reset-enable + reset.
    fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), PsramError<SPI, CS>> {
        debug!(
            "psram: step 1: CE# high, hold {}us",
            self.config.power_up_delay_us
        );
        self.cs.set_high().map_err(PsramError::<SPI, CS>::Pin)?;
        delay.delay_us(self.config.power_up_delay_us);

        debug!("psram: step 2: reset enable");
        self.command(Command::ResetEnable)?;
        delay.delay_us(self.config.reset_enable_delay_us);

        debug!("psram: step 3: reset");
        self.command(Command::Reset)?;
        delay.delay_us(self.config.reset_delay_us);

        debug!("psram: ready");
        Ok(())
    }

    /// Write one byte.
    ///
    /// `address` and `value` accept any integer type; out-of-range inputs fail
    /// with [`Error::InvalidAddress`] / [`Error::InvalidValue`] before CE# is
    /// touched.
    pub fn write_byte<A, V>(&mut self, address: A, value: V) -> Result<(), PsramError<SPI, CS>>
    where
        A: TryInto<Address>,
        V: TryInto<u8>,
    {
        let address = address
            .try_into()
            .map_err(|_| PsramError::<SPI, CS>::InvalidAddress)?;
        let value = value
            .try_into()
            .map_err(|_| PsramError::<SPI, CS>::InvalidValue)?;

        let [hi, mid, lo] = address.to_be_bytes();
        let frame = [Command::Write.opcode(), hi, mid, lo, value];

        trace!("psram: write {:#x} <- {:#x}", address.get(), value);
        self.transaction(|spi| spi.write(&frame))
    }

    /// Read one byte.
    pub fn read_byte<A>(&mut self, address: A) -> Result<u8, PsramError<SPI, CS>>
    where
        A: TryInto<Address>,
    {
        let address = address
            .try_into()
            .map_err(|_| PsramError::<SPI, CS>::InvalidAddress)?;

        let [hi, mid, lo] = address.to_be_bytes();
        let frame = [Command::Read.opcode(), hi, mid, lo];
        let mut data = [0u8; 1];

        // Address phase and data phase share one CE# low span.
        self.transaction(|spi| {
            spi.write(&frame)?;
            spi.read(&mut data)
        })?;

        trace!("psram: read {:#x} -> {:#x}", address.get(), data[0]);
        Ok(data[0])
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub const fn capacity() -> usize {
        CAPACITY_BYTES
    }

    /// Give back the bus handle and chip-select pin. CE# is left high.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    fn command(&mut self, cmd: Command) -> Result<(), PsramError<SPI, CS>> {
        self.transaction(|spi| spi.write(&[cmd.opcode()]))
    }

    /// Run `f` with CE# asserted. CE# is deasserted only after the bus is
    /// flushed, and is deasserted on bus faults too.
    fn transaction<R>(
        &mut self,
        f: impl FnOnce(&mut SPI) -> Result<R, SPI::Error>,
    ) -> Result<R, PsramError<SPI, CS>> {
        self.cs.set_low().map_err(PsramError::<SPI, CS>::Pin)?;

        let result = f(&mut self.spi).and_then(|r| self.spi.flush().map(|()| r));
        let released = self.cs.set_high();

        match (result, released) {
            (Ok(r), Ok(())) => Ok(r),
            (Err(e), _) => {
                warn!("psram: bus fault, CE# released");
                Err(Error::Spi(e))
            }
            (Ok(_), Err(e)) => Err(Error::Pin(e)),
        }
    }
}
