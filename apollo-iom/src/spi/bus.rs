use crate::time::Hertz;

use super::{Board, ChipSelect, ClockFreq, Config, CsMap, Iom, Mode, Payload, PinState, PowerState, Transaction};

/// An SPI bus error.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The underlying power request failed. The bus keeps its previous
    /// power state.
    Power(E),
    /// The hardware reported a failed transfer.
    Transfer(E),
    /// The operation needs the bus awake. Wake it with [Spi::enable].
    Asleep,
    /// The bus is already awake.
    Awake,
}

impl<E> core::fmt::Display for Error<E>
where
    E: core::fmt::Debug,
{
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "SPI Error {:?}", self)
    }
}

/// The bus power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Power {
    /// Powered and able to transfer.
    Active,
    /// Powered down with register state saved. Transfers are refused
    /// until the bus is woken.
    Sleeping,
}

/// A blocking SPI bus over one IOM module.
///
/// Owns its hardware engine and board pin control exclusively; a handle
/// is not safe to share between threads without outside serialization.
/// Creation leaves the bus sleeping, so call [Spi::enable] before the
/// first transfer.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Spi<I, B> {
    iom: I,
    board: B,
    module: u8,
    chip_select: ChipSelect,
    cs_map: CsMap,
    config: Config,
    power: Power,
}

impl<I, B> Spi<I, B>
where
    I: Iom,
    B: Board,
{
    /// Bring up an IOM module as an SPI bus in mode 0, clocked at the
    /// fastest supported rate at or below `clock`, with CS0 selected.
    ///
    /// The module is configured, routed, and enabled, then immediately
    /// put to sleep. Wake it with [Spi::enable] before transferring.
    pub fn new(
        mut iom: I,
        mut board: B,
        module: u8,
        clock: Hertz,
        cs_map: CsMap,
    ) -> Result<Self, Error<I::Error>> {
        // power on first, so the configuration writes stick
        iom.power_ctrl(PowerState::Wake, false).map_err(Error::Power)?;

        let config = Config {
            clock: ClockFreq::quantize(clock),
            mode: Mode::MODE_0,
        };
        iom.configure(&config);
        board.enable_spi_pins(module);
        iom.set_enabled(true);

        let mut spi = Self {
            iom,
            board,
            module,
            chip_select: ChipSelect::Cs0,
            cs_map,
            config,
            power: Power::Active,
        };
        spi.sleep()?;
        Ok(spi)
    }

    /// The module index this bus drives.
    #[inline(always)]
    pub fn module(&self) -> u8 {
        self.module
    }

    /// The configuration applied at creation.
    #[inline(always)]
    pub fn get_config(&self) -> Config {
        self.config
    }

    /// The current power state.
    #[inline(always)]
    pub fn get_power(&self) -> Power {
        self.power
    }

    /// Select the chip select line used by following transfers.
    #[inline(always)]
    pub fn chip_select(&mut self, chip_select: ChipSelect) {
        self.chip_select = chip_select;
    }

    /// The currently selected chip select line.
    #[inline(always)]
    pub fn get_chip_select(&self) -> ChipSelect {
        self.chip_select
    }

    /// The underlying hardware engine.
    #[inline(always)]
    pub fn iom(&self) -> &I {
        &self.iom
    }

    /// The underlying board pin control.
    #[inline(always)]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Power the module down, saving its register state, and release
    /// the pin routing.
    ///
    /// Fails with [Error::Asleep] when already sleeping, and with
    /// [Error::Power] when the hardware refuses the request; in both
    /// cases nothing changes.
    pub fn sleep(&mut self) -> Result<(), Error<I::Error>> {
        if self.power != Power::Active {
            return Err(Error::Asleep);
        }

        // powering down resets registers, so ask for them to be saved
        self.iom
            .power_ctrl(PowerState::DeepSleep, true)
            .map_err(Error::Power)?;
        self.board.disable_spi_pins(self.module);
        self.power = Power::Sleeping;
        Ok(())
    }

    /// Wake the module, restoring the register state saved by
    /// [Spi::sleep], and route its pins again.
    ///
    /// Fails with [Error::Awake] when not sleeping, and with
    /// [Error::Power] when the hardware refuses the request; in both
    /// cases nothing changes.
    pub fn enable(&mut self) -> Result<(), Error<I::Error>> {
        if self.power != Power::Sleeping {
            return Err(Error::Awake);
        }

        self.iom
            .power_ctrl(PowerState::Wake, true)
            .map_err(Error::Power)?;
        self.board.enable_spi_pins(self.module);
        self.power = Power::Active;
        Ok(())
    }

    /// Tear the bus down and recover the hardware engine and board
    /// control.
    ///
    /// The module is disabled, unrouted, and powered down without
    /// saving state. Power errors during teardown are ignored, as
    /// there is nothing left to do with the module afterwards.
    pub fn free(mut self) -> (I, B) {
        self.iom.set_enabled(false);
        self.board.disable_spi_pins(self.module);
        let _ = self.iom.power_ctrl(PowerState::DeepSleep, false);
        (self.iom, self.board)
    }

    /// Issue one transaction on the currently selected chip select.
    fn transact(
        &mut self,
        instruction: Option<u8>,
        payload: Payload<'_>,
        cont: bool,
    ) -> Result<(), Error<I::Error>> {
        if self.power != Power::Active {
            return Err(Error::Asleep);
        }

        let channel = self.cs_map.channel(self.module, self.chip_select);
        self.iom
            .transfer(Transaction {
                instruction,
                payload,
                cont,
                channel,
            })
            .map_err(Error::Transfer)
    }

    /// Send an instruction byte, then read into the buffer.
    #[inline]
    pub fn cmd_read(&mut self, command: u8, buffer: &mut [u8]) -> Result<(), Error<I::Error>> {
        self.transact(Some(command), Payload::Read(buffer), false)
    }

    /// Send an instruction byte, then write the buffer.
    #[inline]
    pub fn cmd_write(&mut self, command: u8, buffer: &[u8]) -> Result<(), Error<I::Error>> {
        self.transact(Some(command), Payload::Write(buffer), false)
    }

    /// Read into the buffer.
    #[inline]
    pub fn read(&mut self, buffer: &mut [u8]) -> Result<(), Error<I::Error>> {
        self.transact(None, Payload::Read(buffer), false)
    }

    /// Write the buffer.
    #[inline]
    pub fn write(&mut self, buffer: &[u8]) -> Result<(), Error<I::Error>> {
        self.transact(None, Payload::Write(buffer), false)
    }

    /// Read into the buffer, leaving chip select asserted so the next
    /// transfer continues the same device transaction.
    #[inline]
    pub fn read_continue(&mut self, buffer: &mut [u8]) -> Result<(), Error<I::Error>> {
        self.transact(None, Payload::Read(buffer), true)
    }

    /// Write the buffer, leaving chip select asserted so the next
    /// transfer continues the same device transaction.
    #[inline]
    pub fn write_continue(&mut self, buffer: &[u8]) -> Result<(), Error<I::Error>> {
        self.transact(None, Payload::Write(buffer), true)
    }

    /// Send an instruction byte, then run a full duplex transfer,
    /// clocking `tx` out while reading into `rx`.
    ///
    /// The buffers cover the same clock cycles and must have the same
    /// length.
    #[inline]
    pub fn readwrite(
        &mut self,
        command: u8,
        rx: &mut [u8],
        tx: &[u8],
    ) -> Result<(), Error<I::Error>> {
        self.transact(Some(command), Payload::ReadWrite { rx, tx }, false)
    }

    /// Clock `len` bytes out with chip select held inactive.
    ///
    /// Some devices, SD cards among them, need clock pulses without
    /// being selected to finish their initialization, and the transfer
    /// engine cannot express that. So the chip select pad is taken over
    /// as a GPIO output driven high, filler bytes of ones are clocked
    /// out in chunks of four, and the pad is handed back to the
    /// peripheral, whether or not the filler writes succeeded.
    pub fn toggle(&mut self, len: usize) -> Result<(), Error<I::Error>> {
        if self.power != Power::Active {
            return Err(Error::Asleep);
        }

        let pin = self.cs_map.pin(self.module, self.chip_select);
        self.board.set_output(pin, PinState::High);
        let result = self.clock_filler(len);
        self.board.enable_spi_pins(self.module);
        result
    }

    fn clock_filler(&mut self, mut len: usize) -> Result<(), Error<I::Error>> {
        const FILLER: [u8; 4] = [0xff; 4];

        while len > FILLER.len() {
            self.write(&FILLER)?;
            len -= FILLER.len();
        }
        self.write(&FILLER[..len])
    }
}
