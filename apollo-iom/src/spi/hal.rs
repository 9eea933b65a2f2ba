use super::{Config, Transaction};

pub use embedded_hal::digital::PinState;

/// Power states an IOM module can be asked to enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Fully powered and able to transfer.
    Wake,
    /// Powered down. Register state is lost unless the request asks
    /// for it to be saved.
    DeepSleep,
}

/// The underlying transfer and power engine for one IOM module.
///
/// Implementations bind a vendor HAL (or a test double) to a single
/// module instance. All transfers are blocking: [Iom::transfer] does
/// not return until the hardware finishes or reports failure.
pub trait Iom {
    /// The status the hardware reports on failure.
    type Error;

    /// Request a power state change.
    ///
    /// With `save` set, a [PowerState::DeepSleep] request saves the
    /// module's register state, and a [PowerState::Wake] request
    /// restores it. Waking with `save` set fails when no saved state
    /// exists.
    fn power_ctrl(&mut self, state: PowerState, save: bool) -> Result<(), Self::Error>;

    /// Apply a clock and mode configuration to the powered module.
    fn configure(&mut self, config: &Config);

    /// Enable or disable the module.
    fn set_enabled(&mut self, enabled: bool);

    /// Run one blocking transaction against the module.
    fn transfer(&mut self, transaction: Transaction<'_>) -> Result<(), Self::Error>;
}

/// Board-level pin control consumed by the bus.
///
/// Covers the two things the bus cannot do through the module itself:
/// routing the module's pins to the IOM function and back, and driving
/// a single pad as a plain GPIO output.
pub trait Board {
    /// Route an IOM module's pins to the peripheral.
    fn enable_spi_pins(&mut self, module: u8);

    /// Release an IOM module's pins from the peripheral.
    fn disable_spi_pins(&mut self, module: u8);

    /// Configure a pad as a GPIO output at the given initial level,
    /// taking it away from whatever function held it.
    fn set_output(&mut self, pin: u8, level: PinState);
}
