//! Error definitions for TPS25730 driver.

use crate::data_types::UpdatePhase;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub enum Error<I2cError> {
    /// Underlying I2C transaction failed.
    I2c(I2cError),
    /// I2C transaction failed during a capability update; no later step ran.
    Update { phase: UpdatePhase, source: I2cError },
    /// Variable PDO slot index outside the capabilities block.
    OutOfRange,
    /// Capability update already finished or failed.
    InvalidConfig,
}

impl<I2cError> Error<I2cError> {
    /// Failing step of a capability update, if this error came from one.
    pub fn phase(&self) -> Option<UpdatePhase> {
        match self {
            Error::Update { phase, .. } => Some(*phase),
            _ => None,
        }
    }

    /// Tag a bus failure with the update step it happened in.
    pub(crate) fn in_phase(self, phase: UpdatePhase) -> Self {
        match self {
            Error::I2c(source) => Error::Update { phase, source },
            other => other,
        }
    }
}

impl<I2cError: core::fmt::Debug> core::fmt::Display for Error<I2cError> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::Update { phase, source } => {
                write!(f, "capability update failed at {:?}: I2C error: {:?}", phase, source)
            }
            Error::OutOfRange => write!(f, "PDO slot out of range"),
            Error::InvalidConfig => write!(f, "capability update already completed"),
        }
    }
}
