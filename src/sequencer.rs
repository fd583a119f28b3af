//! Sink capability voltage override.
//!
//! One cycle reads the sink capabilities block, rewrites the maximum voltage of a single
//! Variable PDO slot, writes the block back, issues "GSrC" so the controller re-advertises,
//! and reads the block again for verification. Any bus failure ends the cycle at that step
//! with an [`Error::Update`] naming it; nothing is retried or rolled back.

use crate::data_types::{Capabilities, PdoSnapshot, UpdatePhase, UpdateReport, UpdateState};
use crate::driver::Tps25730;
use crate::error::Error;
use crate::registers::{mv_to_code, VARIABLE_PDO_SLOTS};

/// A single-use maximum-voltage override for one Variable PDO slot.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VoltageOverride {
    slot: usize,
    max_voltage: u16,
    state: UpdateState,
    before: Option<PdoSnapshot>,
}

impl VoltageOverride {
    /// Override slot 0 with a raw 50 mV code (e.g. `180` for 9 V). Codes wider than
    /// 10 bits are truncated when the block is encoded.
    pub fn new(max_voltage: u16) -> Self {
        Self {
            slot: 0,
            max_voltage,
            state: UpdateState::Idle,
            before: None,
        }
    }

    pub fn from_millivolts(mv: u16) -> Self {
        Self::new(mv_to_code(mv))
    }

    pub fn with_slot(mut self, slot: usize) -> Self {
        self.slot = slot;
        self
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn max_voltage(&self) -> u16 {
        self.max_voltage
    }

    pub fn state(&self) -> UpdateState {
        self.state
    }

    /// Slot values from the initial read. Kept after a later step fails.
    pub fn before(&self) -> Option<PdoSnapshot> {
        self.before
    }

    /// Apply the override to a block in place. Only the target slot's maximum voltage changes.
    pub fn apply(&self, caps: &mut Capabilities) {
        if let Some(pdo) = caps.variable_pdos.get_mut(self.slot) {
            pdo.maximum_voltage = self.max_voltage;
        }
    }

    fn snapshot(&self, caps: &Capabilities) -> PdoSnapshot {
        PdoSnapshot::from(&caps.variable_pdos[self.slot])
    }

    fn begin<E>(&self) -> Result<(), Error<E>> {
        if self.state != UpdateState::Idle {
            return Err(Error::InvalidConfig);
        }
        if self.slot >= VARIABLE_PDO_SLOTS {
            return Err(Error::OutOfRange);
        }
        Ok(())
    }

    fn fail<E>(&mut self, phase: UpdatePhase, err: Error<E>) -> Error<E> {
        self.state = UpdateState::Failed(phase);
        #[cfg(feature = "defmt")]
        defmt::warn!("capability update failed at {}", phase);
        err.in_phase(phase)
    }

    /// Run the full read / modify / write / GSrC / verify cycle.
    pub fn run<I2C>(&mut self, dev: &mut Tps25730<I2C>) -> Result<UpdateReport, Error<I2C::Error>>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        self.begin::<I2C::Error>()?;

        self.state = UpdateState::Reading;
        let mut caps = dev
            .read_sink_capabilities()
            .map_err(|e| self.fail(UpdatePhase::ReadInitial, e))?;
        let before = self.snapshot(&caps);
        self.before = Some(before);
        #[cfg(feature = "defmt")]
        defmt::info!("PDO{} before: {}", self.slot + 1, before);

        self.state = UpdateState::Modifying;
        self.apply(&mut caps);

        self.state = UpdateState::Writing;
        dev.write_sink_capabilities(&caps)
            .map_err(|e| self.fail(UpdatePhase::WriteCapabilities, e))?;
        #[cfg(feature = "defmt")]
        defmt::info!("PDO{} max voltage code set to {}", self.slot + 1, self.max_voltage);

        dev.refresh_source_capabilities()
            .map_err(|e| self.fail(UpdatePhase::WriteCommand, e))?;
        self.state = UpdateState::CommandIssued;
        #[cfg(feature = "defmt")]
        defmt::info!("issued GSrC");

        self.state = UpdateState::Verifying;
        let caps = dev
            .read_sink_capabilities()
            .map_err(|e| self.fail(UpdatePhase::ReadVerify, e))?;
        let after = self.snapshot(&caps);
        #[cfg(feature = "defmt")]
        defmt::info!("PDO{} after: {}", self.slot + 1, after);

        self.state = UpdateState::Done;
        Ok(UpdateReport { before, after })
    }

    /// Async version of [`run`](Self::run).
    #[cfg(feature = "async")]
    pub async fn run_async<I2C>(&mut self, dev: &mut Tps25730<I2C>) -> Result<UpdateReport, Error<I2C::Error>>
    where
        I2C: embedded_hal_async::i2c::I2c,
    {
        self.begin::<I2C::Error>()?;

        self.state = UpdateState::Reading;
        let mut caps = dev
            .read_sink_capabilities_async()
            .await
            .map_err(|e| self.fail(UpdatePhase::ReadInitial, e))?;
        let before = self.snapshot(&caps);
        self.before = Some(before);
        #[cfg(feature = "defmt")]
        defmt::info!("PDO{} before: {}", self.slot + 1, before);

        self.state = UpdateState::Modifying;
        self.apply(&mut caps);

        self.state = UpdateState::Writing;
        dev.write_sink_capabilities_async(&caps)
            .await
            .map_err(|e| self.fail(UpdatePhase::WriteCapabilities, e))?;
        #[cfg(feature = "defmt")]
        defmt::info!("PDO{} max voltage code set to {}", self.slot + 1, self.max_voltage);

        dev.refresh_source_capabilities_async()
            .await
            .map_err(|e| self.fail(UpdatePhase::WriteCommand, e))?;
        self.state = UpdateState::CommandIssued;
        #[cfg(feature = "defmt")]
        defmt::info!("issued GSrC");

        self.state = UpdateState::Verifying;
        let caps = dev
            .read_sink_capabilities_async()
            .await
            .map_err(|e| self.fail(UpdatePhase::ReadVerify, e))?;
        let after = self.snapshot(&caps);
        #[cfg(feature = "defmt")]
        defmt::info!("PDO{} after: {}", self.slot + 1, after);

        self.state = UpdateState::Done;
        Ok(UpdateReport { before, after })
    }
}
