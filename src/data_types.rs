//! Data types for TPS25730 register blocks and capability updates.

use crate::pdo::{FixedPdo, VariablePdo};
use crate::registers::{
    addr, decode_pdo_count, PdoCountBits, CAPABILITIES_LEN, CAPABILITIES_RESERVED_LEN, CMD_GSRC,
    VARIABLE_PDO_SLOTS,
};

/// Sink (or source) capabilities register block.
///
/// Storage always holds six Variable PDO slots; `num_of_pdos` is the logical count and is
/// echoed back to the device unchanged.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Capabilities {
    pub num_of_bytes: u8,
    /// Byte 1 raw: PDO count in bits 2-0, bits 7-3 reserved.
    pub pdo_count: PdoCountBits,
    pub fixed_pdo: FixedPdo,
    pub variable_pdos: [VariablePdo; VARIABLE_PDO_SLOTS],
    pub reserved: [u8; CAPABILITIES_RESERVED_LEN],
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            num_of_bytes: 0,
            pdo_count: PdoCountBits::empty(),
            fixed_pdo: FixedPdo::default(),
            variable_pdos: [VariablePdo::default(); VARIABLE_PDO_SLOTS],
            reserved: [0; CAPABILITIES_RESERVED_LEN],
        }
    }
}

impl Capabilities {
    pub const LEN: usize = CAPABILITIES_LEN;

    pub fn from_bytes(buf: &[u8; CAPABILITIES_LEN]) -> Self {
        let word = |offset: usize| {
            u32::from_le_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
        };

        let mut variable_pdos = [VariablePdo::default(); VARIABLE_PDO_SLOTS];
        for (slot, pdo) in variable_pdos.iter_mut().enumerate() {
            *pdo = VariablePdo::from_word(word(6 + slot * 4));
        }
        let mut reserved = [0u8; CAPABILITIES_RESERVED_LEN];
        reserved.copy_from_slice(&buf[CAPABILITIES_LEN - CAPABILITIES_RESERVED_LEN..]);

        Self {
            num_of_bytes: buf[0],
            pdo_count: PdoCountBits::from_bits_retain(buf[1]),
            fixed_pdo: FixedPdo::from_word(word(2)),
            variable_pdos,
            reserved,
        }
    }

    pub fn to_bytes(&self) -> [u8; CAPABILITIES_LEN] {
        let mut buf = [0u8; CAPABILITIES_LEN];
        buf[0] = self.num_of_bytes;
        buf[1] = self.pdo_count.bits();
        buf[2..6].copy_from_slice(&self.fixed_pdo.to_word().to_le_bytes());
        for (slot, pdo) in self.variable_pdos.iter().enumerate() {
            let offset = 6 + slot * 4;
            buf[offset..offset + 4].copy_from_slice(&pdo.to_word().to_le_bytes());
        }
        buf[CAPABILITIES_LEN - CAPABILITIES_RESERVED_LEN..].copy_from_slice(&self.reserved);
        buf
    }

    /// Logical PDO count advertised by the device (0-7 as stored).
    pub fn num_of_pdos(&self) -> u8 {
        decode_pdo_count(&self.pdo_count)
    }

    /// Variable PDO slots covered by the logical count, clamped to the storage capacity.
    pub fn active_pdos(&self) -> &[VariablePdo] {
        let len = (self.num_of_pdos() as usize).min(VARIABLE_PDO_SLOTS);
        &self.variable_pdos[..len]
    }
}

/// Address-prefixed capabilities block, framed for a single write transaction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WritePacket {
    pub write_addr: u8,
    pub capabilities: Capabilities,
}

impl WritePacket {
    pub const LEN: usize = CAPABILITIES_LEN + 1;

    /// Frame `capabilities` for the sink capabilities register.
    pub fn sink(capabilities: Capabilities) -> Self {
        Self {
            write_addr: addr::SINK_CAP,
            capabilities,
        }
    }

    pub fn to_bytes(&self) -> [u8; CAPABILITIES_LEN + 1] {
        let mut buf = [0u8; CAPABILITIES_LEN + 1];
        buf[0] = self.write_addr;
        buf[1..].copy_from_slice(&self.capabilities.to_bytes());
        buf
    }
}

/// Four-character-code command written to the command register.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FourCcCommand {
    pub command_register: u8,
    pub num_of_bytes: u8,
    pub code: [u8; 4],
}

impl FourCcCommand {
    pub const LEN: usize = 6;

    /// Re-derive and re-advertise source capabilities.
    pub const GSRC: Self = Self::new(CMD_GSRC);

    pub const fn new(code: [u8; 4]) -> Self {
        Self {
            command_register: addr::COMMAND_4CC,
            num_of_bytes: 4,
            code,
        }
    }

    pub fn to_bytes(&self) -> [u8; 6] {
        let [a, b, c, d] = self.code;
        [self.command_register, self.num_of_bytes, a, b, c, d]
    }
}

/// Physical values of one Variable PDO slot, for reporting.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PdoSnapshot {
    pub min_voltage_mv: u16,
    pub max_voltage_mv: u16,
    pub current_ma: u16,
}

impl From<&VariablePdo> for PdoSnapshot {
    fn from(pdo: &VariablePdo) -> Self {
        Self {
            min_voltage_mv: pdo.min_voltage_mv(),
            max_voltage_mv: pdo.max_voltage_mv(),
            current_ma: pdo.current_ma(),
        }
    }
}

impl core::fmt::Display for PdoSnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "min={}.{:02}V max={}.{:02}V current={}.{:02}A",
            self.min_voltage_mv / 1000,
            (self.min_voltage_mv % 1000) / 10,
            self.max_voltage_mv / 1000,
            (self.max_voltage_mv % 1000) / 10,
            self.current_ma / 1000,
            (self.current_ma % 1000) / 10,
        )
    }
}

/// Slot values read before the override and after verification.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UpdateReport {
    pub before: PdoSnapshot,
    pub after: PdoSnapshot,
}

/// Bus step of a capability update; identifies where a failure happened.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UpdatePhase {
    ReadInitial,
    WriteCapabilities,
    WriteCommand,
    ReadVerify,
}

/// Progress of a capability update. `Done` and `Failed` are terminal.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UpdateState {
    #[default]
    Idle,
    Reading,
    Modifying,
    Writing,
    CommandIssued,
    Verifying,
    Done,
    Failed(UpdatePhase),
}
