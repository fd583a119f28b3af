//! Register map and bit-field tables for TPS25730.
//! PDO words are described as explicit shift/width tables instead of native bit-field layouts.

/// Default 7-bit I2C target address.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x20;

/// Register addresses (7-bit).
pub mod addr {
    /// 4CC command register (byte count + four ASCII characters).
    pub const COMMAND_4CC: u8 = 0x08;
    /// Source capabilities block.
    pub const SOURCE_CAP: u8 = 0x30;
    /// Sink capabilities block.
    pub const SINK_CAP: u8 = 0x33;
}

/// Voltage fields: 50 mV per LSB.
pub const VOLTAGE_LSB_MV: u16 = 50;
/// Current fields: 10 mA per LSB.
pub const CURRENT_LSB_MA: u16 = 10;
/// Largest value a 10-bit field can hold.
pub const FIELD10_MAX: u16 = 0x3FF;
pub const VOLTAGE_MAX_MV: u16 = FIELD10_MAX * VOLTAGE_LSB_MV;
pub const CURRENT_MAX_MA: u16 = FIELD10_MAX * CURRENT_LSB_MA;

/// Number of Variable PDO slots in the capabilities block.
pub const VARIABLE_PDO_SLOTS: usize = 6;
/// Reserved trailing bytes in the capabilities block.
pub const CAPABILITIES_RESERVED_LEN: usize = 24;
/// Serialized size of the capabilities block.
pub const CAPABILITIES_LEN: usize = 2 + 4 + VARIABLE_PDO_SLOTS * 4 + CAPABILITIES_RESERVED_LEN;

/// "GSrC": re-derive and re-advertise source capabilities.
pub const CMD_GSRC: [u8; 4] = *b"GSrC";

/// A contiguous bit field inside a 32-bit register word.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Field {
    pub shift: u8,
    pub width: u8,
}

impl Field {
    pub const fn new(shift: u8, width: u8) -> Self {
        Self { shift, width }
    }

    /// Unshifted mask covering `width` bits.
    pub const fn mask(self) -> u32 {
        (1u32 << self.width) - 1
    }

    pub const fn get(self, word: u32) -> u32 {
        (word >> self.shift) & self.mask()
    }

    /// Replace the field in `word`. Values wider than the field keep only their low bits,
    /// the same way the device register truncates them.
    pub const fn set(self, word: u32, value: u32) -> u32 {
        let mask = self.mask() << self.shift;
        (word & !mask) | ((value << self.shift) & mask)
    }
}

/// Fixed PDO layout (LSB first).
pub mod fixed {
    use super::Field;

    pub const OPERATIONAL_CURRENT: Field = Field::new(0, 10);
    pub const OPERATIONAL_VOLTAGE: Field = Field::new(10, 10);
    pub const RESERVED1: Field = Field::new(20, 5);
    pub const DUAL_ROLE_DATA: Field = Field::new(25, 1);
    pub const RESERVED2: Field = Field::new(26, 2);
    pub const HIGHER_CAPABILITY: Field = Field::new(28, 1);
    pub const DUAL_ROLE_POWER: Field = Field::new(29, 1);
    pub const SUPPLY_TYPE: Field = Field::new(30, 2);
}

/// Variable PDO layout (LSB first).
pub mod variable {
    use super::Field;

    pub const OPERATIONAL_CURRENT: Field = Field::new(0, 10);
    pub const MINIMUM_VOLTAGE: Field = Field::new(10, 10);
    pub const MAXIMUM_VOLTAGE: Field = Field::new(20, 10);
    pub const VARIABLE_SUPPLY: Field = Field::new(30, 2);
}

bitflags::bitflags! {
    /// Single-bit flags of a Fixed PDO word, positioned by the [`fixed`] table.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct FixedPdoFlags: u32 {
        /// Bit 25: Dual-role data.
        const DUAL_ROLE_DATA    = 1 << fixed::DUAL_ROLE_DATA.shift;
        /// Bit 28: Higher capability.
        const HIGHER_CAPABILITY = 1 << fixed::HIGHER_CAPABILITY.shift;
        /// Bit 29: Dual-role power.
        const DUAL_ROLE_POWER   = 1 << fixed::DUAL_ROLE_POWER.shift;
    }

    /// Byte 1 of the capabilities block.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct PdoCountBits: u8 {
        const NUM0 = 1 << 0;
        const NUM1 = 1 << 1;
        const NUM2 = 1 << 2;
        // Bits 7-3 reserved.
    }
}

/// Convert a 50 mV voltage code to millivolts. Only the low 10 bits are significant.
pub fn code_to_mv(code: u16) -> u16 {
    (code & FIELD10_MAX) * VOLTAGE_LSB_MV
}

/// Convert millivolts to a 50 mV voltage code, rounding down and clamping to the 10-bit range.
pub fn mv_to_code(mv: u16) -> u16 {
    (mv.min(VOLTAGE_MAX_MV) / VOLTAGE_LSB_MV).min(FIELD10_MAX)
}

/// Convert a 10 mA current code to milliamps. Only the low 10 bits are significant.
pub fn code_to_ma(code: u16) -> u16 {
    (code & FIELD10_MAX) * CURRENT_LSB_MA
}

/// Convert milliamps to a 10 mA current code, rounding down and clamping to the 10-bit range.
pub fn ma_to_code(ma: u16) -> u16 {
    (ma.min(CURRENT_MAX_MA) / CURRENT_LSB_MA).min(FIELD10_MAX)
}

/// Decode the logical PDO count from byte 1 of the capabilities block.
pub fn decode_pdo_count(bits: &PdoCountBits) -> u8 {
    bits.bits() & (PdoCountBits::NUM0 | PdoCountBits::NUM1 | PdoCountBits::NUM2).bits()
}

#[cfg(feature = "defmt")]
impl defmt::Format for PdoCountBits {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "PdoCountBits({=u8:#04x})", self.bits())
    }
}
