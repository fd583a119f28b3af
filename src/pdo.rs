//! Power Data Object codec.
//!
//! Both PDO variants are packed into one little-endian 32-bit word on the wire. Decoding and
//! encoding go through the field tables in [`crate::registers`]; encoding keeps only the low
//! bits of each value, so a 10-bit field assigned `1024` reads back as `0`.

use crate::registers::{
    code_to_ma, code_to_mv, fixed, ma_to_code, mv_to_code, variable, FixedPdoFlags,
};

/// Power supply kind held in bits 31-30 of a PDO.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SupplyType {
    #[default]
    Fixed,
    Battery,
    Variable,
    Augmented,
}

impl SupplyType {
    /// Decode the two-bit supply field; higher bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => SupplyType::Fixed,
            0b01 => SupplyType::Battery,
            0b10 => SupplyType::Variable,
            _ => SupplyType::Augmented,
        }
    }

    pub fn bits(self) -> u8 {
        match self {
            SupplyType::Fixed => 0b00,
            SupplyType::Battery => 0b01,
            SupplyType::Variable => 0b10,
            SupplyType::Augmented => 0b11,
        }
    }
}

/// Fixed supply PDO.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FixedPdo {
    /// 10 mA units (10 bits).
    pub operational_current: u16,
    /// 50 mV units (10 bits).
    pub operational_voltage: u16,
    /// Bits 24-20, carried through unchanged.
    pub reserved1: u8,
    pub dual_role_data: bool,
    /// Bits 27-26, carried through unchanged.
    pub reserved2: u8,
    pub higher_capability: bool,
    pub dual_role_power: bool,
    pub supply_type: SupplyType,
}

impl FixedPdo {
    pub fn from_word(word: u32) -> Self {
        let flags = FixedPdoFlags::from_bits_truncate(word);
        Self {
            operational_current: fixed::OPERATIONAL_CURRENT.get(word) as u16,
            operational_voltage: fixed::OPERATIONAL_VOLTAGE.get(word) as u16,
            reserved1: fixed::RESERVED1.get(word) as u8,
            dual_role_data: flags.contains(FixedPdoFlags::DUAL_ROLE_DATA),
            reserved2: fixed::RESERVED2.get(word) as u8,
            higher_capability: flags.contains(FixedPdoFlags::HIGHER_CAPABILITY),
            dual_role_power: flags.contains(FixedPdoFlags::DUAL_ROLE_POWER),
            supply_type: SupplyType::from_bits(fixed::SUPPLY_TYPE.get(word) as u8),
        }
    }

    pub fn to_word(&self) -> u32 {
        let mut word = 0;
        word = fixed::OPERATIONAL_CURRENT.set(word, self.operational_current as u32);
        word = fixed::OPERATIONAL_VOLTAGE.set(word, self.operational_voltage as u32);
        word = fixed::RESERVED1.set(word, self.reserved1 as u32);
        word = fixed::RESERVED2.set(word, self.reserved2 as u32);
        word = fixed::SUPPLY_TYPE.set(word, self.supply_type.bits() as u32);

        let mut flags = FixedPdoFlags::empty();
        flags.set(FixedPdoFlags::DUAL_ROLE_DATA, self.dual_role_data);
        flags.set(FixedPdoFlags::HIGHER_CAPABILITY, self.higher_capability);
        flags.set(FixedPdoFlags::DUAL_ROLE_POWER, self.dual_role_power);
        word | flags.bits()
    }

    pub fn voltage_mv(&self) -> u16 {
        code_to_mv(self.operational_voltage)
    }

    pub fn current_ma(&self) -> u16 {
        code_to_ma(self.operational_current)
    }

    pub fn set_voltage_mv(&mut self, mv: u16) {
        self.operational_voltage = mv_to_code(mv);
    }

    pub fn set_current_ma(&mut self, ma: u16) {
        self.operational_current = ma_to_code(ma);
    }
}

impl From<u32> for FixedPdo {
    fn from(word: u32) -> Self {
        Self::from_word(word)
    }
}

impl From<FixedPdo> for u32 {
    fn from(pdo: FixedPdo) -> Self {
        pdo.to_word()
    }
}

/// Variable supply PDO.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VariablePdo {
    /// 10 mA units (10 bits).
    pub operational_current: u16,
    /// 50 mV units (10 bits).
    pub minimum_voltage: u16,
    /// 50 mV units (10 bits).
    pub maximum_voltage: u16,
    pub variable_supply: SupplyType,
}

impl VariablePdo {
    pub fn from_word(word: u32) -> Self {
        Self {
            operational_current: variable::OPERATIONAL_CURRENT.get(word) as u16,
            minimum_voltage: variable::MINIMUM_VOLTAGE.get(word) as u16,
            maximum_voltage: variable::MAXIMUM_VOLTAGE.get(word) as u16,
            variable_supply: SupplyType::from_bits(variable::VARIABLE_SUPPLY.get(word) as u8),
        }
    }

    pub fn to_word(&self) -> u32 {
        let mut word = 0;
        word = variable::OPERATIONAL_CURRENT.set(word, self.operational_current as u32);
        word = variable::MINIMUM_VOLTAGE.set(word, self.minimum_voltage as u32);
        word = variable::MAXIMUM_VOLTAGE.set(word, self.maximum_voltage as u32);
        variable::VARIABLE_SUPPLY.set(word, self.variable_supply.bits() as u32)
    }

    pub fn min_voltage_mv(&self) -> u16 {
        code_to_mv(self.minimum_voltage)
    }

    pub fn max_voltage_mv(&self) -> u16 {
        code_to_mv(self.maximum_voltage)
    }

    pub fn current_ma(&self) -> u16 {
        code_to_ma(self.operational_current)
    }

    pub fn set_min_voltage_mv(&mut self, mv: u16) {
        self.minimum_voltage = mv_to_code(mv);
    }

    pub fn set_max_voltage_mv(&mut self, mv: u16) {
        self.maximum_voltage = mv_to_code(mv);
    }

    pub fn set_current_ma(&mut self, ma: u16) {
        self.operational_current = ma_to_code(ma);
    }
}

impl From<u32> for VariablePdo {
    fn from(word: u32) -> Self {
        Self::from_word(word)
    }
}

impl From<VariablePdo> for u32 {
    fn from(pdo: VariablePdo) -> Self {
        pdo.to_word()
    }
}
