#![allow(dead_code)]

use tps25730_rs::data_types::Capabilities;
use tps25730_rs::pdo::{FixedPdo, SupplyType, VariablePdo};
use tps25730_rs::registers::PdoCountBits;

pub const ADDR: u8 = 0x20;

/// Two advertised slots, junk in the unused ones and in every reserved area.
pub fn sample_caps() -> Capabilities {
    let mut variable_pdos = [VariablePdo::default(); 6];
    variable_pdos[0] = VariablePdo {
        operational_current: 300,
        minimum_voltage: 100,
        maximum_voltage: 400,
        variable_supply: SupplyType::Variable,
    };
    variable_pdos[1] = VariablePdo {
        operational_current: 150,
        minimum_voltage: 60,
        maximum_voltage: 240,
        variable_supply: SupplyType::Variable,
    };
    for (i, pdo) in variable_pdos.iter_mut().enumerate().skip(2) {
        *pdo = VariablePdo::from_word(0xDEAD_0000 | i as u32);
    }

    let mut reserved = [0u8; 24];
    for (i, b) in reserved.iter_mut().enumerate() {
        *b = 0xA0 | i as u8;
    }

    Capabilities {
        num_of_bytes: 0x35,
        pdo_count: PdoCountBits::from_bits_retain(0b1010_1010),
        fixed_pdo: FixedPdo {
            operational_current: 300,
            operational_voltage: 100,
            reserved1: 0b00011,
            dual_role_data: false,
            reserved2: 0b01,
            higher_capability: true,
            dual_role_power: true,
            supply_type: SupplyType::Fixed,
        },
        variable_pdos,
        reserved,
    }
}

pub fn sample_bytes() -> Vec<u8> {
    sample_caps().to_bytes().to_vec()
}

