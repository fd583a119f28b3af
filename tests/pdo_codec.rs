use tps25730_rs::pdo::{FixedPdo, SupplyType, VariablePdo};
use tps25730_rs::registers::{fixed, variable, Field};

const TEN_BIT_SAMPLES: [u16; 6] = [0, 1, 180, 300, 0x2AA, 0x3FF];

#[test]
fn variable_zero_word_decodes_to_zero_fields() {
    let pdo = VariablePdo::from_word(0x0000_0000);
    assert_eq!(pdo, VariablePdo::default());
    assert_eq!(pdo.min_voltage_mv(), 0);
    assert_eq!(pdo.max_voltage_mv(), 0);
    assert_eq!(pdo.current_ma(), 0);
}

#[test]
fn variable_max_voltage_180_reads_9v() {
    let mut pdo = VariablePdo::default();
    pdo.maximum_voltage = 180;
    let decoded = VariablePdo::from_word(pdo.to_word());
    assert_eq!(decoded.maximum_voltage, 180);
    assert_eq!(decoded.max_voltage_mv(), 9_000);
}

#[test]
fn variable_roundtrip_within_widths() {
    for &a in &TEN_BIT_SAMPLES {
        for &b in &TEN_BIT_SAMPLES {
            for supply in 0..4u8 {
                let pdo = VariablePdo {
                    operational_current: a,
                    minimum_voltage: b,
                    maximum_voltage: a ^ b,
                    variable_supply: SupplyType::from_bits(supply),
                };
                assert_eq!(VariablePdo::from_word(pdo.to_word()), pdo);
            }
        }
    }
}

#[test]
fn variable_word_roundtrip_is_lossless() {
    for word in [0xFFFF_FFFFu32, 0x8B42_D12C, 0x0000_0001, 0x4000_0000] {
        assert_eq!(VariablePdo::from_word(word).to_word(), word);
    }
}

#[test]
fn fixed_roundtrip_within_widths() {
    for &v in &TEN_BIT_SAMPLES {
        for flags in 0..8u8 {
            let pdo = FixedPdo {
                operational_current: 0x3FF - v,
                operational_voltage: v,
                reserved1: 0b1_0101,
                dual_role_data: flags & 1 != 0,
                reserved2: 0b10,
                higher_capability: flags & 2 != 0,
                dual_role_power: flags & 4 != 0,
                supply_type: SupplyType::from_bits(flags),
            };
            assert_eq!(FixedPdo::from_word(pdo.to_word()), pdo);
        }
    }
}

#[test]
fn fixed_word_roundtrip_is_lossless() {
    for word in [0xFFFF_FFFFu32, 0x0001_912C, 0x2600_0000, 0xC000_0000] {
        assert_eq!(FixedPdo::from_word(word).to_word(), word);
    }
}

#[test]
fn fixed_decodes_5v_3a() {
    // 5 V (100 * 50 mV), 3 A (300 * 10 mA), dual-role power.
    let word = (1 << 29) | (100 << 10) | 300;
    let pdo = FixedPdo::from_word(word);
    assert_eq!(pdo.voltage_mv(), 5_000);
    assert_eq!(pdo.current_ma(), 3_000);
    assert!(pdo.dual_role_power);
    assert!(!pdo.dual_role_data);
    assert!(!pdo.higher_capability);
    assert_eq!(pdo.supply_type, SupplyType::Fixed);
}

#[test]
fn oversized_values_keep_low_bits() {
    let pdo = VariablePdo {
        operational_current: 1024 + 7,
        minimum_voltage: 0,
        maximum_voltage: 1024,
        variable_supply: SupplyType::Augmented,
    };
    let decoded = VariablePdo::from_word(pdo.to_word());
    assert_eq!(decoded.operational_current, 7);
    assert_eq!(decoded.maximum_voltage, 0);
    assert_eq!(decoded.minimum_voltage, 0);
    assert_eq!(decoded.variable_supply, SupplyType::Augmented);

    let fixed_pdo = FixedPdo {
        operational_voltage: 0x7FF,
        reserved1: 0xFF,
        ..Default::default()
    };
    let decoded = FixedPdo::from_word(fixed_pdo.to_word());
    assert_eq!(decoded.operational_voltage, 0x3FF);
    assert_eq!(decoded.reserved1, 0x1F);
    // Truncation must not spill into neighbouring fields.
    assert!(!decoded.dual_role_data);
    assert_eq!(decoded.operational_current, 0);
}

#[test]
fn field_tables_cover_every_bit_once() {
    let check = |fields: &[Field]| {
        let mut seen = 0u32;
        for f in fields {
            let m = f.mask() << f.shift;
            assert_eq!(seen & m, 0);
            seen |= m;
        }
        assert_eq!(seen, u32::MAX);
    };
    check(&[
        fixed::OPERATIONAL_CURRENT,
        fixed::OPERATIONAL_VOLTAGE,
        fixed::RESERVED1,
        fixed::DUAL_ROLE_DATA,
        fixed::RESERVED2,
        fixed::HIGHER_CAPABILITY,
        fixed::DUAL_ROLE_POWER,
        fixed::SUPPLY_TYPE,
    ]);
    check(&[
        variable::OPERATIONAL_CURRENT,
        variable::MINIMUM_VOLTAGE,
        variable::MAXIMUM_VOLTAGE,
        variable::VARIABLE_SUPPLY,
    ]);
}

#[test]
fn supply_type_bits_roundtrip() {
    for bits in 0..4u8 {
        assert_eq!(SupplyType::from_bits(bits).bits(), bits);
    }
    assert_eq!(SupplyType::from_bits(0b10), SupplyType::Variable);
}

#[test]
fn variable_supply_decodes_all_four_kinds() {
    let kinds = [
        (0b00u32, SupplyType::Fixed),
        (0b01, SupplyType::Battery),
        (0b10, SupplyType::Variable),
        (0b11, SupplyType::Augmented),
    ];
    for (bits, kind) in kinds {
        let word = (bits << 30) | 0x0012_3456;
        let pdo = VariablePdo::from_word(word);
        assert_eq!(pdo.variable_supply, kind);
        assert_eq!(pdo.to_word(), word);
    }
}
