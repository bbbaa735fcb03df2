//! Static descriptor table for the twelve ACT8600 outputs.

use crate::data_types::{Capabilities, RegulatorId, RegulatorKind};
use crate::linear_range::LinearRange;
use crate::registers::{
    addr, Apch0Bits, CtrlBits, Ldo910Bits, Otg0Bits, REGULATOR_COUNT, SUDCDC_VOLTAGE_NUM, SUDCDC_VSEL_MASK,
    VOLTAGE_NUM, VSEL_MASK,
};

/// Register and bitfield holding a multi-valued setting.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegField {
    pub reg: u8,
    pub mask: u8,
}

/// Register, bit and polarity of an enable control.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EnableField {
    pub reg: u8,
    pub mask: u8,
    /// Set bit means disabled.
    pub inverted: bool,
}

impl EnableField {
    const fn active_high(reg: u8, mask: u8) -> Self {
        Self {
            reg,
            mask,
            inverted: false,
        }
    }

    /// Value to write under `mask` for the requested state.
    pub const fn value(&self, enabled: bool) -> u8 {
        if enabled != self.inverted { self.mask } else { 0 }
    }

    /// Decode the state from a raw register value.
    pub const fn is_enabled(&self, raw: u8) -> bool {
        (raw & self.mask != 0) != self.inverted
    }
}

/// Immutable description of one output.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegulatorDesc {
    pub name: &'static str,
    pub id: RegulatorId,
    pub kind: RegulatorKind,
    pub caps: Capabilities,
    pub n_voltages: u16,
    pub ranges: &'static [LinearRange],
    pub vsel: Option<RegField>,
    pub enable: EnableField,
    /// Current tier bit: clear selects the low tier, set the high one.
    pub current_limit: Option<RegField>,
}

/// DCDC1-3 and LDO5-8.
pub static VOLTAGE_RANGES: [LinearRange; 3] = [
    LinearRange::new(600_000, 0, 23, 25_000),
    LinearRange::new(1_200_000, 24, 47, 50_000),
    LinearRange::new(2_400_000, 48, 63, 100_000),
];

// Silicon outputs 1.8 V on LDO9 although the datasheet lists 3.3 V.
pub static LDO9_VOLTAGE_RANGES: [LinearRange; 1] = [LinearRange::new(1_800_000, 0, 0, 0)];

pub static LDO10_VOLTAGE_RANGES: [LinearRange; 1] = [LinearRange::new(1_200_000, 0, 0, 0)];

// Selector 191 appears in both of the last two segments; the first one owns it.
pub static SUDCDC_VOLTAGE_RANGES: [LinearRange; 4] = [
    LinearRange::new(3_000_000, 0, 63, 0),
    LinearRange::new(3_000_000, 64, 159, 100_000),
    LinearRange::new(12_600_000, 160, 191, 200_000),
    LinearRange::new(19_000_000, 191, 255, 400_000),
];

const fn scaling(id: RegulatorId, vset: u8, ctrl: u8) -> RegulatorDesc {
    RegulatorDesc {
        name: id.name(),
        id,
        kind: RegulatorKind::Voltage,
        caps: Capabilities::ScalingVoltage,
        n_voltages: VOLTAGE_NUM,
        ranges: &VOLTAGE_RANGES,
        vsel: Some(RegField {
            reg: vset,
            mask: VSEL_MASK,
        }),
        enable: EnableField::active_high(ctrl, CtrlBits::ENA.bits()),
        current_limit: None,
    }
}

const fn fixed(id: RegulatorId, ranges: &'static [LinearRange], enable_mask: u8) -> RegulatorDesc {
    RegulatorDesc {
        name: id.name(),
        id,
        kind: RegulatorKind::Voltage,
        caps: Capabilities::ScalingVoltage,
        n_voltages: 1,
        ranges,
        vsel: None,
        enable: EnableField::active_high(addr::LDO910_CTRL, enable_mask),
        current_limit: None,
    }
}

/// Indexed by [`RegulatorId::index`].
pub static DESCRIPTORS: [RegulatorDesc; REGULATOR_COUNT] = [
    scaling(RegulatorId::Dcdc1, addr::DCDC1_VSET, addr::DCDC1_CTRL),
    scaling(RegulatorId::Dcdc2, addr::DCDC2_VSET, addr::DCDC2_CTRL),
    scaling(RegulatorId::Dcdc3, addr::DCDC3_VSET, addr::DCDC3_CTRL),
    RegulatorDesc {
        name: RegulatorId::Sudcdc4.name(),
        id: RegulatorId::Sudcdc4,
        kind: RegulatorKind::Voltage,
        caps: Capabilities::ScalingVoltage,
        n_voltages: SUDCDC_VOLTAGE_NUM,
        ranges: &SUDCDC_VOLTAGE_RANGES,
        vsel: Some(RegField {
            reg: addr::SUDCDC4_VSET,
            mask: SUDCDC_VSEL_MASK,
        }),
        enable: EnableField::active_high(addr::SUDCDC4_CTRL, CtrlBits::ENA.bits()),
        current_limit: None,
    },
    scaling(RegulatorId::Ldo5, addr::LDO5_VSET, addr::LDO5_CTRL),
    scaling(RegulatorId::Ldo6, addr::LDO6_VSET, addr::LDO6_CTRL),
    scaling(RegulatorId::Ldo7, addr::LDO7_VSET, addr::LDO7_CTRL),
    scaling(RegulatorId::Ldo8, addr::LDO8_VSET, addr::LDO8_CTRL),
    fixed(RegulatorId::Ldo9, &LDO9_VOLTAGE_RANGES, Ldo910Bits::LDO9_ENA.bits()),
    fixed(RegulatorId::Ldo10, &LDO10_VOLTAGE_RANGES, Ldo910Bits::LDO10_ENA.bits()),
    RegulatorDesc {
        name: RegulatorId::Vbus.name(),
        id: RegulatorId::Vbus,
        kind: RegulatorKind::Voltage,
        caps: Capabilities::Switch,
        n_voltages: 0,
        ranges: &[],
        vsel: None,
        enable: EnableField::active_high(addr::OTG0, Otg0Bits::ONQ1.bits()),
        current_limit: None,
    },
    RegulatorDesc {
        name: RegulatorId::UsbCharger.name(),
        id: RegulatorId::UsbCharger,
        kind: RegulatorKind::Current,
        caps: Capabilities::CurrentLimit,
        n_voltages: 0,
        ranges: &[],
        vsel: None,
        enable: EnableField {
            reg: addr::APCH0,
            mask: Apch0Bits::SUSCHG.bits(),
            inverted: true,
        },
        current_limit: Some(RegField {
            reg: addr::OTG0,
            mask: Otg0Bits::DBILIMQ3.bits(),
        }),
    },
];

/// Descriptor of `id`.
pub fn descriptor(id: RegulatorId) -> &'static RegulatorDesc {
    &DESCRIPTORS[id.index()]
}
