//! Data types for the ACT8600 driver.

use crate::registers::REGULATOR_COUNT;

/// The twelve ACT8600 outputs, in descriptor-table order.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum RegulatorId {
    Dcdc1 = 0,
    Dcdc2,
    Dcdc3,
    Sudcdc4,
    Ldo5,
    Ldo6,
    Ldo7,
    Ldo8,
    Ldo9,
    Ldo10,
    Vbus,
    UsbCharger,
}

impl RegulatorId {
    pub const ALL: [RegulatorId; REGULATOR_COUNT] = [
        RegulatorId::Dcdc1,
        RegulatorId::Dcdc2,
        RegulatorId::Dcdc3,
        RegulatorId::Sudcdc4,
        RegulatorId::Ldo5,
        RegulatorId::Ldo6,
        RegulatorId::Ldo7,
        RegulatorId::Ldo8,
        RegulatorId::Ldo9,
        RegulatorId::Ldo10,
        RegulatorId::Vbus,
        RegulatorId::UsbCharger,
    ];

    /// Position in the descriptor table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Configuration node name of this output.
    pub const fn name(self) -> &'static str {
        match self {
            RegulatorId::Dcdc1 => "DCDC_REG1",
            RegulatorId::Dcdc2 => "DCDC_REG2",
            RegulatorId::Dcdc3 => "DCDC_REG3",
            RegulatorId::Sudcdc4 => "SUDCDC_REG4",
            RegulatorId::Ldo5 => "LDO_REG5",
            RegulatorId::Ldo6 => "LDO_REG6",
            RegulatorId::Ldo7 => "LDO_REG7",
            RegulatorId::Ldo8 => "LDO_REG8",
            RegulatorId::Ldo9 => "LDO_REG9",
            RegulatorId::Ldo10 => "LDO_REG10",
            RegulatorId::Vbus => "VBUS",
            RegulatorId::UsbCharger => "USB_CHARGER",
        }
    }

    /// Look up an output by its configuration node name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }
}

impl TryFrom<u8> for RegulatorId {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(raw as usize).copied().ok_or(raw)
    }
}

/// What an output regulates.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegulatorKind {
    Voltage,
    Current,
}

/// Operation set an output implements.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Capabilities {
    /// Enable control plus selector-based voltage scaling.
    ScalingVoltage,
    /// Enable control only.
    Switch,
    /// Enable control plus a two-tier current limit.
    CurrentLimit,
}

impl Capabilities {
    pub const fn scales_voltage(self) -> bool {
        matches!(self, Capabilities::ScalingVoltage)
    }

    pub const fn limits_current(self) -> bool {
        matches!(self, Capabilities::CurrentLimit)
    }
}

bitflags::bitflags! {
    /// Runtime changes a consumer may request.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ValidOps: u8 {
        /// Output voltage may be changed.
        const VOLTAGE = 1 << 0;
        /// Current limit may be changed.
        const CURRENT = 1 << 1;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ValidOps {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ValidOps({=u8:#x})", self.bits())
    }
}

/// Machine constraints applied to one output.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Constraints {
    pub min_uv: u32,
    pub max_uv: u32,
    pub min_ua: u32,
    pub max_ua: u32,
    pub valid_ops: ValidOps,
    /// Never switch the output off.
    pub always_on: bool,
    /// Switch the output on at probe.
    pub boot_on: bool,
    /// Program `min_uv..=max_uv` at probe.
    pub apply_uv: bool,
}

impl Constraints {
    /// Every change allowed over the full electrical range.
    pub const fn unrestricted() -> Self {
        Self {
            min_uv: 0,
            max_uv: u32::MAX,
            min_ua: 0,
            max_ua: u32::MAX,
            valid_ops: ValidOps::all(),
            always_on: false,
            boot_on: false,
            apply_uv: false,
        }
    }

    /// Voltage window `[min_uv, max_uv]` with voltage changes allowed.
    pub const fn voltage_window(min_uv: u32, max_uv: u32) -> Self {
        Self {
            min_uv,
            max_uv,
            min_ua: 0,
            max_ua: 0,
            valid_ops: ValidOps::VOLTAGE,
            always_on: false,
            boot_on: false,
            apply_uv: false,
        }
    }

    pub const fn with_always_on(mut self) -> Self {
        self.always_on = true;
        self
    }

    pub const fn with_boot_on(mut self) -> Self {
        self.boot_on = true;
        self
    }

    pub const fn with_apply_uv(mut self) -> Self {
        self.apply_uv = true;
        self
    }

    pub const fn with_current_window(mut self, min_ua: u32, max_ua: u32) -> Self {
        self.min_ua = min_ua;
        self.max_ua = max_ua;
        self.valid_ops = self.valid_ops.union(ValidOps::CURRENT);
        self
    }

    /// Whether the bounds are ordered.
    pub const fn is_valid(&self) -> bool {
        self.min_uv <= self.max_uv && self.min_ua <= self.current_ceiling()
    }

    pub const fn allows(&self, ops: ValidOps) -> bool {
        self.valid_ops.contains(ops)
    }

    /// Upper current bound; zero means unbounded.
    pub(crate) const fn current_ceiling(&self) -> u32 {
        if self.max_ua == 0 { u32::MAX } else { self.max_ua }
    }
}

/// USB charger input current tier selected by OTG0.DBILIMQ3.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CurrentLimitTier {
    /// 400 mA.
    Low,
    /// 800 mA.
    High,
}

impl CurrentLimitTier {
    pub const fn microamps(self) -> u32 {
        match self {
            CurrentLimitTier::Low => crate::registers::USB_CHARGER_LOW_UA,
            CurrentLimitTier::High => crate::registers::USB_CHARGER_HIGH_UA,
        }
    }

    /// Tier for a requested ceiling, `None` outside `(0, 800 mA]`.
    pub const fn for_max_ua(max_ua: u32) -> Option<Self> {
        if max_ua == 0 || max_ua > crate::registers::USB_CHARGER_HIGH_UA {
            None
        } else if max_ua <= crate::registers::USB_CHARGER_LOW_UA {
            Some(CurrentLimitTier::Low)
        } else {
            Some(CurrentLimitTier::High)
        }
    }
}
