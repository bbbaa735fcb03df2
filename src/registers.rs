//! Register map and constants for the ACT8600.
//! Addresses and bit positions follow the ACT8600 datasheet register summary.

/// Fixed 7-bit I2C address of the ACT8600.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x5A;

/// Devicetree compatible string matched by this driver.
pub const OF_COMPATIBLE: &str = "active-semi,act8600";
/// I2C bus device id matched by this driver.
pub const I2C_DEVICE_ID: &str = "act8600";

/// Number of regulator outputs on the chip.
pub const REGULATOR_COUNT: usize = 12;

/// Register addresses (8-bit).
pub mod addr {
    /// Step-down converters: VSET holds the selector, CTRL the enable bit.
    pub const DCDC1_VSET: u8 = 0x10;
    pub const DCDC1_CTRL: u8 = 0x12;
    pub const DCDC2_VSET: u8 = 0x20;
    pub const DCDC2_CTRL: u8 = 0x22;
    pub const DCDC3_VSET: u8 = 0x30;
    pub const DCDC3_CTRL: u8 = 0x32;
    /// Step-up/step-down converter (8-bit selector).
    pub const SUDCDC4_VSET: u8 = 0x40;
    pub const SUDCDC4_CTRL: u8 = 0x41;
    pub const LDO5_VSET: u8 = 0x50;
    pub const LDO5_CTRL: u8 = 0x51;
    pub const LDO6_VSET: u8 = 0x60;
    pub const LDO6_CTRL: u8 = 0x61;
    pub const LDO7_VSET: u8 = 0x70;
    pub const LDO7_CTRL: u8 = 0x71;
    pub const LDO8_VSET: u8 = 0x80;
    pub const LDO8_CTRL: u8 = 0x81;
    /// Shared enable register for the fixed LDO9 and LDO10.
    pub const LDO910_CTRL: u8 = 0x91;
    /// Charger control; SUSCHG suspends charging.
    pub const APCH0: u8 = 0xA1;
    /// USB OTG control: VBUS switch (ONQ1) and charger current tier (DBILIMQ3).
    pub const OTG0: u8 = 0xB0;
}

/// VSET selector field of DCDC1-3 and LDO5-8 (6 bits).
pub const VSEL_MASK: u8 = 0x3F;
/// VSET selector field of SUDCDC4 (8 bits).
pub const SUDCDC_VSEL_MASK: u8 = 0xFF;

/// Selector count of the 6-bit VSET outputs.
pub const VOLTAGE_NUM: u16 = 64;
/// Selector count of SUDCDC4.
pub const SUDCDC_VOLTAGE_NUM: u16 = 256;

/// Charger current limit with DBILIMQ3 clear.
pub const USB_CHARGER_LOW_UA: u32 = 400_000;
/// Charger current limit with DBILIMQ3 set.
pub const USB_CHARGER_HIGH_UA: u32 = 800_000;

bitflags::bitflags! {
    /// DCDCx_CTRL / LDOx_CTRL register bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CtrlBits: u8 {
        /// Bit 7: Output enable.
        const ENA = 1 << 7;
    }

    /// LDO910_CTRL register bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Ldo910Bits: u8 {
        /// Bit 7: LDO9 enable.
        const LDO9_ENA  = 1 << 7;
        /// Bit 6: LDO10 enable.
        const LDO10_ENA = 1 << 6;
    }

    /// OTG0 register bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Otg0Bits: u8 {
        /// Bit 7: VBUS switch (Q1) on.
        const ONQ1     = 1 << 7;
        /// Bit 1: Charger input current limit tier (0 = 400 mA, 1 = 800 mA).
        const DBILIMQ3 = 1 << 1;
    }

    /// APCH0 register bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Apch0Bits: u8 {
        /// Bit 7: Suspend charging (set = charger off).
        const SUSCHG = 1 << 7;
    }
}

/// Shift needed to place a value into `mask`.
pub const fn mask_shift(mask: u8) -> u32 {
    mask.trailing_zeros()
}
