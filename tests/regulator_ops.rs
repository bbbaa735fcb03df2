mod common;

use act8600_rs::descriptors::DESCRIPTORS;
use act8600_rs::registers::{addr, Otg0Bits};
use act8600_rs::{Act8600, Capabilities, Constraints, Error, RegulatorId};
use common::FakePmic;
use embedded_hal::i2c::ErrorKind;

#[test]
fn selectors_read_back_for_every_output() {
    let mut fake = FakePmic::new();
    let pmic = Act8600::new(&mut fake);
    for desc in DESCRIPTORS.iter().filter(|d| d.caps.scales_voltage()) {
        let reg = pmic.regulator(desc.id, Constraints::default());
        for sel in 0..desc.n_voltages {
            let sel = sel as u8;
            reg.set_voltage_sel(sel).unwrap();
            assert_eq!(reg.get_voltage_sel().unwrap(), sel, "{}", desc.name);
        }
    }
}

#[test]
fn enable_disable_for_every_output() {
    let mut fake = FakePmic::new();
    let pmic = Act8600::new(&mut fake);
    for id in RegulatorId::ALL {
        let reg = pmic.regulator(id, Constraints::default());
        reg.enable().unwrap();
        assert!(reg.is_enabled().unwrap(), "{}", id.name());
        reg.enable().unwrap();
        assert!(reg.is_enabled().unwrap(), "{}", id.name());
        reg.disable().unwrap();
        assert!(!reg.is_enabled().unwrap(), "{}", id.name());
    }
}

#[test]
fn charger_enable_is_inverted() {
    let mut fake = FakePmic::new().with_reg(addr::APCH0, 0x80);
    {
        let pmic = Act8600::new(&mut fake);
        let charger = pmic.regulator(RegulatorId::UsbCharger, Constraints::default());
        assert!(!charger.is_enabled().unwrap());
        charger.enable().unwrap();
    }
    assert_eq!(fake.regs[addr::APCH0 as usize], 0x00);
}

#[test]
fn shared_ldo910_register() {
    let mut fake = FakePmic::new();
    {
        let pmic = Act8600::new(&mut fake);
        let ldo9 = pmic.regulator(RegulatorId::Ldo9, Constraints::default());
        let ldo10 = pmic.regulator(RegulatorId::Ldo10, Constraints::default());
        ldo9.enable().unwrap();
        ldo10.enable().unwrap();
        ldo9.disable().unwrap();
        assert!(!ldo9.is_enabled().unwrap());
        assert!(ldo10.is_enabled().unwrap());
    }
    assert_eq!(fake.regs[addr::LDO910_CTRL as usize], 0x40);
}

#[test]
fn current_limit_tiers() {
    let mut fake = FakePmic::new();
    let pmic = Act8600::new(&mut fake);
    let charger = pmic.regulator(RegulatorId::UsbCharger, Constraints::default());
    for max_ua in [1, 100_000, 400_000] {
        charger.set_current_limit(0, max_ua).unwrap();
        assert_eq!(charger.get_current_limit().unwrap(), 400_000);
    }
    for max_ua in [400_001, 650_000, 800_000] {
        charger.set_current_limit(0, max_ua).unwrap();
        assert_eq!(charger.get_current_limit().unwrap(), 800_000);
    }
}

#[test]
fn rejected_current_limit_leaves_register() {
    let mut fake = FakePmic::new().with_reg(addr::OTG0, 0x82);
    {
        let pmic = Act8600::new(&mut fake);
        let charger = pmic.regulator(RegulatorId::UsbCharger, Constraints::default());
        for max_ua in [0, 800_001, u32::MAX] {
            assert_eq!(charger.set_current_limit(0, max_ua), Err(Error::InvalidArgument));
        }
        assert_eq!(charger.get_current_limit().unwrap(), 800_000);
    }
    assert_eq!(fake.writes, 0);
    assert_eq!(fake.regs[addr::OTG0 as usize], 0x82);
}

#[test]
fn vbus_and_charger_share_otg0() {
    let mut fake = FakePmic::new();
    {
        let pmic = Act8600::new(&mut fake);
        let charger = pmic.regulator(RegulatorId::UsbCharger, Constraints::default());
        let vbus = pmic.regulator(RegulatorId::Vbus, Constraints::default());
        charger.set_current_limit(0, 800_000).unwrap();
        vbus.enable().unwrap();
        assert_eq!(charger.get_current_limit().unwrap(), 800_000);
        charger.set_current_limit(0, 300_000).unwrap();
        assert!(vbus.is_enabled().unwrap());
    }
    assert_eq!(fake.regs[addr::OTG0 as usize], Otg0Bits::ONQ1.bits());
}

#[test]
fn capability_mismatch_is_not_supported() {
    let mut fake = FakePmic::new();
    let pmic = Act8600::new(&mut fake);
    let vbus = pmic.regulator(RegulatorId::Vbus, Constraints::unrestricted());
    assert_eq!(vbus.capabilities(), Capabilities::Switch);
    assert_eq!(vbus.get_voltage_sel(), Err(Error::NotSupported));
    assert_eq!(vbus.list_voltage(0), Err(Error::NotSupported));
    assert_eq!(vbus.set_current_limit(0, 400_000), Err(Error::NotSupported));

    let dcdc1 = pmic.regulator(RegulatorId::Dcdc1, Constraints::unrestricted());
    assert_eq!(dcdc1.get_current_limit(), Err(Error::NotSupported));

    let charger = pmic.regulator(RegulatorId::UsbCharger, Constraints::unrestricted());
    assert_eq!(charger.map_voltage(1_800_000, 0, u32::MAX), Err(Error::NotSupported));
}

#[test]
fn fixed_ldo_has_single_selector() {
    let mut fake = FakePmic::new();
    {
        let pmic = Act8600::new(&mut fake);
        let ldo9 = pmic.regulator(RegulatorId::Ldo9, Constraints::default());
        assert_eq!(ldo9.n_voltages(), 1);
        assert_eq!(ldo9.list_voltage(0), Ok(1_800_000));
        assert_eq!(ldo9.list_voltage(1), Err(Error::InvalidArgument));
        ldo9.set_voltage_sel(0).unwrap();
        assert_eq!(ldo9.set_voltage_sel(1), Err(Error::InvalidArgument));
        assert_eq!(ldo9.get_voltage().unwrap(), 1_800_000);
    }
    assert_eq!(fake.writes, 0);
}

#[test]
fn out_of_range_selector_is_rejected() {
    let mut fake = FakePmic::new();
    {
        let pmic = Act8600::new(&mut fake);
        let dcdc3 = pmic.regulator(RegulatorId::Dcdc3, Constraints::default());
        assert_eq!(dcdc3.set_voltage_sel(64), Err(Error::InvalidArgument));
    }
    assert_eq!(fake.writes, 0);
}

#[test]
fn set_voltage_clamps_to_constraints() {
    let mut fake = FakePmic::new();
    let pmic = Act8600::new(&mut fake);
    let ldo6 = pmic.regulator(RegulatorId::Ldo6, Constraints::voltage_window(2_500_000, 3_300_000));
    ldo6.set_voltage(1_800_000, 3_300_000).unwrap();
    assert_eq!(ldo6.get_voltage().unwrap(), 2_500_000);
    assert_eq!(ldo6.get_voltage_sel().unwrap(), 49);
    assert_eq!(ldo6.set_voltage(1_000_000, 2_000_000), Err(Error::InvalidArgument));
}

#[test]
fn set_voltage_requires_permission() {
    let mut fake = FakePmic::new();
    let pmic = Act8600::new(&mut fake);
    let dcdc2 = pmic.regulator(RegulatorId::Dcdc2, Constraints::default());
    assert_eq!(dcdc2.set_voltage(1_800_000, 1_800_000), Err(Error::NotPermitted));
}

#[test]
fn set_current_respects_window() {
    let mut fake = FakePmic::new();
    let pmic = Act8600::new(&mut fake);
    let limited = Constraints::default().with_current_window(0, 400_000);
    let charger = pmic.regulator(RegulatorId::UsbCharger, limited);
    charger.set_current(0, 800_000).unwrap();
    assert_eq!(charger.get_current_limit().unwrap(), 400_000);

    let locked = pmic.regulator(RegulatorId::UsbCharger, Constraints::default());
    assert_eq!(locked.set_current(0, 800_000), Err(Error::NotPermitted));
}

#[test]
fn always_on_cannot_be_disabled() {
    let mut fake = FakePmic::new();
    let pmic = Act8600::new(&mut fake);
    let dcdc1 = pmic.regulator(RegulatorId::Dcdc1, Constraints::default().with_always_on());
    dcdc1.enable().unwrap();
    assert_eq!(dcdc1.disable(), Err(Error::NotPermitted));
    assert!(dcdc1.is_enabled().unwrap());
}

#[test]
fn failing_register_surfaces_bus_error() {
    let mut fake = FakePmic::new().failing_on(addr::SUDCDC4_VSET);
    let pmic = Act8600::new(&mut fake);
    let sudcdc = pmic.regulator(RegulatorId::Sudcdc4, Constraints::unrestricted());
    assert_eq!(sudcdc.get_voltage_sel(), Err(Error::I2c(ErrorKind::Other)));
    assert_eq!(sudcdc.set_voltage_sel(10), Err(Error::I2c(ErrorKind::Other)));
    sudcdc.enable().unwrap();
}
