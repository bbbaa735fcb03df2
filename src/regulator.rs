//! Runtime regulator object.
//!
//! A [`Regulator`] pairs a static [`RegulatorDesc`] with the shared register map
//! and the constraints supplied for that output. The driver-level operations
//! (`enable`, `set_voltage_sel`, `set_current_limit`, ...) translate directly to
//! register accesses. The consumer-level operations (`set_voltage`,
//! `set_current`) additionally enforce the constraints.

use crate::data_types::{Capabilities, Constraints, CurrentLimitTier, RegulatorId, ValidOps};
use crate::descriptors::{descriptor, RegField, RegulatorDesc};
use crate::error::Error;
use crate::fmt::Debug2Format;
use crate::linear_range::{list_voltage, map_voltage, selector_voltage};
use crate::regmap::{field_prep, Regmap};

pub struct Regulator<'a, I2C> {
    desc: &'static RegulatorDesc,
    regmap: &'a Regmap<I2C>,
    constraints: Constraints,
}

impl<'a, I2C> Regulator<'a, I2C> {
    pub fn new(id: RegulatorId, regmap: &'a Regmap<I2C>, constraints: Constraints) -> Self {
        Self {
            desc: descriptor(id),
            regmap,
            constraints,
        }
    }

    pub fn id(&self) -> RegulatorId {
        self.desc.id
    }

    pub fn name(&self) -> &'static str {
        self.desc.name
    }

    pub fn descriptor(&self) -> &'static RegulatorDesc {
        self.desc
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn capabilities(&self) -> Capabilities {
        self.desc.caps
    }

    /// Number of selectable voltages (zero for outputs without voltage scaling).
    pub fn n_voltages(&self) -> u16 {
        self.desc.n_voltages
    }
}

impl<I2C> Regulator<'_, I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Log a failed bus access with the operation and register involved.
    fn check<T>(&self, op: &'static str, reg: u8, res: Result<T, Error<I2C::Error>>) -> Result<T, Error<I2C::Error>> {
        if let Err(Error::I2c(e)) = &res {
            error!(
                "{}: {} failed on register {:#x}: {:?}",
                self.desc.name,
                op,
                reg,
                Debug2Format(e)
            );
        }
        res
    }

    fn require_scaling(&self) -> Result<(), Error<I2C::Error>> {
        if self.desc.caps.scales_voltage() {
            Ok(())
        } else {
            Err(Error::NotSupported)
        }
    }

    fn current_limit_field(&self) -> Result<RegField, Error<I2C::Error>> {
        match self.desc.current_limit {
            Some(field) if self.desc.caps.limits_current() => Ok(field),
            _ => Err(Error::NotSupported),
        }
    }

    /// Switch the output on.
    pub fn enable(&self) -> Result<(), Error<I2C::Error>> {
        let en = &self.desc.enable;
        self.check("enable", en.reg, self.regmap.update_bits(en.reg, en.mask, en.value(true)))?;
        debug!("{}: enabled", self.desc.name);
        Ok(())
    }

    /// Switch the output off. Refused for always-on outputs.
    pub fn disable(&self) -> Result<(), Error<I2C::Error>> {
        if self.constraints.always_on {
            warn!("{}: refusing to disable always-on output", self.desc.name);
            return Err(Error::NotPermitted);
        }
        let en = &self.desc.enable;
        self.check("disable", en.reg, self.regmap.update_bits(en.reg, en.mask, en.value(false)))?;
        debug!("{}: disabled", self.desc.name);
        Ok(())
    }

    pub fn is_enabled(&self) -> Result<bool, Error<I2C::Error>> {
        let en = &self.desc.enable;
        let raw = self.check("is_enabled", en.reg, self.regmap.read(en.reg))?;
        Ok(en.is_enabled(raw))
    }

    /// Output of the `index`-th selectable voltage, in microvolts.
    pub fn list_voltage(&self, index: u16) -> Result<u32, Error<I2C::Error>> {
        self.require_scaling()?;
        list_voltage(self.desc.ranges, index).ok_or(Error::InvalidArgument)
    }

    /// Selector for the lowest output at or above `max(target_uv, min_uv)` and at
    /// or below `max_uv`.
    pub fn map_voltage(&self, target_uv: u32, min_uv: u32, max_uv: u32) -> Result<u8, Error<I2C::Error>> {
        self.require_scaling()?;
        map_voltage(self.desc.ranges, target_uv, min_uv, max_uv).ok_or(Error::InvalidArgument)
    }

    pub fn get_voltage_sel(&self) -> Result<u8, Error<I2C::Error>> {
        self.require_scaling()?;
        let Some(vsel) = self.desc.vsel else {
            return Ok(0);
        };
        self.check("get_voltage_sel", vsel.reg, self.regmap.read_bits(vsel.reg, vsel.mask))
    }

    pub fn set_voltage_sel(&self, selector: u8) -> Result<(), Error<I2C::Error>> {
        self.require_scaling()?;
        if u16::from(selector) >= self.desc.n_voltages {
            return Err(Error::InvalidArgument);
        }
        let Some(vsel) = self.desc.vsel else {
            return Ok(());
        };
        self.check(
            "set_voltage_sel",
            vsel.reg,
            self.regmap.update_bits(vsel.reg, vsel.mask, field_prep(selector, vsel.mask)),
        )?;
        debug!("{}: selector {}", self.desc.name, selector);
        Ok(())
    }

    /// Programmed output voltage in microvolts.
    pub fn get_voltage(&self) -> Result<u32, Error<I2C::Error>> {
        let sel = self.get_voltage_sel()?;
        selector_voltage(self.desc.ranges, sel).ok_or(Error::InvalidArgument)
    }

    /// Program the lowest voltage within `[min_uv, max_uv]` and the constraints.
    pub fn set_voltage(&self, min_uv: u32, max_uv: u32) -> Result<(), Error<I2C::Error>> {
        self.require_scaling()?;
        if !self.constraints.allows(ValidOps::VOLTAGE) {
            return Err(Error::NotPermitted);
        }
        self.program_window(min_uv, max_uv)
    }

    fn program_window(&self, min_uv: u32, max_uv: u32) -> Result<(), Error<I2C::Error>> {
        let lo = min_uv.max(self.constraints.min_uv);
        let hi = max_uv.min(self.constraints.max_uv);
        if lo > hi {
            return Err(Error::InvalidArgument);
        }
        let sel = self.map_voltage(lo, lo, hi)?;
        self.set_voltage_sel(sel)
    }

    /// Current limit of the USB charger, in microamps.
    pub fn get_current_limit(&self) -> Result<u32, Error<I2C::Error>> {
        let field = self.current_limit_field()?;
        let bit = self.check(
            "get_current_limit",
            field.reg,
            self.regmap.read_bits(field.reg, field.mask),
        )?;
        let tier = if bit != 0 {
            CurrentLimitTier::High
        } else {
            CurrentLimitTier::Low
        };
        Ok(tier.microamps())
    }

    /// Select the charger current tier for a ceiling of `max_ua`.
    pub fn set_current_limit(&self, _min_ua: u32, max_ua: u32) -> Result<(), Error<I2C::Error>> {
        let field = self.current_limit_field()?;
        let tier = CurrentLimitTier::for_max_ua(max_ua).ok_or(Error::InvalidArgument)?;
        let value = match tier {
            CurrentLimitTier::Low => 0,
            CurrentLimitTier::High => field.mask,
        };
        self.check(
            "set_current_limit",
            field.reg,
            self.regmap.update_bits(field.reg, field.mask, value),
        )?;
        debug!("{}: current limit {} uA", self.desc.name, tier.microamps());
        Ok(())
    }

    /// Set the current limit within `[min_ua, max_ua]` and the constraints.
    pub fn set_current(&self, min_ua: u32, max_ua: u32) -> Result<(), Error<I2C::Error>> {
        self.current_limit_field()?;
        if !self.constraints.allows(ValidOps::CURRENT) {
            return Err(Error::NotPermitted);
        }
        let lo = min_ua.max(self.constraints.min_ua);
        let hi = max_ua.min(self.constraints.current_ceiling());
        if lo > hi {
            return Err(Error::InvalidArgument);
        }
        self.set_current_limit(lo, hi)
    }

    /// Apply the probe-time policy: program the voltage window when requested and
    /// switch boot-on and always-on outputs on.
    pub fn apply_constraints(&self) -> Result<(), Error<I2C::Error>> {
        if self.constraints.apply_uv && self.desc.caps.scales_voltage() {
            self.program_window(self.constraints.min_uv, self.constraints.max_uv)?;
        }
        if self.constraints.always_on || self.constraints.boot_on {
            self.enable()?;
        }
        Ok(())
    }
}
