//! ACT8600 driver assembly.
//!
//! [`Act8600`] owns the register map and hands out [`Regulator`] objects that
//! borrow it. [`Act8600::probe`] builds the requested outputs and passes each
//! one to a host-supplied [`RegulatorRegistry`].

use crate::config::{match_regulators, ConfigNode};
use crate::data_types::{Constraints, RegulatorId};
use crate::error::Error;
use crate::regmap::Regmap;
use crate::registers::REGULATOR_COUNT;
use crate::regulator::Regulator;

/// One output to instantiate, as requested by the host.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegulatorRequest {
    /// Raw descriptor index, see [`RegulatorId`].
    pub id: u8,
    pub constraints: Constraints,
}

impl RegulatorRequest {
    pub const fn new(id: RegulatorId, constraints: Constraints) -> Self {
        Self {
            id: id as u8,
            constraints,
        }
    }
}

/// Host-side owner of constructed regulators.
pub trait RegulatorRegistry<'a, I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn register(&mut self, regulator: Regulator<'a, I2C>) -> Result<(), Error<I2C::Error>>;
}

impl<'a, I2C, const N: usize> RegulatorRegistry<'a, I2C> for heapless::Vec<Regulator<'a, I2C>, N>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn register(&mut self, regulator: Regulator<'a, I2C>) -> Result<(), Error<I2C::Error>> {
        self.push(regulator).map_err(|_| Error::OutOfMemory)
    }
}

/// ACT8600 driver instance.
pub struct Act8600<I2C> {
    regmap: Regmap<I2C>,
}

impl<I2C> Act8600<I2C> {
    /// Create a new driver instance at the default I2C address (0x5A).
    pub fn new(i2c: I2C) -> Self {
        Self {
            regmap: Regmap::new(i2c),
        }
    }

    /// Create a new driver instance with a custom I2C address.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            regmap: Regmap::with_address(i2c, address),
        }
    }

    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.regmap.address()
    }

    pub fn regmap(&self) -> &Regmap<I2C> {
        &self.regmap
    }

    /// Consume the driver and return the underlying I2C bus.
    pub fn free(self) -> I2C {
        self.regmap.free()
    }
}

impl<I2C> Act8600<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Build a single regulator object without going through a registry.
    pub fn regulator(&self, id: RegulatorId, constraints: Constraints) -> Regulator<'_, I2C> {
        Regulator::new(id, &self.regmap, constraints)
    }

    /// Validate `requests`, then construct, initialise and register each output in
    /// order. Returns the number of outputs registered.
    ///
    /// A failure stops the probe; outputs registered before it stay with the
    /// registry.
    pub fn probe<'a, R>(&'a self, requests: &[RegulatorRequest], registry: &mut R) -> Result<usize, Error<I2C::Error>>
    where
        R: RegulatorRegistry<'a, I2C>,
    {
        if requests.len() > REGULATOR_COUNT {
            error!("too many regulators requested: {}", requests.len());
            return Err(Error::InvalidArgument);
        }
        let mut seen = [false; REGULATOR_COUNT];
        for request in requests {
            let Ok(id) = RegulatorId::try_from(request.id) else {
                error!("invalid regulator id {}", request.id);
                return Err(Error::InvalidArgument);
            };
            if core::mem::replace(&mut seen[id.index()], true) {
                error!("{} requested twice", id.name());
                return Err(Error::InvalidArgument);
            }
            if !request.constraints.is_valid() {
                error!("inverted constraints for regulator id {}", request.id);
                return Err(Error::InvalidArgument);
            }
        }

        let mut registered = 0;
        for request in requests {
            let id = RegulatorId::try_from(request.id).map_err(|_| Error::InvalidArgument)?;
            let regulator = self.regulator(id, request.constraints);
            if let Err(e) = regulator.apply_constraints() {
                error!("failed to initialise {}", id.name());
                return Err(e);
            }
            if let Err(e) = registry.register(regulator) {
                error!("failed to register {}", id.name());
                return Err(e);
            }
            registered += 1;
            trace!("registered {}", id.name());
        }
        debug!("act8600: {} regulators registered", registered);
        Ok(registered)
    }

    /// Match the `regulators` node under `device` and probe the result.
    pub fn probe_config<'a, R>(&'a self, device: &ConfigNode<'_>, registry: &mut R) -> Result<usize, Error<I2C::Error>>
    where
        R: RegulatorRegistry<'a, I2C>,
    {
        let requests = match_regulators(device)?;
        self.probe(&requests, registry)
    }
}
