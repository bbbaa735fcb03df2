//! ACT8600 PMIC regulator driver
//!
//! Exposes the twelve outputs of the active-semi ACT8600 (DCDC1-3, SUDCDC4,
//! LDO5-10, VBUS switch and USB charger) as [`Regulator`] objects over a shared
//! `embedded-hal` I2C bus.
//!
//! ```no_run
//! use act8600_rs::{Act8600, Constraints, Error, RegulatorId};
//! # use embedded_hal::i2c::I2c;
//! # fn example<I: I2c>(i2c: I) -> Result<(), Error<I::Error>> {
//! let pmic = Act8600::new(i2c);
//!
//! let dcdc1 = pmic.regulator(RegulatorId::Dcdc1, Constraints::voltage_window(1_000_000, 1_800_000));
//! dcdc1.set_voltage(1_200_000, 1_250_000)?;
//! dcdc1.enable()?;
//!
//! let charger = pmic.regulator(RegulatorId::UsbCharger, Constraints::unrestricted());
//! charger.set_current_limit(0, 800_000)?;
//! # Ok(())
//! # }
//! ```

#![no_std]

#[macro_use]
mod fmt;

pub mod config;
pub mod data_types;
pub mod descriptors;
pub mod driver;
pub mod error;
pub mod linear_range;
pub mod regmap;
pub mod registers;
pub mod regulator;

pub use config::ConfigNode;
pub use data_types::{Capabilities, Constraints, CurrentLimitTier, RegulatorId, RegulatorKind, ValidOps};
pub use driver::{Act8600, RegulatorRegistry, RegulatorRequest};
pub use error::{ConfigError, Error};
pub use regulator::Regulator;
pub use registers::DEFAULT_I2C_ADDRESS;
