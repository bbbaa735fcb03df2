//! Byte-wide register map over an I2C bus.
//!
//! The bus lives in a [`RefCell`] so regulator handles can share it by
//! reference. A read-modify-write holds the borrow for both transfers, which
//! keeps [`Regmap::update_bits`] atomic against every other access through the
//! same map.

use core::cell::RefCell;

use crate::error::Error;
use crate::registers::{mask_shift, DEFAULT_I2C_ADDRESS};

pub struct Regmap<I2C> {
    i2c: RefCell<I2C>,
    address: u8,
}

impl<I2C> Regmap<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c: RefCell::new(i2c),
            address,
        }
    }

    /// 7-bit I2C address of the chip.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back.
    pub fn free(self) -> I2C {
        self.i2c.into_inner()
    }
}

impl<I2C> Regmap<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Read a single register.
    pub fn read(&self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        read_reg(&mut *self.i2c.borrow_mut(), self.address, reg)
    }

    /// Write a single register.
    pub fn write(&self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        write_reg(&mut *self.i2c.borrow_mut(), self.address, reg, value)
    }

    /// Replace the bits of `reg` selected by `mask` with those of `value`.
    pub fn update_bits(&self, reg: u8, mask: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        let mut i2c = self.i2c.borrow_mut();
        let cur = read_reg(&mut *i2c, self.address, reg)?;
        let new = (cur & !mask) | (value & mask);
        write_reg(&mut *i2c, self.address, reg, new)
    }

    /// Read the field selected by `mask`, shifted down to bit 0.
    pub fn read_bits(&self, reg: u8, mask: u8) -> Result<u8, Error<I2C::Error>> {
        let raw = self.read(reg)?;
        Ok(field_get(raw, mask))
    }
}

fn read_reg<I2C: embedded_hal::i2c::I2c>(i2c: &mut I2C, address: u8, reg: u8) -> Result<u8, Error<I2C::Error>> {
    let mut buf = [0u8; 1];
    i2c.write_read(address, &[reg], &mut buf).map_err(Error::I2c)?;
    Ok(buf[0])
}

fn write_reg<I2C: embedded_hal::i2c::I2c>(
    i2c: &mut I2C,
    address: u8,
    reg: u8,
    value: u8,
) -> Result<(), Error<I2C::Error>> {
    i2c.write(address, &[reg, value]).map_err(Error::I2c)
}

/// Extract the field selected by `mask` from `raw`.
pub const fn field_get(raw: u8, mask: u8) -> u8 {
    if mask == 0 {
        return 0;
    }
    (raw & mask) >> mask_shift(mask)
}

/// Place `value` into the field selected by `mask`.
pub const fn field_prep(value: u8, mask: u8) -> u8 {
    if mask == 0 {
        return 0;
    }
    (value << mask_shift(mask)) & mask
}
