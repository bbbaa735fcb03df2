#![allow(dead_code)]

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation, SevenBitAddress};

pub const ADDRESS: u8 = 0x5A;

/// Register-file backed stand-in for the chip.
pub struct FakePmic {
    pub regs: [u8; 256],
    /// Transfers touching this register fail.
    pub failing: Option<u8>,
    /// Number of register writes performed.
    pub writes: usize,
}

impl FakePmic {
    pub fn new() -> Self {
        Self {
            regs: [0; 256],
            failing: None,
            writes: 0,
        }
    }

    pub fn with_reg(mut self, reg: u8, value: u8) -> Self {
        self.regs[reg as usize] = value;
        self
    }

    pub fn failing_on(mut self, reg: u8) -> Self {
        self.failing = Some(reg);
        self
    }
}

impl ErrorType for FakePmic {
    type Error = ErrorKind;
}

impl I2c<SevenBitAddress> for FakePmic {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if address != ADDRESS {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        let mut pointer = 0u8;
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    let Some((&reg, data)) = bytes.split_first() else {
                        continue;
                    };
                    if self.failing == Some(reg) {
                        return Err(ErrorKind::Other);
                    }
                    pointer = reg;
                    for &byte in data {
                        self.regs[pointer as usize] = byte;
                        self.writes += 1;
                        pointer = pointer.wrapping_add(1);
                    }
                }
                Operation::Read(buf) => {
                    for byte in buf.iter_mut() {
                        *byte = self.regs[pointer as usize];
                        pointer = pointer.wrapping_add(1);
                    }
                }
            }
        }
        Ok(())
    }
}
