//! Error definitions for the ACT8600 driver.

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<I2cError> {
    /// Underlying I2C transaction failed.
    I2c(I2cError),
    /// Regulator id, selector, voltage window or current limit out of range.
    InvalidArgument,
    /// The `regulators` configuration container is missing.
    NotFound,
    /// Fixed-capacity storage exhausted while assembling regulators.
    OutOfMemory,
    /// The regulator does not implement this operation.
    NotSupported,
    /// The regulator constraints forbid this operation.
    NotPermitted,
}

impl<I2cError: core::fmt::Debug> core::fmt::Display for Error<I2cError> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::InvalidArgument => write!(f, "invalid argument"),
            Error::NotFound => write!(f, "regulators node not found"),
            Error::OutOfMemory => write!(f, "out of memory"),
            Error::NotSupported => write!(f, "operation not supported by regulator"),
            Error::NotPermitted => write!(f, "operation not permitted by constraints"),
        }
    }
}

impl<I2cError: core::fmt::Debug> core::error::Error for Error<I2cError> {}

/// Failures of the bus-independent configuration matcher.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No `regulators` child under the device node.
    NotFound,
    /// More matched children than the request list can hold.
    OutOfMemory,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NotFound => write!(f, "missing 'regulators' node"),
            ConfigError::OutOfMemory => write!(f, "too many regulator nodes"),
        }
    }
}

impl<I2cError> From<ConfigError> for Error<I2cError> {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound => Error::NotFound,
            ConfigError::OutOfMemory => Error::OutOfMemory,
        }
    }
}
