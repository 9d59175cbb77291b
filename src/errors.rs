//! Errors

/// Driver errors.
///
/// Only the bus and the select pin can fail, numeric inputs are never rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// SPI write failed
    Spi,
    /// Chip select (FSYNC) pin could not be driven
    Pin,
}
