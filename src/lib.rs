#![cfg_attr(not(test), no_std)]

//! [AD9833](https://www.analog.com/en/products/ad9833.html) driver.
//!
//! Every operation sends one 6 byte frame with `FSYNC` held low:
//! the control word, then the 28 bit frequency register as two 14 bit writes.

pub mod constants;
pub mod register;
pub mod errors;
pub mod frequency;
pub mod device;

pub use device::Ad9833;
pub use errors::Error;
pub use frequency::TuningWord;
pub use register::{ControlWord, FrequencySlot, Waveform};
