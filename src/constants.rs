//! Constants

/// Master clock (MCLK) frequency of the common AD9833 modules, 25 MHz crystal
pub const REF_CLOCK_HZ: u32 = 25_000_000;

/// Width of the phase accumulator / frequency register
pub const TUNING_WORD_BITS: u8 = 28;

/// 2^28, full scale of the frequency register
pub const TUNING_WORD_SCALE: f64 = 268_435_456.0;

/// Valid bits of a tuning word
pub const TUNING_WORD_MASK: u32 = (1 << TUNING_WORD_BITS) - 1;

/// A 28 bit word is loaded as two 14 bit halves
pub const HALF_WORD_BITS: u8 = 14;

/// Valid bits of one half of a tuning word
pub const HALF_WORD_MASK: u16 = (1 << HALF_WORD_BITS) - 1;

/// Bits [D15:D14] = 01 address FREQ0
pub const FREQ0_MARKER: u8 = 0x40;

/// Bits [D15:D14] = 10 address FREQ1
pub const FREQ1_MARKER: u8 = 0x80;

/// Bits [D15:D14] of a frequency register write
pub const MARKER_MASK: u8 = 0xC0;

/// Highest useful output frequency, half of MCLK
pub const OUT_FREQ_MAX: u32 = REF_CLOCK_HZ / 2;

/// Control register value after construction:
/// B28 = 1 (28 bit loads in two consecutive writes), everything else 0,
/// i.e. sine output from FREQ0/PHASE0, not in reset, not sleeping.
pub const CONTROL_DEFAULT: u16 = 0x2000;

/// Control bits owned by the waveform selection: OPBITEN (D5), DIV2 (D3), MODE (D1)
pub const WAVEFORM_MASK: u16 = 0b0010_1010;

/// Bytes in one transfer: control word followed by two frequency halves
pub const FRAME_LEN: usize = 6;
