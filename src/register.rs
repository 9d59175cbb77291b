//! AD9833 control register

use crate::constants::*;


/// Bit operations on the 16bit control word
pub trait BitField {
    /// Number of bits in the bit field
    fn num_bits() -> u8;

    /// Offset from 0
    fn offset() -> u8;

    #[inline]
    fn mask() -> u16 {
        !(0xFFFFu16 << Self::num_bits())
    }
}

/// Generate BitField implementation
macro_rules! gen_bitfield_impl {
    ($n:ident, $nb:tt, $off:tt) => {
        impl BitField for $n {
            #[inline] fn num_bits() -> u8 { $nb }
            #[inline] fn offset() -> u8 { $off }
        }
    }
}

/// Single bit control flags, first variant is the cleared bit
macro_rules! gen_bitfield_flag {
    ($(#[$meta:meta])*, $n:ident, $off:tt, $clear:ident, $set:ident) => {
        $(#[$meta])*
        #[derive(Debug,Copy,Clone,PartialEq,Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum $n {
            $clear,
            $set,
        }

        gen_bitfield_impl!($n, 1, $off);

        impl From<u16> for $n {
            #[inline]
            fn from(x: u16) -> Self { if x & 1 == 0 { $n::$clear } else { $n::$set } }
        }
        impl From<$n> for u16 {
            #[inline]
            fn from(f: $n) -> u16 { f as u16 }
        }
    };
}


gen_bitfield_flag!(
    /// B28 (D13). When set, a complete 28 bit word is loaded into a
    /// frequency register with two consecutive writes, 14 LSBs first.
    /// When cleared, each write updates only the 14 bit half chosen by HLB.
    , B28, 13, Split, Full
);

gen_bitfield_flag!(
    /// HLB (D12) picks the half of a frequency register written when B28 = 0.
    /// Ignored when B28 = 1.
    , Hlb, 12, Lsb, Msb
);

gen_bitfield_flag!(
    /// FSELECT (D11) selects the frequency register feeding the phase accumulator.
    /// Also names the register a frequency write is addressed to.
    , FrequencySlot, 11, Freq0, Freq1
);

gen_bitfield_flag!(
    /// PSELECT (D10) selects the phase register added to the phase accumulator output.
    , PhaseSlot, 10, Phase0, Phase1
);

gen_bitfield_flag!(
    /// RESET (D8) holds the internal registers at zero and the output at
    /// midscale. Releasing it restarts the output.
    , Reset, 8, Running, Held
);

gen_bitfield_flag!(
    /// SLEEP1 (D7) stops the internal MCLK, the DAC output holds its value.
    , Sleep1, 7, Clocked, Stopped
);

gen_bitfield_flag!(
    /// SLEEP12 (D6) powers down the on-chip DAC.
    , Sleep12, 6, DacOn, DacOff
);

gen_bitfield_flag!(
    /// OPBITEN (D5) routes the DAC data MSB to VOUT instead of the DAC.
    , OpBitEn, 5, Dac, Msb
);

gen_bitfield_flag!(
    /// DIV2 (D3) with OPBITEN = 1: output the MSB (set) or MSB/2 (cleared).
    , Div2, 3, Half, Full
);

gen_bitfield_flag!(
    /// MODE (D1) with OPBITEN = 0: bypass the SIN ROM for a triangle output.
    , Mode, 1, Sin, Triangle
);


impl FrequencySlot {
    /// Address bits [D15:D14] of a frequency register write
    #[inline]
    pub fn marker(self) -> u8 {
        match self {
            FrequencySlot::Freq0 => FREQ0_MARKER,
            FrequencySlot::Freq1 => FREQ1_MARKER,
        }
    }
}


/// Output waveform, encoded in OPBITEN, DIV2 and MODE
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Waveform {
    Sine = 0b0000_0000,
    Triangle = 0b0000_0010,
    Square = 0b0010_1000,
}

impl Waveform {
    /// Control word bits for this waveform
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }
}


/// Control register.
///
/// Sent as two bytes, high byte first; D15:D14 are always 00.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlWord(pub u16);

impl Default for ControlWord {
    #[inline]
    fn default() -> Self { ControlWord(CONTROL_DEFAULT) }
}

impl ControlWord {
    /// Get control bitfield value
    #[inline]
    pub fn get<F>(self: &Self) -> F
    where F: BitField + From<u16>
    {
        F::from(
            (self.0 >> F::offset()) & F::mask()
        )
    }

    /// Update control bitfield
    #[inline]
    pub fn set<F>(mut self: Self, f: F) -> Self
    where F: BitField + Into<u16>
    {
        let fbits = (f.into() & F::mask()) << F::offset();
        let rbits = self.0 & (! ( F::mask() << F::offset() ));
        self.0 = rbits | fbits;
        self
    }

    /// Replace the waveform bits, everything else is kept
    #[inline]
    pub fn with_waveform(mut self: Self, w: Waveform) -> Self {
        self.0 = (self.0 & !WAVEFORM_MASK) | w.code();
        self
    }

    /// Waveform currently encoded, `None` for bit patterns no [`Waveform`] produces
    pub fn waveform(self: &Self) -> Option<Waveform> {
        match self.0 & WAVEFORM_MASK {
            0b0000_0000 => Some(Waveform::Sine),
            0b0000_0010 => Some(Waveform::Triangle),
            0b0010_1000 => Some(Waveform::Square),
            _ => None,
        }
    }

    /// Register value in device format
    #[inline]
    pub fn to_bytes(self: &Self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}
