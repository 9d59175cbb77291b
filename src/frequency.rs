//! Frequency calculations

use crate::{constants::*, register::FrequencySlot};


/// Frequency register value (28 bit phase accumulator increment)
///
/// f OUT = f MCLK × FREQREG / 2^28
#[derive(Debug,Copy,Clone,PartialEq,Eq,Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TuningWord(pub u32);

impl TuningWord {

    /// FREQREG = f OUT × 2^28 / f MCLK, rounded down.
    ///
    /// Inputs are not validated. Negative and NaN frequencies give 0,
    /// frequencies past the 28 bit capacity keep only the low 28 bits.
    /// Useful output stops at [`OUT_FREQ_MAX`] for a 25 MHz MCLK.
    pub fn from_hz(f_out_hz: f64, ref_clock_hz: u32) -> Self {
        let w = (TUNING_WORD_SCALE * f_out_hz / ref_clock_hz as f64) as u32;
        TuningWord(w & TUNING_WORD_MASK)
    }

    /// Low 14 bits, loaded first
    #[inline]
    pub fn lsb(self: &Self) -> u16 {
        (self.0 & HALF_WORD_MASK as u32) as u16
    }

    /// High 14 bits, loaded second
    #[inline]
    pub fn msb(self: &Self) -> u16 {
        ((self.0 >> HALF_WORD_BITS) & HALF_WORD_MASK as u32) as u16
    }

    /// Two 16 bit frequency register writes (B28 = 1), LSBs first,
    /// each tagged with the register address in D15:D14.
    pub fn to_payload(self: &Self, slot: FrequencySlot) -> [u8; 4] {
        let marker = slot.marker();
        let [lo_hi, lo_lo] = self.lsb().to_be_bytes();
        let [hi_hi, hi_lo] = self.msb().to_be_bytes();
        [
            lo_hi | marker,
            lo_lo,
            hi_hi | marker,
            hi_lo,
        ]
    }

    /// Recover the word from a payload, address bits are dropped.
    pub fn from_payload(p: &[u8; 4]) -> Self {
        let lsb = u16::from_be_bytes([p[0] & !MARKER_MASK, p[1]]) as u32;
        let msb = u16::from_be_bytes([p[2] & !MARKER_MASK, p[3]]) as u32;
        TuningWord((msb << HALF_WORD_BITS) | lsb)
    }

    /// Output frequency this word produces
    pub fn f_out(self: &Self, ref_clock_hz: u32) -> f64 {
        self.0 as f64 * ref_clock_hz as f64 / TUNING_WORD_SCALE
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const F_REF: u32 = REF_CLOCK_HZ;

    fn expected(f: f64) -> u32 {
        (268_435_456.0 * f / F_REF as f64) as u32
    }

    #[test]
    fn zero_hz() {
        let w = TuningWord::from_hz(0.0, F_REF);
        assert_eq!(w, TuningWord(0));
        assert_eq!(w.to_payload(FrequencySlot::Freq0), [0x40, 0x00, 0x40, 0x00]);
    }

    #[test]
    fn half_reference_is_half_scale() {
        let w = TuningWord::from_hz(OUT_FREQ_MAX as f64, F_REF);
        assert_eq!(w.0, 1 << 27);
        assert_eq!(w.lsb(), 0);
        assert_eq!(w.msb(), 1 << 13);
        assert_eq!(w.to_payload(FrequencySlot::Freq0), [0x40, 0x00, 0x60, 0x00]);
    }

    #[test]
    fn one_khz() {
        // 1000 * 2^28 / 25e6 = 10737.41824
        let w = TuningWord::from_hz(1_000.0, F_REF);
        assert_eq!(w.0, 10_737);
        assert_eq!(w.to_payload(FrequencySlot::Freq0), [0x69, 0xF1, 0x40, 0x00]);
        assert_eq!(w.to_payload(FrequencySlot::Freq1), [0xA9, 0xF1, 0x80, 0x00]);
    }

    #[test]
    fn payload_round_trip() {
        let mut f = 0.0;
        while f <= F_REF as f64 / 2.0 {
            let w = TuningWord::from_hz(f, F_REF);
            assert_eq!(w.0, expected(f));
            for slot in [FrequencySlot::Freq0, FrequencySlot::Freq1].iter() {
                assert_eq!(TuningWord::from_payload(&w.to_payload(*slot)), w);
            }
            f += 123_456.789;
        }
    }

    #[test]
    fn payload_markers_only_in_top_bits() {
        let w = TuningWord(TUNING_WORD_MASK);
        let p = w.to_payload(FrequencySlot::Freq0);
        assert_eq!(p, [0x7F, 0xFF, 0x7F, 0xFF]);
        let p = w.to_payload(FrequencySlot::Freq1);
        assert_eq!(p, [0xBF, 0xFF, 0xBF, 0xFF]);
    }

    #[test]
    fn out_of_range_truncates() {
        assert_eq!(TuningWord::from_hz(-5.0, F_REF), TuningWord(0));
        assert_eq!(TuningWord::from_hz(f64::NAN, F_REF), TuningWord(0));
        // exactly f MCLK wraps to 0
        assert_eq!(TuningWord::from_hz(F_REF as f64, F_REF), TuningWord(0));
        let w = TuningWord::from_hz(1e12, F_REF);
        assert!(w.0 <= TUNING_WORD_MASK);
    }

    #[test]
    fn f_out_inverse() {
        let w = TuningWord::from_hz(440.0, F_REF);
        let f = w.f_out(F_REF);
        assert!(f <= 440.0 && 440.0 - f < F_REF as f64 / TUNING_WORD_SCALE);
    }

    #[test]
    fn other_reference_clock() {
        let w = TuningWord::from_hz(1_000_000.0, 16_000_000);
        assert_eq!(w.0, 1 << 24);
    }
}
