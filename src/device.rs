//! Device, FSYNC framing over a write-only SPI bus

use embedded_hal:: {
    digital::v2::OutputPin,
    blocking::spi::Write,
};


use crate::constants::*;
use crate::errors::*;
use crate::frequency::*;
use crate::register::*;

/// AD9833 device
pub struct Ad9833<CS, SPI> {
    spi: SPI,
    pin_cs: CS,
    ref_clock_hz: u32,
    ctrl: ControlWord,
    slot: FrequencySlot,
    words: [TuningWord; 2],
}


impl<CS, SPI,> Ad9833<CS, SPI,>
where CS: OutputPin,
      SPI: Write<u8>,
{
    /// Creates the device for the usual 25 MHz MCLK, nothing is sent yet.
    ///
    /// `spi` - SPI device (`MOSI` => `SDATA`, `CLK` => `SCLK`, `CPOL` = 1, `CPHA` = 0)
    /// `pin_cs` - `FSYNC` pin, active low
    ///
    pub fn new(
        spi: SPI,
        pin_cs: CS,
    ) -> Self {
        Self::new_with_reference(spi, pin_cs, REF_CLOCK_HZ)
    }

    /// Same as [`new`](Ad9833::new) for a board with a different MCLK.
    pub fn new_with_reference(
        spi: SPI,
        pin_cs: CS,
        ref_clock_hz: u32,
    ) -> Self {
        Ad9833 {
            spi,
            pin_cs,
            ref_clock_hz,
            ctrl: ControlWord::default(),
            slot: FrequencySlot::Freq0,
            words: [TuningWord::default(); 2],
        }
    }

    /// Parks `FSYNC` high, ready for the first transfer.
    pub fn init(self: &mut Self) -> Result<(), Error> {
        self.deselect()
    }

    /// Takes the chip out of reset, the output starts.
    pub fn enable_output(self: &mut Self) -> Result<(), Error> {
        self.ctrl = self.ctrl.set(Reset::Running);
        self.transmit()
    }

    /// Holds the chip in reset, the output sits at midscale.
    pub fn disable_output(self: &mut Self) -> Result<(), Error> {
        self.ctrl = self.ctrl.set(Reset::Held);
        self.transmit()
    }

    /// Loads the frequency register chosen by [`set_frequency_slot`](Ad9833::set_frequency_slot).
    ///
    /// Out of range values are truncated, see [`TuningWord::from_hz`].
    pub fn set_frequency(self: &mut Self, f_out_hz: f64) -> Result<(), Error> {
        self.words[self.slot as usize] = TuningWord::from_hz(f_out_hz, self.ref_clock_hz);
        self.transmit()
    }

    /// Switches the output waveform, other control bits are kept.
    pub fn set_waveform(self: &mut Self, w: Waveform) -> Result<(), Error> {
        self.ctrl = self.ctrl.with_waveform(w);
        self.transmit()
    }

    /// Frequency register addressed by the following writes.
    /// Takes effect with the next transfer, which reloads that register
    /// with the value last set for it.
    pub fn set_frequency_slot(self: &mut Self, slot: FrequencySlot) {
        self.slot = slot;
    }

    /// Frequency register driving the phase accumulator (FSELECT).
    pub fn select_frequency_register(self: &mut Self, slot: FrequencySlot) -> Result<(), Error> {
        self.ctrl = self.ctrl.set(slot);
        self.transmit()
    }

    /// Writes the control word and the frequency register out, `FSYNC` low
    /// for the whole frame. Blocking call.
    ///
    /// `FSYNC` goes back high even when the SPI write fails.
    pub fn transmit(self: &mut Self) -> Result<(), Error> {
        let data = self.frame();

        #[cfg(feature = "defmt")]
        defmt::trace!("ad9833 frame {:x}", data);

        self.select()?;
        let res = self.spi.write(&data).map_err(|_| Error::Spi);
        self.deselect()?;
        res
    }

    /// Bytes sent by [`transmit`](Ad9833::transmit)
    pub fn frame(self: &Self) -> [u8; FRAME_LEN] {
        let [c0, c1] = self.ctrl.to_bytes();
        let [f0, f1, f2, f3] = self.tuning_word().to_payload(self.slot);
        [c0, c1, f0, f1, f2, f3]
    }

    /// Current control register
    #[inline]
    pub fn control(self: &Self) -> ControlWord {
        self.ctrl
    }

    /// Value of the addressed frequency register
    #[inline]
    pub fn tuning_word(self: &Self) -> TuningWord {
        self.tuning_word_of(self.slot)
    }

    /// Value last set for a frequency register
    #[inline]
    pub fn tuning_word_of(self: &Self, slot: FrequencySlot) -> TuningWord {
        self.words[slot as usize]
    }

    /// Frequency register addressed by frequency writes
    #[inline]
    pub fn frequency_slot(self: &Self) -> FrequencySlot {
        self.slot
    }

    /// Actual output frequency, Hz, from the register selected by FSELECT
    pub fn frequency_hz(self: &Self) -> f64 {
        let playing: FrequencySlot = self.ctrl.get();
        self.tuning_word_of(playing).f_out(self.ref_clock_hz)
    }

    /// MCLK frequency the device was created with, Hz
    #[inline]
    pub fn reference_hz(self: &Self) -> u32 {
        self.ref_clock_hz
    }

    /// True unless the chip is held in reset
    #[inline]
    pub fn output_enabled(self: &Self) -> bool {
        self.ctrl.get::<Reset>() == Reset::Running
    }

    /// Waveform in the control register
    #[inline]
    pub fn waveform(self: &Self) -> Option<Waveform> {
        self.ctrl.waveform()
    }

    /// Gives back the bus and the pin
    pub fn release(self: Self) -> (SPI, CS) {
        (self.spi, self.pin_cs)
    }

    #[inline(always)]
    fn select(self: &mut Self) -> Result<(), Error> {
        self.pin_cs.set_low().map_err(|_| Error::Pin)
    }

    #[inline(always)]
    fn deselect(self: &mut Self) -> Result<(), Error> {
        self.pin_cs.set_high().map_err(|_| Error::Pin)
    }
}
