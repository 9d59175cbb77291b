#![deny(unsafe_code)]
#![no_main]
#![no_std]

extern crate panic_halt; // panic handler

use cortex_m;
use cortex_m_rt::entry;
use stm32f4xx_hal as hal;

use cortex_m_semihosting::hprintln;

use crate::hal::{
    prelude::*,
    stm32,
    spi::Spi,
};

use embedded_hal::spi::MODE_2;

use ad9833::{ Ad9833, Waveform };


#[entry]
fn main() -> ! {
    let dp = stm32::Peripherals::take().unwrap();
    let cp = cortex_m::peripheral::Peripherals::take().unwrap();

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(8.mhz()).sysclk(168.mhz()).pclk1(42.mhz()).pclk2(84.mhz()).freeze();

    let gpioa = dp.GPIOA.split();
    let mut led1 = gpioa.pa6.into_push_pull_output();

    let mut delay = hal::delay::Delay::new(cp.SYST, clocks);

    let gpiob = dp.GPIOB.split();
    let pin_fsync = gpiob.pb12.into_push_pull_output();

    let sck = gpiob.pb13.into_alternate_af5();
    let mosi = gpiob.pb15.into_alternate_af5();

    // AD9833 samples SDATA on the falling edge of SCLK, idle high
    let spi = Spi::spi2(
        dp.SPI2,
        (sck, hal::spi::NoMiso , mosi),
        MODE_2,
        stm32f4xx_hal::time::KiloHertz(1000).into(),
        clocks,
    );

    let mut sg = Ad9833::new(spi, pin_fsync);
    sg.init().unwrap();
    sg.disable_output().unwrap();
    sg.set_waveform(Waveform::Sine).unwrap();
    sg.set_frequency(1_000.0).unwrap();
    sg.enable_output().unwrap();

    let waveforms = [Waveform::Sine, Waveform::Triangle, Waveform::Square];
    let mut f = 1_000.0;
    let mut i = 0;

    loop {
        sg.set_frequency(f).unwrap();
        sg.set_waveform(waveforms[i % waveforms.len()]).unwrap();
        hprintln!("{:?} {:#010x} => f_out {}", sg.waveform(), sg.tuning_word().0, sg.frequency_hz()).unwrap();

        f = if f < 1_000_000.0 { f * 10.0 } else { 1_000.0 };
        i += 1;

        led1.set_high().unwrap();
        delay.delay_ms(1000_u32);
        led1.set_low().unwrap();
        delay.delay_ms(1000_u32);
    }
}
