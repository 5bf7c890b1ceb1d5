//! Alarm buzzer: a PWM tone gated on and off by a fixed-period oscillator.
//!
//! The main loop starts and stops the buzzer ([`Buzzer::sound`], [`Buzzer::silence`]); a
//! separate periodic task calls [`Buzzer::on_period`] every [`BUZZER_PERIOD`] to chirp it. The
//! chirp keeps its rhythm even when the main loop is busy because the two never wait on each
//! other: they only meet inside a short blocking-mutex section around the tone generator.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::shared_constants::{BUZZER_FREQUENCY_HZ, BUZZER_HALF_DUTY, BUZZER_RESOLUTION};
#[cfg(feature = "pico1")]
use crate::shared_constants::BUZZER_PERIOD;

/// A PWM tone generator.
pub trait ToneOutput {
    /// Set the carrier frequency and the counter resolution (duty values run 0..=`resolution`).
    fn configure(&mut self, frequency_hz: u32, resolution: u16);

    /// Set the duty value; 0 is silent.
    fn set_level(&mut self, level: u16);
}

struct Oscillator<T> {
    tone: T,
    active: bool,
    phase: bool,
}

/// The buzzer oscillator and the tone generator it drives.
pub struct Buzzer<M: RawMutex, T: ToneOutput> {
    inner: Mutex<M, RefCell<Oscillator<T>>>,
}

impl<M: RawMutex, T: ToneOutput> Buzzer<M, T> {
    #[must_use]
    pub const fn new(tone: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Oscillator {
                tone,
                active: false,
                phase: false,
            })),
        }
    }

    /// Configure the alarm tone, start it at half duty and let the oscillator chirp it.
    pub fn sound(&self) {
        self.inner.lock(|cell| {
            let mut oscillator = cell.borrow_mut();
            oscillator
                .tone
                .configure(BUZZER_FREQUENCY_HZ, BUZZER_RESOLUTION);
            oscillator.tone.set_level(BUZZER_HALF_DUTY);
            oscillator.active = true;
        });
    }

    /// Force the output off and stop the oscillator.
    pub fn silence(&self) {
        self.inner.lock(|cell| {
            let mut oscillator = cell.borrow_mut();
            oscillator.tone.set_level(0);
            oscillator.active = false;
        });
    }

    /// One oscillator period: flip the phase while active, hold the output off otherwise.
    pub fn on_period(&self) {
        self.inner.lock(|cell| {
            let mut oscillator = cell.borrow_mut();
            if oscillator.active {
                oscillator.phase = !oscillator.phase;
                let level = if oscillator.phase { BUZZER_HALF_DUTY } else { 0 };
                oscillator.tone.set_level(level);
            } else {
                oscillator.tone.set_level(0);
            }
        });
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.lock(|cell| cell.borrow().active)
    }

    /// Run `f` against the tone generator, e.g. to inspect a test double.
    pub fn with_tone<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut().tone))
    }
}

/// Buzzer on one output of an RP2040 PWM slice (channel B, as on GPIO21).
#[cfg(feature = "pico1")]
pub struct PwmTone {
    pwm: embassy_rp::pwm::Pwm<'static>,
    // Kept so duty updates do not reset the divider.
    cfg: embassy_rp::pwm::Config,
}

#[cfg(feature = "pico1")]
impl PwmTone {
    #[must_use]
    pub fn new(pwm: embassy_rp::pwm::Pwm<'static>) -> Self {
        let mut cfg = embassy_rp::pwm::Config::default();
        cfg.compare_b = 0;
        Self { pwm, cfg }
    }
}

#[cfg(feature = "pico1")]
impl ToneOutput for PwmTone {
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        clippy::cast_possible_truncation,
        reason = "Divider is clamped to the 8-bit integer range"
    )]
    fn configure(&mut self, frequency_hz: u32, resolution: u16) {
        let clk = embassy_rp::clocks::clk_sys_freq();
        let counts_per_second = frequency_hz.saturating_mul(u32::from(resolution)).max(1);
        let div_int = (clk / counts_per_second).clamp(1, 255) as u8;

        self.cfg.top = resolution.saturating_sub(1);
        self.cfg.divider = div_int.into();
        self.cfg.phase_correct = false;
        self.cfg.enable = true;
        self.pwm.set_config(&self.cfg);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "buzzer clk={}Hz div={} top={} -> {}Hz",
            clk,
            div_int,
            self.cfg.top,
            clk / (u32::from(div_int) * u32::from(resolution))
        );
    }

    fn set_level(&mut self, level: u16) {
        self.cfg.compare_b = level;
        self.pwm.set_config(&self.cfg);
    }
}

/// Drive the buzzer oscillator on its own fixed period.
#[cfg(feature = "pico1")]
#[embassy_executor::task]
pub async fn buzzer_task(
    buzzer: &'static Buzzer<
        embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex,
        PwmTone,
    >,
) -> ! {
    #[cfg(feature = "defmt")]
    defmt::info!("Buzzer oscillator started");
    let mut ticker = embassy_time::Ticker::every(BUZZER_PERIOD);
    loop {
        buzzer.on_period();
        ticker.next().await;
    }
}
