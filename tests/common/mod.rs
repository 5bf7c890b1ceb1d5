//! Test doubles for the board peripherals.
#![allow(dead_code, reason = "Each test binary uses a different subset")]

use core::cell::Cell;
use core::convert::Infallible;
use std::rc::Rc;

use alarm_clock::buzzer::{Buzzer, ToneOutput};
use alarm_clock::display::TextScreen;
use alarm_clock::joystick::Joystick;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_time::Instant;
use embedded_graphics::prelude::Point;
use embedded_hal::digital::{ErrorType, OutputPin};

pub type TestBuzzer = Buzzer<NoopRawMutex, RecordingTone>;

/// Joystick centre reading.
pub const NEUTRAL: u16 = 2048;

#[derive(Debug, Default)]
pub struct RecordingTone {
    pub configures: Vec<(u32, u16)>,
    pub levels: Vec<u16>,
}

impl ToneOutput for RecordingTone {
    fn configure(&mut self, frequency_hz: u32, resolution: u16) {
        self.configures.push((frequency_hz, resolution));
    }

    fn set_level(&mut self, level: u16) {
        self.levels.push(level);
    }
}

impl RecordingTone {
    pub fn last_level(&self) -> Option<u16> {
        self.levels.last().copied()
    }
}

/// LED whose state can be read from the test while the app owns the pin.
#[derive(Clone, Default)]
pub struct SharedLed(pub Rc<Cell<bool>>);

impl SharedLed {
    pub fn is_on(&self) -> bool {
        self.0.get()
    }
}

impl ErrorType for SharedLed {
    type Error = Infallible;
}

impl OutputPin for SharedLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set(true);
        Ok(())
    }
}

/// Joystick whose position the test moves while the app owns it.
#[derive(Clone)]
pub struct SharedJoystick(pub Rc<Cell<u16>>);

impl Default for SharedJoystick {
    fn default() -> Self {
        Self(Rc::new(Cell::new(NEUTRAL)))
    }
}

impl SharedJoystick {
    pub fn set(&self, raw: u16) {
        self.0.set(raw);
    }
}

impl Joystick for SharedJoystick {
    fn read_raw(&mut self) -> alarm_clock::Result<u16> {
        Ok(self.0.get())
    }
}

#[derive(Debug, Default)]
pub struct RecordingScreen {
    pub fills: usize,
    pub flushes: usize,
    /// Lines drawn since the last fill.
    pub drawn: Vec<(String, Point)>,
}

impl RecordingScreen {
    pub fn text_at(&self, position: Point) -> Option<&str> {
        self.drawn
            .iter()
            .find(|(_, at)| *at == position)
            .map(|(text, _)| text.as_str())
    }
}

impl TextScreen for RecordingScreen {
    fn fill(&mut self, on: bool) -> alarm_clock::Result<()> {
        assert!(!on, "the clock only ever clears to black");
        self.fills += 1;
        self.drawn.clear();
        Ok(())
    }

    fn draw_text(&mut self, text: &str, position: Point) -> alarm_clock::Result<()> {
        self.drawn.push((text.to_string(), position));
        Ok(())
    }

    fn flush(&mut self) -> alarm_clock::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

pub fn at_ms(millis: u64) -> Instant {
    Instant::from_millis(millis)
}
