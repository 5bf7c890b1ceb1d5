//! Joystick axis thresholding.

use crate::Result;
use crate::clock_time::Direction;
use crate::shared_constants::{JOYSTICK_HIGH_THRESHOLD, JOYSTICK_LOW_THRESHOLD};

/// Source of raw joystick samples (0..=4095 on the RP2040 ADC).
pub trait Joystick {
    /// Read one raw sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Joystick`](crate::Error::Joystick) if the converter reports a failure.
    fn read_raw(&mut self) -> Result<u16>;
}

/// Low/high thresholds splitting the axis into down, neutral and up zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisThresholds {
    pub low: u16,
    pub high: u16,
}

impl Default for AxisThresholds {
    fn default() -> Self {
        Self {
            low: JOYSTICK_LOW_THRESHOLD,
            high: JOYSTICK_HIGH_THRESHOLD,
        }
    }
}

impl AxisThresholds {
    /// The motion a raw sample asks for, if any. Both thresholds are exclusive.
    #[must_use]
    pub const fn direction(&self, raw: u16) -> Option<Direction> {
        if raw < self.low {
            Some(Direction::Down)
        } else if raw > self.high {
            Some(Direction::Up)
        } else {
            None
        }
    }
}

/// Joystick Y axis on an RP2040 ADC channel.
#[cfg(feature = "pico1")]
pub struct AdcJoystick {
    adc: embassy_rp::adc::Adc<'static, embassy_rp::adc::Blocking>,
    channel: embassy_rp::adc::Channel<'static>,
}

#[cfg(feature = "pico1")]
impl AdcJoystick {
    #[must_use]
    pub const fn new(
        adc: embassy_rp::adc::Adc<'static, embassy_rp::adc::Blocking>,
        channel: embassy_rp::adc::Channel<'static>,
    ) -> Self {
        Self { adc, channel }
    }
}

#[cfg(feature = "pico1")]
impl Joystick for AdcJoystick {
    fn read_raw(&mut self) -> Result<u16> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_| crate::Error::Joystick)
    }
}
