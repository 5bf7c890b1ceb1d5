//! The single alarm: its armed time, the LED and buzzer it drives, and the "alarm set"
//! notification shown after arming.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Instant};
use embedded_hal::digital::OutputPin;

use crate::buzzer::{Buzzer, ToneOutput};
use crate::clock_time::ClockTime;
use crate::shared_constants::ALARM_NOTIFICATION_DURATION;
use crate::{Error, Result};

/// Armed time and enabled flag. Disabled at power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmState {
    pub hour: u8,
    pub min: u8,
    pub enabled: bool,
}

impl AlarmState {
    /// True when the alarm is enabled and `clock_time` is exactly its hour:min:00.
    ///
    /// This is a level condition: it is re-evaluated every tick.
    #[must_use]
    pub const fn matches(&self, clock_time: &ClockTime) -> bool {
        self.enabled && clock_time.is_top_of_minute(self.hour, self.min)
    }
}

/// Timed on-screen "alarm set" notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimer {
    started_at: Option<Instant>,
    duration: Duration,
}

impl Default for NotificationTimer {
    fn default() -> Self {
        Self::new(ALARM_NOTIFICATION_DURATION)
    }
}

impl NotificationTimer {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            started_at: None,
            duration,
        }
    }

    pub const fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Clear the notice once strictly more than its duration has passed since `start`.
    ///
    /// Returns whether it is still active.
    pub fn expire(&mut self, now: Instant) -> bool {
        if let Some(started_at) = self.started_at {
            if now.saturating_duration_since(started_at) > self.duration {
                self.started_at = None;
            }
        }
        self.is_active()
    }
}

/// Owns the alarm state and drives the LED and buzzer.
///
/// Once triggered, the LED and buzzer stay on until [`disarm`](AlarmController::disarm); nothing
/// else turns them off.
pub struct AlarmController<'a, M: RawMutex, L: OutputPin, T: ToneOutput> {
    state: AlarmState,
    notification: NotificationTimer,
    led: L,
    buzzer: &'a Buzzer<M, T>,
    ringing: bool,
}

impl<'a, M: RawMutex, L: OutputPin, T: ToneOutput> AlarmController<'a, M, L, T> {
    #[must_use]
    pub fn new(led: L, buzzer: &'a Buzzer<M, T>, notification_duration: Duration) -> Self {
        Self {
            state: AlarmState::default(),
            notification: NotificationTimer::new(notification_duration),
            led,
            buzzer,
            ringing: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> AlarmState {
        self.state
    }

    #[must_use]
    pub const fn notification(&self) -> &NotificationTimer {
        &self.notification
    }

    pub const fn notification_mut(&mut self) -> &mut NotificationTimer {
        &mut self.notification
    }

    /// True from [`trigger`](Self::trigger) until [`disarm`](Self::disarm).
    #[must_use]
    pub const fn is_ringing(&self) -> bool {
        self.ringing
    }

    /// Arm the alarm at `hour:min` and show the notification from `now`.
    pub fn arm(&mut self, hour: u8, min: u8, now: Instant) {
        self.state = AlarmState {
            hour,
            min,
            enabled: true,
        };
        self.notification.start(now);
        #[cfg(feature = "defmt")]
        defmt::info!("Alarm set for {=u8:02}:{=u8:02}", hour, min);
    }

    /// Disable the alarm and force the buzzer and LED off. Safe to call when already disabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if the LED pin cannot be driven.
    pub fn disarm(&mut self) -> Result<()> {
        self.state.enabled = false;
        self.led.set_low().map_err(|_| Error::CannotSetOutputState)?;
        self.buzzer.silence();
        self.ringing = false;
        #[cfg(feature = "defmt")]
        defmt::info!("Alarm disabled");
        Ok(())
    }

    /// Turn on the LED and start the buzzer. Calling it again while ringing changes nothing
    /// visible or audible.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if the LED pin cannot be driven.
    pub fn trigger(&mut self, clock_time: &ClockTime) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::info!("ALARM! Current time: {=u8:02}:{=u8:02}", clock_time.hour, clock_time.min);
        #[cfg(not(feature = "defmt"))]
        let _ = clock_time;
        self.led.set_high().map_err(|_| Error::CannotSetOutputState)?;
        self.buzzer.sound();
        self.ringing = true;
        Ok(())
    }

    /// Trigger if `clock_time` matches the armed time. Returns whether it did.
    ///
    /// # Errors
    ///
    /// See [`trigger`](Self::trigger).
    pub fn check(&mut self, clock_time: &ClockTime) -> Result<bool> {
        if !self.state.matches(clock_time) {
            return Ok(false);
        }
        self.trigger(clock_time)?;
        Ok(true)
    }
}
