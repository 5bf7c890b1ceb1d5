//! The application state threaded through the main loop.
//!
//! [`App::step`] is one loop iteration: it consumes button presses, edits the clock or the
//! alarm, renders, and advances time when not configuring. It never waits; it returns a
//! [`Pacing`] telling the caller how long to wait before the next iteration, so the same logic
//! runs under the embassy executor on the board and synchronously in host tests.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Instant};
use embedded_hal::digital::OutputPin;

use crate::Result;
use crate::alarm::AlarmController;
use crate::button::{ButtonFlags, ButtonId};
use crate::buzzer::{Buzzer, ToneOutput};
use crate::clock_state::{ClockMode, ClockState};
use crate::clock_time::ClockTime;
use crate::display::{Frame, TextScreen, render};
use crate::joystick::{AxisThresholds, Joystick};
use crate::shared_constants::{ALARM_NOTIFICATION_DURATION, JOYSTICK_SETTLE_DELAY};

/// What the loop should wait for before the next [`App::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pacing {
    /// Time advanced: wait for the next one-second tick.
    Tick,
    /// Time advanced for the first time after leaving configuration: restart the tick
    /// source before waiting so the time spent configuring is not replayed.
    RestartTick,
    /// A joystick motion was applied: hold off for this long so one push is one step.
    Settle(Duration),
    /// Configuring with nothing applied: poll again soon.
    Poll,
}

/// Tunable behaviour, defaulting to the board's constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    pub start: ClockTime,
    pub notification_duration: Duration,
    pub joystick: AxisThresholds,
    pub settle_delay: Duration,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            start: ClockTime::default(),
            notification_duration: ALARM_NOTIFICATION_DURATION,
            joystick: AxisThresholds::default(),
            settle_delay: JOYSTICK_SETTLE_DELAY,
        }
    }
}

/// Everything the main loop owns.
pub struct App<'a, S, J, L, M, T>
where
    S: TextScreen,
    J: Joystick,
    L: OutputPin,
    M: RawMutex,
    T: ToneOutput,
{
    clock_time: ClockTime,
    clock_state: ClockState,
    alarm: AlarmController<'a, M, L, T>,
    buttons: &'a ButtonFlags,
    screen: S,
    joystick: J,
    config: ClockConfig,
    last_frame: Frame,
}

impl<'a, S, J, L, M, T> App<'a, S, J, L, M, T>
where
    S: TextScreen,
    J: Joystick,
    L: OutputPin,
    M: RawMutex,
    T: ToneOutput,
{
    pub fn new(
        config: ClockConfig,
        buttons: &'a ButtonFlags,
        screen: S,
        joystick: J,
        led: L,
        buzzer: &'a Buzzer<M, T>,
    ) -> Self {
        Self {
            clock_time: config.start,
            clock_state: ClockState::default(),
            alarm: AlarmController::new(led, buzzer, config.notification_duration),
            buttons,
            screen,
            joystick,
            config,
            last_frame: Frame::new(),
        }
    }

    #[must_use]
    pub const fn clock_time(&self) -> &ClockTime {
        &self.clock_time
    }

    #[must_use]
    pub const fn clock_state(&self) -> &ClockState {
        &self.clock_state
    }

    #[must_use]
    pub const fn alarm(&self) -> &AlarmController<'a, M, L, T> {
        &self.alarm
    }

    /// The frame pushed to the screen by the last step.
    #[must_use]
    pub const fn last_frame(&self) -> &Frame {
        &self.last_frame
    }

    #[must_use]
    pub const fn screen(&self) -> &S {
        &self.screen
    }

    /// Run one loop iteration at `now`.
    ///
    /// # Errors
    ///
    /// Propagates LED, joystick and screen failures.
    pub fn step(&mut self, now: Instant) -> Result<Pacing> {
        let mut left_configuration = false;
        if self.buttons.take(ButtonId::Select) {
            left_configuration = self.clock_state.toggle_mode() == ClockMode::Normal;
        }

        let mut settle = false;
        if self.clock_state.mode.is_configuring() {
            if self.buttons.take(ButtonId::A) {
                self.alarm
                    .arm(self.clock_time.hour, self.clock_time.min, now);
            }
            if self.buttons.take(ButtonId::B) {
                let _field = self.clock_state.next_field();
            }
            let raw = self.joystick.read_raw()?;
            if let Some(direction) = self.config.joystick.direction(raw) {
                self.clock_time
                    .adjust(self.clock_state.selected_field, direction);
                settle = true;
            }
        } else if self.buttons.take(ButtonId::A) {
            self.alarm.disarm()?;
        }

        let alarm_state = self.alarm.state();
        self.last_frame = render(
            &self.clock_time,
            &self.clock_state,
            &alarm_state,
            self.alarm.notification_mut(),
            now,
        );
        self.last_frame.show(&mut self.screen)?;

        if self.clock_state.mode.is_configuring() {
            return Ok(if settle {
                Pacing::Settle(self.config.settle_delay)
            } else {
                Pacing::Poll
            });
        }

        self.clock_time.advance_one_second();
        let _triggered = self.alarm.check(&self.clock_time)?;
        Ok(if left_configuration {
            Pacing::RestartTick
        } else {
            Pacing::Tick
        })
    }
}
