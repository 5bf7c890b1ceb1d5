//! Debounced button presses, handed from edge watchers to the main loop as one-shot flags.
//!
//! Each button has a pending flag and the timestamp of its last accepted press. An edge
//! watcher calls [`ButtonFlags::on_falling_edge`]; the main loop calls
//! [`ButtonFlags::take`], which clears the flag as it reads it. Nothing else is shared, so the
//! watchers never touch clock or alarm state.

use embassy_time::{Duration, Instant};
use portable_atomic::{AtomicBool, AtomicU64, Ordering};

use crate::shared_constants::BUTTON_DEBOUNCE_DELAY;

/// The three physical buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Arms the alarm in configuration mode, disables it otherwise.
    A,
    /// Moves the configuration cursor to the next field.
    B,
    /// Enters and leaves configuration mode.
    Select,
}

struct ButtonSlot {
    pending: AtomicBool,
    // Instant ticks of the last accepted press.
    last_accepted: AtomicU64,
}

impl ButtonSlot {
    const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            last_accepted: AtomicU64::new(0),
        }
    }
}

/// One-shot press flags for all buttons, safe to share between edge watchers and the main loop.
pub struct ButtonFlags {
    a: ButtonSlot,
    b: ButtonSlot,
    select: ButtonSlot,
    debounce: Duration,
}

impl Default for ButtonFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonFlags {
    /// Flags with the standard debounce window, usable in a `static`.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_debounce(BUTTON_DEBOUNCE_DELAY)
    }

    #[must_use]
    pub const fn with_debounce(debounce: Duration) -> Self {
        Self {
            a: ButtonSlot::new(),
            b: ButtonSlot::new(),
            select: ButtonSlot::new(),
            debounce,
        }
    }

    const fn slot(&self, button: ButtonId) -> &ButtonSlot {
        match button {
            ButtonId::A => &self.a,
            ButtonId::B => &self.b,
            ButtonId::Select => &self.select,
        }
    }

    /// Record a falling edge seen at `now`.
    ///
    /// The press is accepted only if strictly more than the debounce window has passed since
    /// the last accepted press of the same button. Returns whether it was accepted.
    pub fn on_falling_edge(&self, button: ButtonId, now: Instant) -> bool {
        let slot = self.slot(button);
        let last = Instant::from_ticks(slot.last_accepted.load(Ordering::Relaxed));
        if now.saturating_duration_since(last) <= self.debounce {
            return false;
        }
        slot.last_accepted.store(now.as_ticks(), Ordering::Relaxed);
        slot.pending.store(true, Ordering::Release);
        true
    }

    /// Consume a pending press. Returns `true` at most once per accepted press.
    pub fn take(&self, button: ButtonId) -> bool {
        self.slot(button).pending.swap(false, Ordering::Acquire)
    }

    /// Look at a pending press without consuming it.
    #[must_use]
    pub fn is_pending(&self, button: ButtonId) -> bool {
        self.slot(button).pending.load(Ordering::Acquire)
    }
}

/// Watch one button pin and feed its falling edges into `flags`.
///
/// Buttons are wired active-low with pull-ups, so a press is a falling edge.
#[cfg(feature = "pico1")]
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(
    mut input: embassy_rp::gpio::Input<'static>,
    button: ButtonId,
    flags: &'static ButtonFlags,
) -> ! {
    #[cfg(feature = "defmt")]
    defmt::info!("Button {:?} watcher started", button);
    loop {
        input.wait_for_falling_edge().await;
        let _accepted = flags.on_falling_edge(button, Instant::now());
    }
}
