//! Alarm clock for a Raspberry Pi Pico with an SSD1306 OLED, three buttons, a joystick,
//! an LED and a buzzer.
//!
//! The clock, alarm, configuration and rendering logic is hardware-free and builds on the host.
//! The `pico1` feature adds the RP2040 adapters and the embassy tasks the firmware spawns.
#![no_std]

pub mod alarm;
pub mod app;
pub mod button;
pub mod buzzer;
pub mod clock_state;
pub mod clock_time;
pub mod display;
mod error;
#[cfg(feature = "pico1")]
pub mod hardware;
pub mod joystick;
mod never;
mod shared_constants;

// Re-export commonly used items
pub use app::{App, ClockConfig, Pacing};
pub use clock_time::ClockTime;
pub use error::{Error, Result};
pub use never::Never;
pub use shared_constants::*;
