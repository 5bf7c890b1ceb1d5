//! Text layout for the OLED and the screen abstraction it is pushed to.
//!
//! Rendering is split in two: [`render`] composes a [`Frame`] of positioned text lines from the
//! clock state, then [`Frame::show`] clears, draws and flushes it on any [`TextScreen`].

use core::fmt::{self, Write as _};

use embassy_time::Instant;
use embedded_graphics::prelude::Point;
use heapless::{String, Vec};

use crate::Result;
use crate::alarm::{AlarmState, NotificationTimer};
use crate::clock_state::ClockState;
use crate::clock_time::ClockTime;

/// Longest line drawn: "Configuring: Minute".
pub const LINE_CAPACITY: usize = 20;
const MAX_LINES: usize = 3;

pub const TIME_POSITION: Point = Point::new(20, 10);
pub const DATE_POSITION: Point = Point::new(15, 30);
/// Shared by the configuration line and the alarm notification.
pub const OVERLAY_POSITION: Point = Point::new(10, 50);

/// Output device that can show lines of text.
pub trait TextScreen {
    /// Fill the whole frame buffer with one color (`true` = pixels on).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Display`](crate::Error::Display) if the device rejects the operation.
    fn fill(&mut self, on: bool) -> Result<()>;

    /// Draw `text` with its top-left corner at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Display`](crate::Error::Display) if the device rejects the operation.
    fn draw_text(&mut self, text: &str, position: Point) -> Result<()>;

    /// Send the frame buffer to the panel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Display`](crate::Error::Display) if the transfer fails.
    fn flush(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String<LINE_CAPACITY>,
    pub position: Point,
}

/// One screenful of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<TextLine, MAX_LINES>,
}

impl Frame {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    #[must_use]
    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    /// The text drawn at `position`, if any.
    #[must_use]
    pub fn text_at(&self, position: Point) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.position == position)
            .map(|line| line.text.as_str())
    }

    // Every line the renderer produces fits LINE_CAPACITY and there are never more than
    // MAX_LINES, so overflow only truncates.
    fn push(&mut self, position: Point, args: fmt::Arguments<'_>) {
        let mut text = String::new();
        let _ = text.write_fmt(args);
        let _ = self.lines.push(TextLine { text, position });
    }

    /// Clear the screen, draw every line and flush.
    ///
    /// # Errors
    ///
    /// Propagates the first screen error.
    pub fn show(&self, screen: &mut impl TextScreen) -> Result<()> {
        screen.fill(false)?;
        for line in &self.lines {
            screen.draw_text(&line.text, line.position)?;
        }
        screen.flush()
    }
}

/// Compose the screen for the current state.
///
/// Time and date are always shown. The overlay line shows the field being configured, or
/// the armed alarm while its notification is active; configuration wins when both apply.
/// The notification expires here, after the frame is composed.
pub fn render(
    clock_time: &ClockTime,
    clock_state: &ClockState,
    alarm: &AlarmState,
    notification: &mut NotificationTimer,
    now: Instant,
) -> Frame {
    let mut frame = Frame::new();
    frame.push(
        TIME_POSITION,
        format_args!(
            "{:02}:{:02}:{:02}",
            clock_time.hour, clock_time.min, clock_time.sec
        ),
    );
    frame.push(
        DATE_POSITION,
        format_args!(
            "{:02}/{:02}/{:04}",
            clock_time.day, clock_time.month, clock_time.year
        ),
    );

    if clock_state.mode.is_configuring() {
        frame.push(
            OVERLAY_POSITION,
            format_args!("Configuring: {}", clock_state.selected_field.label()),
        );
    } else if notification.is_active() {
        frame.push(
            OVERLAY_POSITION,
            format_args!("Alarm: {:02}:{:02}", alarm.hour, alarm.min),
        );
    }

    let _still_active = notification.expire(now);
    frame
}

/// 128x64 SSD1306 on RP2040 I2C1, drawn with the 6x10 font.
#[cfg(feature = "pico1")]
pub struct Ssd1306Screen {
    display: ssd1306::Ssd1306<
        ssd1306::prelude::I2CInterface<
            embassy_rp::i2c::I2c<'static, embassy_rp::peripherals::I2C1, embassy_rp::i2c::Blocking>,
        >,
        ssd1306::size::DisplaySize128x64,
        ssd1306::mode::BufferedGraphicsMode<ssd1306::size::DisplaySize128x64>,
    >,
}

#[cfg(feature = "pico1")]
impl Ssd1306Screen {
    /// Initialize the panel and blank it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Display`](crate::Error::Display) if the panel does not answer.
    pub fn new(
        i2c: embassy_rp::i2c::I2c<'static, embassy_rp::peripherals::I2C1, embassy_rp::i2c::Blocking>,
    ) -> Result<Self> {
        use ssd1306::prelude::{DisplayConfig as _, DisplayRotation};

        let interface = ssd1306::I2CDisplayInterface::new_custom_address(
            i2c,
            crate::shared_constants::DISPLAY_I2C_ADDRESS,
        );
        let mut display = ssd1306::Ssd1306::new(
            interface,
            ssd1306::size::DisplaySize128x64,
            DisplayRotation::Rotate0,
        )
        .into_buffered_graphics_mode();
        display.init().map_err(|_| crate::Error::Display)?;
        let mut screen = Self { display };
        screen.fill(false)?;
        screen.flush()?;
        Ok(screen)
    }
}

#[cfg(feature = "pico1")]
impl TextScreen for Ssd1306Screen {
    fn fill(&mut self, on: bool) -> Result<()> {
        use embedded_graphics::pixelcolor::BinaryColor;
        use embedded_graphics::prelude::DrawTarget as _;

        let color = if on { BinaryColor::On } else { BinaryColor::Off };
        self.display
            .clear(color)
            .map_err(|_| crate::Error::Display)
    }

    fn draw_text(&mut self, text: &str, position: Point) -> Result<()> {
        use embedded_graphics::Drawable as _;
        use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_6X10};
        use embedded_graphics::pixelcolor::BinaryColor;
        use embedded_graphics::text::{Baseline, Text};

        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::with_baseline(text, position, style, Baseline::Top)
            .draw(&mut self.display)
            .map(|_| ())
            .map_err(|_| crate::Error::Display)
    }

    fn flush(&mut self) -> Result<()> {
        self.display.flush().map_err(|_| crate::Error::Display)
    }
}
