//! Software wall-clock time for the alarm clock.
//!
//! [`ClockTime`] is a plain date/time record advanced one second per tick by the main loop and
//! edited field by field in configuration mode. It knows nothing about month lengths or leap
//! years: the day runs 1 to 31 in every month.
//!
//! # Example
//!
//! ```
//! # use alarm_clock::clock_time::{ClockTime, Direction, Field};
//! let mut clock_time = ClockTime::new(2025, 1, 1, 23, 59, 59);
//! clock_time.advance_one_second();
//! assert_eq!((clock_time.day, clock_time.hour, clock_time.min, clock_time.sec), (2, 0, 0, 0));
//!
//! clock_time.adjust(Field::Hour, Direction::Down);
//! assert_eq!(clock_time.hour, 23);
//! ```

/// Current date and time-of-day.
///
/// Fields are public: the renderer reads them and the alarm compares against them. Use
/// [`advance_one_second()`](ClockTime::advance_one_second) and
/// [`adjust()`](ClockTime::adjust) to change them so the wrap rules hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    pub year: u16,
    /// 1..=12
    pub month: u8,
    /// 1..=31, regardless of month
    pub day: u8,
    /// 0..=23
    pub hour: u8,
    /// 0..=59
    pub min: u8,
    /// 0..=59
    pub sec: u8,
}

/// The date and time the clock shows at power-up unless overridden at build time.
pub const FACTORY_START: ClockTime = ClockTime::new(2025, 1, 1, 12, 0, 0);

const DAYS_PER_MONTH: u8 = 31;
const MONTHS_PER_YEAR: u8 = 12;
const HOURS_PER_DAY: u8 = 24;
const MINUTES_PER_HOUR: u8 = 60;
const SECONDS_PER_MINUTE: u8 = 60;

impl Default for ClockTime {
    fn default() -> Self {
        FACTORY_START
    }
}

impl ClockTime {
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, min: u8, sec: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            min,
            sec,
        }
    }

    /// The power-up time: the build-time `CLOCK_START_DATE` / `CLOCK_START_TIME` if they parse,
    /// otherwise [`FACTORY_START`].
    #[must_use]
    pub fn power_up() -> Self {
        Self::parse_start(env!("CLOCK_START_DATE"), env!("CLOCK_START_TIME")).unwrap_or_else(|| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Invalid CLOCK_START_DATE/CLOCK_START_TIME, using factory default");
            FACTORY_START
        })
    }

    /// Parse a `YYYY-MM-DD` date and an `HH:MM:SS` time.
    ///
    /// Returns `None` when either part is malformed or a field is outside the ranges
    /// [`ClockTime`] keeps.
    #[must_use]
    pub fn parse_start(date: &str, time: &str) -> Option<Self> {
        let mut date_parts = date.trim().split('-');
        let year = date_parts.next()?.parse::<u16>().ok()?;
        let month = date_parts.next()?.parse::<u8>().ok()?;
        let day = date_parts.next()?.parse::<u8>().ok()?;
        if date_parts.next().is_some() {
            return None;
        }

        let mut time_parts = time.trim().split(':');
        let hour = time_parts.next()?.parse::<u8>().ok()?;
        let min = time_parts.next()?.parse::<u8>().ok()?;
        let sec = time_parts.next()?.parse::<u8>().ok()?;
        if time_parts.next().is_some() {
            return None;
        }

        let in_range = (1..=MONTHS_PER_YEAR).contains(&month)
            && (1..=DAYS_PER_MONTH).contains(&day)
            && hour < HOURS_PER_DAY
            && min < MINUTES_PER_HOUR
            && sec < SECONDS_PER_MINUTE;
        in_range.then_some(Self::new(year, month, day, hour, min, sec))
    }

    /// Advance by one second, carrying into minutes, hours and day.
    ///
    /// The day wraps from 31 back to 1 without touching the month.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "Every field is reset before it can reach its type's maximum"
    )]
    pub const fn advance_one_second(&mut self) {
        self.sec += 1;
        if self.sec < SECONDS_PER_MINUTE {
            return;
        }
        self.sec = 0;
        self.min += 1;
        if self.min < MINUTES_PER_HOUR {
            return;
        }
        self.min = 0;
        self.hour += 1;
        if self.hour < HOURS_PER_DAY {
            return;
        }
        self.hour = 0;
        self.day = self.day % DAYS_PER_MONTH + 1;
    }

    /// Step one field up or down, wrapping at its natural bounds.
    ///
    /// The year clamps at 0 going down and saturates going up.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "Operands are kept inside their field ranges"
    )]
    pub const fn adjust(&mut self, field: Field, direction: Direction) {
        match (field, direction) {
            (Field::Hour, Direction::Up) => self.hour = (self.hour + 1) % HOURS_PER_DAY,
            (Field::Hour, Direction::Down) => {
                self.hour = if self.hour == 0 { HOURS_PER_DAY - 1 } else { self.hour - 1 };
            }
            (Field::Minute, Direction::Up) => self.min = (self.min + 1) % MINUTES_PER_HOUR,
            (Field::Minute, Direction::Down) => {
                self.min = if self.min == 0 { MINUTES_PER_HOUR - 1 } else { self.min - 1 };
            }
            (Field::Day, Direction::Up) => self.day = self.day % DAYS_PER_MONTH + 1,
            (Field::Day, Direction::Down) => {
                self.day = if self.day <= 1 { DAYS_PER_MONTH } else { self.day - 1 };
            }
            (Field::Month, Direction::Up) => self.month = self.month % MONTHS_PER_YEAR + 1,
            (Field::Month, Direction::Down) => {
                self.month = if self.month <= 1 { MONTHS_PER_YEAR } else { self.month - 1 };
            }
            (Field::Year, Direction::Up) => self.year = self.year.saturating_add(1),
            (Field::Year, Direction::Down) => self.year = self.year.saturating_sub(1),
        }
    }

    /// True when this is exactly the top of the minute `hour:min`.
    #[must_use]
    pub const fn is_top_of_minute(&self, hour: u8, min: u8) -> bool {
        self.hour == hour && self.min == min && self.sec == 0
    }
}

/// A field the user can edit in configuration mode, in cursor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    #[default]
    Hour,
    Minute,
    Day,
    Month,
    Year,
}

impl Field {
    /// The next field in the cycle Hour -> Minute -> Day -> Month -> Year -> Hour.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Hour => Self::Minute,
            Self::Minute => Self::Day,
            Self::Day => Self::Month,
            Self::Month => Self::Year,
            Self::Year => Self::Hour,
        }
    }

    /// On-screen name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hour => "Hour",
            Self::Minute => "Minute",
            Self::Day => "Day",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }
}

/// Which way a joystick motion moves the selected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
}
