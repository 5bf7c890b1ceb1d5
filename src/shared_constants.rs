use embassy_time::Duration;

pub const ONE_SECOND: Duration = Duration::from_secs(1);

// Buttons: an edge is accepted only after this much quiet since the last accepted press.
pub const BUTTON_DEBOUNCE_DELAY: Duration = Duration::from_millis(200);

pub const ALARM_NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

// Buzzer tone generator
pub const BUZZER_FREQUENCY_HZ: u32 = 2000;
pub const BUZZER_RESOLUTION: u16 = 4095; // 12-bit
pub const BUZZER_HALF_DUTY: u16 = BUZZER_RESOLUTION / 2;
pub const BUZZER_PERIOD: Duration = Duration::from_millis(100);

// Joystick axis, raw ADC counts (0..=4095)
pub const JOYSTICK_LOW_THRESHOLD: u16 = 1000;
pub const JOYSTICK_HIGH_THRESHOLD: u16 = 3000;
pub const JOYSTICK_SETTLE_DELAY: Duration = Duration::from_millis(200);
/// How often the loop wakes in configuration mode, where no tick paces it.
pub const CONFIG_POLL_INTERVAL: Duration = Duration::from_millis(20);

// SSD1306 OLED (128x64)
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;
pub const DISPLAY_I2C_FREQUENCY_HZ: u32 = 400_000;
