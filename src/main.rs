//! Alarm clock firmware: OLED clock with a joystick-adjusted time and a single alarm.
//!
//! Runs on a Raspberry Pi Pico RP2040.
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "Single-threaded")]

use alarm_clock::button::{ButtonFlags, ButtonId, button_task};
use alarm_clock::buzzer::{Buzzer, PwmTone, buzzer_task};
use alarm_clock::display::Ssd1306Screen;
use alarm_clock::hardware::Hardware;
use alarm_clock::joystick::AdcJoystick;
use alarm_clock::{
    App, CONFIG_POLL_INTERVAL, ClockConfig, ClockTime, Never, ONE_SECOND, Pacing, Result,
};
use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Instant, Ticker, Timer};
use panic_probe as _;
use static_cell::StaticCell;

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

#[expect(clippy::items_after_statements, reason = "Keeps related code together")]
async fn inner_main(spawner: Spawner) -> Result<Never> {
    info!("Starting alarm clock");
    let hardware = Hardware::default();

    static BUTTON_FLAGS: ButtonFlags = ButtonFlags::new();
    spawner.spawn(button_task(hardware.button_a, ButtonId::A, &BUTTON_FLAGS)?);
    spawner.spawn(button_task(hardware.button_b, ButtonId::B, &BUTTON_FLAGS)?);
    spawner.spawn(button_task(
        hardware.button_select,
        ButtonId::Select,
        &BUTTON_FLAGS,
    )?);

    static BUZZER: StaticCell<Buzzer<CriticalSectionRawMutex, PwmTone>> = StaticCell::new();
    let buzzer: &'static Buzzer<CriticalSectionRawMutex, PwmTone> =
        BUZZER.init(Buzzer::new(PwmTone::new(hardware.buzzer_pwm)));
    spawner.spawn(buzzer_task(buzzer)?);

    let screen = Ssd1306Screen::new(hardware.oled_i2c)?;
    let joystick = AdcJoystick::new(hardware.joystick_adc, hardware.joystick_y);
    let config = ClockConfig {
        start: ClockTime::power_up(),
        ..ClockConfig::default()
    };
    info!("Power-up time: {:?}", config.start);

    let mut app = App::new(
        config,
        &BUTTON_FLAGS,
        screen,
        joystick,
        hardware.led,
        buzzer,
    );

    info!("Entering main loop");
    let mut ticker = Ticker::every(ONE_SECOND);
    loop {
        match app.step(Instant::now())? {
            Pacing::Tick => ticker.next().await,
            Pacing::RestartTick => {
                ticker.reset();
                ticker.next().await;
            }
            Pacing::Settle(delay) => Timer::after(delay).await,
            Pacing::Poll => Timer::after(CONFIG_POLL_INTERVAL).await,
        }
    }
}
