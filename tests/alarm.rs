//! Host-level tests for the alarm controller and the buzzer oscillator.

mod common;

use alarm_clock::alarm::{AlarmController, AlarmState, NotificationTimer};
use alarm_clock::clock_time::ClockTime;
use alarm_clock::{
    ALARM_NOTIFICATION_DURATION, BUZZER_FREQUENCY_HZ, BUZZER_HALF_DUTY, BUZZER_RESOLUTION,
};
use common::{RecordingTone, SharedLed, TestBuzzer, at_ms};
use embassy_time::Duration;

fn noon() -> ClockTime {
    ClockTime::new(2025, 1, 1, 12, 0, 0)
}

#[test]
fn alarm_starts_disabled() {
    let buzzer = TestBuzzer::new(RecordingTone::default());
    let controller = AlarmController::new(SharedLed::default(), &buzzer, ALARM_NOTIFICATION_DURATION);
    assert_eq!(controller.state(), AlarmState::default());
    assert!(!controller.state().enabled);
    assert!(!controller.notification().is_active());
    assert!(!controller.is_ringing());
}

#[test]
fn arm_copies_time_and_starts_notification() {
    let buzzer = TestBuzzer::new(RecordingTone::default());
    let mut controller =
        AlarmController::new(SharedLed::default(), &buzzer, ALARM_NOTIFICATION_DURATION);
    controller.arm(6, 45, at_ms(5_000));
    assert_eq!(
        controller.state(),
        AlarmState {
            hour: 6,
            min: 45,
            enabled: true
        }
    );
    assert!(controller.notification().is_active());
    // Arming alone makes no noise.
    assert!(!buzzer.is_active());
}

#[test]
fn trigger_lights_led_and_starts_tone() {
    let led = SharedLed::default();
    let buzzer = TestBuzzer::new(RecordingTone::default());
    let mut controller = AlarmController::new(led.clone(), &buzzer, ALARM_NOTIFICATION_DURATION);

    controller.trigger(&noon()).unwrap();

    assert!(led.is_on());
    assert!(controller.is_ringing());
    assert!(buzzer.is_active());
    buzzer.with_tone(|tone| {
        assert_eq!(tone.configures, [(BUZZER_FREQUENCY_HZ, BUZZER_RESOLUTION)]);
        assert_eq!(tone.last_level(), Some(BUZZER_HALF_DUTY));
    });
    assert_eq!((BUZZER_FREQUENCY_HZ, BUZZER_RESOLUTION, BUZZER_HALF_DUTY), (2000, 4095, 2047));
}

#[test]
fn ringing_continues_until_disarmed() {
    let led = SharedLed::default();
    let buzzer = TestBuzzer::new(RecordingTone::default());
    let mut controller = AlarmController::new(led.clone(), &buzzer, ALARM_NOTIFICATION_DURATION);
    controller.arm(12, 0, at_ms(1_000));
    controller.trigger(&noon()).unwrap();

    // Ten minutes of oscillator periods.
    for _ in 0..6_000 {
        buzzer.on_period();
    }
    assert!(led.is_on());
    assert!(buzzer.is_active());

    controller.disarm().unwrap();
    assert!(!led.is_on());
    assert!(!buzzer.is_active());
    assert!(!controller.is_ringing());
    assert!(!controller.state().enabled);
    buzzer.with_tone(|tone| assert_eq!(tone.last_level(), Some(0)));
}

#[test]
fn oscillator_chirps_while_active_and_holds_off_otherwise() {
    let buzzer = TestBuzzer::new(RecordingTone::default());
    buzzer.on_period();
    buzzer.on_period();
    buzzer.with_tone(|tone| assert_eq!(tone.levels, [0, 0]));

    buzzer.sound();
    for _ in 0..4 {
        buzzer.on_period();
    }
    buzzer.with_tone(|tone| {
        assert_eq!(
            tone.levels,
            [0, 0, BUZZER_HALF_DUTY, BUZZER_HALF_DUTY, 0, BUZZER_HALF_DUTY, 0]
        );
    });

    buzzer.silence();
    buzzer.on_period();
    buzzer.with_tone(|tone| assert_eq!(&tone.levels[7..], [0, 0]));
}

#[test]
fn disarm_is_idempotent() {
    let led = SharedLed::default();
    let buzzer = TestBuzzer::new(RecordingTone::default());
    let mut controller = AlarmController::new(led.clone(), &buzzer, ALARM_NOTIFICATION_DURATION);
    controller.disarm().unwrap();
    controller.disarm().unwrap();
    assert!(!led.is_on());
    assert!(!controller.state().enabled);
    assert!(!buzzer.is_active());
}

#[test]
fn repeated_trigger_keeps_the_same_outputs() {
    let led = SharedLed::default();
    let buzzer = TestBuzzer::new(RecordingTone::default());
    let mut controller = AlarmController::new(led.clone(), &buzzer, ALARM_NOTIFICATION_DURATION);
    controller.trigger(&noon()).unwrap();
    controller.trigger(&noon()).unwrap();
    assert!(led.is_on());
    assert!(buzzer.is_active());
    buzzer.with_tone(|tone| {
        assert!(
            tone.configures
                .iter()
                .all(|&setting| setting == (BUZZER_FREQUENCY_HZ, BUZZER_RESOLUTION))
        );
    });
}

#[test]
fn check_matches_only_at_zero_seconds_when_enabled() {
    let buzzer = TestBuzzer::new(RecordingTone::default());
    let mut controller =
        AlarmController::new(SharedLed::default(), &buzzer, ALARM_NOTIFICATION_DURATION);

    // Disabled alarm at 00:00 never matches midnight.
    assert!(!controller.check(&ClockTime::new(2025, 1, 1, 0, 0, 0)).unwrap());

    controller.arm(7, 30, at_ms(1_000));
    assert!(!controller.check(&ClockTime::new(2025, 1, 1, 7, 29, 59)).unwrap());
    assert!(controller.check(&ClockTime::new(2025, 1, 1, 7, 30, 0)).unwrap());
    assert!(!controller.check(&ClockTime::new(2025, 1, 1, 7, 30, 1)).unwrap());
    // Level condition: the same time the next day matches again.
    assert!(controller.check(&ClockTime::new(2025, 1, 2, 7, 30, 0)).unwrap());
}

#[test]
fn notification_expires_strictly_after_its_duration() {
    let mut notification = NotificationTimer::new(Duration::from_millis(3_000));
    assert!(!notification.expire(at_ms(0)));

    notification.start(at_ms(10_000));
    assert!(notification.expire(at_ms(12_999)));
    assert!(notification.expire(at_ms(13_000)));
    assert!(!notification.expire(at_ms(13_001)));
    assert!(!notification.is_active());
}

#[test]
fn rearming_restarts_notification() {
    let buzzer = TestBuzzer::new(RecordingTone::default());
    let mut controller =
        AlarmController::new(SharedLed::default(), &buzzer, Duration::from_millis(3_000));
    controller.arm(1, 2, at_ms(1_000));
    controller.arm(3, 4, at_ms(3_500));
    assert!(controller.notification_mut().expire(at_ms(6_000)));
    assert!(!controller.notification_mut().expire(at_ms(6_501)));
    assert_eq!((controller.state().hour, controller.state().min), (3, 4));
}
