use embassy_rp::{
    adc,
    gpio::{self, Level},
    i2c,
    peripherals::I2C1,
    pwm,
};

use crate::shared_constants::DISPLAY_I2C_FREQUENCY_HZ;

/// The board's peripherals, wired as on the alarm clock board.
///
/// | Function       | Pin    |
/// |----------------|--------|
/// | Button A       | GPIO5  |
/// | Button B       | GPIO6  |
/// | Select button  | GPIO22 |
/// | Joystick Y     | GPIO26 (ADC0) |
/// | Red LED        | GPIO13 |
/// | Buzzer (PWM2B) | GPIO21 |
/// | OLED SDA / SCL | GPIO14 / GPIO15 (I2C1) |
pub struct Hardware {
    pub button_a: gpio::Input<'static>,
    pub button_b: gpio::Input<'static>,
    pub button_select: gpio::Input<'static>,
    pub joystick_adc: adc::Adc<'static, adc::Blocking>,
    pub joystick_y: adc::Channel<'static>,
    pub led: gpio::Output<'static>,
    pub buzzer_pwm: pwm::Pwm<'static>,
    pub oled_i2c: i2c::I2c<'static, I2C1, i2c::Blocking>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        // Active-low buttons; presses are falling edges.
        let button_a = gpio::Input::new(peripherals.PIN_5, gpio::Pull::Up);
        let button_b = gpio::Input::new(peripherals.PIN_6, gpio::Pull::Up);
        let button_select = gpio::Input::new(peripherals.PIN_22, gpio::Pull::Up);

        let joystick_adc = adc::Adc::new_blocking(peripherals.ADC, adc::Config::default());
        let joystick_y = adc::Channel::new_pin(peripherals.PIN_26, gpio::Pull::None);

        let led = gpio::Output::new(peripherals.PIN_13, Level::Low);

        let buzzer_pwm = pwm::Pwm::new_output_b(
            peripherals.PWM_SLICE2,
            peripherals.PIN_21,
            pwm::Config::default(),
        );

        let mut i2c_config = i2c::Config::default();
        i2c_config.frequency = DISPLAY_I2C_FREQUENCY_HZ;
        let oled_i2c = i2c::I2c::new_blocking(
            peripherals.I2C1,
            peripherals.PIN_15,
            peripherals.PIN_14,
            i2c_config,
        );

        Self {
            button_a,
            button_b,
            button_select,
            joystick_adc,
            joystick_y,
            led,
            buzzer_pwm,
            oled_i2c,
        }
    }
}
