//! Hardware Resource Management
//!
//! Assigns the board's pins and peripherals to the tasks that own them. Nothing
//! here is shared between tasks; the tasks talk to each other through mailboxes
//! only.
//!
//! # Resource Groups
//! - Thermal Camera: AMG88xx on I2C0
//! - Bumpers: front and back limit switches
//! - Motor Control: TB6612FNG dual motor driver pins and PWM channels

use assign_resources::assign_resources;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::InterruptHandler as I2cInterruptHandler;
use embassy_rp::peripherals::{self, I2C0};

assign_resources! {
    /// AMG88xx 8x8 thermal array
    thermal_camera: ThermalCameraResources {
        i2c: I2C0,
        scl_pin: PIN_13,
        sda_pin: PIN_12,
    },
    /// Front limit switch, high when pressed
    front_bumper: FrontBumperResources {
        pin: PIN_16,
    },
    /// Back limit switch, high when pressed
    back_bumper: BackBumperResources {
        pin: PIN_17,
    },
    /// TB6612FNG dual motor driver pins and PWM channels
    motor_driver: MotorDriverResources {
        standby_pin: PIN_22,
        // Motor drive PWM
        left_slice: PWM_SLICE6,
        left_pwm_pin: PIN_28,
        left_forward_pin: PIN_21,
        left_backward_pin: PIN_20,
        // Motor drive PWM
        right_slice: PWM_SLICE5,
        right_pwm_pin: PIN_27,
        right_forward_pin: PIN_19,
        right_backward_pin: PIN_18,
    },
}

bind_interrupts!(pub struct Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});
