//! AMG88xx thermal array driver
//!
//! Minimal async driver for the Panasonic AMG88xx 8x8 infrared array over I2C.
//! Only what the robot needs: bring the sensor into normal mode at 10 fps and
//! burst-read the 64 pixel registers.
//!
//! # Pixel format
//! Each pixel is two registers, low byte first, holding a 12-bit two's
//! complement value with a resolution of 0.25 °C.
//!
//! # Orientation
//! Every 8 values run from top to bottom of the field of view, and consecutive
//! groups of 8 run from left to right, so low indices are on the robot's right
//! once the sensor is mounted facing forward.

use embedded_hal_async::i2c::I2c;

use crate::system::error::{Error, Result};
use crate::system::frame::{ThermalFrame, PIXEL_COUNT};
use crate::system::peripheral::ThermalSensor;

/// Default I2C address (AD_SELECT pulled high)
pub const DEFAULT_ADDRESS: u8 = 0x69;
/// Alternate I2C address (AD_SELECT pulled low)
pub const ALTERNATE_ADDRESS: u8 = 0x68;

/// Register addresses
const REG_PCTL: u8 = 0x00;
const REG_RST: u8 = 0x01;
const REG_FPSC: u8 = 0x02;
const REG_INTC: u8 = 0x03;
const REG_PIXEL_BASE: u8 = 0x80;

/// Register values
const PCTL_NORMAL_MODE: u8 = 0x00;
const RST_INITIAL_RESET: u8 = 0x3F;
const FPSC_10_FPS: u8 = 0x00;
const INTC_DISABLED: u8 = 0x00;

/// Degrees Celsius per pixel LSB
const PIXEL_RESOLUTION: f32 = 0.25;

/// AMG88xx attached to an async I2C bus
pub struct Amg88xx<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> Amg88xx<I> {
    /// Driver at the default address
    pub fn new(i2c: I) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    pub fn with_address(i2c: I, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the bus
    pub fn release(self) -> I {
        self.i2c
    }

    async fn write_register(&mut self, register: u8, value: u8) -> Result<()> {
        self.i2c
            .write(self.address, &[register, value])
            .await
            .map_err(|_| Error::Bus)
    }

    async fn configure(&mut self) -> Result<()> {
        self.write_register(REG_PCTL, PCTL_NORMAL_MODE).await?;
        self.write_register(REG_RST, RST_INITIAL_RESET).await?;
        self.write_register(REG_INTC, INTC_DISABLED).await?;
        self.write_register(REG_FPSC, FPSC_10_FPS).await
    }
}

impl<I: I2c> ThermalSensor for Amg88xx<I> {
    async fn init(&mut self) -> Result<()> {
        self.configure().await.map_err(|_| Error::SensorInit)
    }

    async fn read_frame(&mut self) -> Result<ThermalFrame> {
        let mut raw = [0u8; PIXEL_COUNT * 2];
        self.i2c
            .write_read(self.address, &[REG_PIXEL_BASE], &mut raw)
            .await
            .map_err(|_| Error::Bus)?;

        let mut cells = [0.0f32; PIXEL_COUNT];
        for (cell, bytes) in cells.iter_mut().zip(raw.chunks_exact(2)) {
            *cell = pixel_to_celsius(u16::from_le_bytes([bytes[0], bytes[1]]));
        }
        Ok(ThermalFrame::new(cells))
    }
}

/// Convert a raw 12-bit two's complement pixel to °C
fn pixel_to_celsius(raw: u16) -> f32 {
    // shift the sign bit into bit 15, then arithmetic-shift back
    let value = ((raw << 4) as i16) >> 4;
    value as f32 * PIXEL_RESOLUTION
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_hal_async::i2c::{ErrorKind, ErrorType, Operation};

    /// Records writes and answers reads from a canned buffer
    struct FakeBus {
        writes: Vec<(u8, Vec<u8>)>,
        pixels: Vec<u8>,
        fail: bool,
    }

    impl FakeBus {
        fn new(pixels: Vec<u8>) -> Self {
            Self {
                writes: Vec::new(),
                pixels,
                fail: false,
            }
        }
    }

    impl ErrorType for FakeBus {
        type Error = ErrorKind;
    }

    impl I2c for FakeBus {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> core::result::Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            for operation in operations {
                match operation {
                    Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                    Operation::Read(buffer) => buffer.copy_from_slice(&self.pixels[..buffer.len()]),
                }
            }
            Ok(())
        }
    }

    #[test]
    fn pixel_conversion() {
        assert_eq!(pixel_to_celsius(0x000), 0.0);
        assert_eq!(pixel_to_celsius(0x001), 0.25);
        assert_eq!(pixel_to_celsius(0x064), 25.0);
        assert_eq!(pixel_to_celsius(0x7FF), 511.75);
        assert_eq!(pixel_to_celsius(0xFFF), -0.25);
        assert_eq!(pixel_to_celsius(0xF9C), -25.0);
    }

    #[test]
    fn init_configures_normal_mode() {
        let mut sensor = Amg88xx::new(FakeBus::new(Vec::new()));
        block_on(sensor.init()).unwrap();
        let bus = sensor.release();
        assert_eq!(
            bus.writes,
            vec![
                (DEFAULT_ADDRESS, vec![REG_PCTL, PCTL_NORMAL_MODE]),
                (DEFAULT_ADDRESS, vec![REG_RST, RST_INITIAL_RESET]),
                (DEFAULT_ADDRESS, vec![REG_INTC, INTC_DISABLED]),
                (DEFAULT_ADDRESS, vec![REG_FPSC, FPSC_10_FPS]),
            ]
        );
    }

    #[test]
    fn init_failure_is_sensor_init() {
        let mut bus = FakeBus::new(Vec::new());
        bus.fail = true;
        let mut sensor = Amg88xx::with_address(bus, ALTERNATE_ADDRESS);
        assert_eq!(block_on(sensor.init()), Err(Error::SensorInit));
    }

    #[test]
    fn frame_read_decodes_all_pixels_in_order() {
        let mut raw = Vec::new();
        for index in 0..PIXEL_COUNT as u16 {
            // index * 4 LSB = index °C
            raw.extend_from_slice(&(index * 4).to_le_bytes());
        }
        let mut sensor = Amg88xx::new(FakeBus::new(raw));
        let frame = block_on(sensor.read_frame()).unwrap();
        for index in 0..PIXEL_COUNT {
            assert_eq!(frame.cell(index), index as f32);
        }
        let bus = sensor.release();
        assert_eq!(bus.writes, vec![(DEFAULT_ADDRESS, vec![REG_PIXEL_BASE])]);
    }

    #[test]
    fn frame_read_failure_is_bus_error() {
        let mut bus = FakeBus::new(Vec::new());
        bus.fail = true;
        let mut sensor = Amg88xx::new(bus);
        assert_eq!(block_on(sensor.read_frame()), Err(Error::Bus));
    }
}
