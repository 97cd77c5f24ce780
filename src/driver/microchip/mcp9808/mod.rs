//! Driver for the Microchip MCP9808 digital temperature sensor.

use embedded_hal::blocking::i2c::{Write, WriteRead};
use thiserror::Error;
use tracing::{debug, trace, warn};

pub mod registers;
pub mod temperature;

use registers::values;

pub const DEFAULT_ADDRESS: u8 = 0x18;

const PAYLOAD_MAX: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error<E> {
    #[error("i2c error")]
    I2c(E),
    #[error("part does not match driver: register {register:#04x} read {found:#06x}, expected {expected:#06x}")]
    IdentityMismatch {
        register: u8,
        expected: u16,
        found: u16,
    },
}

/// Options applied before the sensor is probed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    pub address: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
        }
    }
}

impl Config {
    /// Use a 7-bit bus address other than the default 0x18.
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }
}

/// A verified and configured MCP9808.
///
/// Only obtainable through [`Mcp9808::new`] or [`Mcp9808::with_config`], both
/// of which check the part's identity and write its configuration first.
pub struct Mcp9808<I2C> {
    i2c: I2C,
    address: u8,
    manufacturer_id: u16,
    device_id: u16,
    last_temperature: Option<f64>,
}

impl<I2C, E> Mcp9808<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    pub fn new(i2c: I2C) -> Result<Self, Error<E>> {
        Self::with_config(i2c, Config::default())
    }

    /// Probe the sensor at `config.address`, verify its manufacturer and
    /// device IDs, then put it in continuous conversion at 0.0625 °C
    /// resolution.
    pub fn with_config(i2c: I2C, config: Config) -> Result<Self, Error<E>> {
        let mut sensor = Self {
            i2c,
            address: config.address,
            manufacturer_id: 0,
            device_id: 0,
            last_temperature: None,
        };

        sensor.init()?;

        Ok(sensor)
    }

    fn init(&mut self) -> Result<(), Error<E>> {
        self.manufacturer_id =
            self.read_identity(registers::MANUFACTURER_ID, values::MANUFACTURER_ID_CODE)?;
        self.device_id = self.read_identity(registers::DEVICE_ID, values::DEVICE_ID_CODE)?;
        debug!(
            "found mcp9808 at {:#04x}, manufacturer id = {:#06x}, device id = {:#06x}",
            self.address, self.manufacturer_id, self.device_id
        );

        self.write_register(registers::CONFIG, &values::CONFIG_DEFAULT)?;
        self.write_register(registers::RESOLUTION, &[values::RESOLUTION_FINEST])?;
        debug!("configured mcp9808 at {:#04x}", self.address);

        Ok(())
    }

    fn read_identity(&mut self, register: u8, expected: u16) -> Result<u16, Error<E>> {
        let found = self.read_u16(register)?;

        if found != expected {
            warn!(
                "part at {:#04x} does not match driver: register {register:#04x} = {found:#06x}, expected {expected:#06x}",
                self.address
            );
            return Err(Error::IdentityMismatch {
                register,
                expected,
                found,
            });
        }

        Ok(found)
    }

    fn write_register(&mut self, register: u8, buf: &[u8]) -> Result<(), Error<E>> {
        debug_assert!(buf.len() <= PAYLOAD_MAX);

        let mut tx_buf = [0u8; 1 + PAYLOAD_MAX];
        let end = 1 + buf.len();

        tx_buf[0] = register;
        tx_buf[1..end].copy_from_slice(buf);

        self.i2c
            .write(self.address, &tx_buf[..end])
            .map_err(Error::I2c)
    }

    fn read_register(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c
            .write_read(self.address, &[register], buf)
            .map_err(Error::I2c)
    }

    fn read_u16(&mut self, register: u8) -> Result<u16, Error<E>> {
        let mut buf = [0u8; 2];
        self.read_register(register, &mut buf)?;
        let value = u16::from_be_bytes(buf);
        trace!("read register {register:#04x} = {value:#06x}");
        Ok(value)
    }

    /// Get the ambient temperature in Celsius.
    ///
    /// Performs exactly one bus transaction. On failure the previously cached
    /// reading is left untouched.
    pub fn read_temperature(&mut self) -> Result<f64, Error<E>> {
        let raw = self.read_u16(registers::AMBIENT_TEMP)?;
        let celsius = temperature::decode(raw);
        self.last_temperature = Some(celsius);
        Ok(celsius)
    }
}

impl<I2C> Mcp9808<I2C> {
    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn manufacturer_id(&self) -> u16 {
        self.manufacturer_id
    }

    pub fn device_id(&self) -> u16 {
        self.device_id
    }

    /// The most recent successful reading, if any.
    pub fn last_temperature(&self) -> Option<f64> {
        self.last_temperature
    }

    /// Returns the underlying bus, consuming this driver.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
