//! Bus primitives for TPS25730.
//! Blocking I2C helpers; the async mirror lives behind the `async` feature.

use crate::data_types::{Capabilities, FourCcCommand, WritePacket};
use crate::error::Error;
use crate::registers::{addr, CAPABILITIES_LEN, DEFAULT_I2C_ADDRESS};

/// TPS25730 driver.
pub struct Tps25730<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Tps25730<I2C> {
    /// Create a new driver instance with the default I2C address (0x20).
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: DEFAULT_I2C_ADDRESS,
        }
    }

    /// Create a new driver instance with a custom I2C address.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn set_address(&mut self, address: u8) {
        self.address = address;
    }

    /// Release the underlying bus.
    pub fn free(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Tps25730<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Read a burst starting at a register.
    pub fn read_regs(&mut self, start_reg: u8, data: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write_read(self.address, &[start_reg], data)
            .map_err(Error::I2c)
    }

    /// Write an already framed buffer (register address first) as one transaction.
    pub fn write_raw(&mut self, frame: &[u8]) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(self.address, frame).map_err(Error::I2c)
    }

    /// Read a capabilities block from `reg` (sink or source).
    pub fn read_capabilities(&mut self, reg: u8) -> Result<Capabilities, Error<I2C::Error>> {
        let mut buf = [0u8; CAPABILITIES_LEN];
        self.read_regs(reg, &mut buf)?;
        Ok(Capabilities::from_bytes(&buf))
    }

    pub fn read_sink_capabilities(&mut self) -> Result<Capabilities, Error<I2C::Error>> {
        self.read_capabilities(addr::SINK_CAP)
    }

    pub fn read_source_capabilities(&mut self) -> Result<Capabilities, Error<I2C::Error>> {
        self.read_capabilities(addr::SOURCE_CAP)
    }

    /// Write the full sink capabilities block in a single address-prefixed transaction.
    pub fn write_sink_capabilities(&mut self, caps: &Capabilities) -> Result<(), Error<I2C::Error>> {
        let packet = WritePacket::sink(*caps);
        self.write_raw(&packet.to_bytes())
    }

    /// Issue a 4CC command.
    pub fn send_command(&mut self, cmd: &FourCcCommand) -> Result<(), Error<I2C::Error>> {
        self.write_raw(&cmd.to_bytes())
    }

    pub fn send_4cc(&mut self, code: [u8; 4]) -> Result<(), Error<I2C::Error>> {
        self.send_command(&FourCcCommand::new(code))
    }

    /// Ask the controller to re-advertise its source capabilities ("GSrC").
    pub fn refresh_source_capabilities(&mut self) -> Result<(), Error<I2C::Error>> {
        self.send_command(&FourCcCommand::GSRC)
    }
}

#[cfg(feature = "async")]
impl<I2C> Tps25730<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    pub async fn read_regs_async(&mut self, start_reg: u8, data: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write_read(self.address, &[start_reg], data)
            .await
            .map_err(Error::I2c)
    }

    pub async fn write_raw_async(&mut self, frame: &[u8]) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(self.address, frame).await.map_err(Error::I2c)
    }

    pub async fn read_capabilities_async(&mut self, reg: u8) -> Result<Capabilities, Error<I2C::Error>> {
        let mut buf = [0u8; CAPABILITIES_LEN];
        self.read_regs_async(reg, &mut buf).await?;
        Ok(Capabilities::from_bytes(&buf))
    }

    pub async fn read_sink_capabilities_async(&mut self) -> Result<Capabilities, Error<I2C::Error>> {
        self.read_capabilities_async(addr::SINK_CAP).await
    }

    pub async fn read_source_capabilities_async(&mut self) -> Result<Capabilities, Error<I2C::Error>> {
        self.read_capabilities_async(addr::SOURCE_CAP).await
    }

    pub async fn write_sink_capabilities_async(&mut self, caps: &Capabilities) -> Result<(), Error<I2C::Error>> {
        let packet = WritePacket::sink(*caps);
        self.write_raw_async(&packet.to_bytes()).await
    }

    pub async fn send_command_async(&mut self, cmd: &FourCcCommand) -> Result<(), Error<I2C::Error>> {
        self.write_raw_async(&cmd.to_bytes()).await
    }

    pub async fn send_4cc_async(&mut self, code: [u8; 4]) -> Result<(), Error<I2C::Error>> {
        self.send_command_async(&FourCcCommand::new(code)).await
    }

    pub async fn refresh_source_capabilities_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.send_command_async(&FourCcCommand::GSRC).await
    }
}
