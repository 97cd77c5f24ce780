use std::thread::JoinHandle;

use anyhow::Context;
use mcp9808::driver::microchip::mcp9808::Mcp9808;
use rppal::i2c::I2c;
use tracing::{debug, info};

use crate::config::Settings;

pub fn spawn_thread(
    settings: Settings,
    stop_rx: flume::Receiver<()>,
) -> JoinHandle<anyhow::Result<()>> {
    std::thread::spawn(move || {
        let i2c = I2c::new().context("failed to open i2c bus")?;
        let mut sensor = Mcp9808::with_config(i2c, settings.sensor)
            .context("failed to initialize mcp9808")?;
        debug!(
            "initialized mcp9808 driver at {:#04x}, device id = {:#06x}",
            sensor.address(),
            sensor.device_id()
        );

        loop {
            let celsius = sensor
                .read_temperature()
                .context("failed to read temperature")?;
            info!("temperature = {celsius:.4} °C");

            let Some(interval) = settings.interval else {
                break;
            };

            // sleep until the next reading unless we're told to stop
            match stop_rx.recv_timeout(interval) {
                Err(flume::RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(flume::RecvTimeoutError::Disconnected) => break,
            }
        }

        Ok(())
    })
}
