use std::{env, time::Duration};

use anyhow::{bail, Context};
use mcp9808::driver::microchip::mcp9808::Config;

pub const ADDRESS_VAR: &str = "MCP9808_ADDRESS";
pub const INTERVAL_VAR: &str = "MCP9808_INTERVAL_MS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub sensor: Config,
    /// `None` takes a single reading and exits.
    pub interval: Option<Duration>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::parse(
            env::var(ADDRESS_VAR).ok().as_deref(),
            env::var(INTERVAL_VAR).ok().as_deref(),
        )
    }

    fn parse(address: Option<&str>, interval_ms: Option<&str>) -> anyhow::Result<Self> {
        let mut sensor = Config::default();
        if let Some(address) = address {
            sensor = sensor.address(
                parse_address(address).with_context(|| format!("invalid {ADDRESS_VAR}"))?,
            );
        }

        let interval = match interval_ms {
            Some(ms) => {
                let ms: u64 = ms
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid {INTERVAL_VAR} {ms:?}"))?;
                (ms > 0).then(|| Duration::from_millis(ms))
            }
            None => None,
        };

        Ok(Self { sensor, interval })
    }
}

/// Parses a 7-bit i2c address, either decimal or `0x` prefixed hex.
pub fn parse_address(s: &str) -> anyhow::Result<u8> {
    let s = s.trim();
    let address = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    }
    .with_context(|| format!("{s:?} is not an address"))?;

    if address > 0x7F {
        bail!("{address:#04x} is not a 7-bit address");
    }

    Ok(address)
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::{parse_address, Settings};

    #[test]
    fn address_formats() {
        assert_eq!(parse_address("0x18").unwrap(), 0x18);
        assert_eq!(parse_address("0X1f").unwrap(), 0x1F);
        assert_eq!(parse_address(" 24 ").unwrap(), 0x18);
        assert_eq!(parse_address("0x7F").unwrap(), 0x7F);
    }

    #[test]
    fn address_out_of_range() {
        assert!(parse_address("0x80").is_err());
        assert!(parse_address("300").is_err());
        assert!(parse_address("0xZZ").is_err());
        assert!(parse_address("").is_err());
    }

    #[test]
    fn defaults() {
        let settings = Settings::parse(None, None).unwrap();
        assert_eq!(settings.sensor.address, 0x18);
        assert_eq!(settings.interval, None);
    }

    #[test]
    fn interval() {
        let settings = Settings::parse(Some("0x19"), Some("500")).unwrap();
        assert_eq!(settings.sensor.address, 0x19);
        assert_eq!(settings.interval, Some(Duration::from_millis(500)));

        assert_eq!(Settings::parse(None, Some("0")).unwrap().interval, None);
        assert!(Settings::parse(None, Some("-1")).is_err());
    }
}
