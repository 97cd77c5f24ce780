pub const CONFIG: u8 = 0x01;
pub const AMBIENT_TEMP: u8 = 0x05;
pub const MANUFACTURER_ID: u8 = 0x06;
pub const DEVICE_ID: u8 = 0x07;
pub const RESOLUTION: u8 = 0x08;

pub mod values {
    pub const MANUFACTURER_ID_CODE: u16 = 0x0054;
    pub const DEVICE_ID_CODE: u16 = 0x0400;

    /// Continuous conversion, no alarm output, no hysteresis.
    pub const CONFIG_DEFAULT: [u8; 2] = [0x00, 0x00];

    /// 0.0625 °C per bit.
    pub const RESOLUTION_FINEST: u8 = 0x03;
}
