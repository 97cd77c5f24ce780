/// Temperature step of one magnitude bit at the finest resolution.
pub const CELSIUS_PER_LSB: f64 = 0.0625;

const FIELD_MASK: u16 = 0x1FFF;
const SIGN_BIT: u16 = 0x1000;
const MAGNITUDE_MASK: u16 = 0x0FFF;

/// Converts a raw ambient temperature register value to degrees Celsius.
///
/// The top three bits are alarm flags and are ignored. The remaining 13 bits
/// hold a sign bit followed by a 12 bit magnitude. This is sign-and-magnitude,
/// not two's complement, so the magnitude must not be sign extended.
pub fn decode(raw: u16) -> f64 {
    let raw = raw & FIELD_MASK;

    if raw & SIGN_BIT == SIGN_BIT {
        -(f64::from(raw & MAGNITUDE_MASK) * CELSIUS_PER_LSB)
    } else {
        f64::from(raw) * CELSIUS_PER_LSB
    }
}

#[cfg(test)]
mod test {
    use super::decode;

    #[test]
    fn zero() {
        assert_eq!(decode(0x0000), 0.0);
    }

    #[test]
    fn positive() {
        assert_eq!(decode(0x0190), 25.0);
        assert_eq!(decode(0x0001), 0.0625);
        assert_eq!(decode(0x0FFF), 255.9375);
    }

    #[test]
    fn negative() {
        assert_eq!(decode(0x1190), -25.0);
        assert_eq!(decode(0x1001), -0.0625);
        assert_eq!(decode(0x1FFF), -255.9375);
    }

    #[test]
    fn flag_bits_are_ignored() {
        assert_eq!(decode(0xE190), 25.0);
        assert_eq!(decode(0x8000 | 0x1190), -25.0);
    }

    #[test]
    fn decode_is_stable_under_masking() {
        for raw in 0..=u16::MAX {
            assert_eq!(decode(raw).to_bits(), decode(raw & 0x1FFF).to_bits(), "raw = {raw:#06x}");
        }
    }
}
