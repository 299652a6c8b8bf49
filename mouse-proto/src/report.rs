//! Hex report decoding for the two supported wire layouts.
//!
//! The host captures raw HID mouse reports and forwards them as hex
//! text. Two mouse families are supported:
//!
//! - **Boot** (4 bytes): `[buttons, dx, dy, wheel]`, deltas as i8.
//! - **Extended** (9 bytes): `[id, dx_lo, dx_hi, dy_lo, dy_hi, buttons,
//!   wheel, r1, r2]`, deltas as little-endian i16. Bytes 0, 7 and 8 are
//!   ignored.
//!
//! The active layout is fixed at startup. Payloads are never sniffed,
//! a length that does not match the configured layout is rejected.

use crate::types::{ButtonMask, MouseEvent};

/// Hex characters in a boot-style (4-byte) report payload.
pub const BOOT_HEX_LEN: usize = 8;

/// Hex characters in an extended (9-byte) report payload.
pub const EXTENDED_HEX_LEN: usize = 18;

/// Which report layout the host sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportLayout {
    /// 4-byte boot mouse report: `[buttons, dx, dy, wheel]`.
    Boot,
    /// 9-byte report with 16-bit deltas, as sent by high-resolution mice.
    Extended,
}

impl ReportLayout {
    /// Hex characters a payload of this layout must have.
    #[inline]
    #[must_use]
    pub const fn hex_len(self) -> usize {
        match self {
            ReportLayout::Boot => BOOT_HEX_LEN,
            ReportLayout::Extended => EXTENDED_HEX_LEN,
        }
    }
}

/// Report decoding error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Payload contains a character outside `[0-9a-fA-F]`.
    HexDecode,
    /// Payload length does not match the configured layout.
    LengthMismatch { expected: usize, found: usize },
}

/// Decode a hex report payload into a [`MouseEvent`].
///
/// `payload` is the text after the `HID:` prefix, without terminator.
/// Decoding is all-or-nothing: any bad character or a wrong length
/// rejects the whole report and no partial event is produced.
pub fn parse_report(payload: &[u8], layout: ReportLayout) -> Result<MouseEvent, ParseError> {
    match layout {
        ReportLayout::Boot => parse_boot(payload),
        ReportLayout::Extended => parse_extended(payload),
    }
}

fn parse_boot(payload: &[u8]) -> Result<MouseEvent, ParseError> {
    let bytes = decode_hex::<4>(payload)?;
    Ok(MouseEvent {
        buttons: ButtonMask(bytes[0]),
        dx: (bytes[1] as i8) as i16,
        dy: (bytes[2] as i8) as i16,
        wheel: bytes[3] as i8,
    })
}

fn parse_extended(payload: &[u8]) -> Result<MouseEvent, ParseError> {
    let bytes = decode_hex::<9>(payload)?;
    Ok(MouseEvent {
        buttons: ButtonMask(bytes[5]),
        dx: i16::from_le_bytes([bytes[1], bytes[2]]),
        dy: i16::from_le_bytes([bytes[3], bytes[4]]),
        wheel: bytes[6] as i8,
    })
}

/// Decode exactly `N` bytes from `2 * N` hex characters.
fn decode_hex<const N: usize>(payload: &[u8]) -> Result<[u8; N], ParseError> {
    if payload.len() != N * 2 {
        return Err(ParseError::LengthMismatch {
            expected: N * 2,
            found: payload.len(),
        });
    }

    let mut bytes = [0u8; N];
    for (i, pair) in payload.chunks_exact(2).enumerate() {
        bytes[i] = (hex_digit(pair[0])? << 4) | hex_digit(pair[1])?;
    }
    Ok(bytes)
}

/// Convert a hex character to its value.
#[inline]
fn hex_digit(b: u8) -> Result<u8, ParseError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        _ => Err(ParseError::HexDecode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_idle() {
        let event = parse_report(b"00000000", ReportLayout::Boot).unwrap();
        assert_eq!(event, MouseEvent::idle());
    }

    #[test]
    fn test_boot_buttons_and_motion() {
        let event = parse_report(b"0105FB00", ReportLayout::Boot).unwrap();
        assert_eq!(event.buttons, ButtonMask::LEFT);
        assert_eq!(event.dx, 5);
        assert_eq!(event.dy, -5);
        assert_eq!(event.wheel, 0);
    }

    #[test]
    fn test_boot_negative_extremes() {
        // dx = 0x80 = -128, dy = 0x7F = 127, wheel = 0xFF = -1
        let event = parse_report(b"00807FFF", ReportLayout::Boot).unwrap();
        assert_eq!(event.dx, -128);
        assert_eq!(event.dy, 127);
        assert_eq!(event.wheel, -1);
    }

    #[test]
    fn test_boot_lowercase_hex() {
        let upper = parse_report(b"070AF6FF", ReportLayout::Boot).unwrap();
        let lower = parse_report(b"070af6ff", ReportLayout::Boot).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_boot_rejects_bad_digit() {
        assert_eq!(
            parse_report(b"0000g000", ReportLayout::Boot),
            Err(ParseError::HexDecode)
        );
        // Whitespace is not hex either
        assert_eq!(
            parse_report(b"00 00 00", ReportLayout::Boot),
            Err(ParseError::HexDecode)
        );
    }

    #[test]
    fn test_boot_rejects_wrong_length() {
        assert_eq!(
            parse_report(b"000000", ReportLayout::Boot),
            Err(ParseError::LengthMismatch {
                expected: 8,
                found: 6
            })
        );
        // An extended-sized payload is not sniffed into the other layout
        assert_eq!(
            parse_report(b"000000000000000000", ReportLayout::Boot),
            Err(ParseError::LengthMismatch {
                expected: 8,
                found: 18
            })
        );
    }

    #[test]
    fn test_extended_idle() {
        let event = parse_report(b"000000000000000000", ReportLayout::Extended).unwrap();
        assert_eq!(event, MouseEvent::idle());
    }

    #[test]
    fn test_extended_le_deltas() {
        // dx = 0x012C = 300, dy = 0xFFF6 = -10
        let event = parse_report(b"002C01F6FF01050000", ReportLayout::Extended).unwrap();
        assert_eq!(event.dx, 300);
        assert_eq!(event.dy, -10);
        assert_eq!(event.buttons, ButtonMask::LEFT);
        assert_eq!(event.wheel, 5);
    }

    #[test]
    fn test_extended_i16_extremes() {
        // [0xFF, 0x7F] -> 32767
        let event = parse_report(b"00FF7F000000000000", ReportLayout::Extended).unwrap();
        assert_eq!(event.dx, 32767);

        // [0x00, 0x80] -> -32768
        let event = parse_report(b"000080000000000000", ReportLayout::Extended).unwrap();
        assert_eq!(event.dx, -32768);
    }

    #[test]
    fn test_extended_ignores_reserved_bytes() {
        let a = parse_report(b"AA0A00F6FF02010000", ReportLayout::Extended).unwrap();
        let b = parse_report(b"000A00F6FF0201AABB", ReportLayout::Extended).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.dx, 10);
        assert_eq!(a.dy, -10);
        assert_eq!(a.buttons, ButtonMask::RIGHT);
        assert_eq!(a.wheel, 1);
    }

    #[test]
    fn test_extended_rejects_boot_length() {
        assert_eq!(
            parse_report(b"01050000", ReportLayout::Extended),
            Err(ParseError::LengthMismatch {
                expected: 18,
                found: 8
            })
        );
    }

    #[test]
    fn test_layout_hex_len() {
        assert_eq!(ReportLayout::Boot.hex_len(), BOOT_HEX_LEN);
        assert_eq!(ReportLayout::Extended.hex_len(), EXTENDED_HEX_LEN);
    }
}
