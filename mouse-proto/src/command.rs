//! Command grammar for the UART control channel.
//!
//! Every command is a single line. Besides the `HID:` report carrier
//! the vocabulary is a handful of fixed tokens: two session handshakes
//! and the diagnostic commands kept from the original serial console.

use crate::report::{parse_report, ParseError, ReportLayout};
use crate::types::MouseEvent;

/// Prefix of a hex-encoded report line.
pub const HID_PREFIX: &[u8] = b"HID:";

/// One decoded command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum Command {
    /// Blank line. Ignored, no reply.
    Empty,
    /// `phase5_start` session handshake.
    SessionStart,
    /// `INIT:PHASE5` session handshake (alternate form).
    SessionInit,
    /// `HID:<hex>` input report.
    Report(MouseEvent),
    /// `ping` liveness check.
    Ping,
    /// `led_on` diagnostic.
    LedOn,
    /// `led_off` diagnostic.
    LedOff,
    /// `status` LED state query.
    Status,
    /// `test` self-test.
    SelfTest,
    /// Anything else. Answered but otherwise ignored.
    Unknown,
}

/// Parse one framed line into a [`Command`].
///
/// Surrounding ASCII whitespace is trimmed first, which also strips the
/// CR left behind by CRLF hosts. Token matching is exact and
/// case-sensitive; near-misses come back as [`Command::Unknown`].
///
/// A `HID:` line whose payload fails to decode is an error, not an
/// unknown command: the caller drops the report without replying.
pub fn parse_command(line: &[u8], layout: ReportLayout) -> Result<Command, ParseError> {
    let line = line.trim_ascii();

    if line.is_empty() {
        return Ok(Command::Empty);
    }

    if let Some(payload) = line.strip_prefix(HID_PREFIX) {
        return parse_report(payload, layout).map(Command::Report);
    }

    Ok(match line {
        b"phase5_start" => Command::SessionStart,
        b"INIT:PHASE5" => Command::SessionInit,
        b"ping" => Command::Ping,
        b"led_on" => Command::LedOn,
        b"led_off" => Command::LedOff,
        b"status" => Command::Status,
        b"test" => Command::SelfTest,
        _ => Command::Unknown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ButtonMask;

    const LAYOUT: ReportLayout = ReportLayout::Boot;

    #[test]
    fn test_fixed_tokens() {
        assert_eq!(parse_command(b"ping", LAYOUT), Ok(Command::Ping));
        assert_eq!(parse_command(b"led_on", LAYOUT), Ok(Command::LedOn));
        assert_eq!(parse_command(b"led_off", LAYOUT), Ok(Command::LedOff));
        assert_eq!(parse_command(b"status", LAYOUT), Ok(Command::Status));
        assert_eq!(parse_command(b"test", LAYOUT), Ok(Command::SelfTest));
        assert_eq!(
            parse_command(b"phase5_start", LAYOUT),
            Ok(Command::SessionStart)
        );
        assert_eq!(
            parse_command(b"INIT:PHASE5", LAYOUT),
            Ok(Command::SessionInit)
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(parse_command(b"ping\r", LAYOUT), Ok(Command::Ping));
        assert_eq!(parse_command(b"  ping  ", LAYOUT), Ok(Command::Ping));
        assert_eq!(parse_command(b"\tled_on\r", LAYOUT), Ok(Command::LedOn));
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(parse_command(b"", LAYOUT), Ok(Command::Empty));
        assert_eq!(parse_command(b"   ", LAYOUT), Ok(Command::Empty));
        assert_eq!(parse_command(b"\r", LAYOUT), Ok(Command::Empty));
    }

    #[test]
    fn test_matching_is_exact() {
        assert_eq!(parse_command(b"PING", LAYOUT), Ok(Command::Unknown));
        assert_eq!(parse_command(b"pingg", LAYOUT), Ok(Command::Unknown));
        assert_eq!(parse_command(b"led on", LAYOUT), Ok(Command::Unknown));
        assert_eq!(parse_command(b"phase5", LAYOUT), Ok(Command::Unknown));
    }

    #[test]
    fn test_hid_report_line() {
        let cmd = parse_command(b"HID:0105FB00", LAYOUT).unwrap();
        match cmd {
            Command::Report(event) => {
                assert_eq!(event.buttons, ButtonMask::LEFT);
                assert_eq!(event.dx, 5);
                assert_eq!(event.dy, -5);
            }
            other => panic!("expected report, got {:?}", other),
        }
    }

    #[test]
    fn test_hid_report_respects_layout() {
        let line = b"HID:002C01F6FF01050000";
        assert!(matches!(
            parse_command(line, ReportLayout::Extended),
            Ok(Command::Report(_))
        ));
        assert_eq!(
            parse_command(line, ReportLayout::Boot),
            Err(ParseError::LengthMismatch {
                expected: 8,
                found: 18
            })
        );
    }

    #[test]
    fn test_bad_hid_payload_is_an_error_not_unknown() {
        assert_eq!(
            parse_command(b"HID:zz000000", LAYOUT),
            Err(ParseError::HexDecode)
        );
        assert_eq!(
            parse_command(b"HID:", LAYOUT),
            Err(ParseError::LengthMismatch {
                expected: 8,
                found: 0
            })
        );
    }

    #[test]
    fn test_hid_prefix_is_case_sensitive() {
        assert_eq!(parse_command(b"hid:00000000", LAYOUT), Ok(Command::Unknown));
    }
}
