//! UART line protocol, command grammar, and HID report decoding for the
//! mouse bridge.
//!
//! The host streams newline-terminated ASCII commands over UART. Most
//! traffic is hex-encoded HID mouse reports; the rest is a small fixed
//! vocabulary of handshake and diagnostic tokens.
//!
//! This crate covers the wire level only:
//!
//! - [`LineAccumulator`] - byte-at-a-time newline framing
//! - [`parse_command`] / [`Command`] - command dispatch
//! - [`parse_report`] / [`ReportLayout`] - hex report decoding
//! - [`Reply`] - reply tokens
//! - [`MouseEvent`], [`ButtonMask`], [`MouseButton`] - decoded values
//!
//! # Protocol Format
//!
//! ```text
//! HID:<hex>\n       hex-encoded mouse report (8 or 18 hex chars)
//! phase5_start\n    session handshake        -> phase5_ready
//! INIT:PHASE5\n     session handshake        -> ack_phase5
//! ping\n            liveness check           -> pong
//! led_on\n          LED diagnostic           -> led_on_ok
//! led_off\n         LED diagnostic           -> led_off_ok
//! status\n          LED state query          -> led_on | led_off
//! test\n            self-test                -> test_ok
//! ```
//!
//! A successfully decoded report is acknowledged with `hid_processed`;
//! a report that fails to decode is dropped without a reply. Any other
//! non-empty line is answered with `unknown_command`.
//!
//! # Example
//!
//! ```
//! use mouse_proto::{parse_command, ButtonMask, Command, ReportLayout};
//!
//! let cmd = parse_command(b"HID:0105FB00", ReportLayout::Boot).unwrap();
//! if let Command::Report(event) = cmd {
//!     assert_eq!(event.buttons, ButtonMask::LEFT);
//!     assert_eq!(event.dx, 5);
//!     assert_eq!(event.dy, -5);
//! }
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod command;
pub mod line;
pub mod report;
pub mod reply;
pub mod types;

// Re-export types at crate root for convenience
pub use command::{parse_command, Command, HID_PREFIX};
pub use line::{LineAccumulator, LineError, MAX_LINE_LENGTH};
pub use reply::Reply;
pub use report::{parse_report, ParseError, ReportLayout, BOOT_HEX_LEN, EXTENDED_HEX_LEN};
pub use types::{ButtonMask, MouseButton, MouseEvent};
