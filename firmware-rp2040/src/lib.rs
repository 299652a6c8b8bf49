//! UART to USB mouse bridge for RP2040.
//!
//! This crate provides the embedded implementation of a mouse bridge
//! that accepts text commands over UART and outputs a USB HID mouse.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and:
//! 1. Receives newline-terminated command lines over UART (115200 baud, 8N1)
//! 2. Decodes hex-encoded HID reports and diagnostic commands
//! 3. Emits press/release edges and chunked motion as a USB HID mouse
//! 4. Writes a reply token back over UART for each acknowledged command
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | UART1 TX | 8    | Replies to the host |
//! | UART1 RX | 9    | Command lines from the host |
//! | LED      | 25   | On-board LED (mirrors the logical LED flag) |
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime with three concurrent tasks:
//!
//! - **USB Task**: Manages the USB device stack
//! - **Link Task**: Reads UART lines, runs them through the bridge, writes replies
//! - **Heartbeat Task**: Logs a liveness line while a session is active
//!
//! Replies must stay in order with the commands that caused them, so the
//! link task owns both sides of the UART and the bridge; only the
//! session-active flag is shared with the heartbeat task.
//!
//! # Modules
//!
//! - [`serial_link`]: Line-framed UART command link ([`SerialLink`])
//! - [`usb_output`]: USB HID mouse output ([`UsbMouseOutput`], [`MouseReport`])
//! - [`config`]: Pin assignments, timing, and USB identity
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//! - **`layout-boot`** (default): Host sends 4-byte boot-style reports (8 hex chars)
//! - **`layout-extended`**: Host sends 9-byte extended reports (18 hex chars)
//! - **`uart-flow-control`**: Enable hardware flow control (CTS/RTS on GPIO 10/11)
//!
//! # Re-exports
//!
//! This crate re-exports the public items from [`mouse_core`] and
//! [`mouse_proto`] that the binary needs, so consumers only depend on
//! this crate.

#![no_std]

// Ensure exactly one report layout is selected
#[cfg(all(feature = "layout-boot", feature = "layout-extended"))]
compile_error!("Cannot enable both `layout-boot` and `layout-extended` features - the host sends exactly one report layout");

#[cfg(not(any(feature = "layout-boot", feature = "layout-extended")))]
compile_error!("Select a report layout: enable either the `layout-boot` or `layout-extended` feature");

// Re-export core types for convenience
pub use mouse_core::{
    BridgeConfig, BridgeError, MouseBridge, MouseSink, OutputError, DEFAULT_CONFIG,
};
pub use mouse_proto::{
    ButtonMask, Command, LineAccumulator, LineError, MouseButton, MouseEvent, ParseError, Reply,
    ReportLayout, MAX_LINE_LENGTH,
};

pub mod config;
pub mod serial_link;
pub mod usb_output;

pub use serial_link::{LinkError, SerialLink};
pub use usb_output::{configure_usb_hid, MouseReport, MouseRequestHandler, UsbMouseOutput};

/// Report layout selected at compile time.
///
/// The layout is fixed per build; the decoder never guesses from the
/// payload length.
#[cfg(feature = "layout-boot")]
pub const REPORT_LAYOUT: ReportLayout = ReportLayout::Boot;

/// Report layout selected at compile time.
///
/// The layout is fixed per build; the decoder never guesses from the
/// payload length.
#[cfg(feature = "layout-extended")]
pub const REPORT_LAYOUT: ReportLayout = ReportLayout::Extended;
