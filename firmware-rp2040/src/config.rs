//! Application-wide constants and compile-time configuration.
//!
//! Hardware pin assignments, timing parameters, and USB identity live
//! here so they can be tuned in one place.

// UART

/// Command link baud rate (8N1).
pub const UART_BAUD: u32 = 115_200;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0001;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "uart-to-mouse";
pub const USB_PRODUCT: &str = "UART-to-Mouse Bridge";
pub const USB_SERIAL_NUMBER: &str = "001";

/// USB HID polling interval (ms). 1 ms = 1000 Hz for lowest latency.
pub const USB_HID_POLL_MS: u8 = 1;

// Timing

/// Interval between heartbeat log lines once a session is active (seconds).
pub const HEARTBEAT_SECS: u64 = 5;

// GPIO pin assignments (Raspberry Pi Pico defaults)
//
//   UART1 TX   → GPIO 8
//   UART1 RX   → GPIO 9
//   UART1 CTS  → GPIO 10 (with `uart-flow-control` feature)
//   UART1 RTS  → GPIO 11 (with `uart-flow-control` feature)
//   Status LED → GPIO 25 (on-board LED)
