//! Reply tokens written back over the UART control channel.

/// Reply to a processed command.
///
/// Each reply is a single token; the serial link appends the line
/// terminator. Failed `HID:` decodes and blank lines get no reply at
/// all, so there is no variant for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum Reply {
    /// Report decoded and forwarded.
    HidProcessed,
    /// Answer to `ping`.
    Pong,
    /// `led_on` acknowledged.
    LedOnOk,
    /// `led_off` acknowledged.
    LedOffOk,
    /// `status` answer while the LED is on.
    StatusLedOn,
    /// `status` answer while the LED is off.
    StatusLedOff,
    /// Answer to `test`.
    TestOk,
    /// Answer to the `phase5_start` handshake.
    SessionReady,
    /// Answer to the `INIT:PHASE5` handshake.
    SessionAck,
    /// Line did not match any command.
    UnknownCommand,
}

impl Reply {
    /// The wire token for this reply, terminator excluded.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Reply::HidProcessed => "hid_processed",
            Reply::Pong => "pong",
            Reply::LedOnOk => "led_on_ok",
            Reply::LedOffOk => "led_off_ok",
            Reply::StatusLedOn => "led_on",
            Reply::StatusLedOff => "led_off",
            Reply::TestOk => "test_ok",
            Reply::SessionReady => "phase5_ready",
            Reply::SessionAck => "ack_phase5",
            Reply::UnknownCommand => "unknown_command",
        }
    }

    /// The wire token as bytes.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        self.as_str().as_bytes()
    }
}
