//! MouseBridge: turns framed command lines into sink calls and replies.

use mouse_proto::{parse_command, Command, MouseEvent, ParseError, Reply};

use crate::chunker::emit_motion;
use crate::config::BridgeConfig;
use crate::diff::{wire_buttons, ButtonTracker};
use crate::output::{MouseSink, OutputError};

/// Session engine for the command channel.
///
/// Owns the output sink, the button tracker, and the logical LED, and
/// processes one framed line at a time. The caller (usually the serial
/// link task) writes the returned reply back to the host.
///
/// # Error Handling
///
/// Errors never produce a reply on the wire: a report that fails to
/// decode and a sink write that fails are both reported to the caller
/// for logging, and the host simply does not see an acknowledgment.
pub struct MouseBridge<S> {
    sink: S,
    tracker: ButtonTracker,
    config: BridgeConfig,
    led_on: bool,
    session_active: bool,
}

impl<S: MouseSink> MouseBridge<S> {
    /// Create a bridge around an output sink.
    pub fn new(sink: S, config: BridgeConfig) -> Self {
        Self {
            sink,
            tracker: ButtonTracker::new(),
            config,
            led_on: false,
            session_active: false,
        }
    }

    /// Handle one framed line, without its terminator.
    ///
    /// Returns the reply to write back, or `None` for lines that get no
    /// reply (blank lines).
    pub async fn handle_line(&mut self, line: &[u8]) -> Result<Option<Reply>, BridgeError> {
        let command = parse_command(line, self.config.layout).map_err(BridgeError::Report)?;
        self.handle_command(command).await
    }

    async fn handle_command(&mut self, command: Command) -> Result<Option<Reply>, BridgeError> {
        let reply = match command {
            Command::Empty => None,
            Command::Report(event) => {
                self.forward_report(event)
                    .await
                    .map_err(BridgeError::Output)?;
                Some(Reply::HidProcessed)
            }
            Command::SessionStart => {
                self.session_active = true;
                self.led_on = true;
                Some(Reply::SessionReady)
            }
            Command::SessionInit => {
                self.session_active = true;
                self.led_on = true;
                Some(Reply::SessionAck)
            }
            Command::Ping => Some(Reply::Pong),
            Command::LedOn => {
                self.led_on = true;
                Some(Reply::LedOnOk)
            }
            Command::LedOff => {
                self.led_on = false;
                Some(Reply::LedOffOk)
            }
            Command::Status => Some(if self.led_on {
                Reply::StatusLedOn
            } else {
                Reply::StatusLedOff
            }),
            Command::SelfTest => Some(Reply::TestOk),
            Command::Unknown => Some(Reply::UnknownCommand),
        };
        Ok(reply)
    }

    /// Forward one decoded report: button edges first, then motion.
    async fn forward_report(&mut self, event: MouseEvent) -> Result<(), OutputError> {
        let next = event.buttons;
        // Track before emitting; a failed send must not leave the next
        // diff running against a mask the host has already replaced
        let changed = self.tracker.update(next);

        for (mask, button) in wire_buttons(&self.config) {
            if !changed.contains(mask) {
                continue;
            }
            // Unmapped side buttons change nothing downstream
            let Some(button) = button else { continue };
            if next.contains(mask) {
                self.sink.press(button).await?;
            } else {
                self.sink.release(button).await?;
            }
        }

        emit_motion(&mut self.sink, event.dx, event.dy, event.wheel).await
    }

    /// Logical LED state, as answered by `status`.
    ///
    /// The firmware mirrors this to the board LED after every command.
    #[inline]
    #[must_use]
    pub const fn led_on(&self) -> bool {
        self.led_on
    }

    /// True once the host has announced itself with either handshake.
    ///
    /// Stays set for the lifetime of the bridge; `led_off` does not end
    /// the session.
    #[inline]
    #[must_use]
    pub const fn session_active(&self) -> bool {
        self.session_active
    }

    /// Get a reference to the output sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Error type for bridge operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError {
    /// The line carried a report that failed to decode.
    Report(ParseError),
    /// The output sink rejected an event.
    Output(OutputError),
}
