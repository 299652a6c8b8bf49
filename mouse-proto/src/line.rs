//! Newline-delimited framing for the UART command stream.
//!
//! Bytes arrive one at a time from the UART driver; [`LineAccumulator`]
//! collects them until a `\n` terminator and hands back the completed
//! line. A partial line is not an error, it simply stays buffered until
//! the terminator shows up.

use heapless::Vec;

/// Maximum accepted line length, terminator excluded.
///
/// The longest well-formed command is `HID:` plus 18 hex characters and
/// an optional CR; 64 leaves generous headroom for future commands.
pub const MAX_LINE_LENGTH: usize = 64;

/// Framing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded [`MAX_LINE_LENGTH`] and was discarded.
    Overflow,
}

/// Accumulates bytes into newline-terminated lines.
///
/// A line longer than [`MAX_LINE_LENGTH`] is swallowed up to its
/// terminator and reported once as [`LineError::Overflow`], so one
/// runaway line cannot corrupt the commands that follow it.
pub struct LineAccumulator {
    buf: Vec<u8, MAX_LINE_LENGTH>,
    /// Overflowed; swallowing bytes until the next terminator.
    discarding: bool,
    /// Last push completed a line; the next push starts a fresh one.
    complete: bool,
}

impl LineAccumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            discarding: false,
            complete: false,
        }
    }

    /// Feed one byte.
    ///
    /// Returns `Ok(Some(line))` when `byte` completes a line. The slice
    /// excludes the terminator and stays valid until the next `push`;
    /// [`line`](Self::line) returns the same bytes for callers that
    /// cannot hold the borrow.
    pub fn push(&mut self, byte: u8) -> Result<Option<&[u8]>, LineError> {
        if self.complete {
            self.buf.clear();
            self.complete = false;
        }

        if self.discarding {
            if byte == b'\n' {
                self.discarding = false;
                return Err(LineError::Overflow);
            }
            return Ok(None);
        }

        if byte == b'\n' {
            self.complete = true;
            return Ok(Some(&self.buf));
        }

        if self.buf.push(byte).is_err() {
            // Swallow the rest of the line; report once at the terminator
            self.buf.clear();
            self.discarding = true;
        }

        Ok(None)
    }

    /// The most recently completed line.
    ///
    /// Only meaningful directly after [`push`](Self::push) returned
    /// `Ok(Some(_))`.
    #[inline]
    #[must_use]
    pub fn line(&self) -> &[u8] {
        &self.buf
    }

    /// Drop any partially accumulated line and reset framing state.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.discarding = false;
        self.complete = false;
    }
}

impl Default for LineAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
