//! UART command link: framed lines in, reply tokens out.
//!
//! Accumulates newline-terminated command lines from the UART receiver
//! and writes reply tokens back on the transmit side. Line framing
//! lives in [`mouse_proto::LineAccumulator`]; this module only moves
//! bytes.
//!
//! # Pins
//!
//! Uses UART1 by default:
//! - GPIO 8: TX (replies to the host)
//! - GPIO 9: RX (command lines from the host)
//! - GPIO 10: CTS (optional, with `uart-flow-control` feature)
//! - GPIO 11: RTS (optional, with `uart-flow-control` feature)

use defmt::Format;
use embassy_rp::uart::{Async, Error as UartError, UartRx, UartTx};
use mouse_proto::{LineAccumulator, LineError, Reply};

/// Errors surfaced by the serial link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum LinkError {
    /// UART framing error (baud mismatch or line noise).
    Framing,
    /// Hardware FIFO overrun, or a line longer than the accumulator.
    Overflow,
    /// Any other UART transfer failure.
    Io,
}

impl From<UartError> for LinkError {
    fn from(e: UartError) -> Self {
        match e {
            UartError::Framing => LinkError::Framing,
            UartError::Overrun => LinkError::Overflow,
            _ => LinkError::Io,
        }
    }
}

/// Bidirectional line-framed command link over UART.
pub struct SerialLink<'d> {
    rx: UartRx<'d, Async>,
    tx: UartTx<'d, Async>,
    acc: LineAccumulator,
}

impl<'d> SerialLink<'d> {
    /// Create a new link from a split UART.
    #[must_use]
    pub fn new(rx: UartRx<'d, Async>, tx: UartTx<'d, Async>) -> Self {
        Self {
            rx,
            tx,
            acc: LineAccumulator::new(),
        }
    }

    /// Read bytes until a full line has been accumulated.
    ///
    /// On success the line is available through [`line`](Self::line)
    /// until the next read. An oversized line is discarded up to its
    /// terminator and reported as [`LinkError::Overflow`]. A transfer
    /// error drops any partial line, since bytes may have been lost.
    pub async fn read_line(&mut self) -> Result<(), LinkError> {
        let mut byte = [0u8; 1];

        loop {
            if let Err(e) = self.rx.read(&mut byte).await {
                self.acc.clear();
                return Err(LinkError::from(e));
            }

            match self.acc.push(byte[0]) {
                Ok(Some(_)) => return Ok(()),
                Ok(None) => {}
                Err(LineError::Overflow) => return Err(LinkError::Overflow),
            }
        }
    }

    /// The last complete line, without its terminator.
    #[inline]
    #[must_use]
    pub fn line(&self) -> &[u8] {
        self.acc.line()
    }

    /// Write one reply token followed by a newline.
    pub async fn send_reply(&mut self, reply: Reply) -> Result<(), LinkError> {
        self.tx.write(reply.as_bytes()).await?;
        self.tx.write(b"\n").await?;
        Ok(())
    }
}
