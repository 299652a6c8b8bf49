//! Output sink trait and error types.

use core::future::Future;
use mouse_proto::MouseButton;

/// Error type for output operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// USB/communication I/O error.
    Io,
    /// Device not ready (e.g., USB not enumerated).
    NotReady,
}

/// Async trait for mouse output sinks.
///
/// This trait abstracts the destination for mouse events, enabling
/// different output methods (USB HID, BLE HID, test recorders).
///
/// Button state is delivered as press/release edges; the sink is
/// responsible for keeping pressed buttons asserted across moves so
/// drags hold.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap
/// allocation.
pub trait MouseSink {
    /// Assert a button.
    fn press(&mut self, button: MouseButton) -> impl Future<Output = Result<(), OutputError>>;

    /// Release a button.
    fn release(&mut self, button: MouseButton) -> impl Future<Output = Result<(), OutputError>>;

    /// Move the pointer and/or scroll the wheel by one report's worth.
    ///
    /// May block until the previous report has been sent.
    fn mouse_move(
        &mut self,
        dx: i8,
        dy: i8,
        wheel: i8,
    ) -> impl Future<Output = Result<(), OutputError>>;

    /// Check if the output is ready to accept events.
    fn is_ready(&self) -> bool;
}
