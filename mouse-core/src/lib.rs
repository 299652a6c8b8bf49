//! Platform-agnostic engine for the UART-to-USB mouse bridge.
//!
//! This crate turns framed command lines into mouse output, without any
//! platform-specific dependencies. It can be used both in embedded
//! `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! - [`config`]: Startup policy ([`BridgeConfig`]): report layout and
//!   side-button mapping
//! - [`output`]: Output sink trait ([`MouseSink`])
//! - [`diff`]: Button edge detection ([`ButtonTracker`])
//! - [`chunker`]: Motion splitting ([`MotionSteps`], [`emit_motion`])
//! - [`bridge`]: Session engine ([`MouseBridge`])
//!
//! # Data Flow
//!
//! ```text
//! line -> parse_command -> MouseBridge::handle_line
//!            |- button edges  -> MouseSink::press / release
//!            |- motion chunks -> MouseSink::mouse_move
//!            `- reply token   -> caller writes it back
//! ```
//!
//! The wire protocol itself (framing, grammar, hex decoding) lives in
//! `mouse-proto`; this crate decides what the decoded commands do.
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

pub mod bridge;
pub mod chunker;
pub mod config;
pub mod diff;
pub mod output;

// Re-export main types at crate root
pub use bridge::{BridgeError, MouseBridge};
pub use chunker::{emit_motion, MotionSteps};
pub use config::{BridgeConfig, DEFAULT_CONFIG};
pub use diff::{wire_buttons, ButtonTracker};
pub use output::{MouseSink, OutputError};

// The wire types travel with the engine's public API
pub use mouse_proto::{ButtonMask, MouseButton, MouseEvent, Reply, ReportLayout};
