//! Bridge policy configuration.
//!
//! The wire protocol leaves two things to the integrator: which report
//! layout the host sends, and what to do with the side-button bits.
//! Both are fixed at startup through [`BridgeConfig`].

use mouse_proto::{MouseButton, ReportLayout};

/// Bridge configuration for one session.
///
/// Customize this at compile-time by creating your own const.
#[derive(Debug, Clone, Copy)]
pub struct BridgeConfig {
    /// Report layout the host sends. Never auto-detected.
    pub layout: ReportLayout,
    /// Output buttons for wire bits 3 and 4 (back, forward).
    ///
    /// The output report only carries left/right/middle. `None` drops
    /// the side-button transition; `Some` forwards it as the given
    /// button.
    pub side_buttons: [Option<MouseButton>; 2],
}

/// Default configuration: boot-layout reports, side buttons dropped.
pub const DEFAULT_CONFIG: BridgeConfig = BridgeConfig {
    layout: ReportLayout::Boot,
    side_buttons: [None, None],
};

impl Default for BridgeConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}
