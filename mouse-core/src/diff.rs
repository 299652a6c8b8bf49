//! Button edge detection.
//!
//! The wire carries absolute button state in every report; the output
//! side wants press/release edges. XOR against the previously commanded
//! mask finds the bits that changed.

use mouse_proto::{ButtonMask, MouseButton};

use crate::config::BridgeConfig;

/// Tracks the last commanded button mask.
pub struct ButtonTracker {
    current: ButtonMask,
}

impl ButtonTracker {
    /// Create a tracker with no buttons held.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: ButtonMask::NONE,
        }
    }

    /// Replace the tracked mask with `next`, returning the changed bits.
    ///
    /// The replacement is unconditional. A caller that fails partway
    /// through emitting the edges still diffs the following report
    /// against `next`, not against the mask it failed to deliver.
    pub fn update(&mut self, next: ButtonMask) -> ButtonMask {
        let changed = ButtonMask(self.current.raw() ^ next.raw());
        self.current = next;
        changed
    }

    /// The last commanded mask.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> ButtonMask {
        self.current
    }
}

impl Default for ButtonTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire bit to output button mapping for one bridge config.
///
/// Entries are in wire bit order. Left, right and middle are fixed;
/// the side-button bits forward to whatever the config maps them to,
/// or nothing.
#[must_use]
pub fn wire_buttons(config: &BridgeConfig) -> [(ButtonMask, Option<MouseButton>); 5] {
    [
        (ButtonMask::LEFT, Some(MouseButton::Left)),
        (ButtonMask::RIGHT, Some(MouseButton::Right)),
        (ButtonMask::MIDDLE, Some(MouseButton::Middle)),
        (ButtonMask::BACK, config.side_buttons[0]),
        (ButtonMask::FORWARD, config.side_buttons[1]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG;

    #[test]
    fn test_first_report_presses() {
        let mut tracker = ButtonTracker::new();
        let changed = tracker.update(ButtonMask::LEFT);
        assert_eq!(changed, ButtonMask::LEFT);
        assert_eq!(tracker.current(), ButtonMask::LEFT);
    }

    #[test]
    fn test_unchanged_mask_yields_no_edges() {
        let mut tracker = ButtonTracker::new();
        tracker.update(ButtonMask::LEFT);
        let changed = tracker.update(ButtonMask::LEFT);
        assert!(changed.is_empty());
    }

    #[test]
    fn test_release_and_press_in_one_report() {
        let mut tracker = ButtonTracker::new();
        tracker.update(ButtonMask::LEFT);
        // Left goes up, right goes down, both edges in one diff
        let changed = tracker.update(ButtonMask::RIGHT);
        assert!(changed.contains(ButtonMask::LEFT));
        assert!(changed.contains(ButtonMask::RIGHT));
        assert!(!changed.contains(ButtonMask::MIDDLE));
    }

    #[test]
    fn test_update_is_unconditional() {
        let mut tracker = ButtonTracker::new();
        tracker.update(ButtonMask::LEFT | ButtonMask::MIDDLE);
        assert_eq!(tracker.current(), ButtonMask::LEFT | ButtonMask::MIDDLE);
        tracker.update(ButtonMask::NONE);
        assert_eq!(tracker.current(), ButtonMask::NONE);
    }

    #[test]
    fn test_default_map_drops_side_buttons() {
        let map = wire_buttons(&DEFAULT_CONFIG);
        assert_eq!(map[0], (ButtonMask::LEFT, Some(MouseButton::Left)));
        assert_eq!(map[3], (ButtonMask::BACK, None));
        assert_eq!(map[4], (ButtonMask::FORWARD, None));
    }

    #[test]
    fn test_mapped_side_button() {
        let config = BridgeConfig {
            side_buttons: [Some(MouseButton::Middle), None],
            ..DEFAULT_CONFIG
        };
        let map = wire_buttons(&config);
        assert_eq!(map[3], (ButtonMask::BACK, Some(MouseButton::Middle)));
    }
}
