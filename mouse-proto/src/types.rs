//! Core mouse types: ButtonMask, MouseButton, MouseEvent.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Mouse button state as a bitfield, matching the wire encoding.
///
/// The bit layout follows the USB HID boot mouse convention: bit 0 is
/// left, bit 1 is right, bit 2 is middle. Bits 3 and 4 carry the side
/// buttons on mice that report them; bits 5-7 are unused.
///
/// # Example
///
/// ```
/// use mouse_proto::ButtonMask;
///
/// let mask = ButtonMask::LEFT | ButtonMask::MIDDLE;
/// assert!(mask.contains(ButtonMask::LEFT));
/// assert!(mask.contains(ButtonMask::MIDDLE));
/// assert!(!mask.contains(ButtonMask::RIGHT));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMask(pub u8);

impl ButtonMask {
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const MIDDLE: Self = Self(1 << 2);
    pub const BACK: Self = Self(1 << 3); // Side button
    pub const FORWARD: Self = Self(1 << 4); // Side button

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// The bits the USB output report carries (left, right, middle).
    pub const REPORTABLE: Self = Self(0b0000_0111);

    /// Check if the given button bit(s) are set.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: ButtonMask) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Set or clear button bit(s).
    #[inline]
    pub fn set(&mut self, button: ButtonMask, pressed: bool) {
        if pressed {
            self.0 |= button.0;
        } else {
            self.0 &= !button.0;
        }
    }

    /// Get the raw u8 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Check if no buttons are pressed.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ButtonMask {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ButtonMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ButtonMask {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for ButtonMask {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for ButtonMask {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

/// A single mouse button, used when reporting press/release edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// All buttons, in wire bit order.
    pub const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

    /// The wire/report bit for this button.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> ButtonMask {
        match self {
            MouseButton::Left => ButtonMask::LEFT,
            MouseButton::Right => ButtonMask::RIGHT,
            MouseButton::Middle => ButtonMask::MIDDLE,
        }
    }
}

/// One decoded input report: desired button state plus relative motion.
///
/// Deltas are widened to i16 so both wire layouts share a single type;
/// the 4-byte layout only ever produces values in [-128, 127].
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseEvent {
    pub buttons: ButtonMask,
    pub dx: i16,
    pub dy: i16,
    pub wheel: i8,
}

impl MouseEvent {
    /// Event with no buttons held and no motion.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            buttons: ButtonMask::NONE,
            dx: 0,
            dy: 0,
            wheel: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_bitwise_or() {
        let mask = ButtonMask::LEFT | ButtonMask::RIGHT;
        assert!(mask.contains(ButtonMask::LEFT));
        assert!(mask.contains(ButtonMask::RIGHT));
        assert!(!mask.contains(ButtonMask::MIDDLE));
    }

    #[test]
    fn test_mask_set_clear() {
        let mut mask = ButtonMask::NONE;
        mask.set(ButtonMask::MIDDLE, true);
        assert!(mask.contains(ButtonMask::MIDDLE));
        mask.set(ButtonMask::MIDDLE, false);
        assert!(!mask.contains(ButtonMask::MIDDLE));
        assert!(mask.is_empty());
    }

    #[test]
    fn test_button_to_mask() {
        assert_eq!(MouseButton::Left.mask(), ButtonMask::LEFT);
        assert_eq!(MouseButton::Right.mask(), ButtonMask::RIGHT);
        assert_eq!(MouseButton::Middle.mask(), ButtonMask::MIDDLE);
    }

    #[test]
    fn test_all_buttons_cover_reportable() {
        let mut mask = ButtonMask::NONE;
        for button in MouseButton::ALL {
            mask |= button.mask();
        }
        assert_eq!(mask, ButtonMask::REPORTABLE);
    }

    #[test]
    fn test_reportable_excludes_side_buttons() {
        assert!(ButtonMask::REPORTABLE.contains(ButtonMask::LEFT));
        assert!(ButtonMask::REPORTABLE.contains(ButtonMask::RIGHT));
        assert!(ButtonMask::REPORTABLE.contains(ButtonMask::MIDDLE));
        assert!(!ButtonMask::REPORTABLE.contains(ButtonMask::BACK));
        assert!(!ButtonMask::REPORTABLE.contains(ButtonMask::FORWARD));
    }

    #[test]
    fn test_idle_event() {
        let event = MouseEvent::idle();
        assert_eq!(event, MouseEvent::default());
        assert!(event.buttons.is_empty());
    }
}
