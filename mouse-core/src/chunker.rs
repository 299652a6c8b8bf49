//! Motion splitting for single-report deltas.
//!
//! Wire deltas are i16 but a move report only carries i8 per axis, so
//! one report can demand more motion than one move can express. The
//! chunker walks the remainder down in maximal steps.

use crate::output::{MouseSink, OutputError};

/// Iterator over the `(dx, dy, wheel)` moves one motion event expands
/// into.
///
/// Each step takes the largest move toward the remaining delta that a
/// report field can carry; the wheel rides on the first step only. An
/// event with no motion expands into no steps at all.
pub struct MotionSteps {
    rem_x: i16,
    rem_y: i16,
    wheel: i8,
}

impl MotionSteps {
    /// Plan the steps for one motion event.
    #[must_use]
    pub fn new(dx: i16, dy: i16, wheel: i8) -> Self {
        Self {
            rem_x: dx,
            rem_y: dy,
            // The report declares a [-127, 127] range, so i8::MIN
            // loses one notch
            wheel: wheel.max(-127),
        }
    }
}

impl Iterator for MotionSteps {
    type Item = (i8, i8, i8);

    fn next(&mut self) -> Option<Self::Item> {
        let step_x = clamp_step(self.rem_x);
        let step_y = clamp_step(self.rem_y);
        let step_w = self.wheel;

        if step_x == 0 && step_y == 0 && step_w == 0 {
            return None;
        }

        self.rem_x -= step_x as i16;
        self.rem_y -= step_y as i16;
        self.wheel = 0;

        Some((step_x, step_y, step_w))
    }
}

/// Largest single-report step toward `remaining`.
#[inline]
fn clamp_step(remaining: i16) -> i8 {
    remaining.clamp(-127, 127) as i8
}

/// Forward one motion event to the sink, splitting oversized deltas.
///
/// Stops at the first sink error; steps already sent stay sent.
pub async fn emit_motion<S: MouseSink>(
    sink: &mut S,
    dx: i16,
    dy: i16,
    wheel: i8,
) -> Result<(), OutputError> {
    for (step_x, step_y, step_w) in MotionSteps::new(dx, dy, wheel) {
        sink.mouse_move(step_x, step_y, step_w).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;
    use std::vec::Vec;

    use super::*;

    fn steps(dx: i16, dy: i16, wheel: i8) -> Vec<(i8, i8, i8)> {
        MotionSteps::new(dx, dy, wheel).collect()
    }

    #[test]
    fn test_small_motion_is_one_step() {
        assert_eq!(steps(5, -5, 0), vec![(5, -5, 0)]);
    }

    #[test]
    fn test_oversized_motion_splits() {
        assert_eq!(steps(300, -10, 5), vec![(127, -10, 5), (127, 0, 0), (46, 0, 0)]);
    }

    #[test]
    fn test_no_motion_no_steps() {
        assert_eq!(steps(0, 0, 0), vec![]);
    }

    #[test]
    fn test_wheel_only_is_one_step() {
        assert_eq!(steps(0, 0, 5), vec![(0, 0, 5)]);
        assert_eq!(steps(0, 0, -3), vec![(0, 0, -3)]);
    }

    #[test]
    fn test_wheel_rides_first_step_only() {
        let all = steps(400, 0, 2);
        assert_eq!(all[0].2, 2);
        assert!(all[1..].iter().all(|s| s.2 == 0));
    }

    #[test]
    fn test_axis_boundary_values() {
        assert_eq!(steps(127, 0, 0), vec![(127, 0, 0)]);
        assert_eq!(steps(-127, 0, 0), vec![(-127, 0, 0)]);
        assert_eq!(steps(128, 0, 0), vec![(127, 0, 0), (1, 0, 0)]);
        assert_eq!(steps(-128, 0, 0), vec![(-127, 0, 0), (-1, 0, 0)]);
    }

    #[test]
    fn test_i16_extremes_terminate() {
        let down: i16 = steps(32767, 0, 0).iter().map(|s| s.0 as i16).sum();
        assert_eq!(down, 32767);

        let up: i32 = steps(-32768, 0, 0).iter().map(|s| s.0 as i32).sum();
        assert_eq!(up, -32768);
    }

    #[test]
    fn test_wheel_min_is_clamped() {
        assert_eq!(steps(0, 0, i8::MIN), vec![(0, 0, -127)]);
    }

    #[test]
    fn test_axes_finish_independently() {
        // x needs three steps, y is done after the first
        assert_eq!(
            steps(300, 10, 0),
            vec![(127, 10, 0), (127, 0, 0), (46, 0, 0)]
        );
    }
}
