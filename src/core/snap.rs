use crate::core::alignment_error::{AlignmentError, AlignmentResult};

/// The two capabilities the build tool exposes for steering a hologram:
/// reading the absolute scroll yaw in degrees and advancing rotation by a
/// signed number of discrete scroll steps. Scrolling is the only externally
/// observable effect alignment triggers.
pub trait ScrollRotate {
    fn scroll_rotate_value(&self) -> i32;
    fn scroll(&mut self, count: i32);
}

/// Signed number of scroll steps that moves `current_yaw` to the nearest
/// reachable match of `desired_yaw` at `degrees_per_scroll` per step.
///
/// The difference is taken raw, not normalized into ±180; yaw values
/// accumulated by the tool can sit outside [0, 360) and the wrapping of the
/// hologram's own yaw makes large counts land on the equivalent angle.
/// Truncating division keeps the remainder on the same side as the
/// difference, and a remainder of exactly half a step stays put.
pub fn resolve_scroll_count(desired_yaw: i32, current_yaw: i32, degrees_per_scroll: i32) -> i32 {
    let diff = desired_yaw - current_yaw;
    let mut count = diff / degrees_per_scroll;
    let remainder = diff % degrees_per_scroll;

    if remainder > degrees_per_scroll / 2 {
        count += 1;
    } else if remainder < -(degrees_per_scroll / 2) {
        count -= 1;
    }

    count
}

/// Outcome of a probe scroll: the measured step, and the yaw after the probe.
/// The probe stays applied and counts toward the final resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasuredScroll {
    pub degrees_per_scroll: i32,
    pub current_yaw: i32,
}

/// Measure how far one scroll step rotates, for holograms that do not report
/// their rotation step. Performs exactly one scroll and reads the yaw back.
///
/// A probe that produces no rotation is undone with a single inverse scroll
/// and reported as [`AlignmentError::DegenerateStepSize`], leaving the
/// hologram as it was.
pub fn measure_degrees_per_scroll<R: ScrollRotate>(
    rotator: &mut R,
    yaw_before: i32,
) -> AlignmentResult<MeasuredScroll> {
    rotator.scroll(1);
    let yaw_after = rotator.scroll_rotate_value();

    let mut degrees_per_scroll = yaw_after - yaw_before;
    if degrees_per_scroll < 0 {
        // Started in the positive range and wrapped into the negative.
        degrees_per_scroll += 360;
    }

    if degrees_per_scroll == 0 {
        rotator.scroll(-1);
        return Err(AlignmentError::DegenerateStepSize);
    }

    Ok(MeasuredScroll {
        degrees_per_scroll,
        current_yaw: yaw_after,
    })
}

/// Scroll `rotator` so its yaw best matches `desired_yaw`.
///
/// `reported_step` is the rotation step the hologram claims; 0 means unknown,
/// in which case the step is measured with a probe scroll first. Returns the
/// scroll count that was applied after any probe (0 means the rotation was
/// already aligned and nothing was scrolled).
pub fn align_to_yaw<R: ScrollRotate>(
    rotator: &mut R,
    desired_yaw: i32,
    reported_step: i32,
) -> AlignmentResult<i32> {
    let mut current_yaw = rotator.scroll_rotate_value();
    let mut degrees_per_scroll = reported_step;

    if degrees_per_scroll == 0 {
        let measured = measure_degrees_per_scroll(rotator, current_yaw)?;
        degrees_per_scroll = measured.degrees_per_scroll;
        current_yaw = measured.current_yaw;
    }

    let count = resolve_scroll_count(desired_yaw, current_yaw, degrees_per_scroll);
    if count != 0 {
        rotator.scroll(count);
    }

    Ok(count)
}
