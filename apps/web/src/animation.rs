/// Scroll offset past which the back-to-top affordance shows.
pub const SCROLL_TOP_THRESHOLD: usize = 300;

const SCROLL_EASE_DIVISOR: usize = 4;

/// One easing step of the smooth scroll-to-top: a quarter of the remaining
/// distance per frame, at least one row, so the motion decelerates and
/// always reaches the target.
pub fn approach_scroll_target(offset: usize, target: usize) -> usize {
    if offset == target {
        return target;
    }

    let distance = offset.abs_diff(target);
    let step = (distance / SCROLL_EASE_DIVISOR).max(1);

    if offset > target {
        offset - step
    } else {
        offset + step
    }
}

/// Whether the affordance is visible at the given offset.
pub fn scroll_indicator_visible(offset: usize) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}
