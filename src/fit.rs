//! Constant-aspect-ratio fitting.
//!
//! Fits a box to a target aspect ratio (height:width) while keeping it
//! fully inside a frame, deviating as little as possible from where the
//! box started. The closed-form approach fails when the box already
//! touches a frame edge on a dimension that must also grow, so
//! [`rescale_shift_until_valid`] alternates between rescaling toward the
//! ratio around a chosen anchor and shifting the result back into frame.
//! Each retry pins one axis to its maximal extent, monotonically reducing
//! the remaining degrees of freedom; in practice the loop converges within
//! a few iterations.
//!
//! # Example
//!
//! ```
//! use boxfit::{BBox, Shape, fit};
//!
//! let frame = Shape::new(200.0, 200.0);
//! let fitted =
//!     fit::rescale_shift_until_valid(BBox::new(10.0, 10.0, 50.0, 30.0), frame, 1.0, 5)
//!         .unwrap();
//!
//! // A square centered on the original box's center, inside the frame.
//! assert_eq!(fitted, BBox::new(20.0, 10.0, 40.0, 30.0));
//! assert!(fitted.in_frame(frame));
//! ```

use crate::bbox::{Axis, BBox, FitError, Point, Shape};
use crate::interval::{Interval, ShiftOutcome};

/// Default retry budget for [`rescale_shift_until_valid`].
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Which edge, corner, or center of a box anchors a ratio rescale.
///
/// The anchor's relative position inside the box is preserved across the
/// rescale, so e.g. [`Anchor::CenterLeft`] keeps the left edge in place
/// while width is adjusted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Center,
    CenterTop,
    CenterBottom,
    CenterLeft,
    CenterRight,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Axis held fixed while the other is adjusted to reach the target ratio.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Held {
    /// Width stays; height becomes `width * ratio`.
    Width,
    /// Height stays; width becomes `height / ratio`.
    Height,
}

/// Anchor policy along the adjusted axis for single-shot rescales.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoldMode {
    /// Adjust symmetrically around the axis midpoint.
    Center,
    /// Keep the top/left end in place.
    Min,
    /// Keep the bottom/right end in place.
    Max,
}

/// How [`adjust_to_target_shape`] reaches the target ratio.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FitMethod {
    /// Iterative rescale/shift ([`rescale_shift_until_valid`]).
    Pad,
    /// Grow-first, shrink-if-needed ([`crop_scale`]).
    ConservativePad,
}

/// Target shape for a ratio rescale with one axis held.
fn target_shape(bbox: &BBox, target_ar: f64, held: Held) -> Shape {
    match held {
        Held::Width => Shape::new(bbox.width() * target_ar, bbox.width()),
        Held::Height => Shape::new(bbox.height(), bbox.height() / target_ar),
    }
}

/// The fixed point a given anchor selects on a box.
fn anchor_point(bbox: &BBox, anchor: Anchor) -> Point {
    let c = bbox.center();
    match anchor {
        Anchor::Center => c,
        Anchor::CenterTop => Point::new(c.x, bbox.ymin),
        Anchor::CenterBottom => Point::new(c.x, bbox.ymax),
        Anchor::CenterLeft => Point::new(bbox.xmin, c.y),
        Anchor::CenterRight => Point::new(bbox.xmax, c.y),
        Anchor::TopLeft => Point::new(bbox.xmin, bbox.ymin),
        Anchor::TopRight => Point::new(bbox.xmax, bbox.ymin),
        Anchor::BottomLeft => Point::new(bbox.xmin, bbox.ymax),
        Anchor::BottomRight => Point::new(bbox.xmax, bbox.ymax),
    }
}

/// Rescale `bbox` to `target_ar`, holding one axis and anchoring at one of
/// the nine box anchors. Verifies the ratio postcondition.
pub fn rescale_to_anchor(
    bbox: BBox,
    target_ar: f64,
    held: Held,
    anchor: Anchor,
) -> Result<BBox, FitError> {
    let result = bbox.rescale(target_shape(&bbox, target_ar, held), anchor_point(&bbox, anchor))?;
    result.check_aspect_ratio(target_ar)?;
    Ok(result)
}

/// One iteration of the rescale/shift loop.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Step {
    /// Both axes fit; the fitted box.
    Done(BBox),
    /// At least one axis is oversized; retry from this state.
    Retry {
        bbox: BBox,
        held: Held,
        anchor: Anchor,
    },
}

/// Rescale to the target ratio, then try to shift both axes into the frame
/// independently. Pure state transition — the branch table lives here.
fn step(
    bbox: BBox,
    frame: Shape,
    target_ar: f64,
    held: Held,
    anchor: Anchor,
) -> Result<Step, FitError> {
    let rescaled = rescale_to_anchor(bbox, target_ar, held, anchor)?;
    let x = rescaled.x_interval().shift_into(Interval::new(0.0, frame.width));
    let y = rescaled.y_interval().shift_into(Interval::new(0.0, frame.height));

    use ShiftOutcome::{Fits, TooWide};
    Ok(match (x, y) {
        (Fits { shifted: xi, .. }, Fits { shifted: yi, .. }) => {
            Step::Done(BBox::new(xi.lo(), yi.lo(), xi.hi(), yi.hi()))
        }
        // y is oversized: pin it to the full frame height, keep the shifted
        // x, and refit width from the pinned height while holding whichever
        // x edge the shift landed on.
        (
            Fits {
                shifted: xi,
                touches_lo,
                touches_hi,
            },
            TooWide,
        ) => Step::Retry {
            bbox: BBox::new(xi.lo(), 0.0, xi.hi(), frame.height),
            held: Held::Height,
            anchor: match (touches_lo, touches_hi) {
                (true, false) => Anchor::CenterLeft,
                (false, true) => Anchor::CenterRight,
                _ => Anchor::Center,
            },
        },
        // Symmetric: x oversized, pin it to the full frame width and refit
        // height from it.
        (
            TooWide,
            Fits {
                shifted: yi,
                touches_lo,
                touches_hi,
            },
        ) => Step::Retry {
            bbox: BBox::new(0.0, yi.lo(), frame.width, yi.hi()),
            held: Held::Width,
            anchor: match (touches_lo, touches_hi) {
                (true, false) => Anchor::CenterTop,
                (false, true) => Anchor::CenterBottom,
                _ => Anchor::Center,
            },
        },
        // Both oversized: restart from the full frame.
        (TooWide, TooWide) => Step::Retry {
            bbox: BBox::frame_box(frame),
            held: Held::Height,
            anchor: Anchor::Center,
        },
    })
}

/// Iteratively rescale toward `target_ar` and shift back into the frame
/// until both hold, or the retry budget runs out.
///
/// Runs at most `max_retries + 1` iterations (the budget counts retries
/// after the initial attempt). On success the result satisfies both the
/// aspect-ratio tolerance and frame containment; a request the geometry
/// cannot satisfy within budget yields
/// [`FitError::RetriesExhausted`].
pub fn rescale_shift_until_valid(
    bbox: BBox,
    frame: Shape,
    target_ar: f64,
    max_retries: u32,
) -> Result<BBox, FitError> {
    let mut current = bbox;
    let mut held = Held::Height;
    let mut anchor = Anchor::Center;
    for _ in 0..=max_retries {
        match step(current, frame, target_ar, held, anchor)? {
            Step::Done(result) => {
                result.check_aspect_ratio(target_ar)?;
                result.check_in_frame(frame)?;
                return Ok(result);
            }
            Step::Retry {
                bbox: next,
                held: next_held,
                anchor: next_anchor,
            } => {
                current = next;
                held = next_held;
                anchor = next_anchor;
            }
        }
    }
    Err(FitError::RetriesExhausted {
        budget: max_retries,
    })
}

/// Single-shot rescale to `target_ar`: hold one axis fixed, adjust the
/// other from its min end, its max end, or its center.
pub fn rescale_to_ar(
    bbox: BBox,
    target_ar: f64,
    hold: Axis,
    mode: HoldMode,
) -> Result<BBox, FitError> {
    let (held, anchor) = match (hold, mode) {
        (Axis::X, HoldMode::Center) => (Held::Width, Anchor::Center),
        (Axis::X, HoldMode::Min) => (Held::Width, Anchor::CenterTop),
        (Axis::X, HoldMode::Max) => (Held::Width, Anchor::CenterBottom),
        (Axis::Y, HoldMode::Center) => (Held::Height, Anchor::Center),
        (Axis::Y, HoldMode::Min) => (Held::Height, Anchor::CenterLeft),
        (Axis::Y, HoldMode::Max) => (Held::Height, Anchor::CenterRight),
    };
    rescale_to_anchor(bbox, target_ar, held, anchor)
}

/// Reach `target_ar` by growing the deficient axis.
///
/// A box too tall for the target (`aspect_ratio > target_ar`) keeps its
/// height and grows its width; otherwise it keeps its width and grows its
/// height.
pub fn upscale_to_ar(bbox: BBox, target_ar: f64, mode: HoldMode) -> Result<BBox, FitError> {
    let hold = if bbox.aspect_ratio() > target_ar {
        Axis::Y
    } else {
        Axis::X
    };
    rescale_to_ar(bbox, target_ar, hold, mode)
}

/// Reach `target_ar` by shrinking the oversized axis.
///
/// A box too tall for the target shrinks its height at fixed width;
/// otherwise it shrinks its width at fixed height.
pub fn downscale_to_ar(bbox: BBox, target_ar: f64, mode: HoldMode) -> Result<BBox, FitError> {
    let hold = if bbox.aspect_ratio() > target_ar {
        Axis::X
    } else {
        Axis::Y
    };
    rescale_to_ar(bbox, target_ar, hold, mode)
}

/// Speculative [`upscale_to_ar`]: `None` when the grown box leaves the frame.
pub fn try_upscale_to_ar(
    bbox: BBox,
    frame: Shape,
    target_ar: f64,
    mode: HoldMode,
) -> Result<Option<BBox>, FitError> {
    let result = upscale_to_ar(bbox, target_ar, mode)?;
    Ok(if result.in_frame(frame) {
        Some(result)
    } else {
        None
    })
}

/// Speculative [`downscale_to_ar`]: `None` when the result leaves the frame.
pub fn try_downscale_to_ar(
    bbox: BBox,
    frame: Shape,
    target_ar: f64,
    mode: HoldMode,
) -> Result<Option<BBox>, FitError> {
    let result = downscale_to_ar(bbox, target_ar, mode)?;
    Ok(if result.in_frame(frame) {
        Some(result)
    } else {
        None
    })
}

/// Anchor policy from frame-edge adjacency: anchor growth away from the
/// edges the box already touches, so it grows into the frame's interior.
fn adjacency_mode(clamped: &BBox, frame: Shape) -> HoldMode {
    let left = clamped.xmin == 0.0;
    let top = clamped.ymin == 0.0;
    let right = clamped.xmax == frame.width - 1.0;
    let bottom = clamped.ymax == frame.height - 1.0;
    match (left, top, right, bottom) {
        // Left, top, and the corners that include them (except when
        // pinned from the max side) anchor at the min end.
        (true, false, false, false)
        | (false, true, false, false)
        | (true, true, false, false)
        | (false, true, true, false)
        | (true, false, false, true) => HoldMode::Min,
        // Bottom-right corner anchors at the max end.
        (false, false, true, true) => HoldMode::Max,
        _ => HoldMode::Center,
    }
}

/// Fit `bbox` to `target_ar`, preferring growth.
///
/// Clamps the box to the frame, picks an anchor policy from which frame
/// edges the clamped box touches, then grows toward the ratio if the grown
/// box stays in frame — preserving maximal visual context — and only
/// shrinks when growth cannot fit. Fails with
/// [`FitError::CropScaleUnresolvable`] when neither stays in bounds.
pub fn crop_scale(bbox: BBox, frame: Shape, target_ar: f64) -> Result<BBox, FitError> {
    let clamped = bbox.clamp_to_frame(frame);
    let mode = adjacency_mode(&clamped, frame);
    if let Some(result) = try_upscale_to_ar(clamped, frame, target_ar, mode)? {
        return Ok(result);
    }
    if let Some(result) = try_downscale_to_ar(clamped, frame, target_ar, mode)? {
        return Ok(result);
    }
    Err(FitError::CropScaleUnresolvable)
}

/// Fit `bbox` to the aspect ratio of `target` (its `height / width`).
///
/// [`FitMethod::Pad`] uses the iterative rescale/shift loop;
/// [`FitMethod::ConservativePad`] uses [`crop_scale`].
pub fn adjust_to_target_shape(
    bbox: BBox,
    frame: Shape,
    target: Shape,
    method: FitMethod,
) -> Result<BBox, FitError> {
    let target_ar = target.aspect_ratio();
    match method {
        FitMethod::Pad => {
            let result =
                rescale_shift_until_valid(bbox, frame, target_ar, DEFAULT_MAX_RETRIES)?;
            result.check_in_frame(frame)?;
            Ok(result)
        }
        FitMethod::ConservativePad => crop_scale(bbox, frame, target_ar),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── rescale_to_anchor ───────────────────────────────────────────────

    #[test]
    fn hold_height_adjusts_width() {
        // 40×20 to ratio 1.0 holding height: width becomes 20.
        let b = BBox::new(10.0, 10.0, 50.0, 30.0);
        let r = rescale_to_anchor(b, 1.0, Held::Height, Anchor::Center).unwrap();
        assert_eq!(r, BBox::new(20.0, 10.0, 40.0, 30.0));
    }

    #[test]
    fn hold_width_adjusts_height() {
        let b = BBox::new(10.0, 10.0, 50.0, 30.0);
        let r = rescale_to_anchor(b, 1.0, Held::Width, Anchor::Center).unwrap();
        assert_eq!(r, BBox::new(10.0, 0.0, 50.0, 40.0));
    }

    #[test]
    fn center_left_anchor_keeps_left_edge() {
        let b = BBox::new(10.0, 10.0, 50.0, 30.0);
        let r = rescale_to_anchor(b, 1.0, Held::Height, Anchor::CenterLeft).unwrap();
        assert_eq!(r, BBox::new(10.0, 10.0, 30.0, 30.0));
    }

    #[test]
    fn top_left_anchor_keeps_corner() {
        let b = BBox::new(10.0, 10.0, 50.0, 30.0);
        let r = rescale_to_anchor(b, 1.0, Held::Height, Anchor::TopLeft).unwrap();
        assert_eq!((r.xmin, r.ymin), (10.0, 10.0));
        assert!((r.aspect_ratio() - 1.0).abs() <= crate::AR_TOLERANCE);
    }

    // ── step branch table ───────────────────────────────────────────────

    #[test]
    fn step_succeeds_when_both_axes_fit() {
        let frame = Shape::new(200.0, 200.0);
        let s = step(
            BBox::new(10.0, 10.0, 50.0, 30.0),
            frame,
            1.0,
            Held::Height,
            Anchor::Center,
        )
        .unwrap();
        assert_eq!(s, Step::Done(BBox::new(20.0, 10.0, 40.0, 30.0)));
    }

    #[test]
    fn step_pins_oversized_y_and_holds_touched_x_edge() {
        // 40×200 box in a 50-high frame, ratio 4.0: width refits to 50,
        // the shift lands the x interval on the left frame edge, and y is
        // too tall — pinned to the full height with a CenterLeft anchor.
        let frame = Shape::new(50.0, 300.0);
        let s = step(
            BBox::new(0.0, 0.0, 40.0, 200.0),
            frame,
            4.0,
            Held::Height,
            Anchor::Center,
        )
        .unwrap();
        assert_eq!(
            s,
            Step::Retry {
                bbox: BBox::new(0.0, 0.0, 50.0, 50.0),
                held: Held::Height,
                anchor: Anchor::CenterLeft,
            }
        );
    }

    #[test]
    fn step_pins_oversized_x_and_holds_touched_y_edge() {
        // Wide target from a tall frame: x becomes too wide, y fits
        // touching the top edge.
        let frame = Shape::new(300.0, 50.0);
        let s = step(
            BBox::new(0.0, 0.0, 200.0, 40.0),
            frame,
            0.25,
            Held::Width,
            Anchor::Center,
        )
        .unwrap();
        assert_eq!(
            s,
            Step::Retry {
                bbox: BBox::new(0.0, 0.0, 50.0, 50.0),
                held: Held::Width,
                anchor: Anchor::CenterTop,
            }
        );
    }

    #[test]
    fn step_restarts_from_full_frame_when_both_axes_oversized() {
        let frame = Shape::new(50.0, 50.0);
        let s = step(
            BBox::new(0.0, 0.0, 100.0, 100.0),
            frame,
            1.0,
            Held::Height,
            Anchor::Center,
        )
        .unwrap();
        assert_eq!(
            s,
            Step::Retry {
                bbox: BBox::frame_box(frame),
                held: Held::Height,
                anchor: Anchor::Center,
            }
        );
    }

    // ── rescale_shift_until_valid ───────────────────────────────────────

    #[test]
    fn centered_square_fit() {
        let frame = Shape::new(200.0, 200.0);
        let r = rescale_shift_until_valid(BBox::new(10.0, 10.0, 50.0, 30.0), frame, 1.0, 5)
            .unwrap();
        assert_eq!(r, BBox::new(20.0, 10.0, 40.0, 30.0));
        assert_eq!(r.center(), Point::new(30.0, 20.0));
    }

    #[test]
    fn frame_sized_box_fits_immediately() {
        let frame = Shape::new(100.0, 100.0);
        let r = rescale_shift_until_valid(BBox::new(0.0, 0.0, 100.0, 100.0), frame, 1.0, 0)
            .unwrap();
        assert_eq!(r, BBox::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn corner_box_grows_within_frame() {
        let frame = Shape::new(200.0, 200.0);
        let r = rescale_shift_until_valid(BBox::new(190.0, 190.0, 200.0, 200.0), frame, 2.0, 1)
            .unwrap();
        assert!(r.check_aspect_ratio(2.0).is_ok());
        assert!(r.in_frame(frame));
    }

    #[test]
    fn wide_target_in_narrow_frame_converges_via_pinning() {
        // Full 100×200 frame box to ratio 0.5: holding height wants width
        // 400 (too wide), so x is pinned and width held; the second
        // iteration fits height from the pinned width.
        let frame = Shape::new(200.0, 100.0);
        let r = rescale_shift_until_valid(BBox::new(0.0, 0.0, 100.0, 200.0), frame, 0.5, 5)
            .unwrap();
        assert_eq!(r, BBox::new(0.0, 75.0, 100.0, 125.0));
    }

    #[test]
    fn insufficient_budget_is_reported() {
        // Same case as above but with no retries allowed: iteration 0
        // cannot fit, so the budget is exhausted.
        let frame = Shape::new(200.0, 100.0);
        assert_eq!(
            rescale_shift_until_valid(BBox::new(0.0, 0.0, 100.0, 200.0), frame, 0.5, 0),
            Err(FitError::RetriesExhausted { budget: 0 })
        );
    }

    // ── upscale / downscale ─────────────────────────────────────────────

    #[test]
    fn upscale_grows_the_deficient_axis() {
        // Too tall (1.0 > 0.5): height held, width grows to 40.
        let b = BBox::new(10.0, 10.0, 30.0, 30.0);
        let up = upscale_to_ar(b, 0.5, HoldMode::Center).unwrap();
        assert_eq!(up, BBox::new(0.0, 10.0, 40.0, 30.0));

        // Too wide (0.5 < 1.0): width held, height grows.
        let b = BBox::new(10.0, 10.0, 50.0, 30.0);
        let up = upscale_to_ar(b, 1.0, HoldMode::Center).unwrap();
        assert_eq!(up, BBox::new(10.0, 0.0, 50.0, 40.0));
    }

    #[test]
    fn downscale_shrinks_the_oversized_axis() {
        // Too tall (2.0 > 1.0): width held, height shrinks to 20.
        let b = BBox::new(10.0, 0.0, 30.0, 40.0);
        let down = downscale_to_ar(b, 1.0, HoldMode::Center).unwrap();
        assert_eq!(down, BBox::new(10.0, 10.0, 30.0, 30.0));

        // Too wide (0.5 < 1.0): height held, width shrinks.
        let b = BBox::new(10.0, 10.0, 50.0, 30.0);
        let down = downscale_to_ar(b, 1.0, HoldMode::Center).unwrap();
        assert_eq!(down, BBox::new(20.0, 10.0, 40.0, 30.0));
    }

    #[test]
    fn min_mode_anchors_the_adjusted_axis_at_its_min() {
        let b = BBox::new(0.0, 0.0, 40.0, 20.0);
        let up = upscale_to_ar(b, 0.25, HoldMode::Min).unwrap();
        // Height held, width grows rightward from the left edge.
        assert_eq!(up, BBox::new(0.0, 0.0, 80.0, 20.0));
    }

    #[test]
    fn try_upscale_rejects_out_of_frame_growth() {
        let frame = Shape::new(100.0, 100.0);
        // Growing a 20-high centered box to ratio 0.1 needs width 200.
        let b = BBox::new(40.0, 40.0, 60.0, 60.0);
        assert_eq!(try_upscale_to_ar(b, frame, 0.1, HoldMode::Center), Ok(None));
        // The shrinking counterpart stays inside.
        let down = try_downscale_to_ar(b, frame, 0.1, HoldMode::Center)
            .unwrap()
            .unwrap();
        assert!(down.in_frame(frame));
        assert!(down.check_aspect_ratio(0.1).is_ok());
    }

    // ── crop_scale ──────────────────────────────────────────────────────

    #[test]
    fn crop_scale_top_left_adjacency_grows_from_min() {
        // Box touching left and top edges; growth must not cross them.
        let frame = Shape::new(200.0, 100.0);
        let r = crop_scale(BBox::new(0.0, 0.0, 40.0, 20.0), frame, 0.25).unwrap();
        assert_eq!(r, BBox::new(0.0, 0.0, 80.0, 20.0));
    }

    #[test]
    fn crop_scale_bottom_right_adjacency_grows_from_max() {
        let frame = Shape::new(100.0, 100.0);
        let r = crop_scale(BBox::new(59.0, 59.0, 99.0, 99.0), frame, 2.0).unwrap();
        // Width held, height grows upward from the bottom edge.
        assert_eq!(r, BBox::new(59.0, 19.0, 99.0, 99.0));
    }

    #[test]
    fn crop_scale_interior_box_grows_centered() {
        let frame = Shape::new(100.0, 100.0);
        let r = crop_scale(BBox::new(40.0, 45.0, 60.0, 55.0), frame, 1.0).unwrap();
        assert_eq!(r, BBox::new(40.0, 40.0, 60.0, 60.0));
    }

    #[test]
    fn crop_scale_falls_back_to_downscale() {
        // Centered box whose growth to a very wide ratio would overflow
        // the frame; the shrink path fits.
        let frame = Shape::new(100.0, 100.0);
        let r = crop_scale(BBox::new(40.0, 40.0, 60.0, 60.0), frame, 0.1).unwrap();
        assert!(r.in_frame(frame));
        assert!(r.check_aspect_ratio(0.1).is_ok());
        assert_eq!(r.width(), 20.0);
    }

    #[test]
    fn crop_scale_degenerate_box_is_unresolvable() {
        // A zero-area box cannot reach any ratio.
        let frame = Shape::new(100.0, 100.0);
        assert_eq!(
            crop_scale(BBox::new(50.0, 50.0, 50.0, 50.0), frame, 1.0),
            Err(FitError::CropScaleUnresolvable)
        );
    }

    // ── adjust_to_target_shape ──────────────────────────────────────────

    #[test]
    fn pad_method_uses_iterative_fit() {
        let frame = Shape::new(200.0, 200.0);
        let r = adjust_to_target_shape(
            BBox::new(10.0, 10.0, 50.0, 30.0),
            frame,
            Shape::new(100.0, 100.0),
            FitMethod::Pad,
        )
        .unwrap();
        assert_eq!(r, BBox::new(20.0, 10.0, 40.0, 30.0));
    }

    #[test]
    fn conservative_pad_method_uses_crop_scale() {
        let frame = Shape::new(200.0, 100.0);
        let r = adjust_to_target_shape(
            BBox::new(0.0, 0.0, 40.0, 20.0),
            frame,
            Shape::new(25.0, 100.0),
            FitMethod::ConservativePad,
        )
        .unwrap();
        assert_eq!(r, BBox::new(0.0, 0.0, 80.0, 20.0));
    }
}
