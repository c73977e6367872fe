//! Constant-aspect-ratio bounding-box fitting.
//!
//! Given an axis-aligned box inside a bounded frame, produce a new box that
//! hits a target aspect ratio (height:width), stays fully inside the frame,
//! and deviates minimally from where the box started. Everything operates on
//! plain coordinate value types: there is no pixel access, nothing allocates,
//! and the crate builds without `std`.
//!
//! # Modules
//!
//! - [`interval`] — closed numeric ranges and shift-into-bounds
//! - [`bbox`] — axis-aligned box value type and geometric queries
//! - [`fit`] — the iterative rescale/shift fitting algorithms
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
//! assert!(fitted.check_aspect_ratio(1.0).is_ok());
//! assert!(fitted.in_frame(frame));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod bbox;
pub mod fit;
pub mod interval;

// Re-exports: core types and entry points
pub use bbox::{AR_TOLERANCE, Axis, BBox, FitError, Point, Shape};
pub use fit::{
    Anchor, DEFAULT_MAX_RETRIES, FitMethod, Held, HoldMode, adjust_to_target_shape, crop_scale,
    downscale_to_ar, rescale_shift_until_valid, rescale_to_ar, try_downscale_to_ar,
    try_upscale_to_ar, upscale_to_ar,
};
pub use interval::{Interval, IntervalError, ShiftOutcome};
