//! Axis-aligned bounding boxes and pure geometric queries.
//!
//! [`BBox`] is an immutable value type: every transform returns a new box.
//! Coordinates are `f64` with origin `(0, 0)` at the top-left of the frame,
//! x increasing rightward and y increasing downward. Aspect ratio is
//! height divided by width throughout the crate.

use num_traits::Float;

use crate::interval::Interval;

/// Tolerance for aspect-ratio postcondition checks.
///
/// Looser than float equality because anchored rescaling introduces
/// rounding on both axes.
pub const AR_TOLERANCE: f64 = 0.01;

/// A point in frame coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A `(height, width)` extent, used for both box shapes and frame shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shape {
    /// Extent along y.
    pub height: f64,
    /// Extent along x.
    pub width: f64,
}

impl Shape {
    /// Create a shape from height and width.
    pub const fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }

    /// Height divided by width.
    pub fn aspect_ratio(&self) -> f64 {
        self.height / self.width
    }
}

/// Coordinate axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal (width).
    X,
    /// Vertical (height).
    Y,
}

/// Geometry fitting error.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FitError {
    /// The rescale anchor lies outside the box.
    PointNotInBBox,
    /// A transform that should have produced the target aspect ratio did
    /// not, within [`AR_TOLERANCE`]. Internal invariant violation.
    AspectRatioMismatch { target: f64, actual: f64 },
    /// A box that should lie inside the frame does not.
    /// Internal invariant violation.
    OutOfFrame,
    /// The rescale/shift loop exhausted its retry budget without reaching
    /// both the aspect-ratio and the containment invariant. Expected for
    /// geometrically infeasible requests.
    RetriesExhausted { budget: u32 },
    /// Neither growing nor shrinking the box to the target ratio keeps it
    /// inside the frame.
    CropScaleUnresolvable,
}

/// Axis-aligned rectangle in frame coordinates.
///
/// Invariants: `xmin <= xmax`, `ymin <= ymax`. Construction trusts the
/// caller, as with all value types in this crate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl BBox {
    /// Create a box from its corner coordinates.
    pub const fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Create a box from `[xmin, ymin, xmax, ymax]`.
    pub const fn from_array([xmin, ymin, xmax, ymax]: [f64; 4]) -> Self {
        Self::new(xmin, ymin, xmax, ymax)
    }

    /// Coordinates as `[xmin, ymin, xmax, ymax]`.
    pub const fn to_array(&self) -> [f64; 4] {
        [self.xmin, self.ymin, self.xmax, self.ymax]
    }

    /// The box covering a whole frame: `[0, 0, width, height]`.
    pub const fn frame_box(frame: Shape) -> Self {
        Self::new(0.0, 0.0, frame.width, frame.height)
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// `(height, width)` extent.
    pub fn shape(&self) -> Shape {
        Shape::new(self.height(), self.width())
    }

    /// Width times height.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Point {
        Point::new(0.5 * (self.xmin + self.xmax), 0.5 * (self.ymin + self.ymax))
    }

    /// Height divided by width.
    pub fn aspect_ratio(&self) -> f64 {
        self.height() / self.width()
    }

    /// The box's x extent as an interval.
    pub(crate) const fn x_interval(&self) -> Interval {
        Interval::new(self.xmin, self.xmax)
    }

    /// The box's y extent as an interval.
    pub(crate) const fn y_interval(&self) -> Interval {
        Interval::new(self.ymin, self.ymax)
    }

    /// Coordinates truncated toward zero (kept as floats so the type stays
    /// closed under transforms).
    pub fn truncate(&self) -> Self {
        Self::new(
            Float::trunc(self.xmin),
            Float::trunc(self.ymin),
            Float::trunc(self.xmax),
            Float::trunc(self.ymax),
        )
    }

    /// Whether this box lies fully inside `other` (edges may coincide).
    pub fn is_inside_of(&self, other: &BBox) -> bool {
        other.xmin <= self.xmin
            && self.xmax <= other.xmax
            && other.ymin <= self.ymin
            && self.ymax <= other.ymax
    }

    /// Whether this box fully contains `other`.
    pub fn encloses(&self, other: &BBox) -> bool {
        other.is_inside_of(self)
    }

    /// Whether the interiors of the two boxes intersect.
    pub fn overlaps_with(&self, other: &BBox) -> bool {
        self.xmin < other.xmax
            && other.xmin < self.xmax
            && self.ymin < other.ymax
            && other.ymin < self.ymax
    }

    /// Whether this box's center lies inside `other` (edges inclusive).
    pub fn center_is_inside_of(&self, other: &BBox) -> bool {
        let c = self.center();
        other.xmin <= c.x && c.x <= other.xmax && other.ymin <= c.y && c.y <= other.ymax
    }

    /// Whether the two boxes meet edge-to-edge on both axes: one box's max
    /// coordinate equals the other's min coordinate, exactly, on x and on y.
    pub fn is_adjacent_with(&self, other: &BBox) -> bool {
        let x_adjacent = other.xmax == self.xmin || self.xmax == other.xmin;
        let y_adjacent = other.ymax == self.ymin || self.ymax == other.ymin;
        x_adjacent && y_adjacent
    }

    /// Whether this box lies fully inside the frame `[0, w] × [0, h]`.
    pub fn in_frame(&self, frame: Shape) -> bool {
        self.is_inside_of(&Self::frame_box(frame))
    }

    /// Verify frame containment, as a postcondition.
    pub fn check_in_frame(&self, frame: Shape) -> Result<(), FitError> {
        if !self.in_frame(frame) {
            return Err(FitError::OutOfFrame);
        }
        Ok(())
    }

    /// Verify the aspect ratio matches `target` within [`AR_TOLERANCE`],
    /// as a postcondition.
    pub fn check_aspect_ratio(&self, target: f64) -> Result<(), FitError> {
        let actual = self.aspect_ratio();
        if Float::abs(actual - target) > AR_TOLERANCE {
            return Err(FitError::AspectRatioMismatch { target, actual });
        }
        Ok(())
    }

    /// Rescale to `target`, preserving `fixed`'s relative offsets from all
    /// four sides (scaled independently per axis).
    ///
    /// This is the sole primitive behind every anchored resize — higher
    /// level operations reduce to choosing the fixed point. Fails with
    /// [`FitError::PointNotInBBox`] when the anchor is outside the box.
    pub fn rescale(&self, target: Shape, fixed: Point) -> Result<BBox, FitError> {
        if fixed.x < self.xmin || fixed.x > self.xmax || fixed.y < self.ymin || fixed.y > self.ymax
        {
            return Err(FitError::PointNotInBBox);
        }
        let (left_dx, right_dx) = (fixed.x - self.xmin, self.xmax - fixed.x);
        let (top_dy, bottom_dy) = (fixed.y - self.ymin, self.ymax - fixed.y);
        let w_scale = target.width / self.width();
        let h_scale = target.height / self.height();
        Ok(BBox::new(
            fixed.x - left_dx * w_scale,
            fixed.y - top_dy * h_scale,
            fixed.x + right_dx * w_scale,
            fixed.y + bottom_dy * h_scale,
        ))
    }

    /// Adjust one axis, centered, so the box reaches `target_aspect_ratio`.
    ///
    /// `Axis::X` re-derives the width from the held height; `Axis::Y`
    /// re-derives the height from the held width. Callers pick the axis
    /// that grows the box; the held axis never changes.
    pub fn pad(&self, target_aspect_ratio: f64, axis: Axis) -> BBox {
        let c = self.center();
        match axis {
            Axis::X => {
                let w = self.height() / target_aspect_ratio;
                BBox::new(c.x - 0.5 * w, self.ymin, c.x + 0.5 * w, self.ymax)
            }
            Axis::Y => {
                let h = self.width() * target_aspect_ratio;
                BBox::new(self.xmin, c.y - 0.5 * h, self.xmax, c.y + 0.5 * h)
            }
        }
    }

    /// Clamp each coordinate into the frame: negatives to `0`, values at or
    /// past the frame extent to `extent - 1`.
    pub fn clamp_to_frame(&self, frame: Shape) -> BBox {
        fn clamp(v: f64, extent: f64) -> f64 {
            if v < 0.0 {
                0.0
            } else if v >= extent {
                extent - 1.0
            } else {
                v
            }
        }
        BBox::new(
            clamp(self.xmin, frame.width),
            clamp(self.ymin, frame.height),
            clamp(self.xmax, frame.width),
            clamp(self.ymax, frame.height),
        )
    }
}
