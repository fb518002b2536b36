//! Bounds, transforms, and the equal-stripe partition.
//!
//! The host document expresses geometric bounds as a `[y1, x1, y2, x2]`
//! 4-tuple in document points; [`Bounds`] mirrors that convention.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in document points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Bounds {
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// The host's `[y1, x1, y2, x2]` tuple form.
    pub const fn to_array(self) -> [f64; 4] {
        [self.top, self.left, self.bottom, self.right]
    }

    pub const fn from_array([top, left, bottom, right]: [f64; 4]) -> Self {
        Self { top, left, bottom, right }
    }

    /// Smallest bounds containing both rectangles.
    pub fn union(self, other: Self) -> Self {
        Self {
            top: self.top.min(other.top),
            left: self.left.min(other.left),
            bottom: self.bottom.max(other.bottom),
            right: self.right.max(other.right),
        }
    }
}

/// Compute the bounds of stripe `index` out of `total` equal bands.
///
/// The partition runs along the top-to-bottom axis; every stripe keeps the
/// full width. Both edges come straight from the same formula rather than
/// from accumulated heights, so the stripe at `index + 1` starts at exactly
/// the value this stripe ends at: the bands tile the input with zero gap and
/// zero overlap for any floating-point bounds.
///
/// # Examples
///
/// ```
/// use flagpress::geometry::{stripe_bounds, Bounds};
///
/// let bounds = Bounds::new(0.0, 0.0, 300.0, 100.0);
/// let first = stripe_bounds(bounds, 0, 3);
/// assert_eq!(first, Bounds::new(0.0, 0.0, 100.0, 100.0));
/// let last = stripe_bounds(bounds, 2, 3);
/// assert_eq!(last, Bounds::new(200.0, 0.0, 300.0, 100.0));
/// ```
pub fn stripe_bounds(bounds: Bounds, index: usize, total: usize) -> Bounds {
    debug_assert!(index < total);
    let span = bounds.bottom - bounds.top;
    let total = total as f64;
    Bounds {
        top: bounds.top + span * index as f64 / total,
        left: bounds.left,
        bottom: bounds.top + span * (index + 1) as f64 / total,
        right: bounds.right,
    }
}

/// Transform attributes preserved across a replace-selection operation.
///
/// Scales are percentages, matching the host document model: the identity
/// transform is zero angles at 100% scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Rotation angle in degrees
    pub rotation: f64,
    /// Shear angle in degrees
    pub shear: f64,
    /// Horizontal scale percentage
    pub horizontal_scale: f64,
    /// Vertical scale percentage
    pub vertical_scale: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        shear: 0.0,
        horizontal_scale: 100.0,
        vertical_scale: 100.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
