use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel-space point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in pixel space.
///
/// `Bounds` is a value type: every transform returns a new rectangle and
/// leaves the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns an error unless every field is finite and the size is non-negative.
    pub fn validate(self) -> ChartResult<Self> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }

    /// Horizontal pixel range, left to right.
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (self.left(), self.right())
    }

    /// Vertical pixel range, bottom to top, so larger values map upwards.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.bottom(), self.top())
    }

    #[must_use]
    pub fn pad_left(self, amount: f64) -> Self {
        Self::new(self.x + amount, self.y, self.width - amount, self.height)
    }

    #[must_use]
    pub fn pad_right(self, amount: f64) -> Self {
        Self::new(self.x, self.y, self.width - amount, self.height)
    }

    #[must_use]
    pub fn pad_top(self, amount: f64) -> Self {
        Self::new(self.x, self.y + amount, self.width, self.height - amount)
    }

    #[must_use]
    pub fn pad_bottom(self, amount: f64) -> Self {
        Self::new(self.x, self.y, self.width, self.height - amount)
    }

    /// Pads both the left and the right side by `amount`.
    #[must_use]
    pub fn pad_width(self, amount: f64) -> Self {
        self.pad_left(amount).pad_right(amount)
    }

    /// Pads both the top and the bottom side by `amount`.
    #[must_use]
    pub fn pad_height(self, amount: f64) -> Self {
        self.pad_top(amount).pad_bottom(amount)
    }

    #[must_use]
    pub fn with_position(self, x: f64, y: f64) -> Self {
        Self::new(x, y, self.width, self.height)
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains_point(self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect.
    #[must_use]
    pub fn intersects(self, other: Self) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
