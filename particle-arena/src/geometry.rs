// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Scalar and vector geometry helpers
//!
//! This module provides the 2D vector type used for positions, velocities,
//! and pointer coordinates, plus the pure functions the collision resolver
//! builds on: Euclidean distance, dot product, and rotation into and out of
//! the contact-aligned reference frame.

/// 2D vector with double-precision components
///
/// Used for both positions and velocities. Fields are private with
/// per-component accessors so that invalid states stay detectable through
/// [`Vec2::is_valid`].
///
/// # Examples
///
/// ```
/// use particle_arena::Vec2;
///
/// let v = Vec2::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert!(v.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    x: f64,
    y: f64,
}

impl Vec2 {
    /// Create a new vector with the given components
    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Create a zero vector
    pub fn zero() -> Self {
        Vec2::new(0.0, 0.0)
    }

    /// Get the x component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Get the y component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Set the x component
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Set the y component
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Check if both components are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Get the vector as an array
    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Create a vector from an array
    pub fn from_array(arr: [f64; 2]) -> Self {
        Vec2::new(arr[0], arr[1])
    }

    /// Calculate the magnitude of the vector
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Vec2::zero()
    }
}

/// Euclidean distance between two points
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    (dx * dx + dy * dy).sqrt()
}

/// Dot product of two vectors
pub fn dot(a: Vec2, b: Vec2) -> f64 {
    a.x() * b.x() + a.y() * b.y()
}

/// Rotate a vector by an angle in radians (counter-clockwise)
///
/// Standard 2D rotation-matrix application. Rotating by `angle` and then by
/// `-angle` recovers the original vector within floating-point tolerance,
/// which the collision resolver relies on for its frame transform.
pub fn rotate(v: Vec2, angle: f64) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x() * cos - v.y() * sin, v.x() * sin + v.y() * cos)
}

/// Rectangular extents of the bounded simulation domain
///
/// Width and height are positive finite scalars, re-read from the rendering
/// surface at initialization and on every resize signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Create a new viewport with the given extents
    ///
    /// # Panics
    ///
    /// Panics if either extent is non-positive, NaN, or infinite. For
    /// fallible construction, use `try_new`.
    pub fn new(width: f64, height: f64) -> Self {
        assert!(
            width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite(),
            "Viewport extents must be positive and finite"
        );
        Viewport { width, height }
    }

    /// Try to create a new viewport with the given extents
    ///
    /// Returns `None` if either extent is non-positive, NaN, or infinite.
    pub fn try_new(width: f64, height: f64) -> Option<Self> {
        if width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite() {
            Some(Viewport { width, height })
        } else {
            None
        }
    }

    /// Get the horizontal extent
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Get the vertical extent
    pub fn height(&self) -> f64 {
        self.height
    }
}
