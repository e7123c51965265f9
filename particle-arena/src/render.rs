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
//! Draw parameters and the external renderer boundary
//!
//! Rendering is out of core scope: the simulation computes draw parameters
//! (center, radius, colors, opacity) and hands them to an implementation of
//! [`Renderer`] once per particle per frame. Hosts adapt this trait to a
//! canvas, a window surface, or a test double.

use crate::geometry::Vec2;

/// 8-bit RGB color handed through to the renderer untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Create a color from 8-bit red, green, and blue channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Get the red channel
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Get the green channel
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Get the blue channel
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Get the color as a `[r, g, b]` array
    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Boundary contract for the external rendering surface
///
/// The core invokes [`Renderer::draw_circle`] once per particle per frame
/// with the particle's current state. Opacity is the raw emphasis
/// accumulator and may exceed 1.0; clamping to the displayable range is the
/// renderer's responsibility, keeping the highlighter a pure accumulator.
pub trait Renderer {
    /// Paint one filled, stroked circle
    fn draw_circle(&mut self, center: Vec2, radius: f64, fill: Color, stroke: Color, opacity: f64);
}
