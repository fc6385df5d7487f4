// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Normalized positions.
//!
//! Positions are fractions of a reference box (the image frame or the
//! container). They are never clamped: a value outside `0.0..=1.0` simply
//! lies outside the box.

/// A 2D point in normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPosition {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPosition {
    /// The center of the reference box.
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Format as percentages, e.g. `(25.0%, 80.0%)`.
    pub fn to_percent(&self) -> String {
        format!("({:.1}%, {:.1}%)", self.x * 100.0, self.y * 100.0)
    }
}

impl Default for NormalizedPosition {
    fn default() -> Self {
        Self::CENTER
    }
}
