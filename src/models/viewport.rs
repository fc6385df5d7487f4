// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewport zoom state.
//!
//! The viewport is a scale about an anchor point. Each zoom step moves the
//! scale by a fixed amount and replaces the anchor with the pointer position
//! at that tick, so consecutive steps zoom toward wherever the cursor is.
//! The anchor and the scale are updated together rather than solved jointly;
//! this is the expected zoom feel.

use super::position::NormalizedPosition;

/// Scale with no magnification.
pub const MIN_SCALE: f64 = 1.0;
/// Largest allowed magnification.
pub const MAX_SCALE: f64 = 3.0;
/// Scale change per wheel tick.
pub const STEP_SCALE: f64 = 0.1;

/// Direction of a single zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Negative wheel deltas (scrolling up) zoom in, everything else zooms out.
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y < 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        }
    }

    fn delta(self) -> f64 {
        match self {
            ZoomDirection::In => STEP_SCALE,
            ZoomDirection::Out => -STEP_SCALE,
        }
    }
}

/// Current zoom scale and anchor.
///
/// `scale` always stays within `MIN_SCALE..=MAX_SCALE`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    scale: f64,
    anchor: NormalizedPosition,
}

impl ViewportState {
    /// Create a viewport, clamping `scale` into the allowed range.
    #[cfg(test)]
    pub fn new(scale: f64, anchor: NormalizedPosition) -> Self {
        Self {
            scale: scale.clamp(MIN_SCALE, MAX_SCALE),
            anchor,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn anchor(&self) -> NormalizedPosition {
        self.anchor
    }

    /// Back to no magnification, anchored at the image center.
    pub fn reset(&mut self) {
        self.scale = MIN_SCALE;
        self.anchor = NormalizedPosition::CENTER;
    }

    /// Move the scale one step and re-anchor at `new_anchor`.
    pub fn apply_zoom_step(&mut self, direction: ZoomDirection, new_anchor: NormalizedPosition) {
        self.scale = (self.scale + direction.delta()).clamp(MIN_SCALE, MAX_SCALE);
        self.anchor = new_anchor;
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: MIN_SCALE,
            anchor: NormalizedPosition::CENTER,
        }
    }
}
