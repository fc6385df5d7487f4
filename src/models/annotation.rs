// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation data structures.
//!
//! This module defines the color-tagged markers placed on the image and
//! the ordered store that holds them for the current session.

use super::position::NormalizedPosition;
use serde::Deserialize;

/// Marker color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    #[default]
    Red,
    Blue,
    Green,
    Yellow,
    Black,
}

impl MarkerColor {
    /// Every palette entry, in display order.
    pub const ALL: [MarkerColor; 5] = [
        MarkerColor::Red,
        MarkerColor::Blue,
        MarkerColor::Green,
        MarkerColor::Yellow,
        MarkerColor::Black,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MarkerColor::Red => "Red",
            MarkerColor::Blue => "Blue",
            MarkerColor::Green => "Green",
            MarkerColor::Yellow => "Yellow",
            MarkerColor::Black => "Black",
        }
    }
}

/// A marker at a normalized image position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annotation {
    pub position: NormalizedPosition,
    pub color: MarkerColor,
}

impl Annotation {
    pub fn new(position: NormalizedPosition, color: MarkerColor) -> Self {
        Self { position, color }
    }
}

/// Ordered markers for the current image.
///
/// Insertion order is also render order, so later markers draw on top.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a marker. Positions outside the image are kept as-is.
    pub fn add(&mut self, position: NormalizedPosition, color: MarkerColor) -> Annotation {
        let annotation = Annotation::new(position, color);
        self.annotations.push(annotation);
        annotation
    }

    pub fn clear(&mut self) {
        self.annotations.clear();
    }

    /// Markers in insertion order.
    pub fn list(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}
