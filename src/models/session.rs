// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session state management.
//!
//! A session is one loaded image together with its viewport and markers.
//! Fields are private; all changes go through the operations below.

use super::annotation::{Annotation, AnnotationStore, MarkerColor};
use super::position::NormalizedPosition;
use super::viewport::{ViewportState, ZoomDirection};
use crate::util::geometry;
use std::path::{Path, PathBuf};

/// The current image, its viewport and its markers.
#[derive(Debug, Clone)]
pub struct Session {
    source: PathBuf,
    viewport: ViewportState,
    annotations: AnnotationStore,
}

impl Session {
    /// Create a session for a freshly loaded image.
    pub fn new(source: PathBuf) -> Self {
        Self {
            source,
            viewport: ViewportState::default(),
            annotations: AnnotationStore::new(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Markers in render order.
    pub fn annotations(&self) -> &[Annotation] {
        self.annotations.list()
    }

    pub fn marker_count(&self) -> usize {
        self.annotations.len()
    }

    pub fn has_markers(&self) -> bool {
        !self.annotations.is_empty()
    }

    /// Switch to a new image, resetting the zoom and dropping all markers.
    pub fn replace_image(&mut self, source: PathBuf) {
        self.source = source;
        self.viewport.reset();
        self.annotations.clear();
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.reset();
    }

    pub fn zoom(&mut self, direction: ZoomDirection, anchor: NormalizedPosition) {
        self.viewport.apply_zoom_step(direction, anchor);
    }

    /// Resolve a screen position against the current viewport and store a marker there.
    pub fn place_marker(&mut self, screen: NormalizedPosition, color: MarkerColor) -> Annotation {
        let position = geometry::screen_to_image(screen, &self.viewport);
        self.annotations.add(position, color)
    }
}
