// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Input routing.
//!
//! The controller receives typed input records from the UI layer, tracks the
//! zoom modifier and the pending marker color, and forwards resolved
//! positions to the session. Wheel zoom is gated here: without the modifier
//! held a wheel event never touches the viewport.

use crate::models::annotation::{Annotation, MarkerColor};
use crate::models::position::NormalizedPosition;
use crate::models::session::Session;
use crate::models::viewport::ZoomDirection;
use std::path::PathBuf;

/// Key that must be held for wheel zoom.
pub const ZOOM_MODIFIER_KEY: char = 'z';

/// A click, as a fraction of the image container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub screen: NormalizedPosition,
}

/// A wheel tick over the image container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub delta_y: f64,
    pub modifier_held: bool,
    pub screen: NormalizedPosition,
}

/// A key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: char,
    pub pressed: bool,
}

impl KeyEvent {
    fn is_zoom_modifier(&self) -> bool {
        self.key.eq_ignore_ascii_case(&ZOOM_MODIFIER_KEY)
    }
}

/// Routes input to the current session.
#[derive(Debug, Default)]
pub struct MarkerController {
    session: Option<Session>,
    pending_color: MarkerColor,
    zoom_key_held: bool,
}

impl MarkerController {
    pub fn new(pending_color: MarkerColor) -> Self {
        Self {
            session: None,
            pending_color,
            zoom_key_held: false,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn pending_color(&self) -> MarkerColor {
        self.pending_color
    }

    pub fn is_zoom_key_held(&self) -> bool {
        self.zoom_key_held
    }

    /// Start over with a new image: zoom is reset and markers are dropped.
    pub fn load_image(&mut self, source: PathBuf) {
        log::info!("Loaded image {}", source.display());
        match self.session {
            Some(ref mut session) => session.replace_image(source),
            None => self.session = Some(Session::new(source)),
        }
    }

    pub fn reset_zoom(&mut self) {
        if let Some(ref mut session) = self.session {
            session.reset_zoom();
            log::debug!("Zoom reset");
        }
    }

    pub fn select_color(&mut self, color: MarkerColor) {
        if color != self.pending_color {
            log::debug!("Marker color {:?} -> {:?}", self.pending_color, color);
        }
        self.pending_color = color;
    }

    pub fn on_key(&mut self, event: KeyEvent) {
        if !event.is_zoom_modifier() || event.pressed == self.zoom_key_held {
            return;
        }
        self.zoom_key_held = event.pressed;
        log::debug!("Zoom modifier {}", if event.pressed { "held" } else { "released" });
    }

    /// Place a marker with the pending color. Returns `None` when no image is loaded.
    pub fn on_click(&mut self, event: PointerEvent) -> Option<Annotation> {
        let color = self.pending_color;
        let session = self.session.as_mut()?;
        let annotation = session.place_marker(event.screen, color);
        log::info!(
            "Added {:?} marker at ({:.3}, {:.3}), total markers: {}",
            annotation.color,
            annotation.position.x,
            annotation.position.y,
            session.annotations().len()
        );
        Some(annotation)
    }

    /// Apply one zoom step if the modifier is held. Returns whether the viewport was touched.
    pub fn on_wheel(&mut self, event: WheelEvent) -> bool {
        if !event.modifier_held {
            log::trace!("Wheel ignored, zoom modifier not held");
            return false;
        }
        let Some(ref mut session) = self.session else {
            return false;
        };
        let direction = ZoomDirection::from_wheel_delta(event.delta_y);
        session.zoom(direction, event.screen);
        let viewport = session.viewport();
        log::debug!(
            "Zoom {:?}: scale {:.1}, anchor ({:.3}, {:.3})",
            direction,
            viewport.scale(),
            viewport.anchor().x,
            viewport.anchor().y
        );
        true
    }

    /// Wheel tick using the tracked modifier state.
    pub fn scroll(&mut self, delta_y: f64, screen: NormalizedPosition) -> bool {
        self.on_wheel(WheelEvent {
            delta_y,
            modifier_held: self.zoom_key_held,
            screen,
        })
    }
}
