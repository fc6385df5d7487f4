// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module converts pointer positions into container fractions and maps
//! between screen space and image space under the current viewport.
//!
//! The image is rendered scaled about the viewport anchor:
//! `screen = anchor + (image - anchor) * scale`. [`screen_to_image`] is the
//! exact inverse. Results depend on the viewport at the time of the event and
//! must not be reused after a zoom change.

use crate::models::position::NormalizedPosition;
use crate::models::viewport::ViewportState;

/// Convert a pointer position to a fraction of the container's bounding box.
///
/// Returns `None` for a degenerate box (zero or negative width/height).
pub fn normalize_coordinates(
    pointer_x: f64,
    pointer_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Option<NormalizedPosition> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(NormalizedPosition {
        x: (pointer_x - left) / width,
        y: (pointer_y - top) / height,
    })
}

/// Convert a container fraction back to pixel coordinates.
pub fn denormalize_coordinates(
    point: &NormalizedPosition,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    (left + point.x * width, top + point.y * height)
}

/// Forward (render) transform: where an image point is displayed.
pub fn image_to_screen(image: NormalizedPosition, viewport: &ViewportState) -> NormalizedPosition {
    let anchor = viewport.anchor();
    let scale = viewport.scale();
    NormalizedPosition {
        x: anchor.x + (image.x - anchor.x) * scale,
        y: anchor.y + (image.y - anchor.y) * scale,
    }
}

/// Inverse transform: which image point lies under a screen position.
pub fn screen_to_image(screen: NormalizedPosition, viewport: &ViewportState) -> NormalizedPosition {
    let anchor = viewport.anchor();
    let scale = viewport.scale();
    NormalizedPosition {
        x: (screen.x - anchor.x) / scale + anchor.x,
        y: (screen.y - anchor.y) / scale + anchor.y,
    }
}

/// Largest size with the image's aspect ratio that fits in the available area.
pub fn fit_to_area(image_width: u32, image_height: u32, available_width: f64, available_height: f64) -> (f64, f64) {
    if image_width == 0 || image_height == 0 || available_height <= 0.0 {
        return (0.0, 0.0);
    }
    let img_aspect = image_width as f64 / image_height as f64;
    let available_aspect = available_width / available_height;

    if img_aspect > available_aspect {
        // Image is wider - fit to width
        (available_width, available_width / img_aspect)
    } else {
        // Image is taller - fit to height
        (available_height * img_aspect, available_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::viewport::{ZoomDirection, MAX_SCALE, MIN_SCALE};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: NormalizedPosition, b: NormalizedPosition) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_normalize_denormalize_roundtrip() {
        let normalized = normalize_coordinates(960.0, 540.0, 100.0, 50.0, 1920.0, 1080.0).unwrap();
        let (x, y) = denormalize_coordinates(&normalized, 100.0, 50.0, 1920.0, 1080.0);

        assert!((x - 960.0).abs() < 0.0001);
        assert!((y - 540.0).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_corners() {
        let tl = normalize_coordinates(10.0, 20.0, 10.0, 20.0, 500.0, 300.0).unwrap();
        assert_eq!(tl.x, 0.0);
        assert_eq!(tl.y, 0.0);

        let br = normalize_coordinates(510.0, 320.0, 10.0, 20.0, 500.0, 300.0).unwrap();
        assert_eq!(br.x, 1.0);
        assert_eq!(br.y, 1.0);
    }

    #[test]
    fn test_normalize_rejects_empty_box() {
        assert!(normalize_coordinates(5.0, 5.0, 0.0, 0.0, 0.0, 500.0).is_none());
        assert!(normalize_coordinates(5.0, 5.0, 0.0, 0.0, 500.0, 0.0).is_none());
    }

    #[test]
    fn test_click_at_center_of_500_box() {
        let screen = normalize_coordinates(250.0, 250.0, 0.0, 0.0, 500.0, 500.0).unwrap();
        assert_eq!(screen, NormalizedPosition::new(0.5, 0.5));

        let image = screen_to_image(screen, &ViewportState::default());
        assert!(approx_eq(image, NormalizedPosition::new(0.5, 0.5)));
    }

    #[test]
    fn test_identity_at_min_scale() {
        let viewport = ViewportState::new(MIN_SCALE, NormalizedPosition::new(0.1, 0.8));
        let p = NormalizedPosition::new(0.37, 0.61);
        assert!(approx_eq(screen_to_image(p, &viewport), p));
        assert!(approx_eq(image_to_screen(p, &viewport), p));
    }

    #[test]
    fn test_anchor_is_fixed_point() {
        let anchor = NormalizedPosition::new(0.3, 0.7);
        let viewport = ViewportState::new(2.5, anchor);
        assert!(approx_eq(screen_to_image(anchor, &viewport), anchor));
    }

    #[test]
    fn test_inverse_known_values() {
        let viewport = ViewportState::new(2.0, NormalizedPosition::new(0.5, 0.5));
        let image = screen_to_image(NormalizedPosition::new(1.0, 0.0), &viewport);
        assert!(approx_eq(image, NormalizedPosition::new(0.75, 0.25)));
    }

    #[test]
    fn test_roundtrip_law_across_scales() {
        let anchors = [
            NormalizedPosition::new(0.5, 0.5),
            NormalizedPosition::new(0.0, 1.0),
            NormalizedPosition::new(0.13, 0.87),
            NormalizedPosition::new(-0.2, 1.4),
        ];
        let screens = [
            NormalizedPosition::new(0.0, 0.0),
            NormalizedPosition::new(1.0, 1.0),
            NormalizedPosition::new(0.42, 0.07),
            NormalizedPosition::new(1.3, -0.6),
        ];

        for step in 0..=20 {
            let scale = MIN_SCALE + (MAX_SCALE - MIN_SCALE) * step as f64 / 20.0;
            for anchor in anchors {
                let viewport = ViewportState::new(scale, anchor);
                for screen in screens {
                    let image = screen_to_image(screen, &viewport);
                    assert!(
                        approx_eq(image_to_screen(image, &viewport), screen),
                        "scale {scale} anchor {anchor:?} screen {screen:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_mapping_uses_current_viewport() {
        let mut viewport = ViewportState::default();
        let screen = NormalizedPosition::new(0.8, 0.2);
        let before = screen_to_image(screen, &viewport);

        viewport.apply_zoom_step(ZoomDirection::In, NormalizedPosition::new(0.1, 0.1));
        let after = screen_to_image(screen, &viewport);

        assert!(!approx_eq(before, after));
        assert!(approx_eq(image_to_screen(after, &viewport), screen));
    }

    #[test]
    fn test_fit_to_area() {
        // Wide image in a square area
        let (w, h) = fit_to_area(1920, 1080, 500.0, 500.0);
        assert!((w - 500.0).abs() < 0.0001);
        assert!((h - 281.25).abs() < 0.0001);

        // Tall image
        let (w, h) = fit_to_area(100, 200, 500.0, 500.0);
        assert!((w - 250.0).abs() < 0.0001);
        assert!((h - 500.0).abs() < 0.0001);

        assert_eq!(fit_to_area(0, 10, 500.0, 500.0), (0.0, 0.0));
    }
}
