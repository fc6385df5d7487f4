// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for image display and marker placement.
//!
//! The image is fitted into the available space; that fitted rectangle is
//! the container all pointer positions are measured against. Content is
//! drawn through the viewport transform and clipped to the container.

use crate::models::annotation::{Annotation, MarkerColor};
use crate::models::position::NormalizedPosition;
use crate::models::session::Session;
use crate::util::geometry;

/// Result of canvas interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasAction {
    /// Primary click inside the container.
    Click(NormalizedPosition),
    /// One wheel event over the container. `delta_y` is negative when scrolling up.
    Wheel { delta_y: f64, screen: NormalizedPosition },
}

/// Fill color for a palette entry.
pub fn marker_color32(color: MarkerColor) -> egui::Color32 {
    match color {
        MarkerColor::Red => egui::Color32::RED,
        MarkerColor::Blue => egui::Color32::BLUE,
        MarkerColor::Green => egui::Color32::GREEN,
        MarkerColor::Yellow => egui::Color32::YELLOW,
        MarkerColor::Black => egui::Color32::BLACK,
    }
}

/// Display the main canvas area and handle mouse interactions.
pub fn show(
    ui: &mut egui::Ui,
    session: Option<&Session>,
    image_texture: &Option<egui::TextureHandle>,
    image_size: Option<(u32, u32)>,
    marker_diameter: f32,
) -> Vec<CanvasAction> {
    let mut actions = Vec::new();
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let frame = egui::Frame::canvas(ui.style());
    // Leave room for the frame's margin and stroke so it fits the panel
    let available_size = (ui.available_size()
        - frame.inner_margin.sum()
        - egui::Vec2::splat(2.0 * frame.stroke.width))
    .max(egui::Vec2::ZERO);

    frame.show(ui, |ui| {
        ui.set_min_size(available_size);

        let (Some(session), Some(texture), Some((img_width, img_height))) =
            (session, image_texture, image_size)
        else {
            show_welcome(ui);
            return;
        };

        let available = ui.available_size();
        let (display_width, display_height) =
            geometry::fit_to_area(img_width, img_height, available.x as f64, available.y as f64);
        let container_size = egui::vec2(display_width as f32, display_height as f32);

        // Center the container
        let offset = (available - container_size) / 2.0;
        let container = egui::Rect::from_min_size(ui.min_rect().min + offset, container_size);

        let response = ui.allocate_rect(container, egui::Sense::click());

        let clicked_at = if response.clicked() {
            response
                .interact_pointer_pos()
                .and_then(|pos| screen_fraction(container, pos))
        } else {
            None
        };
        let (events, hover_pos) = ui.input(|i| (i.events.clone(), i.pointer.hover_pos()));
        let wheel_at = if response.hovered() {
            hover_pos.and_then(|pos| screen_fraction(container, pos))
        } else {
            None
        };
        actions = frame_actions(&events, clicked_at, wheel_at);

        let viewport = session.viewport();
        let painter = ui.painter_at(container);

        let top_left = to_pos(container, geometry::image_to_screen(NormalizedPosition::new(0.0, 0.0), viewport));
        let bottom_right = to_pos(container, geometry::image_to_screen(NormalizedPosition::new(1.0, 1.0), viewport));
        painter.image(
            texture.id(),
            egui::Rect::from_min_max(top_left, bottom_right),
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        let radius = marker_diameter / 2.0 * viewport.scale() as f32;
        for annotation in session.annotations() {
            let center = to_pos(container, geometry::image_to_screen(annotation.position, viewport));
            draw_marker(&painter, annotation, center, radius);
        }
    });

    actions
}

/// Status line with the image name and marker count.
pub fn show_status(ui: &mut egui::Ui, session: Option<&Session>) {
    ui.horizontal(|ui| match session {
        Some(session) => {
            let name = session
                .source()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| session.source().display().to_string());
            ui.label(name);
            ui.separator();
            ui.label(format!("Markers: {}", session.marker_count()));
        }
        None => {
            ui.label("No image loaded");
        }
    });
}

/// Turn one frame's input events into canvas actions, in delivery order.
///
/// Every wheel event becomes its own action; `wheel_at` is the pointer
/// position when it is over the container. A click lands at the primary
/// button release that completed it.
fn frame_actions(
    events: &[egui::Event],
    clicked_at: Option<NormalizedPosition>,
    wheel_at: Option<NormalizedPosition>,
) -> Vec<CanvasAction> {
    let mut actions = Vec::new();
    let mut pending_click = clicked_at;

    for event in events {
        match event {
            egui::Event::MouseWheel { delta, .. } if delta.y != 0.0 => {
                if let Some(screen) = wheel_at {
                    // egui reports scrolling up as positive
                    actions.push(CanvasAction::Wheel {
                        delta_y: -(delta.y as f64),
                        screen,
                    });
                }
            }
            egui::Event::PointerButton {
                button: egui::PointerButton::Primary,
                pressed: false,
                ..
            } => {
                if let Some(screen) = pending_click.take() {
                    actions.push(CanvasAction::Click(screen));
                }
            }
            _ => {}
        }
    }

    if let Some(screen) = pending_click {
        actions.push(CanvasAction::Click(screen));
    }
    actions
}

/// Pointer position as a fraction of the container.
fn screen_fraction(container: egui::Rect, pos: egui::Pos2) -> Option<NormalizedPosition> {
    geometry::normalize_coordinates(
        pos.x as f64,
        pos.y as f64,
        container.min.x as f64,
        container.min.y as f64,
        container.width() as f64,
        container.height() as f64,
    )
}

fn to_pos(container: egui::Rect, point: NormalizedPosition) -> egui::Pos2 {
    let (x, y) = geometry::denormalize_coordinates(
        &point,
        container.min.x as f64,
        container.min.y as f64,
        container.width() as f64,
        container.height() as f64,
    );
    egui::pos2(x as f32, y as f32)
}

fn draw_marker(painter: &egui::Painter, annotation: &Annotation, center: egui::Pos2, radius: f32) {
    let outline = match annotation.color {
        MarkerColor::Black => egui::Color32::WHITE,
        _ => egui::Color32::BLACK,
    };
    painter.circle_filled(center, radius, marker_color32(annotation.color));
    painter.circle_stroke(center, radius, egui::Stroke::new(1.0, outline));
}

fn show_welcome(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("Image Marker")
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Open an image to start placing markers")
                    .color(egui::Color32::from_gray(180)),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("File → Open Image...")
                    .weak()
                    .color(egui::Color32::from_gray(130)),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{KeyEvent, MarkerController, PointerEvent};
    use std::path::PathBuf;

    fn wheel(lines: f32) -> egui::Event {
        egui::Event::MouseWheel {
            unit: egui::MouseWheelUnit::Line,
            delta: egui::vec2(0.0, lines),
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn release() -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(10.0, 10.0),
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_each_wheel_event_is_one_step() {
        let screen = NormalizedPosition::new(0.3, 0.6);
        let actions = frame_actions(&[wheel(1.0), wheel(1.0)], None, Some(screen));

        assert_eq!(
            actions,
            vec![
                CanvasAction::Wheel { delta_y: -1.0, screen },
                CanvasAction::Wheel { delta_y: -1.0, screen },
            ]
        );

        let mut controller = MarkerController::new(MarkerColor::Red);
        controller.load_image(PathBuf::from("a.png"));
        controller.on_key(KeyEvent { key: 'z', pressed: true });
        for action in actions {
            if let CanvasAction::Wheel { delta_y, screen } = action {
                controller.scroll(delta_y, screen);
            }
        }
        let scale = controller.session().unwrap().viewport().scale();
        assert!((scale - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_scroll_down_is_positive_delta() {
        let actions = frame_actions(&[wheel(-2.0)], None, Some(NormalizedPosition::CENTER));
        assert_eq!(
            actions,
            vec![CanvasAction::Wheel {
                delta_y: 2.0,
                screen: NormalizedPosition::CENTER
            }]
        );
    }

    #[test]
    fn test_wheel_outside_container_ignored() {
        assert!(frame_actions(&[wheel(1.0)], None, None).is_empty());
    }

    #[test]
    fn test_click_and_wheel_in_same_frame_both_kept() {
        let click = NormalizedPosition::new(0.2, 0.2);
        let screen = NormalizedPosition::new(0.7, 0.7);
        let actions = frame_actions(&[release(), wheel(1.0)], Some(click), Some(screen));

        assert_eq!(
            actions,
            vec![
                CanvasAction::Click(click),
                CanvasAction::Wheel { delta_y: -1.0, screen },
            ]
        );

        let mut controller = MarkerController::new(MarkerColor::Blue);
        controller.load_image(PathBuf::from("a.png"));
        controller.on_click(PointerEvent { screen: click });
        assert_eq!(controller.session().unwrap().marker_count(), 1);
    }

    #[test]
    fn test_click_without_release_event_still_reported() {
        let click = NormalizedPosition::new(0.4, 0.1);
        let actions = frame_actions(&[], Some(click), None);
        assert_eq!(actions, vec![CanvasAction::Click(click)]);
    }

    #[test]
    fn test_status_line_and_canvas_fit_the_window() {
        let ctx = egui::Context::default();
        let screen = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));
        let input = egui::RawInput {
            screen_rect: Some(screen),
            ..Default::default()
        };

        let mut status_rect = egui::Rect::NOTHING;
        let mut panel_rect = egui::Rect::NOTHING;
        let mut used_rect = egui::Rect::NOTHING;
        let _ = ctx.run(input, |ctx| {
            status_rect = egui::TopBottomPanel::bottom("status_bar")
                .show(ctx, |ui| show_status(ui, None))
                .response
                .rect;
            egui::CentralPanel::default().show(ctx, |ui| {
                panel_rect = ui.max_rect();
                show(ui, None, &None, None, 10.0);
                used_rect = ui.min_rect();
            });
        });

        assert!(status_rect.height() > 0.0);
        assert!(status_rect.max.y <= screen.max.y + 0.5);
        assert!(used_rect.max.y <= panel_rect.max.y + 0.5);
        assert!(used_rect.max.x <= panel_rect.max.x + 0.5);
    }
}
