// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Marker and viewport details panel.

use crate::models::annotation::MarkerColor;
use crate::models::session::Session;
use crate::ui::canvas::marker_color32;

/// Display zoom state and the placed markers in render order.
pub fn show(ui: &mut egui::Ui, session: Option<&Session>, pending_color: MarkerColor, zoom_key_held: bool) {
    ui.heading("Markers");
    ui.separator();

    let Some(session) = session else {
        ui.label(egui::RichText::new("No image loaded").weak());
        return;
    };

    let viewport = session.viewport();
    egui::Grid::new("viewport_grid").num_columns(2).show(ui, |ui| {
        ui.label("Zoom:");
        ui.label(format!("{:.0}%", viewport.scale() * 100.0));
        ui.end_row();

        ui.label("Anchor:");
        ui.label(viewport.anchor().to_percent());
        ui.end_row();

        ui.label("Color:");
        ui.colored_label(marker_color32(pending_color), pending_color.name());
        ui.end_row();

        ui.label("Zoom key:");
        ui.label(if zoom_key_held { "held" } else { "-" });
        ui.end_row();
    });

    ui.separator();

    if !session.has_markers() {
        ui.label(egui::RichText::new("Click on the image to place a marker").weak());
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (idx, annotation) in session.annotations().iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(format!("{}.", idx + 1));
                ui.colored_label(marker_color32(annotation.color), "●");
                ui.label(annotation.position.to_percent());
            });
        }
    });
}
