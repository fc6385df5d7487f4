// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with file, color and zoom controls.

use crate::models::annotation::MarkerColor;
use crate::ui::canvas::marker_color32;

/// Result of toolbar interaction.
pub enum ToolbarAction {
    None,
    OpenImage,
    SelectColor(MarkerColor),
    ResetZoom,
}

/// Display the toolbar.
pub fn show(ui: &mut egui::Ui, pending_color: MarkerColor, has_image: bool) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("🗁 Open Image...").clicked() {
            action = ToolbarAction::OpenImage;
        }

        ui.separator();

        ui.label("Marker color:");
        let mut selected = pending_color;
        egui::ComboBox::from_id_source("marker_color")
            .selected_text(egui::RichText::new(selected.name()).color(marker_color32(selected)))
            .show_ui(ui, |ui| {
                for color in MarkerColor::ALL {
                    ui.selectable_value(&mut selected, color, color.name());
                }
            });
        if selected != pending_color {
            action = ToolbarAction::SelectColor(selected);
        }

        if has_image {
            ui.separator();

            if ui.button("Reset Zoom").clicked() {
                action = ToolbarAction::ResetZoom;
            }

            ui.separator();

            ui.label(
                egui::RichText::new("Click on the image to mark. Hold Z and scroll over the image to zoom.")
                    .italics()
                    .weak(),
            );
        }
    });

    action
}
