// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the controller and the GPU texture of the current image,
//! translates egui input into controller events, and lays out the panels.

use crate::config::Settings;
use crate::controller::{KeyEvent, MarkerController, PointerEvent, ZOOM_MODIFIER_KEY};
use crate::io::media::{self, LoadedImage};
use crate::ui::{canvas, properties, toolbar};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Result of background image loading operation.
struct LoadedImageData {
    path: PathBuf,
    image: LoadedImage,
}

/// Main application state.
pub struct MarkerApp {
    /// Session state and input routing
    controller: MarkerController,

    /// User settings loaded at startup
    settings: Settings,

    /// Loaded image texture for display
    image_texture: Option<egui::TextureHandle>,

    /// Image dimensions (width, height)
    image_size: Option<(u32, u32)>,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<LoadedImageData, String>>>,

    /// Loading state message
    loading_message: Option<String>,
}

impl MarkerApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            controller: MarkerController::new(settings.default_color),
            settings,
            image_texture: None,
            image_size: None,
            image_loader: None,
            loading_message: None,
        }
    }

    /// Ask for an image file and load it in the background.
    fn open_image_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", media::IMAGE_EXTENSIONS)
            .pick_file()
        {
            self.load_image_file(path);
        }
    }

    /// Decode an image file on a background thread.
    pub fn load_image_file(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some(format!("Loading {}...", path.display()));

        std::thread::spawn(move || {
            let result = (|| -> Result<LoadedImageData, String> {
                let image = media::load_image(&path).map_err(|e| format!("{:#}", e))?;
                log::info!("Decoded image: {} ({}x{})", path.display(), image.width, image.height);
                Ok(LoadedImageData { path, image })
            })();

            let _ = sender.send(result);
        });
    }

    /// Upload a finished background load and start a fresh session for it.
    fn poll_image_loader(&mut self, ctx: &egui::Context) {
        let Some(ref receiver) = self.image_loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };
        self.image_loader = None;
        self.loading_message = None;

        match result {
            Ok(loaded) => {
                let size = [loaded.image.width as usize, loaded.image.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.image.pixels);
                let texture = ctx.load_texture("loaded_image", color_image, egui::TextureOptions::LINEAR);

                self.image_texture = Some(texture);
                self.image_size = Some((loaded.image.width, loaded.image.height));
                self.controller.load_image(loaded.path);
            }
            Err(e) => {
                log::error!("Failed to load image: {}", e);
            }
        }
    }

    /// Keep the controller's modifier state in sync with the keyboard.
    fn sync_zoom_key(&mut self, ctx: &egui::Context) {
        let held = ctx.input(|i| i.key_down(egui::Key::Z));
        if held != self.controller.is_zoom_key_held() {
            self.controller.on_key(KeyEvent {
                key: ZOOM_MODIFIER_KEY,
                pressed: held,
            });
        }
    }
}

impl eframe::App for MarkerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_image_loader(ctx);

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        self.sync_zoom_key(ctx);

        let has_image = self.controller.session().is_some();

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        ui.close_menu();
                        self.open_image_dialog();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.add_enabled(has_image, egui::Button::new("Reset Zoom")).clicked() {
                        self.controller.reset_zoom();
                        ui.close_menu();
                    }
                });
            });
        });

        // Toolbar
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, self.controller.pending_color(), has_image))
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::OpenImage => self.open_image_dialog(),
            toolbar::ToolbarAction::SelectColor(color) => self.controller.select_color(color),
            toolbar::ToolbarAction::ResetZoom => self.controller.reset_zoom(),
            toolbar::ToolbarAction::None => {}
        }

        // Marker panel (right side)
        egui::SidePanel::right("properties")
            .default_width(220.0)
            .show(ctx, |ui| {
                properties::show(
                    ui,
                    self.controller.session(),
                    self.controller.pending_color(),
                    self.controller.is_zoom_key_held(),
                )
            });

        // Status line (bottom)
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            canvas::show_status(ui, self.controller.session());
        });

        // Main canvas (center)
        let canvas_actions = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(message)
                                    .size(16.0)
                                    .color(egui::Color32::from_gray(200)),
                            );
                        });
                    });
                    Vec::new()
                } else {
                    canvas::show(
                        ui,
                        self.controller.session(),
                        &self.image_texture,
                        self.image_size,
                        self.settings.marker_diameter,
                    )
                }
            })
            .inner;

        // Apply in delivery order, one zoom step per wheel event
        for action in canvas_actions {
            match action {
                canvas::CanvasAction::Click(screen) => {
                    self.controller.on_click(PointerEvent { screen });
                }
                canvas::CanvasAction::Wheel { delta_y, screen } => {
                    self.controller.scroll(delta_y, screen);
                }
            }
        }
    }
}
