use egui::{Color32, Context, CornerRadius, Frame, Image, Margin, RichText, Stroke, Vec2};

use crate::ui::textures::{PREVIEW_HEIGHT, PREVIEW_WIDTH, scaled_size};
use crate::ui::theme::{ACCENT_CONFIRM, ACCENT_UPLOAD, palette};
use crate::upload::UploadEvent;

use super::AppState;

/// The landing view: drop target, file picker, preview and the control
/// that moves the uploaded image into the grid.
pub(super) fn render(state: &mut AppState, ctx: &Context) {
    let p = palette(state.theme);
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.heading(RichText::new("Put your own video in the grid").color(p.text_strong));
            ui.label(
                RichText::new("Drop a thumbnail image below, give it a title, and see it land between the other videos.")
                    .color(p.text_muted),
            );
            ui.add_space(16.0);

            let zone_stroke = if state.upload.drop_active {
                Stroke::new(2.0, ACCENT_UPLOAD)
            } else {
                Stroke::new(1.0, p.card_border)
            };
            Frame::default()
                .fill(p.card_bg)
                .stroke(zone_stroke)
                .corner_radius(CornerRadius::same(12))
                .inner_margin(Margin::same(24))
                .show(ui, |ui| {
                    ui.set_min_size(Vec2::new(420.0, 120.0));
                    ui.vertical_centered(|ui| {
                        let cue = if state.upload.drop_active {
                            "Release to upload"
                        } else {
                            "Drag & drop an image here"
                        };
                        ui.label(RichText::new(cue).strong().color(p.text_strong));
                        ui.label(RichText::new("or").color(p.text_muted));
                        let browse = egui::Button::new(
                            RichText::new("Choose a file…").strong().color(Color32::WHITE),
                        )
                        .fill(ACCENT_UPLOAD)
                        .min_size(egui::vec2(140.0, 30.0));
                        if ui.add(browse).on_hover_text("Pick an image from disk").clicked() {
                            state.pick_image_file(ctx);
                        }
                    });
                });

            if let Some(preview) = state.textures.user_image().cloned() {
                ui.add_space(16.0);
                let [w, h] = preview.size();
                let display = scaled_size(
                    Vec2::new(w as f32, h as f32),
                    PREVIEW_WIDTH,
                    PREVIEW_HEIGHT,
                );
                ui.add(Image::new((preview.id(), display)).corner_radius(CornerRadius::same(8)));
            }

            ui.add_space(12.0);
            ui.add(
                egui::TextEdit::singleline(&mut state.title_input)
                    .hint_text("Give your video a title")
                    .desired_width(320.0),
            );

            ui.add_space(8.0);
            let confirm_enabled = state.upload.confirm_enabled();
            let confirm = egui::Button::new(
                RichText::new("Show in grid").strong().color(Color32::WHITE),
            )
            .fill(ACCENT_CONFIRM)
            .min_size(egui::vec2(140.0, 32.0));
            let response = ui
                .add_enabled(confirm_enabled, confirm)
                .on_disabled_hover_text("Upload an image first");
            if response.clicked() {
                let typed_title = state.title_input.clone();
                state.handle_upload_event(ctx, UploadEvent::ConfirmPressed { typed_title });
            }
        });
    });
}
