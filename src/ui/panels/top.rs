use egui::{Align, Color32, Context, Frame, Layout, Margin, RichText};

use crate::prefs::ThemeMode;
use crate::ui::theme::{ACCENT, palette};

use super::AppState;

pub(super) fn render(state: &mut AppState, ctx: &Context) {
    let p = palette(state.theme);
    egui::TopBottomPanel::top("top")
        .resizable(false)
        .show(ctx, |ui| {
            Frame::default()
                .fill(p.panel_fill)
                .inner_margin(Margin::symmetric(16, 12))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.heading(RichText::new("MockTube").color(p.text_strong));
                        ui.add_space(12.0);
                        ui.colored_label(ACCENT, RichText::new(&state.status).strong());
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let (label, hover) = match state.theme {
                                ThemeMode::Light => ("🌙 Dark", "Switch to the dark theme"),
                                ThemeMode::Dark => ("☀ Light", "Switch to the light theme"),
                            };
                            let toggle = egui::Button::new(
                                RichText::new(label).strong().color(Color32::WHITE),
                            )
                            .fill(ACCENT)
                            .min_size(egui::vec2(100.0, 28.0));
                            if ui.add(toggle).on_hover_text(hover).clicked() {
                                state.toggle_theme(ctx);
                            }
                        });
                    });
                });
        });
}
