use egui::{Color32, FontFamily, FontId, Margin, Stroke, TextStyle};

use crate::prefs::ThemeMode;

pub const ACCENT: Color32 = Color32::from_rgb(99, 102, 241); // indigo
pub const ACCENT_CONFIRM: Color32 = Color32::from_rgb(34, 197, 94); // green
pub const ACCENT_UPLOAD: Color32 = Color32::from_rgb(239, 68, 68); // red

/// Mode-dependent surface colors used by the panels.
pub struct Palette {
    pub window_fill: Color32,
    pub panel_fill: Color32,
    pub card_bg: Color32,
    pub card_border: Color32,
    pub thumb_fallback: Color32,
    pub text_strong: Color32,
    pub text_muted: Color32,
}

pub const DARK: Palette = Palette {
    window_fill: Color32::from_rgb(15, 15, 20),
    panel_fill: Color32::from_rgb(22, 22, 28),
    card_bg: Color32::from_rgb(32, 32, 40),
    card_border: Color32::from_rgb(55, 65, 81),
    thumb_fallback: Color32::from_rgb(30, 34, 42),
    text_strong: Color32::from_rgb(229, 231, 235),
    text_muted: Color32::from_rgb(148, 155, 168),
};

pub const LIGHT: Palette = Palette {
    window_fill: Color32::from_rgb(248, 248, 250),
    panel_fill: Color32::from_rgb(255, 255, 255),
    card_bg: Color32::from_rgb(244, 244, 247),
    card_border: Color32::from_rgb(209, 213, 219),
    thumb_fallback: Color32::from_rgb(226, 229, 235),
    text_strong: Color32::from_rgb(26, 32, 44),
    text_muted: Color32::from_rgb(100, 108, 122),
};

pub fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
    }
}

/// Applies the mode as the single visual mode on the whole context.
pub fn apply_theme(ctx: &egui::Context, mode: ThemeMode) {
    let p = palette(mode);
    let mut visuals = if mode.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.window_fill = p.window_fill;
    visuals.panel_fill = p.panel_fill;
    visuals.faint_bg_color = p.card_bg;
    visuals.selection.bg_fill = ACCENT;
    visuals.hyperlink_color = ACCENT;
    visuals.button_frame = true;
    visuals.window_stroke = Stroke::new(1.0, p.card_border);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(12.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);
    style.spacing.menu_margin = Margin::same(8);
    style.spacing.window_margin = Margin::same(16);
    style.text_styles.insert(
        TextStyle::Heading,
        FontId::new(22.0, FontFamily::Proportional),
    );
    style
        .text_styles
        .insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
    style.text_styles.insert(
        TextStyle::Button,
        FontId::new(15.0, FontFamily::Proportional),
    );
    style.text_styles.insert(
        TextStyle::Monospace,
        FontId::new(13.0, FontFamily::Monospace),
    );
    style.visuals = visuals;
    ctx.set_style(style);
}
