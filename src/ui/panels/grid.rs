use egui::{
    Align2, Context, CornerRadius, FontId, Frame, Image, Margin, RichText, Sense, Stroke,
    StrokeKind, TextureHandle,
};

use crate::grid::Byline;
use crate::ui::textures::{AVATAR_DISPLAY, TILE_THUMB_HEIGHT, TILE_THUMB_WIDTH};
use crate::ui::theme::{ACCENT, palette};

use super::AppState;

struct Card {
    thumb: Option<TextureHandle>,
    avatar: Option<TextureHandle>,
    title: Option<String>,
    byline: Option<Byline>,
    is_user: bool,
}

pub(super) fn render(state: &mut AppState, ctx: &Context) {
    // Resolve every texture up front; the paint closures below only touch
    // plain data.
    let mut cards = Vec::with_capacity(state.grid.tiles.len() + 1);
    let user_avatar = state.user_tile.avatar;
    cards.push(Card {
        thumb: state.textures.user_image().cloned(),
        avatar: user_avatar.map(|asset| state.textures.asset(ctx, asset)),
        title: Some(state.user_tile.title.clone()),
        byline: None,
        is_user: true,
    });
    for tile in state.grid.tiles.clone() {
        cards.push(Card {
            thumb: tile.thumbnail.map(|asset| state.textures.asset(ctx, asset)),
            avatar: tile.avatar.map(|asset| state.textures.asset(ctx, asset)),
            title: tile.title,
            byline: tile.byline,
            is_user: false,
        });
    }

    let p = palette(state.theme);
    let scroll_to_top = state.take_scroll_to_top();
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(RichText::new("Aanbevolen").color(p.text_strong));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button("Shuffle")
                    .on_hover_text("Redraw the placeholder tiles")
                    .clicked()
                {
                    state.repopulate();
                }
            });
        });
        ui.add_space(8.0);

        let mut area = egui::ScrollArea::vertical();
        if scroll_to_top {
            area = area.vertical_scroll_offset(0.0);
        }
        area.show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for card in &cards {
                    render_card(ui, card, p);
                }
            });
        });
    });
}

fn render_card(ui: &mut egui::Ui, card: &Card, p: &crate::ui::theme::Palette) {
    let stroke = if card.is_user {
        Stroke::new(2.0, ACCENT)
    } else {
        Stroke::new(1.0, p.card_border)
    };
    Frame::default()
        .fill(p.card_bg)
        .stroke(stroke)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(10, 10))
        .show(ui, |ui| {
            ui.set_width(TILE_THUMB_WIDTH);
            ui.vertical(|ui| {
                render_thumbnail(ui, card.thumb.as_ref(), p);
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if let Some(avatar) = &card.avatar {
                        ui.add(Image::new((
                            avatar.id(),
                            egui::vec2(AVATAR_DISPLAY, AVATAR_DISPLAY),
                        )));
                    }
                    ui.vertical(|ui| {
                        if let Some(title) = &card.title {
                            ui.add(
                                egui::Label::new(
                                    RichText::new(title).strong().color(p.text_strong),
                                )
                                .wrap(),
                            );
                        }
                        if let Some(byline) = &card.byline {
                            ui.label(RichText::new(&byline.channel).color(p.text_muted));
                            ui.label(RichText::new(&byline.views).color(p.text_muted));
                        }
                    });
                });
            });
        });
}

fn render_thumbnail(ui: &mut egui::Ui, thumb: Option<&TextureHandle>, p: &crate::ui::theme::Palette) {
    let desired = egui::vec2(TILE_THUMB_WIDTH, TILE_THUMB_HEIGHT);
    if let Some(texture) = thumb {
        ui.add(Image::new((texture.id(), desired)).corner_radius(CornerRadius::same(6)));
    } else {
        let (rect, _) = ui.allocate_exact_size(desired, Sense::hover());
        let rounding = CornerRadius::same(6);
        ui.painter().rect_filled(rect, rounding, p.thumb_fallback);
        ui.painter().rect_stroke(
            rect,
            rounding,
            Stroke::new(1.0, p.card_border),
            StrokeKind::Inside,
        );
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No thumbnail",
            FontId::proportional(12.0),
            p.text_muted,
        );
    }
}
