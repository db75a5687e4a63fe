use std::collections::HashMap;

use egui::{ColorImage, Context, ImageData, TextureHandle, TextureOptions};

use crate::assets::MediaAsset;

pub const THUMB_PIXELS: [usize; 2] = [320, 180];
pub const AVATAR_PIXELS: [usize; 2] = [48, 48];

pub const TILE_THUMB_WIDTH: f32 = 210.0;
pub const TILE_THUMB_HEIGHT: f32 = 118.0;
pub const AVATAR_DISPLAY: f32 = 28.0;
pub const PREVIEW_WIDTH: f32 = 280.0;
pub const PREVIEW_HEIGHT: f32 = 158.0;

/// Rasterized textures for the generated placeholder art, plus the single
/// slot for the visitor's uploaded image. Generated assets are rasterized
/// once; the user texture is replaced in place on re-upload.
pub struct AssetTextures {
    generated: HashMap<MediaAsset, TextureHandle>,
    user_image: Option<TextureHandle>,
}

impl AssetTextures {
    pub fn new() -> Self {
        Self {
            generated: HashMap::new(),
            user_image: None,
        }
    }

    pub fn asset(&mut self, ctx: &Context, asset: MediaAsset) -> TextureHandle {
        if let Some(texture) = self.generated.get(&asset) {
            return texture.clone();
        }
        let image = rasterize(asset);
        let texture = ctx.load_texture(
            asset.texture_name(),
            ImageData::from(image),
            TextureOptions::LINEAR,
        );
        self.generated.insert(asset, texture.clone());
        texture
    }

    pub fn set_user_image(&mut self, ctx: &Context, image: ColorImage) {
        let data = ImageData::from(image);
        match &mut self.user_image {
            Some(texture) => texture.set(data, TextureOptions::LINEAR),
            None => {
                self.user_image =
                    Some(ctx.load_texture("user://preview", data, TextureOptions::LINEAR));
            }
        }
    }

    pub fn user_image(&self) -> Option<&TextureHandle> {
        self.user_image.as_ref()
    }
}

/// Shrinks to fit the given box, keeping aspect; never upscales.
pub fn scaled_size(original: egui::Vec2, max_width: f32, max_height: f32) -> egui::Vec2 {
    if original.x <= max_width && original.y <= max_height {
        return original;
    }
    let width_ratio = max_width / original.x;
    let height_ratio = max_height / original.y;
    let scale = width_ratio.min(height_ratio);
    egui::Vec2::new(original.x * scale, original.y * scale)
}

pub fn decode_image(bytes: &[u8]) -> Result<ColorImage, image::ImageError> {
    let image = image::load_from_memory(bytes)?;
    let image = image.to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    let pixels = image.into_vec();
    Ok(ColorImage::from_rgba_unmultiplied(size, &pixels))
}

fn rasterize(asset: MediaAsset) -> ColorImage {
    match asset {
        MediaAsset::Thumb(_) => rasterize_thumb(asset),
        MediaAsset::Avatar(_) => rasterize_avatar(asset),
    }
}

/// Vertical gradient from the asset's base color into its darker accent,
/// with a soft highlight disc standing in for cover art.
fn rasterize_thumb(asset: MediaAsset) -> ColorImage {
    let [w, h] = THUMB_PIXELS;
    let (r0, g0, b0) = asset.base_color();
    let (r1, g1, b1) = asset.accent_color();
    let mut rgba = Vec::with_capacity(w * h * 4);

    let cx = w as f32 * 0.68;
    let cy = h as f32 * 0.42;
    let radius = h as f32 * 0.30;

    for y in 0..h {
        let t = y as f32 / (h - 1) as f32;
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        let row = (mix(r0, r1), mix(g0, g1), mix(b0, b1));
        for x in 0..w {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let inside = (dx * dx + dy * dy).sqrt() < radius;
            let (r, g, b) = if inside {
                (
                    row.0.saturating_add(50),
                    row.1.saturating_add(50),
                    row.2.saturating_add(50),
                )
            } else {
                row
            };
            rgba.extend_from_slice(&[r, g, b, 255]);
        }
    }
    ColorImage::from_rgba_unmultiplied(THUMB_PIXELS, &rgba)
}

/// Filled disc on a transparent background so it reads as a round avatar.
fn rasterize_avatar(asset: MediaAsset) -> ColorImage {
    let [w, h] = AVATAR_PIXELS;
    let (r, g, b) = asset.base_color();
    let mut rgba = Vec::with_capacity(w * h * 4);

    let c = w as f32 / 2.0 - 0.5;
    let radius = w as f32 / 2.0;
    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 - c;
            let dy = y as f32 - c;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < radius - 1.0 {
                // Lighter core so the disc has some depth.
                let lift = ((1.0 - dist / radius) * 60.0) as u8;
                rgba.extend_from_slice(&[
                    r.saturating_add(lift),
                    g.saturating_add(lift),
                    b.saturating_add(lift),
                    255,
                ]);
            } else if dist < radius {
                rgba.extend_from_slice(&[r, g, b, 120]);
            } else {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    ColorImage::from_rgba_unmultiplied(AVATAR_PIXELS, &rgba)
}
