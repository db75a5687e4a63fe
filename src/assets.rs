use crate::loader::ListKind;

pub const THUMB_POOL_SIZE: u32 = 17;
pub const AVATAR_POOL_SIZE: u32 = 17;

/// Avatar reserved for the tile created from an upload.
pub const USER_AVATAR: MediaAsset = MediaAsset::Avatar(99);

/// Fallbacks used while a list resource is missing or unreadable.
pub const FALLBACK_TITLE: &str = "Epic Mountain Biking Adventure in the Alps";
pub const FALLBACK_CHANNEL: &str = "BOOS";

/// Identifier for one generated placeholder image. Thumbnails and avatars
/// are disjoint pools; the index seeds the generated composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaAsset {
    Thumb(u32),
    Avatar(u32),
}

impl MediaAsset {
    pub fn texture_name(&self) -> String {
        match self {
            MediaAsset::Thumb(i) => format!("thumb://{i}"),
            MediaAsset::Avatar(i) => format!("avatar://{i}"),
        }
    }

    /// Base color of the generated art, derived from the index so every
    /// asset in a pool looks distinct.
    pub fn base_color(&self) -> (u8, u8, u8) {
        let (seed, saturation, lightness) = match self {
            MediaAsset::Thumb(i) => (*i, 0.55, 0.38),
            MediaAsset::Avatar(i) => (i.wrapping_add(31), 0.62, 0.52),
        };
        let hue = (seed as f32 * 0.618_034).fract() * 360.0;
        hsl_to_rgb(hue, saturation, lightness)
    }

    /// Secondary color for the gradient end of a thumbnail.
    pub fn accent_color(&self) -> (u8, u8, u8) {
        let (r, g, b) = self.base_color();
        (r / 3, g / 3, b / 3)
    }
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_byte = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_byte(r1), to_byte(g1), to_byte(b1))
}

/// The four candidate pools the grid draws from. Image pools are generated;
/// the text pools start from single-element built-ins and are replaced when
/// the list resources load.
#[derive(Clone, Debug)]
pub struct Pools {
    pub thumbnails: Vec<MediaAsset>,
    pub avatars: Vec<MediaAsset>,
    pub titles: Vec<String>,
    pub channels: Vec<String>,
}

impl Pools {
    pub fn builtin() -> Self {
        Self {
            thumbnails: (0..THUMB_POOL_SIZE).map(MediaAsset::Thumb).collect(),
            avatars: (0..AVATAR_POOL_SIZE).map(MediaAsset::Avatar).collect(),
            titles: vec![FALLBACK_TITLE.to_owned()],
            channels: vec![FALLBACK_CHANNEL.to_owned()],
        }
    }

    pub fn adopt(&mut self, kind: ListKind, entries: Vec<String>) {
        match kind {
            ListKind::Titles => self.titles = entries,
            ListKind::Channels => self.channels = entries,
        }
    }
}
