use rand::Rng;

use crate::assets::{MediaAsset, Pools};
use crate::shuffle::{generate_view_count, shuffled};

pub const PLACEHOLDER_TILE_COUNT: usize = 9;

/// Channel line rendered under a tile title, e.g. "VPRO" / "417K weergaven".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Byline {
    pub channel: String,
    pub views: String,
}

/// Which optional slots a tile's layout carries. The thumbnail slot always
/// exists; the byline is created on first population.
#[derive(Clone, Copy, Debug)]
pub struct TileSlots {
    pub avatar: bool,
    pub title: bool,
}

impl Default for TileSlots {
    fn default() -> Self {
        Self {
            avatar: true,
            title: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Tile {
    pub slots: TileSlots,
    pub thumbnail: Option<MediaAsset>,
    pub avatar: Option<MediaAsset>,
    pub title: Option<String>,
    pub byline: Option<Byline>,
}

/// The placeholder tiles. The user tile lives outside this grid and is only
/// ever written by the upload flow.
#[derive(Clone, Debug)]
pub struct Grid {
    pub tiles: Vec<Tile>,
}

impl Grid {
    pub fn with_placeholders(count: usize) -> Self {
        Self {
            tiles: vec![Tile::default(); count],
        }
    }

    /// Draws a fresh shuffle of every pool and binds each tile in order.
    /// A pool shorter than the grid leaves the tail of the grid untouched
    /// for that attribute; slots a tile does not have are skipped.
    pub fn populate<R: Rng>(&mut self, pools: &Pools, rng: &mut R) {
        let thumbs = shuffled(&pools.thumbnails, rng);
        let avatars = shuffled(&pools.avatars, rng);
        let titles = shuffled(&pools.titles, rng);
        let channels = shuffled(&pools.channels, rng);

        for (i, tile) in self.tiles.iter_mut().enumerate() {
            if let Some(thumb) = thumbs.get(i) {
                tile.thumbnail = Some(*thumb);
            }
            if tile.slots.avatar {
                if let Some(avatar) = avatars.get(i) {
                    tile.avatar = Some(*avatar);
                }
            }
            if tile.slots.title {
                if let Some(title) = titles.get(i) {
                    tile.title = Some(title.clone());
                }
            }
            if let Some(channel) = channels.get(i) {
                tile.byline = Some(Byline {
                    channel: channel.clone(),
                    views: generate_view_count(rng),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn pools_of(size: u32) -> Pools {
        Pools {
            thumbnails: (0..size).map(MediaAsset::Thumb).collect(),
            avatars: (0..size).map(MediaAsset::Avatar).collect(),
            titles: (0..size).map(|i| format!("Title {i}")).collect(),
            channels: (0..size).map(|i| format!("Channel {i}")).collect(),
        }
    }

    #[test]
    fn fills_every_slot_when_pools_are_large_enough() {
        let mut grid = Grid::with_placeholders(5);
        let mut rng = StdRng::seed_from_u64(11);
        grid.populate(&pools_of(9), &mut rng);

        for tile in &grid.tiles {
            assert!(tile.thumbnail.is_some());
            assert!(tile.avatar.is_some());
            assert!(tile.title.is_some());
            let byline = tile.byline.as_ref().expect("byline");
            assert!(byline.channel.starts_with("Channel "));
            assert!(byline.views.ends_with("K weergaven"));
        }
    }

    #[test]
    fn draws_without_replacement_within_one_population() {
        let mut grid = Grid::with_placeholders(5);
        let mut rng = StdRng::seed_from_u64(12);
        grid.populate(&pools_of(9), &mut rng);

        let thumbs: HashSet<_> = grid.tiles.iter().filter_map(|t| t.thumbnail).collect();
        let titles: HashSet<_> = grid.tiles.iter().filter_map(|t| t.title.clone()).collect();
        assert_eq!(thumbs.len(), 5);
        assert_eq!(titles.len(), 5);
    }

    #[test]
    fn short_pool_leaves_tail_tiles_untouched() {
        let mut grid = Grid::with_placeholders(12);
        let mut rng = StdRng::seed_from_u64(13);
        grid.populate(&pools_of(9), &mut rng);

        for tile in &grid.tiles[..9] {
            assert!(tile.thumbnail.is_some());
        }
        for tile in &grid.tiles[9..] {
            assert!(tile.thumbnail.is_none());
            assert!(tile.avatar.is_none());
            assert!(tile.title.is_none());
            assert!(tile.byline.is_none());
        }
    }

    #[test]
    fn repopulation_rebinds_without_changing_structure() {
        let mut grid = Grid::with_placeholders(3);
        let mut rng = StdRng::seed_from_u64(14);
        grid.populate(&pools_of(3), &mut rng);
        grid.populate(&pools_of(3), &mut rng);

        assert_eq!(grid.tiles.len(), 3);
        let channels: HashSet<_> = grid
            .tiles
            .iter()
            .map(|t| t.byline.as_ref().expect("byline").channel.clone())
            .collect();
        assert_eq!(channels.len(), 3);
    }

    #[test]
    fn tiles_without_optional_slots_are_skipped() {
        let mut grid = Grid::with_placeholders(4);
        grid.tiles[2].slots = TileSlots {
            avatar: false,
            title: false,
        };
        let mut rng = StdRng::seed_from_u64(15);
        grid.populate(&pools_of(9), &mut rng);

        assert!(grid.tiles[2].thumbnail.is_some());
        assert!(grid.tiles[2].avatar.is_none());
        assert!(grid.tiles[2].title.is_none());
        assert!(grid.tiles[2].byline.is_some());
    }
}
