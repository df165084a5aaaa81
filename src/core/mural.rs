// Photo mural layout and drag handling.
//
// The mural scatters photo tiles over a grid with random jitter and rotation,
// then lets the user pick tiles up and move them around. [`Mural`] doubles as
// the drag coordinator: it remembers which tile each input source (the mouse,
// or an individual touch point) is holding and routes moves/releases to it.

use super::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// Responsive layout parameters for one viewport class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutPreset {
    /// `None` shows every photo in the manifest.
    pub max_tiles: Option<usize>,
    pub tile_size: Vec2,
    pub cols: usize,
    pub rows: usize,
    pub jitter_factor: f32,
    pub max_rotation_deg: f32,
}

pub const PHONE_LAYOUT: LayoutPreset = LayoutPreset {
    max_tiles: Some(4),
    tile_size: Vec2::new(90.0, 120.0),
    cols: 2,
    rows: 2,
    jitter_factor: MOBILE_JITTER_FACTOR,
    max_rotation_deg: MOBILE_MAX_ROTATION_DEG,
};

pub const TABLET_LAYOUT: LayoutPreset = LayoutPreset {
    max_tiles: Some(6),
    tile_size: Vec2::new(100.0, 130.0),
    cols: 3,
    rows: 2,
    jitter_factor: MOBILE_JITTER_FACTOR,
    max_rotation_deg: MOBILE_MAX_ROTATION_DEG,
};

pub const DESKTOP_LAYOUT: LayoutPreset = LayoutPreset {
    max_tiles: None,
    tile_size: Vec2::new(140.0, 180.0),
    cols: 5,
    rows: 3,
    jitter_factor: DESKTOP_JITTER_FACTOR,
    max_rotation_deg: DESKTOP_MAX_ROTATION_DEG,
};

impl LayoutPreset {
    pub fn for_viewport(width: f32) -> Self {
        if width <= PHONE_MAX_WIDTH {
            PHONE_LAYOUT
        } else if width <= TABLET_MAX_WIDTH {
            TABLET_LAYOUT
        } else {
            DESKTOP_LAYOUT
        }
    }

    /// How many tiles to show when `available` photos exist.
    pub fn tile_count(&self, available: usize) -> usize {
        self.max_tiles.map_or(available, |max| max.min(available))
    }

    pub fn cell_size(&self, container: Vec2) -> Vec2 {
        Vec2::new(
            container.x / self.cols.max(1) as f32,
            container.y / self.rows.max(1) as f32,
        )
    }
}

/// Clamp where the lower bound wins if the range is empty.
#[inline]
fn clamp_low_wins(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

/// Limit a dragged tile coordinate to [-overlap, container - tile + overlap].
#[inline]
pub fn clamp_drag(value: f32, container: f32, tile: f32, overlap: f32) -> f32 {
    clamp_low_wins(value, -overlap, container - tile + overlap)
}

/// Uniform random permutation of the manifest.
pub fn shuffled<R: Rng>(manifest: &[&'static str], rng: &mut R) -> Vec<&'static str> {
    let mut photos = manifest.to_vec();
    photos.shuffle(rng);
    photos
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilePlacement {
    pub position: Vec2,
    pub rotation_deg: f32,
}

/// Initial position and rotation of the tile at `index`.
pub fn place_tile<R: Rng>(
    index: usize,
    preset: &LayoutPreset,
    container: Vec2,
    rng: &mut R,
) -> TilePlacement {
    let cols = preset.cols.max(1);
    let rows = preset.rows.max(1);
    let cell = preset.cell_size(container);
    let col = index % cols;
    let row = (index / cols) % rows;

    let center = Vec2::new(
        col as f32 * cell.x + cell.x / 2.0,
        row as f32 * cell.y + cell.y / 2.0,
    );
    let jitter = Vec2::new(
        (rng.gen::<f32>() - 0.5) * cell.x * preset.jitter_factor,
        (rng.gen::<f32>() - 0.5) * cell.y * preset.jitter_factor,
    );
    let raw = center - preset.tile_size / 2.0 + jitter;
    let limit = container - preset.tile_size - Vec2::splat(TILE_MARGIN);
    let position = Vec2::new(
        clamp_low_wins(raw.x, TILE_MARGIN, limit.x),
        clamp_low_wins(raw.y, TILE_MARGIN, limit.y),
    );
    let rotation_deg = (rng.gen::<f32>() * 2.0 - 1.0) * preset.max_rotation_deg;
    TilePlacement {
        position,
        rotation_deg,
    }
}

/// Where a drag comes from. Each touch point is its own source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch(i32),
}

impl InputSource {
    pub fn overlap(self) -> f32 {
        match self {
            InputSource::Mouse => MOUSE_DRAG_OVERLAP,
            InputSource::Touch(_) => TOUCH_DRAG_OVERLAP,
        }
    }

    pub fn pickup_jitter_deg(self) -> f32 {
        match self {
            InputSource::Mouse => MOUSE_PICKUP_JITTER_DEG,
            InputSource::Touch(_) => TOUCH_PICKUP_JITTER_DEG,
        }
    }

    pub fn pickup_scale(self) -> f32 {
        match self {
            InputSource::Mouse => MOUSE_PICKUP_SCALE,
            InputSource::Touch(_) => TOUCH_PICKUP_SCALE,
        }
    }
}

/// State of one press-move-release interaction on a tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub source: InputSource,
    pub pointer_start: Vec2,
    pub tile_start: Vec2,
}

#[derive(Clone, Debug)]
pub struct Tile {
    pub image: &'static str,
    /// Left/top offset inside the container, px.
    pub position: Vec2,
    pub size: Vec2,
    pub rotation_deg: f32,
    pub base_rotation_deg: f32,
    pub scale: f32,
    pub session: Option<DragSession>,
}

impl Tile {
    pub fn new(image: &'static str, placement: TilePlacement, size: Vec2) -> Self {
        Self {
            image,
            position: placement.position,
            size,
            rotation_deg: placement.rotation_deg,
            base_rotation_deg: placement.rotation_deg,
            scale: 1.0,
            session: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Start a session; `jitter_deg` tilts the tile slightly while held.
    pub fn pick_up(&mut self, source: InputSource, pointer: Vec2, jitter_deg: f32) {
        self.session = Some(DragSession {
            source,
            pointer_start: pointer,
            tile_start: self.position,
        });
        self.rotation_deg = self.base_rotation_deg + jitter_deg;
        self.scale = source.pickup_scale();
    }

    /// Follow the pointer. Returns false when the tile is not held.
    pub fn drag_to(&mut self, pointer: Vec2, container: Vec2) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        let target = session.tile_start + (pointer - session.pointer_start);
        let overlap = session.source.overlap();
        self.position = Vec2::new(
            clamp_drag(target.x, container.x, self.size.x, overlap),
            clamp_drag(target.y, container.y, self.size.y, overlap),
        );
        true
    }

    /// End the session, restoring the resting rotation and scale.
    pub fn put_down(&mut self) -> bool {
        if self.session.take().is_none() {
            return false;
        }
        self.rotation_deg = self.base_rotation_deg;
        self.scale = 1.0;
        true
    }
}

/// Tiles touched by a successful [`Mural::press`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PressOutcome {
    pub picked: usize,
    pub dropped: Option<usize>,
}

pub struct Mural {
    tiles: Vec<Tile>,
    preset: LayoutPreset,
    active: Vec<(InputSource, usize)>,
    rng: StdRng,
}

impl Mural {
    /// Shuffle the manifest and scatter tiles for the given viewport/container.
    pub fn new(manifest: &[&'static str], viewport_width: f32, container: Vec2, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let preset = LayoutPreset::for_viewport(viewport_width);
        let photos = shuffled(manifest, &mut rng);
        let count = preset.tile_count(photos.len());
        let mut tiles = Vec::with_capacity(count);
        for i in 0..count {
            let placement = place_tile(i, &preset, container, &mut rng);
            tiles.push(Tile::new(photos[i % photos.len()], placement, preset.tile_size));
        }
        Self {
            tiles,
            preset,
            active: Vec::new(),
            rng,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn preset(&self) -> &LayoutPreset {
        &self.preset
    }

    /// Tile currently held by `source`, if any.
    pub fn held_by(&self, source: InputSource) -> Option<usize> {
        self.active
            .iter()
            .find(|(s, _)| *s == source)
            .map(|&(_, tile)| tile)
    }

    pub fn active_sessions(&self) -> usize {
        self.active.len()
    }

    /// Begin dragging `tile` with `source`. A tile held by another source is
    /// left alone; a source already holding a tile drops it first, and the
    /// outcome names that tile so its view can be restored too.
    pub fn press(
        &mut self,
        tile: usize,
        source: InputSource,
        pointer: Vec2,
    ) -> Option<PressOutcome> {
        if tile >= self.tiles.len() || self.tiles[tile].is_dragging() {
            return None;
        }
        let dropped = self.release(source);
        let jitter = (self.rng.gen::<f32>() * 2.0 - 1.0) * source.pickup_jitter_deg();
        self.tiles[tile].pick_up(source, pointer, jitter);
        self.active.push((source, tile));
        Some(PressOutcome {
            picked: tile,
            dropped,
        })
    }

    /// Route a move to the tile held by `source`; returns the moved tile.
    pub fn drag(&mut self, source: InputSource, pointer: Vec2, container: Vec2) -> Option<usize> {
        let tile = self.held_by(source)?;
        self.tiles[tile].drag_to(pointer, container).then_some(tile)
    }

    /// End the session of `source`; returns the released tile.
    pub fn release(&mut self, source: InputSource) -> Option<usize> {
        let slot = self.active.iter().position(|(s, _)| *s == source)?;
        let (_, tile) = self.active.swap_remove(slot);
        self.tiles[tile].put_down();
        Some(tile)
    }
}
