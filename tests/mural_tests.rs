// Host-side tests for mural layout and drag coordination.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod manifest {
    include!("../src/core/manifest.rs");
}
mod mural {
    include!("../src/core/mural.rs");
}

use constants::*;
use glam::Vec2;
use manifest::*;
use mural::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

const CONTAINER: Vec2 = Vec2::new(1000.0, 600.0);

fn photos() -> &'static [&'static str] {
    AssetManifest::Original.paths()
}

#[test]
fn manifests_list_fourteen_distinct_photos() {
    for m in [AssetManifest::Original, AssetManifest::Optimized] {
        let set: HashSet<&str> = m.paths().iter().copied().collect();
        assert_eq!(set.len(), 14);
    }
    assert!(!AssetManifest::Original.lazy_loading());
    assert!(AssetManifest::Optimized.lazy_loading());
    assert!(AssetManifest::Optimized
        .paths()
        .iter()
        .all(|p| p.starts_with("/polaroids/optimized/")));
}

#[test]
fn presets_follow_breakpoints() {
    assert_eq!(LayoutPreset::for_viewport(320.0), PHONE_LAYOUT);
    assert_eq!(LayoutPreset::for_viewport(480.0), PHONE_LAYOUT);
    assert_eq!(LayoutPreset::for_viewport(481.0), TABLET_LAYOUT);
    assert_eq!(LayoutPreset::for_viewport(768.0), TABLET_LAYOUT);
    assert_eq!(LayoutPreset::for_viewport(769.0), DESKTOP_LAYOUT);
}

#[test]
fn layout_matches_table_at_reference_widths() {
    let cases = [
        (400.0, 4, Vec2::new(90.0, 120.0), 2, 2),
        (600.0, 6, Vec2::new(100.0, 130.0), 3, 2),
        (1200.0, 14, Vec2::new(140.0, 180.0), 5, 3),
    ];
    for (viewport, count, size, cols, rows) in cases {
        let mural = Mural::new(photos(), viewport, CONTAINER, 7);
        assert_eq!(mural.tiles().len(), count, "viewport {}", viewport);
        assert_eq!(mural.preset().cols, cols);
        assert_eq!(mural.preset().rows, rows);
        for tile in mural.tiles() {
            assert_eq!(tile.size, size);
            assert_eq!(tile.scale, 1.0);
            assert!(!tile.is_dragging());
        }
    }
}

#[test]
fn layout_is_deterministic_for_a_seed() {
    let a = Mural::new(photos(), 1200.0, CONTAINER, 99);
    let b = Mural::new(photos(), 1200.0, CONTAINER, 99);
    for (ta, tb) in a.tiles().iter().zip(b.tiles()) {
        assert_eq!(ta.image, tb.image);
        assert_eq!(ta.position, tb.position);
        assert_eq!(ta.rotation_deg, tb.rotation_deg);
    }
}

#[test]
fn desktop_layout_uses_every_photo_once() {
    let mural = Mural::new(photos(), 1400.0, CONTAINER, 3);
    let shown: HashSet<&str> = mural.tiles().iter().map(|t| t.image).collect();
    let all: HashSet<&str> = photos().iter().copied().collect();
    assert_eq!(shown, all);
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let mut got = shuffled(photos(), &mut rng);
        let mut want = photos().to_vec();
        got.sort_unstable();
        want.sort_unstable();
        assert_eq!(got, want);
    }
}

#[test]
fn shuffle_reaches_every_slot() {
    // each photo should land first at least once over many shuffles
    let mut rng = StdRng::seed_from_u64(5);
    let mut firsts = HashSet::new();
    for _ in 0..2_000 {
        firsts.insert(shuffled(photos(), &mut rng)[0]);
    }
    assert_eq!(firsts.len(), photos().len());
}

#[test]
fn placements_stay_inside_margin_with_bounded_rotation() {
    for (viewport, container) in [
        (400.0, Vec2::new(360.0, 420.0)),
        (700.0, Vec2::new(680.0, 500.0)),
        (1440.0, Vec2::new(1200.0, 700.0)),
    ] {
        for seed in 0..25 {
            let mural = Mural::new(photos(), viewport, container, seed);
            let preset = *mural.preset();
            for tile in mural.tiles() {
                assert!(tile.position.x >= TILE_MARGIN);
                assert!(tile.position.y >= TILE_MARGIN);
                assert!(tile.position.x <= container.x - tile.size.x - TILE_MARGIN);
                assert!(tile.position.y <= container.y - tile.size.y - TILE_MARGIN);
                assert!(tile.rotation_deg.abs() <= preset.max_rotation_deg);
                assert_eq!(tile.rotation_deg, tile.base_rotation_deg);
            }
        }
    }
}

#[test]
fn placement_jitter_stays_within_cell_fraction() {
    // a roomy container so the margin clamp never kicks in
    let container = Vec2::new(3000.0, 2400.0);
    let preset = DESKTOP_LAYOUT;
    let cell = preset.cell_size(container);
    let mut rng = StdRng::seed_from_u64(17);
    for index in 0..15 {
        let placed = place_tile(index, &preset, container, &mut rng);
        let col = (index % preset.cols) as f32;
        let row = ((index / preset.cols) % preset.rows) as f32;
        let centered = Vec2::new(
            col * cell.x + cell.x / 2.0,
            row * cell.y + cell.y / 2.0,
        ) - preset.tile_size / 2.0;
        let jitter = placed.position - centered;
        assert!(jitter.x.abs() <= cell.x * preset.jitter_factor / 2.0 + 1e-3);
        assert!(jitter.y.abs() <= cell.y * preset.jitter_factor / 2.0 + 1e-3);
    }
}

#[test]
fn tiny_container_pins_tiles_to_margin() {
    let mural = Mural::new(photos(), 1200.0, Vec2::new(50.0, 50.0), 1);
    for tile in mural.tiles() {
        assert_eq!(tile.position, Vec2::splat(TILE_MARGIN));
    }
}

#[test]
fn empty_manifest_yields_no_tiles() {
    let mural = Mural::new(&[], 1200.0, CONTAINER, 1);
    assert!(mural.tiles().is_empty());
    let mut mural = mural;
    assert!(mural.press(0, InputSource::Mouse, Vec2::ZERO).is_none());
}

#[test]
fn clamp_drag_limits_both_ends() {
    assert_eq!(clamp_drag(-500.0, 1000.0, 140.0, 20.0), -20.0);
    assert_eq!(clamp_drag(5000.0, 1000.0, 140.0, 20.0), 880.0);
    assert_eq!(clamp_drag(300.0, 1000.0, 140.0, 20.0), 300.0);
}

#[test]
fn mouse_pickup_tilts_and_scales() {
    let mut mural = Mural::new(photos(), 1200.0, CONTAINER, 8);
    let base = mural.tiles()[2].base_rotation_deg;
    assert!(mural.press(2, InputSource::Mouse, Vec2::new(10.0, 10.0)).is_some());
    let tile = &mural.tiles()[2];
    assert!(tile.is_dragging());
    assert_eq!(tile.scale, MOUSE_PICKUP_SCALE);
    assert!((tile.rotation_deg - base).abs() <= MOUSE_PICKUP_JITTER_DEG);
    assert_eq!(mural.held_by(InputSource::Mouse), Some(2));
}

#[test]
fn touch_pickup_uses_touch_feedback() {
    let mut mural = Mural::new(photos(), 400.0, CONTAINER, 8);
    let base = mural.tiles()[1].base_rotation_deg;
    assert!(mural.press(1, InputSource::Touch(4), Vec2::ZERO).is_some());
    let tile = &mural.tiles()[1];
    assert_eq!(tile.scale, TOUCH_PICKUP_SCALE);
    assert!((tile.rotation_deg - base).abs() <= TOUCH_PICKUP_JITTER_DEG);
}

#[test]
fn drag_follows_pointer_delta() {
    let mut mural = Mural::new(photos(), 1200.0, CONTAINER, 8);
    let start = mural.tiles()[0].position;
    mural.press(0, InputSource::Mouse, Vec2::new(100.0, 100.0));
    assert_eq!(
        mural.drag(InputSource::Mouse, Vec2::new(103.0, 95.0), CONTAINER),
        Some(0)
    );
    let moved = mural.tiles()[0].position;
    assert!((moved - (start + Vec2::new(3.0, -5.0))).length() < 1e-4);
}

#[test]
fn drag_is_clamped_with_overlap_in_every_direction() {
    let far = [
        Vec2::new(-1e5, -1e5),
        Vec2::new(1e5, 1e5),
        Vec2::new(-1e5, 1e5),
        Vec2::new(1e5, -1e5),
    ];
    for (source, overlap) in [
        (InputSource::Mouse, MOUSE_DRAG_OVERLAP),
        (InputSource::Touch(1), TOUCH_DRAG_OVERLAP),
    ] {
        for target in far {
            let mut mural = Mural::new(photos(), 1200.0, CONTAINER, 21);
            let size = mural.tiles()[5].size;
            mural.press(5, source, Vec2::ZERO);
            mural.drag(source, target, CONTAINER);
            let pos = mural.tiles()[5].position;
            assert!(pos.x >= -overlap && pos.x <= CONTAINER.x - size.x + overlap);
            assert!(pos.y >= -overlap && pos.y <= CONTAINER.y - size.y + overlap);
            // pinned exactly at the limit
            assert!(pos.x == -overlap || pos.x == CONTAINER.x - size.x + overlap);
        }
    }
}

#[test]
fn release_restores_rotation_and_scale() {
    let mut mural = Mural::new(photos(), 1200.0, CONTAINER, 13);
    let base = mural.tiles()[3].base_rotation_deg;
    mural.press(3, InputSource::Mouse, Vec2::ZERO);
    mural.drag(InputSource::Mouse, Vec2::new(40.0, 40.0), CONTAINER);
    let dropped_at = mural.tiles()[3].position;
    assert_eq!(mural.release(InputSource::Mouse), Some(3));

    let tile = &mural.tiles()[3];
    assert!(!tile.is_dragging());
    assert_eq!(tile.rotation_deg, base);
    assert_eq!(tile.scale, 1.0);
    // position is kept where it was dropped
    assert_eq!(tile.position, dropped_at);
    assert_eq!(mural.active_sessions(), 0);
}

#[test]
fn moves_without_a_session_are_ignored() {
    let mut mural = Mural::new(photos(), 1200.0, CONTAINER, 2);
    let before: Vec<Vec2> = mural.tiles().iter().map(|t| t.position).collect();
    assert_eq!(mural.drag(InputSource::Mouse, Vec2::new(500.0, 500.0), CONTAINER), None);
    assert_eq!(mural.release(InputSource::Mouse), None);
    let after: Vec<Vec2> = mural.tiles().iter().map(|t| t.position).collect();
    assert_eq!(before, after);
}

#[test]
fn concurrent_touches_drag_independent_tiles() {
    let mut mural = Mural::new(photos(), 1200.0, CONTAINER, 30);
    let a0 = mural.tiles()[0].position;
    let b0 = mural.tiles()[1].position;
    assert!(mural.press(0, InputSource::Touch(1), Vec2::new(0.0, 0.0)).is_some());
    assert!(mural.press(1, InputSource::Touch(2), Vec2::new(0.0, 0.0)).is_some());
    assert_eq!(mural.active_sessions(), 2);

    mural.drag(InputSource::Touch(1), Vec2::new(5.0, 0.0), CONTAINER);
    mural.drag(InputSource::Touch(2), Vec2::new(0.0, 7.0), CONTAINER);
    assert!((mural.tiles()[0].position - (a0 + Vec2::new(5.0, 0.0))).length() < 1e-4);
    assert!((mural.tiles()[1].position - (b0 + Vec2::new(0.0, 7.0))).length() < 1e-4);

    assert_eq!(mural.release(InputSource::Touch(1)), Some(0));
    assert!(mural.tiles()[1].is_dragging());
    assert_eq!(mural.release(InputSource::Touch(2)), Some(1));
}

#[test]
fn held_tile_ignores_a_second_source() {
    let mut mural = Mural::new(photos(), 1200.0, CONTAINER, 30);
    assert!(mural.press(4, InputSource::Touch(1), Vec2::ZERO).is_some());
    assert!(mural.press(4, InputSource::Mouse, Vec2::ZERO).is_none());
    assert_eq!(mural.held_by(InputSource::Mouse), None);
    assert_eq!(mural.held_by(InputSource::Touch(1)), Some(4));
}

#[test]
fn pressing_again_drops_the_previous_tile() {
    let mut mural = Mural::new(photos(), 1200.0, CONTAINER, 30);
    assert_eq!(
        mural.press(0, InputSource::Mouse, Vec2::ZERO),
        Some(PressOutcome {
            picked: 0,
            dropped: None
        })
    );
    // the earlier tile is reported so its element can be put down as well
    assert_eq!(
        mural.press(1, InputSource::Mouse, Vec2::ZERO),
        Some(PressOutcome {
            picked: 1,
            dropped: Some(0)
        })
    );
    assert!(!mural.tiles()[0].is_dragging());
    assert_eq!(mural.tiles()[0].scale, 1.0);
    assert_eq!(mural.tiles()[0].rotation_deg, mural.tiles()[0].base_rotation_deg);
    assert_eq!(mural.held_by(InputSource::Mouse), Some(1));
    assert_eq!(mural.active_sessions(), 1);
}

#[test]
fn refused_press_keeps_the_current_tile() {
    let mut mural = Mural::new(photos(), 1200.0, CONTAINER, 30);
    assert!(mural.press(2, InputSource::Touch(1), Vec2::ZERO).is_some());
    assert!(mural.press(0, InputSource::Mouse, Vec2::ZERO).is_some());
    // tile 2 belongs to the touch, so the mouse keeps tile 0
    assert_eq!(mural.press(2, InputSource::Mouse, Vec2::ZERO), None);
    assert_eq!(mural.held_by(InputSource::Mouse), Some(0));
    assert!(mural.tiles()[0].is_dragging());
}
