//! Worlds domain: tests for slider navigation and world item state.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::item::{LOCKED_LABEL, ScaleMotion, WorldItem};
use super::slider::{SlideChange, WorldSlider};
use crate::content::{SliderTuning, WorldDef, WorldTuning, rgb};

fn def() -> WorldDef {
    WorldDef {
        id: "world_fire".to_string(),
        name: "Fire World".to_string(),
        save_key: "World_Fire_Unlocked".to_string(),
        scene: "QuizBattle".to_string(),
        start_unlocked: false,
        progress: "0/15".to_string(),
        color: [1.0, 0.5, 0.2],
        unlocks: None,
    }
}

fn item(locked: bool, selected: bool) -> WorldItem {
    WorldItem::new(
        &def(),
        1,
        Vec2::new(420.0, 0.0),
        locked,
        selected,
        0.0,
        &WorldTuning::default(),
    )
}

fn slider(count: usize) -> WorldSlider {
    WorldSlider::new(count, &SliderTuning::default())
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(11)
}

// -----------------------------------------------------------------------------
// Slider
// -----------------------------------------------------------------------------

#[test]
fn test_slider_starts_snapped_on_first_world() {
    let slider = slider(3);
    assert_eq!(slider.current(), 0);
    assert_eq!(slider.position(), 0.0);
    assert!(!slider.is_sliding());
    assert!(!slider.can_previous());
    assert!(slider.can_next());
}

#[test]
fn test_slider_next_centers_new_world() {
    let mut slider = slider(3);
    assert_eq!(slider.next(), Some(SlideChange { from: 0, to: 1 }));
    assert!(slider.is_sliding());

    let halfway = slider.tick(0.1);
    assert!(halfway < 0.0 && halfway > -420.0);

    assert_eq!(slider.tick(0.5), -420.0);
    assert!(!slider.is_sliding());
}

#[test]
fn test_slider_clamps_at_ends() {
    let mut slider = slider(3);
    assert_eq!(slider.previous(), None);
    assert_eq!(slider.current(), 0);

    slider.next();
    slider.next();
    assert_eq!(slider.current(), 2);
    assert!(!slider.can_next());
    assert_eq!(slider.next(), None);
    assert_eq!(slider.current(), 2);
}

#[test]
fn test_new_slide_replaces_running_one() {
    let mut slider = slider(3);
    slider.next();
    slider.tick(0.1);
    let mid = slider.position();

    assert_eq!(slider.previous(), Some(SlideChange { from: 1, to: 0 }));
    let after = slider.tick(0.01);
    assert!(after >= mid);

    assert_eq!(slider.tick(1.0), 0.0);
}

#[test]
fn test_empty_slider_never_moves() {
    let mut slider = slider(0);
    assert!(slider.is_empty());
    assert_eq!(slider.next(), None);
    assert_eq!(slider.previous(), None);
}

// -----------------------------------------------------------------------------
// World item
// -----------------------------------------------------------------------------

#[test]
fn test_selected_world_starts_at_selected_scale() {
    assert_eq!(item(false, true).scale, 1.2);
    assert_eq!(item(false, false).scale, 1.0);
}

#[test]
fn test_select_scales_linearly() {
    let tuning = WorldTuning::default();
    let mut rng = rng();
    let mut world = item(false, false);

    world.select(&tuning);
    world.tick(0.1, &mut rng);
    assert!((world.scale - 1.1).abs() < 1e-4);

    world.tick(0.2, &mut rng);
    assert_eq!(world.scale, 1.2);
    assert_eq!(world.motion, ScaleMotion::Steady);

    world.deselect(&tuning);
    world.tick(1.0, &mut rng);
    assert_eq!(world.scale, 1.0);
}

#[test]
fn test_bump_punches_and_returns() {
    let tuning = WorldTuning::default();
    let mut rng = rng();
    let mut world = item(false, true);

    assert!(world.bump(&tuning));
    world.tick(0.15, &mut rng);
    assert!((world.scale - 1.2 * 1.15).abs() < 1e-4);

    world.tick(0.15, &mut rng);
    assert_eq!(world.scale, 1.2);
    assert_eq!(world.motion, ScaleMotion::Steady);
}

#[test]
fn test_bump_ignored_unless_selected_and_unlocked() {
    let tuning = WorldTuning::default();
    assert!(!item(false, false).bump(&tuning));
    assert!(!item(true, true).bump(&tuning));
}

#[test]
fn test_locked_world_refuses_to_play() {
    let locked = item(true, true);
    assert!(!locked.can_play());
    assert_eq!(locked.progress_label(), LOCKED_LABEL);
    assert!(locked.outline(0.0, &WorldTuning::default()).is_none());

    let open = item(false, true);
    assert!(open.can_play());
    assert_eq!(open.progress_label(), "0/15");
}

#[test]
fn test_locked_world_shows_locked_color() {
    let tuning = WorldTuning::default();
    assert_eq!(item(true, false).tint(&tuning), rgb(tuning.locked_color));
}

#[test]
fn test_only_selected_unlocked_world_has_outline() {
    let tuning = WorldTuning::default();
    assert!(item(false, true).outline(0.3, &tuning).is_some());
    assert!(item(false, false).outline(0.3, &tuning).is_none());
}

#[test]
fn test_unlock_pops_past_selected_scale_and_settles() {
    let tuning = WorldTuning::default();
    let mut rng = rng();
    let mut world = item(true, true);
    world.begin_unlock(&tuning);

    assert!(world.can_play());
    assert!(world.outline(0.0, &tuning).is_none());
    world.tick(1.0, &mut rng);
    assert!(world.pose(0.0, &tuning).offset.length() <= 3.0 + tuning.max_shake);

    // Shaking ends, pop up to the overshoot
    world.tick(0.6, &mut rng);
    world.tick(0.15, &mut rng);
    assert!((world.scale - 1.2 * 1.3).abs() < 1e-4);

    world.tick(0.15, &mut rng);
    assert!(!world.is_unlocking());
    assert_eq!(world.scale, 1.2);
    assert!(world.outline(0.0, &tuning).is_some());
}

#[test]
fn test_unlock_of_unselected_world_settles_at_rest() {
    let tuning = WorldTuning::default();
    let mut rng = rng();
    let mut world = item(true, false);
    world.begin_unlock(&tuning);

    for _ in 0..200 {
        world.tick(0.016, &mut rng);
    }
    assert!(!world.is_unlocking());
    assert_eq!(world.scale, 1.0);
}
