#![allow(clippy::float_cmp)]

use super::*;
use crate::scene::Stroke;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn zoomed(zoom: f64) -> Viewport {
    Viewport { zoom, offset_x: 0.0, offset_y: 0.0 }
}

fn cfg() -> HitConfig {
    HitConfig::default()
}

// =============================================================
// distance_to_segment
// =============================================================

#[test]
fn segment_distance_perpendicular() {
    assert_eq!(distance_to_segment(pt(50.0, 10.0), pt(0.0, 0.0), pt(100.0, 0.0)), 10.0);
}

#[test]
fn segment_distance_clamps_before_start() {
    assert_eq!(distance_to_segment(pt(-3.0, 4.0), pt(0.0, 0.0), pt(100.0, 0.0)), 5.0);
}

#[test]
fn segment_distance_clamps_past_end() {
    assert_eq!(distance_to_segment(pt(106.0, 8.0), pt(0.0, 0.0), pt(100.0, 0.0)), 10.0);
}

#[test]
fn segment_distance_degenerate_segment() {
    assert_eq!(distance_to_segment(pt(3.0, 4.0), pt(0.0, 0.0), pt(0.0, 0.0)), 5.0);
}

#[test]
fn segment_distance_on_segment_is_zero() {
    assert_eq!(distance_to_segment(pt(25.0, 25.0), pt(0.0, 0.0), pt(50.0, 50.0)), 0.0);
}

// =============================================================
// find_pin_near
// =============================================================

#[test]
fn pin_inside_radius_is_hit() {
    let mut scene = Scene::new();
    let id = scene.add_pin(pt(100.0, 100.0));
    assert_eq!(find_pin_near(&scene, &zoomed(1.0), pt(110.0, 100.0), &cfg()), Some(id));
}

#[test]
fn pin_at_exact_radius_is_missed() {
    let mut scene = Scene::new();
    scene.add_pin(pt(100.0, 100.0));
    assert_eq!(find_pin_near(&scene, &zoomed(1.0), pt(115.0, 100.0), &cfg()), None);
}

#[test]
fn pin_radius_is_constant_in_screen_space() {
    // A cursor D screen pixels from the pin hits iff D < 15, at any zoom.
    for zoom in [0.1, 0.25, 0.5, 1.0, 1.5, 2.0, 3.0] {
        let vp = Viewport { zoom, offset_x: 37.0, offset_y: -11.0 };
        let mut scene = Scene::new();
        let world = pt(40.0, 40.0);
        scene.add_pin(world);
        let pin_screen = vp.screen_from_world(world);
        for (d, expect_hit) in [(14.0, true), (14.9, true), (15.5, false), (30.0, false)] {
            let cursor = vp.world_from_screen(pt(pin_screen.x + d, pin_screen.y));
            let hit = find_pin_near(&scene, &vp, cursor, &cfg()).is_some();
            assert_eq!(hit, expect_hit, "zoom {zoom}, screen distance {d}");
        }
    }
}

#[test]
fn first_match_prefers_insertion_order_over_distance() {
    let mut scene = Scene::new();
    let far = scene.add_pin(pt(10.0, 0.0));
    let near = scene.add_pin(pt(1.0, 0.0));
    let cursor = pt(0.0, 0.0);

    assert_eq!(find_pin_near(&scene, &zoomed(1.0), cursor, &cfg()), Some(far));

    let nearest = HitConfig { policy: HitPolicy::Nearest, ..cfg() };
    assert_eq!(find_pin_near(&scene, &zoomed(1.0), cursor, &nearest), Some(near));
}

#[test]
fn nearest_policy_ties_go_to_earlier_pin() {
    let mut scene = Scene::new();
    let left = scene.add_pin(pt(-5.0, 0.0));
    scene.add_pin(pt(5.0, 0.0));
    let nearest = HitConfig { policy: HitPolicy::Nearest, ..cfg() };
    assert_eq!(find_pin_near(&scene, &zoomed(1.0), pt(0.0, 0.0), &nearest), Some(left));
}

#[test]
fn empty_scene_has_no_hits() {
    let scene = Scene::new();
    assert_eq!(hit_test(&scene, &zoomed(1.0), pt(0.0, 0.0), &cfg()), None);
}

// =============================================================
// find_line_near
// =============================================================

fn horizontal_line() -> (Scene, LineId) {
    let mut scene = Scene::new();
    let a = scene.add_pin(pt(0.0, 0.0));
    let b = scene.add_pin(pt(200.0, 0.0));
    let line = scene.add_line(a, b, &Stroke::default()).unwrap();
    (scene, line)
}

#[test]
fn line_within_tolerance_is_hit() {
    let (scene, line) = horizontal_line();
    assert_eq!(find_line_near(&scene, &zoomed(1.0), pt(100.0, 9.0), &cfg()), Some(line));
    assert_eq!(find_line_near(&scene, &zoomed(1.0), pt(100.0, 10.0), &cfg()), None);
}

#[test]
fn line_tolerance_scales_with_zoom() {
    let (scene, line) = horizontal_line();
    // At zoom 0.5 the world tolerance doubles to 20.
    assert_eq!(find_line_near(&scene, &zoomed(0.5), pt(100.0, 19.0), &cfg()), Some(line));
    // At zoom 2 it halves to 5.
    assert_eq!(find_line_near(&scene, &zoomed(2.0), pt(100.0, 6.0), &cfg()), None);
}

#[test]
fn line_hit_beyond_end_uses_clamped_distance() {
    let (scene, _) = horizontal_line();
    assert_eq!(find_line_near(&scene, &zoomed(1.0), pt(215.0, 0.0), &cfg()), None);
}

#[test]
fn hit_test_prefers_pins_over_lines() {
    let (scene, line) = horizontal_line();
    let first_pin = scene.pins()[0].id;
    assert_eq!(hit_test(&scene, &zoomed(1.0), pt(2.0, 0.0), &cfg()), Some(Hit::Pin(first_pin)));
    assert_eq!(hit_test(&scene, &zoomed(1.0), pt(100.0, 2.0), &cfg()), Some(Hit::Line(line)));
}
