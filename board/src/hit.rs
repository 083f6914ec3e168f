//! Hit-testing pins and lines under the current zoom.
//!
//! Pick radii are configured in screen pixels and converted to world units
//! with the viewport's zoom, so targets keep the same on-screen size at any
//! zoom level. A candidate counts as hit only when its distance is strictly
//! below the radius.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::consts::{LINE_HIT_RADIUS_PX, PIN_HIT_RADIUS_PX};
use crate::scene::{LineId, PinId, Scene};
use crate::viewport::{Point, Viewport};

/// How to choose between several candidates inside the pick radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitPolicy {
    /// The first candidate in insertion order wins, even if a later one is closer.
    #[default]
    FirstMatch,
    /// The closest candidate wins; ties go to the earlier one.
    Nearest,
}

/// Pick radii and tie-break policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitConfig {
    pub pin_radius_px: f64,
    pub line_radius_px: f64,
    pub policy: HitPolicy,
}

impl Default for HitConfig {
    fn default() -> Self {
        Self { pin_radius_px: PIN_HIT_RADIUS_PX, line_radius_px: LINE_HIT_RADIUS_PX, policy: HitPolicy::FirstMatch }
    }
}

/// What was found under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Pin(PinId),
    Line(LineId),
}

/// Find the pin under `world`, if any.
#[must_use]
pub fn find_pin_near(scene: &Scene, viewport: &Viewport, world: Point, cfg: &HitConfig) -> Option<PinId> {
    let threshold = viewport.screen_dist_to_world(cfg.pin_radius_px);
    pick(scene.pins().iter().map(|p| (p.id, p.position().distance(world))), threshold, cfg.policy)
}

/// Find the line under `world`, if any.
#[must_use]
pub fn find_line_near(scene: &Scene, viewport: &Viewport, world: Point, cfg: &HitConfig) -> Option<LineId> {
    let threshold = viewport.screen_dist_to_world(cfg.line_radius_px);
    let candidates = scene
        .lines()
        .iter()
        .filter_map(|line| scene.endpoints(line).map(|(a, b)| (line.id, distance_to_segment(world, a, b))));
    pick(candidates, threshold, cfg.policy)
}

/// Pins take precedence over lines.
#[must_use]
pub fn hit_test(scene: &Scene, viewport: &Viewport, world: Point, cfg: &HitConfig) -> Option<Hit> {
    if let Some(id) = find_pin_near(scene, viewport, world, cfg) {
        return Some(Hit::Pin(id));
    }
    find_line_near(scene, viewport, world, cfg).map(Hit::Line)
}

/// Distance from `p` to the segment `a`–`b`.
///
/// Projects `p` onto the infinite line through the segment, clamps the
/// projection parameter to `[0, 1]`, and measures to the clamped point. A
/// zero-length segment degrades to the distance to `a`.
#[must_use]
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let (apx, apy) = (p.x - a.x, p.y - a.y);
    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * abx, a.y + t * aby))
}

fn pick<I, T>(candidates: I, threshold: f64, policy: HitPolicy) -> Option<T>
where
    I: Iterator<Item = (T, f64)>,
{
    let mut inside = candidates.filter(|(_, d)| *d < threshold);
    match policy {
        HitPolicy::FirstMatch => inside.next().map(|(id, _)| id),
        HitPolicy::Nearest => inside
            .fold(None, |best: Option<(T, f64)>, (id, d)| match best {
                Some((_, bd)) if bd <= d => best,
                _ => Some((id, d)),
            })
            .map(|(id, _)| id),
    }
}
