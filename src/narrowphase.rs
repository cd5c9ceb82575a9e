use glam::Vec2;

use crate::api::NarrowphaseApi;
use crate::types::*;

/// Narrowphase primitive tests.
pub struct Narrowphase;

impl NarrowphaseApi for Narrowphase {
    fn point_in_aabb_strict(p: Vec2, c: Vec2, h: Vec2) -> bool {
        let min = c - h;
        let max = c + h;
        p.x > min.x && p.x < max.x && p.y > min.y && p.y < max.y
    }

    fn overlap_aabb_aabb(c0: Vec2, h0: Vec2, c1: Vec2, h1: Vec2) -> bool {
        // Overlap extents along axes
        let d = (c1 - c0).abs();
        let ox = (h0.x + h1.x) - d.x;
        let oy = (h0.y + h1.y) - d.y;
        ox > 0.0 && oy > 0.0
    }
}

impl Narrowphase {
    /// Rect-vs-point helper for compiled geometry.
    #[inline]
    pub fn point_in_rect(p: Vec2, rect: &CollisionRect) -> bool {
        Self::point_in_aabb_strict(p, rect.center, rect.half_extents())
    }
}
