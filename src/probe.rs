//! Directional multi-sample contact probe.
//!
//! For each side of the actor a row of sample points is placed on that edge,
//! pushed outward by the actor's velocity along the probed axis plus a small
//! skin. A sample strictly inside any rectangle flags the side and records how
//! far the velocity-projected edge has crossed the rectangle's opposing edge.
//! Because the samples sit where the edge will be next tick, contact is
//! reported before the actor actually overlaps anything.

use glam::Vec2;

use crate::config::PhysicsConfig;
use crate::narrowphase::Narrowphase;
use crate::types::*;

/// Probe settings. Sample points span the inner two thirds of an edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactProbe {
    /// Samples along the vertical extent for left/right checks.
    pub side_samples: usize,
    pub above_samples: usize,
    pub below_samples: usize,
    /// Outward offset added to every sample.
    pub skin: f32,
}

impl Default for ContactProbe {
    fn default() -> Self {
        Self::from_config(&PhysicsConfig::default())
    }
}

impl ContactProbe {
    pub fn from_config(cfg: &PhysicsConfig) -> Self {
        Self {
            side_samples: cfg.side_samples,
            above_samples: cfg.above_samples,
            below_samples: cfg.below_samples,
            skin: cfg.contact_skin,
        }
    }

    /// Probe `actor` against every rectangle of every set.
    pub fn probe(&self, actor: &Actor, sets: &[&LayerGeometry]) -> ContactResult {
        let mut result = ContactResult::default();
        for set in sets {
            result.merge(&self.layer_contacts(actor, set));
        }
        result
    }

    /// Contacts against a single layer.
    pub fn layer_contacts(&self, actor: &Actor, set: &LayerGeometry) -> ContactResult {
        let mut result = ContactResult::default();
        for rect in &set.rects {
            self.probe_rect(actor, rect, &mut result);
        }
        result
    }

    fn probe_rect(&self, actor: &Actor, rect: &CollisionRect, out: &mut ContactResult) {
        let v = actor.velocity;

        let left_edge = actor.left() + v.x;
        let right_edge = actor.right() + v.x;
        for y in sample_span(actor.position.y, actor.size.y, self.side_samples) {
            if Narrowphase::point_in_rect(Vec2::new(left_edge - self.skin, y), rect) {
                out.left = true;
                out.left_distance = out.left_distance.max(penetration(rect.right() - left_edge));
            }
            if Narrowphase::point_in_rect(Vec2::new(right_edge + self.skin, y), rect) {
                out.right = true;
                out.right_distance = out.right_distance.max(penetration(right_edge - rect.left()));
            }
        }

        let top_edge = actor.top() + v.y;
        for x in sample_span(actor.position.x, actor.size.x, self.above_samples) {
            if Narrowphase::point_in_rect(Vec2::new(x, top_edge - self.skin), rect) {
                out.above = true;
                out.above_distance = out.above_distance.max(penetration(rect.bottom() - top_edge));
            }
        }

        let bottom_edge = actor.bottom() + v.y;
        for x in sample_span(actor.position.x, actor.size.x, self.below_samples) {
            if Narrowphase::point_in_rect(Vec2::new(x, bottom_edge + self.skin), rect) {
                out.below = true;
                out.below_distance = out.below_distance.max(penetration(bottom_edge - rect.top()));
            }
        }
    }
}

#[inline]
fn penetration(d: f32) -> f32 {
    d.max(0.0)
}

/// `count` evenly spaced coordinates over `center ± extent / 3`, ends included.
fn sample_span(center: f32, extent: f32, count: usize) -> impl Iterator<Item = f32> {
    let lo = center - extent / 3.0;
    let span = extent * 2.0 / 3.0;
    let step = if count > 1 { span / (count - 1) as f32 } else { 0.0 };
    (0..count).map(move |i| if count == 1 { center } else { lo + step * i as f32 })
}
