use glam::Vec2;

use crate::api::NarrowphaseApi;
use crate::narrowphase::Narrowphase;
use crate::types::*;

/// Collect every active pickup overlapping `actor` and drop it from `pickups`.
///
/// Returns the positions of the pickups collected this call, in their original
/// order. Touching boxes do not count as overlap.
pub fn collect_pickups(pickups: &mut Vec<Pickup>, actor: &Actor) -> Vec<Vec2> {
    let mut collected = Vec::new();
    for p in pickups.iter_mut().filter(|p| !p.collected) {
        if Narrowphase::overlap_aabb_aabb(
            p.position,
            p.size * 0.5,
            actor.position,
            actor.half_extents(),
        ) {
            p.collected = true;
            collected.push(p.position);
        }
    }
    pickups.retain(|p| !p.collected);
    collected
}
